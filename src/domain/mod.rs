//! Domain Layer
//!
//! Todo records, the positional id scheme and the view filter.
//! No browser APIs in here, so everything is testable natively.

mod error;
mod filter;
mod todo;

pub use error::{DomainError, DomainResult};
pub use filter::Filter;
pub use todo::{TodoId, TodoItem};
