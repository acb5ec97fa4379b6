//! Repository Layer
//!
//! Persistence of the whole todo list under a namespace key.
//! Implementations: browser localStorage and an in-memory map.

mod codec;
mod memory;
mod traits;
mod web_storage;

#[cfg(test)]
mod tests;

pub use codec::{decode, encode};
pub use memory::MemoryRepository;
pub use traits::{RepositoryError, RepositoryResult, TodoRepository};
pub use web_storage::WebStorageRepository;
