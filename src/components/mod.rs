//! UI Components
//!
//! Leptos components rendering the `RenderModel` and wiring DOM events to
//! store operations.

mod footer;
mod new_todo_input;
mod todo_list;
mod todo_row;
mod toggle_all;

pub use footer::Footer;
pub use new_todo_input::NewTodoInput;
pub use todo_list::TodoList;
pub use todo_row::TodoRow;
pub use toggle_all::ToggleAll;
