//! UI Components
//!
//! Leptos components for the grocery list.

mod app_bar;
mod new_todo_form;
mod todo_list;
mod todos_counter;
mod user_menu;

pub use app_bar::AppBar;
pub use new_todo_form::NewTodoForm;
pub use todo_list::TodoList;
pub use todos_counter::TodosCounter;
pub use user_menu::UserMenu;
