//! Screens that can be placed on the navigation stack

pub mod add_todo_screen;
pub mod todo_list_screen;

pub use add_todo_screen::AddTodoScreen;
pub use todo_list_screen::TodoListScreen;
