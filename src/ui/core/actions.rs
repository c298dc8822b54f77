use super::navigation::{RouteName, RouteParams};

#[derive(Debug, Clone, Default)]
pub enum Action {
    // Navigation
    Navigate(RouteName, RouteParams),
    GoBack,

    // To-do operations
    AppendTodo(String),

    // UI operations
    ToggleLogs,

    // App control
    Quit,
    #[default]
    None,
}

impl Action {
    pub fn is_none(&self) -> bool {
        matches!(self, Action::None)
    }
}
