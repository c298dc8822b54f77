use super::actions::Action;
use super::navigation::RouteName;
use crossterm::event::KeyEvent;
use ratatui::{layout::Rect, Frame};
use std::any::Any;

pub trait Component {
    fn init(&mut self) -> anyhow::Result<()> {
        Ok(())
    }

    fn handle_key_events(&mut self, key: KeyEvent) -> Action;

    fn update(&mut self, action: Action) -> Action {
        // Default implementation passes action through
        action
    }

    fn render(&mut self, f: &mut Frame, rect: Rect);

    // Optional lifecycle methods
    fn on_focus(&mut self) {}
    fn on_blur(&mut self) {}
}

/// A component that can sit on the navigation stack
pub trait Screen: Component {
    fn route(&self) -> RouteName;

    /// Keyboard hints shown in the status bar while this screen is on top
    fn status_hint(&self) -> &'static str;

    fn as_any(&self) -> &dyn Any;
}
