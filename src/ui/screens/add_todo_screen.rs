use crate::constants::{ADD_TODO_INPUT_TITLE, INPUT_HEIGHT, STATUS_HINT_ADD_TODO};
use crate::ui::components::common::{create_input_paragraph, create_instructions_paragraph, shortcuts};
use crate::ui::core::navigation::{NavigationError, RouteName, RouteParams, ScreenContext, TodoCallback};
use crate::ui::core::{Action, Component, Screen};
use crate::ui::layout::LayoutManager;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{layout::Rect, Frame};
use std::any::Any;

/// Entry screen: one line of text, handed to `on_submit` on Enter.
pub struct AddTodoScreen {
    on_submit: TodoCallback,
    pub input_buffer: String,
    pub cursor_position: usize,
}

impl AddTodoScreen {
    pub fn new(on_submit: TodoCallback) -> Self {
        Self {
            on_submit,
            input_buffer: String::new(),
            cursor_position: 0,
        }
    }

    pub fn factory(ctx: ScreenContext) -> Result<Box<dyn Screen>, NavigationError> {
        match ctx.params {
            RouteParams::AddTodo { on_submit } => Ok(Box::new(Self::new(on_submit))),
            RouteParams::None => Err(NavigationError::MissingParams(RouteName::AddTodo)),
        }
    }

    fn byte_index(&self, char_index: usize) -> usize {
        self.input_buffer
            .char_indices()
            .nth(char_index)
            .map(|(index, _)| index)
            .unwrap_or(self.input_buffer.len())
    }

    fn char_count(&self) -> usize {
        self.input_buffer.chars().count()
    }

    fn handle_submit(&mut self) -> Action {
        if self.input_buffer.trim().is_empty() {
            return Action::None;
        }

        let text = std::mem::take(&mut self.input_buffer);
        self.cursor_position = 0;
        (self.on_submit)(text);
        Action::GoBack
    }
}

impl Component for AddTodoScreen {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Esc => Action::GoBack,
            KeyCode::Enter => self.handle_submit(),
            KeyCode::Char(_) if key.modifiers.contains(KeyModifiers::CONTROL) => Action::None,
            KeyCode::Char(c) => {
                let byte_pos = self.byte_index(self.cursor_position);
                self.input_buffer.insert(byte_pos, c);
                self.cursor_position += 1;
                Action::None
            }
            KeyCode::Backspace => {
                if self.cursor_position > 0 {
                    self.cursor_position -= 1;
                    let byte_pos = self.byte_index(self.cursor_position);
                    self.input_buffer.remove(byte_pos);
                }
                Action::None
            }
            KeyCode::Delete => {
                if self.cursor_position < self.char_count() {
                    let byte_pos = self.byte_index(self.cursor_position);
                    self.input_buffer.remove(byte_pos);
                }
                Action::None
            }
            KeyCode::Left => {
                self.cursor_position = self.cursor_position.saturating_sub(1);
                Action::None
            }
            KeyCode::Right => {
                if self.cursor_position < self.char_count() {
                    self.cursor_position += 1;
                }
                Action::None
            }
            KeyCode::Home => {
                self.cursor_position = 0;
                Action::None
            }
            KeyCode::End => {
                self.cursor_position = self.char_count();
                Action::None
            }
            _ => Action::None,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let (input_area, rest) = LayoutManager::fixed_top(rect, INPUT_HEIGHT);
        let (instructions_area, _) = LayoutManager::fixed_top(rest, 1);

        f.render_widget(
            create_input_paragraph(&self.input_buffer, self.cursor_position, ADD_TODO_INPUT_TITLE),
            input_area,
        );
        f.render_widget(
            create_instructions_paragraph(&[shortcuts::ENTER_SAVE, shortcuts::SEPARATOR, shortcuts::ESC_BACK]),
            instructions_area,
        );
    }
}

impl Screen for AddTodoScreen {
    fn route(&self) -> RouteName {
        RouteName::AddTodo
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn status_hint(&self) -> &'static str {
        STATUS_HINT_ADD_TODO
    }
}
