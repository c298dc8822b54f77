use crate::constants::{ADD_TODO_BUTTON_LABEL, BUTTON_HEIGHT, EMPTY_LIST_PLACEHOLDER, STATUS_HINT_TODO_LIST};
use crate::todo::TodoList;
use crate::ui::components::common::create_button;
use crate::ui::components::ScrollbarHelper;
use crate::ui::core::navigation::{
    MessageSender, NavigationError, RouteName, RouteParams, ScreenContext, ScreenKey, ScreenMessage, TodoCallback,
};
use crate::ui::core::{Action, Component, Screen};
use crate::ui::layout::LayoutManager;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};
use std::{any::Any, rc::Rc};

/// Root screen: the "Add To-Do" button above the list of items.
///
/// The list lives here and only here. Entry screens never touch it directly;
/// they get a callback that posts [`Action::AppendTodo`] back to this
/// instance through the navigator.
pub struct TodoListScreen {
    key: ScreenKey,
    sender: MessageSender,
    todos: TodoList,
    pub selected_index: usize,
    pub list_state: ListState,
    scrollbar: ScrollbarHelper,
    focused: bool,
}

impl TodoListScreen {
    pub fn new(key: ScreenKey, sender: MessageSender) -> Self {
        Self {
            key,
            sender,
            todos: TodoList::new(),
            selected_index: 0,
            list_state: ListState::default(),
            scrollbar: ScrollbarHelper::new(),
            focused: false,
        }
    }

    pub fn factory(ctx: ScreenContext) -> Result<Box<dyn Screen>, NavigationError> {
        Ok(Box::new(Self::new(ctx.key, ctx.sender)))
    }

    pub fn todos(&self) -> &TodoList {
        &self.todos
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    /// Build the callback handed to the entry screen
    pub fn add_todo_callback(&self) -> TodoCallback {
        let sender = self.sender.clone();
        let target = self.key;
        Rc::new(move |text: String| {
            let message = ScreenMessage {
                target,
                action: Action::AppendTodo(text),
            };
            if sender.send(message).is_err() {
                log::warn!("Dropped new to-do: navigator is no longer listening");
            }
        })
    }

    fn open_add_todo(&self) -> Action {
        log::debug!("Add To-Do pressed");
        Action::Navigate(
            RouteName::AddTodo,
            RouteParams::AddTodo {
                on_submit: self.add_todo_callback(),
            },
        )
    }

    fn update_list_state(&mut self) {
        if self.todos.is_empty() {
            self.selected_index = 0;
            self.list_state.select(None);
        } else {
            if self.selected_index >= self.todos.len() {
                self.selected_index = self.todos.len() - 1;
            }
            self.list_state.select(Some(self.selected_index));
        }
    }

    fn select_next(&mut self) {
        if self.selected_index + 1 < self.todos.len() {
            self.selected_index += 1;
        }
        self.update_list_state();
    }

    fn select_previous(&mut self) {
        self.selected_index = self.selected_index.saturating_sub(1);
        self.update_list_state();
    }

    fn select_last(&mut self) {
        self.selected_index = self.todos.len().saturating_sub(1);
        self.update_list_state();
    }

    fn render_list(&mut self, f: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(format!(" To-Dos ({}) ", self.todos.len()));

        if self.todos.is_empty() {
            let placeholder = Paragraph::new(Line::from(Span::styled(
                EMPTY_LIST_PLACEHOLDER,
                Style::default().fg(Color::DarkGray).add_modifier(Modifier::ITALIC),
            )))
            .alignment(Alignment::Center)
            .block(block);
            f.render_widget(placeholder, area);
            return;
        }

        let (list_area, scrollbar_area) = ScrollbarHelper::calculate_areas(area, self.todos.len());
        let items: Vec<ListItem> = self
            .todos
            .iter()
            .map(|item| ListItem::new(Line::from(vec![Span::raw("• "), Span::raw(item.text.clone())])))
            .collect();

        let list = List::new(items)
            .block(block)
            .highlight_style(Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD));

        f.render_stateful_widget(list, list_area, &mut self.list_state);

        let viewport = area.height.saturating_sub(2) as usize;
        self.scrollbar
            .update_state(self.todos.len(), self.selected_index, Some(viewport));
        self.scrollbar.render(f, scrollbar_area);
    }
}

impl Component for TodoListScreen {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Char('a') | KeyCode::Enter => self.open_add_todo(),
            KeyCode::Down | KeyCode::Char('j') => {
                self.select_next();
                Action::None
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.select_previous();
                Action::None
            }
            KeyCode::Home => {
                self.selected_index = 0;
                self.update_list_state();
                Action::None
            }
            KeyCode::End => {
                self.select_last();
                Action::None
            }
            KeyCode::Char('G') => Action::ToggleLogs,
            KeyCode::Char('q') => Action::Quit,
            _ => Action::None,
        }
    }

    fn update(&mut self, action: Action) -> Action {
        match action {
            Action::AppendTodo(text) => {
                let id = self.todos.add(text).id;
                log::info!("Added to-do {} ({} total)", id, self.todos.len());
                self.select_last();
                Action::None
            }
            _ => action,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let (button_area, list_area) = LayoutManager::fixed_top(rect, BUTTON_HEIGHT);
        f.render_widget(create_button(ADD_TODO_BUTTON_LABEL, self.focused), button_area);
        self.render_list(f, list_area);
    }

    fn on_focus(&mut self) {
        self.focused = true;
    }

    fn on_blur(&mut self) {
        self.focused = false;
    }
}

impl Screen for TodoListScreen {
    fn route(&self) -> RouteName {
        RouteName::TodoList
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn status_hint(&self) -> &'static str {
        STATUS_HINT_TODO_LIST
    }
}
