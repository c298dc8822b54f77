use crate::config::Config;
use crate::logger::Logger;
use crate::todo::TodoList;
use crate::ui::components::{LogPanel, StatusBar};
use crate::ui::core::{
    actions::Action,
    event_handler::EventType,
    navigation::{NavigationError, Navigator, RouteName},
};
use crate::ui::layout::LayoutManager;
use crate::ui::screens::{AddTodoScreen, TodoListScreen};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{layout::Rect, Frame};

/// Application state separate from UI concerns
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub show_logs: bool,
    pub padding: u16,
}

/// Root container: owns the navigator and the safe drawing area around it.
pub struct AppComponent {
    navigator: Navigator,
    state: AppState,
    logger: Logger,
    should_quit: bool,
}

impl AppComponent {
    pub fn new(config: &Config, logger: Logger) -> Result<Self, NavigationError> {
        let navigator = Navigator::builder()
            .route(RouteName::TodoList, TodoListScreen::factory)
            .route(RouteName::AddTodo, AddTodoScreen::factory)
            .initial_route(RouteName::TodoList)
            .show_header(config.ui.show_header)
            .build()?;

        Ok(Self {
            navigator,
            state: AppState {
                show_logs: false,
                padding: config.ui.padding,
            },
            logger,
            should_quit: false,
        })
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn navigator(&self) -> &Navigator {
        &self.navigator
    }

    /// The list owned by the root screen
    pub fn todos(&self) -> Option<&TodoList> {
        self.navigator.root_screen::<TodoListScreen>().map(TodoListScreen::todos)
    }

    /// Process an event through the component hierarchy.
    ///
    /// Returns true when the screen needs redrawing.
    pub fn handle_event(&mut self, event_type: EventType) -> bool {
        match event_type {
            EventType::Key(key) => {
                self.handle_key(key);
                true
            }
            EventType::Resize(_, _) => true,
            EventType::Tick => self.process_messages(),
            EventType::Other => false,
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        let action = match self.handle_global_key(key) {
            Some(action) => action,
            None => self.navigator.handle_key_events(key),
        };
        self.dispatch(action);
    }

    /// Keys handled above the screens. `None` lets the top screen see the key.
    fn handle_global_key(&mut self, key: KeyEvent) -> Option<Action> {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            log::info!("Global key: Ctrl+C - quitting application");
            return Some(Action::Quit);
        }

        if self.state.show_logs {
            return Some(match key.code {
                KeyCode::Char('G') | KeyCode::Esc => Action::ToggleLogs,
                KeyCode::Char('q') => Action::Quit,
                _ => Action::None,
            });
        }

        None
    }

    /// Apply an action, then deliver anything the screens queued for each other
    pub fn dispatch(&mut self, action: Action) {
        match action {
            Action::Navigate(route, params) => {
                if let Err(e) = self.navigator.navigate(route, params) {
                    log::warn!("Navigation to {} failed: {}", route, e);
                }
            }
            Action::GoBack => {
                if let Err(e) = self.navigator.go_back() {
                    log::debug!("Back ignored: {}", e);
                }
            }
            Action::ToggleLogs => {
                self.state.show_logs = !self.state.show_logs;
            }
            Action::Quit => {
                log::info!("Quitting");
                self.should_quit = true;
            }
            Action::AppendTodo(_) => {
                // The list lives on the root screen, whatever is on top
                if let Some(screen) = self.navigator.root_mut() {
                    let leftover = screen.update(action);
                    if !leftover.is_none() {
                        log::debug!("Unhandled action {:?}", leftover);
                    }
                }
            }
            Action::None => {}
        }

        self.process_messages();
    }

    /// Drain queued screen messages. Returns true if any were delivered.
    pub fn process_messages(&mut self) -> bool {
        let (delivered, follow_ups) = self.navigator.process_messages();
        for action in follow_ups {
            self.dispatch(action);
        }
        delivered > 0
    }

    pub fn render(&mut self, f: &mut Frame, area: Rect) {
        let (content_area, status_area) = LayoutManager::main_layout(area, self.state.padding);

        self.navigator.render(f, content_area);
        StatusBar::render(f, status_area, self.navigator.status_hint(), self.state.show_logs);

        if self.state.show_logs {
            LogPanel::render(f, area, &self.logger);
        }
    }
}
