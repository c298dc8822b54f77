//! Stack navigation between screens.
//!
//! The [`Navigator`] owns a registry of routes and a stack of live screen
//! instances. The bottom entry (the root) is created at build time and can
//! never be popped. Screens below the top keep their state while covered;
//! popping a screen drops it along with everything it owned.
//!
//! Screens talk back to each other through [`ScreenMessage`]s addressed by
//! [`ScreenKey`]. A callback handed to another route captures the sender and
//! the key of the screen that created it, so messages always reach the
//! instance that asked for them, or are discarded if it has since been popped.

use super::actions::Action;
use super::component::Screen;
use crate::constants::{BACK_HINT, HEADER_HEIGHT, TITLE_ADD_TODO, TITLE_TODO_LIST};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use std::fmt;
use std::rc::Rc;
use thiserror::Error;
use tokio::sync::mpsc;

/// Named routes known to the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RouteName {
    TodoList,
    AddTodo,
}

impl RouteName {
    pub fn title(&self) -> &'static str {
        match self {
            RouteName::TodoList => TITLE_TODO_LIST,
            RouteName::AddTodo => TITLE_ADD_TODO,
        }
    }
}

impl fmt::Display for RouteName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RouteName::TodoList => "TodoList",
            RouteName::AddTodo => "AddTodo",
        };
        f.write_str(name)
    }
}

/// Callback an entry screen invokes with the submitted text
pub type TodoCallback = Rc<dyn Fn(String)>;

/// Parameters passed to a route when it is opened
#[derive(Clone, Default)]
pub enum RouteParams {
    #[default]
    None,
    AddTodo {
        on_submit: TodoCallback,
    },
}

impl fmt::Debug for RouteParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RouteParams::None => f.write_str("None"),
            RouteParams::AddTodo { .. } => f.debug_struct("AddTodo").finish_non_exhaustive(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NavigationError {
    #[error("no screen registered for route {0}")]
    UnknownRoute(RouteName),
    #[error("already at the root screen")]
    AtRoot,
    #[error("navigator has no routes registered")]
    NoRoutes,
    #[error("route {0} was opened without its required parameters")]
    MissingParams(RouteName),
    #[error("factory for route {route} built a {screen} screen")]
    RouteMismatch { route: RouteName, screen: RouteName },
}

/// Identifies one screen instance for the lifetime of the navigator
pub type ScreenKey = u64;

/// An action addressed to a specific screen instance
#[derive(Debug)]
pub struct ScreenMessage {
    pub target: ScreenKey,
    pub action: Action,
}

pub type MessageSender = mpsc::UnboundedSender<ScreenMessage>;

/// Everything a factory needs to build a screen
pub struct ScreenContext {
    pub key: ScreenKey,
    pub params: RouteParams,
    pub sender: MessageSender,
}

pub type ScreenFactory = fn(ScreenContext) -> Result<Box<dyn Screen>, NavigationError>;

struct StackEntry {
    key: ScreenKey,
    route: RouteName,
    screen: Box<dyn Screen>,
}

pub struct NavigatorBuilder {
    routes: Vec<(RouteName, ScreenFactory)>,
    initial_route: Option<RouteName>,
    show_header: bool,
}

impl NavigatorBuilder {
    /// Register a route. Registering the same name twice replaces the factory.
    pub fn route(mut self, name: RouteName, factory: ScreenFactory) -> Self {
        self.routes.retain(|(existing, _)| *existing != name);
        self.routes.push((name, factory));
        self
    }

    /// Route placed at the bottom of the stack; defaults to the first registered
    pub fn initial_route(mut self, name: RouteName) -> Self {
        self.initial_route = Some(name);
        self
    }

    pub fn show_header(mut self, show: bool) -> Self {
        self.show_header = show;
        self
    }

    pub fn build(self) -> Result<Navigator, NavigationError> {
        let initial = match self.initial_route {
            Some(name) => name,
            None => self.routes.first().map(|(name, _)| *name).ok_or(NavigationError::NoRoutes)?,
        };

        let (sender, receiver) = mpsc::unbounded_channel();
        let mut navigator = Navigator {
            routes: self.routes,
            root: None,
            stack: Vec::new(),
            next_key: 0,
            sender,
            receiver,
            show_header: self.show_header,
        };

        let mut root = navigator.create_entry(initial, RouteParams::None)?;
        root.screen.on_focus();
        log::info!("Navigator ready at {}", initial);
        navigator.root = Some(root);
        Ok(navigator)
    }
}

pub struct Navigator {
    routes: Vec<(RouteName, ScreenFactory)>,
    // Always `Some` once built
    root: Option<StackEntry>,
    stack: Vec<StackEntry>,
    next_key: ScreenKey,
    sender: MessageSender,
    receiver: mpsc::UnboundedReceiver<ScreenMessage>,
    show_header: bool,
}

impl Navigator {
    pub fn builder() -> NavigatorBuilder {
        NavigatorBuilder {
            routes: Vec::new(),
            initial_route: None,
            show_header: true,
        }
    }

    fn create_entry(&mut self, route: RouteName, params: RouteParams) -> Result<StackEntry, NavigationError> {
        let factory = self
            .routes
            .iter()
            .find(|(name, _)| *name == route)
            .map(|(_, factory)| *factory)
            .ok_or(NavigationError::UnknownRoute(route))?;

        let key = self.next_key;
        let mut screen = factory(ScreenContext {
            key,
            params,
            sender: self.sender.clone(),
        })?;
        if screen.route() != route {
            return Err(NavigationError::RouteMismatch {
                route,
                screen: screen.route(),
            });
        }
        if let Err(e) = screen.init() {
            log::warn!("Screen {} failed to initialise: {:#}", route, e);
        }
        self.next_key += 1;

        Ok(StackEntry { key, route, screen })
    }

    fn entries(&self) -> impl Iterator<Item = &StackEntry> {
        self.root.iter().chain(self.stack.iter())
    }

    fn entries_mut(&mut self) -> impl Iterator<Item = &mut StackEntry> {
        self.root.iter_mut().chain(self.stack.iter_mut())
    }

    fn top_mut(&mut self) -> Option<&mut StackEntry> {
        match self.stack.last_mut() {
            Some(entry) => Some(entry),
            None => self.root.as_mut(),
        }
    }

    /// Open a route.
    ///
    /// If the route is already on the stack, everything above it is popped and
    /// `params` are ignored. Otherwise a new screen is pushed.
    pub fn navigate(&mut self, route: RouteName, params: RouteParams) -> Result<(), NavigationError> {
        let existing = self.entries().position(|entry| entry.route == route);
        if let Some(position) = existing {
            log::debug!("navigate({}): already on stack at depth {}", route, position + 1);
            self.pop_to_depth(position + 1);
            return Ok(());
        }
        self.push(route, params)
    }

    /// Push a fresh instance of a route, even if one is already on the stack
    pub fn push(&mut self, route: RouteName, params: RouteParams) -> Result<(), NavigationError> {
        let mut entry = self.create_entry(route, params)?;

        if let Some(top) = self.top_mut() {
            top.screen.on_blur();
        }
        entry.screen.on_focus();
        self.stack.push(entry);

        log::info!("Pushed {} (depth {})", route, self.depth());
        Ok(())
    }

    /// Pop the top screen
    pub fn go_back(&mut self) -> Result<(), NavigationError> {
        let popped = self.stack.pop().ok_or(NavigationError::AtRoot)?;
        log::info!("Popped {} (depth {})", popped.route, self.depth());
        drop(popped);

        if let Some(top) = self.top_mut() {
            top.screen.on_focus();
        }
        Ok(())
    }

    fn pop_to_depth(&mut self, depth: usize) {
        let keep = depth.saturating_sub(1);
        if self.stack.len() <= keep {
            return;
        }
        self.stack.truncate(keep);
        if let Some(top) = self.top_mut() {
            top.screen.on_focus();
        }
    }

    pub fn can_go_back(&self) -> bool {
        !self.stack.is_empty()
    }

    /// Number of screens on the stack, root included
    pub fn depth(&self) -> usize {
        self.entries().count()
    }

    /// Route names from the bottom of the stack to the top
    pub fn routes(&self) -> Vec<RouteName> {
        self.entries().map(|entry| entry.route).collect()
    }

    pub fn current_route(&self) -> RouteName {
        match self.stack.last() {
            Some(entry) => entry.route,
            None => self.root.as_ref().map(|entry| entry.route).unwrap_or(RouteName::TodoList),
        }
    }

    pub fn current_mut(&mut self) -> Option<&mut dyn Screen> {
        match self.top_mut() {
            Some(entry) => Some(entry.screen.as_mut()),
            None => None,
        }
    }

    /// The bottom screen, which is never popped
    pub fn root_mut(&mut self) -> Option<&mut dyn Screen> {
        match self.root.as_mut() {
            Some(entry) => Some(entry.screen.as_mut()),
            None => None,
        }
    }

    /// Screen instance by key, if it is still on the stack
    pub fn screen_mut(&mut self, key: ScreenKey) -> Option<&mut dyn Screen> {
        match self.entries_mut().find(|entry| entry.key == key) {
            Some(entry) => Some(entry.screen.as_mut()),
            None => None,
        }
    }

    /// The root screen, if it is of type `T`
    pub fn root_screen<T: Screen + 'static>(&self) -> Option<&T> {
        self.root.as_ref()?.screen.as_any().downcast_ref::<T>()
    }

    /// The top screen, if it is of type `T`
    pub fn current_screen<T: Screen + 'static>(&self) -> Option<&T> {
        self.stack.last().or(self.root.as_ref())?.screen.as_any().downcast_ref::<T>()
    }

    pub fn status_hint(&self) -> &'static str {
        self.stack
            .last()
            .or(self.root.as_ref())
            .map(|entry| entry.screen.status_hint())
            .unwrap_or_default()
    }

    /// Forward a key press to the top screen
    pub fn handle_key_events(&mut self, key: crossterm::event::KeyEvent) -> Action {
        match self.current_mut() {
            Some(screen) => screen.handle_key_events(key),
            None => Action::None,
        }
    }

    /// Deliver queued screen messages.
    ///
    /// Returns how many were delivered, and whatever the receiving screens
    /// handed back other than `Action::None`.
    pub fn process_messages(&mut self) -> (usize, Vec<Action>) {
        let mut delivered = 0;
        let mut follow_ups = Vec::new();

        while let Ok(message) = self.receiver.try_recv() {
            match self.screen_mut(message.target) {
                Some(screen) => {
                    delivered += 1;
                    let result = screen.update(message.action);
                    if !result.is_none() {
                        follow_ups.push(result);
                    }
                }
                None => {
                    log::debug!("Discarding {:?}: screen {} is gone", message.action, message.target);
                }
            }
        }

        (delivered, follow_ups)
    }

    /// Render the header and the top screen
    pub fn render(&mut self, f: &mut Frame, rect: Rect) {
        let body = if self.show_header {
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Length(HEADER_HEIGHT), Constraint::Min(0)])
                .split(rect);
            f.render_widget(self.header(), chunks[0]);
            chunks[1]
        } else {
            rect
        };

        if let Some(screen) = self.current_mut() {
            screen.render(f, body);
        }
    }

    fn header(&self) -> Paragraph<'static> {
        let mut spans = Vec::new();
        if self.can_go_back() {
            spans.push(Span::styled(BACK_HINT, Style::default().fg(Color::DarkGray)));
            spans.push(Span::raw("  "));
        }
        spans.push(Span::styled(
            self.current_route().title(),
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ));
        Paragraph::new(Line::from(spans))
    }
}
