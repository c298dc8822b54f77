//! Core UI functionality for stacktodo.
//!
//! This module contains the building blocks every screen relies on.
//!
//! # Module Components
//!
//! - [`actions`] - Action definitions and UI state transitions
//! - [`component`] - Component and screen traits
//! - [`event_handler`] - Terminal event polling
//! - [`navigation`] - The navigation stack and inter-screen messaging
//!
//! # Architecture
//!
//! 1. **Screens** implement [`Screen`] and live on the [`Navigator`] stack
//! 2. **Actions** describe what a key press or message asks for
//! 3. **Events** come from the [`EventHandler`] and are routed to the top screen
//! 4. **Messages** carry callback results back to the screen that asked for them

pub mod actions;
pub mod component;
pub mod event_handler;
pub mod navigation;

pub use actions::Action;
pub use component::{Component, Screen};
pub use event_handler::{EventHandler, EventType};
pub use navigation::{NavigationError, Navigator, RouteName, RouteParams};
