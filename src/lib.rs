//! stacktodo - a terminal to-do list on a two-screen navigation stack
//!
//! The list screen sits at the root of the stack. Its "Add To-Do" button
//! pushes an entry screen and hands it a callback; submitting text there calls
//! the callback, which appends to the list, and pops back. Nothing is
//! persisted: the list lives exactly as long as the root screen.
//!
//! # Modules
//!
//! * [`config`] - Application configuration management
//! * [`logger`] - Log capture for the in-app panel and optional log file
//! * [`todo`] - The to-do item and list types
//! * [`ui`] - Terminal user interface, navigation and screens

/// Configuration module for managing application settings
pub mod config;

/// Application constants and default values
pub mod constants;

/// Logging utilities for debugging and error tracking
pub mod logger;

/// To-do items and the ordered list
pub mod todo;

/// Terminal user interface components and rendering
pub mod ui;

pub use todo::{TodoItem, TodoList};
