//! Constants used throughout the application
//!
//! UI text, default values and limits live here so screens and config agree.

// Route titles
pub const TITLE_TODO_LIST: &str = "To-Do List";
pub const TITLE_ADD_TODO: &str = "Add To-Do";

// Button and field labels
pub const ADD_TODO_BUTTON_LABEL: &str = "Add To-Do";
pub const ADD_TODO_INPUT_TITLE: &str = "What needs doing?";
pub const EMPTY_LIST_PLACEHOLDER: &str = "No to-dos yet";
pub const LOG_PANEL_TITLE: &str = " Logs ";
pub const BACK_HINT: &str = "← Esc";

// Status bar hints, segments joined by STATUS_HINT_SEPARATOR
pub const STATUS_HINT_SEPARATOR: &str = " • ";
pub const STATUS_HINT_TODO_LIST: &str = "a: add • ↑↓: scroll • G: logs • q: quit";
pub const STATUS_HINT_ADD_TODO: &str = "Enter: save • Esc: back • Ctrl+C: quit";

// Layout
pub const DEFAULT_PADDING: u16 = 1;
pub const MAX_PADDING: u16 = 10;
pub const HEADER_HEIGHT: u16 = 1;
pub const STATUS_BAR_HEIGHT: u16 = 1;
pub const BUTTON_HEIGHT: u16 = 3;
pub const INPUT_HEIGHT: u16 = 3;

// Event loop
pub const DEFAULT_TICK_RATE_MS: u64 = 100;
pub const MIN_TICK_RATE_MS: u64 = 10;
pub const MAX_TICK_RATE_MS: u64 = 1000;

// Logging
pub const LOG_BUFFER_CAPACITY: usize = 500;
pub const DEFAULT_LOG_LEVEL: &str = "info";

// Files
pub const APP_DIR_NAME: &str = "stacktodo";
pub const LOCAL_CONFIG_FILE: &str = "stacktodo.toml";
pub const CONFIG_FILE_NAME: &str = "config.toml";
pub const LOG_FILE_NAME: &str = "stacktodo.log";
pub const CONFIG_GENERATED: &str = "✅ Configuration written to";
