//! Status bar component

use crate::constants::STATUS_HINT_SEPARATOR;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Style},
    widgets::{Block, Paragraph},
    Frame,
};

/// Status bar component
pub struct StatusBar;

impl StatusBar {
    /// Render the status bar with the hints for the current screen
    pub fn render(f: &mut Frame, area: Rect, hint: &str, logs_visible: bool) {
        let (status_text, status_color) = if logs_visible {
            ("G/Esc: close logs".to_string(), Color::Yellow)
        } else {
            (Self::fit_hint(hint, area.width as usize), Color::Gray)
        };

        let status_bar = Paragraph::new(status_text)
            .block(Block::default())
            .alignment(Alignment::Center)
            .style(Style::default().fg(status_color));

        f.render_widget(status_bar, area);
    }

    /// Drop middle hint segments until the hint fits in `width` columns.
    ///
    /// The first and last segments are kept so the primary action and the
    /// quit key stay visible.
    pub fn fit_hint(hint: &str, width: usize) -> String {
        let mut segments: Vec<&str> = hint.split(STATUS_HINT_SEPARATOR).collect();
        let mut text = segments.join(STATUS_HINT_SEPARATOR);

        while text.chars().count() > width && segments.len() > 2 {
            segments.remove(segments.len() - 2);
            text = segments.join(STATUS_HINT_SEPARATOR);
        }

        text
    }
}
