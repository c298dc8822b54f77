//! Layout management and calculations

use crate::constants::STATUS_BAR_HEIGHT;
use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Drawable region of the terminal after padding is taken out
pub struct SafeArea;

impl SafeArea {
    /// Shrink `area` by `padding` cells on every side.
    ///
    /// On terminals too small for the padding the result collapses to zero
    /// width or height rather than underflowing.
    #[must_use]
    pub fn inset(area: Rect, padding: u16) -> Rect {
        let horizontal = padding.min(area.width / 2);
        let vertical = padding.min(area.height / 2);
        Rect::new(
            area.x + horizontal,
            area.y + vertical,
            area.width.saturating_sub(horizontal * 2),
            area.height.saturating_sub(vertical * 2),
        )
    }
}

/// Manages layout calculations and constraints for the UI
pub struct LayoutManager;

impl LayoutManager {
    /// Split the terminal into the padded content area and the status bar line
    #[must_use]
    pub fn main_layout(area: Rect, padding: u16) -> (Rect, Rect) {
        let content_height = area.height.saturating_sub(STATUS_BAR_HEIGHT);
        let content_area = Rect::new(area.x, area.y, area.width, content_height);
        let status_area = Rect::new(
            area.x,
            area.y + content_height,
            area.width,
            STATUS_BAR_HEIGHT.min(area.height),
        );

        (SafeArea::inset(content_area, padding), status_area)
    }

    /// Stack a fixed-height row above a flexible body
    #[must_use]
    pub fn fixed_top(area: Rect, top_height: u16) -> (Rect, Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(top_height), Constraint::Min(0)])
            .split(area);
        (chunks[0], chunks[1])
    }

    /// Calculate a centered rectangle within the given area
    #[must_use]
    pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
        let popup_layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Percentage((100 - percent_y) / 2),
                Constraint::Percentage(percent_y),
                Constraint::Percentage((100 - percent_y) / 2),
            ])
            .split(r);

        Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage((100 - percent_x) / 2),
                Constraint::Percentage(percent_x),
                Constraint::Percentage((100 - percent_x) / 2),
            ])
            .split(popup_layout[1])[1]
    }
}
