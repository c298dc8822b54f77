//! Overlay listing recent log lines, newest first.

use crate::constants::LOG_PANEL_TITLE;
use crate::logger::Logger;
use crate::ui::layout::LayoutManager;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Style},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
    Frame,
};

pub struct LogPanel;

impl LogPanel {
    pub fn render(f: &mut Frame, area: Rect, logger: &Logger) {
        let panel_area = LayoutManager::centered_rect(90, 80, area);
        f.render_widget(Clear, panel_area);

        let visible_height = panel_area.height.saturating_sub(2) as usize;
        let logs = logger.get_logs();
        let content = if logs.is_empty() {
            "No logs yet".to_string()
        } else {
            logs.into_iter().take(visible_height).collect::<Vec<_>>().join("\n")
        };

        let paragraph = Paragraph::new(content)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .title(LOG_PANEL_TITLE)
                    .title_alignment(Alignment::Center),
            )
            .style(Style::default().fg(Color::White));

        f.render_widget(paragraph, panel_area);
    }
}
