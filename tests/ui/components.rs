use ratatui::{backend::TestBackend, layout::Rect, Terminal};
use stacktodo::logger::Logger;
use stacktodo::ui::components::{LogPanel, StatusBar};

fn draw<F: FnOnce(&mut ratatui::Frame, Rect)>(width: u16, height: u16, render: F) -> String {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal
        .draw(|f| {
            let area = f.area();
            render(f, area);
        })
        .unwrap();

    let buffer = terminal.backend().buffer();
    buffer
        .content
        .chunks(buffer.area.width as usize)
        .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn test_status_bar_shows_hint() {
    let screen = draw(60, 1, |f, area| StatusBar::render(f, area, "a: add", false));
    assert!(screen.contains("a: add"));
}

#[test]
fn test_status_bar_while_logs_visible() {
    let screen = draw(60, 1, |f, area| StatusBar::render(f, area, "a: add", true));
    assert!(!screen.contains("a: add"));
    assert!(screen.contains("close logs"));
}

#[test]
fn test_log_panel_lists_entries() {
    let logger = Logger::new();
    logger.log("navigator ready".to_string());

    let screen = draw(80, 20, |f, area| LogPanel::render(f, area, &logger));
    assert!(screen.contains("Logs"));
    assert!(screen.contains("navigator ready"));
}

#[test]
fn test_log_panel_empty() {
    let logger = Logger::new();
    let screen = draw(80, 20, |f, area| LogPanel::render(f, area, &logger));
    assert!(screen.contains("No logs yet"));
}
