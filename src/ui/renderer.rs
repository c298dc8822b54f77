use crate::config::Config;
use crate::logger::Logger;
use crate::ui::app_component::AppComponent;
use crate::ui::core::EventHandler;
use crossterm::{
    cursor::Show,
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use std::io::{self, Write};
use tokio::time::Duration;

/// Raw mode and the alternate screen, undone on drop
struct TerminalGuard;

impl TerminalGuard {
    fn enter() -> io::Result<Self> {
        enable_raw_mode()?;
        // From here on every exit path goes through `Drop`
        let guard = Self;
        execute!(io::stdout(), EnterAlternateScreen)?;
        Ok(guard)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if let Err(e) = restore_terminal(&mut io::stdout()) {
            log::warn!("Failed to restore terminal: {}", e);
        }
    }
}

/// Leave raw mode and the alternate screen and show the cursor.
///
/// Every step runs even if an earlier one fails. The first error is returned.
fn restore_terminal<W: Write>(out: &mut W) -> io::Result<()> {
    let raw_mode = disable_raw_mode();
    let screen = execute!(out, LeaveAlternateScreen, Show);
    raw_mode.and(screen)
}

/// Set up the terminal, run the event loop, and restore the terminal on the way out
pub async fn run_app(config: Config, logger: Logger) -> anyhow::Result<()> {
    let mut app = AppComponent::new(&config, logger)?;
    let mut event_handler = EventHandler::new(Duration::from_millis(config.ui.tick_rate_ms));

    let _guard = TerminalGuard::enter()?;
    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;

    run_app_loop(&mut terminal, &mut app, &mut event_handler).await
}

async fn run_app_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut AppComponent,
    event_handler: &mut EventHandler,
) -> anyhow::Result<()> {
    let mut needs_render = true;

    loop {
        if needs_render {
            terminal.draw(|f| {
                let area = f.area();
                app.render(f, area);
            })?;
            needs_render = false;
        }

        let event = event_handler.next_event().await?;
        if app.handle_event(event) {
            needs_render = true;
        }

        if app.should_quit() {
            break;
        }
    }

    Ok(())
}
