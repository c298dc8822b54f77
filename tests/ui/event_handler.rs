use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers};
use stacktodo::ui::core::event_handler::{EventHandler, EventType};
use tokio::time::Duration;

#[test]
fn test_key_press_is_forwarded() {
    let event = Event::Key(KeyEvent::new(KeyCode::Char('a'), KeyModifiers::NONE));
    assert!(matches!(
        EventHandler::classify(event),
        EventType::Key(KeyEvent {
            code: KeyCode::Char('a'),
            ..
        })
    ));
}

#[test]
fn test_key_release_is_dropped() {
    let release = KeyEvent::new_with_kind_and_state(
        KeyCode::Char('a'),
        KeyModifiers::NONE,
        KeyEventKind::Release,
        KeyEventState::NONE,
    );
    assert!(matches!(EventHandler::classify(Event::Key(release)), EventType::Other));
}

#[test]
fn test_resize_is_forwarded() {
    assert!(matches!(
        EventHandler::classify(Event::Resize(80, 24)),
        EventType::Resize(80, 24)
    ));
}

#[test]
fn test_tick_rate() {
    let handler = EventHandler::new(Duration::from_millis(50));
    assert_eq!(handler.tick_rate(), Duration::from_millis(50));
    assert_eq!(EventHandler::default().tick_rate(), Duration::from_millis(100));
}
