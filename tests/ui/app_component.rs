use crate::{ctrl, key, new_app, render_lines, type_text};
use crossterm::event::KeyCode;
use stacktodo::config::Config;
use stacktodo::logger::Logger;
use stacktodo::ui::app_component::{AppComponent, AppState};
use stacktodo::ui::core::{Action, RouteName};
use stacktodo::ui::screens::TodoListScreen;

fn todo_texts(app: &AppComponent) -> Vec<String> {
    app.todos()
        .expect("root screen should be the to-do list")
        .iter()
        .map(|item| item.text.clone())
        .collect()
}

#[test]
fn test_app_state_default() {
    let state = AppState::default();
    assert!(!state.show_logs, "Default AppState should not show logs");
}

#[test]
fn test_starts_on_empty_list() {
    let app = new_app();
    assert_eq!(app.navigator().routes(), vec![RouteName::TodoList]);
    assert!(app.todos().unwrap().is_empty());
    assert!(!app.should_quit());
}

#[test]
fn test_button_opens_entry_screen() {
    let mut app = new_app();
    app.handle_key(key(KeyCode::Char('a')));

    assert_eq!(app.navigator().current_route(), RouteName::AddTodo);
    assert_eq!(app.navigator().depth(), 2);

    let list = app.navigator().root_screen::<TodoListScreen>().unwrap();
    assert!(!list.is_focused(), "covered screen should be blurred");
}

#[test]
fn test_submit_appends_and_returns() {
    let mut app = new_app();
    app.handle_key(key(KeyCode::Enter));
    type_text(&mut app, "buy milk");
    app.handle_key(key(KeyCode::Enter));

    assert_eq!(app.navigator().current_route(), RouteName::TodoList);
    assert_eq!(todo_texts(&app), vec!["buy milk".to_string()]);
}

#[test]
fn test_append_many_in_order() {
    let mut app = new_app();
    let texts = ["first", "second", "third", "fourth"];

    for text in texts {
        app.handle_key(key(KeyCode::Char('a')));
        type_text(&mut app, text);
        app.handle_key(key(KeyCode::Enter));
    }

    assert_eq!(todo_texts(&app), texts.map(String::from).to_vec());
    assert_eq!(app.navigator().depth(), 1);
}

#[test]
fn test_back_without_submit_leaves_list_unchanged() {
    let mut app = new_app();
    app.handle_key(key(KeyCode::Char('a')));
    type_text(&mut app, "keep");
    app.handle_key(key(KeyCode::Enter));

    // Open the entry screen, type, then back out
    app.handle_key(key(KeyCode::Char('a')));
    type_text(&mut app, "discard me");
    app.handle_key(key(KeyCode::Esc));

    assert_eq!(app.navigator().current_route(), RouteName::TodoList);
    assert_eq!(todo_texts(&app), vec!["keep".to_string()]);
}

#[test]
fn test_empty_submission_stays_on_entry_screen() {
    let mut app = new_app();
    app.handle_key(key(KeyCode::Char('a')));
    type_text(&mut app, "   ");
    app.handle_key(key(KeyCode::Enter));

    assert_eq!(app.navigator().current_route(), RouteName::AddTodo);
    assert!(app.todos().unwrap().is_empty());
}

#[test]
fn test_q_is_text_on_entry_screen() {
    let mut app = new_app();
    app.handle_key(key(KeyCode::Char('a')));
    type_text(&mut app, "quit smoking");
    assert!(!app.should_quit(), "'q' typed into the input must not quit");

    app.handle_key(key(KeyCode::Enter));
    assert_eq!(todo_texts(&app), vec!["quit smoking".to_string()]);

    app.handle_key(key(KeyCode::Char('q')));
    assert!(app.should_quit());
}

#[test]
fn test_ctrl_c_quits_anywhere() {
    let mut app = new_app();
    app.handle_key(key(KeyCode::Char('a')));
    app.handle_key(ctrl('c'));
    assert!(app.should_quit());
}

#[test]
fn test_esc_at_root_is_ignored() {
    let mut app = new_app();
    app.handle_key(key(KeyCode::Esc));
    assert_eq!(app.navigator().depth(), 1);
    assert!(!app.should_quit());
}

#[test]
fn test_log_panel_toggle_swallows_keys() {
    let mut app = new_app();
    app.handle_key(key(KeyCode::Char('G')));
    assert!(app.state().show_logs);

    // Keys go to the panel, not the list screen
    app.handle_key(key(KeyCode::Char('a')));
    assert_eq!(app.navigator().depth(), 1);

    app.handle_key(key(KeyCode::Esc));
    assert!(!app.state().show_logs);
}

#[test]
fn test_render_shows_button_and_items() {
    let mut app = new_app();
    app.handle_key(key(KeyCode::Char('a')));
    type_text(&mut app, "buy milk");
    app.handle_key(key(KeyCode::Enter));

    let screen = render_lines(&mut app, 60, 20).join("\n");
    assert!(screen.contains("To-Do List"));
    assert!(screen.contains("Add To-Do"));
    assert!(screen.contains("• buy milk"));
    assert!(screen.contains("To-Dos (1)"));
}

#[test]
fn test_render_empty_placeholder() {
    let mut app = new_app();
    let screen = render_lines(&mut app, 60, 20).join("\n");
    assert!(screen.contains("No to-dos yet"));
}

#[test]
fn test_render_entry_screen_header_has_back_hint() {
    let mut app = new_app();
    app.handle_key(key(KeyCode::Char('a')));
    type_text(&mut app, "draft");

    let lines = render_lines(&mut app, 60, 20);
    let screen = lines.join("\n");
    assert!(screen.contains("Esc"));
    assert!(screen.contains("draft"));
    assert!(screen.contains("What needs doing?"));
}

#[test]
fn test_padding_is_respected() {
    let mut config = Config::default();
    config.ui.padding = 2;
    let mut app = AppComponent::new(&config, Logger::new()).unwrap();

    let lines = render_lines(&mut app, 40, 12);
    // First two rows and the first two columns of the content area stay blank
    assert!(lines[0].trim().is_empty());
    assert!(lines[1].trim().is_empty());
    assert!(lines[2].starts_with("  "));
    assert!(lines[2].contains("To-Do List"));
}

#[test]
fn test_tiny_terminal_does_not_panic() {
    let mut app = new_app();
    render_lines(&mut app, 3, 2);
    render_lines(&mut app, 1, 1);
}

#[test]
fn test_append_reaches_list_while_entry_screen_is_on_top() {
    let mut app = new_app();
    app.handle_key(key(KeyCode::Char('a')));
    app.dispatch(Action::AppendTodo("from above".to_string()));

    assert_eq!(app.navigator().current_route(), RouteName::AddTodo);
    assert_eq!(todo_texts(&app), vec!["from above".to_string()]);
}

#[test]
fn test_status_bar_keeps_quit_hint_on_narrow_terminal() {
    let mut app = new_app();
    for width in [40, 24] {
        let lines = render_lines(&mut app, width, 12);
        let status = lines.last().unwrap();
        assert!(status.contains("q: quit"), "width {}: {:?}", width, status);
    }
}
