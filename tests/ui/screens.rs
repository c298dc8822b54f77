use crate::key;
use crossterm::event::KeyCode;
use stacktodo::ui::core::navigation::{ScreenContext, ScreenMessage};
use stacktodo::ui::core::{Action, Component, NavigationError, RouteName, RouteParams, Screen};
use stacktodo::ui::screens::{AddTodoScreen, TodoListScreen};
use std::cell::RefCell;
use std::rc::Rc;
use tokio::sync::mpsc;

#[test]
fn test_button_passes_callback_to_entry_route() {
    let (sender, mut receiver) = mpsc::unbounded_channel::<ScreenMessage>();
    let mut screen = TodoListScreen::new(7, sender);

    let Action::Navigate(route, RouteParams::AddTodo { on_submit }) = screen.handle_key_events(key(KeyCode::Char('a')))
    else {
        panic!("button should open the entry route with a callback");
    };
    assert_eq!(route, RouteName::AddTodo);

    on_submit("buy milk".to_string());

    let message = receiver.try_recv().unwrap();
    assert_eq!(message.target, 7, "callback should address the screen that created it");
    assert!(matches!(message.action, Action::AppendTodo(ref text) if text == "buy milk"));
    assert!(screen.todos().is_empty(), "list only changes once the message is delivered");

    screen.update(message.action);
    assert_eq!(screen.todos().len(), 1);
}

#[test]
fn test_list_screen_passes_other_actions_through() {
    let (sender, _receiver) = mpsc::unbounded_channel();
    let mut screen = TodoListScreen::new(0, sender);
    assert!(matches!(screen.update(Action::GoBack), Action::GoBack));
}

#[test]
fn test_list_screen_keys() {
    let (sender, _receiver) = mpsc::unbounded_channel();
    let mut screen = TodoListScreen::new(0, sender);

    assert!(matches!(screen.handle_key_events(key(KeyCode::Char('q'))), Action::Quit));
    assert!(matches!(screen.handle_key_events(key(KeyCode::Char('G'))), Action::ToggleLogs));
    assert!(matches!(
        screen.handle_key_events(key(KeyCode::Enter)),
        Action::Navigate(RouteName::AddTodo, _)
    ));
    assert_eq!(screen.route(), RouteName::TodoList);
}

#[test]
fn test_list_screen_scrolling() {
    let (sender, _receiver) = mpsc::unbounded_channel();
    let mut screen = TodoListScreen::new(0, sender);
    for text in ["a", "b", "c"] {
        screen.update(Action::AppendTodo(text.to_string()));
    }

    screen.handle_key_events(key(KeyCode::Home));
    assert_eq!(screen.selected_index, 0);
    screen.handle_key_events(key(KeyCode::Char('j')));
    screen.handle_key_events(key(KeyCode::Down));
    screen.handle_key_events(key(KeyCode::Down));
    assert_eq!(screen.selected_index, 2, "selection stops at the last item");
    screen.handle_key_events(key(KeyCode::Char('k')));
    assert_eq!(screen.list_state.selected(), Some(1));
}

#[test]
fn test_entry_screen_factory_requires_params() {
    let (sender, _receiver) = mpsc::unbounded_channel();
    let result = AddTodoScreen::factory(ScreenContext {
        key: 1,
        params: RouteParams::None,
        sender,
    });
    assert!(matches!(result, Err(NavigationError::MissingParams(RouteName::AddTodo))));
}

#[test]
fn test_entry_screen_submit_and_cancel() {
    let received = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&received);
    let mut screen = AddTodoScreen::new(Rc::new(move |text| sink.borrow_mut().push(text)));

    for c in "call mom".chars() {
        screen.handle_key_events(key(KeyCode::Char(c)));
    }
    assert!(matches!(screen.handle_key_events(key(KeyCode::Enter)), Action::GoBack));
    assert_eq!(*received.borrow(), vec!["call mom".to_string()]);
    assert!(screen.input_buffer.is_empty());
    assert_eq!(screen.cursor_position, 0);

    screen.handle_key_events(key(KeyCode::Char('x')));
    assert!(matches!(screen.handle_key_events(key(KeyCode::Esc)), Action::GoBack));
    assert_eq!(received.borrow().len(), 1, "Esc must not submit");
}

#[test]
fn test_entry_screen_ignores_blank_input() {
    let calls = Rc::new(RefCell::new(0));
    let counter = Rc::clone(&calls);
    let mut screen = AddTodoScreen::new(Rc::new(move |_| *counter.borrow_mut() += 1));

    assert!(matches!(screen.handle_key_events(key(KeyCode::Enter)), Action::None));
    screen.handle_key_events(key(KeyCode::Char(' ')));
    assert!(matches!(screen.handle_key_events(key(KeyCode::Enter)), Action::None));
    assert_eq!(*calls.borrow(), 0);
    assert_eq!(screen.route(), RouteName::AddTodo);
}

#[test]
fn test_entry_screen_cursor_editing() {
    let mut screen = AddTodoScreen::new(Rc::new(|_| {}));
    for c in "helo".chars() {
        screen.handle_key_events(key(KeyCode::Char(c)));
    }
    screen.handle_key_events(key(KeyCode::Left));
    screen.handle_key_events(key(KeyCode::Char('l')));
    assert_eq!(screen.input_buffer, "hello");

    screen.handle_key_events(key(KeyCode::End));
    screen.handle_key_events(key(KeyCode::Right));
    assert_eq!(screen.cursor_position, 5);

    screen.handle_key_events(key(KeyCode::Home));
    screen.handle_key_events(key(KeyCode::Backspace));
    assert_eq!(screen.input_buffer, "hello", "Backspace at start does nothing");
}
