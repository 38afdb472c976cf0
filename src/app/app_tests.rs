use std::cell::RefCell;
use std::rc::Rc;
use std::sync::mpsc::{Receiver, Sender};
use std::time::{Duration, Instant};

use ratatui::crossterm::event::{KeyCode, MouseButton, MouseEvent, MouseEventKind, KeyModifiers};
use ratatui::layout::Rect;

use super::state::{App, Focus};
use crate::layout::LayoutRegions;
use crate::search::{FetchRequest, FetchResponse, SearchStatus};
use crate::test_utils::test_helpers::{books, key, test_app};

const DELAY: Duration = Duration::from_millis(400);

/// Type a query, run the debounce out, and answer the fetch with `count`
/// canned results.
fn load_results(
    app: &mut App,
    request_rx: &Receiver<FetchRequest>,
    response_tx: &Sender<FetchResponse>,
    count: usize,
) -> Instant {
    let t0 = Instant::now();
    app.prime_query("harry", t0);
    app.tick(t0 + DELAY);

    let FetchRequest::Search { request_id, .. } = request_rx.try_recv().unwrap();
    response_tx
        .send(FetchResponse::Results {
            books: books(count),
            request_id,
        })
        .unwrap();
    app.tick(t0 + DELAY);

    assert_eq!(app.search.status, SearchStatus::Success);
    t0
}

/// Region map as a render pass would record it
fn rendered_regions() -> LayoutRegions {
    LayoutRegions {
        entry: Rect::new(0, 0, 40, 3),
        dropdown: Some(Rect::new(0, 3, 40, 7)),
        list: Some(Rect::new(1, 4, 38, 5)),
    }
}

fn left_click(column: u16, row: u16) -> MouseEvent {
    MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column,
        row,
        modifiers: KeyModifiers::empty(),
    }
}

#[test]
fn test_typing_opens_dropdown_and_resets_highlight() {
    let (mut app, _request_rx, _response_tx) = test_app();

    app.handle_key_event(key(KeyCode::Char('h')), Instant::now());

    assert_eq!(app.entry.query(), "h");
    assert_eq!(app.search.query, "h");
    assert!(app.dropdown.is_open);
    assert!(app.dropdown.active().is_none());
    assert_eq!(app.focus, Focus::Entry);
}

#[test]
fn test_emptied_query_suppresses_dropdown() {
    let (mut app, _request_rx, _response_tx) = test_app();
    let now = Instant::now();

    app.handle_key_event(key(KeyCode::Char('h')), now);
    assert!(app.dropdown_visible());

    app.handle_key_event(key(KeyCode::Backspace), now);

    // Still forced open, but the empty query keeps it invisible
    assert!(app.dropdown.is_open);
    assert!(!app.dropdown_visible());
    assert_eq!(app.search.status, SearchStatus::Idle);
    assert!(!app.search.has_pending_timer());
}

#[test]
fn test_down_from_entry_enters_list_at_top() {
    let (mut app, request_rx, response_tx) = test_app();
    load_results(&mut app, &request_rx, &response_tx, 3);

    app.handle_key_event(key(KeyCode::Down), Instant::now());

    assert_eq!(app.dropdown.active(), Some(0));
    assert_eq!(app.focus, Focus::ResultsList);
}

#[test]
fn test_down_from_entry_noop_without_results() {
    let (mut app, _request_rx, _response_tx) = test_app();
    app.prime_query("harry", Instant::now());

    app.handle_key_event(key(KeyCode::Down), Instant::now());

    assert!(app.dropdown.active().is_none());
    assert_eq!(app.focus, Focus::Entry);
}

#[test]
fn test_down_walk_clamps_on_last_result() {
    let (mut app, request_rx, response_tx) = test_app();
    load_results(&mut app, &request_rx, &response_tx, 3);
    let now = Instant::now();

    app.handle_key_event(key(KeyCode::Down), now); // enters at 0
    app.handle_key_event(key(KeyCode::Down), now);
    app.handle_key_event(key(KeyCode::Down), now);
    assert_eq!(app.dropdown.active(), Some(2));

    app.handle_key_event(key(KeyCode::Down), now);
    assert_eq!(app.dropdown.active(), Some(2));
}

#[test]
fn test_escape_closes_but_preserves_query_and_results() {
    let (mut app, request_rx, response_tx) = test_app();
    load_results(&mut app, &request_rx, &response_tx, 3);
    let now = Instant::now();

    app.handle_key_event(key(KeyCode::Down), now);
    app.handle_key_event(key(KeyCode::Down), now);
    assert_eq!(app.dropdown.active(), Some(1));

    app.handle_key_event(key(KeyCode::Esc), now);

    assert!(!app.dropdown.is_open);
    assert!(app.dropdown.active().is_none());
    assert_eq!(app.focus, Focus::Entry);
    assert_eq!(app.search.query, "harry");
    assert_eq!(app.search.results.len(), 3);
}

#[test]
fn test_escape_with_closed_dropdown_quits() {
    let (mut app, _request_rx, _response_tx) = test_app();

    app.handle_key_event(key(KeyCode::Esc), Instant::now());

    assert!(app.should_quit);
}

#[test]
fn test_enter_commits_active_result() {
    let (mut app, request_rx, response_tx) = test_app();
    load_results(&mut app, &request_rx, &response_tx, 3);
    let now = Instant::now();

    let committed = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&committed);
    app.set_on_select(Box::new(move |book| {
        sink.borrow_mut().push(book.title.clone());
    }));

    app.handle_key_event(key(KeyCode::Down), now);
    app.handle_key_event(key(KeyCode::Down), now);
    app.handle_key_event(key(KeyCode::Enter), now);

    assert_eq!(committed.borrow().as_slice(), ["Book 1"]);
    assert_eq!(app.selected.as_ref().unwrap().title, "Book 1");
    assert!(!app.dropdown.is_open);
    assert_eq!(app.focus, Focus::Entry);

    // Query repopulated with the title, as display only
    assert_eq!(app.entry.query(), "Book 1");
    assert_eq!(app.search.query, "Book 1");
    assert!(!app.search.has_pending_timer());
}

#[test]
fn test_selection_never_triggers_a_fetch() {
    let (mut app, request_rx, response_tx) = test_app();
    let t0 = load_results(&mut app, &request_rx, &response_tx, 2);

    app.handle_key_event(key(KeyCode::Down), t0);
    app.handle_key_event(key(KeyCode::Enter), t0);

    // Run the clock far past any debounce window
    app.tick(t0 + Duration::from_secs(60));
    assert!(request_rx.try_recv().is_err());
}

#[test]
fn test_enter_on_entry_surface_is_noop() {
    let (mut app, request_rx, response_tx) = test_app();
    load_results(&mut app, &request_rx, &response_tx, 2);

    app.handle_key_event(key(KeyCode::Enter), Instant::now());

    assert!(app.selected.is_none());
    assert!(app.dropdown.is_open);
}

#[test]
fn test_new_results_invalidate_active_row() {
    let (mut app, request_rx, response_tx) = test_app();
    let t0 = load_results(&mut app, &request_rx, &response_tx, 3);
    app.handle_key_event(key(KeyCode::Down), t0);
    assert_eq!(app.dropdown.active(), Some(0));

    // User keeps typing; a fresh result set arrives
    let t1 = t0 + Duration::from_secs(1);
    app.prime_query("harry p", t1);
    app.tick(t1 + DELAY);
    let FetchRequest::Search { request_id, .. } = request_rx.try_recv().unwrap();
    response_tx
        .send(FetchResponse::Results {
            books: books(1),
            request_id,
        })
        .unwrap();
    app.tick(t1 + DELAY);

    assert!(app.dropdown.active().is_none());
    assert_eq!(app.focus, Focus::Entry);
    assert_eq!(app.scroll.offset, 0);
}

#[test]
fn test_active_row_scrolls_into_view() {
    let (mut app, request_rx, response_tx) = test_app();
    load_results(&mut app, &request_rx, &response_tx, 8);
    let now = Instant::now();

    // Viewport of 3 rows, as a render pass would record
    app.scroll.update_bounds(8, 3);

    app.handle_key_event(key(KeyCode::Down), now);
    for _ in 0..4 {
        app.handle_key_event(key(KeyCode::Down), now);
    }
    assert_eq!(app.dropdown.active(), Some(4));
    // Rows 2..=4 visible
    assert_eq!(app.scroll.offset, 2);

    // Walking back up scrolls the other way only once row 1 leaves view
    for _ in 0..3 {
        app.handle_key_event(key(KeyCode::Up), now);
    }
    assert_eq!(app.dropdown.active(), Some(1));
    assert_eq!(app.scroll.offset, 1);
}

#[test]
fn test_outside_press_dismisses_open_dropdown() {
    let (mut app, request_rx, response_tx) = test_app();
    load_results(&mut app, &request_rx, &response_tx, 3);
    app.regions = rendered_regions();
    app.focus = Focus::ResultsList;

    app.handle_mouse(left_click(50, 20));

    assert!(!app.dropdown.is_open);
    assert!(app.dropdown.active().is_none());
    // Focus is not pulled back by a dismissal
    assert_eq!(app.focus, Focus::ResultsList);
    // Query and results survive
    assert_eq!(app.search.results.len(), 3);
}

#[test]
fn test_inside_press_never_dismisses() {
    let (mut app, request_rx, response_tx) = test_app();
    load_results(&mut app, &request_rx, &response_tx, 3);
    app.regions = rendered_regions();

    // Press on the entry line
    app.handle_mouse(left_click(5, 1));
    assert!(app.dropdown.is_open);
    assert_eq!(app.focus, Focus::Entry);
}

#[test]
fn test_click_on_row_selects_it() {
    let (mut app, request_rx, response_tx) = test_app();
    load_results(&mut app, &request_rx, &response_tx, 3);
    app.regions = rendered_regions();

    // Second visible row
    app.handle_mouse(left_click(2, 5));

    assert_eq!(app.selected.as_ref().unwrap().title, "Book 1");
    assert!(!app.dropdown.is_open);
}

#[test]
fn test_click_row_respects_scroll_offset() {
    let (mut app, request_rx, response_tx) = test_app();
    load_results(&mut app, &request_rx, &response_tx, 8);
    app.regions = rendered_regions();
    app.scroll.update_bounds(8, 5);
    app.scroll.offset = 3;

    // First visible row maps to result index 3
    app.handle_mouse(left_click(2, 4));

    assert_eq!(app.selected.as_ref().unwrap().title, "Book 3");
}

#[test]
fn test_click_below_last_row_is_ignored() {
    let (mut app, request_rx, response_tx) = test_app();
    load_results(&mut app, &request_rx, &response_tx, 2);
    app.regions = rendered_regions();

    // Inside the list rect but past the last populated row
    app.handle_mouse(left_click(2, 8));

    assert!(app.selected.is_none());
    assert!(app.dropdown.is_open);
}

#[test]
fn test_fetch_error_shows_message_and_recovers() {
    let (mut app, request_rx, response_tx) = test_app();
    let t0 = Instant::now();
    app.prime_query("harry", t0);
    app.tick(t0 + DELAY);

    let FetchRequest::Search { request_id, .. } = request_rx.try_recv().unwrap();
    response_tx
        .send(FetchResponse::Failed {
            message: "HTTP 503".to_string(),
            request_id,
        })
        .unwrap();
    app.tick(t0 + DELAY);

    assert_eq!(app.search.status, SearchStatus::Error);
    assert_eq!(app.search.error.as_deref(), Some("HTTP 503"));

    // Next submission goes through normally
    let t1 = t0 + Duration::from_secs(2);
    app.prime_query("harry potter", t1);
    app.tick(t1 + DELAY);
    let FetchRequest::Search { request_id, .. } = request_rx.try_recv().unwrap();
    response_tx
        .send(FetchResponse::Results {
            books: books(1),
            request_id,
        })
        .unwrap();
    app.tick(t1 + DELAY);
    assert_eq!(app.search.status, SearchStatus::Success);
    assert!(app.search.error.is_none());
}
