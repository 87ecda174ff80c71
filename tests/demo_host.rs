//! Integration tests for the demo TUI host.
//!
//! Drives `DemoApp` against a ratatui `TestBackend` and observes rendered
//! frames only: real key events in, visible characters out.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::backend::TestBackend;
use ratatui::Terminal;
use viewslice::config::ResolvedConfig;
use viewslice::view::{DemoApp, DemoMode};

// ===== Test Helpers =====

/// Convert a ratatui buffer to a string representation.
///
/// Captures the visual output character by character, preserving layout.
/// Empty trailing content is trimmed per line to keep assertions simple.
fn buffer_to_string(buffer: &ratatui::buffer::Buffer) -> String {
    let area = buffer.area();
    let mut lines = Vec::new();

    for y in area.top()..area.bottom() {
        let mut line = String::new();
        for x in area.left()..area.right() {
            let cell = &buffer[(x, y)];
            line.push_str(cell.symbol());
        }
        lines.push(line.trim_end().to_string());
    }

    lines.join("\n")
}

fn test_config() -> ResolvedConfig {
    ResolvedConfig {
        page_size: 50,
        log_file_path: std::env::temp_dir().join("viewslice_demo_host_test.log"),
        ..ResolvedConfig::default()
    }
}

fn test_app(mode: DemoMode) -> DemoApp<TestBackend> {
    let terminal = Terminal::new(TestBackend::new(40, 12)).expect("test backend");
    let mut app = DemoApp::with_terminal(terminal, &test_config(), mode).expect("demo app");
    app.handle_resize(40, 12);
    app
}

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

#[test]
fn first_frame_shows_the_top_of_the_list() {
    let mut app = test_app(DemoMode::List);
    app.draw().unwrap();

    let frame = buffer_to_string(app.terminal().backend().buffer());
    assert!(frame.contains("viewslice demo"), "missing title:\n{frame}");
    assert!(frame.contains("item #0"), "missing first item:\n{frame}");
    assert!(frame.contains("list"), "missing mode in status:\n{frame}");
}

#[test]
fn scrolling_to_the_end_changes_the_visible_items() {
    let mut app = test_app(DemoMode::List);
    app.draw().unwrap();
    let top_frame = buffer_to_string(app.terminal().backend().buffer());

    app.handle_key(key(KeyCode::End));
    app.draw().unwrap();
    let bottom_frame = buffer_to_string(app.terminal().backend().buffer());

    assert_ne!(top_frame, bottom_frame);
    assert!(
        !bottom_frame.contains("item #0"),
        "first item should have scrolled away:\n{bottom_frame}"
    );
}

#[test]
fn page_down_then_page_up_returns_to_the_same_frame() {
    let mut app = test_app(DemoMode::List);
    app.draw().unwrap();
    let before = buffer_to_string(app.terminal().backend().buffer());

    app.handle_key(key(KeyCode::PageDown));
    app.draw().unwrap();
    app.handle_key(key(KeyCode::PageUp));
    app.draw().unwrap();
    let after = buffer_to_string(app.terminal().backend().buffer());

    assert_eq!(before, after);
}

#[test]
fn toggle_switches_between_list_and_grid() {
    let mut app = test_app(DemoMode::List);
    assert_eq!(app.mode(), DemoMode::List);

    app.handle_key(key(KeyCode::Char('g')));
    assert_eq!(app.mode(), DemoMode::Grid);
    app.draw().unwrap();

    let frame = buffer_to_string(app.terminal().backend().buffer());
    assert!(frame.contains("grid"), "missing mode in status:\n{frame}");

    app.handle_key(key(KeyCode::Char('g')));
    assert_eq!(app.mode(), DemoMode::List);
}

#[test]
fn quit_keys_request_exit() {
    let mut app = test_app(DemoMode::List);
    assert!(!app.should_quit());
    app.handle_key(key(KeyCode::Char('q')));
    assert!(app.should_quit());

    let mut app = test_app(DemoMode::List);
    app.handle_key(key(KeyCode::Esc));
    assert!(app.should_quit());
}

#[test]
fn reaching_the_end_loads_more_items() {
    let mut app = test_app(DemoMode::List);
    let before = app.item_count();

    // Jump to the end repeatedly; each approach within the threshold should
    // append at most one page per crossing, and the count must grow.
    app.handle_key(key(KeyCode::End));
    app.draw().unwrap();
    let after = app.item_count();
    assert!(
        after > before,
        "expected a page append after reaching the end ({before} -> {after})"
    );
}

#[test]
fn grid_mode_renders_multiple_columns() {
    let mut app = test_app(DemoMode::Grid);
    app.draw().unwrap();

    let frame = buffer_to_string(app.terminal().backend().buffer());
    // 38 usable columns and 16-cell-wide tiles: items 0 and 1 share a row.
    let row_with_first = frame
        .lines()
        .find(|line| line.contains("item #0"))
        .expect("first grid tile visible");
    assert!(
        row_with_first.contains("item #1"),
        "expected two tiles on one row:\n{frame}"
    );
}
