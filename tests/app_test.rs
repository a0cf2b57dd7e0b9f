// End-to-end behaviour of the TUI app on a test backend

mod common;

use common::StaticApi;
use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::{backend::TestBackend, Terminal};
use runbox::catalog::LanguageCatalog;
use runbox::editor::EditorAdapter;
use runbox::layout::{ActiveResize, SplitBounds};
use runbox::runner::{RunRequest, RunStatus};
use runbox::ui::theme::ThemeMode;
use runbox::ui::{App, AppOptions, FocusedPane};
use serde_json::json;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::runtime::Runtime;

fn app_with(api: Arc<StaticApi>, runtime: &Runtime) -> App {
    App::new(
        LanguageCatalog::builtin(),
        AppOptions {
            language: 71,
            theme: ThemeMode::Dark,
            pane_bounds: SplitBounds::new(22, 32),
            output_bounds: SplitBounds::new(4, 4),
        },
        api,
        runtime.handle().clone(),
    )
}

fn draw(app: &mut App, terminal: &mut Terminal<TestBackend>) {
    terminal.draw(|f| app.render(f)).unwrap();
}

fn ctrl(c: char) -> Event {
    Event::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL))
}

fn mouse(kind: MouseEventKind, column: u16, row: u16) -> Event {
    Event::Mouse(MouseEvent {
        kind,
        column,
        row,
        modifiers: KeyModifiers::NONE,
    })
}

fn wait_for_run(app: &mut App) {
    let deadline = Instant::now() + Duration::from_secs(5);
    while app.runs.is_running() && Instant::now() < deadline {
        app.poll_runs();
        std::thread::sleep(Duration::from_millis(10));
    }
}

#[test]
fn test_starts_with_default_sample() {
    let runtime = Runtime::new().unwrap();
    let app = app_with(Arc::new(StaticApi::json(json!({}))), &runtime);

    assert_eq!(app.editor.value(), "print(\"Hello, Judge0!\")");
    assert_eq!(app.editor.mode().as_str(), "python");
    assert_eq!(app.editor.theme(), "vs-dark");
}

#[test]
fn test_selecting_each_language_loads_its_sample() {
    let runtime = Runtime::new().unwrap();
    let mut app = app_with(Arc::new(StaticApi::json(json!({}))), &runtime);
    let catalog = LanguageCatalog::builtin();

    for entry in catalog.list_entries() {
        app.select_language(entry.id);
        assert_eq!(app.language, entry.id);
        assert_eq!(app.editor.value(), catalog.sample_for(entry.id));
        assert_eq!(app.editor.mode(), catalog.mode_for(entry.id));
        assert!(!app.editor.mode().as_str().is_empty());
    }
}

#[test]
fn test_language_switch_discards_edits() {
    let runtime = Runtime::new().unwrap();
    let mut app = app_with(Arc::new(StaticApi::json(json!({}))), &runtime);

    app.editor.set_value("my unsaved work");
    app.handle_event(ctrl('n'));

    assert_eq!(app.language, 63);
    assert_eq!(app.editor.value(), "console.log(\"Hello, Judge0!\");");
}

#[test]
fn test_theme_toggle_round_trip() {
    let runtime = Runtime::new().unwrap();
    let mut app = app_with(Arc::new(StaticApi::json(json!({}))), &runtime);
    let glyph = app.theme.glyph();

    app.handle_event(ctrl('t'));
    assert_eq!(app.theme.mode(), ThemeMode::Light);
    assert_eq!(app.editor.theme(), "vs");
    assert_ne!(app.theme.glyph(), glyph);

    app.handle_event(ctrl('t'));
    assert_eq!(app.theme.glyph(), glyph);
    assert_eq!(app.editor.theme(), "vs-dark");
}

#[test]
fn test_run_sends_editor_language_and_stdin() {
    let runtime = Runtime::new().unwrap();
    let api = Arc::new(StaticApi::json(json!({
        "stdout": "5\n",
        "status": { "description": "Accepted" },
        "time": "0.01",
        "memory": 2048
    })));
    let mut app = app_with(api.clone(), &runtime);
    let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();

    app.select_language(73);
    app.handle_event(Event::Key(KeyEvent::new(KeyCode::Tab, KeyModifiers::NONE)));
    assert_eq!(app.focused_pane, FocusedPane::Stdin);
    for c in "2 3".chars() {
        app.handle_event(Event::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE)));
    }

    app.handle_event(ctrl('r'));
    assert_eq!(app.runs.view().output, "Running...");
    draw(&mut app, &mut terminal);

    wait_for_run(&mut app);
    draw(&mut app, &mut terminal);

    assert_eq!(api.calls(), 1);
    assert_eq!(
        api.last_request(),
        Some(RunRequest::new(
            "fn main(){ println!(\"Hello Rust!\"); }",
            73,
            "2 3"
        ))
    );
    assert_eq!(app.runs.view().output, "5\n");
    assert_eq!(
        app.runs.view().status,
        RunStatus::Finished("Accepted".to_string())
    );
    assert_eq!(app.runs.view().time, "0.01");
    assert_eq!(app.runs.view().memory, "2048");
}

#[test]
fn test_drag_horizontal_handle() {
    let runtime = Runtime::new().unwrap();
    let mut app = app_with(Arc::new(StaticApi::json(json!({}))), &runtime);
    let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
    draw(&mut app, &mut terminal);

    let gutter = app.layout.h_gutter;
    app.handle_event(mouse(
        MouseEventKind::Down(MouseButton::Left),
        gutter.x,
        gutter.y + 2,
    ));
    assert_eq!(app.resizer.active(), ActiveResize::Horizontal);

    // Far to the left: clamped to the minimum editor width
    app.handle_event(mouse(MouseEventKind::Drag(MouseButton::Left), 2, 10));
    draw(&mut app, &mut terminal);
    assert_eq!(app.layout.editor.width, 22);

    app.handle_event(mouse(MouseEventKind::Drag(MouseButton::Left), 40, 10));
    draw(&mut app, &mut terminal);
    assert_eq!(app.layout.editor.width, 40);

    // Released over the output pane, away from the handle
    app.handle_event(mouse(MouseEventKind::Up(MouseButton::Left), 80, 5));
    assert_eq!(app.resizer.active(), ActiveResize::None);

    app.handle_event(mouse(MouseEventKind::Drag(MouseButton::Left), 60, 10));
    draw(&mut app, &mut terminal);
    assert_eq!(app.layout.editor.width, 40);
}

#[test]
fn test_drag_vertical_handle() {
    let runtime = Runtime::new().unwrap();
    let mut app = app_with(Arc::new(StaticApi::json(json!({}))), &runtime);
    let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
    draw(&mut app, &mut terminal);

    let gutter = app.layout.v_gutter;
    let right = app.layout.right;
    app.handle_event(mouse(
        MouseEventKind::Down(MouseButton::Left),
        gutter.x + 3,
        gutter.y,
    ));
    assert_eq!(app.resizer.active(), ActiveResize::Vertical);

    app.handle_event(mouse(MouseEventKind::Drag(MouseButton::Left), 70, right.y + 10));
    draw(&mut app, &mut terminal);
    assert_eq!(app.layout.output.height, 10);

    // Bottom edge: stdin keeps its minimum
    app.handle_event(mouse(MouseEventKind::Drag(MouseButton::Left), 70, 29));
    draw(&mut app, &mut terminal);
    assert_eq!(app.layout.output.height, right.height - 4);

    app.handle_event(mouse(MouseEventKind::Up(MouseButton::Left), 3, 3));
    assert_eq!(app.resizer.active(), ActiveResize::None);
}

#[test]
fn test_click_focuses_pane() {
    let runtime = Runtime::new().unwrap();
    let mut app = app_with(Arc::new(StaticApi::json(json!({}))), &runtime);
    let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
    draw(&mut app, &mut terminal);

    let output = app.layout.output;
    app.handle_event(mouse(
        MouseEventKind::Down(MouseButton::Left),
        output.x + 2,
        output.y + 2,
    ));
    assert_eq!(app.focused_pane, FocusedPane::Output);
    assert_eq!(app.resizer.active(), ActiveResize::None);
}

#[test]
fn test_terminal_resize_reflows_editor() {
    let runtime = Runtime::new().unwrap();
    let mut app = app_with(Arc::new(StaticApi::json(json!({}))), &runtime);
    let before = app.editor.reflow_count();

    app.handle_event(Event::Resize(120, 40));
    assert_eq!(app.editor.reflow_count(), before + 1);
}

#[test]
fn test_quit() {
    let runtime = Runtime::new().unwrap();
    let mut app = app_with(Arc::new(StaticApi::json(json!({}))), &runtime);
    app.handle_event(ctrl('q'));
    assert!(app.should_quit);
}
