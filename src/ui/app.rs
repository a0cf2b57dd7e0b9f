//! Main TUI application state and logic

use crate::catalog::{LanguageCatalog, LanguageId};
use crate::editor::{EditorAdapter, EditorConfig, TextEditor};
use crate::layout::{ActiveResize, LayoutResizer, SplitAxis, SplitBounds};
use crate::runner::{ExecutionApi, RunController, RunRequest, RunResult, SubmissionFailure};
use crate::ui::layout::{hit, AppLayout};
use crate::ui::panes;
use crate::ui::theme::{ThemeController, ThemeMode};
use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use ratatui::{backend::Backend, Frame, Terminal};
use std::io;
use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::Arc;
use std::time::Duration;
use tokio::runtime::Handle;
use tui_textarea::TextArea;

type RunOutcome = Result<RunResult, SubmissionFailure>;

/// Which pane is currently focused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusedPane {
    Editor,
    Stdin,
    Output,
}

impl FocusedPane {
    /// Move focus to the next pane (editor -> stdin -> output)
    pub fn next(self) -> Self {
        match self {
            FocusedPane::Editor => FocusedPane::Stdin,
            FocusedPane::Stdin => FocusedPane::Output,
            FocusedPane::Output => FocusedPane::Editor,
        }
    }

    /// Move focus to the previous pane
    pub fn prev(self) -> Self {
        match self {
            FocusedPane::Editor => FocusedPane::Output,
            FocusedPane::Stdin => FocusedPane::Editor,
            FocusedPane::Output => FocusedPane::Stdin,
        }
    }
}

/// Start-up options for [`App`]
pub struct AppOptions {
    pub language: LanguageId,
    pub theme: ThemeMode,
    pub pane_bounds: SplitBounds,
    pub output_bounds: SplitBounds,
}

/// The main application state
pub struct App {
    pub catalog: LanguageCatalog,
    pub editor: TextEditor,
    pub stdin: TextArea<'static>,
    pub runs: RunController,
    pub theme: ThemeController,
    pub resizer: LayoutResizer,

    /// Currently selected language
    pub language: LanguageId,

    pub focused_pane: FocusedPane,
    pub output_scroll: usize,

    /// Areas of the last drawn frame, used for mouse hit-testing
    pub layout: AppLayout,

    pub should_quit: bool,

    api: Arc<dyn ExecutionApi>,
    runtime: Handle,
    outcome_tx: Sender<RunOutcome>,
    outcome_rx: Receiver<RunOutcome>,
}

impl App {
    pub fn new(
        catalog: LanguageCatalog,
        options: AppOptions,
        api: Arc<dyn ExecutionApi>,
        runtime: Handle,
    ) -> Self {
        let editor = TextEditor::new(EditorConfig {
            initial_value: catalog.sample_for(options.language).to_string(),
            mode: catalog.mode_for(options.language),
            theme: options.theme.editor_theme().to_string(),
            auto_layout: true,
        });
        let (outcome_tx, outcome_rx) = mpsc::channel();

        App {
            catalog,
            editor,
            stdin: TextArea::default(),
            runs: RunController::new(),
            theme: ThemeController::new(options.theme),
            resizer: LayoutResizer::new(options.pane_bounds, options.output_bounds),
            language: options.language,
            focused_pane: FocusedPane::Editor,
            output_scroll: 0,
            layout: AppLayout::default(),
            should_quit: false,
            api,
            runtime,
            outcome_tx,
            outcome_rx,
        }
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            self.poll_runs();
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            // Poll with a timeout so finished runs show up without input
            if event::poll(Duration::from_millis(50))? {
                let event = event::read()?;
                self.handle_event(event);
            }
        }

        Ok(())
    }

    /// Render the UI
    pub fn render(&mut self, frame: &mut Frame) {
        self.layout = AppLayout::compute(frame.area(), self.resizer.state());
        let layout = self.layout;
        let theme = self.theme.palette();
        let active = self.resizer.active();

        panes::render_header(
            frame,
            layout.header,
            &panes::HeaderRenderData {
                language: self.catalog.get(self.language),
                position: self.catalog.position(self.language).unwrap_or(0),
                language_count: self.catalog.len(),
                theme_glyph: self.theme.glyph(),
                is_running: self.runs.is_running(),
            },
            theme,
        );

        panes::render_editor_pane(
            frame,
            layout.editor,
            &mut self.editor,
            self.focused_pane == FocusedPane::Editor,
            theme,
        );
        panes::render_gutter(
            frame,
            layout.h_gutter,
            true,
            active == ActiveResize::Horizontal,
            theme,
        );
        panes::render_output_pane(
            frame,
            layout.output,
            self.runs.view(),
            self.focused_pane == FocusedPane::Output,
            &mut self.output_scroll,
            theme,
        );
        panes::render_gutter(
            frame,
            layout.v_gutter,
            false,
            active == ActiveResize::Vertical,
            theme,
        );
        panes::render_input_pane(
            frame,
            layout.input,
            &mut self.stdin,
            self.focused_pane == FocusedPane::Stdin,
            theme,
        );

        panes::render_status_bar(
            frame,
            layout.status,
            self.runs.view(),
            self.resizer.cursor(),
            theme,
        );
    }

    pub fn handle_event(&mut self, event: Event) {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key_event(key),
            Event::Mouse(mouse) => self.handle_mouse_event(mouse),
            Event::Resize(_, _) => self.resizer.container_resized(&mut self.editor),
            _ => {}
        }
    }

    /// Apply every run outcome that has arrived since the last call
    pub fn poll_runs(&mut self) {
        while let Ok(outcome) = self.outcome_rx.try_recv() {
            self.runs.complete(&outcome, &mut self.editor);
            self.output_scroll = 0;
        }
    }

    /// Submit the current editor text. Overlapping runs are not prevented;
    /// whichever finishes last is what stays on screen.
    pub fn start_run(&mut self) {
        let request = RunRequest::new(
            self.editor.value(),
            self.language,
            self.stdin.lines().join("\n"),
        );
        self.runs.begin(&request);
        self.output_scroll = 0;

        let api = Arc::clone(&self.api);
        let tx = self.outcome_tx.clone();
        self.runtime.spawn(async move {
            let outcome = api.execute(&request).await;
            // The receiver is gone only when the app has quit
            let _ = tx.send(outcome);
        });
    }

    /// Switch language, replacing the editor text with its sample
    pub fn select_language(&mut self, id: LanguageId) {
        if self.catalog.get(id).is_none() {
            return;
        }
        self.language = id;
        self.editor.set_value(self.catalog.sample_for(id));
        self.editor.set_language_mode(self.catalog.mode_for(id));
        tracing::info!(language_id = id, mode = %self.catalog.mode_for(id), "language selected");
    }

    /// Handle keyboard events
    fn handle_key_event(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        match key.code {
            KeyCode::Char('q') if ctrl => {
                self.should_quit = true;
            }
            KeyCode::Char('r') if ctrl => self.start_run(),
            KeyCode::F(5) => self.start_run(),
            KeyCode::Char('t') if ctrl => {
                self.theme.toggle(&mut self.editor);
            }
            KeyCode::Char('n') if ctrl => {
                if let Some(id) = self.catalog.next_id(self.language) {
                    self.select_language(id);
                }
            }
            KeyCode::Char('p') if ctrl => {
                if let Some(id) = self.catalog.prev_id(self.language) {
                    self.select_language(id);
                }
            }
            KeyCode::Tab => {
                self.focused_pane = self.focused_pane.next();
            }
            KeyCode::BackTab => {
                self.focused_pane = self.focused_pane.prev();
            }
            _ => match self.focused_pane {
                FocusedPane::Editor => {
                    self.editor.handle_key(key);
                }
                FocusedPane::Stdin => {
                    self.stdin.input(key);
                }
                FocusedPane::Output => match key.code {
                    KeyCode::Up => {
                        self.output_scroll = self.output_scroll.saturating_sub(1);
                    }
                    KeyCode::Down => {
                        self.output_scroll = self.output_scroll.saturating_add(1);
                    }
                    KeyCode::Home => self.output_scroll = 0,
                    KeyCode::End => self.output_scroll = usize::MAX,
                    _ => {}
                },
            },
        }
    }

    /// Handle mouse events: gutter drags and click-to-focus
    fn handle_mouse_event(&mut self, mouse: MouseEvent) {
        let (column, row) = (mouse.column, mouse.row);

        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                if hit(self.layout.h_gutter, column, row) {
                    self.resizer.press(SplitAxis::Horizontal);
                } else if hit(self.layout.v_gutter, column, row) {
                    self.resizer.press(SplitAxis::Vertical);
                } else if hit(self.layout.editor, column, row) {
                    self.focused_pane = FocusedPane::Editor;
                } else if hit(self.layout.input, column, row) {
                    self.focused_pane = FocusedPane::Stdin;
                } else if hit(self.layout.output, column, row) {
                    self.focused_pane = FocusedPane::Output;
                }
            }
            MouseEventKind::Drag(_) | MouseEventKind::Moved => {
                let container = match self.resizer.active() {
                    ActiveResize::None => return,
                    ActiveResize::Horizontal => self.layout.content,
                    ActiveResize::Vertical => self.layout.right,
                };
                self.resizer
                    .pointer_move(column, row, container, &mut self.editor);
                // Keep hit-testing in step with the new sizes before the next draw
                self.layout = AppLayout::compute(self.layout_area(), self.resizer.state());
            }
            MouseEventKind::Up(_) => {
                self.resizer.release(&mut self.editor);
            }
            MouseEventKind::ScrollUp if hit(self.layout.output, column, row) => {
                self.output_scroll = self.output_scroll.saturating_sub(1);
            }
            MouseEventKind::ScrollDown if hit(self.layout.output, column, row) => {
                self.output_scroll = self.output_scroll.saturating_add(1);
            }
            _ => {}
        }
    }

    /// Full frame area of the last draw
    fn layout_area(&self) -> ratatui::layout::Rect {
        self.layout.header.union(self.layout.status)
    }
}
