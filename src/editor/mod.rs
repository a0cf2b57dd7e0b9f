//! Editor adapter
//!
//! The text editing itself is delegated to [`tui_textarea`]. The rest of the
//! application only talks to the [`EditorAdapter`] trait, so the selector, the
//! run controller, the theme toggle and the resizers all hold the same narrow
//! handle instead of reaching into the widget.

use crate::catalog::EditorMode;
use crossterm::event::KeyEvent;
use tui_textarea::{CursorMove, TextArea};

/// Operations the application needs from an embedded editor widget
pub trait EditorAdapter {
    /// Current text
    fn value(&self) -> String;

    /// Replace the whole text, moving the cursor to the top
    fn set_value(&mut self, text: &str);

    fn set_language_mode(&mut self, mode: EditorMode);

    fn set_theme(&mut self, theme: &str);

    /// Recompute the viewport for the current pane size. Idempotent.
    fn layout(&mut self);
}

/// Creation options for [`TextEditor`]
#[derive(Debug, Clone)]
pub struct EditorConfig {
    pub initial_value: String,
    pub mode: EditorMode,
    pub theme: String,
    /// Recompute the viewport by itself whenever the pane height changes
    pub auto_layout: bool,
}

/// [`EditorAdapter`] backed by a `tui-textarea` widget
pub struct TextEditor {
    textarea: TextArea<'static>,
    mode: EditorMode,
    theme: String,
    auto_layout: bool,

    /// First visible line of the highlighted (unfocused) view.
    /// `None` means the viewport is recomputed on the next draw.
    view_top: Option<usize>,
    last_height: usize,

    reflows: usize,
}

impl TextEditor {
    pub fn new(config: EditorConfig) -> Self {
        TextEditor {
            textarea: TextArea::new(split_lines(&config.initial_value)),
            mode: config.mode,
            theme: config.theme,
            auto_layout: config.auto_layout,
            view_top: None,
            last_height: 0,
            reflows: 0,
        }
    }

    pub fn mode(&self) -> EditorMode {
        self.mode
    }

    pub fn theme(&self) -> &str {
        &self.theme
    }

    /// Number of viewport recomputations requested so far
    pub fn reflow_count(&self) -> usize {
        self.reflows
    }

    /// Forward a key press to the widget. Returns true if the text changed.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        self.textarea.input(key)
    }

    pub fn lines(&self) -> &[String] {
        self.textarea.lines()
    }

    /// Cursor position as (row, column)
    pub fn cursor(&self) -> (usize, usize) {
        self.textarea.cursor()
    }

    pub fn textarea_mut(&mut self) -> &mut TextArea<'static> {
        &mut self.textarea
    }

    /// First visible row of the highlighted view for a pane `height` rows tall.
    ///
    /// The cached value is kept while the cursor stays on screen so the view
    /// does not jump on every keystroke. With `auto_layout` a change of pane
    /// height also forces a recompute.
    pub fn view_top(&mut self, height: usize) -> usize {
        let height = height.max(1);
        if self.auto_layout && height != self.last_height {
            self.view_top = None;
        }
        self.last_height = height;
        let (row, _) = self.textarea.cursor();
        let top = match self.view_top {
            Some(top) if row >= top && row < top + height => top,
            Some(top) if row < top => row,
            _ => row.saturating_sub(height - 1),
        };
        self.view_top = Some(top);
        top
    }
}

impl EditorAdapter for TextEditor {
    fn value(&self) -> String {
        self.textarea.lines().join("\n")
    }

    fn set_value(&mut self, text: &str) {
        self.textarea = TextArea::new(split_lines(text));
        self.textarea.move_cursor(CursorMove::Top);
        self.view_top = None;
    }

    fn set_language_mode(&mut self, mode: EditorMode) {
        self.mode = mode;
    }

    fn set_theme(&mut self, theme: &str) {
        self.theme = theme.to_string();
    }

    fn layout(&mut self) {
        self.view_top = None;
        self.reflows += 1;
    }
}

fn split_lines(text: &str) -> Vec<String> {
    text.split('\n').map(|l| l.to_string()).collect()
}
