//! TUI pane rendering modules
//!
//! # Pane Modules
//!
//! - [`editor`]: source editor, live widget when focused, highlighted view otherwise
//! - [`output`]: output of the last run
//! - [`input`]: stdin text area
//! - [`header`]: language selector, theme glyph and run indicator
//! - [`status`]: run status, execution time, memory and keybindings
//! - `utils`: keyword highlighting shared by the editor views
//!
//! Each pane module exports a primary `render_*` function. Panes hold no
//! state of their own; scroll offsets and widgets live in the app.

mod utils;

pub mod editor;
pub mod header;
pub mod input;
pub mod output;
pub mod status;

pub use editor::render_editor_pane;
pub use header::{render_header, HeaderRenderData};
pub use input::render_input_pane;
pub use output::render_output_pane;
pub use status::render_status_bar;

use crate::ui::theme::Theme;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    widgets::{Block, Borders},
    Frame,
};

fn pane_block<'a>(title: String, is_focused: bool, theme: &Theme) -> Block<'a> {
    let border_style = if is_focused {
        Style::default()
            .fg(theme.border_focused)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(theme.border_normal)
    };

    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(border_style)
        .style(Style::default().bg(theme.bg))
}

/// Draw a drag handle, highlighted while it is being dragged
pub fn render_gutter(frame: &mut Frame, area: Rect, vertical: bool, active: bool, theme: &Theme) {
    let color = if active {
        theme.gutter_active
    } else {
        theme.gutter
    };
    let block = if vertical {
        Block::default().borders(Borders::LEFT)
    } else {
        Block::default().borders(Borders::TOP)
    };
    frame.render_widget(
        block.border_style(Style::default().fg(color).bg(theme.bg)),
        area,
    );
}
