//! Stdin pane rendering

use super::pane_block;
use crate::ui::theme::Theme;
use ratatui::{layout::Rect, style::Style, Frame};
use tui_textarea::TextArea;

pub fn render_input_pane(
    frame: &mut Frame,
    area: Rect,
    stdin: &mut TextArea<'static>,
    is_focused: bool,
    theme: &Theme,
) {
    stdin.set_block(pane_block(" Stdin ".to_string(), is_focused, theme));
    stdin.set_style(Style::default().fg(theme.fg).bg(theme.bg));
    stdin.set_placeholder_text("program input");
    stdin.set_placeholder_style(Style::default().fg(theme.comment));
    if is_focused {
        stdin.set_cursor_style(Style::default().bg(theme.fg).fg(theme.bg));
    } else {
        // Hide the cursor block when the pane is not focused
        stdin.set_cursor_style(Style::default().fg(theme.fg).bg(theme.bg));
    }
    stdin.set_cursor_line_style(Style::default());
    frame.render_widget(&*stdin, area);
}
