//! Editor pane rendering
//!
//! Focused, the pane shows the live `tui-textarea` widget. Unfocused, it
//! shows a keyword-highlighted read-only view kept around the cursor line.

use super::pane_block;
use super::utils::highlight_line;
use crate::editor::TextEditor;
use crate::ui::theme::Theme;
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Render the source editor
pub fn render_editor_pane(
    frame: &mut Frame,
    area: Rect,
    editor: &mut TextEditor,
    is_focused: bool,
    theme: &Theme,
) {
    let title = format!(" Editor · {} · {} ", editor.mode(), editor.theme());
    let block = pane_block(title, is_focused, theme);

    if is_focused {
        let textarea = editor.textarea_mut();
        textarea.set_block(block);
        textarea.set_style(Style::default().fg(theme.fg).bg(theme.bg));
        textarea.set_cursor_line_style(Style::default().bg(theme.current_line_bg));
        textarea.set_line_number_style(Style::default().fg(theme.comment));
        frame.render_widget(&*textarea, area);
        return;
    }

    let visible_height = area.height.saturating_sub(2) as usize;
    let top = editor.view_top(visible_height);
    let mode = editor.mode();
    let (cursor_row, _) = editor.cursor();
    let number_width = editor.lines().len().to_string().len();

    let lines: Vec<Line> = editor
        .lines()
        .iter()
        .enumerate()
        .skip(top)
        .take(visible_height.max(1))
        .map(|(row, text)| {
            let mut line = highlight_line(text, mode, theme);
            line.spans.insert(
                0,
                Span::styled(
                    format!("{:>width$} ", row + 1, width = number_width),
                    Style::default().fg(theme.comment),
                ),
            );
            if row == cursor_row {
                line = line.style(Style::default().bg(theme.current_line_bg));
            }
            line
        })
        .collect();

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
