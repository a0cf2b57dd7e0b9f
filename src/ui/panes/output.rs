//! Run output pane rendering

use super::pane_block;
use crate::runner::{RunStatus, RunView};
use crate::ui::theme::Theme;
use ratatui::{
    layout::Rect,
    style::Style,
    widgets::{List, ListItem, Padding, Paragraph},
    Frame,
};

/// Render the output of the last run
pub fn render_output_pane(
    frame: &mut Frame,
    area: Rect,
    view: &RunView,
    is_focused: bool,
    scroll_offset: &mut usize,
    theme: &Theme,
) {
    let block = pane_block(" Output ".to_string(), is_focused, theme);

    if view.status == RunStatus::Idle {
        let paragraph = Paragraph::new("Press Ctrl-R or F5 to run")
            .block(block)
            .style(Style::default().fg(theme.comment));
        frame.render_widget(paragraph, area);
        return;
    }

    let block = block.padding(Padding::new(1, 0, 0, 0));
    let color = match view.status {
        RunStatus::Failed => theme.error,
        RunStatus::Running => theme.comment,
        _ => theme.fg,
    };

    let all_items: Vec<ListItem> = view
        .output
        .lines()
        .map(|line| ListItem::new(line).style(Style::default().fg(color)))
        .collect();

    let total_items = all_items.len();
    let visible_height = area.height.saturating_sub(2).max(1) as usize; // Account for borders, min 1

    // Clamp scroll offset only if content exceeds visible area
    if total_items > visible_height {
        let max_scroll = total_items - visible_height;
        *scroll_offset = (*scroll_offset).min(max_scroll);
    } else {
        *scroll_offset = 0;
    }

    let visible_items: Vec<ListItem> = all_items
        .into_iter()
        .skip(*scroll_offset)
        .take(visible_height)
        .collect();

    frame.render_widget(List::new(visible_items).block(block), area);
}
