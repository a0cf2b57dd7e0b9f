//! Status bar rendering with run indicators and keybindings

use crate::layout::CursorHint;
use crate::runner::{RunStatus, RunView};
use crate::ui::theme::Theme;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Render the status bar at the bottom
pub fn render_status_bar(
    frame: &mut Frame,
    area: Rect,
    view: &RunView,
    cursor: CursorHint,
    theme: &Theme,
) {
    let layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let badge_bg = match view.status {
        RunStatus::Idle => theme.comment,
        RunStatus::Running => theme.secondary,
        RunStatus::Finished(_) => theme.success,
        RunStatus::Failed => theme.error,
    };
    let bar = Style::default().bg(theme.current_line_bg);
    let sep_style = bar.fg(theme.comment);

    let left_spans = vec![
        Span::styled(
            format!(" Status: {} ", view.status.label()),
            Style::default()
                .bg(badge_bg)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(" | ", sep_style),
        Span::styled(format!("Execution time: {}", view.time), bar.fg(theme.fg)),
        Span::styled(" | ", sep_style),
        Span::styled(format!("Memory: {}", view.memory), bar.fg(theme.fg)),
    ];

    frame.render_widget(
        Paragraph::new(Line::from(left_spans))
            .style(bar)
            .alignment(Alignment::Left),
        layout[0],
    );

    // Right side: keybinds with visual grouping
    let key_style = Style::default().bg(theme.comment).fg(Color::Black);
    let desc_style = bar.fg(theme.fg);

    let mut right_spans = Vec::new();
    if cursor != CursorHint::Default {
        right_spans.push(Span::styled(
            format!(" {} RESIZE ", cursor.symbol()),
            Style::default()
                .bg(theme.gutter_active)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        ));
        right_spans.push(Span::styled("│", sep_style));
    }

    let bindings = [
        ("^R", "run"),
        ("^N/^P", "lang"),
        ("^T", "theme"),
        ("⇥", "focus"),
        ("^Q", "quit"),
    ];
    for (i, (key, desc)) in bindings.iter().enumerate() {
        if i > 0 {
            right_spans.push(Span::styled("│", sep_style));
        }
        right_spans.push(Span::styled(format!(" {} ", key), key_style));
        right_spans.push(Span::styled(format!(" {} ", desc), desc_style));
    }

    frame.render_widget(
        Paragraph::new(Line::from(right_spans))
            .style(bar)
            .alignment(Alignment::Right),
        layout[1],
    );
}
