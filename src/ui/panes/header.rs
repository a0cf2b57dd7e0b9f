//! Header line: language selector, theme indicator and run hint

use crate::catalog::LanguageEntry;
use crate::ui::theme::Theme;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

pub struct HeaderRenderData<'a> {
    pub language: Option<&'a LanguageEntry>,
    pub position: usize,
    pub language_count: usize,
    pub theme_glyph: &'a str,
    pub is_running: bool,
}

pub fn render_header(frame: &mut Frame, area: Rect, data: &HeaderRenderData<'_>, theme: &Theme) {
    let layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(area);

    let bar = Style::default().bg(theme.bar_bg);
    let (name, mode) = match data.language {
        Some(entry) => (entry.display_name.as_str(), entry.editor_mode.as_str()),
        None => ("(none)", "plaintext"),
    };

    let left_spans = vec![
        Span::styled(
            " ◀ ",
            Style::default().bg(theme.comment).fg(Color::Black),
        ),
        Span::styled(
            format!(" {} ", name),
            Style::default()
                .bg(theme.primary)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            " ▶ ",
            Style::default().bg(theme.comment).fg(Color::Black),
        ),
        Span::styled(
            format!(
                " {}/{}  {} ",
                data.position + 1,
                data.language_count,
                mode
            ),
            bar.fg(theme.comment),
        ),
    ];

    frame.render_widget(
        Paragraph::new(Line::from(left_spans))
            .style(bar)
            .alignment(Alignment::Left),
        layout[0],
    );

    let run_span = if data.is_running {
        Span::styled(
            " ⏳ RUNNING ",
            Style::default()
                .bg(theme.secondary)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        Span::styled(
            " ▶ RUN ",
            Style::default()
                .bg(theme.success)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        )
    };

    let right_spans = vec![
        Span::styled(format!(" {} ", data.theme_glyph), bar.fg(theme.function)),
        Span::styled(" ", bar),
        run_span,
    ];

    frame.render_widget(
        Paragraph::new(Line::from(right_spans))
            .style(bar)
            .alignment(Alignment::Right),
        layout[1],
    );
}
