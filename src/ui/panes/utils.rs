//! Keyword highlighting for the unfocused editor view
//!
//! A character-by-character tokenizer, good enough to colour keywords,
//! strings, numbers and line comments without a real lexer per language.

use crate::catalog::EditorMode;
use crate::ui::theme::Theme;
use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};

fn keywords(mode: EditorMode) -> &'static [&'static str] {
    match mode {
        EditorMode::Python => &[
            "def", "class", "return", "if", "elif", "else", "for", "while", "in", "import",
            "from", "as", "with", "try", "except", "finally", "raise", "pass", "break",
            "continue", "lambda", "yield", "and", "or", "not", "is", "None", "True", "False",
        ],
        EditorMode::JavaScript => &[
            "function", "return", "if", "else", "for", "while", "const", "let", "var", "class",
            "new", "import", "export", "from", "async", "await", "try", "catch", "throw",
            "null", "undefined", "true", "false", "interface", "type",
        ],
        EditorMode::C | EditorMode::Cpp => &[
            "int", "char", "void", "float", "double", "long", "short", "unsigned", "signed",
            "struct", "return", "if", "else", "while", "for", "do", "switch", "case",
            "default", "break", "continue", "sizeof", "include", "namespace", "using", "class",
            "template", "auto", "const", "std",
        ],
        EditorMode::Java => &[
            "class", "public", "private", "protected", "static", "void", "int", "long",
            "boolean", "String", "return", "if", "else", "for", "while", "new", "import",
            "package", "final", "try", "catch", "throw", "null", "true", "false",
        ],
        EditorMode::Php => &[
            "echo", "function", "return", "if", "else", "foreach", "while", "as", "class",
            "new", "public", "private", "null", "true", "false",
        ],
        EditorMode::Ruby => &[
            "def", "end", "puts", "class", "module", "if", "elsif", "else", "unless", "do",
            "return", "while", "nil", "true", "false", "require",
        ],
        EditorMode::Rust => &[
            "fn", "let", "mut", "pub", "struct", "enum", "impl", "trait", "use", "mod",
            "match", "if", "else", "for", "while", "loop", "return", "self", "Self", "true",
            "false",
        ],
        EditorMode::Go => &[
            "package", "import", "func", "return", "if", "else", "for", "range", "var",
            "const", "type", "struct", "interface", "go", "defer", "nil", "true", "false",
        ],
        EditorMode::PlainText => &[],
    }
}

fn line_comment(mode: EditorMode) -> Option<&'static str> {
    match mode {
        EditorMode::Python | EditorMode::Ruby => Some("#"),
        EditorMode::PlainText => None,
        _ => Some("//"),
    }
}

fn word_style(word: &str, mode: EditorMode, is_function: bool, theme: &Theme) -> Style {
    if keywords(mode).contains(&word) {
        Style::default()
            .fg(theme.keyword)
            .add_modifier(Modifier::BOLD)
    } else if word.chars().next().is_some_and(|c| c.is_ascii_digit()) {
        Style::default().fg(theme.number)
    } else if is_function {
        Style::default().fg(theme.function)
    } else {
        Style::default().fg(theme.fg)
    }
}

/// Highlight one line of source for `mode`
pub(super) fn highlight_line<'a>(line: &'a str, mode: EditorMode, theme: &Theme) -> Line<'a> {
    if mode == EditorMode::PlainText {
        return Line::from(Span::styled(line, Style::default().fg(theme.fg)));
    }

    let comment = line_comment(mode);
    let mut spans = Vec::new();
    let mut word_start: Option<usize> = None;
    let mut iter = line.char_indices().peekable();

    let flush = |spans: &mut Vec<Span<'a>>, start: Option<usize>, end: usize, next: char| {
        if let Some(start) = start {
            let word = &line[start..end];
            spans.push(Span::styled(word, word_style(word, mode, next == '(', theme)));
        }
    };

    while let Some((i, c)) = iter.next() {
        if comment.is_some_and(|marker| line[i..].starts_with(marker)) {
            flush(&mut spans, word_start.take(), i, ' ');
            spans.push(Span::styled(&line[i..], Style::default().fg(theme.comment)));
            return Line::from(spans);
        }

        if c == '"' || c == '\'' {
            flush(&mut spans, word_start.take(), i, c);
            let mut end = line.len();
            let mut escaped = false;
            for (j, d) in iter.by_ref() {
                if escaped {
                    escaped = false;
                } else if d == '\\' {
                    escaped = true;
                } else if d == c {
                    end = j + d.len_utf8();
                    break;
                }
            }
            spans.push(Span::styled(&line[i..end], Style::default().fg(theme.string)));
            continue;
        }

        if c.is_alphanumeric() || c == '_' {
            word_start.get_or_insert(i);
            continue;
        }

        flush(&mut spans, word_start.take(), i, c);
        let style = match c {
            '{' | '}' | '(' | ')' | '[' | ']' => Style::default().fg(theme.primary),
            _ => Style::default().fg(theme.fg),
        };
        spans.push(Span::styled(&line[i..i + c.len_utf8()], style));
    }

    flush(&mut spans, word_start, line.len(), ' ');
    Line::from(spans)
}
