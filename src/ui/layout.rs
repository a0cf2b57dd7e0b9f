//! Screen areas for one frame
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │ ◀ Python 3 ▶  python                    ☾ ▶ │  <- header
//! ├───────────────────────┬┬─────────────────────┤
//! │                       ││ Output              │
//! │  Editor               ││                     │
//! │                       │├─────────────────────┤  <- vertical handle
//! │                       ││ Stdin               │
//! ├───────────────────────┴┴─────────────────────┤
//! │ Status: done | Execution time: 0.01 | ...    │  <- status bar
//! └──────────────────────────────────────────────┘
//!                          ^ horizontal handle
//! ```

use crate::layout::LayoutState;
use ratatui::layout::{Constraint, Direction, Layout, Position, Rect};

/// Editor share of the content width before any drag
const DEFAULT_LEFT_PERCENT: u16 = 55;
/// Output share of the right column before any drag
const DEFAULT_OUTPUT_PERCENT: u16 = 60;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AppLayout {
    pub header: Rect,
    /// Area split by the horizontal handle
    pub content: Rect,
    pub editor: Rect,
    pub h_gutter: Rect,
    /// Area split by the vertical handle
    pub right: Rect,
    pub output: Rect,
    pub v_gutter: Rect,
    pub input: Rect,
    pub status: Rect,
}

impl AppLayout {
    pub fn compute(area: Rect, state: LayoutState) -> Self {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Min(0),
                Constraint::Length(1),
            ])
            .split(area);
        let content = rows[1];

        // The dragged pane gets a fixed size, the sibling absorbs the rest
        let left_width = state
            .left_width
            .unwrap_or(percent_of(content.width, DEFAULT_LEFT_PERCENT))
            .min(content.width.saturating_sub(1));
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(left_width),
                Constraint::Length(1),
                Constraint::Min(0),
            ])
            .split(content);
        let right = columns[2];

        let output_height = state
            .output_height
            .unwrap_or(percent_of(right.height, DEFAULT_OUTPUT_PERCENT))
            .min(right.height.saturating_sub(1));
        let sections = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(output_height),
                Constraint::Length(1),
                Constraint::Min(0),
            ])
            .split(right);

        AppLayout {
            header: rows[0],
            content,
            editor: columns[0],
            h_gutter: columns[1],
            right,
            output: sections[0],
            v_gutter: sections[1],
            input: sections[2],
            status: rows[2],
        }
    }
}

fn percent_of(extent: u16, percent: u16) -> u16 {
    (u32::from(extent) * u32::from(percent) / 100) as u16
}

pub fn hit(rect: Rect, column: u16, row: u16) -> bool {
    rect.contains(Position::new(column, row))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_split() {
        let layout = AppLayout::compute(Rect::new(0, 0, 100, 30), LayoutState::default());
        assert_eq!(layout.header, Rect::new(0, 0, 100, 1));
        assert_eq!(layout.status, Rect::new(0, 29, 100, 1));
        assert_eq!(layout.editor.width, 55);
        assert_eq!(layout.h_gutter, Rect::new(55, 1, 1, 28));
        assert_eq!(layout.right, Rect::new(56, 1, 44, 28));
        assert_eq!(layout.output.height, 16);
        assert_eq!(layout.v_gutter, Rect::new(56, 17, 44, 1));
        assert_eq!(layout.input.height, 11);
    }

    #[test]
    fn test_dragged_sizes_are_fixed() {
        let state = LayoutState {
            left_width: Some(30),
            output_height: Some(5),
        };
        let layout = AppLayout::compute(Rect::new(0, 0, 100, 30), state);
        assert_eq!(layout.editor.width, 30);
        assert_eq!(layout.right.width, 69);
        assert_eq!(layout.output.height, 5);
        assert_eq!(layout.input.height, 22);
    }

    #[test]
    fn test_hit() {
        let layout = AppLayout::compute(Rect::new(0, 0, 100, 30), LayoutState::default());
        assert!(hit(layout.h_gutter, 55, 10));
        assert!(!hit(layout.h_gutter, 54, 10));
        assert!(hit(layout.v_gutter, 70, 17));
    }
}
