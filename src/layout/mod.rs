//! Drag-to-resize state machine for the two split handles
//!
//! The editor/right-pane split and the output/stdin split each have a handle.
//! Both share one [`ActiveResize`] selector, so at most one of them is being
//! dragged:
//!
//! ```text
//!            press(axis)                 release() anywhere
//!   Idle ──────────────────▶ Dragging ─────────────────────▶ Idle
//!                              │  ▲
//!                              └──┘ pointer_move(): clamp + apply
//! ```
//!
//! Sizes are plain `u16` units. The TUI feeds terminal cells; nothing here
//! assumes a particular unit, so the bounds below read as pixels or cells
//! depending on who drives the machine.

use crate::editor::EditorAdapter;
use ratatui::layout::Rect;

/// Which split a handle controls
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SplitAxis {
    /// Left pane width (editor | output+stdin)
    Horizontal,
    /// Output section height (output / stdin)
    Vertical,
}

/// The one resizer currently being dragged, if any
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveResize {
    #[default]
    None,
    Horizontal,
    Vertical,
}

impl ActiveResize {
    pub fn axis(self) -> Option<SplitAxis> {
        match self {
            ActiveResize::None => None,
            ActiveResize::Horizontal => Some(SplitAxis::Horizontal),
            ActiveResize::Vertical => Some(SplitAxis::Vertical),
        }
    }
}

impl From<SplitAxis> for ActiveResize {
    fn from(axis: SplitAxis) -> Self {
        match axis {
            SplitAxis::Horizontal => ActiveResize::Horizontal,
            SplitAxis::Vertical => ActiveResize::Vertical,
        }
    }
}

/// Global pointer style while a drag is in progress
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CursorHint {
    #[default]
    Default,
    ColResize,
    RowResize,
}

impl CursorHint {
    pub fn symbol(self) -> &'static str {
        match self {
            CursorHint::Default => "",
            CursorHint::ColResize => "⇔",
            CursorHint::RowResize => "⇕",
        }
    }
}

/// Minimum sizes of the two panes on either side of a handle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SplitBounds {
    /// Smallest size of the pane before the handle
    pub min_lead: u16,
    /// Smallest size left over for the pane after the handle
    pub min_trail: u16,
}

impl SplitBounds {
    /// Editor pane at least 220, right pane at least 320
    pub const PANE_SPLIT: SplitBounds = SplitBounds::new(220, 320);
    /// Output and stdin sections at least 80 each
    pub const OUTPUT_SPLIT: SplitBounds = SplitBounds::new(80, 80);

    pub const fn new(min_lead: u16, min_trail: u16) -> Self {
        SplitBounds {
            min_lead,
            min_trail,
        }
    }

    /// Clamp a pointer offset to `[min_lead, extent - min_trail]`.
    ///
    /// The lower bound is applied first, so when the container is too small
    /// for both minimums the upper bound wins. Never negative.
    pub fn clamp(&self, offset: i32, extent: u16) -> u16 {
        let max = i32::from(extent) - i32::from(self.min_trail);
        let mut size = offset;
        if size < i32::from(self.min_lead) {
            size = i32::from(self.min_lead);
        }
        if size > max {
            size = max;
        }
        size.clamp(0, i32::from(u16::MAX)) as u16
    }
}

/// Pane sizes set by dragging. `None` keeps the default proportional split.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LayoutState {
    pub left_width: Option<u16>,
    pub output_height: Option<u16>,
}

/// Both split handles and the shared drag selector
#[derive(Debug, Clone)]
pub struct LayoutResizer {
    active: ActiveResize,
    cursor: CursorHint,
    state: LayoutState,
    pane_bounds: SplitBounds,
    output_bounds: SplitBounds,
}

impl LayoutResizer {
    pub fn new(pane_bounds: SplitBounds, output_bounds: SplitBounds) -> Self {
        LayoutResizer {
            active: ActiveResize::None,
            cursor: CursorHint::Default,
            state: LayoutState::default(),
            pane_bounds,
            output_bounds,
        }
    }

    pub fn active(&self) -> ActiveResize {
        self.active
    }

    pub fn is_dragging(&self) -> bool {
        self.active != ActiveResize::None
    }

    pub fn cursor(&self) -> CursorHint {
        self.cursor
    }

    pub fn state(&self) -> LayoutState {
        self.state
    }

    pub fn bounds(&self, axis: SplitAxis) -> SplitBounds {
        match axis {
            SplitAxis::Horizontal => self.pane_bounds,
            SplitAxis::Vertical => self.output_bounds,
        }
    }

    /// Press on the handle for `axis`. Ignored while the other handle is
    /// being dragged.
    pub fn press(&mut self, axis: SplitAxis) -> CursorHint {
        if self.active.axis().is_some_and(|active| active != axis) {
            return self.cursor;
        }
        self.active = axis.into();
        self.cursor = match axis {
            SplitAxis::Horizontal => CursorHint::ColResize,
            SplitAxis::Vertical => CursorHint::RowResize,
        };
        tracing::debug!(?axis, "resize started");
        self.cursor
    }

    /// Pointer moved to (`column`, `row`). `container` is the area the
    /// active handle splits. Returns true if a size changed.
    pub fn pointer_move(
        &mut self,
        column: u16,
        row: u16,
        container: Rect,
        editor: &mut dyn EditorAdapter,
    ) -> bool {
        match self.active.axis() {
            None => false,
            Some(SplitAxis::Horizontal) => {
                let offset = i32::from(column) - i32::from(container.x);
                let width = self.pane_bounds.clamp(offset, container.width);
                self.state.left_width = Some(width);
                editor.layout();
                true
            }
            Some(SplitAxis::Vertical) => {
                let offset = i32::from(row) - i32::from(container.y);
                let height = self.output_bounds.clamp(offset, container.height);
                self.state.output_height = Some(height);
                true
            }
        }
    }

    /// Pointer released anywhere. Ends the active drag, if there is one.
    pub fn release(&mut self, editor: &mut dyn EditorAdapter) -> Option<SplitAxis> {
        let ended = self.active.axis()?;
        self.active = ActiveResize::None;
        self.cursor = CursorHint::Default;
        editor.layout();
        tracing::debug!(axis = ?ended, state = ?self.state, "resize finished");
        Some(ended)
    }

    /// The terminal changed size
    pub fn container_resized(&self, editor: &mut dyn EditorAdapter) {
        editor.layout();
    }
}

impl Default for LayoutResizer {
    fn default() -> Self {
        Self::new(SplitBounds::PANE_SPLIT, SplitBounds::OUTPUT_SPLIT)
    }
}
