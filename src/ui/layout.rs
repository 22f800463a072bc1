//! Responsive layout helpers.
//!
//! `LayoutContext` wraps the terminal size and answers the few layout
//! questions the screen needs: whether to stack the entity and value panels,
//! how wide each column gets, and how much spacing the tab strip can afford.

/// Terminal width breakpoints
pub mod breakpoints {
    /// Extra small terminal (< 60 columns)
    pub const XS_WIDTH: u16 = 60;
    /// Small terminal (< 80 columns)
    pub const SM_WIDTH: u16 = 80;
    /// Medium terminal (< 120 columns)
    pub const MD_WIDTH: u16 = 120;

    /// Small terminal height (< 24 rows)
    pub const SM_HEIGHT: u16 = 24;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutContext {
    pub width: u16,
    pub height: u16,
}

impl LayoutContext {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    pub fn from_rect(area: ratatui::layout::Rect) -> Self {
        Self::new(area.width, area.height)
    }

    /// Less than 80 columns.
    pub fn is_narrow(&self) -> bool {
        self.width < breakpoints::SM_WIDTH
    }

    /// Narrow or shorter than 24 rows.
    pub fn is_compact(&self) -> bool {
        self.is_narrow() || self.height < breakpoints::SM_HEIGHT
    }

    pub fn is_extra_small(&self) -> bool {
        self.width < breakpoints::XS_WIDTH
    }

    /// Stack the entity list above the value table instead of side by side.
    pub fn should_stack_panels(&self) -> bool {
        self.width < breakpoints::SM_WIDTH
    }

    /// `(left, right)` widths for the entity list and value table.
    ///
    /// - < 120 columns: 40/60
    /// - wider: 35/65 with the left column capped at 60
    pub fn two_column_widths(&self) -> (u16, u16) {
        let left = if self.width < breakpoints::MD_WIDTH {
            (self.width * 40) / 100
        } else {
            ((self.width * 35) / 100).min(60)
        };
        (left, self.width - left)
    }

    /// Columns between two tabs in the tab strip.
    pub fn tab_spacing(&self) -> u16 {
        if self.is_extra_small() {
            1
        } else if self.is_compact() {
            2
        } else {
            3
        }
    }
}
