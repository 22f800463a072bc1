//! Tab Selector Component
//!
//! A horizontal tab strip. The selected item carries a `▶` marker; every
//! item reports the columns it occupies so callers can register click
//! targets; hover styling is painted onto those targets by the caller.

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};
use unicode_width::UnicodeWidthStr;

use crate::ui::layout::LayoutContext;
use crate::ui::theme::{COLOR_ACCENT, COLOR_DIM};

/// Marker drawn before the selected label
pub const SELECTED_MARKER: &str = "▶ ";
const UNSELECTED_PAD: &str = "  ";
const LEADING_PAD: &str = " ";

/// A single tab item in the selector
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabItem<'a> {
    pub id: i64,
    pub label: &'a str,
}

impl<'a> TabItem<'a> {
    pub fn new(id: i64, label: &'a str) -> Self {
        Self { id, label }
    }
}

/// Columns occupied by one rendered tab, relative to the start of the line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TabSegment {
    pub id: i64,
    pub offset: u16,
    pub width: u16,
}

/// A rendered tab strip.
#[derive(Debug, Clone)]
pub struct RenderedTabs {
    pub line: Line<'static>,
    /// One entry per item, in item order
    pub segments: Vec<TabSegment>,
}

/// Render a horizontal tab selector.
///
/// An item is drawn as selected when its id equals `selected_id`; more than
/// one item can match if ids repeat, and none need to.
///
/// ```ignore
/// let items = vec![TabItem::new(1, "person"), TabItem::new(2, "car")];
/// let tabs = render_tab_selector(&items, 2, &ctx);
/// assert_eq!(tabs.segments.len(), 2);
/// ```
pub fn render_tab_selector(
    items: &[TabItem<'_>],
    selected_id: i64,
    ctx: &LayoutContext,
) -> RenderedTabs {
    let mut spans: Vec<Span<'static>> = vec![Span::raw(LEADING_PAD)];
    let mut segments = Vec::with_capacity(items.len());
    let mut offset = LEADING_PAD.width() as u16;
    let spacing = " ".repeat(ctx.tab_spacing() as usize);

    for (idx, item) in items.iter().enumerate() {
        let is_selected = item.id == selected_id;

        let (prefix, prefix_style, text_style) = if is_selected {
            (
                SELECTED_MARKER,
                Style::default()
                    .fg(COLOR_ACCENT)
                    .add_modifier(Modifier::BOLD),
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            )
        } else {
            (
                UNSELECTED_PAD,
                Style::default().fg(COLOR_DIM),
                Style::default().fg(COLOR_DIM),
            )
        };

        let width = (prefix.width() + item.label.width()) as u16;
        segments.push(TabSegment {
            id: item.id,
            offset,
            width,
        });
        offset = offset.saturating_add(width);

        spans.push(Span::styled(prefix, prefix_style));
        spans.push(Span::styled(item.label.to_string(), text_style));

        if idx + 1 < items.len() {
            offset = offset.saturating_add(spacing.len() as u16);
            spans.push(Span::raw(spacing.clone()));
        }
    }

    RenderedTabs {
        line: Line::from(spans),
        segments,
    }
}
