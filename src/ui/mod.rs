//! UI rendering.
//!
//! Screen layout, top to bottom:
//! - title bar
//! - entity type tab strip
//! - entity list (left) and value table (right), stacked on narrow terminals
//! - status bar with connection state, errors and key hints
//!
//! Click targets are re-registered on every frame, so the registry always
//! matches what is on screen. Hover is recomputed against the fresh targets
//! from the last pointer position and painted last.

pub mod components;
pub mod interaction;
pub mod layout;
mod panels;
pub mod theme;

pub use layout::{breakpoints, LayoutContext};
pub use panels::scroll_offset;

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::{App, EditState};
use crate::cli::VERSION;
use crate::store::StoreState;
use components::{render_status_indicator, StatusIndicatorType};
use panels::{render_entity_list, render_values_table};
use theme::{COLOR_ACCENT, COLOR_DIM, COLOR_ERROR, COLOR_HEADER};

const KEY_HINTS: &str = "←/→ type  1-9 jump  ↑/↓ move  Enter open  e edit  Tab focus  q quit";
const EDIT_HINTS: &str = "Enter save  Esc cancel";

/// Render the whole screen.
pub fn render(frame: &mut Frame, app: &mut App) {
    app.hit_registry.clear();

    let state = app.store.snapshot();
    let area = frame.area();

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Title
            Constraint::Length(1), // Tabs
            Constraint::Min(3),    // Panels
            Constraint::Length(1), // Status
        ])
        .split(area);

    render_title(frame, rows[0]);
    app.tabs
        .render(frame, rows[1], &app.store, &mut app.hit_registry);
    render_panels(frame, rows[2], app, &state);
    render_status_bar(frame, rows[3], app, &state);

    app.hit_registry.refresh_hover();
    if let Some((rect, style)) = app.hit_registry.hover_highlight() {
        frame.buffer_mut().set_style(rect.intersection(area), style);
    }
}

fn render_title(frame: &mut Frame, area: Rect) {
    let line = Line::from(vec![
        Span::styled(
            " eavtui",
            Style::default().fg(COLOR_HEADER).add_modifier(Modifier::BOLD),
        ),
        Span::styled(format!(" v{}", VERSION), Style::default().fg(COLOR_DIM)),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

fn render_panels(frame: &mut Frame, area: Rect, app: &mut App, state: &StoreState) {
    let ctx = LayoutContext::from_rect(area);
    let (left, right) = if ctx.should_stack_panels() {
        let halves = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(area);
        (halves[0], halves[1])
    } else {
        let (left_width, _) = ctx.two_column_widths();
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(left_width), Constraint::Min(0)])
            .split(area);
        (columns[0], columns[1])
    };

    render_entity_list(frame, left, app, state);
    render_values_table(frame, right, app, state);
}

/// Status text for the current store state. In-flight work wins over the
/// last error, which wins over the idle connection state.
pub fn status_indicator(state: &StoreState, tick: u64) -> StatusIndicatorType {
    let frame = tick as usize / 8;
    if state.connecting {
        StatusIndicatorType::spinner("Connecting to database", frame)
    } else if state.loading {
        StatusIndicatorType::spinner("Loading entity types", frame)
    } else if state.pending_writes > 0 {
        StatusIndicatorType::spinner("Saving", frame)
    } else if let Some(ref err) = state.last_error {
        StatusIndicatorType::error(err.clone())
    } else if state.connected {
        StatusIndicatorType::success(format!(
            "Connected · {} entity types",
            state.entity_types.len()
        ))
    } else {
        StatusIndicatorType::info("Not connected")
    }
}

fn render_status_bar(frame: &mut Frame, area: Rect, app: &App, state: &StoreState) {
    if let Some(ref edit) = app.edit {
        frame.render_widget(Paragraph::new(edit_prompt(edit)), area);
        return;
    }

    let mut spans = vec![Span::raw(" ")];
    spans.extend(render_status_indicator(&status_indicator(state, app.tick_count)));

    let ctx = LayoutContext::from_rect(frame.area());
    if !ctx.is_compact() {
        spans.push(Span::raw("   "));
        spans.push(Span::styled(KEY_HINTS, Style::default().fg(COLOR_DIM)));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn edit_prompt(edit: &EditState) -> Line<'static> {
    let mut spans = vec![
        Span::styled(
            format!(" {}: ", edit.label()),
            Style::default().fg(COLOR_ACCENT).add_modifier(Modifier::BOLD),
        ),
        Span::raw(edit.input.clone()),
        Span::styled("█", Style::default().fg(COLOR_ACCENT)),
        Span::raw("   "),
    ];
    match edit.error {
        Some(ref err) => spans.push(Span::styled(err.clone(), Style::default().fg(COLOR_ERROR))),
        None => spans.push(Span::styled(EDIT_HINTS, Style::default().fg(COLOR_DIM))),
    }
    Line::from(spans)
}
