//! Entity list and value table panels.

use ratatui::{
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Cell, Paragraph, Row, Table},
    Frame,
};

use crate::app::{App, Focus};
use crate::store::StoreState;
use crate::ui::interaction::ClickAction;

use super::components::get_spinner_char;
use super::theme::{COLOR_ACCENT, COLOR_BORDER, COLOR_DIM, COLOR_HEADER, COLOR_SELECTION_BG};

fn panel_block(title: String, focused: bool) -> Block<'static> {
    let (border, title_style) = if focused {
        (
            Style::default().fg(COLOR_ACCENT),
            Style::default().fg(COLOR_HEADER).add_modifier(Modifier::BOLD),
        )
    } else {
        (
            Style::default().fg(COLOR_BORDER),
            Style::default().fg(COLOR_DIM),
        )
    };
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Plain)
        .border_style(border)
        .title(Span::styled(title, title_style))
}

fn hint(frame: &mut Frame, area: Rect, text: String) {
    let line = Line::from(Span::styled(text, Style::default().fg(COLOR_DIM)));
    frame.render_widget(Paragraph::new(line), area);
}

/// First row to show so that `cursor` stays inside a window of `visible`
/// rows.
pub fn scroll_offset(cursor: usize, visible: usize) -> usize {
    if visible == 0 {
        return 0;
    }
    cursor.saturating_sub(visible - 1)
}

/// Entities of the active type. Each visible row is clickable.
pub fn render_entity_list(frame: &mut Frame, area: Rect, app: &mut App, state: &StoreState) {
    let focused = app.focus == Focus::Entities;
    let title = match state.active_entity_type() {
        Some(t) => format!(" {} ", t.entity_type),
        None => " Entities ".to_string(),
    };
    let block = panel_block(title, focused);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if inner.height == 0 {
        return;
    }
    if state.loading_entities {
        let spinner = get_spinner_char(app.tick_count as usize / 8);
        hint(frame, inner, format!(" {} Loading entities...", spinner));
        return;
    }
    if state.active_en_type.is_none() {
        hint(frame, inner, " Select an entity type".to_string());
        return;
    }
    if state.entities.is_empty() {
        hint(frame, inner, " No entities".to_string());
        return;
    }

    let visible = inner.height as usize;
    let cursor = app.entity_cursor.min(state.entities.len() - 1);
    let offset = scroll_offset(cursor, visible);

    let lines: Vec<Line> = state
        .entities
        .iter()
        .enumerate()
        .skip(offset)
        .take(visible)
        .map(|(idx, entity)| {
            let is_cursor = idx == cursor;
            let is_open = state.active_entity == Some(entity.id);
            let marker = if is_open { "▶ " } else { "  " };
            let mut style = Style::default().fg(if is_cursor { Color::White } else { COLOR_DIM });
            if is_cursor && focused {
                style = style.bg(COLOR_SELECTION_BG).add_modifier(Modifier::BOLD);
            }
            Line::from(vec![
                Span::styled(marker, Style::default().fg(COLOR_ACCENT)),
                Span::styled(entity.entity.clone(), style),
            ])
        })
        .collect();

    for row in 0..lines.len() {
        let entity = &state.entities[offset + row];
        app.hit_registry.register(
            Rect::new(inner.x, inner.y + row as u16, inner.width, 1),
            ClickAction::SelectEntity(entity.id),
            Some(Style::default().add_modifier(Modifier::UNDERLINED)),
        );
    }

    frame.render_widget(Paragraph::new(lines), inner);
}

/// Attribute/value rows of the open entity. The top row is the edit target
/// and is highlighted while the panel has focus.
pub fn render_values_table(frame: &mut Frame, area: Rect, app: &App, state: &StoreState) {
    let focused = app.focus == Focus::Values;
    let title = match state.active_entity() {
        Some(e) => format!(" {} ", e.entity),
        None => " Values ".to_string(),
    };
    let block = panel_block(title, focused);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if inner.height == 0 {
        return;
    }
    if state.loading_values {
        let spinner = get_spinner_char(app.tick_count as usize / 8);
        hint(frame, inner, format!(" {} Loading values...", spinner));
        return;
    }
    if state.active_entity.is_none() {
        hint(frame, inner, " Press Enter on an entity to show its values".to_string());
        return;
    }
    if state.values.is_empty() {
        hint(frame, inner, " No attributes".to_string());
        return;
    }

    let header = Row::new(vec!["Attribute", "Type", "Value"])
        .style(Style::default().fg(COLOR_HEADER).add_modifier(Modifier::BOLD));
    let scroll = app.values_scroll.min(state.values.len() - 1);
    let rows = state.values.iter().skip(scroll).enumerate().map(|(row, view)| {
        let value = view.display_value();
        let value_cell = if value.is_empty() {
            Cell::from(Span::styled("-", Style::default().fg(COLOR_DIM)))
        } else {
            Cell::from(value)
        };
        let cells = Row::new(vec![
            Cell::from(view.attr.clone().unwrap_or_default()),
            Cell::from(Span::styled(
                view.value_type.map(|t| t.as_str()).unwrap_or(""),
                Style::default().fg(COLOR_DIM),
            )),
            value_cell,
        ]);
        if focused && row == 0 {
            cells.style(Style::default().bg(COLOR_SELECTION_BG))
        } else {
            cells
        }
    });

    let table = Table::new(
        rows,
        [
            Constraint::Percentage(35),
            Constraint::Length(6),
            Constraint::Min(10),
        ],
    )
    .header(header)
    .column_spacing(1);
    frame.render_widget(table, inner);
}
