//! Status Indicator Component
//!
//! Single-line spinner, success and error indicators for the status bar.

use ratatui::{
    style::{Modifier, Style},
    text::Span,
};

use crate::ui::theme::{COLOR_ACTIVE, COLOR_DIM, COLOR_ERROR, COLOR_PROGRESS};

const SPINNER_FRAMES: [char; 4] = ['◐', '◓', '◑', '◒'];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusIndicatorType {
    /// Work in flight; `frame` picks the spinner glyph
    Spinner { message: String, frame: usize },
    Success { message: String },
    Error { message: String },
    Info { message: String },
}

impl StatusIndicatorType {
    pub fn spinner(message: impl Into<String>, frame: usize) -> Self {
        Self::Spinner {
            message: message.into(),
            frame,
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::Success {
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::Error {
            message: message.into(),
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::Info {
            message: message.into(),
        }
    }
}

pub fn get_spinner_char(frame: usize) -> char {
    SPINNER_FRAMES[frame % SPINNER_FRAMES.len()]
}

/// Render an indicator as spans for a status line.
pub fn render_status_indicator(indicator: &StatusIndicatorType) -> Vec<Span<'static>> {
    match indicator {
        StatusIndicatorType::Spinner { message, frame } => vec![
            Span::styled(
                format!("{} ", get_spinner_char(*frame)),
                Style::default().fg(COLOR_PROGRESS),
            ),
            Span::styled(message.clone(), Style::default().fg(COLOR_PROGRESS)),
        ],
        StatusIndicatorType::Success { message } => vec![
            Span::styled("\u{25CF} ", Style::default().fg(COLOR_ACTIVE)), // Bullet
            Span::styled(
                message.clone(),
                Style::default()
                    .fg(COLOR_ACTIVE)
                    .add_modifier(Modifier::BOLD),
            ),
        ],
        StatusIndicatorType::Error { message } => vec![
            Span::styled("\u{2717} ", Style::default().fg(COLOR_ERROR)), // X mark
            Span::styled(message.clone(), Style::default().fg(COLOR_ERROR)),
        ],
        StatusIndicatorType::Info { message } => vec![
            Span::styled("\u{25CB} ", Style::default().fg(COLOR_DIM)), // Circle
            Span::styled(message.clone(), Style::default().fg(COLOR_DIM)),
        ],
    }
}
