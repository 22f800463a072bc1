//! Color theme constants.

use ratatui::style::Color;

/// Panel borders
pub const COLOR_BORDER: Color = Color::DarkGray;

/// Focused panel border and the selected tab marker
pub const COLOR_ACCENT: Color = Color::White;

pub const COLOR_HEADER: Color = Color::White;

/// Connected indicator
pub const COLOR_ACTIVE: Color = Color::LightGreen;

/// Secondary text, unselected tabs, placeholder
pub const COLOR_DIM: Color = Color::DarkGray;

/// Selected row background in the entity list
pub const COLOR_SELECTION_BG: Color = Color::Rgb(30, 35, 55);

/// Loading spinner
pub const COLOR_PROGRESS: Color = Color::Rgb(0, 122, 204); // blue #007ACC

pub const COLOR_ERROR: Color = Color::Red;
