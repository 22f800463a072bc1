//! Reusable UI Components
//!
//! - `EntityTypeTabs` - store-driven entity type tab strip
//! - `TabSelector` - horizontal tab line with a `▶` marker and click segments
//! - `StatusIndicator` - spinner, success and error indicators

pub mod entity_type_tabs;
mod status_indicator;
mod tab_selector;

pub use entity_type_tabs::{EntityTypeTabs, DISCONNECTED_PLACEHOLDER, NO_TAB_SELECTED};
pub use status_indicator::{get_spinner_char, render_status_indicator, StatusIndicatorType};
pub use tab_selector::{render_tab_selector, RenderedTabs, TabItem, TabSegment, SELECTED_MARKER};
