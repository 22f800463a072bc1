//! Click action dispatch.

use super::hit_area::ClickAction;
use crate::app::App;

/// Apply a click that landed on a registered hit area.
pub fn handle_click_action(app: &mut App, action: ClickAction) {
    app.mark_dirty();

    match action {
        ClickAction::SelectTab(id) => {
            tracing::debug!("Click: SelectTab({})", id);
            app.select_tab(id);
        }
        ClickAction::SelectEntity(id) => {
            tracing::debug!("Click: SelectEntity({})", id);
            app.focus = crate::app::Focus::Entities;
            app.select_entity(id);
        }
    }
}
