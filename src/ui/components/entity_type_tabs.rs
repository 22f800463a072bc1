//! Entity type tab strip.
//!
//! One tab per entity type known to the store. Selecting a tab clears the
//! value table, loads the entities of that type and makes it the active
//! type. While the backend has no database connection the strip shows a
//! placeholder instead.
//!
//! The component owns a single piece of state, the id of the tab the user
//! last selected. Everything else is read from the injected [`EavStore`]
//! at the moment it is needed.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use tokio::sync::watch;

use super::tab_selector::{render_tab_selector, TabItem};
use crate::store::Action;
use crate::traits::EavStore;
use crate::ui::interaction::{ClickAction, HitAreaRegistry};
use crate::ui::layout::LayoutContext;
use crate::ui::theme::COLOR_DIM;

/// Selection a fresh component starts with. Entity type ids are assigned by
/// the database starting at 1, so no real tab matches it.
pub const NO_TAB_SELECTED: i64 = 0;

/// Text shown instead of tabs while disconnected.
pub const DISCONNECTED_PLACEHOLDER: &str = "DB not connected";

#[derive(Debug)]
pub struct EntityTypeTabs {
    active_tab_id: i64,
    /// `connected` subscription, present while mounted
    connected_rx: Option<watch::Receiver<bool>>,
}

impl Default for EntityTypeTabs {
    fn default() -> Self {
        Self::new()
    }
}

impl EntityTypeTabs {
    pub fn new() -> Self {
        Self {
            active_tab_id: NO_TAB_SELECTED,
            connected_rx: None,
        }
    }

    pub fn active_tab_id(&self) -> i64 {
        self.active_tab_id
    }

    pub fn is_selected(&self, id: i64) -> bool {
        self.active_tab_id == id
    }

    pub fn is_mounted(&self) -> bool {
        self.connected_rx.is_some()
    }

    /// Subscribe to the store's `connected` slice and run the bootstrap once.
    ///
    /// Mounting an already mounted component replaces the subscription and
    /// bootstraps again.
    pub fn mount(&mut self, store: &dyn EavStore) {
        self.connected_rx = Some(store.subscribe_connected());
        tracing::debug!(connected = store.connected(), "entity type tabs mounted");
        self.bootstrap(store);
    }

    /// Drop the subscription. Requests already dispatched are not cancelled.
    pub fn unmount(&mut self) {
        self.connected_rx = None;
    }

    /// Run the bootstrap if `connected` changed since the last poll.
    ///
    /// Several changes between two polls count as one. Returns whether the
    /// bootstrap ran.
    pub fn poll(&mut self, store: &dyn EavStore) -> bool {
        let Some(rx) = self.connected_rx.as_mut() else {
            return false;
        };
        match rx.has_changed() {
            Ok(true) => {
                rx.borrow_and_update();
            }
            // Not changed, or the store is gone
            _ => return false,
        }
        self.bootstrap(store);
        true
    }

    /// Disconnected: ask for a connection. Connected and idle: ask for the
    /// entity type list. Connected and already loading: nothing.
    fn bootstrap(&self, store: &dyn EavStore) {
        if !store.connected() {
            tracing::debug!("bootstrap: requesting connection");
            store.dispatch(Action::Connect);
        } else if !store.loading() {
            tracing::debug!("bootstrap: requesting entity types");
            store.dispatch(Action::FetchEntityTypes);
        }
    }

    /// Make `id` the selected tab and request its data.
    ///
    /// Issues `ClearValues`, `FetchEntities(id)` and `SetActiveEnType(id)`
    /// in that order without waiting on any of them. Selecting the tab that
    /// is already selected issues all three again.
    pub fn select_tab(&mut self, store: &dyn EavStore, id: i64) {
        tracing::debug!(id, "select entity type tab");
        self.active_tab_id = id;
        store.dispatch(Action::ClearValues);
        store.dispatch(Action::FetchEntities(id));
        store.dispatch(Action::SetActiveEnType(id));
    }

    /// Render into `area` (one row is used) and register one click target
    /// per tab, underlined while hovered. Nothing is registered while
    /// disconnected.
    pub fn render(
        &self,
        frame: &mut Frame,
        area: Rect,
        store: &dyn EavStore,
        registry: &mut HitAreaRegistry,
    ) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        if !store.connected() {
            let placeholder = Line::from(vec![
                Span::raw(" "),
                Span::styled(
                    DISCONNECTED_PLACEHOLDER,
                    Style::default()
                        .fg(COLOR_DIM)
                        .add_modifier(Modifier::ITALIC),
                ),
            ]);
            frame.render_widget(Paragraph::new(placeholder), area);
            return;
        }

        let entity_types = store.entity_types();
        let items: Vec<TabItem<'_>> = entity_types
            .iter()
            .map(|t| TabItem::new(t.id, &t.entity_type))
            .collect();
        let ctx = LayoutContext::from_rect(frame.area());
        let rendered = render_tab_selector(&items, self.active_tab_id, &ctx);

        frame.render_widget(Paragraph::new(rendered.line), area);

        let right_edge = area.x.saturating_add(area.width);
        for segment in rendered.segments {
            let x = area.x.saturating_add(segment.offset);
            if x >= right_edge {
                break;
            }
            let width = segment.width.min(right_edge - x);
            registry.register(
                Rect::new(x, area.y, width, 1),
                ClickAction::SelectTab(segment.id),
                Some(Style::default().add_modifier(Modifier::UNDERLINED)),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::mock::RecordingStore;
    use crate::models::EntityType;

    #[test]
    fn test_new_component_selects_sentinel() {
        let tabs = EntityTypeTabs::new();
        assert_eq!(tabs.active_tab_id(), NO_TAB_SELECTED);
        assert!(!tabs.is_mounted());
        assert!(tabs.is_selected(0));
        assert!(!tabs.is_selected(1));
    }

    #[test]
    fn test_mount_disconnected_requests_connection() {
        let store = RecordingStore::new();
        let mut tabs = EntityTypeTabs::new();
        tabs.mount(&store);

        assert_eq!(store.actions(), vec![Action::Connect]);
        assert!(tabs.is_mounted());
    }

    #[test]
    fn test_mount_connected_and_loading_requests_nothing() {
        let store = RecordingStore::new();
        store.set_connected(true);
        store.set_loading(true);

        let mut tabs = EntityTypeTabs::new();
        tabs.mount(&store);
        assert!(store.actions().is_empty());
    }

    #[test]
    fn test_poll_without_change_does_nothing() {
        let store = RecordingStore::new();
        let mut tabs = EntityTypeTabs::new();
        tabs.mount(&store);
        store.take_actions();

        assert!(!tabs.poll(&store));
        assert!(store.actions().is_empty());
    }

    #[test]
    fn test_unmount_drops_subscription() {
        let store = RecordingStore::new();
        let mut tabs = EntityTypeTabs::new();
        tabs.mount(&store);
        assert_eq!(store.subscriber_count(), 1);

        tabs.unmount();
        assert_eq!(store.subscriber_count(), 0);

        store.set_connected(true);
        assert!(!tabs.poll(&store));
    }

    #[test]
    fn test_select_tab_order() {
        let store = RecordingStore::new();
        store.set_entity_types(vec![EntityType::new(1, "A")]);
        let mut tabs = EntityTypeTabs::new();

        tabs.select_tab(&store, 1);
        assert_eq!(tabs.active_tab_id(), 1);
        assert_eq!(
            store.actions(),
            vec![
                Action::ClearValues,
                Action::FetchEntities(1),
                Action::SetActiveEnType(1)
            ]
        );
    }

    #[test]
    fn test_select_unknown_id_is_allowed() {
        let store = RecordingStore::new();
        let mut tabs = EntityTypeTabs::new();
        tabs.select_tab(&store, 42);
        assert!(tabs.is_selected(42));
    }
}
