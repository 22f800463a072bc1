//! Shared helpers for integration tests.

#![allow(dead_code)]

use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use ratatui::Terminal;
use std::time::Duration;

use eavtui::adapters::mock::RecordingStore;
use eavtui::models::{Entity, EntityType};
use eavtui::store::{StoreHandle, StoreState};
use eavtui::traits::EavStore;
use eavtui::ui::components::EntityTypeTabs;
use eavtui::ui::interaction::HitAreaRegistry;

pub fn types_ab() -> Vec<EntityType> {
    vec![EntityType::new(1, "A"), EntityType::new(2, "B")]
}

pub fn entity(id: i64, type_id: i64, name: &str) -> Entity {
    Entity {
        id,
        entity_type_id: type_id,
        entity: name.to_string(),
        created_at: None,
    }
}

/// Recording store that is connected, idle and holds `types`.
pub fn connected_store(types: Vec<EntityType>) -> RecordingStore {
    let store = RecordingStore::new();
    store.set_entity_types(types);
    store.set_connected(true);
    store
}

/// Text of row `y`.
pub fn row_text(buffer: &Buffer, y: u16) -> String {
    (0..buffer.area.width)
        .map(|x| buffer[(x, y)].symbol())
        .collect()
}

/// Render the tab strip alone into a one-row terminal.
pub fn render_tabs(
    tabs: &EntityTypeTabs,
    store: &dyn EavStore,
    width: u16,
) -> (String, HitAreaRegistry) {
    let mut terminal = Terminal::new(TestBackend::new(width, 1)).unwrap();
    let mut registry = HitAreaRegistry::new();
    terminal
        .draw(|f| {
            let area = f.area();
            tabs.render(f, area, store, &mut registry);
        })
        .unwrap();
    let text = row_text(terminal.backend().buffer(), 0);
    (text, registry)
}

/// Concrete store with `state` and its effect receiver kept alive.
pub fn store_with(
    state: StoreState,
) -> (StoreHandle, tokio::sync::mpsc::UnboundedReceiver<eavtui::store::Effect>) {
    StoreHandle::with_state(state)
}

/// Poll `pred` against the store snapshot until it holds or two seconds pass.
pub async fn wait_for<F>(store: &StoreHandle, pred: F) -> StoreState
where
    F: Fn(&StoreState) -> bool,
{
    let deadline = tokio::time::Instant::now() + Duration::from_secs(2);
    loop {
        let state = store.snapshot();
        if pred(&state) {
            return state;
        }
        if tokio::time::Instant::now() >= deadline {
            panic!("condition not reached; last state: {:?}", state);
        }
        tokio::time::sleep(Duration::from_millis(5)).await;
    }
}
