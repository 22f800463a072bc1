//! Pure state transitions.

use super::action::{Action, Effect, StoreEvent};
use super::state::StoreState;
use crate::models::Entity;

/// Apply the synchronous half of `action` and return the async work it needs.
///
/// Requests already in flight are not repeated: `Connect` is ignored while
/// connecting or connected, `FetchEntityTypes` while loading.
pub fn reduce_action(state: &mut StoreState, action: Action) -> Option<Effect> {
    match action {
        Action::Connect => {
            if state.connecting || state.connected {
                return None;
            }
            state.connecting = true;
            Some(Effect::Connect)
        }
        Action::FetchEntityTypes => {
            if state.loading {
                return None;
            }
            state.loading = true;
            Some(Effect::FetchEntityTypes)
        }
        Action::ClearValues => {
            state.values.clear();
            state.active_entity = None;
            state.loading_values = false;
            None
        }
        Action::FetchEntities(type_id) => {
            state.entities.clear();
            state.loading_entities = true;
            Some(Effect::FetchEntities(type_id))
        }
        Action::SetActiveEnType(type_id) => {
            state.active_en_type = Some(type_id);
            None
        }
        Action::FetchValues(entity_id) => {
            state.values.clear();
            state.active_entity = Some(entity_id);
            state.loading_values = true;
            Some(Effect::FetchValues(entity_id))
        }
        Action::SaveValue(value) => {
            state.pending_writes += 1;
            Some(Effect::SaveValue(value))
        }
        Action::RenameEntity { id, name } => {
            let Some(current) = state.entities.iter().find(|e| e.id == id) else {
                tracing::debug!(id, "rename of an entity not in the list ignored");
                return None;
            };
            let renamed = Entity {
                entity: name,
                ..current.clone()
            };
            state.pending_writes += 1;
            Some(Effect::RenameEntity(renamed))
        }
    }
}

/// Apply the completion of an effect.
///
/// Entity and value responses for anything other than the current selection
/// are stale and dropped.
pub fn reduce_event(state: &mut StoreState, event: StoreEvent) {
    match event {
        StoreEvent::Connected => {
            state.connected = true;
            state.connecting = false;
            state.last_error = None;
        }
        StoreEvent::ConnectFailed(message) => {
            state.connecting = false;
            state.last_error = Some(message);
        }
        StoreEvent::EntityTypesLoaded(entity_types) => {
            state.loading = false;
            state.entity_types = entity_types;
        }
        StoreEvent::EntityTypesFailed(message) => {
            state.loading = false;
            state.last_error = Some(message);
        }
        StoreEvent::EntitiesLoaded { type_id, entities } => {
            if is_stale(state.active_en_type, type_id) {
                tracing::debug!(type_id, "dropping stale entity list");
                return;
            }
            state.loading_entities = false;
            state.entities = entities;
        }
        StoreEvent::EntitiesFailed { type_id, message } => {
            if is_stale(state.active_en_type, type_id) {
                return;
            }
            state.loading_entities = false;
            state.last_error = Some(message);
        }
        StoreEvent::ValuesLoaded { entity_id, values } => {
            if state.active_entity != Some(entity_id) {
                tracing::debug!(entity_id, "dropping stale value rows");
                return;
            }
            state.loading_values = false;
            state.values = values;
        }
        StoreEvent::ValuesFailed { entity_id, message } => {
            if state.active_entity != Some(entity_id) {
                return;
            }
            state.loading_values = false;
            state.last_error = Some(message);
        }
        StoreEvent::ValueSaved(value) => {
            state.pending_writes = state.pending_writes.saturating_sub(1);
            state.last_error = None;
            if state.active_entity != Some(value.entity_id) {
                return;
            }
            // The row holding this value id first, else the attribute's empty slot
            let slot = state
                .values
                .iter()
                .position(|row| row.value_id == Some(value.id) && row.holds(&value))
                .or_else(|| state.values.iter().position(|row| row.holds(&value)));
            if let Some(idx) = slot {
                state.values[idx].apply_value(&value);
            }
        }
        StoreEvent::EntityRenamed(renamed) => {
            state.pending_writes = state.pending_writes.saturating_sub(1);
            state.last_error = None;
            if let Some(entity) = state.entities.iter_mut().find(|e| e.id == renamed.id) {
                entity.entity = renamed.entity.clone();
            }
            if state.active_entity == Some(renamed.id) {
                for row in &mut state.values {
                    row.entity = Some(renamed.entity.clone());
                }
            }
        }
        StoreEvent::WriteFailed(message) => {
            state.pending_writes = state.pending_writes.saturating_sub(1);
            state.last_error = Some(message);
        }
    }
}

/// A response is stale when another type has been made active since the
/// request went out. With no active type every response is accepted.
fn is_stale(active: Option<i64>, type_id: i64) -> bool {
    matches!(active, Some(active) if active != type_id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AttrValue, EavView, EntityType, ValueType};

    fn entity(id: i64, type_id: i64) -> Entity {
        Entity {
            id,
            entity_type_id: type_id,
            entity: format!("e{}", id),
            created_at: None,
        }
    }

    #[test]
    fn test_connect_guarded_while_in_flight() {
        let mut state = StoreState::default();
        assert_eq!(reduce_action(&mut state, Action::Connect), Some(Effect::Connect));
        assert!(state.connecting);
        assert_eq!(reduce_action(&mut state, Action::Connect), None);

        reduce_event(&mut state, StoreEvent::Connected);
        assert!(state.connected);
        assert!(!state.connecting);
        assert_eq!(reduce_action(&mut state, Action::Connect), None);
    }

    #[test]
    fn test_connect_failure_allows_retry() {
        let mut state = StoreState::default();
        reduce_action(&mut state, Action::Connect);
        reduce_event(
            &mut state,
            StoreEvent::ConnectFailed("Could not connect to DB".to_string()),
        );

        assert!(!state.connected);
        assert_eq!(state.last_error.as_deref(), Some("Could not connect to DB"));
        assert_eq!(reduce_action(&mut state, Action::Connect), Some(Effect::Connect));
    }

    #[test]
    fn test_fetch_entity_types_guarded_by_loading() {
        let mut state = StoreState::default();
        assert_eq!(
            reduce_action(&mut state, Action::FetchEntityTypes),
            Some(Effect::FetchEntityTypes)
        );
        assert!(state.loading);
        assert_eq!(reduce_action(&mut state, Action::FetchEntityTypes), None);

        reduce_event(
            &mut state,
            StoreEvent::EntityTypesLoaded(vec![EntityType::new(1, "A")]),
        );
        assert!(!state.loading);
        assert_eq!(state.entity_types.len(), 1);
    }

    #[test]
    fn test_clear_values_resets_selection() {
        let mut state = StoreState {
            values: vec![EavView::default()],
            active_entity: Some(4),
            loading_values: true,
            ..Default::default()
        };

        assert_eq!(reduce_action(&mut state, Action::ClearValues), None);
        assert!(state.values.is_empty());
        assert_eq!(state.active_entity, None);
        assert!(!state.loading_values);
    }

    #[test]
    fn test_tab_selection_sequence() {
        let mut state = StoreState {
            entities: vec![entity(1, 1)],
            ..Default::default()
        };

        reduce_action(&mut state, Action::ClearValues);
        let effect = reduce_action(&mut state, Action::FetchEntities(2));
        reduce_action(&mut state, Action::SetActiveEnType(2));

        assert_eq!(effect, Some(Effect::FetchEntities(2)));
        assert!(state.entities.is_empty());
        assert!(state.loading_entities);
        assert_eq!(state.active_en_type, Some(2));

        reduce_event(
            &mut state,
            StoreEvent::EntitiesLoaded {
                type_id: 2,
                entities: vec![entity(7, 2)],
            },
        );
        assert!(!state.loading_entities);
        assert_eq!(state.entities, vec![entity(7, 2)]);
    }

    #[test]
    fn test_stale_entities_dropped() {
        let mut state = StoreState::default();
        reduce_action(&mut state, Action::FetchEntities(1));
        reduce_action(&mut state, Action::SetActiveEnType(1));
        reduce_action(&mut state, Action::FetchEntities(2));
        reduce_action(&mut state, Action::SetActiveEnType(2));

        reduce_event(
            &mut state,
            StoreEvent::EntitiesLoaded {
                type_id: 1,
                entities: vec![entity(1, 1)],
            },
        );
        assert!(state.entities.is_empty());
        assert!(state.loading_entities);

        reduce_event(
            &mut state,
            StoreEvent::EntitiesFailed {
                type_id: 1,
                message: "late".to_string(),
            },
        );
        assert_eq!(state.last_error, None);
    }

    #[test]
    fn test_values_for_other_entity_dropped() {
        let mut state = StoreState::default();
        reduce_action(&mut state, Action::FetchValues(5));
        reduce_event(
            &mut state,
            StoreEvent::ValuesLoaded {
                entity_id: 6,
                values: vec![EavView::default()],
            },
        );
        assert!(state.values.is_empty());
        assert!(state.loading_values);

        reduce_event(
            &mut state,
            StoreEvent::ValuesLoaded {
                entity_id: 5,
                values: vec![EavView::default()],
            },
        );
        assert_eq!(state.values.len(), 1);
        assert!(!state.loading_values);
    }

    fn view(attr_id: i64, value_id: Option<i64>, value: Option<i64>) -> EavView {
        EavView {
            entity_id: Some(4),
            attr_id: Some(attr_id),
            value_type: Some(ValueType::Int),
            value_id,
            value_int: value,
            ..Default::default()
        }
    }

    #[test]
    fn test_saved_value_updates_matching_row() {
        let mut state = StoreState {
            active_entity: Some(4),
            values: vec![view(1, Some(10), Some(1)), view(2, None, None)],
            ..Default::default()
        };
        let update = AttrValue {
            id: 10,
            entity_id: 4,
            attr_id: 1,
            value_int: Some(5),
            ..Default::default()
        };

        assert_eq!(
            reduce_action(&mut state, Action::SaveValue(update.clone())),
            Some(Effect::SaveValue(update.clone()))
        );
        assert_eq!(state.pending_writes, 1);

        reduce_event(&mut state, StoreEvent::ValueSaved(update));
        assert_eq!(state.pending_writes, 0);
        assert_eq!(state.values[0].display_value(), "5");

        // A created value fills the empty slot and takes its new id
        reduce_event(
            &mut state,
            StoreEvent::ValueSaved(AttrValue {
                id: 11,
                entity_id: 4,
                attr_id: 2,
                value_int: Some(8),
                ..Default::default()
            }),
        );
        assert_eq!(state.values[1].value_id, Some(11));
        assert_eq!(state.values[1].display_value(), "8");
    }

    #[test]
    fn test_saved_value_for_closed_entity_leaves_rows() {
        let mut state = StoreState {
            active_entity: Some(7),
            values: vec![view(1, Some(10), Some(1))],
            pending_writes: 1,
            ..Default::default()
        };
        reduce_event(
            &mut state,
            StoreEvent::ValueSaved(AttrValue {
                id: 10,
                entity_id: 4,
                attr_id: 1,
                value_int: Some(5),
                ..Default::default()
            }),
        );
        assert_eq!(state.pending_writes, 0);
        assert_eq!(state.values[0].display_value(), "1");
    }

    #[test]
    fn test_rename_entity() {
        let mut state = StoreState {
            entities: vec![entity(1, 1), entity(2, 1)],
            ..Default::default()
        };

        let effect = reduce_action(
            &mut state,
            Action::RenameEntity {
                id: 2,
                name: "renamed".to_string(),
            },
        );
        let renamed = match effect {
            Some(Effect::RenameEntity(renamed)) => renamed,
            other => panic!("expected rename effect, got {:?}", other),
        };
        assert_eq!(renamed.entity, "renamed");
        assert_eq!(renamed.entity_type_id, 1);
        assert_eq!(state.entities[1].entity, "e2");

        reduce_event(&mut state, StoreEvent::EntityRenamed(renamed));
        assert_eq!(state.entities[1].entity, "renamed");
        assert_eq!(state.pending_writes, 0);

        let unknown = reduce_action(
            &mut state,
            Action::RenameEntity {
                id: 99,
                name: "x".to_string(),
            },
        );
        assert_eq!(unknown, None);
        assert_eq!(state.pending_writes, 0);
    }

    #[test]
    fn test_write_failure_reported() {
        let mut state = StoreState {
            pending_writes: 1,
            ..Default::default()
        };
        reduce_event(
            &mut state,
            StoreEvent::WriteFailed("Server Error (HTTP 500)".to_string()),
        );
        assert_eq!(state.pending_writes, 0);
        assert_eq!(state.last_error.as_deref(), Some("Server Error (HTTP 500)"));
    }
}
