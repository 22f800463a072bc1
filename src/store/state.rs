//! Shared application state.

use crate::models::{EavView, Entity, EntityType};

/// Everything the UI reads. Mutated only by the reducers.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StoreState {
    /// The backend holds an open database connection
    pub connected: bool,
    /// A connect request is in flight
    pub connecting: bool,
    /// An entity type list request is in flight
    pub loading: bool,
    pub entity_types: Vec<EntityType>,

    pub entities: Vec<Entity>,
    pub loading_entities: bool,

    /// Attribute/value rows of `active_entity`
    pub values: Vec<EavView>,
    pub loading_values: bool,

    pub active_en_type: Option<i64>,
    pub active_entity: Option<i64>,

    /// Saves and renames still in flight
    pub pending_writes: usize,

    /// Most recent failure, shown in the status bar
    pub last_error: Option<String>,

    /// Bumped on every reduction; drives redraws.
    pub revision: u64,
}

impl StoreState {
    pub fn active_entity_type(&self) -> Option<&EntityType> {
        let id = self.active_en_type?;
        self.entity_types.iter().find(|t| t.id == id)
    }

    pub fn active_entity(&self) -> Option<&Entity> {
        let id = self.active_entity?;
        self.entities.iter().find(|e| e.id == id)
    }
}
