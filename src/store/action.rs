//! Actions, effects and effect completions.

use crate::models::{AttrValue, EavView, Entity, EntityType};

/// Requests dispatched by components. Fire-and-forget.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Open the backend's database connection
    Connect,
    /// Load the entity type list
    FetchEntityTypes,
    /// Drop the value table and the selected entity
    ClearValues,
    /// Load the entities of a type
    FetchEntities(i64),
    /// Record the type the user is looking at
    SetActiveEnType(i64),
    /// Load the attribute/value rows of an entity
    FetchValues(i64),
    /// Store a typed value: update when it has an id, create otherwise
    SaveValue(AttrValue),
    /// Give an entity of the current list a new name
    RenameEntity { id: i64, name: String },
}

impl Action {
    pub fn name(&self) -> &'static str {
        match self {
            Action::Connect => "connect",
            Action::FetchEntityTypes => "fetch_entity_types",
            Action::ClearValues => "clear_values",
            Action::FetchEntities(_) => "fetch_entities",
            Action::SetActiveEnType(_) => "set_active_en_type",
            Action::FetchValues(_) => "fetch_values",
            Action::SaveValue(_) => "save_value",
            Action::RenameEntity { .. } => "rename_entity",
        }
    }
}

/// Async work requested by a reduced action, executed by the effect runner.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    Connect,
    FetchEntityTypes,
    FetchEntities(i64),
    FetchValues(i64),
    SaveValue(AttrValue),
    /// The entity as it should be stored
    RenameEntity(Entity),
}

/// Completion of an [`Effect`], fed back into the store.
#[derive(Debug, Clone, PartialEq)]
pub enum StoreEvent {
    Connected,
    ConnectFailed(String),
    EntityTypesLoaded(Vec<EntityType>),
    EntityTypesFailed(String),
    EntitiesLoaded {
        type_id: i64,
        entities: Vec<Entity>,
    },
    EntitiesFailed {
        type_id: i64,
        message: String,
    },
    ValuesLoaded {
        entity_id: i64,
        values: Vec<EavView>,
    },
    ValuesFailed {
        entity_id: i64,
        message: String,
    },
    /// The value as stored, with its database id
    ValueSaved(AttrValue),
    EntityRenamed(Entity),
    /// A save or rename was refused
    WriteFailed(String),
}
