//! Async side of the store.

use tokio::sync::mpsc;

use super::action::{Effect, StoreEvent};
use super::handle::StoreHandle;
use crate::api::EavClient;
use crate::error::{EavError, ErrorContext, NetworkError};
use crate::models::DbAccess;

/// Drains the effect channel and runs each effect against the backend.
///
/// Every effect is spawned on its own task so a slow request never holds up
/// the ones queued behind it. Completions are applied to the store in the
/// order they finish.
pub struct EffectRunner {
    client: EavClient,
    db: DbAccess,
    store: StoreHandle,
    effects: mpsc::UnboundedReceiver<Effect>,
}

impl EffectRunner {
    pub fn new(
        client: EavClient,
        db: DbAccess,
        store: StoreHandle,
        effects: mpsc::UnboundedReceiver<Effect>,
    ) -> Self {
        Self {
            client,
            db,
            store,
            effects,
        }
    }

    /// Run until every [`StoreHandle`] has been dropped.
    pub async fn run(mut self) {
        tracing::info!(base_url = %self.client.base_url, "effect runner started");
        while let Some(effect) = self.effects.recv().await {
            let client = self.client.clone();
            let db = self.db.clone();
            let store = self.store.clone();
            tokio::spawn(async move {
                let event = execute(&client, &db, effect).await;
                store.apply(event);
            });
        }
        tracing::info!("effect runner stopped");
    }
}

/// Log a failed effect with its context and return the status bar text.
fn report(err: NetworkError, ctx: ErrorContext) -> String {
    let err = EavError::from(err).with_context(ctx);
    tracing::warn!(
        code = err.error_code(),
        retryable = err.is_retryable(),
        context = %err.context().map(|c| c.to_log_string()).unwrap_or_default(),
        "{}",
        err
    );
    err.user_message()
}

/// Perform one effect and describe its outcome.
pub async fn execute(client: &EavClient, db: &DbAccess, effect: Effect) -> StoreEvent {
    match effect {
        Effect::Connect => match client.connect(db).await {
            Ok(()) => {
                tracing::info!("database connected");
                StoreEvent::Connected
            }
            Err(e) => StoreEvent::ConnectFailed(report(
                e,
                ErrorContext::new("connect").with_component("effects"),
            )),
        },
        Effect::FetchEntityTypes => match client.entity_types().await {
            Ok(types) => {
                tracing::debug!(count = types.len(), "entity types loaded");
                StoreEvent::EntityTypesLoaded(types)
            }
            Err(e) => StoreEvent::EntityTypesFailed(report(
                e,
                ErrorContext::new("fetch entity types").with_component("effects"),
            )),
        },
        Effect::FetchEntities(type_id) => match client.entities_for_type(type_id).await {
            Ok(entities) => StoreEvent::EntitiesLoaded { type_id, entities },
            Err(e) => StoreEvent::EntitiesFailed {
                type_id,
                message: report(
                    e,
                    ErrorContext::new("fetch entities")
                        .with_entity_type(type_id)
                        .with_component("effects"),
                ),
            },
        },
        Effect::FetchValues(entity_id) => match client.entity_view(entity_id).await {
            Ok(values) => StoreEvent::ValuesLoaded { entity_id, values },
            Err(e) => StoreEvent::ValuesFailed {
                entity_id,
                message: report(
                    e,
                    ErrorContext::new("fetch entity values")
                        .with_entity(entity_id)
                        .with_component("effects"),
                ),
            },
        },
        Effect::SaveValue(value) => {
            let saved = if value.is_new() {
                client.create_value(&value).await
            } else {
                client.update_value(&value).await.map(|()| value.clone())
            };
            match saved {
                Ok(saved) => {
                    tracing::info!(value_id = saved.id, attr_id = saved.attr_id, "value saved");
                    StoreEvent::ValueSaved(saved)
                }
                Err(e) => StoreEvent::WriteFailed(report(
                    e,
                    ErrorContext::new("save value")
                        .with_entity(value.entity_id)
                        .with_component("effects"),
                )),
            }
        }
        Effect::RenameEntity(entity) => match client.update_entity(&entity).await {
            Ok(()) => {
                tracing::info!(entity_id = entity.id, "entity renamed");
                StoreEvent::EntityRenamed(entity)
            }
            Err(e) => StoreEvent::WriteFailed(report(
                e,
                ErrorContext::new("rename entity")
                    .with_entity(entity.id)
                    .with_component("effects"),
            )),
        },
    }
}
