//! The concrete store.

use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
use tokio::sync::{mpsc, watch};

use super::action::{Action, Effect, StoreEvent};
use super::reducer::{reduce_action, reduce_event};
use super::state::StoreState;
use crate::models::EntityType;
use crate::traits::EavStore;

struct Inner {
    state: RwLock<StoreState>,
    effect_tx: mpsc::UnboundedSender<Effect>,
    connected_tx: watch::Sender<bool>,
    revision_tx: watch::Sender<u64>,
}

/// Cloneable handle to the shared store.
///
/// `dispatch` reduces the action synchronously and hands any async work to
/// the [`super::EffectRunner`] over an unbounded channel, so it never blocks
/// the UI loop.
#[derive(Clone)]
pub struct StoreHandle {
    inner: Arc<Inner>,
}

impl StoreHandle {
    /// Create a store and the receiving end of its effect channel.
    pub fn new() -> (Self, mpsc::UnboundedReceiver<Effect>) {
        Self::with_state(StoreState::default())
    }

    pub fn with_state(state: StoreState) -> (Self, mpsc::UnboundedReceiver<Effect>) {
        let (effect_tx, effect_rx) = mpsc::unbounded_channel();
        let (connected_tx, _) = watch::channel(state.connected);
        let (revision_tx, _) = watch::channel(state.revision);
        let handle = Self {
            inner: Arc::new(Inner {
                state: RwLock::new(state),
                effect_tx,
                connected_tx,
                revision_tx,
            }),
        };
        (handle, effect_rx)
    }

    fn read(&self) -> RwLockReadGuard<'_, StoreState> {
        self.inner
            .state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, StoreState> {
        self.inner
            .state
            .write()
            .unwrap_or_else(PoisonError::into_inner)
    }

    /// Clone of the full state, for rendering.
    pub fn snapshot(&self) -> StoreState {
        self.read().clone()
    }

    /// Whether any request is in flight. Reads the flags only.
    pub fn is_busy(&self) -> bool {
        let state = self.read();
        state.connecting
            || state.loading
            || state.loading_entities
            || state.loading_values
            || state.pending_writes > 0
    }

    /// Feed an effect completion into the store.
    pub fn apply(&self, event: StoreEvent) {
        let mut state = self.write();
        reduce_event(&mut state, event);
        self.publish(&mut state);
    }

    /// Receiver that changes after every reduction.
    pub fn subscribe_revision(&self) -> watch::Receiver<u64> {
        self.inner.revision_tx.subscribe()
    }

    fn publish(&self, state: &mut StoreState) {
        state.revision += 1;
        let connected = state.connected;
        self.inner.connected_tx.send_if_modified(|current| {
            if *current == connected {
                return false;
            }
            *current = connected;
            true
        });
        self.inner.revision_tx.send_replace(state.revision);
    }
}

impl EavStore for StoreHandle {
    fn connected(&self) -> bool {
        self.read().connected
    }

    fn loading(&self) -> bool {
        self.read().loading
    }

    fn entity_types(&self) -> Vec<EntityType> {
        self.read().entity_types.clone()
    }

    fn dispatch(&self, action: Action) {
        tracing::debug!(action = action.name(), ?action, "dispatch");
        let effect = {
            let mut state = self.write();
            let effect = reduce_action(&mut state, action);
            self.publish(&mut state);
            effect
        };

        if let Some(effect) = effect {
            if let Err(mpsc::error::SendError(effect)) = self.inner.effect_tx.send(effect) {
                tracing::warn!(?effect, "effect runner stopped; dropping effect");
            }
        }
    }

    fn subscribe_connected(&self) -> watch::Receiver<bool> {
        self.inner.connected_tx.subscribe()
    }
}
