//! Recording store for component tests.
//!
//! Selectors return whatever the test set; dispatched actions are recorded
//! instead of being reduced.

use std::sync::{Arc, Mutex};
use tokio::sync::watch;

use crate::models::EntityType;
use crate::store::Action;
use crate::traits::EavStore;

/// [`EavStore`] double with settable selectors and an action log.
///
/// ```ignore
/// let store = RecordingStore::new();
/// store.set_entity_types(vec![EntityType::new(1, "A")]);
/// store.set_connected(true); // notifies `subscribe_connected` receivers
/// assert!(store.take_actions().is_empty());
/// ```
#[derive(Debug, Clone)]
pub struct RecordingStore {
    loading: Arc<Mutex<bool>>,
    entity_types: Arc<Mutex<Vec<EntityType>>>,
    actions: Arc<Mutex<Vec<Action>>>,
    connected_tx: Arc<watch::Sender<bool>>,
}

impl RecordingStore {
    pub fn new() -> Self {
        let (connected_tx, _) = watch::channel(false);
        Self {
            loading: Arc::new(Mutex::new(false)),
            entity_types: Arc::new(Mutex::new(Vec::new())),
            actions: Arc::new(Mutex::new(Vec::new())),
            connected_tx: Arc::new(connected_tx),
        }
    }

    /// Set `connected`, notifying subscribers only when the value changes.
    pub fn set_connected(&self, connected: bool) {
        self.connected_tx.send_if_modified(|current| {
            if *current == connected {
                return false;
            }
            *current = connected;
            true
        });
    }

    pub fn set_loading(&self, loading: bool) {
        *self.loading.lock().unwrap() = loading;
    }

    pub fn set_entity_types(&self, entity_types: Vec<EntityType>) {
        *self.entity_types.lock().unwrap() = entity_types;
    }

    /// Actions dispatched so far, in order.
    pub fn actions(&self) -> Vec<Action> {
        self.actions.lock().unwrap().clone()
    }

    /// Drain the action log.
    pub fn take_actions(&self) -> Vec<Action> {
        std::mem::take(&mut *self.actions.lock().unwrap())
    }

    /// Number of live `connected` subscriptions.
    pub fn subscriber_count(&self) -> usize {
        self.connected_tx.receiver_count()
    }
}

impl Default for RecordingStore {
    fn default() -> Self {
        Self::new()
    }
}

impl EavStore for RecordingStore {
    fn connected(&self) -> bool {
        *self.connected_tx.borrow()
    }

    fn loading(&self) -> bool {
        *self.loading.lock().unwrap()
    }

    fn entity_types(&self) -> Vec<EntityType> {
        self.entity_types.lock().unwrap().clone()
    }

    fn dispatch(&self, action: Action) {
        self.actions.lock().unwrap().push(action);
    }

    fn subscribe_connected(&self) -> watch::Receiver<bool> {
        self.connected_tx.subscribe()
    }
}
