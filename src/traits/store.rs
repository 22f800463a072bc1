//! Store trait abstraction.
//!
//! Components read shared state only through these selectors and change it
//! only by dispatching actions. The store is injected, so a component can be
//! exercised against [`crate::adapters::mock::RecordingStore`].

use tokio::sync::watch;

use crate::models::EntityType;
use crate::store::Action;

pub trait EavStore: Send + Sync {
    /// Whether the backend holds an open database connection.
    fn connected(&self) -> bool;

    /// Whether an entity type list request is in flight.
    fn loading(&self) -> bool;

    /// Entity types in backend order.
    fn entity_types(&self) -> Vec<EntityType>;

    /// Request a state transition. Returns immediately; any async work is
    /// done by the store and shows up through later selector reads.
    fn dispatch(&self, action: Action);

    /// Change notifications for the `connected` slice.
    ///
    /// The receiver starts with the current value marked as seen. Dropping
    /// it unregisters the subscription.
    fn subscribe_connected(&self) -> watch::Receiver<bool>;
}
