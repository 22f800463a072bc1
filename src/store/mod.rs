//! Shared store: state, actions, reducers and the effect runner.
//!
//! Components hold a [`StoreHandle`] behind the [`crate::traits::EavStore`]
//! trait. Dispatch reduces synchronously; network work is queued as an
//! [`Effect`] and its [`StoreEvent`] completion is applied when it finishes.

mod action;
mod effects;
mod handle;
mod reducer;
mod state;

pub use action::{Action, Effect, StoreEvent};
pub use effects::{execute, EffectRunner};
pub use handle::StoreHandle;
pub use reducer::{reduce_action, reduce_event};
pub use state::StoreState;
