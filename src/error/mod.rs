//! Error handling for eavtui.
//!
//! - **Error categories**: classification used for status messages and retry decisions
//! - **Network errors**: transport and HTTP failures talking to the backend
//! - **Unified error type**: `EavError` wraps every failure the app can surface
//! - **Error context**: operation/entity metadata attached for the log file
//! - **Result alias**: `EavResult<T>`
//!
//! The entity type tab strip never sees these types; failures are recorded by
//! the store and rendered by the status bar.
//!
//! ```ignore
//! use eavtui::error::{EavResult, ErrorContext, ResultExt};
//!
//! fn load(client: &EavClient<C>) -> EavResult<Vec<EntityType>> {
//!     client.entity_types().await.context(ErrorContext::new("fetch entity types"))
//! }
//! ```

mod category;
mod context;
mod eav_error;
mod network;
mod result;

pub use category::ErrorCategory;
pub use context::ErrorContext;
pub use eav_error::EavError;
pub use network::{classify_http_error, NetworkError};
pub use result::{EavResult, ResultExt};
