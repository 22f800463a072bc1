//! Trait abstractions for dependency injection and testability.
//!
//! - [`HttpClient`] - HTTP transport used by the backend client
//! - [`EavStore`] - Selector/dispatch interface of the shared store

pub mod http;
pub mod store;

pub use http::{Headers, HttpClient, HttpError, Response};
pub use store::EavStore;
