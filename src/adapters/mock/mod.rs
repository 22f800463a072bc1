//! Test doubles for the trait abstractions.
//!
//! - [`MockHttpClient`] - HTTP client with configurable responses
//! - [`RecordingStore`] - store with settable selectors and an action log

pub mod http;
pub mod store;

pub use http::{MockHttpClient, MockResponse, RecordedRequest};
pub use store::RecordingStore;
