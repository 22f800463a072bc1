//! Concrete implementations of the traits in `crate::traits`.
//!
//! - [`ReqwestHttpClient`] - HTTP client using reqwest
//!
//! The [`mock`] submodule provides test doubles:
//! - [`mock::MockHttpClient`] - configurable HTTP responses
//! - [`mock::RecordingStore`] - records dispatched actions

pub mod mock;
pub mod reqwest_http;

pub use mock::{MockHttpClient, RecordingStore};
pub use reqwest_http::ReqwestHttpClient;
