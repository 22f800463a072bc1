//! Mock HTTP client for testing.
//!
//! Returns predefined responses or errors per URL and records every request.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use crate::traits::{Headers, HttpClient, HttpError, Response};

/// A recorded HTTP request for verification in tests.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    /// HTTP method (GET, POST or PUT)
    pub method: String,
    pub url: String,
    pub headers: Headers,
    /// Request body (for POST requests)
    pub body: Option<String>,
}

/// Configuration for a mock response.
#[derive(Debug, Clone)]
pub enum MockResponse {
    Success(Response),
    Error(HttpError),
}

/// Mock HTTP client for testing.
///
/// ```ignore
/// use eavtui::adapters::mock::{MockHttpClient, MockResponse};
/// use eavtui::traits::{HttpClient, Response, Headers};
/// use bytes::Bytes;
///
/// let client = MockHttpClient::new();
/// client.set_response(
///     "http://backend/entity-types",
///     MockResponse::Success(Response::new(200, Bytes::from("[]"))),
/// );
///
/// let response = client.get("http://backend/entity-types", &Headers::new()).await?;
/// assert_eq!(response.status, 200);
/// assert_eq!(client.get_requests().len(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct MockHttpClient {
    responses: Arc<Mutex<HashMap<String, MockResponse>>>,
    default_response: Arc<Mutex<Option<MockResponse>>>,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
    /// Artificial latency applied before answering
    delay: Arc<Mutex<Option<Duration>>>,
}

impl MockHttpClient {
    pub fn new() -> Self {
        Self {
            responses: Arc::new(Mutex::new(HashMap::new())),
            default_response: Arc::new(Mutex::new(None)),
            requests: Arc::new(Mutex::new(Vec::new())),
            delay: Arc::new(Mutex::new(None)),
        }
    }

    /// Set a response for a URL. Exact matches win over prefix matches.
    pub fn set_response(&self, url: &str, response: MockResponse) {
        let mut responses = self.responses.lock().unwrap();
        responses.insert(url.to_string(), response);
    }

    /// Convenience for a 200 response with a JSON body.
    pub fn set_json<T: serde::Serialize>(&self, url: &str, value: &T) {
        let response = Response::json_body(value).unwrap();
        self.set_response(url, MockResponse::Success(response));
    }

    /// Set a default response for URLs without specific matches.
    pub fn set_default_response(&self, response: MockResponse) {
        let mut default = self.default_response.lock().unwrap();
        *default = Some(response);
    }

    /// Delay every answer by `delay`, so tests can observe in-flight state.
    pub fn set_delay(&self, delay: Duration) {
        *self.delay.lock().unwrap() = Some(delay);
    }

    pub fn get_requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }

    /// Number of recorded requests whose URL ends with `suffix`.
    pub fn count_requests(&self, suffix: &str) -> usize {
        self.requests
            .lock()
            .unwrap()
            .iter()
            .filter(|r| r.url.ends_with(suffix))
            .count()
    }

    pub fn clear_requests(&self) {
        self.requests.lock().unwrap().clear();
    }

    pub fn clear_responses(&self) {
        self.responses.lock().unwrap().clear();
    }

    fn record_request(&self, method: &str, url: &str, headers: &Headers, body: Option<String>) {
        let mut requests = self.requests.lock().unwrap();
        requests.push(RecordedRequest {
            method: method.to_string(),
            url: url.to_string(),
            headers: headers.clone(),
            body,
        });
    }

    fn get_response(&self, url: &str) -> Option<MockResponse> {
        let responses = self.responses.lock().unwrap();

        if let Some(response) = responses.get(url) {
            return Some(response.clone());
        }

        // Longest matching prefix wins.
        let prefix_match = responses
            .iter()
            .filter(|(pattern, _)| url.starts_with(pattern.as_str()))
            .max_by_key(|(pattern, _)| pattern.len())
            .map(|(_, response)| response.clone());
        if prefix_match.is_some() {
            return prefix_match;
        }

        self.default_response.lock().unwrap().clone()
    }

    async fn answer(&self, url: &str) -> Result<Response, HttpError> {
        let delay = *self.delay.lock().unwrap();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }

        match self.get_response(url) {
            Some(MockResponse::Success(response)) => Ok(response),
            Some(MockResponse::Error(err)) => Err(err),
            None => Err(HttpError::Other(format!(
                "No mock response configured for {}",
                url
            ))),
        }
    }
}

impl Default for MockHttpClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HttpClient for MockHttpClient {
    async fn get(&self, url: &str, headers: &Headers) -> Result<Response, HttpError> {
        self.record_request("GET", url, headers, None);
        self.answer(url).await
    }

    async fn post(&self, url: &str, body: &str, headers: &Headers) -> Result<Response, HttpError> {
        self.record_request("POST", url, headers, Some(body.to_string()));
        self.answer(url).await
    }

    async fn put(&self, url: &str, body: &str, headers: &Headers) -> Result<Response, HttpError> {
        self.record_request("PUT", url, headers, Some(body.to_string()));
        self.answer(url).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bytes::Bytes;

    #[tokio::test]
    async fn test_mock_http_client_set_response() {
        let client = MockHttpClient::new();
        client.set_response(
            "http://backend/entity-types",
            MockResponse::Success(Response::new(200, Bytes::from("[]"))),
        );

        let response = client
            .get("http://backend/entity-types", &Headers::new())
            .await
            .unwrap();
        assert_eq!(response.status, 200);
        assert_eq!(response.body, Bytes::from("[]"));
    }

    #[tokio::test]
    async fn test_mock_http_client_error_response() {
        let client = MockHttpClient::new();
        client.set_response(
            "http://backend/connect",
            MockResponse::Error(HttpError::ConnectionFailed("refused".to_string())),
        );

        let result = client.post("http://backend/connect", "{}", &Headers::new()).await;
        assert_eq!(
            result.unwrap_err(),
            HttpError::ConnectionFailed("refused".to_string())
        );
    }

    #[tokio::test]
    async fn test_mock_http_client_records_post_body() {
        let client = MockHttpClient::new();
        client.set_default_response(MockResponse::Success(Response::new(200, Bytes::from("OK"))));

        let mut headers = Headers::new();
        headers.insert("content-type".to_string(), "application/json".to_string());
        client
            .post("http://backend/connect", r#"{"host":"db"}"#, &headers)
            .await
            .unwrap();

        let requests = client.get_requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].method, "POST");
        assert_eq!(requests[0].body.as_deref(), Some(r#"{"host":"db"}"#));
        assert_eq!(
            requests[0].headers.get("content-type").map(String::as_str),
            Some("application/json")
        );
    }

    #[tokio::test]
    async fn test_mock_http_client_records_put() {
        let client = MockHttpClient::new();
        client.set_default_response(MockResponse::Success(Response::new(200, Bytes::new())));

        client
            .put("http://backend/value", r#"{"id":3}"#, &Headers::new())
            .await
            .unwrap();

        let requests = client.get_requests();
        assert_eq!(requests[0].method, "PUT");
        assert_eq!(requests[0].body.as_deref(), Some(r#"{"id":3}"#));
    }

    #[tokio::test]
    async fn test_mock_http_client_unconfigured_url_errors() {
        let client = MockHttpClient::new();
        let result = client.get("http://backend/nowhere", &Headers::new()).await;
        assert!(matches!(result, Err(HttpError::Other(_))));
    }

    #[tokio::test]
    async fn test_mock_http_client_longest_prefix_wins() {
        let client = MockHttpClient::new();
        client.set_response(
            "http://backend/entities/",
            MockResponse::Success(Response::new(200, Bytes::from("generic"))),
        );
        client.set_response(
            "http://backend/entities/1",
            MockResponse::Success(Response::new(200, Bytes::from("one"))),
        );

        let exact = client
            .get("http://backend/entities/1", &Headers::new())
            .await
            .unwrap();
        assert_eq!(exact.body, Bytes::from("one"));

        let longest = client
            .get("http://backend/entities/12", &Headers::new())
            .await
            .unwrap();
        assert_eq!(longest.body, Bytes::from("one"));

        let generic = client
            .get("http://backend/entities/7", &Headers::new())
            .await
            .unwrap();
        assert_eq!(generic.body, Bytes::from("generic"));
    }

    #[tokio::test]
    async fn test_mock_http_client_count_and_clear() {
        let client = MockHttpClient::new();
        client.set_default_response(MockResponse::Success(Response::new(200, Bytes::new())));

        client.get("http://backend/entity-types", &Headers::new()).await.unwrap();
        client.get("http://backend/entity-types", &Headers::new()).await.unwrap();
        client.get("http://backend/entities/3", &Headers::new()).await.unwrap();

        assert_eq!(client.count_requests("/entity-types"), 2);
        assert_eq!(client.count_requests("/entities/3"), 1);

        client.clear_requests();
        assert!(client.get_requests().is_empty());
    }

    #[tokio::test]
    async fn test_mock_http_client_clone_shares_state() {
        let client = MockHttpClient::new();
        let clone = client.clone();
        clone.set_json("http://backend/entity-types", &Vec::<i32>::new());

        client.get("http://backend/entity-types", &Headers::new()).await.unwrap();
        assert_eq!(clone.get_requests().len(), 1);
    }
}
