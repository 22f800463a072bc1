//! EAV backend API client.
//!
//! Thin typed wrapper over the backend's REST endpoints. The transport is an
//! injected [`HttpClient`], so tests can run against
//! [`crate::adapters::mock::MockHttpClient`] or a wiremock server.

use serde::{de::DeserializeOwned, Serialize};
use std::sync::Arc;

use crate::adapters::ReqwestHttpClient;
use crate::error::{classify_http_error, NetworkError};
use crate::models::{AttrValue, DbAccess, EavView, Entity, EntityType};
use crate::traits::{Headers, HttpClient, Response};

pub const DEFAULT_API_URL: &str = "http://localhost:8080";

/// Client for the EAV backend.
#[derive(Clone)]
pub struct EavClient {
    pub base_url: String,
    http: Arc<dyn HttpClient>,
}

impl EavClient {
    /// Client for `base_url` using the reqwest transport.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_http(base_url, Arc::new(ReqwestHttpClient::new()))
    }

    pub fn with_http(base_url: impl Into<String>, http: Arc<dyn HttpClient>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { base_url, http }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn json_headers() -> Headers {
        let mut headers = Headers::new();
        headers.insert("content-type".to_string(), "application/json".to_string());
        headers.insert("accept".to_string(), "application/json".to_string());
        headers
    }

    /// Turn a non-2xx response into [`NetworkError::HttpStatus`] carrying the
    /// body text, which the backend uses for its reason.
    fn check_status(response: Response) -> Result<Response, NetworkError> {
        if response.is_success() {
            return Ok(response);
        }
        Err(NetworkError::HttpStatus {
            status: response.status,
            message: response.text_lossy().trim().to_string(),
        })
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        operation: &str,
    ) -> Result<T, NetworkError> {
        let url = self.url(path);
        tracing::debug!(%url, operation, "GET");

        let response = self
            .http
            .get(&url, &Self::json_headers())
            .await
            .map_err(|e| classify_http_error(e, &url, operation))?;
        let response = Self::check_status(response)?;

        response.json().map_err(|e| NetworkError::InvalidResponse {
            message: format!("{}: {}", operation, e),
        })
    }

    async fn send_json<B: Serialize>(
        &self,
        method: WriteMethod,
        path: &str,
        body: &B,
        operation: &str,
    ) -> Result<Response, NetworkError> {
        let url = self.url(path);
        let body = serde_json::to_string(body).map_err(|e| NetworkError::Other {
            message: e.to_string(),
        })?;
        tracing::debug!(%url, operation, ?method, "write");

        let headers = Self::json_headers();
        let response = match method {
            WriteMethod::Post => self.http.post(&url, &body, &headers).await,
            WriteMethod::Put => self.http.put(&url, &body, &headers).await,
        }
        .map_err(|e| classify_http_error(e, &url, operation))?;
        Self::check_status(response)
    }

    /// Ask the backend to open a database connection.
    ///
    /// # Errors
    /// `HttpStatus { status: 400, .. }` when host or database name is
    /// missing, `HttpStatus { status: 500, .. }` when the database refused
    /// the connection.
    pub async fn connect(&self, db: &DbAccess) -> Result<(), NetworkError> {
        tracing::info!(host = %db.host, db = %db.db_name, "connecting to database");
        self.send_json(WriteMethod::Post, "/connect", db, "connect")
            .await?;
        Ok(())
    }

    /// `GET /entity-types`
    pub async fn entity_types(&self) -> Result<Vec<EntityType>, NetworkError> {
        self.get_json("/entity-types", "fetch entity types").await
    }

    /// `GET /entities/{type_id}`
    pub async fn entities_for_type(&self, type_id: i64) -> Result<Vec<Entity>, NetworkError> {
        self.get_json(&format!("/entities/{}", type_id), "fetch entities")
            .await
    }

    /// Attribute/value rows of one entity. `GET /view/entity/{entity_id}`
    pub async fn entity_view(&self, entity_id: i64) -> Result<Vec<EavView>, NetworkError> {
        self.get_json(&format!("/view/entity/{}", entity_id), "fetch entity values")
            .await
    }

    /// Rename an entity. `PUT /entity`
    ///
    /// Only `id`, `entityTypeId` and `entity` are sent; the creation time
    /// stays whatever the database holds.
    pub async fn update_entity(&self, entity: &Entity) -> Result<(), NetworkError> {
        let body = EntityUpdate {
            id: entity.id,
            entity_type_id: entity.entity_type_id,
            entity: &entity.entity,
        };
        self.send_json(WriteMethod::Put, "/entity", &body, "update entity")
            .await?;
        Ok(())
    }

    /// Store a value for an attribute that has none yet. `POST /value`
    ///
    /// Returns the stored value with the id the database assigned.
    pub async fn create_value(&self, value: &AttrValue) -> Result<AttrValue, NetworkError> {
        let response = self
            .send_json(WriteMethod::Post, "/value", value, "create value")
            .await?;
        response.json().map_err(|e| NetworkError::InvalidResponse {
            message: format!("create value: {}", e),
        })
    }

    /// Overwrite a stored value. `PUT /value`
    ///
    /// The response body is ignored: the backend answers with the most
    /// recently inserted value, which need not be the one updated.
    pub async fn update_value(&self, value: &AttrValue) -> Result<(), NetworkError> {
        self.send_json(WriteMethod::Put, "/value", value, "update value")
            .await?;
        Ok(())
    }
}

#[derive(Debug, Clone, Copy)]
enum WriteMethod {
    Post,
    Put,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct EntityUpdate<'a> {
    id: i64,
    entity_type_id: i64,
    entity: &'a str,
}

impl std::fmt::Debug for EavClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EavClient")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}
