//! HTTP resource client
//!
//! [`ApiClient`] wraps a `reqwest::Client` with the backend base URL and an
//! optional bearer token. [`ApiClient::resource`] derives a per-resource
//! [`HttpResourceClient`] implementing the [`ResourceClient`] contract:
//! four single-round-trip operations over one collection path, no retries,
//! no caching, no local state beyond the request itself.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use salon_core::{ClientError, ClientResult, FieldError, Record};
use salon_schema::ResourceSchema;

/// Default backend base URL for development.
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8080";

/// Request timeout applied to every call.
const REQUEST_TIMEOUT: std::time::Duration = std::time::Duration::from_secs(30);

// ============================================================================
// ResourceClient trait
// ============================================================================

/// The four operations of one REST collection resource.
///
/// Implementations perform exactly one round trip per call and never touch
/// local state. `remove` surfaces `NotFound` for an already-deleted id; the
/// page layer decides that this counts as success.
#[async_trait]
pub trait ResourceClient: Send + Sync {
    /// Fetch the full collection, in server order.
    async fn list(&self) -> ClientResult<Vec<Record>>;

    /// Create a new entity from an id-less draft; the server assigns the id.
    async fn create(&self, draft: &Record) -> ClientResult<Record>;

    /// Replace an existing entity's editable fields.
    async fn update(&self, id: &str, draft: &Record) -> ClientResult<Record>;

    /// Delete an entity by id.
    async fn remove(&self, id: &str) -> ClientResult<()>;
}

// ============================================================================
// Error body
// ============================================================================

/// Error payload shape returned by the backend on non-2xx responses.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ApiErrorBody {
    /// Machine-readable error code.
    #[serde(default)]
    pub error: String,

    /// Human-readable message.
    #[serde(default)]
    pub message: String,

    /// Field-level validation errors, if the rejection was per-field.
    #[serde(default)]
    pub fields: Vec<FieldError>,
}

/// Map a non-2xx response to the failure taxonomy.
///
/// `id` is the entity id the request targeted, when there was one; only
/// requests with an id can produce `NotFound`.
pub fn classify_response(
    resource: &str,
    id: Option<&str>,
    status: u16,
    body: &str,
) -> ClientError {
    if status == 404 {
        if let Some(id) = id {
            return ClientError::not_found(resource, id);
        }
    }

    let parsed: ApiErrorBody = serde_json::from_str(body).unwrap_or_default();

    if (400..500).contains(&status) && !parsed.fields.is_empty() {
        return ClientError::validation(parsed.fields);
    }

    let message = if parsed.message.is_empty() {
        format!("server returned status {status}")
    } else {
        parsed.message
    };

    ClientError::server(status, message)
}

// ============================================================================
// ApiClient
// ============================================================================

/// Shared HTTP client for the backend REST API.
///
/// Carries the base URL and an optional bearer token; all per-resource
/// clients derived from it reuse the same connection pool.
#[derive(Debug, Clone)]
pub struct ApiClient {
    /// The underlying reqwest HTTP client.
    http: reqwest::Client,
    /// Base URL of the backend API (e.g. `http://127.0.0.1:8080`).
    base_url: String,
    /// Optional bearer token for authenticated requests.
    token: Option<String>,
}

impl ApiClient {
    /// Create a client against the default base URL.
    pub fn new() -> Self {
        Self {
            http: reqwest::Client::builder()
                .timeout(REQUEST_TIMEOUT)
                .build()
                .expect("failed to create HTTP client"),
            base_url: DEFAULT_BASE_URL.to_string(),
            token: None,
        }
    }

    /// Create a client with a custom base URL.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        let mut base = base_url.into();
        while base.ends_with('/') {
            base.pop();
        }
        self.base_url = base;
        self
    }

    /// Set the bearer token. When set, every request carries an
    /// `Authorization: Bearer <token>` header.
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Clear the bearer token.
    pub fn clear_token(&mut self) {
        self.token = None;
    }

    /// Whether a bearer token is set.
    pub fn has_token(&self) -> bool {
        self.token.is_some()
    }

    /// Build the full URL for an API path.
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Derive a per-resource client for a schema.
    pub fn resource(&self, schema: &ResourceSchema) -> HttpResourceClient {
        HttpResourceClient {
            api: self.clone(),
            resource: schema.key.clone(),
            path: schema.base_path.clone(),
        }
    }

    // ========================================================================
    // Generic request helpers
    // ========================================================================

    fn authorize(&self, req: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.token {
            Some(token) => req.bearer_auth(token),
            None => req,
        }
    }

    /// Send a GET request and deserialise the response.
    pub(crate) async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        resource: &str,
    ) -> ClientResult<T> {
        let req = self.authorize(self.http.get(self.url(path)));
        let response = send(req).await?;
        handle_response(response, resource, None).await
    }

    /// Send a POST request with a JSON body and deserialise the response.
    pub(crate) async fn post<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
        resource: &str,
    ) -> ClientResult<T> {
        let req = self.authorize(self.http.post(self.url(path)).json(body));
        let response = send(req).await?;
        handle_response(response, resource, None).await
    }

    /// Send a PUT request with a JSON body and deserialise the response.
    pub(crate) async fn put<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
        resource: &str,
        id: &str,
    ) -> ClientResult<T> {
        let req = self.authorize(self.http.put(self.url(path)).json(body));
        let response = send(req).await?;
        handle_response(response, resource, Some(id)).await
    }

    /// Send a DELETE request. Returns `Ok(())` on success.
    pub(crate) async fn delete(&self, path: &str, resource: &str, id: &str) -> ClientResult<()> {
        let req = self.authorize(self.http.delete(self.url(path)));
        let response = send(req).await?;

        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            let body = response.text().await.unwrap_or_default();
            Err(classify_response(resource, Some(id), status.as_u16(), &body))
        }
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Send a request, mapping transport failures to `Network`.
async fn send(req: reqwest::RequestBuilder) -> ClientResult<reqwest::Response> {
    req.send().await.map_err(|e| {
        tracing::warn!(error = %e, "request failed before reaching the server");
        ClientError::network(e.to_string())
    })
}

/// Check the status and deserialise the body on success.
async fn handle_response<T: DeserializeOwned>(
    response: reqwest::Response,
    resource: &str,
    id: Option<&str>,
) -> ClientResult<T> {
    let status = response.status();

    if status.is_success() {
        let body = response
            .text()
            .await
            .map_err(|e| ClientError::parse(e.to_string()))?;
        serde_json::from_str(&body).map_err(|e| ClientError::parse(e.to_string()))
    } else {
        let body = response.text().await.unwrap_or_default();
        let error = classify_response(resource, id, status.as_u16(), &body);
        tracing::warn!(%resource, status = status.as_u16(), "request rejected: {error}");
        Err(error)
    }
}

// ============================================================================
// HttpResourceClient
// ============================================================================

/// [`ResourceClient`] implementation bound to one collection path.
#[derive(Debug, Clone)]
pub struct HttpResourceClient {
    api: ApiClient,
    resource: String,
    path: String,
}

impl HttpResourceClient {
    /// The resource key this client serves.
    pub fn resource(&self) -> &str {
        &self.resource
    }

    /// The collection path this client targets.
    pub fn path(&self) -> &str {
        &self.path
    }

    fn entity_path(&self, id: &str) -> String {
        format!("{}/{}", self.path, id)
    }
}

#[async_trait]
impl ResourceClient for HttpResourceClient {
    async fn list(&self) -> ClientResult<Vec<Record>> {
        self.api.get(&self.path, &self.resource).await
    }

    async fn create(&self, draft: &Record) -> ClientResult<Record> {
        self.api.post(&self.path, draft, &self.resource).await
    }

    async fn update(&self, id: &str, draft: &Record) -> ClientResult<Record> {
        self.api
            .put(&self.entity_path(id), draft, &self.resource, id)
            .await
    }

    async fn remove(&self, id: &str) -> ClientResult<()> {
        self.api
            .delete(&self.entity_path(id), &self.resource, id)
            .await
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use salon_schema::catalog;

    #[test]
    fn test_url_building() {
        let client = ApiClient::new().with_base_url("http://localhost:3000/");
        assert_eq!(
            client.url("/api/banners"),
            "http://localhost:3000/api/banners"
        );
    }

    #[test]
    fn test_resource_client_paths() {
        let client = ApiClient::new().resource(&catalog::banner());
        assert_eq!(client.resource(), "banner");
        assert_eq!(client.path(), "/api/banners");
        assert_eq!(client.entity_path("7"), "/api/banners/7");
    }

    #[test]
    fn test_token_lifecycle() {
        let mut client = ApiClient::new().with_token("jwt-token");
        assert!(client.has_token());
        client.clear_token();
        assert!(!client.has_token());
    }

    #[test]
    fn test_classify_404_with_id_is_not_found() {
        let err = classify_response("banner", Some("9"), 404, "");
        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "banner '9' not found");
    }

    #[test]
    fn test_classify_404_without_id_is_server() {
        let err = classify_response("banner", None, 404, "");
        assert!(err.is_server());
    }

    #[test]
    fn test_classify_validation_body() {
        let body = r#"{
            "error": "validation_failed",
            "message": "Validation failed",
            "fields": [{"field": "email", "message": "already taken"}]
        }"#;
        let err = classify_response("contact", None, 422, body);
        assert!(err.is_validation());
        assert_eq!(err.field_errors()[0].field, "email");
    }

    #[test]
    fn test_classify_4xx_without_fields_is_server() {
        let err = classify_response("contact", None, 401, r#"{"message": "unauthorized"}"#);
        assert!(err.is_server());
        assert_eq!(err.to_string(), "server error (401): unauthorized");
    }

    #[test]
    fn test_classify_5xx_with_unparseable_body() {
        let err = classify_response("contact", None, 500, "<html>oops</html>");
        assert!(err.is_server());
        assert!(err.to_string().contains("500"));
    }

    #[test]
    fn test_classify_5xx_ignores_field_detail() {
        // Field detail on a 5xx is not a validation rejection.
        let body = r#"{"fields": [{"field": "x", "message": "y"}]}"#;
        let err = classify_response("contact", None, 500, body);
        assert!(err.is_server());
    }
}
