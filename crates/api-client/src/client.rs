//! Main API client implementation

use crate::config::ClientConfig;
use crate::endpoints::{
    AuthApi, ChannelsApi, NotificationsApi, RankingApi, StoriesApi, UsersApi,
};
use crate::error::{ApiError, ApiResult};
use crate::session::{FileSessionStore, SessionStore};
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE, USER_AGENT};
use reqwest::{Client, Method, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, instrument};
use uuid::Uuid;

/// Request correlation ID header
const X_REQUEST_ID: &str = "X-Request-ID";

/// TUYS API client
///
/// This client wraps `reqwest` and centralizes:
/// - Bearer-token injection from the injected session store, read fresh on
///   every call
/// - JSON request/response handling
/// - Uniform classification of any status >= 400 into an error envelope
/// - Request correlation IDs for tracing
#[derive(Clone)]
pub struct TuysClient {
    inner: Client,
    config: Arc<ClientConfig>,
    session: Arc<dyn SessionStore>,
}

impl TuysClient {
    /// Create a client with environment configuration and the file session store
    pub fn new() -> ApiResult<Self> {
        let config = ClientConfig::from_env()?;
        let store = FileSessionStore::new()?;
        Self::with_config(config, Arc::new(store))
    }

    /// Create a client with specific configuration and session store
    pub fn with_config(config: ClientConfig, session: Arc<dyn SessionStore>) -> ApiResult<Self> {
        config.validate()?;

        let mut default_headers = HeaderMap::new();
        default_headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        default_headers.insert(USER_AGENT, HeaderValue::from_static("tuys-api-client/0.3"));

        let inner = Client::builder()
            .timeout(config.timeout)
            .default_headers(default_headers)
            .build()
            .map_err(ApiError::Request)?;

        Ok(Self {
            inner,
            config: Arc::new(config),
            session,
        })
    }

    /// Get the current configuration
    #[must_use]
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Get the base URL
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    // -------------------------------------------------------------------------
    // Endpoint API accessors
    // -------------------------------------------------------------------------

    /// Access channel endpoints
    #[must_use]
    pub fn channels(&self) -> ChannelsApi {
        ChannelsApi::new(self.clone())
    }

    /// Access story endpoints
    #[must_use]
    pub fn stories(&self) -> StoriesApi {
        StoriesApi::new(self.clone())
    }

    /// Access user endpoints
    #[must_use]
    pub fn users(&self) -> UsersApi {
        UsersApi::new(self.clone())
    }

    /// Access the ranking endpoint
    #[must_use]
    pub fn ranking(&self) -> RankingApi {
        RankingApi::new(self.clone())
    }

    /// Access notification endpoints
    #[must_use]
    pub fn notifications(&self) -> NotificationsApi {
        NotificationsApi::new(self.clone())
    }

    /// Access authentication endpoints
    #[must_use]
    pub fn auth(&self) -> AuthApi {
        AuthApi::new(self.clone())
    }

    // -------------------------------------------------------------------------
    // Low-level HTTP methods
    // -------------------------------------------------------------------------

    /// Perform a GET request and parse the JSON response body
    #[instrument(skip(self))]
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        let response = self.send(Method::GET, path, Option::<&()>::None).await?;
        Self::read_json(response).await
    }

    /// Perform a POST request, ignoring any response body
    #[instrument(skip(self, body))]
    pub async fn post<B: Serialize>(&self, path: &str, body: &B) -> ApiResult<()> {
        self.send(Method::POST, path, Some(body)).await?;
        Ok(())
    }

    /// Perform a POST request and parse the JSON response body
    #[instrument(skip(self, body))]
    pub async fn post_json<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> ApiResult<T> {
        let response = self.send(Method::POST, path, Some(body)).await?;
        Self::read_json(response).await
    }

    /// Perform a PUT request, ignoring any response body
    #[instrument(skip(self, body))]
    pub async fn put<B: Serialize>(&self, path: &str, body: &B) -> ApiResult<()> {
        self.send(Method::PUT, path, Some(body)).await?;
        Ok(())
    }

    /// Perform a PUT request and parse the JSON response body
    #[instrument(skip(self, body))]
    pub async fn put_json<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> ApiResult<T> {
        let response = self.send(Method::PUT, path, Some(body)).await?;
        Self::read_json(response).await
    }

    /// Perform a DELETE request, ignoring any response body
    #[instrument(skip(self))]
    pub async fn delete(&self, path: &str) -> ApiResult<()> {
        self.send(Method::DELETE, path, Option::<&()>::None).await?;
        Ok(())
    }

    /// Perform a DELETE request and parse the JSON response body
    #[instrument(skip(self))]
    pub async fn delete_json<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        let response = self.send(Method::DELETE, path, Option::<&()>::None).await?;
        Self::read_json(response).await
    }

    /// Bearer token for the next request
    ///
    /// The store is read fresh on every call; a missing or unreadable session
    /// yields an empty token and the request is still sent — the backend is
    /// the one rejecting unauthenticated calls.
    async fn bearer_token(&self) -> String {
        match self.session.load().await {
            Ok(session) => session.token,
            Err(_) => String::new(),
        }
    }

    /// Execute a request and classify the outcome
    async fn send<B: Serialize>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> ApiResult<Response> {
        let url = format!(
            "{}/{}",
            self.config.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        );
        let request_id = Uuid::new_v4().to_string();
        let token = self.bearer_token().await;

        let mut request = self
            .inner
            .request(method.clone(), &url)
            .header(X_REQUEST_ID, &request_id)
            .header(AUTHORIZATION, format!("Bearer {token}"));

        if let Some(b) = body {
            request = request.json(b);
        }

        let response = request.send().await?;

        debug!(
            request_id = %request_id,
            method = %method,
            url = %url,
            status = response.status().as_u16(),
            "request completed"
        );

        self.check_status(response).await
    }

    /// Convert any response with status >= 400 into the error envelope
    async fn check_status(&self, response: Response) -> ApiResult<Response> {
        let status = response.status().as_u16();
        if status < 400 {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        Err(ApiError::from_response(status, &body))
    }

    /// Deserialize a success response body
    async fn read_json<T: DeserializeOwned>(response: Response) -> ApiResult<T> {
        response.json().await.map_err(ApiError::Request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::{MemorySessionStore, Session};
    use serde_json::{json, Value};

    fn client_for(server: &mockito::ServerGuard, store: Arc<dyn SessionStore>) -> TuysClient {
        let config = ClientConfig::development().with_base_url(server.url());
        TuysClient::with_config(config, store).unwrap()
    }

    fn signed_in(server: &mockito::ServerGuard) -> TuysClient {
        let store = Arc::new(MemorySessionStore::with_session(Session::with_token("t1")));
        client_for(server, store)
    }

    #[test]
    fn test_client_creation() {
        let store = Arc::new(MemorySessionStore::new());
        let client = TuysClient::with_config(ClientConfig::development(), store);
        assert!(client.is_ok());
    }

    #[test]
    fn test_client_creation_rejects_invalid_config() {
        let store = Arc::new(MemorySessionStore::new());
        let config = ClientConfig::development().with_base_url("");
        assert!(TuysClient::with_config(config, store).is_err());
    }

    #[tokio::test]
    async fn get_returns_body_unmodified() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/channels")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"[{"id":1,"nested":{"deep":true}}]"#)
            .create_async()
            .await;

        let client = signed_in(&server);
        let body: Value = client.get("/channels").await.unwrap();

        assert_eq!(body, json!([{"id": 1, "nested": {"deep": true}}]));
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn every_request_carries_bearer_and_content_type() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/stories")
            .match_header("authorization", "Bearer t1")
            .match_header("content-type", "application/json")
            .with_status(200)
            .with_body("[]")
            .create_async()
            .await;

        let client = signed_in(&server);
        let _: Value = client.get("/stories").await.unwrap();
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn missing_session_sends_empty_bearer() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/stories")
            .match_header("authorization", "Bearer ")
            .with_status(200)
            .with_body("[]")
            .create_async()
            .await;

        let store = Arc::new(MemorySessionStore::new());
        let client = client_for(&server, store);
        let _: Value = client.get("/stories").await.unwrap();
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn token_refresh_is_visible_to_subsequent_calls() {
        let mut server = mockito::Server::new_async().await;
        let first = server
            .mock("GET", "/stories")
            .match_header("authorization", "Bearer old")
            .with_status(200)
            .with_body("[]")
            .create_async()
            .await;
        let second = server
            .mock("GET", "/stories")
            .match_header("authorization", "Bearer new")
            .with_status(200)
            .with_body("[]")
            .create_async()
            .await;

        let store = Arc::new(MemorySessionStore::with_session(Session::with_token("old")));
        let client = client_for(&server, store.clone());

        let _: Value = client.get("/stories").await.unwrap();
        store.save(&Session::with_token("new")).await.unwrap();
        let _: Value = client.get("/stories").await.unwrap();

        first.assert_async().await;
        second.assert_async().await;
    }

    #[tokio::test]
    async fn error_status_yields_envelope_with_parsed_body() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/channels")
            .with_status(404)
            .with_body(r#"{"error":"not found"}"#)
            .create_async()
            .await;

        let client = signed_in(&server);
        let err = client.get::<Value>("/channels").await.unwrap_err();

        match err {
            ApiError::Api { status, message } => {
                assert_eq!(status, 404);
                assert_eq!(message, json!({"error": "not found"}));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn error_status_with_invalid_json_uses_fallback_message() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/channels")
            .with_status(500)
            .with_body("<html>oops</html>")
            .create_async()
            .await;

        let client = signed_in(&server);
        let err = client.get::<Value>("/channels").await.unwrap_err();

        match err {
            ApiError::Api { status, message } => {
                assert_eq!(status, 500);
                assert_eq!(
                    message,
                    Value::String(crate::error::FALLBACK_ERROR_MESSAGE.to_string())
                );
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn post_without_expected_body_ignores_response_content() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/stories/7/like")
            .with_status(200)
            .with_body(r#"{"whatever": "the server says"}"#)
            .create_async()
            .await;

        let client = signed_in(&server);
        client.post("/stories/7/like", &json!({})).await.unwrap();
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn post_json_returns_parsed_body() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/auth/sign-in")
            .with_status(200)
            .with_body(r#"{"token":"abc"}"#)
            .create_async()
            .await;

        let client = signed_in(&server);
        let body: Value = client
            .post_json("/auth/sign-in", &json!({"email": "a@b.com"}))
            .await
            .unwrap();
        assert_eq!(body["token"], "abc");
    }

    #[tokio::test]
    async fn post_propagates_error_envelope() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/stories")
            .with_status(401)
            .with_body(r#"{"message":"sign in first"}"#)
            .create_async()
            .await;

        let client = signed_in(&server);
        let err = client.post("/stories", &json!({})).await.unwrap_err();
        assert!(err.is_client_error());
        assert_eq!(err.status(), Some(401));
    }

    #[tokio::test]
    async fn delete_with_no_content_resolves_unit() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("DELETE", "/stories/7")
            .with_status(204)
            .create_async()
            .await;

        let client = signed_in(&server);
        client.delete("/stories/7").await.unwrap();
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn put_without_expected_body_resolves_unit() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("PUT", "/stories/3")
            .with_status(200)
            .with_body("{}")
            .create_async()
            .await;

        let client = signed_in(&server);
        client
            .put("/stories/3", &json!({"title": "t", "body": "b"}))
            .await
            .unwrap();
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn base_url_join_tolerates_slashes() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/ranking")
            .with_status(200)
            .with_body("[]")
            .create_async()
            .await;

        let config = ClientConfig::development().with_base_url(format!("{}/", server.url()));
        let store = Arc::new(MemorySessionStore::new());
        let client = TuysClient::with_config(config, store).unwrap();

        let _: Value = client.get("ranking").await.unwrap();
        mock.assert_async().await;
    }
}
