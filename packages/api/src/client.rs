//! # Thin JSON-over-HTTP client
//!
//! [`ApiClient`] wraps a shared [`reqwest::Client`] (fetch on `wasm32`, hyper on
//! native) with three conventions every endpoint module relies on:
//!
//! - **Bearer injection**: when a token is set, every request carries
//!   `Authorization: Bearer <token>`.
//! - **JSON both ways**: bodies are serialized with serde; responses are
//!   decoded into the caller's type. An empty body decodes as `null`, so
//!   `204 No Content` works for `()` and `Option<T>`.
//! - **Error normalization**: any non-2xx response becomes an [`ApiError`]
//!   carrying the backend's message.
//!
//! No retries, no caching, no cancellation: one call, one request.

use reqwest::header::ACCEPT;
use reqwest::{Method, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::ApiError;

/// Query parameters as `(name, value)` pairs.
pub type Query = Vec<(&'static str, String)>;

#[derive(Clone, Debug)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            http: reqwest::Client::new(),
            base_url,
            token: None,
        }
    }

    /// Same connection pool, different credentials.
    pub fn with_token(&self, token: Option<String>) -> Self {
        Self {
            http: self.http.clone(),
            base_url: self.base_url.clone(),
            token,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.get_query(path, &Query::new()).await
    }

    pub async fn get_query<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &Query,
    ) -> Result<T, ApiError> {
        let mut req = self.request(Method::GET, path)?;
        if !query.is_empty() {
            req = req.query(query);
        }
        self.send(Method::GET, path, req).await
    }

    pub async fn post<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let req = self.request(Method::POST, path)?.json(body);
        self.send(Method::POST, path, req).await
    }

    pub async fn put<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let req = self.request(Method::PUT, path)?.json(body);
        self.send(Method::PUT, path, req).await
    }

    pub async fn delete(&self, path: &str) -> Result<(), ApiError> {
        let req = self.request(Method::DELETE, path)?;
        self.send_text(Method::DELETE, path, req).await.map(|_| ())
    }

    fn request(&self, method: Method, path: &str) -> Result<RequestBuilder, ApiError> {
        let url = reqwest::Url::parse(&self.url(path))
            .map_err(|e| ApiError::InvalidUrl(format!("{}: {e}", self.url(path))))?;
        let mut req = self.http.request(method, url).header(ACCEPT, "application/json");
        if let Some(token) = &self.token {
            req = req.bearer_auth(token);
        }
        Ok(req)
    }

    async fn send<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        req: RequestBuilder,
    ) -> Result<T, ApiError> {
        let body = self.send_text(method, path, req).await?;
        decode(&body)
    }

    /// Raw body of a successful response.
    async fn send_text(
        &self,
        method: Method,
        path: &str,
        req: RequestBuilder,
    ) -> Result<String, ApiError> {
        tracing::debug!("{} {}", method, path);
        let resp = req.send().await.map_err(|e| {
            tracing::warn!("{} {} failed: {}", method, path, e);
            ApiError::Network(e.to_string())
        })?;
        let status = resp.status();
        let body = resp
            .text()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        if !status.is_success() {
            let err = ApiError::from_response(status.as_u16(), &body);
            tracing::warn!("{} {} -> {}: {}", method, path, status.as_u16(), err);
            return Err(err);
        }
        tracing::debug!("{} {} -> {}", method, path, status.as_u16());
        Ok(body)
    }
}

pub(crate) fn decode<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    let body = if body.trim().is_empty() { "null" } else { body };
    serde_json::from_str(body).map_err(|e| {
        tracing::warn!("Failed to decode response: {}", e);
        ApiError::Decode(e.to_string())
    })
}

/// Push `name=value` when the value is present.
pub(crate) fn push_opt<V: ToString>(query: &mut Query, name: &'static str, value: Option<V>) {
    if let Some(v) = value {
        query.push((name, v.to_string()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_joining() {
        let client = ApiClient::new("http://localhost:8000/api/");
        assert_eq!(client.base_url(), "http://localhost:8000/api");
        assert_eq!(client.url("/appointments/4"), "http://localhost:8000/api/appointments/4");
        assert_eq!(client.url("clinics"), "http://localhost:8000/api/clinics");
    }

    #[test]
    fn test_with_token_keeps_base() {
        let client = ApiClient::new("http://h/api").with_token(Some("abc".into()));
        assert_eq!(client.token(), Some("abc"));
        assert_eq!(client.with_token(None).token(), None);
        assert_eq!(client.with_token(None).base_url(), "http://h/api");
    }

    #[test]
    fn test_empty_body_decodes_as_null() {
        let unit: () = decode("").unwrap();
        assert_eq!(unit, ());
        let none: Option<u32> = decode("  ").unwrap();
        assert_eq!(none, None);
        assert!(matches!(decode::<u32>("\"x\""), Err(ApiError::Decode(_))));
    }

    #[test]
    fn test_invalid_base_url_is_reported() {
        let client = ApiClient::new("not a url");
        assert!(matches!(
            client.request(Method::GET, "/x"),
            Err(ApiError::InvalidUrl(_))
        ));
    }
}
