//! HTTP client for Management API communication.
//!
//! This module provides the [`HttpClient`] type, the `reqwest`-backed
//! [`Transport`] used by resource clients.

use std::collections::HashMap;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde_json::Value;

use crate::clients::errors::{HttpError, HttpResponseError};
use crate::clients::http_request::{HttpMethod, HttpRequest};
use crate::clients::http_response::HttpResponse;
use crate::clients::transport::{QueryParams, Transport};
use crate::config::Auth0Config;

/// SDK name reported in the telemetry header.
pub const SDK_NAME: &str = env!("CARGO_PKG_NAME");

/// SDK version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Name of the telemetry header understood by Auth0.
pub const TELEMETRY_HEADER: &str = "Auth0-Client";

/// HTTP client for making authenticated requests to the Management API.
///
/// The client handles:
/// - `Authorization: Bearer {token}` on every request
/// - JSON content negotiation
/// - The optional `Auth0-Client` telemetry header
/// - Decoding of response bodies and Auth0 error payloads
///
/// It performs no retries and interprets no status codes beyond 2xx versus
/// everything else.
///
/// # Thread Safety
///
/// `HttpClient` is `Send + Sync`, making it safe to share across async tasks.
///
/// # Example
///
/// ```rust,ignore
/// use auth0_management::{Auth0Config, ApiToken, Domain};
/// use auth0_management::clients::{HttpClient, HttpMethod, HttpRequest};
///
/// let config = Auth0Config::builder()
///     .domain(Domain::new("acme.auth0.com").unwrap())
///     .token(ApiToken::new("token").unwrap())
///     .build()
///     .unwrap();
///
/// let client = HttpClient::new(&config);
///
/// let request = HttpRequest::builder(HttpMethod::Get, "https://acme.auth0.com/api/v2/clients")
///     .query_param("include_fields", "true")
///     .build()
///     .unwrap();
///
/// let response = client.request(request).await?;
/// ```
#[derive(Debug)]
pub struct HttpClient {
    client: reqwest::Client,
    default_headers: HashMap<String, String>,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a new HTTP client from the given configuration.
    ///
    /// # Panics
    ///
    /// Panics if the underlying reqwest client cannot be created. This should
    /// only happen in extremely unusual circumstances (e.g., TLS initialization failure).
    #[must_use]
    pub fn new(config: &Auth0Config) -> Self {
        let rust_version = env!("CARGO_PKG_RUST_VERSION");

        let user_agent_prefix = config
            .user_agent_prefix()
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let user_agent = format!("{user_agent_prefix}{SDK_NAME}/{SDK_VERSION} (Rust {rust_version})");

        let mut default_headers = HashMap::new();
        default_headers.insert("User-Agent".to_string(), user_agent);
        default_headers.insert("Accept".to_string(), "application/json".to_string());
        default_headers.insert("Content-Type".to_string(), "application/json".to_string());
        default_headers.insert(
            "Authorization".to_string(),
            format!("Bearer {}", config.token().as_ref()),
        );

        if config.telemetry() {
            default_headers.insert(
                TELEMETRY_HEADER.to_string(),
                Self::telemetry_value(rust_version),
            );
        }

        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .build()
            .expect("Failed to create HTTP client");

        tracing::debug!(
            domain = %config.domain(),
            telemetry = config.telemetry(),
            "Created Management API HTTP client"
        );

        Self {
            client,
            default_headers,
        }
    }

    /// Returns the default headers for this client.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Builds the base64-encoded telemetry payload.
    fn telemetry_value(rust_version: &str) -> String {
        let payload = serde_json::json!({
            "name": SDK_NAME,
            "version": SDK_VERSION,
            "env": { "rust": rust_version },
        });
        STANDARD.encode(payload.to_string())
    }

    /// Sends an HTTP request to the Management API.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if:
    /// - Request validation fails (`InvalidRequest`)
    /// - Network error occurs (`Network`)
    /// - Non-2xx response received (`Response`)
    pub async fn request(&self, request: HttpRequest) -> Result<HttpResponse, HttpError> {
        request.verify()?;

        let mut req_builder = match request.http_method {
            HttpMethod::Get => self.client.get(&request.url),
            HttpMethod::Post => self.client.post(&request.url),
            HttpMethod::Patch => self.client.patch(&request.url),
            HttpMethod::Delete => self.client.delete(&request.url),
        };

        for (key, value) in &self.default_headers {
            req_builder = req_builder.header(key, value);
        }
        if let Some(extra) = &request.extra_headers {
            for (key, value) in extra {
                req_builder = req_builder.header(key, value);
            }
        }

        if let Some(query) = request.query.as_ref().filter(|q| !q.is_empty()) {
            req_builder = req_builder.query(query);
        }

        if let Some(body) = &request.body {
            req_builder = req_builder.body(body.to_string());
        }

        tracing::debug!(method = %request.http_method, url = %request.url, "Sending Management API request");

        let res = req_builder.send().await?;

        let code = res.status().as_u16();
        let res_headers = Self::parse_response_headers(res.headers());
        let body_text = res.text().await?;
        let response = HttpResponse::new(code, res_headers, HttpResponse::decode_body(&body_text));

        if response.is_ok() {
            return Ok(response);
        }

        let error = HttpResponseError::from_body(response.code, &response.body);
        tracing::warn!(
            method = %request.http_method,
            url = %request.url,
            code = error.code,
            error_code = %error.error_code,
            "Management API request failed"
        );
        Err(error.into())
    }

    /// Parses response headers into a `HashMap`.
    fn parse_response_headers(
        headers: &reqwest::header::HeaderMap,
    ) -> HashMap<String, Vec<String>> {
        let mut result: HashMap<String, Vec<String>> = HashMap::new();
        for (name, value) in headers {
            let key = name.as_str().to_lowercase();
            let value = value.to_str().unwrap_or_default().to_string();
            result.entry(key).or_default().push(value);
        }
        result
    }
}

impl Transport for HttpClient {
    type Error = HttpError;

    async fn get(&self, url: &str, params: &QueryParams) -> Result<Value, Self::Error> {
        let request = HttpRequest::builder(HttpMethod::Get, url)
            .query(params.clone())
            .build()?;
        Ok(self.request(request).await?.body)
    }

    async fn post(&self, url: &str, body: &Value) -> Result<Value, Self::Error> {
        let request = HttpRequest::builder(HttpMethod::Post, url)
            .body(body.clone())
            .build()?;
        Ok(self.request(request).await?.body)
    }

    async fn patch(&self, url: &str, body: &Value) -> Result<Value, Self::Error> {
        let request = HttpRequest::builder(HttpMethod::Patch, url)
            .body(body.clone())
            .build()?;
        Ok(self.request(request).await?.body)
    }

    async fn delete(&self, url: &str) -> Result<Value, Self::Error> {
        let request = HttpRequest::builder(HttpMethod::Delete, url).build()?;
        Ok(self.request(request).await?.body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ApiToken, Domain};

    fn create_test_config(telemetry: bool) -> Auth0Config {
        Auth0Config::builder()
            .domain(Domain::new("acme.auth0.com").unwrap())
            .token(ApiToken::new("test-token").unwrap())
            .telemetry(telemetry)
            .build()
            .unwrap()
    }

    #[test]
    fn test_authorization_header_uses_bearer_token() {
        let client = HttpClient::new(&create_test_config(true));

        assert_eq!(
            client.default_headers().get("Authorization"),
            Some(&"Bearer test-token".to_string())
        );
    }

    #[test]
    fn test_json_headers() {
        let client = HttpClient::new(&create_test_config(true));
        let headers = client.default_headers();

        assert_eq!(headers.get("Accept"), Some(&"application/json".to_string()));
        assert_eq!(
            headers.get("Content-Type"),
            Some(&"application/json".to_string())
        );
    }

    #[test]
    fn test_telemetry_header_payload() {
        let client = HttpClient::new(&create_test_config(true));
        let encoded = client.default_headers().get(TELEMETRY_HEADER).unwrap();

        let decoded = STANDARD.decode(encoded).unwrap();
        let payload: Value = serde_json::from_slice(&decoded).unwrap();

        assert_eq!(payload["name"], SDK_NAME);
        assert_eq!(payload["version"], SDK_VERSION);
        assert!(payload["env"]["rust"].is_string());
    }

    #[test]
    fn test_telemetry_header_absent_when_disabled() {
        let client = HttpClient::new(&create_test_config(false));
        assert!(client.default_headers().get(TELEMETRY_HEADER).is_none());
    }

    #[test]
    fn test_user_agent_with_prefix() {
        let config = Auth0Config::builder()
            .domain(Domain::new("acme.auth0.com").unwrap())
            .token(ApiToken::new("test-token").unwrap())
            .user_agent_prefix("MyApp/1.0")
            .build()
            .unwrap();
        let client = HttpClient::new(&config);

        let user_agent = client.default_headers().get("User-Agent").unwrap();
        assert!(user_agent.starts_with("MyApp/1.0 | "));
        assert!(user_agent.contains(SDK_NAME));
        assert!(user_agent.contains("Rust"));
    }

    #[test]
    fn test_client_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<HttpClient>();
    }
}
