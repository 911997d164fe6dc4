//! The transport capability resource clients delegate to.
//!
//! [`ResourceClient`](crate::management::ResourceClient) never talks to the
//! network itself. It composes a URL and a [`QueryParams`] set and hands them
//! to a [`Transport`]. [`HttpClient`](crate::clients::HttpClient) is the
//! production implementation; tests plug in recording fakes.

use std::collections::HashMap;
use std::sync::Arc;

use serde_json::Value;

/// Query parameters for a single request, keyed by parameter name.
///
/// Absent values are simply not present in the map.
pub type QueryParams = HashMap<String, String>;

/// An HTTP transport able to perform the four verbs used by resource clients.
///
/// Results are decoded JSON (`null` for empty bodies). Failures are reported
/// through the implementation's own `Error` type and travel back to the
/// caller unchanged.
///
/// # Example
///
/// ```rust
/// use auth0_management::clients::{QueryParams, Transport};
/// use serde_json::{json, Value};
///
/// struct Offline;
///
/// impl Transport for Offline {
///     type Error = std::io::Error;
///
///     async fn get(&self, url: &str, _params: &QueryParams) -> Result<Value, Self::Error> {
///         Ok(json!({ "url": url }))
///     }
///     async fn post(&self, _url: &str, body: &Value) -> Result<Value, Self::Error> {
///         Ok(body.clone())
///     }
///     async fn patch(&self, _url: &str, body: &Value) -> Result<Value, Self::Error> {
///         Ok(body.clone())
///     }
///     async fn delete(&self, _url: &str) -> Result<Value, Self::Error> {
///         Ok(Value::Null)
///     }
/// }
/// ```
#[allow(async_fn_in_trait)]
pub trait Transport {
    /// The error type surfaced to callers on failure.
    type Error: std::error::Error;

    /// Sends a GET request with the given query parameters.
    async fn get(&self, url: &str, params: &QueryParams) -> Result<Value, Self::Error>;

    /// Sends a POST request with a JSON body.
    async fn post(&self, url: &str, body: &Value) -> Result<Value, Self::Error>;

    /// Sends a PATCH request with a JSON body.
    async fn patch(&self, url: &str, body: &Value) -> Result<Value, Self::Error>;

    /// Sends a DELETE request without a body.
    async fn delete(&self, url: &str) -> Result<Value, Self::Error>;
}

impl<T: Transport + ?Sized> Transport for &T {
    type Error = T::Error;

    async fn get(&self, url: &str, params: &QueryParams) -> Result<Value, Self::Error> {
        (**self).get(url, params).await
    }

    async fn post(&self, url: &str, body: &Value) -> Result<Value, Self::Error> {
        (**self).post(url, body).await
    }

    async fn patch(&self, url: &str, body: &Value) -> Result<Value, Self::Error> {
        (**self).patch(url, body).await
    }

    async fn delete(&self, url: &str) -> Result<Value, Self::Error> {
        (**self).delete(url).await
    }
}

impl<T: Transport + ?Sized> Transport for Arc<T> {
    type Error = T::Error;

    async fn get(&self, url: &str, params: &QueryParams) -> Result<Value, Self::Error> {
        (**self).get(url, params).await
    }

    async fn post(&self, url: &str, body: &Value) -> Result<Value, Self::Error> {
        (**self).post(url, body).await
    }

    async fn patch(&self, url: &str, body: &Value) -> Result<Value, Self::Error> {
        (**self).patch(url, body).await
    }

    async fn delete(&self, url: &str) -> Result<Value, Self::Error> {
        (**self).delete(url).await
    }
}
