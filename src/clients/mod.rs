//! HTTP transport layer for the Auth0 Management API.
//!
//! # Overview
//!
//! - [`Transport`]: The capability trait resource clients delegate to
//! - [`HttpClient`]: The `reqwest`-backed [`Transport`] implementation
//! - [`HttpRequest`] / [`HttpResponse`]: A request to send and the decoded reply
//! - [`HttpMethod`]: GET, POST, PATCH, DELETE
//! - [`HttpError`]: Unified error type for transport failures
//!
//! # Error Contract
//!
//! Every non-2xx reply becomes [`HttpResponseError`], carrying the status
//! code, Auth0's `errorCode` and the server's message. Nothing is retried
//! and no status code is reinterpreted.

mod errors;
mod http_client;
mod http_request;
mod http_response;
mod transport;

pub use errors::{HttpError, HttpResponseError, InvalidHttpRequestError, UNKNOWN_ERROR_CODE};
pub use http_client::{HttpClient, SDK_NAME, SDK_VERSION, TELEMETRY_HEADER};
pub use http_request::{HttpMethod, HttpRequest, HttpRequestBuilder};
pub use http_response::HttpResponse;
pub use transport::{QueryParams, Transport};
