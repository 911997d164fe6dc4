//! # Auth0 Management API client
//!
//! An async Rust client for the Auth0 Management API v2 resource endpoints.
//!
//! ## Overview
//!
//! This crate provides:
//! - Type-safe configuration via [`Auth0Config`] and [`Auth0ConfigBuilder`]
//! - Validated newtypes for the tenant [`Domain`] and Management [`ApiToken`]
//! - A generic [`ResourceClient`] implementing `list`, `create`, `get`,
//!   `update` and `delete` for any resource under `/api/v2`
//! - A pluggable [`Transport`] trait with a `reqwest`-backed [`HttpClient`]
//!
//! ## Quick Start
//!
//! ```rust
//! use auth0_management::{Auth0Config, ApiToken, Domain, ManagementClient};
//!
//! let config = Auth0Config::builder()
//!     .domain(Domain::new("acme.auth0.com").unwrap())
//!     .token(ApiToken::new("management-api-token").unwrap())
//!     .build()
//!     .unwrap();
//!
//! let auth0 = ManagementClient::new(&config);
//! let clients = auth0.clients();
//!
//! assert_eq!(clients.collection_url(), "https://acme.auth0.com/api/v2/clients");
//! ```
//!
//! ## Working With Applications
//!
//! ```rust,ignore
//! use auth0_management::management::{GetParams, ListParams};
//! use serde_json::json;
//!
//! let clients = auth0.clients();
//!
//! // GET /api/v2/clients?fields=name,client_id&include_fields=true&page=0
//! let page = clients
//!     .list(&ListParams {
//!         fields: Some(vec!["name".into(), "client_id".into()]),
//!         page: Some(0),
//!         ..Default::default()
//!     })
//!     .await?;
//!
//! // POST /api/v2/clients
//! let app = clients.create(&json!({"name": "App1"})).await?;
//!
//! // PATCH /api/v2/clients/{id}
//! let id = app["client_id"].as_str().unwrap();
//! clients.update(id, &json!({"name": "App1 (renamed)"})).await?;
//!
//! // GET /api/v2/clients/{id}?include_fields=true
//! let app = clients.get(id, &GetParams::default()).await?;
//!
//! // DELETE /api/v2/clients/{id}
//! clients.delete(id).await?;
//! ```
//!
//! ## Errors
//!
//! Resource clients add no error handling of their own. With [`HttpClient`]
//! every failure is an [`HttpError`]; non-2xx replies carry the status code,
//! Auth0's `errorCode` and the server message in [`HttpResponseError`].
//!
//! ## Design Principles
//!
//! - **No global state**: Configuration is instance-based and passed explicitly
//! - **Fail-fast validation**: Configuration newtypes validate on construction
//! - **Pass-through**: Bodies and results are opaque `serde_json::Value`s
//! - **Thread-safe**: All types are `Send + Sync`
//! - **Async-first**: Designed for use with the Tokio async runtime

pub mod clients;
pub mod config;
pub mod error;
pub mod management;

// Re-export public types at crate root for convenience
pub use config::{ApiToken, Auth0Config, Auth0ConfigBuilder, Domain};
pub use error::ConfigError;

pub use clients::{
    HttpClient, HttpError, HttpMethod, HttpRequest, HttpRequestBuilder, HttpResponse,
    HttpResponseError, InvalidHttpRequestError, QueryParams, Transport,
};

pub use management::{GetParams, ListParams, ManagementClient, ResourceClient};
