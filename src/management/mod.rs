//! Management API v2 resource clients.
//!
//! # Overview
//!
//! - [`ResourceClient`]: `list`, `create`, `get`, `update` and `delete` for one
//!   resource, over any [`Transport`](crate::clients::Transport)
//! - [`ListParams`] / [`GetParams`]: field selection, paging and extra filters
//! - [`ManagementClient`]: builds resource clients that share one transport
//!
//! # Wire Contract
//!
//! | Operation | Request |
//! |-----------|---------|
//! | `list`    | `GET https://{domain}/api/v2/{resource}` |
//! | `create`  | `POST https://{domain}/api/v2/{resource}` |
//! | `get`     | `GET https://{domain}/api/v2/{resource}/{id}` |
//! | `update`  | `PATCH https://{domain}/api/v2/{resource}/{id}` |
//! | `delete`  | `DELETE https://{domain}/api/v2/{resource}/{id}` |
//!
//! # Example
//!
//! ```rust,ignore
//! use auth0_management::{Auth0Config, ApiToken, Domain, ManagementClient};
//! use auth0_management::management::ListParams;
//!
//! let auth0 = ManagementClient::new(&config);
//!
//! let apps = auth0
//!     .clients()
//!     .list(&ListParams {
//!         fields: Some(vec!["name".into(), "client_id".into()]),
//!         page: Some(0),
//!         per_page: Some(50),
//!         ..Default::default()
//!     })
//!     .await?;
//! ```

mod client;
mod params;
mod resource;

pub use client::{ManagementClient, CLIENTS};
pub use params::{GetParams, ListParams, RESERVED_KEYS};
pub use resource::{ResourceClient, API_PREFIX};
