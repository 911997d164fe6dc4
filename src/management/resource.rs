//! Generic client for a single Management API resource.
//!
//! Every resource under `/api/v2` follows the same template: a collection
//! endpoint that lists and creates, and an item endpoint that reads, updates
//! and deletes one entity. [`ResourceClient`] is that template parametrized by
//! the resource path segment and the [`Transport`] that performs the I/O.

use serde_json::Value;

use crate::clients::Transport;
use crate::management::{GetParams, ListParams};

/// API prefix shared by all Management API v2 endpoints.
pub const API_PREFIX: &str = "api/v2";

/// Client for one Management API resource (e.g. `clients`).
///
/// The client only composes URLs and query parameters. Results and errors
/// come back from the transport unchanged.
///
/// # Thread Safety
///
/// `ResourceClient<T>` is `Send + Sync` whenever `T` is. Each call builds its
/// own parameter set, so concurrent calls share nothing mutable.
///
/// # Example
///
/// ```rust,ignore
/// use auth0_management::management::{ListParams, ResourceClient};
/// use serde_json::json;
///
/// let apps = ResourceClient::new("acme.auth0.com", "clients", transport);
///
/// let created = apps.create(&json!({"name": "App1"})).await?;
/// let listed = apps.list(&ListParams::default()).await?;
/// ```
#[derive(Debug, Clone)]
pub struct ResourceClient<T> {
    domain: String,
    resource: String,
    transport: T,
}

impl<T: Transport> ResourceClient<T> {
    /// Creates a client for `resource` on the tenant at `domain`.
    ///
    /// Neither value is validated here; use
    /// [`Domain`](crate::Domain) upstream when the domain comes from
    /// user input.
    #[must_use]
    pub fn new(domain: impl Into<String>, resource: impl Into<String>, transport: T) -> Self {
        Self {
            domain: domain.into(),
            resource: resource.into(),
            transport,
        }
    }

    /// Returns the tenant domain.
    #[must_use]
    pub fn domain(&self) -> &str {
        &self.domain
    }

    /// Returns the resource path segment.
    #[must_use]
    pub fn resource(&self) -> &str {
        &self.resource
    }

    /// Returns the underlying transport.
    #[must_use]
    pub const fn transport(&self) -> &T {
        &self.transport
    }

    /// Returns `https://{domain}/api/v2/{resource}`.
    #[must_use]
    pub fn collection_url(&self) -> String {
        format!("https://{}/{API_PREFIX}/{}", self.domain, self.resource)
    }

    /// Returns the URL of a single entity.
    ///
    /// The identifier is percent-encoded as one path segment. Unreserved
    /// characters (`A-Z a-z 0-9 - . _ ~`) pass through, so ordinary ids yield
    /// exactly `collection_url + "/" + id`.
    #[must_use]
    pub fn item_url(&self, id: &str) -> String {
        format!("{}/{}", self.collection_url(), urlencoding::encode(id))
    }

    /// Lists entities of this resource.
    ///
    /// Sends `GET {collection_url}` with the query built by
    /// [`ListParams::to_query`]. The result is whatever the server returned:
    /// an array, or a paginated envelope when paging totals were requested.
    ///
    /// # Errors
    ///
    /// Returns the transport's error unchanged.
    pub async fn list(&self, params: &ListParams) -> Result<Value, T::Error> {
        let url = self.collection_url();
        let query = params.to_query();
        tracing::debug!(resource = %self.resource, %url, "list");
        self.transport.get(&url, &query).await
    }

    /// Creates an entity from `body`.
    ///
    /// # Errors
    ///
    /// Returns the transport's error unchanged.
    pub async fn create(&self, body: &Value) -> Result<Value, T::Error> {
        let url = self.collection_url();
        tracing::debug!(resource = %self.resource, %url, "create");
        self.transport.post(&url, body).await
    }

    /// Retrieves one entity by id.
    ///
    /// # Errors
    ///
    /// Returns the transport's error unchanged; a missing id surfaces as the
    /// transport's not-found error.
    pub async fn get(&self, id: &str, params: &GetParams) -> Result<Value, T::Error> {
        let url = self.item_url(id);
        let query = params.to_query();
        tracing::debug!(resource = %self.resource, %url, "get");
        self.transport.get(&url, &query).await
    }

    /// Deletes one entity by id.
    ///
    /// # Errors
    ///
    /// Returns the transport's error unchanged.
    pub async fn delete(&self, id: &str) -> Result<Value, T::Error> {
        let url = self.item_url(id);
        tracing::debug!(resource = %self.resource, %url, "delete");
        self.transport.delete(&url).await
    }

    /// Applies a partial update to one entity.
    ///
    /// # Errors
    ///
    /// Returns the transport's error unchanged.
    pub async fn update(&self, id: &str, body: &Value) -> Result<Value, T::Error> {
        let url = self.item_url(id);
        tracing::debug!(resource = %self.resource, %url, "update");
        self.transport.patch(&url, body).await
    }
}
