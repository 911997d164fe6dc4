//! Entry point that hands out resource clients for one tenant.

use std::sync::Arc;

use crate::clients::{HttpClient, Transport};
use crate::config::{Auth0Config, Domain};
use crate::management::ResourceClient;

/// Resource path segment for applications.
pub const CLIENTS: &str = "clients";

/// Management API entry point for one Auth0 tenant.
///
/// A `ManagementClient` owns a shared transport and creates
/// [`ResourceClient`]s on demand. Handing out a resource client clones the
/// transport handle (an `Arc` for [`HttpClient`]), so all resources share one
/// connection pool.
///
/// # Example
///
/// ```rust,ignore
/// use auth0_management::{Auth0Config, ApiToken, Domain, ManagementClient};
/// use auth0_management::management::GetParams;
///
/// let config = Auth0Config::builder()
///     .domain(Domain::new("acme.auth0.com").unwrap())
///     .token(ApiToken::new("token").unwrap())
///     .build()
///     .unwrap();
///
/// let auth0 = ManagementClient::new(&config);
/// let app = auth0.clients().get("abc123", &GetParams::default()).await?;
/// ```
#[derive(Debug, Clone)]
pub struct ManagementClient<T = Arc<HttpClient>> {
    domain: Domain,
    transport: T,
}

impl ManagementClient<Arc<HttpClient>> {
    /// Creates a client backed by an [`HttpClient`] built from `config`.
    #[must_use]
    pub fn new(config: &Auth0Config) -> Self {
        Self::with_transport(config.domain().clone(), Arc::new(HttpClient::new(config)))
    }
}

impl<T: Transport + Clone> ManagementClient<T> {
    /// Creates a client that sends every request through `transport`.
    #[must_use]
    pub fn with_transport(domain: Domain, transport: T) -> Self {
        Self { domain, transport }
    }

    /// Returns the tenant domain.
    #[must_use]
    pub const fn domain(&self) -> &Domain {
        &self.domain
    }

    /// Returns a client for the applications resource (`/api/v2/clients`).
    #[must_use]
    pub fn clients(&self) -> ResourceClient<T> {
        self.resource(CLIENTS)
    }

    /// Returns a client for any resource that follows the standard
    /// collection/item template, e.g. `"connections"` or `"resource-servers"`.
    #[must_use]
    pub fn resource(&self, name: &str) -> ResourceClient<T> {
        ResourceClient::new(self.domain.as_ref(), name, self.transport.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ApiToken;

    fn config() -> Auth0Config {
        Auth0Config::builder()
            .domain(Domain::new("acme.auth0.com").unwrap())
            .token(ApiToken::new("token").unwrap())
            .build()
            .unwrap()
    }

    #[test]
    fn test_clients_resource_urls() {
        let auth0 = ManagementClient::new(&config());
        let clients = auth0.clients();

        assert_eq!(clients.resource(), "clients");
        assert_eq!(
            clients.collection_url(),
            "https://acme.auth0.com/api/v2/clients"
        );
        assert_eq!(
            clients.item_url("abc123"),
            "https://acme.auth0.com/api/v2/clients/abc123"
        );
    }

    #[test]
    fn test_resources_share_one_transport() {
        let auth0 = ManagementClient::new(&config());
        let clients = auth0.clients();
        let connections = auth0.resource("connections");

        assert!(Arc::ptr_eq(clients.transport(), connections.transport()));
        assert_eq!(
            connections.collection_url(),
            "https://acme.auth0.com/api/v2/connections"
        );
    }

    #[test]
    fn test_management_client_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ManagementClient>();
        assert_send_sync::<ResourceClient<Arc<HttpClient>>>();
    }
}
