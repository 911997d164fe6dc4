//! Configuration types for the Auth0 Management API client.
//!
//! # Overview
//!
//! - [`Auth0Config`]: The configuration shared by every resource client
//! - [`Auth0ConfigBuilder`]: A builder for constructing [`Auth0Config`] instances
//! - [`Domain`]: A validated tenant domain
//! - [`ApiToken`]: A Management API v2 token with masked debug output
//!
//! # Example
//!
//! ```rust
//! use auth0_management::{Auth0Config, ApiToken, Domain};
//!
//! let config = Auth0Config::builder()
//!     .domain(Domain::new("acme.auth0.com").unwrap())
//!     .token(ApiToken::new("management-api-token").unwrap())
//!     .build()
//!     .unwrap();
//!
//! assert!(config.telemetry());
//! ```

mod newtypes;

pub use newtypes::{ApiToken, Domain};

use crate::error::ConfigError;

/// Configuration for talking to one Auth0 tenant.
///
/// `Auth0Config` is `Clone`, `Send`, and `Sync`; it carries no connection
/// state of its own.
#[derive(Clone, Debug)]
pub struct Auth0Config {
    domain: Domain,
    token: ApiToken,
    telemetry: bool,
    user_agent_prefix: Option<String>,
}

impl Auth0Config {
    /// Creates a new builder for constructing an `Auth0Config`.
    #[must_use]
    pub fn builder() -> Auth0ConfigBuilder {
        Auth0ConfigBuilder::new()
    }

    /// Returns the tenant domain.
    #[must_use]
    pub const fn domain(&self) -> &Domain {
        &self.domain
    }

    /// Returns the Management API token.
    #[must_use]
    pub const fn token(&self) -> &ApiToken {
        &self.token
    }

    /// Returns whether the `Auth0-Client` telemetry header is sent.
    #[must_use]
    pub const fn telemetry(&self) -> bool {
        self.telemetry
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }
}

// Verify Auth0Config is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Auth0Config>();
};

/// Builder for constructing [`Auth0Config`] instances.
///
/// `domain` and `token` are required.
///
/// # Defaults
///
/// - `telemetry`: `true`
/// - `user_agent_prefix`: `None`
#[derive(Debug, Default)]
pub struct Auth0ConfigBuilder {
    domain: Option<Domain>,
    token: Option<ApiToken>,
    telemetry: Option<bool>,
    user_agent_prefix: Option<String>,
}

impl Auth0ConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the tenant domain (required).
    #[must_use]
    pub fn domain(mut self, domain: Domain) -> Self {
        self.domain = Some(domain);
        self
    }

    /// Sets the Management API token (required).
    #[must_use]
    pub fn token(mut self, token: ApiToken) -> Self {
        self.token = Some(token);
        self
    }

    /// Enables or disables the `Auth0-Client` telemetry header.
    #[must_use]
    pub const fn telemetry(mut self, enabled: bool) -> Self {
        self.telemetry = Some(enabled);
        self
    }

    /// Sets a prefix prepended to the `User-Agent` header.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Builds the [`Auth0Config`], validating that required fields are set.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `domain` or `token`
    /// are not set.
    pub fn build(self) -> Result<Auth0Config, ConfigError> {
        let domain = self
            .domain
            .ok_or(ConfigError::MissingRequiredField { field: "domain" })?;
        let token = self
            .token
            .ok_or(ConfigError::MissingRequiredField { field: "token" })?;

        Ok(Auth0Config {
            domain,
            token,
            telemetry: self.telemetry.unwrap_or(true),
            user_agent_prefix: self.user_agent_prefix,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn domain() -> Domain {
        Domain::new("acme.auth0.com").unwrap()
    }

    fn token() -> ApiToken {
        ApiToken::new("token").unwrap()
    }

    #[test]
    fn test_builder_requires_domain() {
        let result = Auth0ConfigBuilder::new().token(token()).build();

        assert!(matches!(
            result,
            Err(ConfigError::MissingRequiredField { field: "domain" })
        ));
    }

    #[test]
    fn test_builder_requires_token() {
        let result = Auth0ConfigBuilder::new().domain(domain()).build();

        assert!(matches!(
            result,
            Err(ConfigError::MissingRequiredField { field: "token" })
        ));
    }

    #[test]
    fn test_builder_provides_sensible_defaults() {
        let config = Auth0Config::builder()
            .domain(domain())
            .token(token())
            .build()
            .unwrap();

        assert_eq!(config.domain().as_ref(), "acme.auth0.com");
        assert_eq!(config.token().as_ref(), "token");
        assert!(config.telemetry());
        assert!(config.user_agent_prefix().is_none());
    }

    #[test]
    fn test_builder_with_all_optional_fields() {
        let config = Auth0Config::builder()
            .domain(domain())
            .token(token())
            .telemetry(false)
            .user_agent_prefix("MyApp/1.0")
            .build()
            .unwrap();

        assert!(!config.telemetry());
        assert_eq!(config.user_agent_prefix(), Some("MyApp/1.0"));
    }

    #[test]
    fn test_config_debug_masks_token() {
        let config = Auth0Config::builder()
            .domain(domain())
            .token(ApiToken::new("very-secret").unwrap())
            .build()
            .unwrap();

        let debug_str = format!("{:?}", config);
        assert!(debug_str.contains("Auth0Config"));
        assert!(!debug_str.contains("very-secret"));
    }
}
