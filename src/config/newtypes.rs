//! Validated newtype wrappers for configuration values.
//!
//! Invalid values are rejected on construction, so a built
//! [`Auth0Config`](crate::Auth0Config) never carries an empty token or a
//! domain that cannot be spliced into an endpoint URL.

use crate::error::ConfigError;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A validated Auth0 tenant domain, e.g. `username.auth0.com`.
///
/// The domain is a bare host name (optionally with a port). Schemes, paths,
/// query strings and whitespace are rejected because the domain is
/// interpolated directly into `https://{domain}/api/v2/...`.
///
/// # Example
///
/// ```rust
/// use auth0_management::Domain;
///
/// let domain = Domain::new("acme.auth0.com").unwrap();
/// assert_eq!(domain.as_ref(), "acme.auth0.com");
///
/// assert!(Domain::new("https://acme.auth0.com").is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Domain(String);

impl Domain {
    /// Creates a new validated domain.
    ///
    /// Surrounding whitespace is trimmed and the host is lowercased.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidDomain`] if the domain is empty or
    /// contains characters that do not belong in a host name.
    pub fn new(domain: impl Into<String>) -> Result<Self, ConfigError> {
        let domain = domain.into();
        let domain = domain.trim().to_lowercase();

        if domain.is_empty() || !Self::is_valid_host(&domain) {
            return Err(ConfigError::InvalidDomain { domain });
        }

        Ok(Self(domain))
    }

    fn is_valid_host(host: &str) -> bool {
        if host.starts_with('.') || host.starts_with('-') || host.ends_with('.') {
            return false;
        }

        host.chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | ':'))
    }
}

impl AsRef<str> for Domain {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Serialize for Domain {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for Domain {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::new(s).map_err(de::Error::custom)
    }
}

/// A Management API v2 access token.
///
/// The token is sent as `Authorization: Bearer {token}`. Its value is masked
/// in debug output to keep it out of logs.
///
/// # Example
///
/// ```rust
/// use auth0_management::ApiToken;
///
/// let token = ApiToken::new("eyJhbGciOi...").unwrap();
/// assert_eq!(format!("{:?}", token), "ApiToken(*****)");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct ApiToken(String);

impl ApiToken {
    /// Creates a new validated API token.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyApiToken`] if the token is empty.
    pub fn new(token: impl Into<String>) -> Result<Self, ConfigError> {
        let token = token.into();
        if token.trim().is_empty() {
            return Err(ConfigError::EmptyApiToken);
        }
        Ok(Self(token))
    }
}

impl AsRef<str> for ApiToken {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiToken(*****)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_domain_accepts_tenant_host() {
        let domain = Domain::new("acme.auth0.com").unwrap();
        assert_eq!(domain.as_ref(), "acme.auth0.com");
        assert_eq!(domain.to_string(), "acme.auth0.com");
    }

    #[test]
    fn test_domain_trims_and_lowercases() {
        let domain = Domain::new("  Acme.EU.Auth0.com ").unwrap();
        assert_eq!(domain.as_ref(), "acme.eu.auth0.com");
    }

    #[test]
    fn test_domain_accepts_port() {
        assert!(Domain::new("localhost:8080").is_ok());
    }

    #[test]
    fn test_domain_rejects_invalid_values() {
        assert!(Domain::new("").is_err());
        assert!(Domain::new("   ").is_err());
        assert!(Domain::new("https://acme.auth0.com").is_err());
        assert!(Domain::new("acme.auth0.com/api").is_err());
        assert!(Domain::new("acme auth0.com").is_err());
        assert!(Domain::new(".acme.auth0.com").is_err());
        assert!(Domain::new("acme.auth0.com.").is_err());
    }

    #[test]
    fn test_domain_serde() {
        let domain = Domain::new("acme.auth0.com").unwrap();
        let json = serde_json::to_string(&domain).unwrap();
        assert_eq!(json, r#""acme.auth0.com""#);

        let restored: Domain = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, domain);

        let invalid: Result<Domain, _> = serde_json::from_str(r#""not a domain""#);
        assert!(invalid.is_err());
    }

    #[test]
    fn test_api_token_rejects_empty() {
        assert!(matches!(ApiToken::new(""), Err(ConfigError::EmptyApiToken)));
        assert!(matches!(ApiToken::new("  "), Err(ConfigError::EmptyApiToken)));
    }

    #[test]
    fn test_api_token_masks_value_in_debug() {
        let token = ApiToken::new("super-secret-token").unwrap();
        let debug_output = format!("{:?}", token);
        assert_eq!(debug_output, "ApiToken(*****)");
        assert!(!debug_output.contains("super-secret-token"));
    }
}
