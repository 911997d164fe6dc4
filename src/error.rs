//! Error types for the Auth0 Management API client.
//!
//! This module contains the configuration and validation errors raised while
//! building an [`Auth0Config`](crate::Auth0Config). Errors coming back from
//! the Management API itself live in [`clients`](crate::clients).
//!
//! # Example
//!
//! ```rust
//! use auth0_management::{ApiToken, ConfigError};
//!
//! let result = ApiToken::new("");
//! assert!(matches!(result, Err(ConfigError::EmptyApiToken)));
//! ```

use thiserror::Error;

/// Errors that can occur during client configuration.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Management API token cannot be empty.
    #[error("Management API token cannot be empty. Please provide a valid Auth0 Management API v2 token.")]
    EmptyApiToken,

    /// Tenant domain is invalid.
    #[error("Invalid Auth0 domain '{domain}'. Expected a bare host name such as 'username.auth0.com'.")]
    InvalidDomain {
        /// The invalid domain that was provided.
        domain: String,
    },

    /// A required field is missing.
    #[error("Missing required field: '{field}'. This field must be set before building the configuration.")]
    MissingRequiredField {
        /// The name of the missing field.
        field: &'static str,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_api_token_error_message() {
        let message = ConfigError::EmptyApiToken.to_string();
        assert!(message.contains("token cannot be empty"));
    }

    #[test]
    fn test_invalid_domain_error_message() {
        let error = ConfigError::InvalidDomain {
            domain: "https://acme.auth0.com".to_string(),
        };
        let message = error.to_string();
        assert!(message.contains("https://acme.auth0.com"));
        assert!(message.contains("username.auth0.com"));
    }

    #[test]
    fn test_missing_required_field_error_message() {
        let error = ConfigError::MissingRequiredField { field: "domain" };
        let message = error.to_string();
        assert!(message.contains("domain"));
        assert!(message.contains("must be set"));
    }

    #[test]
    fn test_error_implements_std_error() {
        let _: &dyn std::error::Error = &ConfigError::EmptyApiToken;
    }
}
