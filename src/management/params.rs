//! Query parameter sets for list and get operations.
//!
//! The Management API accepts a field selector on both collection and item
//! reads:
//!
//! - `fields`: comma-joined field names, omitted when no names are given
//! - `include_fields`: `"true"` or `"false"`, always sent
//!
//! Collection reads additionally take `page` and `per_page`, plus any
//! endpoint-specific filters through [`ListParams::extra_params`].

use std::collections::HashMap;

use crate::clients::QueryParams;

/// Keys owned by the explicit [`ListParams`] fields.
pub const RESERVED_KEYS: [&str; 4] = ["fields", "include_fields", "page", "per_page"];

/// Parameters for [`ResourceClient::list`](super::ResourceClient::list).
///
/// # Precedence
///
/// The outgoing query starts from a copy of `extra_params`. The four reserved
/// keys (`fields`, `include_fields`, `page`, `per_page`) are then always
/// decided by the explicit fields: a present value overwrites, an absent one
/// removes the key. An `extra_params` entry can never override an explicit
/// argument.
///
/// # Example
///
/// ```rust
/// use auth0_management::management::ListParams;
///
/// let params = ListParams {
///     fields: Some(vec!["name".to_string(), "client_id".to_string()]),
///     include_fields: false,
///     page: Some(2),
///     ..Default::default()
/// };
///
/// let query = params.to_query();
/// assert_eq!(query["fields"], "name,client_id");
/// assert_eq!(query["include_fields"], "false");
/// assert_eq!(query["page"], "2");
/// assert!(!query.contains_key("per_page"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListParams {
    /// Field names to include or exclude. `None` or empty means all fields.
    pub fields: Option<Vec<String>>,

    /// Whether `fields` lists fields to include (`true`) or exclude (`false`).
    pub include_fields: bool,

    /// Zero-based page number.
    pub page: Option<u32>,

    /// Number of entries per page.
    pub per_page: Option<u32>,

    /// Additional endpoint-specific query parameters.
    pub extra_params: Option<HashMap<String, String>>,
}

impl Default for ListParams {
    fn default() -> Self {
        Self {
            fields: None,
            include_fields: true,
            page: None,
            per_page: None,
            extra_params: None,
        }
    }
}

impl ListParams {
    /// Builds the query parameter set for this call.
    #[must_use]
    pub fn to_query(&self) -> QueryParams {
        let mut query: QueryParams = self.extra_params.clone().unwrap_or_default();

        for key in RESERVED_KEYS {
            query.remove(key);
        }

        insert_field_selection(&mut query, self.fields.as_deref(), self.include_fields);

        if let Some(page) = self.page {
            query.insert("page".to_string(), page.to_string());
        }
        if let Some(per_page) = self.per_page {
            query.insert("per_page".to_string(), per_page.to_string());
        }

        query
    }
}

/// Parameters for [`ResourceClient::get`](super::ResourceClient::get).
///
/// # Example
///
/// ```rust
/// use auth0_management::management::GetParams;
///
/// let query = GetParams::default().to_query();
/// assert_eq!(query.len(), 1);
/// assert_eq!(query["include_fields"], "true");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GetParams {
    /// Field names to include or exclude. `None` or empty means all fields.
    pub fields: Option<Vec<String>>,

    /// Whether `fields` lists fields to include (`true`) or exclude (`false`).
    pub include_fields: bool,
}

impl Default for GetParams {
    fn default() -> Self {
        Self {
            fields: None,
            include_fields: true,
        }
    }
}

impl GetParams {
    /// Builds the query parameter set for this call.
    #[must_use]
    pub fn to_query(&self) -> QueryParams {
        let mut query = QueryParams::new();
        insert_field_selection(&mut query, self.fields.as_deref(), self.include_fields);
        query
    }
}

/// Writes the field selector pair into `query`.
fn insert_field_selection(query: &mut QueryParams, fields: Option<&[String]>, include_fields: bool) {
    if let Some(names) = fields.filter(|names| !names.is_empty()) {
        query.insert("fields".to_string(), names.join(","));
    }
    query.insert("include_fields".to_string(), include_fields.to_string());
}
