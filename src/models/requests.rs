//! Request DTOs for the lookup API
//!
//! Defines the query parameters of incoming HTTP requests.

use serde::Deserialize;

/// Maximum accepted length of a CRM class identifier or URI
pub const MAX_CRM_CLASS_LENGTH: usize = 2048;

/// Query string of the class lookups (`GET /classes`, `GET /event-types`)
///
/// Event types are URIs, so the identifier travels as a query parameter
/// rather than a path segment.
#[derive(Debug, Clone, Deserialize)]
pub struct ClassQuery {
    /// CIDOC-CRM class code or event type URI
    pub crm: String,
}

impl ClassQuery {
    /// Validates the query
    ///
    /// Returns an error message if validation fails, None if valid.
    pub fn validate(&self) -> Option<String> {
        if self.crm.trim().is_empty() {
            return Some("CRM class cannot be empty".to_string());
        }
        if self.crm.len() > MAX_CRM_CLASS_LENGTH {
            return Some(format!(
                "CRM class exceeds maximum length of {} characters",
                MAX_CRM_CLASS_LENGTH
            ));
        }
        None
    }
}
