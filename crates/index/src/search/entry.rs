//! Search index entries.
//!
//! One entry pairs a search-parameter identity with a single extracted
//! value for one resource-indexing pass. Entries are created by the
//! upstream extraction collaborator, tagged in place by
//! [`tag_min_max`](super::bounds::tag_min_max), and discarded once
//! persisted.

use serde::{Deserialize, Serialize};

use crate::types::SearchParamType;

use super::values::SearchValue;

/// A search-parameter value attached to a resource for indexing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchIndexEntry {
    /// The parameter name (e.g., "name", "identifier").
    pub param_name: String,

    /// The parameter's canonical URL.
    pub param_url: String,

    /// The parameter type. Fixed once the value is extracted.
    pub param_type: SearchParamType,

    /// The extracted value.
    pub value: SearchValue,

    /// Whether this value is the minimum among the resource's values for
    /// the same parameter.
    pub is_min: bool,

    /// Whether this value is the maximum among the resource's values for
    /// the same parameter.
    pub is_max: bool,
}

impl SearchIndexEntry {
    /// Creates a new entry with both bound flags cleared.
    pub fn new(
        param_name: impl Into<String>,
        param_url: impl Into<String>,
        param_type: SearchParamType,
        value: SearchValue,
    ) -> Self {
        Self {
            param_name: param_name.into(),
            param_url: param_url.into(),
            param_type,
            value,
            is_min: false,
            is_max: false,
        }
    }
}
