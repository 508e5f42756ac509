//! Sort document writer trait.
//!
//! Defines the interface to the persistence collaborator that embeds sort
//! documents into stored resource documents. Each backend implements this
//! trait according to its storage model.

use async_trait::async_trait;
use serde_json::{Map, Value};

use crate::error::IndexResult;

/// Trait for persisting per-resource sort documents.
///
/// Implementations embed the document as an indexed sub-document of the
/// stored resource, keyed by parameter name, with each fragment's `"l"`
/// and `"h"` keys preserved exactly as produced (including the
/// absent-key/explicit-null distinction). Calls for different resources
/// are independent and may run concurrently.
#[async_trait]
pub trait SortIndexWriter: Send + Sync {
    /// Writes the sort document for a resource, replacing any previous one.
    ///
    /// # Arguments
    ///
    /// * `tenant_id` - The tenant identifier
    /// * `resource_type` - The resource type (e.g., "Patient")
    /// * `resource_id` - The resource's logical ID
    /// * `document` - Per-parameter sort fragments, keyed by parameter name
    async fn write_sort_document(
        &self,
        tenant_id: &str,
        resource_type: &str,
        resource_id: &str,
        document: Map<String, Value>,
    ) -> IndexResult<()>;

    /// Deletes the sort document for a resource.
    ///
    /// Called when a resource is deleted, or before re-indexing replaces
    /// its values wholesale.
    async fn delete_sort_document(
        &self,
        tenant_id: &str,
        resource_type: &str,
        resource_id: &str,
    ) -> IndexResult<()>;
}
