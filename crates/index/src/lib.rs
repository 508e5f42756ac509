//! Helios FHIR Server Search Index Preparation
//!
//! This crate prepares typed search values for storage in a
//! document-oriented index that supports range and sort queries. It owns
//! two transformations of the indexing pipeline:
//!
//! - **Bounds tagging**: for a resource's full set of extracted values,
//!   marking which value in each same-parameter group is the minimum and
//!   which is the maximum, so range queries can consult one entry per
//!   resource instead of scanning all of them.
//! - **Sort-key encoding**: collapsing a low/high pair of values into the
//!   canonical `{"l": …, "h": …}` document fragment embedded in the
//!   stored resource document.
//!
//! Everything around these two steps is a collaborator: FHIRPath value
//! extraction happens upstream, sort-parameter selection and persistence
//! happen downstream through [`search::SortIndexWriter`].
//!
//! # Architecture
//!
//! - [`types`] - parameter-type classification and `_sort` vocabulary
//! - [`search`] - value model, entries, bounds tagging, sort encoding,
//!   writer trait
//! - [`error`] - error types for the persistence boundary
//!
//! # Quick Start
//!
//! ```
//! use helios_index::search::{
//!     SearchIndexEntry, SearchValue, SortValue, sort_fragment, tag_min_max,
//! };
//! use helios_index::types::SearchParamType;
//!
//! // Values extracted for one resource (extraction itself is upstream).
//! let mut entries = vec![
//!     SearchIndexEntry::new(
//!         "family",
//!         "http://hl7.org/fhir/SearchParameter/individual-family",
//!         SearchParamType::String,
//!         SearchValue::string("smith"),
//!     ),
//!     SearchIndexEntry::new(
//!         "family",
//!         "http://hl7.org/fhir/SearchParameter/individual-family",
//!         SearchParamType::String,
//!         SearchValue::string("abbott"),
//!     ),
//! ];
//!
//! // Mark each parameter group's extremes in place.
//! tag_min_max(&mut entries);
//! assert!(entries[1].is_min);
//! assert!(entries[0].is_max);
//!
//! // Encode the resolved low/high pair for the sort index.
//! let sort_value = SortValue::new(
//!     Some(SearchValue::string("abbott")),
//!     Some(SearchValue::string("smith")),
//! );
//! let fragment = sort_fragment(&sort_value);
//! assert_eq!(fragment["l"], "ABBOTT");
//! assert_eq!(fragment["h"], "SMITH");
//! ```
//!
//! # Concurrency
//!
//! Both transformations are synchronous, allocation-light, and touch no
//! state outside their arguments. Resources may be indexed concurrently
//! across a worker pool with no synchronization between them.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod error;
pub mod search;
pub mod types;

// Re-export commonly used types at crate root
pub use error::{IndexError, IndexResult};
pub use search::{
    SearchIndexEntry, SearchValue, SortIndexWriter, SortValue, build_sort_document, sort_fragment,
    tag_min_max,
};
pub use types::{SearchParamType, SortDirection, SortDirective};

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name.
pub const NAME: &str = env!("CARGO_PKG_NAME");
