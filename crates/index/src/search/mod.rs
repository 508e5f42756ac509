//! Search index sort preparation.
//!
//! This module holds the two components that turn extracted search values
//! into the sortable shape the index stores, plus the value model they
//! share:
//!
//! - [`values`] - the closed, typed search value model
//! - [`entry`] - per-resource index entries with min/max bound flags
//! - [`bounds`] - min/max tagging across same-parameter value groups
//! - [`sort`] - sort-key encoding into two-field document fragments
//! - [`writer`] - trait for persisting sort documents
//!
//! # Indexing Pass
//!
//! ```text
//! 1. Extraction (external) produces SearchIndexEntry values
//!    └── one entry per parameter per matching value
//!
//! 2. tag_min_max marks each parameter group's extremes in place
//!    └── string values only; ties all flagged
//!
//! 3. Sort-parameter resolution (external) picks low/high pairs
//!    └── one SortValue per sortable parameter
//!
//! 4. sort_fragment / build_sort_document encode the fragments
//!    └── handed to a SortIndexWriter implementation
//! ```

pub mod bounds;
pub mod entry;
pub mod sort;
pub mod values;
pub mod writer;

// Re-export main types
pub use bounds::tag_min_max;
pub use entry::SearchIndexEntry;
pub use sort::{HIGH_KEY, LOW_KEY, SortValue, build_sort_document, sort_fragment};
pub use values::SearchValue;
pub use writer::SortIndexWriter;
