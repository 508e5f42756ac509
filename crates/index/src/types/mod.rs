//! Core types for search index preparation.
//!
//! This module provides the parameter-level vocabulary shared by the
//! tagging and encoding components:
//!
//! - [`SearchParamType`] - classification of search parameters
//! - [`SortDirective`], [`SortDirection`] - `_sort` request vocabulary

mod search_params;

pub use search_params::{SearchParamType, SortDirection, SortDirective};
