//! Min/max bounds tagging.
//!
//! Marks, within each group of same-parameter values on one resource,
//! which values are the minimum and the maximum. Only string-typed values
//! are tagged: their stored text has a cheap total order under the same
//! uppercasing rule the sort encoder persists with, so the tagger's
//! extremes and the index's sort order always agree. Every other type
//! keeps both flags cleared.

use std::collections::HashMap;

use crate::types::SearchParamType;

use super::entry::SearchIndexEntry;

/// Tags the minimum and maximum string values of every parameter group.
///
/// Grouping is by parameter identity (name and canonical URL); values for
/// different parameters never interact. Input order is irrelevant, and no
/// entry is reordered, copied, or dropped: only the `is_min`/`is_max`
/// flags are written. Values that compare equal to an extreme under the
/// normalized comparison all receive the flag, and a singleton group's
/// value is both minimum and maximum.
pub fn tag_min_max(entries: &mut [SearchIndexEntry]) {
    let mut groups: HashMap<(String, String), Vec<(usize, String)>> = HashMap::new();

    for (idx, entry) in entries.iter().enumerate() {
        if entry.param_type != SearchParamType::String {
            continue;
        }
        // A string parameter carrying a non-string value is left untagged
        // rather than coerced through some textual rendering.
        let Some(text) = entry.value.as_string() else {
            continue;
        };
        groups
            .entry((entry.param_name.clone(), entry.param_url.clone()))
            .or_default()
            .push((idx, text.to_uppercase()));
    }

    tracing::trace!(groups = groups.len(), "tagging string bound groups");

    for members in groups.into_values() {
        // Groups only form from existing entries, so both scans find a value.
        let Some(min) = members.iter().map(|(_, key)| key).min() else {
            continue;
        };
        let Some(max) = members.iter().map(|(_, key)| key).max() else {
            continue;
        };

        for (idx, key) in &members {
            if key == min {
                entries[*idx].is_min = true;
            }
            if key == max {
                entries[*idx].is_max = true;
            }
        }
    }
}
