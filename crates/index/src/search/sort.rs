//! Sort-key encoding.
//!
//! Collapses a low/high pair of search values into the two-field document
//! fragment stored in the index. The fragment carries the keys `"l"` and
//! `"h"`, each a primitive scalar or an explicit null, with one
//! exception: token and composite bounds have no ordering and contribute
//! no key at all. The absent-key/explicit-null distinction is what lets
//! index consumers tell "unsortable" apart from "no bound".

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::values::SearchValue;

/// Document key holding the low sort bound.
pub const LOW_KEY: &str = "l";

/// Document key holding the high sort bound.
pub const HIGH_KEY: &str = "h";

/// A low/high pair of sortable bounds for one parameter on one resource.
///
/// When both sides are present, `low` must order at or below `hi` under
/// the variant's native ordering; the pair is produced from already
/// tagged values, so this is not re-checked here.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SortValue {
    /// The low bound, if any.
    pub low: Option<SearchValue>,

    /// The high bound, if any.
    pub hi: Option<SearchValue>,
}

impl SortValue {
    /// Creates a sort value from its bounds.
    pub fn new(low: Option<SearchValue>, hi: Option<SearchValue>) -> Self {
        Self { low, hi }
    }

    /// Creates a sort value whose low and high bounds are the same value.
    pub fn single(value: SearchValue) -> Self {
        Self {
            low: Some(value.clone()),
            hi: Some(value),
        }
    }
}

/// Encodes a sort value into its two-field document fragment.
///
/// Pure per call: the fragment under construction and the side being
/// encoded live only in this invocation, so concurrent resource-indexing
/// passes need no synchronization.
///
/// Per-variant scalars:
///
/// - date/time ranges encode their **start** instant, for both the low
///   and the high role, as a fixed-format UTC string whose lexical order
///   matches chronological order; the range's end is never consulted, so
///   the high bound of a genuine range understates its true end
/// - numbers and quantities collapse to their low bound, falling back to
///   the high bound (units never participate)
/// - strings and references are uppercased; URIs are case-sensitive and
///   kept verbatim
/// - token and composite bounds emit no key for their side
pub fn sort_fragment(value: &SortValue) -> Map<String, Value> {
    let mut fragment = Map::new();
    encode_bound(&mut fragment, LOW_KEY, value.low.as_ref());
    encode_bound(&mut fragment, HIGH_KEY, value.hi.as_ref());
    fragment
}

/// Encodes one side of a sort value under the given key.
fn encode_bound(fragment: &mut Map<String, Value>, key: &'static str, bound: Option<&SearchValue>) {
    let Some(value) = bound else {
        fragment.insert(key.to_string(), Value::Null);
        return;
    };

    match value {
        SearchValue::DateTime { start, .. } => {
            fragment.insert(key.to_string(), Value::String(format_instant(start)));
        }
        SearchValue::Number { low, high }
        | SearchValue::Quantity { low, high, .. } => {
            fragment.insert(key.to_string(), number_scalar((*low).or(*high)));
        }
        SearchValue::Reference { reference, .. } => {
            fragment.insert(key.to_string(), Value::String(reference.to_uppercase()));
        }
        SearchValue::String(text) => {
            fragment.insert(key.to_string(), Value::String(text.to_uppercase()));
        }
        SearchValue::Uri(uri) => {
            fragment.insert(key.to_string(), Value::String(uri.clone()));
        }
        SearchValue::Token { .. } | SearchValue::Composite(_) => {
            tracing::debug!(
                key,
                value_type = %value.param_type(),
                "bound type has no ordering; key omitted"
            );
        }
    }
}

/// Converts an optional number to its JSON scalar.
fn number_scalar(value: Option<f64>) -> Value {
    // Non-finite numbers have no JSON representation.
    value
        .and_then(serde_json::Number::from_f64)
        .map(Value::Number)
        .unwrap_or(Value::Null)
}

/// Formats an instant in the fixed UTC layout used for sort keys.
///
/// Always seven fractional digits and a `Z` suffix, so encoded values of
/// equal length compare lexically the way their instants compare
/// chronologically, and the string re-parses to the same instant.
fn format_instant(instant: &DateTime<Utc>) -> String {
    format!(
        "{}.{:07}Z",
        instant.format("%Y-%m-%dT%H:%M:%S"),
        instant.timestamp_subsec_nanos() / 100
    )
}

/// Assembles the per-parameter sort sub-document embedded in a stored
/// resource document.
///
/// Each resolved `(parameter name, sort value)` pair becomes one fragment
/// keyed by the parameter name. Later pairs with the same name overwrite
/// earlier ones.
pub fn build_sort_document<I, S>(resolved: I) -> Map<String, Value>
where
    I: IntoIterator<Item = (S, SortValue)>,
    S: Into<String>,
{
    let mut document = Map::new();
    for (name, value) in resolved {
        document.insert(name.into(), Value::Object(sort_fragment(&value)));
    }
    document
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Timelike};

    #[test]
    fn test_empty_sort_value_yields_explicit_nulls() {
        let fragment = sort_fragment(&SortValue::default());

        assert_eq!(fragment.len(), 2);
        assert_eq!(fragment[LOW_KEY], Value::Null);
        assert_eq!(fragment[HIGH_KEY], Value::Null);
    }

    #[test]
    fn test_datetime_encodes_start_instant() {
        let start = Utc.with_ymd_and_hms(2023, 5, 1, 0, 0, 0).unwrap();
        let end = Utc.with_ymd_and_hms(2023, 5, 31, 0, 0, 0).unwrap();
        let fragment = sort_fragment(&SortValue::new(
            Some(SearchValue::datetime(start, end)),
            None,
        ));

        assert_eq!(fragment[LOW_KEY], "2023-05-01T00:00:00.0000000Z");
        assert_eq!(fragment[HIGH_KEY], Value::Null);
    }

    #[test]
    fn test_datetime_high_role_also_anchors_on_start() {
        let start = Utc.with_ymd_and_hms(2023, 5, 1, 0, 0, 0).unwrap();
        let end = Utc.with_ymd_and_hms(2023, 5, 31, 0, 0, 0).unwrap();
        let fragment = sort_fragment(&SortValue::new(
            None,
            Some(SearchValue::datetime(start, end)),
        ));

        assert_eq!(fragment[HIGH_KEY], "2023-05-01T00:00:00.0000000Z");
    }

    #[test]
    fn test_instant_round_trips() {
        let at = Utc
            .with_ymd_and_hms(2023, 5, 1, 12, 30, 45)
            .unwrap()
            .with_nanosecond(123_456_700)
            .unwrap();
        let fragment = sort_fragment(&SortValue::new(Some(SearchValue::instant(at)), None));

        let Value::String(encoded) = &fragment[LOW_KEY] else {
            panic!("expected string scalar");
        };
        assert_eq!(encoded, "2023-05-01T12:30:45.1234567Z");

        let parsed = DateTime::parse_from_rfc3339(encoded).unwrap();
        assert_eq!(parsed.with_timezone(&Utc), at);
    }

    #[test]
    fn test_number_prefers_low_bound() {
        let fragment = sort_fragment(&SortValue::new(
            Some(SearchValue::number(Some(25.0), None)),
            Some(SearchValue::number(None, Some(30.0))),
        ));

        assert_eq!(fragment[LOW_KEY], 25.0);
        assert_eq!(fragment[HIGH_KEY], 30.0);
    }

    #[test]
    fn test_number_with_both_bounds_takes_low() {
        let fragment = sort_fragment(&SortValue::new(
            Some(SearchValue::number(Some(25.0), Some(30.0))),
            None,
        ));

        assert_eq!(fragment[LOW_KEY], 25.0);
    }

    #[test]
    fn test_number_with_no_bounds_is_explicit_null() {
        let fragment = sort_fragment(&SortValue::new(Some(SearchValue::number(None, None)), None));

        assert!(fragment.contains_key(LOW_KEY));
        assert_eq!(fragment[LOW_KEY], Value::Null);
    }

    #[test]
    fn test_quantity_follows_number_rule_without_unit() {
        let fragment = sort_fragment(&SortValue::new(
            Some(SearchValue::quantity(
                Some(120.5),
                None,
                Some("http://unitsofmeasure.org".to_string()),
                Some("mm[Hg]".to_string()),
            )),
            None,
        ));

        assert_eq!(fragment[LOW_KEY], 120.5);
    }

    #[test]
    fn test_string_uppercased_and_idempotent() {
        let fragment = sort_fragment(&SortValue::new(Some(SearchValue::string("alpha")), None));
        assert_eq!(fragment[LOW_KEY], "ALPHA");

        let again = sort_fragment(&SortValue::new(Some(SearchValue::string("ALPHA")), None));
        assert_eq!(again[LOW_KEY], "ALPHA");
    }

    #[test]
    fn test_reference_uppercased() {
        let fragment = sort_fragment(&SortValue::new(
            Some(SearchValue::reference("Patient/abc")),
            None,
        ));

        assert_eq!(fragment[LOW_KEY], "PATIENT/ABC");
    }

    #[test]
    fn test_uri_kept_verbatim() {
        let fragment = sort_fragment(&SortValue::new(
            Some(SearchValue::uri("http://Example.org/Fhir")),
            None,
        ));

        assert_eq!(fragment[LOW_KEY], "http://Example.org/Fhir");
    }

    #[test]
    fn test_token_side_omits_key() {
        let fragment = sort_fragment(&SortValue::new(
            Some(SearchValue::token(None, "final")),
            None,
        ));

        assert!(!fragment.contains_key(LOW_KEY));
        // The absent high bound is still an explicit null.
        assert_eq!(fragment[HIGH_KEY], Value::Null);
    }

    #[test]
    fn test_composite_side_omits_key() {
        let fragment = sort_fragment(&SortValue::new(
            None,
            Some(SearchValue::composite(vec![SearchValue::string("a")])),
        ));

        assert_eq!(fragment[LOW_KEY], Value::Null);
        assert!(!fragment.contains_key(HIGH_KEY));
    }

    #[test]
    fn test_absent_key_survives_serde_round_trip() {
        let fragment = sort_fragment(&SortValue::new(
            Some(SearchValue::token(None, "final")),
            None,
        ));

        let text = serde_json::to_string(&fragment).unwrap();
        let parsed: Map<String, Value> = serde_json::from_str(&text).unwrap();

        assert!(!parsed.contains_key(LOW_KEY));
        assert_eq!(parsed[HIGH_KEY], Value::Null);
    }

    #[test]
    fn test_single_uses_value_for_both_roles() {
        let fragment = sort_fragment(&SortValue::single(SearchValue::string("smith")));

        assert_eq!(fragment[LOW_KEY], "SMITH");
        assert_eq!(fragment[HIGH_KEY], "SMITH");
    }

    #[test]
    fn test_build_sort_document_keys_by_parameter() {
        let document = build_sort_document(vec![
            ("family", SortValue::single(SearchValue::string("smith"))),
            (
                "birthdate",
                SortValue::new(
                    Some(SearchValue::instant(
                        Utc.with_ymd_and_hms(1980, 3, 2, 0, 0, 0).unwrap(),
                    )),
                    None,
                ),
            ),
        ]);

        assert_eq!(document.len(), 2);
        assert_eq!(document["family"]["l"], "SMITH");
        assert_eq!(document["birthdate"]["l"], "1980-03-02T00:00:00.0000000Z");
        assert_eq!(document["birthdate"]["h"], Value::Null);
    }
}
