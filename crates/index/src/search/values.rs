//! Typed search values.
//!
//! A closed value model for everything the indexing pipeline extracts from
//! a resource. Every variant owns its scalar payload; consumers dispatch
//! with exhaustive matches, so adding a variant is a compile-time event
//! for the tagger and the encoder alike.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::SearchParamType;

/// A value extracted from a resource for search indexing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SearchValue {
    /// String value for string parameters.
    String(String),

    /// Numeric value with implicit range bounds.
    ///
    /// FHIR numbers carry a precision-derived range; either bound may be
    /// open.
    Number {
        /// Lower bound of the implicit range.
        low: Option<f64>,
        /// Upper bound of the implicit range.
        high: Option<f64>,
    },

    /// Quantity value: numeric range bounds plus unit metadata.
    Quantity {
        /// Lower bound of the implicit range.
        low: Option<f64>,
        /// Upper bound of the implicit range.
        high: Option<f64>,
        /// Unit system URI (e.g., "http://unitsofmeasure.org").
        system: Option<String>,
        /// Unit code (e.g., "kg").
        code: Option<String>,
    },

    /// Date/time range with explicit start and end instants.
    ///
    /// Point values are represented as a range whose start and end
    /// coincide.
    DateTime {
        /// Start of the range.
        start: DateTime<Utc>,
        /// End of the range.
        end: DateTime<Utc>,
    },

    /// Reference to another resource.
    Reference {
        /// Reference string (e.g., "Patient/123").
        reference: String,
        /// Resource type if known.
        resource_type: Option<String>,
        /// Resource ID if extractable.
        resource_id: Option<String>,
    },

    /// Token value (code with optional system). Tokens define equality,
    /// not ordering.
    Token {
        /// Code system URI (e.g., "http://loinc.org").
        system: Option<String>,
        /// Code value.
        code: String,
        /// Display text, when the source coding carried one.
        display: Option<String>,
    },

    /// URI value.
    Uri(String),

    /// Composite value combining sub-component values. No single total
    /// order exists across components.
    Composite(Vec<SearchValue>),
}

impl SearchValue {
    /// Creates a string search value.
    pub fn string(s: impl Into<String>) -> Self {
        SearchValue::String(s.into())
    }

    /// Creates a number search value from its range bounds.
    pub fn number(low: Option<f64>, high: Option<f64>) -> Self {
        SearchValue::Number { low, high }
    }

    /// Creates a quantity search value.
    pub fn quantity(
        low: Option<f64>,
        high: Option<f64>,
        system: Option<String>,
        code: Option<String>,
    ) -> Self {
        SearchValue::Quantity {
            low,
            high,
            system,
            code,
        }
    }

    /// Creates a date/time search value from its range bounds.
    pub fn datetime(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        SearchValue::DateTime { start, end }
    }

    /// Creates a date/time search value for a single instant.
    pub fn instant(at: DateTime<Utc>) -> Self {
        SearchValue::DateTime { start: at, end: at }
    }

    /// Creates a reference search value, splitting out the target type
    /// and ID where the reference string allows it.
    pub fn reference(reference: impl Into<String>) -> Self {
        let reference = reference.into();
        let (resource_type, resource_id) = parse_reference(&reference);

        SearchValue::Reference {
            reference,
            resource_type,
            resource_id,
        }
    }

    /// Creates a token search value with system and code.
    pub fn token(system: Option<String>, code: impl Into<String>) -> Self {
        SearchValue::Token {
            system,
            code: code.into(),
            display: None,
        }
    }

    /// Creates a token search value carrying display text.
    pub fn token_with_display(
        system: Option<String>,
        code: impl Into<String>,
        display: Option<String>,
    ) -> Self {
        SearchValue::Token {
            system,
            code: code.into(),
            display,
        }
    }

    /// Creates a URI search value.
    pub fn uri(uri: impl Into<String>) -> Self {
        SearchValue::Uri(uri.into())
    }

    /// Creates a composite search value from its components.
    pub fn composite(components: Vec<SearchValue>) -> Self {
        SearchValue::Composite(components)
    }

    /// Returns the string value if this is a String variant.
    pub fn as_string(&self) -> Option<&str> {
        match self {
            SearchValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the parameter type this value is appropriate for.
    pub fn param_type(&self) -> SearchParamType {
        match self {
            SearchValue::String(_) => SearchParamType::String,
            SearchValue::Number { .. } => SearchParamType::Number,
            SearchValue::Quantity { .. } => SearchParamType::Quantity,
            SearchValue::DateTime { .. } => SearchParamType::Date,
            SearchValue::Reference { .. } => SearchParamType::Reference,
            SearchValue::Token { .. } => SearchParamType::Token,
            SearchValue::Uri(_) => SearchParamType::Uri,
            SearchValue::Composite(_) => SearchParamType::Composite,
        }
    }
}

/// Parses a reference string into (resource_type, resource_id).
fn parse_reference(reference: &str) -> (Option<String>, Option<String>) {
    // Absolute URL references (e.g., "http://example.com/fhir/Patient/123")
    if reference.starts_with("http://") || reference.starts_with("https://") {
        let parts: Vec<&str> = reference.rsplitn(3, '/').collect();
        if parts.len() >= 2 {
            return (Some(parts[1].to_string()), Some(parts[0].to_string()));
        }
    }

    // Relative references (e.g., "Patient/123")
    let parts: Vec<&str> = reference.split('/').collect();
    if parts.len() == 2 {
        return (Some(parts[0].to_string()), Some(parts[1].to_string()));
    }

    (None, None)
}
