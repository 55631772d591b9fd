// ── Comparable field values ──
//
// Sorting runs over values pulled either from a record's fixed schema or
// from its free-form attributes bag, so one value type has to cover both.
// Comparison keeps the loose relational semantics the report data was
// authored against: strings compare lexicographically, everything else
// numerically, and pairs with no common ground compare equal so a stable
// sort leaves their relative order untouched.

use std::cmp::Ordering;

use chrono::{DateTime, Utc};
use serde_json::Value;

/// A sortable value resolved from a record field or attribute.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Null,
    Bool(bool),
    Number(f64),
    Text(String),
    Time(DateTime<Utc>),
}

impl FieldValue {
    /// Convert a raw attribute value. Non-scalar JSON (arrays, objects)
    /// has no meaningful ordering and resolves to `None`.
    pub fn from_json(value: &Value) -> Option<Self> {
        match value {
            Value::Null => Some(Self::Null),
            Value::Bool(b) => Some(Self::Bool(*b)),
            Value::Number(n) => n.as_f64().map(Self::Number),
            Value::String(s) => Some(Self::Text(s.clone())),
            Value::Array(_) | Value::Object(_) => None,
        }
    }

    /// Numeric coercion: null is 0, booleans are 0/1, text parses if it
    /// can, timestamps are epoch milliseconds.
    #[allow(clippy::cast_precision_loss, clippy::as_conversions)]
    fn as_number(&self) -> Option<f64> {
        match self {
            Self::Null => Some(0.0),
            Self::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
            Self::Number(n) => Some(*n),
            Self::Text(s) => s.trim().parse().ok(),
            Self::Time(t) => Some(t.timestamp_millis() as f64),
        }
    }

    /// Relational comparison under the coercion policy above. Incomparable
    /// pairs (and NaN) order as equal rather than failing.
    pub fn coercing_cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Text(a), Self::Text(b)) => a.cmp(b),
            (Self::Time(a), Self::Time(b)) => a.cmp(b),
            _ => match (self.as_number(), other.as_number()) {
                (Some(a), Some(b)) => a.partial_cmp(&b).unwrap_or(Ordering::Equal),
                _ => Ordering::Equal,
            },
        }
    }
}

impl From<i64> for FieldValue {
    #[allow(clippy::cast_precision_loss, clippy::as_conversions)]
    fn from(value: i64) -> Self {
        Self::Number(value as f64)
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<DateTime<Utc>> for FieldValue {
    fn from(value: DateTime<Utc>) -> Self {
        Self::Time(value)
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}
