//! # Field Values and Field Maps
//!
//! The data extracted from one shipping document: an ordered mapping from
//! canonical field name to a scalar (or list) value. Field maps are produced
//! by the extraction collaborator and are treated as untrusted — nothing
//! here assumes a required field is present.
//!
//! ## Invariant
//!
//! `null`, an empty or whitespace-only string, and an empty list are all
//! equivalent "absent". Every consumer of extracted data goes through
//! [`FieldValue::is_absent`] rather than re-deriving its own notion.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A single extracted field value.
///
/// The extraction collaborator emits plain JSON; this enum mirrors the
/// scalar subset plus lists (used for e.g. box details and invoice line
/// items). Deserialization is untagged, so any well-formed JSON document
/// of scalars and arrays loads directly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    /// Explicit null from the extractor.
    Null,
    /// Boolean flag.
    Bool(bool),
    /// Numeric value (counts, amounts, weights).
    Number(f64),
    /// Free text.
    Text(String),
    /// List value (line items, box details).
    List(Vec<FieldValue>),
}

impl FieldValue {
    /// Whether this value counts as absent.
    ///
    /// Null, empty/whitespace-only text, and empty lists are all absent.
    pub fn is_absent(&self) -> bool {
        match self {
            Self::Null => true,
            Self::Text(s) => s.trim().is_empty(),
            Self::List(items) => items.is_empty(),
            Self::Bool(_) | Self::Number(_) => false,
        }
    }

    /// Numeric view of this value, accepting numeric text.
    ///
    /// Used by count comparisons (box count vs item count) where the
    /// extractor may emit either a JSON number or a digit string.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            Self::Text(s) => s.trim().parse::<f64>().ok(),
            _ => None,
        }
    }

    /// Text view of this value, if it is text.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl std::fmt::Display for FieldValue {
    /// Renders the raw value for human-readable mismatch messages.
    ///
    /// Text renders bare (no quotes); integral numbers render without a
    /// trailing `.0` so `"Box count (3)"` reads naturally.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Null => Ok(()),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Number(n) => {
                if n.fract() == 0.0 && n.abs() < 1e15 {
                    write!(f, "{}", *n as i64)
                } else {
                    write!(f, "{n}")
                }
            }
            Self::Text(s) => f.write_str(s),
            Self::List(items) => {
                let rendered: Vec<String> = items.iter().map(|v| v.to_string()).collect();
                write!(f, "[{}]", rendered.join(", "))
            }
        }
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<f64> for FieldValue {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

/// One document's extracted data: canonical field name → value.
///
/// Backed by a `BTreeMap` so iteration order — and therefore every report
/// derived from it — is deterministic. The engine never mutates a field
/// map it receives; the mutators here exist for callers assembling maps
/// (extraction adapters, tests, the CLI).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldMap(BTreeMap<String, FieldValue>);

impl FieldMap {
    /// Create an empty field map.
    pub fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Look up a field by canonical name.
    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.0.get(name)
    }

    /// Whether the named field is missing or absent-valued.
    pub fn field_absent(&self, name: &str) -> bool {
        self.get(name).map_or(true, FieldValue::is_absent)
    }

    /// Insert a field value.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<FieldValue>) {
        self.0.insert(name.into(), value.into());
    }

    /// Number of fields in the map.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the map holds no fields at all.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over (name, value) pairs in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &FieldValue)> {
        self.0.iter()
    }
}

impl FromIterator<(String, FieldValue)> for FieldMap {
    fn from_iter<I: IntoIterator<Item = (String, FieldValue)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
