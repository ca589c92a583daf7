//! # Field Comparator
//!
//! Compares one (expected, actual) pair of raw field values and produces a
//! structured per-field result. The expected side always comes from the
//! root document, the actual side from the dependent — except for
//! intra-document domain checks, where the expected side is the `"N/A"`
//! sentinel.
//!
//! ## Invariants
//!
//! - Pure and total: never panics, never errors. Unparseable input is a
//!   reported mismatch, not an exception.
//! - `status == Match` iff both values are absent, or their normalized
//!   forms are equal. A value that normalizes to `Invalid` can never
//!   produce a match.
//! - `message` is present iff `status == Mismatch`, and embeds the raw
//!   (not normalized) values so a human can see what the documents
//!   actually say.

use serde::{Deserialize, Serialize};
use shipdoc_core::{normalize, FieldValue, ValueKind};

/// Outcome of one field comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckStatus {
    /// The values agree (or are both absent).
    Match,
    /// The values disagree, or one is missing, or one is unparseable.
    Mismatch,
}

/// The structured result of comparing one field across two documents.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldCheck {
    /// Display name of the compared field.
    pub field_name: String,
    /// Raw value from the root document (or `"N/A"` for domain checks).
    pub expected: FieldValue,
    /// Raw value from the dependent document.
    pub actual: FieldValue,
    /// Match or mismatch.
    pub status: CheckStatus,
    /// Human-readable explanation, present exactly when `status` is
    /// `Mismatch`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl FieldCheck {
    /// Construct a matching check.
    pub fn matched(field_name: &str, expected: FieldValue, actual: FieldValue) -> Self {
        Self {
            field_name: field_name.to_string(),
            expected,
            actual,
            status: CheckStatus::Match,
            message: None,
        }
    }

    /// Construct a mismatching check with its explanation.
    pub fn mismatched(
        field_name: &str,
        expected: FieldValue,
        actual: FieldValue,
        message: impl Into<String>,
    ) -> Self {
        Self {
            field_name: field_name.to_string(),
            expected,
            actual,
            status: CheckStatus::Mismatch,
            message: Some(message.into()),
        }
    }

    /// Whether this check is a mismatch.
    pub fn is_mismatch(&self) -> bool {
        self.status == CheckStatus::Mismatch
    }
}

/// Compare one (expected, actual) pair under the given kind.
///
/// Both absent is a match (nothing to compare); exactly one absent is a
/// mismatch; otherwise both sides are normalized and compared
/// canonically. Normalization failure on either side forces a mismatch.
pub fn compare_field(
    expected: Option<&FieldValue>,
    actual: Option<&FieldValue>,
    field_name: &str,
    kind: ValueKind,
) -> FieldCheck {
    let expected_raw = expected.cloned().unwrap_or(FieldValue::Null);
    let actual_raw = actual.cloned().unwrap_or(FieldValue::Null);

    let expected_absent = expected.map_or(true, FieldValue::is_absent);
    let actual_absent = actual.map_or(true, FieldValue::is_absent);

    if expected_absent && actual_absent {
        return FieldCheck::matched(field_name, expected_raw, actual_raw);
    }
    if expected_absent != actual_absent {
        return FieldCheck::mismatched(
            field_name,
            expected_raw,
            actual_raw,
            format!("{field_name}: Missing in one document"),
        );
    }

    let expected_norm = normalize(expected, kind);
    let actual_norm = normalize(actual, kind);
    if expected_norm.matches(&actual_norm) {
        FieldCheck::matched(field_name, expected_raw, actual_raw)
    } else {
        let message = format!("{field_name}: \"{expected_raw}\" vs \"{actual_raw}\"");
        FieldCheck::mismatched(field_name, expected_raw, actual_raw, message)
    }
}
