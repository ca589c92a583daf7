//! # Value Normalization — Canonical Forms for Comparison
//!
//! Canonicalizes one raw extracted value into a comparable form. Shipping
//! documents mix regional conventions: the same date appears as
//! `05.03.2024` on a German-issued certificate and `2024-03-05` on the
//! invoice; the same weight appears as `1,250 kg` and `1250`. Comparison
//! must happen over canonical forms, never raw text.
//!
//! ## Invariant
//!
//! A value that cannot be parsed for its declared kind normalizes to
//! [`NormalizedValue::Invalid`], which matches nothing — not even another
//! `Invalid`. Silent misparses (e.g., a swapped day/month) are a
//! correctness risk the engine must not paper over: an unparseable date
//! must never spuriously match.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::ShipdocError;
use crate::field::FieldValue;

/// Two-digit years are expanded to `20YY`; anything outside this window
/// is not a plausible shipping-document date.
const YEAR_MIN: i32 = 2000;
const YEAR_MAX: i32 = 2100;

/// Literal date patterns accepted before the general-parse fallback.
const LITERAL_DATE_FORMATS: &[&str] = &["%d.%m.%Y", "%d-%m-%Y", "%d/%m/%Y", "%Y-%m-%d"];

/// Lenient fallback formats for dates that match no literal pattern.
const FALLBACK_DATE_FORMATS: &[&str] = &[
    "%d %b %Y",
    "%d %B %Y",
    "%b %d, %Y",
    "%B %d, %Y",
    "%Y/%m/%d",
    "%d %m %Y",
];

/// The comparison kind declared for a field by its rule set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueKind {
    /// Free text: trimmed, lowercased, whitespace-collapsed.
    Text,
    /// Calendar date, canonicalized to `YYYY-MM-DD`.
    Date,
    /// Weight with optional trailing unit, canonicalized to a number.
    Weight,
}

impl ValueKind {
    /// Returns the snake_case string identifier for this kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Date => "date",
            Self::Weight => "weight",
        }
    }
}

impl std::fmt::Display for ValueKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ValueKind {
    type Err = ShipdocError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "text" => Ok(Self::Text),
            "date" => Ok(Self::Date),
            "weight" => Ok(Self::Weight),
            other => Err(ShipdocError::UnknownValueKind(other.to_string())),
        }
    }
}

/// The canonical form of one raw value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "canonical")]
pub enum NormalizedValue {
    /// The value was null, empty, or whitespace-only.
    Absent,
    /// The value was present but unparseable for its declared kind.
    Invalid,
    /// Canonical text: trimmed, lowercased, internal whitespace collapsed.
    Text(String),
    /// Canonical date, always `YYYY-MM-DD`.
    Date(String),
    /// Canonical weight in the document's unit, unit suffix stripped.
    Weight(f64),
}

impl NormalizedValue {
    /// Whether two canonical forms describe the same value.
    ///
    /// `Absent` matches `Absent`; `Invalid` matches nothing, itself
    /// included. This is deliberately a method rather than `PartialEq` —
    /// `Invalid != Invalid` would break the equivalence laws callers
    /// expect from `==`.
    pub fn matches(&self, other: &NormalizedValue) -> bool {
        match (self, other) {
            (Self::Absent, Self::Absent) => true,
            (Self::Invalid, _) | (_, Self::Invalid) => false,
            (Self::Text(a), Self::Text(b)) => a == b,
            (Self::Date(a), Self::Date(b)) => a == b,
            (Self::Weight(a), Self::Weight(b)) => a == b,
            _ => false,
        }
    }

    /// Whether this form is the absence sentinel.
    pub fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }

    /// Whether this form is the invalid sentinel.
    pub fn is_invalid(&self) -> bool {
        matches!(self, Self::Invalid)
    }
}

/// Canonicalize one raw field value for its declared kind.
///
/// Pure and total: no input panics or errors. Absence (missing field,
/// null, empty text, empty list) always yields [`NormalizedValue::Absent`]
/// regardless of kind.
pub fn normalize(raw: Option<&FieldValue>, kind: ValueKind) -> NormalizedValue {
    let value = match raw {
        Some(v) if !v.is_absent() => v,
        _ => return NormalizedValue::Absent,
    };

    match kind {
        ValueKind::Text => normalize_text_value(value),
        ValueKind::Date => normalize_date_value(value),
        ValueKind::Weight => normalize_weight_value(value),
    }
}

/// Canonical text form of a string: trim, lowercase, collapse whitespace.
///
/// Exposed so the goods-description containment rule can normalize both
/// sides with the same transform the comparator uses.
pub fn canonical_text(s: &str) -> String {
    s.trim()
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

fn normalize_text_value(value: &FieldValue) -> NormalizedValue {
    // Non-string scalars render through Display so "5" and 5 compare equal.
    NormalizedValue::Text(canonical_text(&value.to_string()))
}

fn normalize_date_value(value: &FieldValue) -> NormalizedValue {
    let FieldValue::Text(s) = value else {
        return NormalizedValue::Invalid;
    };
    match parse_date(s) {
        Some(d) => NormalizedValue::Date(d.format("%Y-%m-%d").to_string()),
        None => NormalizedValue::Invalid,
    }
}

fn normalize_weight_value(value: &FieldValue) -> NormalizedValue {
    match value {
        FieldValue::Number(n) if n.is_finite() => NormalizedValue::Weight(*n),
        FieldValue::Text(s) => match parse_weight(s) {
            Some(w) => NormalizedValue::Weight(w),
            None => NormalizedValue::Invalid,
        },
        _ => NormalizedValue::Invalid,
    }
}

/// Parse a date string: literal regional patterns first, then a short
/// lenient fallback list. `None` means unparseable.
fn parse_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();

    // YY-MM-DD with a two-digit year is assumed to mean 20YY.
    if let Some(expanded) = expand_two_digit_year(s) {
        if let Ok(d) = NaiveDate::parse_from_str(&expanded, "%Y-%m-%d") {
            return in_year_window(d);
        }
    }

    for fmt in LITERAL_DATE_FORMATS {
        if let Ok(d) = NaiveDate::parse_from_str(s, fmt) {
            return in_year_window(d);
        }
    }

    for fmt in FALLBACK_DATE_FORMATS {
        if let Ok(d) = NaiveDate::parse_from_str(s, fmt) {
            return in_year_window(d);
        }
    }

    // Full timestamps occasionally leak out of extractors.
    if let Ok(dt) = chrono::DateTime::parse_from_rfc3339(s) {
        return in_year_window(dt.date_naive());
    }

    None
}

fn in_year_window(d: NaiveDate) -> Option<NaiveDate> {
    use chrono::Datelike;
    if (YEAR_MIN..=YEAR_MAX).contains(&d.year()) {
        Some(d)
    } else {
        None
    }
}

/// Recognize `YY-MM-DD` and expand the year to `20YY`.
fn expand_two_digit_year(s: &str) -> Option<String> {
    let bytes = s.as_bytes();
    if bytes.len() != 8 || bytes[2] != b'-' || bytes[5] != b'-' {
        return None;
    }
    let digits_ok = [0, 1, 3, 4, 6, 7]
        .iter()
        .all(|&i| bytes[i].is_ascii_digit());
    digits_ok.then(|| format!("20{s}"))
}

/// Parse a weight string: strip a trailing unit token (kg, kgs, lbs, mt,
/// ...), strip thousands separators, parse the numeric remainder.
///
/// The unit strip consumes trailing letters, abbreviation dots, and the
/// whitespace between number and unit. A genuine fraction like `10.5`
/// ends in a digit and is untouched.
fn parse_weight(s: &str) -> Option<f64> {
    let stripped = s
        .trim()
        .trim_end_matches(|c: char| c.is_ascii_alphabetic() || c == '.' || c.is_whitespace());
    if stripped.is_empty() {
        return None;
    }
    let numeric: String = stripped.chars().filter(|c| *c != ',').collect();
    numeric.parse::<f64>().ok().filter(|w| w.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(s: &str) -> FieldValue {
        FieldValue::Text(s.to_string())
    }

    // ---- text ----

    #[test]
    fn test_text_trim_lowercase_collapse() {
        let n = normalize(Some(&text("  ACME   Global\tExports ")), ValueKind::Text);
        assert_eq!(n, NormalizedValue::Text("acme global exports".into()));
    }

    #[test]
    fn test_text_case_and_whitespace_match() {
        let a = normalize(Some(&text("ACME Exports")), ValueKind::Text);
        let b = normalize(Some(&text("  acme   exports ")), ValueKind::Text);
        assert!(a.matches(&b));
    }

    #[test]
    fn test_number_and_digit_text_match_as_text() {
        let a = normalize(Some(&FieldValue::Number(5.0)), ValueKind::Text);
        let b = normalize(Some(&text("5")), ValueKind::Text);
        assert!(a.matches(&b));
    }

    // ---- absence ----

    #[test]
    fn test_absent_inputs() {
        assert!(normalize(None, ValueKind::Text).is_absent());
        assert!(normalize(Some(&FieldValue::Null), ValueKind::Date).is_absent());
        assert!(normalize(Some(&text("   ")), ValueKind::Weight).is_absent());
        assert!(normalize(Some(&FieldValue::List(vec![])), ValueKind::Text).is_absent());
    }

    #[test]
    fn test_absent_matches_absent() {
        let a = normalize(None, ValueKind::Date);
        let b = normalize(Some(&text("")), ValueKind::Date);
        assert!(a.matches(&b));
    }

    // ---- dates: literal patterns ----

    #[test]
    fn test_date_literal_patterns_canonicalize() {
        for raw in ["05.03.2024", "05-03-2024", "05/03/2024", "2024-03-05"] {
            let n = normalize(Some(&text(raw)), ValueKind::Date);
            assert_eq!(
                n,
                NormalizedValue::Date("2024-03-05".into()),
                "pattern {raw:?}"
            );
        }
    }

    #[test]
    fn test_date_two_digit_year_is_2000s() {
        let n = normalize(Some(&text("24-03-05")), ValueKind::Date);
        assert_eq!(n, NormalizedValue::Date("2024-03-05".into()));
    }

    #[test]
    fn test_date_cross_format_match() {
        let a = normalize(Some(&text("05.03.2024")), ValueKind::Date);
        let b = normalize(Some(&text("2024-03-05")), ValueKind::Date);
        assert!(a.matches(&b));
    }

    #[test]
    fn test_date_year_window_enforced() {
        assert!(normalize(Some(&text("05.03.1999")), ValueKind::Date).is_invalid());
        assert!(normalize(Some(&text("05.03.2101")), ValueKind::Date).is_invalid());
        assert!(!normalize(Some(&text("05.03.2100")), ValueKind::Date).is_invalid());
    }

    #[test]
    fn test_date_impossible_calendar_day_invalid() {
        assert!(normalize(Some(&text("31.02.2024")), ValueKind::Date).is_invalid());
    }

    // ---- dates: fallback and invalid ----

    #[test]
    fn test_date_fallback_formats() {
        for raw in ["05 Mar 2024", "5 March 2024", "Mar 5, 2024", "March 5, 2024", "2024/03/05"] {
            let n = normalize(Some(&text(raw)), ValueKind::Date);
            assert_eq!(
                n,
                NormalizedValue::Date("2024-03-05".into()),
                "fallback {raw:?}"
            );
        }
    }

    #[test]
    fn test_unparseable_date_is_invalid() {
        let n = normalize(Some(&text("March fifth")), ValueKind::Date);
        assert!(n.is_invalid());
    }

    #[test]
    fn test_invalid_never_matches_even_itself() {
        let a = normalize(Some(&text("March fifth")), ValueKind::Date);
        let b = normalize(Some(&text("March fifth")), ValueKind::Date);
        assert!(!a.matches(&b));
        assert!(!a.matches(&NormalizedValue::Date("2024-03-05".into())));
        assert!(!a.matches(&NormalizedValue::Absent));
    }

    #[test]
    fn test_numeric_value_is_not_a_date() {
        assert!(normalize(Some(&FieldValue::Number(20240305.0)), ValueKind::Date).is_invalid());
    }

    // ---- weights ----

    #[test]
    fn test_weight_unit_suffixes_stripped() {
        for raw in ["1250 kg", "1250KG", "1250 kgs.", "1,250 kg", "1250"] {
            let n = normalize(Some(&text(raw)), ValueKind::Weight);
            assert_eq!(n, NormalizedValue::Weight(1250.0), "weight {raw:?}");
        }
    }

    #[test]
    fn test_weight_fraction_survives_stripping() {
        let n = normalize(Some(&text("10.5 kg")), ValueKind::Weight);
        assert_eq!(n, NormalizedValue::Weight(10.5));
    }

    #[test]
    fn test_weight_from_number() {
        let n = normalize(Some(&FieldValue::Number(42.0)), ValueKind::Weight);
        assert_eq!(n, NormalizedValue::Weight(42.0));
    }

    #[test]
    fn test_weight_non_numeric_invalid() {
        assert!(normalize(Some(&text("heavy")), ValueKind::Weight).is_invalid());
        assert!(normalize(Some(&text("kg")), ValueKind::Weight).is_invalid());
        assert!(normalize(Some(&FieldValue::Bool(true)), ValueKind::Weight).is_invalid());
    }

    // ---- kind parsing ----

    #[test]
    fn test_value_kind_roundtrip() {
        for kind in [ValueKind::Text, ValueKind::Date, ValueKind::Weight] {
            let parsed: ValueKind = kind.as_str().parse().unwrap();
            assert_eq!(kind, parsed);
        }
        assert!("currency".parse::<ValueKind>().is_err());
    }

    // ---- determinism ----

    mod properties {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Normalizing the same raw value twice yields structurally
            /// identical output for every kind.
            #[test]
            fn normalize_is_deterministic(s in ".{0,40}") {
                let v = FieldValue::Text(s);
                for kind in [ValueKind::Text, ValueKind::Date, ValueKind::Weight] {
                    prop_assert_eq!(
                        normalize(Some(&v), kind),
                        normalize(Some(&v), kind)
                    );
                }
            }

            /// Canonical text is a fixed point of canonicalization.
            #[test]
            fn canonical_text_idempotent(s in ".{0,40}") {
                let once = canonical_text(&s);
                prop_assert_eq!(canonical_text(&once), once);
            }
        }
    }
}
