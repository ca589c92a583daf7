//! # Document Validator
//!
//! Runs one dependent document against the root commercial invoice: every
//! field mapping in the type's rule set, then every special rule, folded
//! into a per-document validation report.
//!
//! ## Invariants
//!
//! - A mapping whose dependent field is entirely absent is skipped — a
//!   field the extractor never found is the Completeness Scorer's concern,
//!   not a mismatch here.
//! - `invoice_match_verified` is true iff the checks contain zero
//!   mismatches.
//! - `warnings` is the order-preserving deduplicated list of mismatch
//!   messages, or the single all-match sentinel.
//! - A missing root document is itself a reportable state (zero checks,
//!   `unavailable`), never an error: "cannot validate" must reach the
//!   presentation layer as structured data.

use serde::{Deserialize, Serialize};
use shipdoc_core::{DependentType, DocumentId, FieldMap};

use crate::compare::{compare_field, FieldCheck};
use crate::messages::merge_messages;
use crate::rules::RuleSet;

/// Warning emitted when every check matched.
pub const ALL_FIELDS_MATCH: &str = "All fields match the commercial invoice";

/// Warning emitted when the root document could not be supplied.
pub const ROOT_UNAVAILABLE: &str = "root document unavailable";

/// The outcome of validating one dependent document against the root.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentValidationReport {
    /// Which dependent document this report covers.
    pub document_type: DependentType,
    /// Store-assigned identity of the dependent document, when known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document_id: Option<DocumentId>,
    /// Every executed field check, matches included.
    pub checks: Vec<FieldCheck>,
    /// True iff `checks` contains zero mismatches.
    pub invoice_match_verified: bool,
    /// True when validation could not run at all (root missing, or the
    /// collaborator failed to supply this document). Distinguishes
    /// structural failure from ordinary mismatch.
    #[serde(default)]
    pub unavailable: bool,
    /// Deduplicated mismatch messages, or the all-match sentinel.
    pub warnings: Vec<String>,
}

impl DocumentValidationReport {
    /// Report for a dependent that could not be validated because the
    /// root document is missing.
    pub fn root_unavailable(document_type: DependentType) -> Self {
        Self {
            document_type,
            document_id: None,
            checks: Vec::new(),
            invoice_match_verified: false,
            unavailable: true,
            warnings: vec![ROOT_UNAVAILABLE.to_string()],
        }
    }

    /// Report for a dependent whose extraction or storage collaborator
    /// failed before the engine was invoked.
    pub fn document_unavailable(document_type: DependentType, reason: &str) -> Self {
        Self {
            document_type,
            document_id: None,
            checks: Vec::new(),
            invoice_match_verified: false,
            unavailable: true,
            warnings: vec![format!("document unavailable: {reason}")],
        }
    }

    /// Number of mismatching checks.
    pub fn mismatch_count(&self) -> usize {
        self.checks.iter().filter(|c| c.is_mismatch()).count()
    }
}

/// Validate one dependent document against the root commercial invoice.
///
/// Pure: identical inputs always produce an identical report.
pub fn validate_document(
    root: &FieldMap,
    dependent: &FieldMap,
    document_type: DependentType,
) -> DocumentValidationReport {
    let rules = RuleSet::for_dependent(document_type);
    let mut checks = Vec::new();

    for mapping in &rules.mappings {
        // Absent on the dependent side: not extracted, not a mismatch.
        if dependent.field_absent(mapping.dependent_field) {
            continue;
        }
        // Optional mappings are skipped when the root lacks the field.
        if !mapping.required && root.field_absent(mapping.root_field) {
            continue;
        }
        checks.push(compare_field(
            root.get(mapping.root_field),
            dependent.get(mapping.dependent_field),
            mapping.display_name,
            mapping.kind,
        ));
    }

    for rule in rules.special_rules {
        if let Some(check) = rule.evaluate(root, dependent) {
            checks.push(check);
        }
    }

    let mismatch_messages: Vec<String> = checks
        .iter()
        .filter_map(|c| c.message.clone())
        .collect();
    let invoice_match_verified = mismatch_messages.is_empty();
    let warnings = if invoice_match_verified {
        vec![ALL_FIELDS_MATCH.to_string()]
    } else {
        merge_messages(&[], &mismatch_messages)
    };

    DocumentValidationReport {
        document_type,
        document_id: None,
        checks,
        invoice_match_verified,
        unavailable: false,
        warnings,
    }
}
