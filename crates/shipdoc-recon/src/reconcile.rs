//! # Reconciliation Orchestrator
//!
//! Runs the Document Validator once per dependent document — each call
//! reads only the root and that one dependent, so the calls are
//! independent and may be parallelized by the host — and folds the
//! per-document outcomes into one overall status.
//!
//! ## Status precedence (first match wins)
//!
//! 1. Zero dependents: `valid` — nothing to check is vacuously fine.
//! 2. Any input unavailable (root missing, or a collaborator failed to
//!    supply a dependent): `error`.
//! 3. Every dependent verified against the invoice: `valid`.
//! 4. Otherwise: `warning`.
//!
//! `warning` rather than `error` for ordinary mismatches keeps a usable
//! "proceed with caution" path: mismatches are common and correctable by
//! re-upload, while `error` is reserved for structural failure.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use shipdoc_core::{DependentType, DocumentId, FieldMap};

use crate::validate::{validate_document, DocumentValidationReport};

/// The folded multi-document outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OverallStatus {
    /// Every dependent agrees with the invoice (or there is nothing to check).
    Valid,
    /// At least one mismatch, no structural failure.
    Warning,
    /// A document could not be supplied at all.
    Error,
}

impl OverallStatus {
    /// Returns the lowercase string identifier for this status.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Valid => "valid",
            Self::Warning => "warning",
            Self::Error => "error",
        }
    }
}

impl std::fmt::Display for OverallStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What the collaborators delivered for one dependent document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "state", content = "value")]
pub enum DocumentPayload {
    /// Extraction succeeded; here is the field map.
    Extracted(FieldMap),
    /// Extraction or storage failed before the engine was invoked.
    Unavailable(String),
}

/// One dependent document handed to the orchestrator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DependentDocument {
    /// Which document this is.
    pub document_type: DependentType,
    /// Store-assigned identity, when known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document_id: Option<DocumentId>,
    /// The extracted field map, or the collaborator failure.
    pub payload: DocumentPayload,
}

impl DependentDocument {
    /// A dependent with an extracted field map.
    pub fn extracted(document_type: DependentType, field_map: FieldMap) -> Self {
        Self { document_type, document_id: None, payload: DocumentPayload::Extracted(field_map) }
    }

    /// A dependent whose collaborator failed.
    pub fn unavailable(document_type: DependentType, reason: impl Into<String>) -> Self {
        Self {
            document_type,
            document_id: None,
            payload: DocumentPayload::Unavailable(reason.into()),
        }
    }

    /// Attach the store-assigned document identity.
    pub fn with_id(mut self, id: DocumentId) -> Self {
        self.document_id = Some(id);
        self
    }
}

/// The orchestrator's output: one report per dependent type plus the
/// folded overall status. This shape is the stable contract a
/// presentation layer renders as a per-field table and an overall badge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReconciliationResult {
    /// Per-document reports, keyed by type (deterministic order).
    pub per_document: BTreeMap<DependentType, DocumentValidationReport>,
    /// The folded status.
    pub overall_status: OverallStatus,
}

/// Reconcile the root commercial invoice against a set of dependents.
///
/// Pure and order-independent: each dependent is validated in isolation,
/// and identical inputs always produce byte-identical results. `root` is
/// `None` when the store could not supply the invoice — that alone forces
/// `error` whenever there is anything to validate. Duplicate dependent
/// types collapse to the last occurrence.
pub fn reconcile(
    root: Option<&FieldMap>,
    dependents: &[DependentDocument],
) -> ReconciliationResult {
    let mut per_document = BTreeMap::new();

    for dependent in dependents {
        let mut report = match (&dependent.payload, root) {
            (DocumentPayload::Unavailable(reason), _) => {
                DocumentValidationReport::document_unavailable(dependent.document_type, reason)
            }
            (DocumentPayload::Extracted(_), None) => {
                DocumentValidationReport::root_unavailable(dependent.document_type)
            }
            (DocumentPayload::Extracted(field_map), Some(root_map)) => {
                validate_document(root_map, field_map, dependent.document_type)
            }
        };
        report.document_id = dependent.document_id;
        per_document.insert(dependent.document_type, report);
    }

    let overall_status = if per_document.is_empty() {
        OverallStatus::Valid
    } else if per_document.values().any(|r| r.unavailable) {
        OverallStatus::Error
    } else if per_document.values().all(|r| r.invoice_match_verified) {
        OverallStatus::Valid
    } else {
        OverallStatus::Warning
    };

    ReconciliationResult { per_document, overall_status }
}
