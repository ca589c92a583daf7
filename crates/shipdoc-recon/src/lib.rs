//! # shipdoc-recon — Shipping-Document Reconciliation Engine
//!
//! Decides whether a set of international shipping documents describe the
//! same shipment the same way. The commercial invoice is the root of a
//! star topology: every dependent document (packing list, SCOMET
//! declaration, fumigation certificate, export declaration, airway bill)
//! is validated against the root via a declarative per-type rule set, and
//! the per-document outcomes fold into one overall status.
//!
//! ## Key Design Principles
//!
//! 1. **Pure functions over field maps.** Every operation here is a
//!    synchronous transformation of in-memory data: no I/O, no shared
//!    mutable state, no clock. Re-running on identical inputs produces
//!    byte-identical reports.
//!
//! 2. **One declarative registry, one validator.** Per-type behavior lives
//!    in [`rules::RuleSet`] tables; the validation loop itself is written
//!    once. Adding a document type means adding a table, not a function.
//!
//! 3. **Outcomes are data.** An absent field, an unparseable date, an
//!    entire document the extractor failed to produce — all of these are
//!    report states, never panics or `Err`s. The presentation layer never
//!    needs a generic error page for a business-rule scenario.
//!
//! ## Crate Policy
//!
//! - Depends only on `shipdoc-core` internally.
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod compare;
pub mod completeness;
pub mod messages;
pub mod reconcile;
pub mod rules;
pub mod validate;

// Re-export the engine's function surface for ergonomic imports.
pub use compare::{compare_field, CheckStatus, FieldCheck};
pub use completeness::{
    score_completeness, score_completeness_with_policy, CompletenessPolicy, CompletenessReport,
    RequiredField,
};
pub use messages::merge_messages;
pub use reconcile::{
    reconcile, DependentDocument, DocumentPayload, OverallStatus, ReconciliationResult,
};
pub use rules::{FieldMapping, RuleSet, SpecialRule};
pub use validate::{validate_document, DocumentValidationReport};
