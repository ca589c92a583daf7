//! # shipdoc-core — Foundational Types for the Reconciliation Engine
//!
//! This crate is the bedrock of the shipping-document stack. It defines the
//! type-system primitives every other crate builds on: extracted field
//! values and field maps, the document-type taxonomy, scalar normalization,
//! and domain-specific newtypes. It depends on nothing internal.
//!
//! ## Key Design Principles
//!
//! 1. **Absence is data.** A field the extractor never found is `Null`,
//!    an empty string, or an empty list — all three normalize to the same
//!    `Absent` sentinel and are never an error.
//!
//! 2. **Unparseable is never equal.** A date or weight that cannot be
//!    parsed normalizes to `Invalid`, which compares unequal to everything
//!    including another `Invalid`. A misread date must never spuriously
//!    match.
//!
//! 3. **Two document taxonomies.** [`DocumentType`] covers all six shipping
//!    documents; [`DependentType`] covers the five that are validated
//!    against the commercial invoice. Passing the root document where a
//!    dependent is expected is a compile error, not a runtime defect.
//!
//! 4. **Deterministic field maps.** [`FieldMap`] wraps a `BTreeMap`, so
//!    identical inputs always serialize to identical report bytes.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `shipdoc-*` crates (this is the leaf of the DAG).
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.
//! - All public types derive `Debug`, `Clone`, and implement `Serialize`/`Deserialize`.

pub mod doctype;
pub mod error;
pub mod field;
pub mod identity;
pub mod normalize;

// Re-export primary types for ergonomic imports.
pub use doctype::{DependentType, DocumentType, DEPENDENT_TYPE_COUNT, DOCUMENT_TYPE_COUNT};
pub use error::ShipdocError;
pub use field::{FieldMap, FieldValue};
pub use identity::DocumentId;
pub use normalize::{normalize, NormalizedValue, ValueKind};
