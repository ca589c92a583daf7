//! # Error Types — Structured Error Hierarchy
//!
//! Defines the error types used throughout the shipping-document stack.
//! All errors use `thiserror` for derive-based `Display` and `Error`
//! implementations.
//!
//! ## Design
//!
//! Business-data problems — an absent field, an unparseable date, a whole
//! document the extractor never produced — are never errors; they are
//! reported as data inside validation reports. The variants here cover
//! genuine defects (an unknown document-type name from an external caller)
//! and the boundary concerns of loading field maps from disk.

use thiserror::Error;

/// Top-level error type for the shipping-document stack.
#[derive(Error, Debug)]
pub enum ShipdocError {
    /// A document-type name that is not part of the taxonomy.
    #[error("unknown document type: {0:?}")]
    UnknownDocumentType(String),

    /// A value-kind name that is not part of the taxonomy.
    #[error("unknown value kind: {0:?}")]
    UnknownValueKind(String),

    /// A field map could not be deserialized.
    #[error("field map parse error: {0}")]
    FieldMapParse(#[from] serde_json::Error),

    /// IO error reading a field map or report.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
