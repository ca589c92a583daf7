//! # Document Taxonomy — Single Source of Truth
//!
//! Defines the shipping-document taxonomy used across the entire stack:
//! [`DocumentType`] for all six documents, and [`DependentType`] for the
//! five that are reconciled against the commercial invoice.
//!
//! ## Invariant
//!
//! The commercial invoice is the root of a star topology: every dependent
//! document is compared against it, never against another dependent. The
//! two-enum split makes "validate the root against itself" and "look up a
//! rule set for the root" unrepresentable — the rule-set registry is total
//! over [`DependentType`], so there is no unknown-type failure path inside
//! the engine. Unknown names only surface at the string boundary, in
//! `FromStr`.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::ShipdocError;

/// All shipping-document types known to the stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentType {
    /// The root document every other document is checked against.
    CommercialInvoice,
    /// Packing list (boxes, weights, marks and numbers).
    PackingList,
    /// SCOMET export-control declaration.
    ScometDeclaration,
    /// Fumigation certificate.
    FumigationCertificate,
    /// Export value declaration.
    ExportDeclaration,
    /// Airway bill.
    AirwayBill,
}

/// Total number of document types. Used for compile-time assertions.
pub const DOCUMENT_TYPE_COUNT: usize = 6;

/// The five non-invoice document types, validated against the root.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DependentType {
    /// Packing list.
    PackingList,
    /// SCOMET export-control declaration.
    ScometDeclaration,
    /// Fumigation certificate.
    FumigationCertificate,
    /// Export value declaration.
    ExportDeclaration,
    /// Airway bill.
    AirwayBill,
}

/// Total number of dependent document types.
pub const DEPENDENT_TYPE_COUNT: usize = 5;

impl DocumentType {
    /// Returns all six document types in canonical order.
    pub fn all_types() -> &'static [DocumentType] {
        &[
            Self::CommercialInvoice,
            Self::PackingList,
            Self::ScometDeclaration,
            Self::FumigationCertificate,
            Self::ExportDeclaration,
            Self::AirwayBill,
        ]
    }

    /// Returns the snake_case string identifier for this type.
    ///
    /// Matches the serde serialization format and the canonical names the
    /// extraction collaborator tags its output with.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::CommercialInvoice => "commercial_invoice",
            Self::PackingList => "packing_list",
            Self::ScometDeclaration => "scomet_declaration",
            Self::FumigationCertificate => "fumigation_certificate",
            Self::ExportDeclaration => "export_declaration",
            Self::AirwayBill => "airway_bill",
        }
    }
}

impl DependentType {
    /// Returns all five dependent types in canonical order.
    pub fn all_types() -> &'static [DependentType] {
        &[
            Self::PackingList,
            Self::ScometDeclaration,
            Self::FumigationCertificate,
            Self::ExportDeclaration,
            Self::AirwayBill,
        ]
    }

    /// Widen to the full document taxonomy.
    pub fn document_type(&self) -> DocumentType {
        match self {
            Self::PackingList => DocumentType::PackingList,
            Self::ScometDeclaration => DocumentType::ScometDeclaration,
            Self::FumigationCertificate => DocumentType::FumigationCertificate,
            Self::ExportDeclaration => DocumentType::ExportDeclaration,
            Self::AirwayBill => DocumentType::AirwayBill,
        }
    }

    /// Returns the snake_case string identifier for this type.
    pub fn as_str(&self) -> &'static str {
        self.document_type().as_str()
    }
}

impl std::fmt::Display for DocumentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::fmt::Display for DependentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DocumentType {
    type Err = ShipdocError;

    /// Parse a document type from its snake_case string identifier.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "commercial_invoice" => Ok(Self::CommercialInvoice),
            "packing_list" => Ok(Self::PackingList),
            "scomet_declaration" => Ok(Self::ScometDeclaration),
            "fumigation_certificate" => Ok(Self::FumigationCertificate),
            "export_declaration" => Ok(Self::ExportDeclaration),
            "airway_bill" => Ok(Self::AirwayBill),
            other => Err(ShipdocError::UnknownDocumentType(other.to_string())),
        }
    }
}

impl FromStr for DependentType {
    type Err = ShipdocError;

    /// Parse a dependent type; the root document name is rejected here,
    /// since the root has no rule set.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "packing_list" => Ok(Self::PackingList),
            "scomet_declaration" => Ok(Self::ScometDeclaration),
            "fumigation_certificate" => Ok(Self::FumigationCertificate),
            "export_declaration" => Ok(Self::ExportDeclaration),
            "airway_bill" => Ok(Self::AirwayBill),
            other => Err(ShipdocError::UnknownDocumentType(other.to_string())),
        }
    }
}
