//! # Completeness Scorer
//!
//! Evaluates one document's own extracted fields against the required-field
//! checklist for its type, independent of any other document. Completeness
//! is the extraction-quality signal; cross-document agreement is the
//! validator's job.
//!
//! ## Invariants
//!
//! - `completeness_percent = round(100 * present / total)` over all
//!   required fields, critical and non-critical alike.
//! - A document missing more than `max_critical_missing` critical fields
//!   is invalid outright, regardless of percentage. Defaults to one: a
//!   document missing two of its defining identifiers is rejected.
//! - The identity fields (document number, document date) gate validity
//!   unconditionally — their absence alone invalidates the document.

use serde::{Deserialize, Serialize};
use shipdoc_core::{DocumentType, FieldMap};

/// One entry in a document type's required-field checklist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RequiredField {
    /// Canonical field name.
    pub name: &'static str,
    /// Whether absence of this field counts toward the critical gate.
    pub critical: bool,
}

const fn req(name: &'static str) -> RequiredField {
    RequiredField { name, critical: false }
}

const fn crit(name: &'static str) -> RequiredField {
    RequiredField { name, critical: true }
}

/// How many critical fields may be missing before the document is
/// rejected outright. A business rule, not a derived statistic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletenessPolicy {
    /// Maximum tolerated number of missing critical fields.
    pub max_critical_missing: usize,
}

impl Default for CompletenessPolicy {
    /// "More than one critical field missing" hard-fails.
    fn default() -> Self {
        Self { max_critical_missing: 1 }
    }
}

/// The completeness outcome for one document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletenessReport {
    /// Rounded percentage of required fields that were extracted.
    pub completeness_percent: u8,
    /// Required fields that are absent, in checklist order.
    pub missing_fields: Vec<String>,
    /// How many of the absent fields are critical.
    pub critical_fields_missing: usize,
    /// Whether the document passes the critical gate and identity check.
    pub is_valid: bool,
}

const COMMERCIAL_INVOICE_FIELDS: &[RequiredField] = &[
    crit("invoice_number"),
    crit("invoice_date"),
    crit("exporter_name"),
    crit("consignee_name"),
    req("exporter_address"),
    req("consignee_address"),
    req("port_of_loading"),
    req("port_of_discharge"),
    req("final_destination"),
    req("country_of_origin"),
    req("hsn_code"),
    req("total_amount"),
    req("currency"),
    req("item_count"),
    req("line_item_descriptions"),
];

const PACKING_LIST_FIELDS: &[RequiredField] = &[
    crit("packing_list_number"),
    crit("packing_list_date"),
    crit("exporter_name"),
    crit("consignee_name"),
    crit("box_details"),
    req("total_boxes"),
    req("gross_weight"),
    req("net_weight"),
    req("goods_description"),
    req("marks_and_numbers"),
    req("port_of_loading"),
    req("port_of_discharge"),
    req("invoice_number"),
    req("invoice_date"),
];

const SCOMET_DECLARATION_FIELDS: &[RequiredField] = &[
    crit("scomet_declaration_number"),
    crit("declaration_date"),
    crit("consignee_name"),
    req("destination_country"),
    req("hsn_code"),
    req("end_use_statement"),
    req("invoice_number"),
];

const FUMIGATION_CERTIFICATE_FIELDS: &[RequiredField] = &[
    crit("certificate_number"),
    crit("certificate_date"),
    crit("shipping_mark"),
    req("fumigant_name"),
    req("treatment_date"),
    req("place_of_fumigation"),
    req("invoice_number"),
];

const EXPORT_DECLARATION_FIELDS: &[RequiredField] = &[
    crit("declaration_number"),
    crit("declaration_date"),
    crit("exporter_name"),
    req("consignee_name"),
    req("invoice_number"),
    req("invoice_date"),
    req("total_amount"),
    req("currency"),
    req("declaration_status"),
    req("valuation_method"),
    req("hsn_code"),
];

const AIRWAY_BILL_FIELDS: &[RequiredField] = &[
    crit("awb_number"),
    crit("awb_date"),
    crit("shipper_name"),
    crit("consignee_name"),
    req("issuing_carrier_name"),
    req("issuing_carrier_city"),
    req("hs_code"),
    req("gross_weight"),
    req("invoice_number"),
];

/// The required-field checklist for a document type.
pub fn required_fields(document_type: DocumentType) -> &'static [RequiredField] {
    match document_type {
        DocumentType::CommercialInvoice => COMMERCIAL_INVOICE_FIELDS,
        DocumentType::PackingList => PACKING_LIST_FIELDS,
        DocumentType::ScometDeclaration => SCOMET_DECLARATION_FIELDS,
        DocumentType::FumigationCertificate => FUMIGATION_CERTIFICATE_FIELDS,
        DocumentType::ExportDeclaration => EXPORT_DECLARATION_FIELDS,
        DocumentType::AirwayBill => AIRWAY_BILL_FIELDS,
    }
}

/// The unconditionally-required identity fields (document number, date)
/// whose absence alone invalidates the document.
pub fn identity_fields(document_type: DocumentType) -> &'static [&'static str] {
    match document_type {
        DocumentType::CommercialInvoice => &["invoice_number", "invoice_date"],
        DocumentType::PackingList => &["packing_list_number", "packing_list_date"],
        DocumentType::ScometDeclaration => &["scomet_declaration_number", "declaration_date"],
        DocumentType::FumigationCertificate => &["certificate_number", "certificate_date"],
        DocumentType::ExportDeclaration => &["declaration_number", "declaration_date"],
        DocumentType::AirwayBill => &["awb_number", "awb_date"],
    }
}

/// Score one document's completeness under the default policy.
pub fn score_completeness(field_map: &FieldMap, document_type: DocumentType) -> CompletenessReport {
    score_completeness_with_policy(field_map, document_type, CompletenessPolicy::default())
}

/// Score one document's completeness under an explicit policy.
pub fn score_completeness_with_policy(
    field_map: &FieldMap,
    document_type: DocumentType,
    policy: CompletenessPolicy,
) -> CompletenessReport {
    let checklist = required_fields(document_type);

    let mut missing_fields = Vec::new();
    let mut critical_fields_missing = 0;
    for field in checklist {
        if field_map.field_absent(field.name) {
            missing_fields.push(field.name.to_string());
            if field.critical {
                critical_fields_missing += 1;
            }
        }
    }

    let total = checklist.len();
    let present = total - missing_fields.len();
    let completeness_percent = ((present * 100) as f64 / total as f64).round() as u8;

    let identity_present = identity_fields(document_type)
        .iter()
        .all(|name| !field_map.field_absent(name));
    let is_valid = identity_present && critical_fields_missing <= policy.max_critical_missing;

    CompletenessReport {
        completeness_percent,
        missing_fields,
        critical_fields_missing,
        is_valid,
    }
}
