//! # Rule Set Registry
//!
//! One declarative table per dependent document type: which of its fields
//! map to which root-document fields, plus the special rules that are not
//! simple one-to-one comparisons (box count vs item count, weight
//! consistency, goods-description containment, enum validity).
//!
//! The registry is the single place per-type behavior lives. The validator
//! loop is generic; adding a document type means adding a table here, not
//! copy-pasting a validation function.
//!
//! ## Invariant
//!
//! Every dependent type carries the two universal mappings — invoice
//! number and invoice date against the root — ahead of its own table.
//! Mappings only ever point at root-document fields: the reconciliation
//! graph is a star, never dependent-to-dependent.

use shipdoc_core::normalize::canonical_text;
use shipdoc_core::{DependentType, FieldMap, FieldValue, ValueKind};

use crate::compare::FieldCheck;

/// A declared correspondence between a root field and a dependent field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldMapping {
    /// Canonical field name on the commercial invoice.
    pub root_field: &'static str,
    /// Canonical field name on the dependent document.
    pub dependent_field: &'static str,
    /// Human-readable name used in checks and messages.
    pub display_name: &'static str,
    /// How the two values are normalized before comparison.
    pub kind: ValueKind,
    /// Required mappings flag a root-side absence as a mismatch;
    /// optional ones are skipped when the root lacks the field.
    pub required: bool,
}

const fn map_req(
    root_field: &'static str,
    dependent_field: &'static str,
    display_name: &'static str,
    kind: ValueKind,
) -> FieldMapping {
    FieldMapping { root_field, dependent_field, display_name, kind, required: true }
}

const fn map_opt(
    root_field: &'static str,
    dependent_field: &'static str,
    display_name: &'static str,
    kind: ValueKind,
) -> FieldMapping {
    FieldMapping { root_field, dependent_field, display_name, kind, required: false }
}

/// A check that is not a one-to-one field mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpecialRule {
    /// Packing list box count must cover the invoice's item count.
    BoxCountCoversItemCount,
    /// Gross weight must be at least net weight, and net positive.
    WeightConsistency,
    /// Some invoice line-item description must appear inside the packing
    /// list's free-text goods description.
    GoodsDescriptionContainsLineItem,
    /// Export declaration status must be one of the recognized values.
    DeclarationStatusRecognized,
    /// Export valuation method must be one of the recognized values.
    ValuationMethodRecognized,
}

/// Recognized export-declaration statuses, in canonical text form.
const DECLARATION_STATUSES: &[&str] = &["signed", "verified", "pending", "approved"];

/// Recognized customs valuation methods, in canonical text form.
const VALUATION_METHODS: &[&str] = &[
    "transaction value",
    "deductive value",
    "computed value",
    "fallback method",
];

/// Mappings every dependent type runs against the root.
const UNIVERSAL_MAPPINGS: &[FieldMapping] = &[
    map_req("invoice_number", "invoice_number", "Invoice number", ValueKind::Text),
    map_req("invoice_date", "invoice_date", "Invoice date", ValueKind::Date),
];

const PACKING_LIST_MAPPINGS: &[FieldMapping] = &[
    map_req("exporter_name", "exporter_name", "Exporter name", ValueKind::Text),
    map_opt("exporter_address", "exporter_address", "Exporter address", ValueKind::Text),
    map_req("consignee_name", "consignee_name", "Consignee name", ValueKind::Text),
    map_opt("consignee_address", "consignee_address", "Consignee address", ValueKind::Text),
    map_req("port_of_loading", "port_of_loading", "Port of loading", ValueKind::Text),
    map_req("port_of_discharge", "port_of_discharge", "Port of discharge", ValueKind::Text),
    map_opt("final_destination", "final_destination", "Final destination", ValueKind::Text),
    map_req("country_of_origin", "country_of_origin", "Country of origin", ValueKind::Text),
    map_req("hsn_code", "hsn_code", "HSN code", ValueKind::Text),
    map_opt("marks_and_numbers", "marks_and_numbers", "Marks and numbers", ValueKind::Text),
    map_opt("reference_number", "reference_number", "Reference number", ValueKind::Text),
    map_opt("proforma_number", "proforma_number", "Proforma number", ValueKind::Text),
    map_opt("delivery_terms", "incoterms", "Delivery terms", ValueKind::Text),
    map_opt("place_of_receipt", "place_of_receipt", "Place of receipt", ValueKind::Text),
];

const SCOMET_MAPPINGS: &[FieldMapping] = &[
    map_req("consignee_name", "consignee_name", "Consignee name", ValueKind::Text),
    map_req("final_destination", "destination_country", "Destination country", ValueKind::Text),
    map_req("hsn_code", "hsn_code", "HSN code", ValueKind::Text),
];

// Domain convention: the shipping mark on a fumigation certificate is
// expected to echo the invoice number.
const FUMIGATION_MAPPINGS: &[FieldMapping] = &[
    map_req("invoice_number", "shipping_mark", "Shipping mark", ValueKind::Text),
];

const EXPORT_DECLARATION_MAPPINGS: &[FieldMapping] = &[
    map_req("exporter_name", "exporter_name", "Exporter name", ValueKind::Text),
    map_req("consignee_name", "consignee_name", "Consignee name", ValueKind::Text),
    map_opt("port_of_loading", "port_of_loading", "Port of loading", ValueKind::Text),
    map_opt("port_of_discharge", "port_of_discharge", "Port of discharge", ValueKind::Text),
    map_opt("final_destination", "final_destination", "Final destination", ValueKind::Text),
    map_req("country_of_origin", "country_of_origin", "Country of origin", ValueKind::Text),
    map_req("hsn_code", "hsn_code", "HSN code", ValueKind::Text),
    map_req("total_amount", "total_amount", "Total amount", ValueKind::Text),
    map_req("currency", "currency", "Currency", ValueKind::Text),
];

const AIRWAY_BILL_MAPPINGS: &[FieldMapping] = &[
    map_req("exporter_name", "shipper_name", "Shipper name", ValueKind::Text),
    map_opt("exporter_address", "shipper_address", "Shipper address", ValueKind::Text),
    map_req("consignee_name", "consignee_name", "Consignee name", ValueKind::Text),
    map_opt("consignee_address", "consignee_address", "Consignee address", ValueKind::Text),
    map_opt("carrier_name", "issuing_carrier_name", "Issuing carrier name", ValueKind::Text),
    map_opt("carrier_city", "issuing_carrier_city", "Issuing carrier city", ValueKind::Text),
    map_req("hsn_code", "hs_code", "HS code", ValueKind::Text),
];

/// The complete rule set for one dependent document type.
#[derive(Debug, Clone)]
pub struct RuleSet {
    /// Field mappings, universal pair first.
    pub mappings: Vec<FieldMapping>,
    /// Special rules evaluated after the mapping loop.
    pub special_rules: &'static [SpecialRule],
}

impl RuleSet {
    /// Look up the rule set for a dependent type. Total — every dependent
    /// type has a table.
    pub fn for_dependent(document_type: DependentType) -> RuleSet {
        let (own, special_rules): (&[FieldMapping], &'static [SpecialRule]) = match document_type {
            DependentType::PackingList => (
                PACKING_LIST_MAPPINGS,
                &[
                    SpecialRule::BoxCountCoversItemCount,
                    SpecialRule::WeightConsistency,
                    SpecialRule::GoodsDescriptionContainsLineItem,
                ],
            ),
            DependentType::ScometDeclaration => (SCOMET_MAPPINGS, &[]),
            DependentType::FumigationCertificate => (FUMIGATION_MAPPINGS, &[]),
            DependentType::ExportDeclaration => (
                EXPORT_DECLARATION_MAPPINGS,
                &[
                    SpecialRule::DeclarationStatusRecognized,
                    SpecialRule::ValuationMethodRecognized,
                ],
            ),
            DependentType::AirwayBill => (AIRWAY_BILL_MAPPINGS, &[]),
        };

        let mappings = UNIVERSAL_MAPPINGS.iter().chain(own).copied().collect();
        RuleSet { mappings, special_rules }
    }
}

impl SpecialRule {
    /// Evaluate this rule against the root and dependent field maps.
    ///
    /// Returns `None` when the rule's prerequisite data is absent — a
    /// field the extractor never found is the Completeness Scorer's
    /// concern, not a mismatch. Present-but-malformed values are always
    /// reported as mismatches.
    pub fn evaluate(&self, root: &FieldMap, dependent: &FieldMap) -> Option<FieldCheck> {
        match self {
            Self::BoxCountCoversItemCount => evaluate_box_count(root, dependent),
            Self::WeightConsistency => evaluate_weight_consistency(dependent),
            Self::GoodsDescriptionContainsLineItem => evaluate_goods_description(root, dependent),
            Self::DeclarationStatusRecognized => evaluate_enum_field(
                dependent,
                "declaration_status",
                "Declaration status",
                DECLARATION_STATUSES,
            ),
            Self::ValuationMethodRecognized => evaluate_enum_field(
                dependent,
                "valuation_method",
                "Valuation method",
                VALUATION_METHODS,
            ),
        }
    }
}

fn evaluate_box_count(root: &FieldMap, dependent: &FieldMap) -> Option<FieldCheck> {
    if root.field_absent("item_count") || dependent.field_absent("total_boxes") {
        return None;
    }
    let expected = root.get("item_count").cloned().unwrap_or(FieldValue::Null);
    let actual = dependent.get("total_boxes").cloned().unwrap_or(FieldValue::Null);

    let check = match (expected.as_number(), actual.as_number()) {
        (Some(items), Some(boxes)) if boxes >= items => {
            FieldCheck::matched("Box count", expected, actual)
        }
        (Some(items), Some(boxes)) => {
            let message = format!(
                "Box count ({}) less than item count ({})",
                render_count(boxes),
                render_count(items)
            );
            FieldCheck::mismatched("Box count", expected, actual, message)
        }
        _ => FieldCheck::mismatched(
            "Box count",
            expected,
            actual,
            "Box count values are not numeric",
        ),
    };
    Some(check)
}

fn evaluate_weight_consistency(dependent: &FieldMap) -> Option<FieldCheck> {
    use shipdoc_core::{normalize, NormalizedValue};

    if dependent.field_absent("gross_weight") || dependent.field_absent("net_weight") {
        return None;
    }
    let gross_raw = dependent.get("gross_weight").cloned().unwrap_or(FieldValue::Null);
    let net_raw = dependent.get("net_weight").cloned().unwrap_or(FieldValue::Null);

    let gross = normalize(dependent.get("gross_weight"), ValueKind::Weight);
    let net = normalize(dependent.get("net_weight"), ValueKind::Weight);

    let consistent = matches!(
        (&gross, &net),
        (NormalizedValue::Weight(g), NormalizedValue::Weight(n)) if g >= n && *n > 0.0
    );
    let check = if consistent {
        FieldCheck::matched("Weights", gross_raw, net_raw)
    } else {
        FieldCheck::mismatched("Weights", gross_raw, net_raw, "Weight values are inconsistent")
    };
    Some(check)
}

fn evaluate_goods_description(root: &FieldMap, dependent: &FieldMap) -> Option<FieldCheck> {
    if root.field_absent("line_item_descriptions") || dependent.field_absent("goods_description") {
        return None;
    }
    let expected = root
        .get("line_item_descriptions")
        .cloned()
        .unwrap_or(FieldValue::Null);
    let actual = dependent
        .get("goods_description")
        .cloned()
        .unwrap_or(FieldValue::Null);

    let haystack = canonical_text(&actual.to_string());
    let line_items: Vec<String> = match &expected {
        FieldValue::List(items) => items.iter().map(|v| canonical_text(&v.to_string())).collect(),
        other => vec![canonical_text(&other.to_string())],
    };
    let contained = line_items
        .iter()
        .any(|item| !item.is_empty() && haystack.contains(item.as_str()));

    let check = if contained {
        FieldCheck::matched("Goods description", expected, actual)
    } else {
        FieldCheck::mismatched(
            "Goods description",
            expected,
            actual,
            "Goods description does not match any invoice line item",
        )
    };
    Some(check)
}

/// Intra-document enum validity check, reported through the same check
/// shape as cross-document comparisons with `"N/A"` on the expected side.
fn evaluate_enum_field(
    dependent: &FieldMap,
    field: &str,
    display_name: &str,
    recognized: &[&str],
) -> Option<FieldCheck> {
    if dependent.field_absent(field) {
        return None;
    }
    let actual = dependent.get(field).cloned().unwrap_or(FieldValue::Null);
    let canonical = canonical_text(&actual.to_string());
    let expected = FieldValue::Text("N/A".to_string());

    let check = if recognized.contains(&canonical.as_str()) {
        FieldCheck::matched(display_name, expected, actual)
    } else {
        let message = format!("{display_name}: \"{actual}\" is not a recognized value");
        FieldCheck::mismatched(display_name, expected, actual, message)
    };
    Some(check)
}

/// Counts render without a fractional part when integral.
fn render_count(n: f64) -> String {
    if n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        format!("{n}")
    }
}
