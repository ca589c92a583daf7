//! # End-to-End Reconciliation Scenarios
//!
//! Exercises the engine the way the host application does: a root
//! commercial invoice and a full set of dependent documents, through
//! `reconcile`, asserting on the report shapes the presentation layer
//! consumes. Complements the per-module unit tests with multi-document
//! flows and the cascading-revalidation contract.

use shipdoc_core::{DependentType, DocumentType, FieldMap, FieldValue};
use shipdoc_recon::{
    reconcile, score_completeness, validate_document, DependentDocument, OverallStatus,
};

fn text(s: &str) -> FieldValue {
    FieldValue::Text(s.to_string())
}

/// A fully-populated commercial invoice.
fn invoice() -> FieldMap {
    let mut map = FieldMap::new();
    map.insert("invoice_number", "INV-2024-0117");
    map.insert("invoice_date", "2024-03-05");
    map.insert("exporter_name", "ACME Global Exports Pvt Ltd");
    map.insert("exporter_address", "Plot 14, MIDC, Pune, India");
    map.insert("consignee_name", "Bremen Imports GmbH");
    map.insert("consignee_address", "Hafenstrasse 12, Bremen, Germany");
    map.insert("port_of_loading", "Nhava Sheva");
    map.insert("port_of_discharge", "Hamburg");
    map.insert("final_destination", "Germany");
    map.insert("country_of_origin", "India");
    map.insert("hsn_code", "84818090");
    map.insert("total_amount", "18500.00");
    map.insert("currency", "EUR");
    map.insert("item_count", FieldValue::Number(5.0));
    map.insert(
        "line_item_descriptions",
        FieldValue::List(vec![text("Stainless steel gate valves"), text("Brass fittings")]),
    );
    map
}

fn packing_list() -> FieldMap {
    let mut map = FieldMap::new();
    map.insert("packing_list_number", "PL-0117");
    map.insert("packing_list_date", "05.03.2024");
    map.insert("invoice_number", "INV-2024-0117");
    map.insert("invoice_date", "05.03.2024");
    map.insert("exporter_name", "ACME GLOBAL EXPORTS PVT LTD");
    map.insert("consignee_name", "bremen imports gmbh");
    map.insert("port_of_loading", "Nhava Sheva");
    map.insert("port_of_discharge", "Hamburg");
    map.insert("country_of_origin", "INDIA");
    map.insert("hsn_code", "84818090");
    map.insert("total_boxes", FieldValue::Number(7.0));
    map.insert("gross_weight", "1,250 kg");
    map.insert("net_weight", "1180 kg");
    map.insert(
        "goods_description",
        "Industrial stainless steel gate valves packed in wooden crates",
    );
    map.insert(
        "box_details",
        FieldValue::List(vec![text("Crate 1/7"), text("Crate 2/7")]),
    );
    map
}

fn scomet() -> FieldMap {
    let mut map = FieldMap::new();
    map.insert("invoice_number", "INV-2024-0117");
    map.insert("consignee_name", "Bremen Imports GmbH");
    map.insert("destination_country", "germany");
    map.insert("hsn_code", "84818090");
    map
}

fn airway_bill() -> FieldMap {
    let mut map = FieldMap::new();
    map.insert("invoice_number", "INV-2024-0117");
    map.insert("invoice_date", "05/03/2024");
    map.insert("shipper_name", "acme global exports pvt ltd");
    map.insert("consignee_name", "Bremen Imports GmbH");
    map.insert("hs_code", "84818090");
    map
}

// ---- clean multi-document run ----

#[test]
fn full_document_set_reconciles_valid() {
    let deps = vec![
        DependentDocument::extracted(DependentType::PackingList, packing_list()),
        DependentDocument::extracted(DependentType::ScometDeclaration, scomet()),
        DependentDocument::extracted(DependentType::AirwayBill, airway_bill()),
    ];
    let result = reconcile(Some(&invoice()), &deps);
    assert_eq!(result.overall_status, OverallStatus::Valid, "{result:#?}");
    assert_eq!(result.per_document.len(), 3);
    for report in result.per_document.values() {
        assert!(report.invoice_match_verified, "{report:#?}");
    }
}

// ---- overall-status precedence ----

#[test]
fn two_matching_one_mismatching_is_warning() {
    let mut bad_awb = airway_bill();
    bad_awb.insert("consignee_name", "Hamburg Trading AG");
    let deps = vec![
        DependentDocument::extracted(DependentType::PackingList, packing_list()),
        DependentDocument::extracted(DependentType::ScometDeclaration, scomet()),
        DependentDocument::extracted(DependentType::AirwayBill, bad_awb),
    ];
    let result = reconcile(Some(&invoice()), &deps);
    assert_eq!(result.overall_status, OverallStatus::Warning);
}

#[test]
fn one_unavailable_outranks_matching_documents() {
    let deps = vec![
        DependentDocument::extracted(DependentType::PackingList, packing_list()),
        DependentDocument::extracted(DependentType::ScometDeclaration, scomet()),
        DependentDocument::unavailable(DependentType::AirwayBill, "storage fetch failed"),
    ];
    let result = reconcile(Some(&invoice()), &deps);
    assert_eq!(result.overall_status, OverallStatus::Error);
}

// ---- cascading revalidation contract ----

#[test]
fn root_edit_changes_every_dependent_on_full_rerun() {
    let mut edited_root = invoice();
    edited_root.insert("invoice_number", "INV-2024-0200");

    let deps = vec![
        DependentDocument::extracted(DependentType::PackingList, packing_list()),
        DependentDocument::extracted(DependentType::ScometDeclaration, scomet()),
    ];
    let before = reconcile(Some(&invoice()), &deps);
    let after = reconcile(Some(&edited_root), &deps);

    assert_eq!(before.overall_status, OverallStatus::Valid);
    assert_eq!(after.overall_status, OverallStatus::Warning);
    for report in after.per_document.values() {
        assert!(!report.invoice_match_verified, "{report:#?}");
    }
}

#[test]
fn single_dependent_edit_needs_only_single_validate() {
    // The engine exposes validate_document so a caller can re-check just
    // the edited document instead of rerunning the whole set.
    let root = invoice();
    let mut edited = packing_list();
    edited.insert("hsn_code", "73079990");

    let report = validate_document(&root, &edited, DependentType::PackingList);
    assert!(!report.invoice_match_verified);
    assert!(report
        .warnings
        .iter()
        .any(|w| w.starts_with("HSN code:")));

    // The untouched documents' reports are unaffected by construction.
    let scomet_report = validate_document(&root, &scomet(), DependentType::ScometDeclaration);
    assert!(scomet_report.invoice_match_verified);
}

// ---- rule scenarios through the full stack ----

#[test]
fn box_count_mismatch_message_reaches_the_report() {
    let mut pl = packing_list();
    pl.insert("total_boxes", FieldValue::Number(3.0));
    let deps = vec![DependentDocument::extracted(DependentType::PackingList, pl)];
    let result = reconcile(Some(&invoice()), &deps);

    assert_eq!(result.overall_status, OverallStatus::Warning);
    let report = &result.per_document[&DependentType::PackingList];
    assert!(!report.invoice_match_verified);
    assert!(report
        .warnings
        .contains(&"Box count (3) less than item count (5)".to_string()));
}

#[test]
fn unparseable_date_never_matches() {
    let mut awb = airway_bill();
    awb.insert("invoice_date", "March fifth");
    let report = validate_document(&invoice(), &awb, DependentType::AirwayBill);
    assert!(!report.invoice_match_verified);

    // Even if the root carried the identical garbled text.
    let mut garbled_root = invoice();
    garbled_root.insert("invoice_date", "March fifth");
    let report = validate_document(&garbled_root, &awb, DependentType::AirwayBill);
    assert!(!report.invoice_match_verified);
}

// ---- completeness alongside reconciliation ----

#[test]
fn completeness_is_independent_of_cross_document_state() {
    // A packing list that disagrees with the invoice can still be complete.
    let mut pl = packing_list();
    pl.insert("invoice_number", "SOMETHING-ELSE");
    pl.insert("marks_and_numbers", "INV / 1-7");
    pl.insert("invoice_date", "05.03.2024");

    let completeness = score_completeness(&pl, DocumentType::PackingList);
    assert!(completeness.is_valid);

    let report = validate_document(&invoice(), &pl, DependentType::PackingList);
    assert!(!report.invoice_match_verified);
}

// ---- referential transparency ----

#[test]
fn identical_inputs_yield_byte_identical_json() {
    let deps = vec![
        DependentDocument::extracted(DependentType::PackingList, packing_list()),
        DependentDocument::unavailable(DependentType::FumigationCertificate, "ocr crashed"),
    ];
    let a = serde_json::to_vec(&reconcile(Some(&invoice()), &deps)).unwrap();
    let b = serde_json::to_vec(&reconcile(Some(&invoice()), &deps)).unwrap();
    assert_eq!(a, b);
}
