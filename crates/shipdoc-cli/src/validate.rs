//! # `shipdoc validate` — Single-Document Validation
//!
//! The cheaper revalidation granularity: when one dependent document is
//! edited or re-uploaded, only that document needs re-checking against
//! the invoice. Exit code 0 when verified, 1 when mismatches exist.

use std::path::PathBuf;

use clap::Args;
use shipdoc_core::DependentType;
use shipdoc_recon::validate_document;

use crate::{load_field_map, print_json};

/// Arguments for the `validate` subcommand.
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Path to the commercial invoice field map.
    #[arg(long)]
    pub root: PathBuf,

    /// Dependent document type (e.g. `packing_list`).
    #[arg(long = "type")]
    pub document_type: DependentType,

    /// Path to the dependent document's field map.
    pub document: PathBuf,
}

pub fn run(args: &ValidateArgs) -> anyhow::Result<i32> {
    let root = load_field_map(&args.root)?;
    let dependent = load_field_map(&args.document)?;

    tracing::info!(document_type = %args.document_type, "validating document");

    let report = validate_document(&root, &dependent, args.document_type);
    print_json(&report)?;

    Ok(if report.invoice_match_verified { 0 } else { 1 })
}
