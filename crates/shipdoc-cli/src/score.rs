//! # `shipdoc score` — Extraction Completeness
//!
//! Scores one document's own extracted fields against its required-field
//! checklist, independent of any other document. Exit code 0 when the
//! document passes the critical gate, 1 otherwise.

use std::path::PathBuf;

use clap::Args;
use shipdoc_core::DocumentType;
use shipdoc_recon::{score_completeness_with_policy, CompletenessPolicy};

use crate::{load_field_map, print_json};

/// Arguments for the `score` subcommand.
#[derive(Args, Debug)]
pub struct ScoreArgs {
    /// Document type (any of the six, the commercial invoice included).
    #[arg(long = "type")]
    pub document_type: DocumentType,

    /// Maximum tolerated number of missing critical fields.
    #[arg(long, default_value_t = 1)]
    pub max_critical_missing: usize,

    /// Path to the document's field map.
    pub document: PathBuf,
}

pub fn run(args: &ScoreArgs) -> anyhow::Result<i32> {
    let field_map = load_field_map(&args.document)?;
    let policy = CompletenessPolicy { max_critical_missing: args.max_critical_missing };

    tracing::info!(document_type = %args.document_type, "scoring completeness");

    let report = score_completeness_with_policy(&field_map, args.document_type, policy);
    print_json(&report)?;

    Ok(if report.is_valid { 0 } else { 1 })
}
