//! # `shipdoc reconcile` — Full Document-Set Reconciliation
//!
//! Loads the root invoice and every dependent document, runs the
//! orchestrator, prints the `ReconciliationResult` as JSON, and maps the
//! overall status onto the exit code: 0 valid, 1 warning, 2 error.

use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{bail, Context};
use clap::Args;
use shipdoc_core::DependentType;
use shipdoc_recon::{reconcile, DependentDocument, OverallStatus};

use crate::{load_field_map, print_json};

/// Arguments for the `reconcile` subcommand.
#[derive(Args, Debug)]
pub struct ReconcileArgs {
    /// Path to the commercial invoice field map (omit to simulate a
    /// missing root document).
    #[arg(long)]
    pub root: Option<PathBuf>,

    /// Dependent document as `type=path`, e.g.
    /// `packing_list=pl.json`. Repeatable.
    #[arg(long = "dependent", value_name = "TYPE=PATH")]
    pub dependents: Vec<String>,

    /// Dependent whose collaborator failed, as `type=reason`. Repeatable.
    #[arg(long = "unavailable", value_name = "TYPE=REASON")]
    pub unavailable: Vec<String>,
}

/// Split a `type=value` argument into its parts.
fn split_typed(arg: &str) -> anyhow::Result<(DependentType, &str)> {
    let Some((type_name, value)) = arg.split_once('=') else {
        bail!("expected TYPE=VALUE, got {arg:?}");
    };
    let document_type = DependentType::from_str(type_name)
        .with_context(|| format!("in argument {arg:?}"))?;
    Ok((document_type, value))
}

pub fn run(args: &ReconcileArgs) -> anyhow::Result<i32> {
    let root = args.root.as_deref().map(load_field_map).transpose()?;

    let mut dependents = Vec::new();
    for spec in &args.dependents {
        let (document_type, path) = split_typed(spec)?;
        let field_map = load_field_map(PathBuf::from(path).as_path())?;
        dependents.push(DependentDocument::extracted(document_type, field_map));
    }
    for spec in &args.unavailable {
        let (document_type, reason) = split_typed(spec)?;
        dependents.push(DependentDocument::unavailable(document_type, reason));
    }

    tracing::info!(
        dependents = dependents.len(),
        root_present = root.is_some(),
        "reconciling document set"
    );

    let result = reconcile(root.as_ref(), &dependents);
    print_json(&result)?;

    Ok(match result.overall_status {
        OverallStatus::Valid => 0,
        OverallStatus::Warning => 1,
        OverallStatus::Error => 2,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_typed_parses() {
        let (t, v) = split_typed("packing_list=pl.json").unwrap();
        assert_eq!(t, DependentType::PackingList);
        assert_eq!(v, "pl.json");
    }

    #[test]
    fn test_split_typed_rejects_bad_input() {
        assert!(split_typed("no-separator").is_err());
        assert!(split_typed("bill_of_lading=x.json").is_err());
    }
}
