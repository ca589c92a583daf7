//! # `shipdoc compare` — Single Field Comparison
//!
//! Pre-checks one (expected, actual) value pair the way the validator
//! would, useful when debugging why a particular field mismatched. Exit
//! code 0 on match, 1 on mismatch.

use clap::Args;
use shipdoc_core::{FieldValue, ValueKind};
use shipdoc_recon::compare_field;

use crate::print_json;

/// Arguments for the `compare` subcommand.
#[derive(Args, Debug)]
pub struct CompareArgs {
    /// Comparison kind: text, date, or weight.
    #[arg(long, default_value = "text")]
    pub kind: ValueKind,

    /// Display name for the field in the result.
    #[arg(long, default_value = "field")]
    pub field_name: String,

    /// Value from the root document.
    pub expected: String,

    /// Value from the dependent document.
    pub actual: String,
}

pub fn run(args: &CompareArgs) -> anyhow::Result<i32> {
    let expected = FieldValue::Text(args.expected.clone());
    let actual = FieldValue::Text(args.actual.clone());

    let check = compare_field(Some(&expected), Some(&actual), &args.field_name, args.kind);
    print_json(&check)?;

    Ok(if check.is_mismatch() { 1 } else { 0 })
}
