//! # shipdoc-cli — Command Handlers
//!
//! Handler modules for the `shipdoc` binary. Each module owns its clap
//! `Args` struct and a `run()` entry point returning the process exit
//! code. The CLI stands in for the host application: it loads extracted
//! field maps from JSON files (the Document Store / Extraction Service
//! collaborators in production) and feeds them to the engine.

pub mod compare;
pub mod reconcile;
pub mod score;
pub mod validate;

use std::path::Path;

use anyhow::Context;
use shipdoc_core::FieldMap;

/// Load one extracted field map from a JSON file.
pub fn load_field_map(path: &Path) -> anyhow::Result<FieldMap> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("reading field map {}", path.display()))?;
    let map: FieldMap = serde_json::from_str(&raw)
        .with_context(|| format!("parsing field map {}", path.display()))?;
    Ok(map)
}

/// Print a report as pretty JSON on stdout.
pub fn print_json<T: serde::Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
