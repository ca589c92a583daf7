//! # shipdoc CLI Entry Point
//!
//! Assembles subcommands and dispatches to handler modules.

use clap::Parser;

/// Shipping-document reconciliation toolchain.
///
/// Loads extracted field maps from JSON files and runs the reconciliation
/// engine: cross-document validation against the commercial invoice,
/// completeness scoring, and single-field comparison.
#[derive(Parser, Debug)]
#[command(name = "shipdoc", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Reconcile a full document set against the commercial invoice.
    Reconcile(shipdoc_cli::reconcile::ReconcileArgs),
    /// Validate one dependent document against the commercial invoice.
    Validate(shipdoc_cli::validate::ValidateArgs),
    /// Score one document's extraction completeness.
    Score(shipdoc_cli::score::ScoreArgs),
    /// Compare a single (expected, actual) field value pair.
    Compare(shipdoc_cli::compare::CompareArgs),
}

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let exit_code = match cli.command {
        Commands::Reconcile(args) => shipdoc_cli::reconcile::run(&args)?,
        Commands::Validate(args) => shipdoc_cli::validate::run(&args)?,
        Commands::Score(args) => shipdoc_cli::score::run(&args)?,
        Commands::Compare(args) => shipdoc_cli::compare::run(&args)?,
    };

    std::process::exit(exit_code)
}
