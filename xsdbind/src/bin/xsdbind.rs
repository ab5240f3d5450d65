//! Compile XML Schema documents into Rust marshalling code.
//!
//! Usage: `xsdbind <output-dir> <schema>... [--permissive-prefixes] [-v]`

use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;
use xsdbind::codegen::WriteOutcome;
use xsdbind::{Generator, PrefixPolicy, SchemaSet, write_artifacts};

#[derive(Parser, Debug)]
#[command(name = "xsdbind", version)]
#[command(about = "Compile XML Schema documents into Rust marshalling code")]
struct Args {
    /// Directory receiving the generated files
    output_dir: PathBuf,

    /// Schema documents, compiled together in the given order
    #[arg(required = true)]
    schemas: Vec<PathBuf>,

    /// Resolve unknown namespace prefixes to no namespace instead of failing
    #[arg(long)]
    permissive_prefixes: bool,

    /// Path of the runtime crate in generated code
    #[arg(long, default_value = "xsdbind_core")]
    runtime: String,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn run(args: &Args) -> anyhow::Result<()> {
    let policy = if args.permissive_prefixes {
        PrefixPolicy::EmptyNamespace
    } else {
        PrefixPolicy::Reject
    };

    let mut set = SchemaSet::new().prefix_policy(policy);
    for path in &args.schemas {
        set.add_file(path)
            .with_context(|| format!("failed to read schema {}", path.display()))?;
    }
    let graph = set.compile().context("failed to resolve schema references")?;

    let artifacts = Generator::new(&graph)
        .runtime_crate(args.runtime.as_str())
        .generate()
        .context("code generation failed")?;

    let outcomes = write_artifacts(&args.output_dir, &artifacts)
        .with_context(|| format!("failed to write to {}", args.output_dir.display()))?;

    let written = outcomes
        .iter()
        .filter(|(_, outcome)| *outcome != WriteOutcome::Unchanged)
        .count();
    tracing::info!(
        "{} of {} files written to {}",
        written,
        outcomes.len(),
        args.output_dir.display()
    );
    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}
