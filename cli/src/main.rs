//! degrees: shortest chain of shared works between two people.
//!
//! Loads a CSV dataset directory into a `GraphStore`, resolves the two names
//! (prompting when a name is ambiguous), runs the breadth-first search from
//! degrees-core, and prints the chain.

use std::io::{self, BufRead, Write};
use std::time::Instant;

use anyhow::{bail, Context};
use clap::Parser;
use degrees_core::{search, GraphStore};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

mod config;
mod load;
mod output;
mod resolve;

use config::{Args, OutputFormat};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("degrees_cli=info,degrees_core=warn")),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    info!("Loading data from {}", args.directory.display());
    let (graph, summary) = load::load_directory(&args.directory)
        .with_context(|| format!("failed to load dataset from {}", args.directory.display()))?;
    debug!(
        skipped = summary.malformed_rows + summary.duplicate_ids + summary.dangling_credits,
        memory_mb = graph.memory_usage() as f64 / 1_048_576.0,
        "graph ready"
    );

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    let Some(source) = resolve_person(&graph, args.source.as_deref(), &mut input, &mut out)?
    else {
        bail!("Person not found.");
    };
    let Some(target) = resolve_person(&graph, args.target.as_deref(), &mut input, &mut out)?
    else {
        bail!("Person not found.");
    };
    debug!(%source, %target, "resolved people");

    let started = Instant::now();
    let report = search(&graph, &source, &target, &args.search_options())
        .context("search failed")?;
    let elapsed = started.elapsed();

    match args.format {
        OutputFormat::Text => output::render_text(&mut out, &graph, &source, &report, elapsed)?,
        OutputFormat::Json => {
            let value = output::render_json(&graph, &source, &target, &report, elapsed);
            serde_json::to_writer_pretty(&mut out, &value)?;
            writeln!(out)?;
        }
    }

    Ok(())
}

/// Use the name given on the command line, or prompt for one, then resolve it to an id.
fn resolve_person<R: BufRead, W: Write>(
    graph: &GraphStore,
    name: Option<&str>,
    input: &mut R,
    out: &mut W,
) -> anyhow::Result<Option<String>> {
    let name = match name {
        Some(name) => name.to_string(),
        None => match resolve::prompt_line(input, out, "Name: ")? {
            Some(name) => name,
            None => return Ok(None),
        },
    };
    Ok(resolve::person_id_for_name(graph, &name, input, out)?)
}
