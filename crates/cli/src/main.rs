//! `hop`: load a connection CSV and answer fewest-hop path queries.
//!
//! One-shot mode runs a single query and exits; without a subcommand the
//! binary drops into the REPL. Query outcomes, including the two not-found
//! kinds, are ordinary stdout results with exit status 0. Only a failed
//! load (unreadable file, capacity rejection) exits non-zero.

mod output;
mod repl;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use hopgraph_core::{HopError, HopResult, VertexId};
use hopgraph_engine::{load_csv_file, ConnectionGraph, GraphConfig};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "hop",
    version,
    about = "Fewest-hop path queries over a CSV connection graph"
)]
struct Cli {
    /// Connection CSV to load (header line, then origin,destination rows)
    #[arg(short, long, default_value = "connections.csv")]
    file: PathBuf,

    /// Cap on distinct vertices admitted while loading
    #[arg(long)]
    max_vertices: Option<usize>,

    /// Render query results as JSON
    #[arg(long)]
    json: bool,

    /// Raise log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Find a fewest-hop path between two identifiers
    Path {
        origin: VertexId,
        destination: VertexId,
    },
    /// List the direct neighbors of an identifier
    Neighbors { id: VertexId },
    /// Show vertex and connection counts
    Stats,
    /// Interactive prompt (the default)
    Repl,
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(err) = run(cli) {
        report_fatal(&err);
        process::exit(1);
    }
}

fn run(cli: Cli) -> HopResult<()> {
    let mut config = GraphConfig::default();
    if let Some(max_vertices) = cli.max_vertices {
        config = config.with_max_vertices(max_vertices);
    }

    let mut graph = ConnectionGraph::with_config(config);
    let summary = load_csv_file(&mut graph, &cli.file)?;
    println!(
        "loaded {}: {} connections between {} vertices ({} rows skipped)",
        cli.file.display(),
        graph.connection_count(),
        graph.vertex_count(),
        summary.rows_skipped
    );

    match cli.command {
        Some(Command::Path {
            origin,
            destination,
        }) => {
            let result = graph.shortest_path(origin, destination);
            println!("{}", output::query_outcome_line(&result, cli.json));
            Ok(())
        }
        Some(Command::Neighbors { id }) => {
            let result = graph.neighbors_of(id);
            println!("{}", output::neighbors_outcome_line(id, &result, cli.json));
            Ok(())
        }
        Some(Command::Stats) => {
            println!("{}", output::stats_line(&graph.stats(), cli.json));
            Ok(())
        }
        Some(Command::Repl) | None => repl::run(&graph, cli.json),
    }
}

fn init_tracing(verbosity: u8) {
    let default_level = match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

fn report_fatal(err: &HopError) {
    eprintln!("error: {err}");
    let mut cause = std::error::Error::source(err);
    while let Some(c) = cause {
        eprintln!("  caused by: {c}");
        cause = c.source();
    }
}
