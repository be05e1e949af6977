//! CLI entry point: `commute-router <input.json> [<output.json>] [--debug]`
//! (spec §6). Builds an initial solution with the Solomon I1 constructor,
//! improves it with ALNS unless `--no-alns` is given, and writes the result
//! document.

use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use commute_router::config::OptimizerConfig;
use commute_router::io::{input, output};
use commute_router::model::Solution;
use commute_router::{alns, constructive, RouterError};

/// Employee commute routing: Solomon I1 insertion construction plus ALNS
/// improvement over time-windowed, capacitated vehicle trips.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    /// Input document (spec §6).
    input: PathBuf,

    /// Output document path.
    #[arg(default_value = "output.json")]
    output: PathBuf,

    /// Emit debug-level diagnostics and a human-readable report on stderr.
    #[arg(long)]
    debug: bool,

    /// Overrides the ALNS iteration budget (default from `AlnsConfig`).
    #[arg(long)]
    iterations: Option<usize>,

    /// RNG seed for the ALNS run (default from `AlnsConfig`).
    #[arg(long)]
    seed: Option<u64>,

    /// Skips ALNS entirely, emitting the constructor's solution as-is.
    #[arg(long)]
    no_alns: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = if cli.debug { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(filter))
        .with_writer(std::io::stderr)
        .init();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("ERROR: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), RouterError> {
    let raw = fs::read_to_string(&cli.input).map_err(|source| RouterError::Io {
        path: cli.input.clone(),
        source,
    })?;
    tracing::debug!(path = %cli.input.display(), "loading input document");

    let doc: serde_json::Value = serde_json::from_str(&raw)?;
    let (mut solution, office) = input::parse(&doc);
    tracing::debug!(
        employees = solution.employees.len(),
        vehicles = solution.vehicles.len(),
        "parsed input document"
    );

    let mut config = OptimizerConfig::default();
    if let Some(iterations) = cli.iterations {
        config.alns.iterations = iterations;
    }
    if let Some(seed) = cli.seed {
        config.alns.seed = seed;
    }

    constructive::solve(
        &mut solution,
        office,
        None,
        &config.insertion,
        config.sharing_caps_enabled,
    );
    tracing::debug!(
        routed = solution.employees.iter().filter(|e| e.is_routed).count(),
        cost = solution.total_cost(),
        "constructed initial solution"
    );

    if !cli.no_alns {
        let outcome = alns::improve(
            &mut solution,
            office,
            None,
            &config.insertion,
            &config.alns,
            config.sharing_caps_enabled,
        );
        tracing::debug!(
            iterations_run = outcome.iterations_run,
            state = ?outcome.state,
            best_score = outcome.best_score,
            "ALNS run complete"
        );
    }

    if cli.debug {
        print_report(&solution);
    }

    let doc_out = output::build(&solution, doc);
    let text = serde_json::to_string_pretty(&doc_out).map_err(|source| RouterError::Write {
        path: cli.output.clone(),
        source: std::io::Error::new(std::io::ErrorKind::InvalidData, source),
    })?;
    fs::write(&cli.output, text).map_err(|source| RouterError::Write {
        path: cli.output.clone(),
        source,
    })?;
    tracing::info!(path = %cli.output.display(), "wrote output document");

    Ok(())
}

/// A second, differently-shaped summary printed to stderr alongside the
/// canonical output file, gated behind `--debug` so stdout stays reserved
/// for JSON consumers piping the result (spec B.2).
fn print_report(solution: &Solution) {
    let routed = solution.employees.iter().filter(|e| e.is_routed).count();
    let total_trips: usize = solution
        .vehicles
        .iter()
        .flat_map(|v| v.trips.iter())
        .filter(|t| !t.is_idle())
        .count();

    eprintln!("--- commute-router report ---");
    eprintln!("employees_routed: {routed}/{}", solution.employees.len());
    eprintln!("total_trips: {total_trips}");
    eprintln!("total_cost: {:.2}", solution.total_cost());
    for e in solution.unrouted() {
        let reason = solution
            .unrouted_reasons
            .get(&e.id)
            .cloned()
            .unwrap_or_else(|| "unrouted".to_string());
        eprintln!("unrouted: {} ({reason})", e.id);
    }
}
