//! scenario-runner: headless driver for steering scenarios.
//!
//! Usage:
//!   scenario-runner run --scenario walls.json --ticks 600 --seed 7 --every 10
//!   scenario-runner demo --ticks 300
//!
//! Prints one JSON snapshot per line to stdout. Diagnostics go to stderr,
//! filtered by RUST_LOG (default: info).

use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::process;

use steering_sim::{Scenario, SimError};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        process::exit(1);
    }

    let result = match args[1].as_str() {
        "run" => cmd_run(&args[2..]),
        "demo" => cmd_demo(&args[2..]),
        "help" | "--help" | "-h" => {
            print_usage();
            Ok(())
        }
        other => {
            eprintln!("Unknown command: {other}");
            print_usage();
            process::exit(1);
        }
    };

    if let Err(err) = result {
        error!(%err, "scenario failed");
        process::exit(1);
    }
}

fn print_usage() {
    eprintln!(
        "scenario-runner: context-steering scenario driver\n\
         \n\
         Commands:\n\
         \n\
         run       Run a scenario file\n\
         \n\
           --scenario <path>  Scenario JSON file\n\
           --ticks <N>        Ticks to run (default: from the scenario)\n\
           --seed <S>         RNG seed (default: from the scenario)\n\
           --every <K>        Print every K-th snapshot (default: 1)\n\
         \n\
         demo      Run the built-in demo scenario\n\
         \n\
           --ticks <N>        Ticks to run (default: 600)\n\
           --every <K>        Print every K-th snapshot (default: 1)\n\
         \n\
         Examples:\n\
         \n\
           scenario-runner run --scenario walls.json --every 10\n\
           RUST_LOG=steering_ai=debug scenario-runner demo --ticks 120\n"
    );
}

/// Value following `flag`, if present.
fn flag_value<'a>(args: &'a [String], flag: &str) -> Option<&'a str> {
    args.iter()
        .position(|arg| arg == flag)
        .and_then(|i| args.get(i + 1))
        .map(String::as_str)
}

fn parse_number(args: &[String], flag: &str) -> Option<u64> {
    let raw = flag_value(args, flag)?;
    match raw.parse::<u64>() {
        Ok(n) => Some(n),
        Err(_) => {
            eprintln!("Error: {flag} expects a non-negative integer, got {raw}");
            process::exit(1);
        }
    }
}

// --- Commands ---

fn cmd_run(args: &[String]) -> Result<(), SimError> {
    let path = match flag_value(args, "--scenario") {
        Some(p) => PathBuf::from(p),
        None => {
            eprintln!("Error: --scenario <path> is required");
            process::exit(1);
        }
    };

    let scenario = Scenario::load(&path)?;
    run_scenario(
        &scenario,
        parse_number(args, "--ticks"),
        parse_number(args, "--seed"),
        parse_number(args, "--every").unwrap_or(1),
    )
}

fn cmd_demo(args: &[String]) -> Result<(), SimError> {
    let scenario = Scenario::demo();
    run_scenario(
        &scenario,
        parse_number(args, "--ticks"),
        None,
        parse_number(args, "--every").unwrap_or(1),
    )
}

fn run_scenario(
    scenario: &Scenario,
    ticks: Option<u64>,
    seed: Option<u64>,
    every: u64,
) -> Result<(), SimError> {
    let ticks = ticks.unwrap_or(scenario.ticks);
    let every = every.max(1);
    let mut engine = scenario.build(seed)?;
    info!(name = %scenario.name, ticks, "running scenario");

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    for tick in 0..ticks {
        engine.queue_commands(scenario.commands_at(tick).cloned());
        let snapshot = engine.tick();
        if (tick + 1) % every == 0 {
            serde_json::to_writer(&mut out, &snapshot).map_err(|e| stdout_error(e.into()))?;
            writeln!(out).map_err(stdout_error)?;
        }
    }
    out.flush().map_err(stdout_error)?;

    info!(elapsed_secs = engine.time().elapsed_secs, "scenario finished");
    Ok(())
}

fn stdout_error(source: io::Error) -> SimError {
    SimError::Io {
        path: PathBuf::from("<stdout>"),
        source,
    }
}
