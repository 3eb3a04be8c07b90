//! Dino Runner Headless Balance Simulator
//!
//! Plays seeded runs with the autopilot through the exact same `tick()`
//! function as the terminal game and prints score statistics.
//!
//! Usage:
//!   cargo run --bin simulator -- [OPTIONS]
//!
//! Options:
//!   --runs N        Number of runs with incrementing seeds (default: 100)
//!   --seed N        Base RNG seed (default: 42)
//!   --max-ticks N   Cut a run off after N ticks (default: 100000)
//!   --tuning FILE   Gameplay tuning JSON
//!   --verbose       Log every run
//!   --quiet         Only final summary line

use dino_runner::simulator::{run_simulation, SimConfig};
use dino_runner::utils::{logging, persistence};
use std::path::PathBuf;
use std::process::ExitCode;
use std::str::FromStr;

// ── CLI Configuration ────────────────────────────────────────────────

struct Cli {
    config: SimConfig,
    tuning_path: Option<PathBuf>,
}

fn parse_number<T: FromStr>(flag: &str, value: Option<&String>) -> Result<T, String> {
    value
        .and_then(|v| v.parse().ok())
        .ok_or_else(|| format!("{flag} requires a number"))
}

fn parse_args(args: &[String]) -> Result<Option<Cli>, String> {
    let mut config = SimConfig::default();
    let mut tuning_path = None;
    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--runs" => {
                i += 1;
                config.num_runs = parse_number("--runs", args.get(i))?;
            }
            "--seed" => {
                i += 1;
                config.seed = Some(parse_number("--seed", args.get(i))?);
            }
            "--max-ticks" => {
                i += 1;
                config.max_ticks_per_run = parse_number("--max-ticks", args.get(i))?;
            }
            "--tuning" => {
                i += 1;
                let path = args.get(i).ok_or("--tuning requires a file")?;
                tuning_path = Some(PathBuf::from(path));
            }
            "--verbose" => config.verbosity = 2,
            "--quiet" => config.verbosity = 0,
            "--help" | "-h" => return Ok(None),
            other => return Err(format!("Unknown argument: {other}")),
        }
        i += 1;
    }
    Ok(Some(Cli {
        config,
        tuning_path,
    }))
}

fn print_usage() {
    eprintln!(
        "Dino Runner Headless Simulator\n\
         \n\
         Usage: simulator [OPTIONS]\n\
         \n\
         Options:\n\
         \x20 --runs N        Number of runs with incrementing seeds (default: 100)\n\
         \x20 --seed N        Base RNG seed (default: 42)\n\
         \x20 --max-ticks N   Cut a run off after N ticks (default: 100000)\n\
         \x20 --tuning FILE   Gameplay tuning JSON (default: ~/.dino-runner/tuning.json)\n\
         \x20 --verbose       Log every run\n\
         \x20 --quiet         Only final summary line\n\
         \x20 --help, -h      Show this help"
    );
}

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().collect();
    let mut cli = match parse_args(&args) {
        Ok(Some(cli)) => cli,
        Ok(None) => {
            print_usage();
            return ExitCode::SUCCESS;
        }
        Err(message) => {
            eprintln!("{message}");
            print_usage();
            return ExitCode::FAILURE;
        }
    };

    let default_level = match cli.config.verbosity {
        0 => "warn",
        _ => "info",
    };
    logging::init_stderr(default_level);

    cli.config.tuning = match persistence::load_tuning(cli.tuning_path.as_deref()) {
        Ok(tuning) => tuning,
        Err(e) => {
            eprintln!("Failed to load tuning: {e}");
            return ExitCode::FAILURE;
        }
    };

    log::info!(
        "simulating {} runs from seed {:?}",
        cli.config.num_runs,
        cli.config.seed
    );
    let report = run_simulation(&cli.config);

    if cli.config.verbosity == 0 {
        println!("{}", report.summary_line());
    } else {
        print!("{}", report.to_text());
    }
    ExitCode::SUCCESS
}
