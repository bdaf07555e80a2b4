use std::error::Error as _;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

use clap::{ArgAction, Parser};
use project_euler::{Config, Error, PROBLEMS, data_file, logging, run_problem};
use tracing::info;

#[derive(Parser)]
#[command(name = "project-euler")]
#[command(about = "Run Project Euler solutions")]
struct Cli {
    /// Run a specific problem by number
    #[arg(short, long)]
    problem: Option<u32>,

    /// Run all available problems
    #[arg(short, long)]
    all: bool,

    /// List the available problems and the data files they read
    #[arg(short, long)]
    list: bool,

    /// Directory holding the problem data files
    #[arg(short, long, env = "EULER_DATA_DIR")]
    data_dir: Option<PathBuf>,

    /// Silence all logging
    #[arg(short, long)]
    quiet: bool,

    /// Increase logging verbosity (repeatable)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

/// The error and its chain of causes on one line.
fn describe(err: &Error) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}

fn list() {
    for &id in PROBLEMS {
        match data_file(id) {
            Some(file) => println!("{:>3}  (reads {})", id, file),
            None => println!("{:>3}", id),
        }
    }
}

/// Run the problems in order, printing each answer. Returns false if any
/// problem failed or is not implemented.
fn run(ids: &[u32], config: &Config) -> bool {
    let mut ok = true;
    for &id in ids {
        let start = Instant::now();
        match run_problem(id, config) {
            Some(Ok(answer)) => {
                println!("The answer to Problem {} is: {}", id, answer);
                info!(problem = id, elapsed = ?start.elapsed(), "solved");
            }
            Some(Err(err)) => {
                eprintln!("Problem {} failed: {}", id, describe(&err));
                ok = false;
            }
            None => {
                eprintln!("Problem {} not implemented", id);
                ok = false;
            }
        }
    }
    ok
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // A single problem shows its debug output; --all stays at info.
    let single = cli.problem.is_some() && !cli.all;
    logging::init(logging::level_for(single, cli.verbose, cli.quiet));

    let config = Config::new(cli.data_dir);
    info!(data_dir = %config.data_dir.display(), "configured");

    let ids: Vec<u32> = if cli.list {
        list();
        return ExitCode::SUCCESS;
    } else if cli.all {
        PROBLEMS.to_vec()
    } else if let Some(id) = cli.problem {
        vec![id]
    } else {
        eprintln!("Usage: project-euler --problem <N> or --all");
        eprintln!("Available problems: {:?}", PROBLEMS);
        return ExitCode::SUCCESS;
    };

    if run(&ids, &config) {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
