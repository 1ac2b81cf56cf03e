use std::{fs, process::ExitCode};

use arith_eval::evaluate;
use clap::{ArgAction, Parser};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// arith-eval evaluates arithmetic expressions built from numbers, the
/// operators `+ - * /` and parentheses.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells arith-eval to read expressions from a file, one per line, instead
    /// of evaluating the argument itself. Text after `#` is a comment.
    #[arg(short, long)]
    file: bool,

    /// Raises the log level on stderr; repeat for more detail. `RUST_LOG`
    /// takes precedence when set.
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    contents: String,
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt().with_env_filter(filter)
                             .with_writer(std::io::stderr)
                             .init();
}

/// Strips a trailing `#` comment and surrounding whitespace from a line.
fn strip_comment(line: &str) -> &str {
    line.split_once('#').map_or(line, |(code, _)| code).trim()
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(args.verbose);

    if !args.file {
        return match evaluate(&args.contents) {
            Ok(value) => {
                println!("{value}");
                ExitCode::SUCCESS
            },
            Err(e) => {
                eprintln!("{e}");
                ExitCode::FAILURE
            },
        };
    }

    let Ok(script) = fs::read_to_string(&args.contents) else {
        eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                  &args.contents);
        return ExitCode::FAILURE;
    };
    info!(path = %args.contents, "evaluating expressions from file");

    let mut failures = 0_usize;
    for (index, line) in script.lines().enumerate() {
        let expression = strip_comment(line);
        if expression.is_empty() {
            continue;
        }

        match evaluate(expression) {
            Ok(value) => println!("{value}"),
            Err(e) => {
                failures += 1;
                eprintln!("Error on line {}: {e}", index + 1);
            },
        }
    }

    if failures > 0 {
        warn!(failures, "some expressions failed");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
