//! Numerus command-line entry point.
//!
//! # Responsibility
//! - Parse arguments and optionally start file logging.
//! - Dispatch one-shot subcommands or the interactive REPL.

mod conversion;
mod repl;

use clap::{Parser, Subcommand};
use conversion::{convert, parse_operand};
use log::{error, info};
use numerus_core::service::calculator::apply;
use numerus_core::{default_log_level, init_logging, validate, Operator, RomanConverter};
use std::io;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(name = "numerus", version, about = "Roman numerals converter and calculator")]
struct Cli {
    #[arg(
        long,
        global = true,
        help = "Log level: trace|debug|info|warn|error (defaults by build mode)"
    )]
    log_level: Option<String>,
    #[arg(
        long,
        global = true,
        help = "Absolute directory for rolling log files; logging is off without it"
    )]
    log_dir: Option<String>,
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Convert integers to numerals and numerals to integers.
    Convert {
        #[arg(required = true, allow_hyphen_values = true)]
        inputs: Vec<String>,
    },
    /// Check numeral syntax without converting.
    Check {
        #[arg(allow_hyphen_values = true)]
        input: String,
    },
    /// Evaluate `LEFT OP RIGHT` with operator + - * / % ^.
    Calc {
        #[arg(allow_hyphen_values = true)]
        left: String,
        #[arg(allow_hyphen_values = true)]
        op: String,
        #[arg(allow_hyphen_values = true)]
        right: String,
    },
    /// Start the interactive converter (default).
    Repl,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Some(log_dir) = cli.log_dir.as_deref() {
        let level = cli.log_level.as_deref().unwrap_or(default_log_level());
        if let Err(err) = init_logging(level, log_dir) {
            eprintln!("numerus: {err}");
            return ExitCode::FAILURE;
        }
    }

    let command = cli.command.unwrap_or(Commands::Repl);
    info!("event=cli_start module=cli status=ok command={}", command_name(&command));

    match command {
        Commands::Convert { inputs } => run_convert(&inputs),
        Commands::Check { input } => run_check(&input),
        Commands::Calc { left, op, right } => run_calc(&left, &op, &right),
        Commands::Repl => {
            let stdin = io::stdin();
            let stdout = io::stdout();
            match repl::Repl::new(stdin.lock(), stdout.lock()).run() {
                Ok(()) => ExitCode::SUCCESS,
                Err(err) => {
                    error!("event=repl_end module=cli status=error error={err}");
                    eprintln!("numerus: {err}");
                    ExitCode::FAILURE
                }
            }
        }
    }
}

fn command_name(command: &Commands) -> &'static str {
    match command {
        Commands::Convert { .. } => "convert",
        Commands::Check { .. } => "check",
        Commands::Calc { .. } => "calc",
        Commands::Repl => "repl",
    }
}

fn run_convert(inputs: &[String]) -> ExitCode {
    let converter = RomanConverter::new();
    let mut failed = false;
    for input in inputs {
        match convert(&converter, input) {
            Ok(conversion) => println!("{conversion}"),
            Err(err) => {
                failed = true;
                eprintln!("{input}: {err}");
            }
        }
    }
    if failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

fn run_check(input: &str) -> ExitCode {
    match validate(input) {
        Ok(canonical) => {
            println!("valid: {canonical}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            println!("invalid: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run_calc(left: &str, op: &str, right: &str) -> ExitCode {
    let op = match op.parse::<Operator>() {
        Ok(op) => op,
        Err(err) => {
            eprintln!("numerus: {err}");
            return ExitCode::FAILURE;
        }
    };
    let (one, two) = match (parse_operand(left), parse_operand(right)) {
        (Ok(one), Ok(two)) => (one, two),
        (Err(err), _) | (_, Err(err)) => {
            eprintln!("numerus: {err}");
            return ExitCode::FAILURE;
        }
    };

    match apply(op, &one, &two) {
        Ok(result) => {
            println!("{result}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("numerus: {err}");
            ExitCode::FAILURE
        }
    }
}
