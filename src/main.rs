//! CLI tool to tokenize a command line and resolve its flags.

use std::fmt;
use std::process::ExitCode;

use flagline::{FlagRule, FlagTable, Resolution, RuleError};
use flexi_logger::{Logger, LoggerHandle};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
enum Setting {
    Size,
}

impl fmt::Display for Setting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Size => write!(f, "SIZE"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SizeValue {
    Short,
    Long,
}

impl fmt::Display for SizeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Short => write!(f, "SHORT"),
            Self::Long => write!(f, "LONG"),
        }
    }
}

fn sample_table() -> Result<FlagTable<Setting, SizeValue>, RuleError> {
    FlagTable::new(vec![
        FlagRule::new(Setting::Size, SizeValue::Short)
            .aliases(["-s", "--short"])
            .required(),
        FlagRule::new(Setting::Size, SizeValue::Long)
            .aliases(["-l", "--long"])
            .forbidden(),
    ])
}

/// `RUST_LOG` wins over the `-v` default.
fn init_logging(verbose: bool) -> Option<LoggerHandle> {
    let default = if verbose { "debug" } else { "warn" };
    match Logger::try_with_env_or_str(default).and_then(Logger::start) {
        Ok(handle) => Some(handle),
        Err(e) => {
            eprintln!("warning: logging disabled: {e}");
            None
        }
    }
}

fn print_usage() {
    eprintln!("Usage: flagline [-v] <command> <line...>");
    eprintln!();
    eprintln!("Commands:");
    eprintln!("  tokenize  Print the tokens of a command line");
    eprintln!("  resolve   Resolve flags against the sample table");
    eprintln!();
    eprintln!("Sample table:");
    eprintln!("  -s, --short \"arg\"  SIZE = SHORT (argument required)");
    eprintln!("  -l, --long         SIZE = LONG");
    eprintln!();
    eprintln!("Examples:");
    eprintln!("  flagline tokenize 'print -s \"big\" now'");
    eprintln!("  flagline resolve 'print --long now'");
}

fn print_resolution(resolution: &Resolution<Setting, SizeValue>) {
    for config in resolution.sorted_configs() {
        println!(
            "{} = {} {}",
            config.config_name, config.config_value, config.argument
        );
    }
    println!("residual: {}", flagline::format(&resolution.residual));
}

fn main() -> ExitCode {
    let mut args: Vec<String> = std::env::args().skip(1).collect();

    let verbose = args.first().is_some_and(|a| a == "-v" || a == "--verbose");
    if verbose {
        args.remove(0);
    }

    if args.is_empty() || args[0] == "--help" || args[0] == "-h" {
        print_usage();
        return ExitCode::from(2);
    }

    let _logger = init_logging(verbose);

    let command = args[0].as_str();
    let line = args[1..].join(" ");

    if line.is_empty() {
        eprintln!("Error: no command line specified");
        return ExitCode::from(2);
    }

    let result = match command {
        "tokenize" => flagline::tokenize(&line)
            .map(|tokens| {
                for token in &tokens {
                    println!("{:>3} {:<10} {}", token.column, token.kind, token.text);
                }
            })
            .map_err(flagline::Error::from),
        "resolve" => {
            let table = match sample_table() {
                Ok(table) => table,
                Err(e) => {
                    eprint!("{}", flagline::Error::from(e).framed());
                    return ExitCode::FAILURE;
                }
            };
            flagline::parse_line(&line, &table).map(|res| print_resolution(&res))
        }
        _ => {
            eprintln!("Unknown command: {command}");
            return ExitCode::from(2);
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprint!("{}", e.framed());
            ExitCode::FAILURE
        }
    }
}
