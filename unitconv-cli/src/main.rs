//! unitconv - command-line unit converter
//!
//! Modes:
//! - interactive: prompt, read a request per line, print a reply, until "exit"
//! - one-shot: `unitconv 10 km to miles` converts once and exits
//! - listing: `unitconv --list-units [--json]`
//!
//! Logs go to stderr; stdout carries only prompts and replies.

use std::io::{self, Write};
use std::process::ExitCode;

use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;
use unitconv::{list_catalog, render_listing, Converter, Session, SessionConfig};
use unitconv_units::CATALOG;

const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Parser)]
#[command(name = "unitconv")]
#[command(version, about = "Convert lengths, weights and temperatures", long_about = None)]
#[command(allow_negative_numbers = true)]
struct Cli {
    /// A single request, e.g. "10 km to miles" (omit for an interactive session)
    request: Vec<String>,

    /// Do not write the prompt before each line
    #[arg(long)]
    no_prompt: bool,

    /// Print the supported units and exit
    #[arg(long)]
    list_units: bool,

    /// With --list-units, print JSON instead of text
    #[arg(long, requires = "list_units")]
    json: bool,

    /// Increase log verbosity on stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    // RUST_LOG wins over -v when set
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    info!(version = VERSION, "unitconv started");

    let result = if cli.list_units {
        list_units(cli.json)
    } else if !cli.request.is_empty() {
        one_shot(&cli.request.join(" "))
    } else {
        interactive(cli.no_prompt)
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "unitconv failed");
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn interactive(no_prompt: bool) -> Result<(), Box<dyn std::error::Error>> {
    let config = SessionConfig::default().with_show_prompt(!no_prompt);
    let stdin = io::stdin();
    let stdout = io::stdout();

    let mut session = Session::new(stdin.lock(), stdout.lock(), config);
    session.run()?;
    Ok(())
}

fn one_shot(line: &str) -> Result<(), Box<dyn std::error::Error>> {
    let config = SessionConfig::default();
    if config.is_exit(line) {
        return Ok(());
    }

    let reply = Converter::new().evaluate(line);
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{}", reply)?;
    stdout.flush()?;
    Ok(())
}

fn list_units(json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let listing = list_catalog(&CATALOG);
    let output = if json {
        serde_json::to_string_pretty(&listing)?
    } else {
        render_listing(&listing)
    };

    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{}", output.trim_end())?;
    stdout.flush()?;
    Ok(())
}
