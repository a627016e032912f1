//! fieldstrip CLI — removes a string field from a text file in place.
//!
//! Usage:
//!   fieldstrip [PATH] [--field name] [--atomic] [--dry-run] [--json] [-v]

use clap::{ArgAction, Parser};
use fieldstrip::{FieldStripper, StripReport, StripResult, WriteMode, DEFAULT_FIELD};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "fieldstrip",
    version,
    about = "Strip string-valued fields from object-literal-like text files"
)]
struct Cli {
    /// File to rewrite in place
    #[arg(default_value = "import-facts.js")]
    path: PathBuf,
    /// Key of the field to remove
    #[arg(long, default_value = DEFAULT_FIELD)]
    field: String,
    /// Write to a temp file and rename it over the target
    #[arg(long)]
    atomic: bool,
    /// Count occurrences without writing
    #[arg(long)]
    dry_run: bool,
    /// Print the report as JSON
    #[arg(long)]
    json: bool,
    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: &Cli) -> StripResult<StripReport> {
    let mode = if cli.atomic {
        WriteMode::Atomic
    } else {
        WriteMode::Overwrite
    };
    FieldStripper::new()
        .with_field(&cli.field)?
        .with_write_mode(mode)
        .with_dry_run(cli.dry_run)
        .strip(&cli.path)
}

fn print_report(report: &StripReport, json: bool) -> i32 {
    if json {
        return match serde_json::to_string_pretty(report) {
            Ok(s) => {
                println!("{}", s);
                0
            }
            Err(e) => {
                eprintln!("Error: {}", e);
                1
            }
        };
    }
    if report.written {
        println!(
            "✅ removed all \"{}\" fields from {} ({} removed)",
            report.field,
            report.path.display(),
            report.removed
        );
    } else {
        println!(
            "would remove {} \"{}\" field(s) from {}",
            report.removed,
            report.field,
            report.path.display()
        );
    }
    0
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let code = match run(&cli) {
        Ok(report) => print_report(&report, cli.json),
        Err(e) => {
            eprintln!("Error: {}", e);
            1
        }
    };
    std::process::exit(code);
}
