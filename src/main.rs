use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::fs;
use std::path::{Path, PathBuf};

use wca_results::output::{self, RecordReport};
use wca_results::rules::{EventLookup, FormatLookup, RuleBook, RuleLookup};
use wca_results::scoring::{self, ResultRecord};
use wca_results::solve_time::{self, SolveTime};

const EXIT_SUCCESS: i32 = 0;
const EXIT_INVALID: i32 = 1;
const EXIT_CONFIG: i32 = 4;

#[derive(Subcommand, Debug)]
enum Commands {
    /// Validate a YAML or JSON file containing a list of result records
    Check {
        /// Path to the results file
        file: PathBuf,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },
    /// Compute best and average for a set of attempts
    Compute {
        /// Event id (e.g. 333, 333fm)
        #[arg(short, long)]
        event: String,

        /// Format id (1, 2, 3, a, m)
        #[arg(short, long)]
        format: String,

        /// The competitor missed the cutoff of a combined round
        #[arg(long)]
        missed_cutoff: bool,

        /// Attempts as displayed: 12.34, 1:05.32, DNF, DNS, skip, or move counts
        #[arg(required = true)]
        attempts: Vec<String>,
    },
    /// Print the canonical display of an encoded attempt value
    Format {
        /// Event id (e.g. 333, 333fm)
        #[arg(short, long)]
        event: String,

        /// Encoded value (-1 DNF, -2 DNS, 0 skipped)
        #[arg(allow_negative_numbers = true)]
        value: i64,
    },
}

#[derive(Parser, Debug)]
#[command(name = "wca-results")]
#[command(about = "Validate competition results and recompute best/average", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to a rules file (defaults to ~/.config/wca-results/rules.yaml if present)
    #[arg(short, long, global = true)]
    rules: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

fn main() {
    let cli = Cli::parse();
    wca_results::logging::init_tracing(cli.verbose);

    let rules = match wca_results::config::load_rules(cli.rules) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("Config error: {:#}", e);
            std::process::exit(EXIT_CONFIG);
        }
    };

    let code = match cli.command {
        Commands::Check { file, json } => run_check(&rules, &file, json),
        Commands::Compute {
            event,
            format,
            missed_cutoff,
            attempts,
        } => run_compute(&rules, &event, &format, missed_cutoff, &attempts),
        Commands::Format { event, value } => run_format(&rules, &event, value),
    };

    match code {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            eprintln!("Error: {:#}", e);
            std::process::exit(EXIT_CONFIG);
        }
    }
}

/// Read a list of records, choosing the parser by file extension.
fn read_records(path: &Path) -> Result<Vec<ResultRecord>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read results file at {}", path.display()))?;

    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
    let records = if is_json {
        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse results: invalid JSON in {}", path.display()))?
    } else {
        serde_saphyr::from_str(&content)
            .with_context(|| format!("Failed to parse results: invalid YAML in {}", path.display()))?
    };
    Ok(records)
}

fn run_check(rules: &RuleBook, file: &Path, json: bool) -> Result<i32> {
    let records = read_records(file)?;
    tracing::debug!(count = records.len(), file = %file.display(), "read results");

    let reports: Vec<RecordReport> = records
        .iter()
        .map(|record| RecordReport {
            record,
            errors: scoring::validate_with(record, rules),
        })
        .collect();

    if json {
        println!("{}", output::format_json(&reports)?);
    } else {
        println!("{}", output::format_report(&reports, output::should_use_colors()));
    }

    if reports.iter().all(RecordReport::is_valid) {
        Ok(EXIT_SUCCESS)
    } else {
        Ok(EXIT_INVALID)
    }
}

fn run_compute(
    rules: &RuleBook,
    event_id: &str,
    format_id: &str,
    missed_cutoff: bool,
    inputs: &[String],
) -> Result<i32> {
    let event = rules
        .lookup_event(event_id)
        .with_context(|| format!("Unknown event '{}'", event_id))?;
    let format = rules
        .lookup_format(format_id)
        .with_context(|| format!("Unknown format '{}'", format_id))?;

    let attempts = inputs
        .iter()
        .map(|input| solve_time::parse_solve_time(input, event))
        .collect::<std::result::Result<Vec<SolveTime>, _>>()
        .context("Invalid attempt")?;

    if let Err(reason) = scoring::check_solve_count(&attempts, Some(format)) {
        eprintln!("Note: {}; no average is computed.", reason);
    }

    let best = scoring::compute_best(&attempts);
    let average = scoring::compute_average(
        &attempts,
        event,
        format,
        rules.legacy_average_events(),
        missed_cutoff,
    );
    println!("{}", output::format_computed(best, average, event));
    Ok(EXIT_SUCCESS)
}

fn run_format(rules: &RuleBook, event_id: &str, value: i64) -> Result<i32> {
    let event = rules
        .lookup_event(event_id)
        .with_context(|| format!("Unknown event '{}'", event_id))?;
    println!("{}", solve_time::format_solve_time(&SolveTime::from_encoded(value), event));
    Ok(EXIT_SUCCESS)
}
