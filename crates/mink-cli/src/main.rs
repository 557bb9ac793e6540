use anyhow::Result;
use chrono::{FixedOffset, Local, Offset};
use clap::{Parser, Subcommand};
use mink_datetime::DateValue;
use mink_harness::{Checker, StdoutSink, SuiteReport, run_full_year_suite};
use tracing_subscriber::filter::EnvFilter;

#[derive(Parser)]
#[command(name = "mink", version, about = "Date-mutation conformance harness")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the full-year mutation suite against stdout
    Check {
        /// Fixed offset for local fields, seconds east of UTC
        /// (defaults to the process-local offset)
        #[arg(long, allow_negative_numbers = true)]
        utc_offset_secs: Option<i32>,
        /// Emit the report as JSON instead of the text summary
        #[arg(long)]
        json: bool,
    },
    /// Parse a date string and print its renderings
    Render {
        input: String,
        /// Print the UTC renderings instead of the local ones
        #[arg(long)]
        utc: bool,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Check {
            utc_offset_secs,
            json,
        } => run_check(utc_offset_secs, json),
        Commands::Render { input, utc } => run_render(&input, utc),
    }
}

fn run_check(utc_offset_secs: Option<i32>, json: bool) -> Result<()> {
    let offset = match utc_offset_secs {
        Some(secs) => FixedOffset::east_opt(secs)
            .ok_or_else(|| anyhow::anyhow!("offset out of range: {secs} seconds"))?,
        None => Local::now().offset().fix(),
    };

    tracing::debug!(%offset, "running full-year suite");
    let mut checker = Checker::new(StdoutSink);
    run_full_year_suite(&mut checker, offset);

    let report = SuiteReport::from_checker(&checker);
    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        report.print_summary();
    }

    if !report.all_passed() {
        std::process::exit(1);
    }
    Ok(())
}

fn run_render(input: &str, utc: bool) -> Result<()> {
    let date: DateValue = input.parse()?;
    if utc {
        println!("{}", date.to_utc_string());
        if let Some(iso) = date.to_iso_string() {
            println!("{iso}");
        }
    } else {
        println!("{date}");
        println!("{}", date.to_locale_string());
    }
    Ok(())
}
