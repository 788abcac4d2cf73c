//! Scrape output deduplication.
//!
//! Keeps the first row seen for each listing, keyed by `data_id` or, when
//! that is empty, by title + latitude + longitude.

use std::ffi::OsString;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{bail, Context, Result};
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use landgrid::records::{open_records, write_records, DedupMode, Deduplicator};

#[derive(Parser, Debug)]
#[command(name = "dedup")]
#[command(about = "Deduplicate scraped listing CSV results")]
struct Args {
    /// Input CSV file (raw scrape output)
    input: PathBuf,

    /// Output CSV file (deduplicated)
    output: Option<PathBuf>,

    /// Show stats without writing output
    #[arg(long)]
    stats_only: bool,
}

/// Parse the command line. Malformed invocations and `--help` are handled
/// by clap; a missing OUTPUT without `--stats-only` is reported as a
/// one-line error.
fn parse_args<I, T>(args: I) -> Result<Args>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let args = Args::try_parse_from(args).unwrap_or_else(|e| e.exit());
    if args.output.is_none() && !args.stats_only {
        bail!("Provide an output file path or use --stats-only");
    }
    Ok(args)
}

fn main() {
    if let Err(e) = run() {
        eprintln!("ERROR: {e:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let args = parse_args(std::env::args_os())?;

    let mode = if args.stats_only {
        DedupMode::StatsOnly
    } else {
        DedupMode::Collect
    };

    let reader = open_records(&args.input)
        .with_context(|| format!("Failed to read {}", args.input.display()))?;
    let schema = reader.schema().clone();

    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} [{elapsed_precise}] {pos} rows ({per_sec})")?,
    );
    pb.enable_steady_tick(Duration::from_millis(100));

    let mut deduplicator = Deduplicator::new(mode);
    for record in reader {
        let record = record.with_context(|| format!("Failed to parse {}", args.input.display()))?;
        deduplicator.push(record);
        pb.inc(1);
    }
    pb.finish_and_clear();

    let (kept, stats) = deduplicator.finish();

    if let (DedupMode::Collect, Some(output)) = (mode, &args.output) {
        write_records(output, &schema, &kept)
            .with_context(|| format!("Failed to write {}", output.display()))?;
        println!("Written to: {}", output.display());
    }

    info!("Processed {} rows from {}", stats.total, args.input.display());
    println!("\n{}", stats);

    Ok(())
}
