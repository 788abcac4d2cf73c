//! Grid generator.
//!
//! Emits land-only sample coordinates for a territory, one `lat,lon` pair
//! per line, ready to be fed to the scraper as search centers.

use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use landgrid::sampling::{GridGenerator, DEFAULT_SPACING_M};
use landgrid::Territory;

#[derive(Parser, Debug)]
#[command(name = "grid")]
#[command(about = "Generate land-only grid coordinates for a territory")]
struct Args {
    /// Show stats without generating output
    #[arg(long)]
    count: bool,

    /// Grid spacing in meters
    #[arg(long, default_value_t = DEFAULT_SPACING_M)]
    spacing: f64,

    /// Territory definition (TOML); defaults to the built-in Singapore outline
    #[arg(long)]
    territory: Option<PathBuf>,
}

fn main() {
    if let Err(e) = run() {
        eprintln!("ERROR: {e:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    // Logs go to stderr; stdout carries the coordinates
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let args = Args::parse();

    let territory = match &args.territory {
        Some(path) => Territory::load_from_file(path)
            .with_context(|| format!("Failed to load territory from {}", path.display()))?,
        None => Territory::singapore(),
    };
    info!("Territory: {}", territory.name);

    let generator = GridGenerator::new(territory);
    let points = generator.generate(args.spacing)?;

    if args.count {
        println!("{}", generator.summarize(&points, args.spacing));
        return Ok(());
    }

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    for point in &points {
        writeln!(out, "{}", point)?;
    }
    out.flush()?;

    Ok(())
}
