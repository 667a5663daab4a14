use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing::debug;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

use u_itinerary::models::Catalog;
use u_itinerary::optimize::{RouteOptimizer, DEFAULT_MAX_STOPS};
use u_itinerary::planner::TripPlanner;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Format {
    Text,
    Json,
    Geojson,
}

/// Build a day-by-day sightseeing schedule with shortest-path stop order.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Trip length in days.
    #[arg(
        short,
        long,
        default_value_t = 1,
        value_parser = clap::value_parser!(u8).range(1..=7)
    )]
    days: u8,

    /// JSON catalog of stops; the built-in Seoul list is used when absent.
    #[arg(short, long)]
    catalog: Option<PathBuf>,

    #[arg(short, long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Largest number of stops ordered exhaustively in one day.
    #[arg(long, default_value_t = DEFAULT_MAX_STOPS)]
    max_stops: usize,
}

/// Loads the catalog, plans the trip and renders it in the requested format.
fn run(args: &Args) -> Result<String> {
    let catalog = match &args.catalog {
        Some(path) => Catalog::from_path(path)
            .with_context(|| format!("loading catalog {}", path.display()))?,
        None => Catalog::seoul(),
    };

    let optimizer = RouteOptimizer::new().with_max_stops(args.max_stops);
    let itinerary = TripPlanner::new(&catalog)
        .with_optimizer(optimizer)
        .plan(usize::from(args.days))
        .context("planning trip")?;

    let rendered = match args.format {
        Format::Text => itinerary.to_string(),
        Format::Json => serde_json::to_string_pretty(&itinerary)? + "\n",
        Format::Geojson => serde_json::to_string_pretty(&itinerary.to_geojson())? + "\n",
    };
    Ok(rendered)
}

fn main() -> Result<()> {
    let env_filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .from_env_lossy();
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    debug!(?args, "parsed arguments");

    let rendered = run(&args)?;

    let mut stdout = std::io::stdout().lock();
    stdout
        .write_all(rendered.as_bytes())
        .context("writing itinerary")?;
    stdout.flush().context("writing itinerary")?;

    Ok(())
}
