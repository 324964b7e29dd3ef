//! CLI administration tool for parcel-tracker.
//!
//! Loads a seed file into the in-memory stores and inspects them through
//! the use cases running in the client context, so every record comes back
//! as a live entity.
//!
//! # Usage
//!
//! ```bash
//! # List carriers
//! cargo run --bin admin -- --seed seed.json carriers
//!
//! # List trackers
//! cargo run --bin admin -- --seed seed.json trackers
//!
//! # Show the delivery status of a parcel
//! cargo run --bin admin -- --seed seed.json delivery kr.epost 123456
//! ```
//!
//! # Environment Variables
//!
//! - `SEED_FILE`: used when `--seed` is not given

use parcel_tracker::application::context::ExecutionContext;
use parcel_tracker::application::use_cases::{CarrierUseCase, TrackerUseCase};
use parcel_tracker::domain::representation::Representation;
use parcel_tracker::dto::Envelope;
use parcel_tracker::infrastructure::memory::{
    MemoryCarrierRepository, MemoryTrackerRepository, Seed,
};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use std::path::PathBuf;
use std::sync::Arc;

/// CLI tool for inspecting parcel-tracker data.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Seed file with carriers, trackers, and delivery snapshots
    #[arg(short, long, env = "SEED_FILE")]
    seed: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List carriers
    Carriers,

    /// List trackers
    Trackers,

    /// Show delivery status of a parcel
    Delivery {
        /// Carrier id (e.g., "kr.epost")
        carrier_id: String,

        /// Tracking number issued by the carrier
        tracking_number: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let seed = Seed::load(&cli.seed)
        .await
        .context("Failed to load seed data")?;
    let (carriers, trackers) = seed.into_repositories(true);
    let carriers = Arc::new(carriers);
    let trackers = Arc::new(trackers);

    match cli.command {
        Commands::Carriers => list_carriers(carriers).await?,
        Commands::Trackers => list_trackers(trackers, carriers).await?,
        Commands::Delivery {
            carrier_id,
            tracking_number,
        } => show_delivery(trackers, carriers, &carrier_id, &tracking_number).await?,
    }

    Ok(())
}

/// Turns an error envelope into an `anyhow` error carrying its message.
fn into_result<T>(envelope: Envelope<T>) -> Result<Option<T>> {
    if envelope.is_error() {
        anyhow::bail!(
            "{}",
            envelope.message().unwrap_or("repository returned an error")
        );
    }
    Ok(envelope.into_data())
}

/// Lists carriers in store order.
///
/// # Output Format
///
/// ```text
/// Carriers
///
///   No   ID               Name                 Display name
///   ───────────────────────────────────────────────────────────────
///   1    kr.epost         epost                Korea Post
/// ```
async fn list_carriers(repo: Arc<MemoryCarrierRepository>) -> Result<()> {
    println!("{}", "Carriers".bright_blue().bold());
    println!();

    let use_case = CarrierUseCase::new(repo, ExecutionContext::Client);
    let carriers: Vec<_> = into_result(use_case.get_carriers().await)?
        .unwrap_or_default()
        .into_iter()
        .map(Representation::into_entity)
        .collect();

    if carriers.is_empty() {
        println!("{}", "  No carriers found".yellow());
        return Ok(());
    }

    println!(
        "  {:<4} {:<16} {:<20} {}",
        "No".bright_white().bold(),
        "ID".bright_white().bold(),
        "Name".bright_white().bold(),
        "Display name".bright_white().bold()
    );
    println!("  {}", "─".repeat(63).bright_black());

    for carrier in &carriers {
        let crawlable = if carrier.is_crawlable() {
            "".normal()
        } else {
            " (not crawlable)".bright_black()
        };
        println!(
            "  {:<4} {:<16} {:<20} {}{}",
            carrier.no().to_string().bright_black(),
            carrier.id().cyan(),
            carrier.name(),
            carrier.display_name(),
            crawlable
        );
    }

    println!();
    println!(
        "  Total: {}",
        carriers.len().to_string().bright_white().bold()
    );
    println!();

    Ok(())
}

/// Lists trackers with their memos.
async fn list_trackers(
    trackers: Arc<MemoryTrackerRepository>,
    carriers: Arc<MemoryCarrierRepository>,
) -> Result<()> {
    println!("{}", "Trackers".bright_blue().bold());
    println!();

    let use_case = TrackerUseCase::new(trackers, carriers, ExecutionContext::Client);
    let trackers: Vec<_> = into_result(use_case.get_trackers().await)?
        .unwrap_or_default()
        .into_iter()
        .map(Representation::into_entity)
        .collect();

    if trackers.is_empty() {
        println!("{}", "  No trackers found".yellow());
        return Ok(());
    }

    for tracker in &trackers {
        println!(
            "  {} {} {}",
            tracker.id().bright_black(),
            tracker.label().cyan().bold(),
            format!("[{} {}]", tracker.carrier_id(), tracker.tracking_number()).bright_black()
        );
        for memo in tracker.memos() {
            println!("      - {memo}");
        }
    }

    println!();
    println!(
        "  Total: {}",
        trackers.len().to_string().bright_white().bold()
    );
    println!();

    Ok(())
}

/// Shows the delivery snapshot of one parcel, oldest event first.
async fn show_delivery(
    trackers: Arc<MemoryTrackerRepository>,
    carriers: Arc<MemoryCarrierRepository>,
    carrier_id: &str,
    tracking_number: &str,
) -> Result<()> {
    println!("{}", "Delivery".bright_blue().bold());
    println!();

    let use_case = TrackerUseCase::new(trackers, carriers, ExecutionContext::Client);
    let delivery = into_result(use_case.get_delivery(carrier_id, tracking_number).await)?
        .context("Delivery lookup returned no data")?;

    println!("  Carrier: {}", carrier_id.cyan());
    println!("  Number:  {}", tracking_number.cyan());
    println!("  From:    {}", delivery.from().name);
    println!("  To:      {}", delivery.to().name);
    println!("  State:   {}", delivery.state().name.green().bold());
    println!();

    for progress in delivery.progresses() {
        println!(
            "  {:<26} {:<16} {}",
            progress.time.bright_black(),
            progress.location.name,
            progress.description
        );
    }
    println!();

    Ok(())
}
