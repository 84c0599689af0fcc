//! # Irrigation CLI
//!
//! Reads a project snapshot (JSON), runs the statistics engine and prints a
//! zone table followed by the full JSON summary.
//!
//! ```text
//! irrigation_cli project.json
//! irrigation_cli project.json --json-only
//! RUST_LOG=debug irrigation_cli project.json --strict
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use irrigation_core::{summarize_project, PlanError, ProjectSnapshot, ProjectSummary};

/// Summarize an irrigation layout snapshot.
#[derive(Parser)]
#[command(name = "irrigation_cli")]
#[command(about = "Zone and project statistics for an irrigation layout")]
struct Cli {
    /// Path to the project snapshot JSON file.
    snapshot: PathBuf,

    /// Print only the JSON summary.
    #[arg(long)]
    json_only: bool,

    /// Reject snapshots with inconsistent records instead of summarizing them.
    #[arg(long)]
    strict: bool,
}

fn main() -> ExitCode {
    pretty_env_logger::init();
    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error [{}]: {}", e.error_code(), e);
            if let Ok(json) = serde_json::to_string_pretty(&e) {
                eprintln!();
                eprintln!("Error JSON:");
                eprintln!("{}", json);
            }
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), PlanError> {
    let json = std::fs::read_to_string(&cli.snapshot).map_err(|e| {
        PlanError::invalid_input("snapshot", cli.snapshot.display().to_string(), e.to_string())
    })?;
    let snapshot = ProjectSnapshot::from_json(&json)?;
    log::info!(
        "Loaded '{}': {} zones, {} pipes, {} irrigation points",
        snapshot.meta.name,
        snapshot.zones.len(),
        snapshot.pipes.len(),
        snapshot.irrigation_points.len()
    );

    if cli.strict {
        snapshot.validate()?;
    } else if let Err(e) = snapshot.validate() {
        log::warn!("Snapshot is inconsistent, continuing: {}", e);
    }

    let summary = summarize_project(&snapshot);

    if !cli.json_only {
        print_report(&snapshot, &summary);
        println!();
        println!("JSON Output:");
    }
    println!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(())
}

fn print_report(snapshot: &ProjectSnapshot, summary: &ProjectSummary) {
    let title = if snapshot.meta.name.is_empty() { "Untitled project" } else { snapshot.meta.name.as_str() };

    println!("═══════════════════════════════════════════════════════════════════════");
    println!("  {}", title);
    if let Some(modified) = snapshot.meta.modified {
        println!("  Last modified: {}", modified.format("%Y-%m-%d %H:%M UTC"));
    }
    println!("═══════════════════════════════════════════════════════════════════════");
    println!();
    println!(
        "{:<16} {:<14} {:>10} {:>9} {:>10} {:>12} {:>12}",
        "Zone", "Crop", "Area m²", "Rai", "Plants", "Water L", "Income"
    );

    for zone in &summary.zones {
        println!(
            "{:<16} {:<14} {:>10.0} {:>9.2} {:>10} {:>12.0} {:>12.0}",
            truncate(&zone.zone_name, 16),
            truncate(&zone.crop_name, 14),
            zone.area_sqm,
            zone.area_rai,
            zone.planting_points,
            zone.water.per_irrigation_l,
            zone.estimated_price
        );
    }

    let totals = &summary.totals;
    println!();
    println!(
        "Totals: {} zones ({} planted), {:.0} m² ({:.2} rai), {} plants",
        totals.zone_count, totals.assigned_zone_count, totals.area_sqm, totals.area_rai, totals.planting_points
    );
    println!(
        "Water:  {:.0} L per irrigation, {:.1} m³ per month, {:.1} m³ per year",
        totals.water.per_irrigation_l, totals.water.monthly_m3, totals.water.yearly_m3
    );
    println!(
        "Yield:  {:.0} kg, income {:.0}",
        totals.estimated_yield_kg, totals.estimated_price
    );
    println!();
    println!("Pipes (whole project):");
    for (label, tier) in [
        ("Main", &totals.project_pipes.main),
        ("Submain", &totals.project_pipes.submain),
        ("Lateral", &totals.project_pipes.lateral),
    ] {
        println!(
            "  {:<8} {:>4} pipes, {:>8.0} m total, longest {:>6.0} m",
            label, tier.count, tier.total_length, tier.longest_length
        );
    }
    println!();
    println!("Emitters:");
    for (kind, count) in &totals.emitter_breakdown {
        println!("  {:<16} {:>6}", kind, count);
    }
}

fn truncate(s: &str, width: usize) -> String {
    if s.chars().count() <= width {
        s.to_string()
    } else {
        let mut out: String = s.chars().take(width.saturating_sub(1)).collect();
        out.push('…');
        out
    }
}
