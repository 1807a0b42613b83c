use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use muster_core::{collection_stats, enrich_collection};
use muster_data::Dataset;
use muster_db::{Connection, load_collection};

use crate::CliError;

pub(crate) fn run_stats(conn: &Connection, dataset: &Dataset) -> Result<(), CliError> {
    let entries = load_collection(conn)?;
    let entry_count = entries.len();
    let enriched = enrich_collection(entries, dataset);
    let stats = collection_stats(&enriched);

    log::info!(
        "{}",
        "Collection Statistics".if_supports_color(Stdout, |t| t.bold()),
    );
    crate::log_blank();
    log::info!("  Entries:        {:>8}", entry_count);
    log::info!("  Models owned:   {:>8}", stats.total_models);
    log::info!(
        "  Models painted: {:>8} ({}%)",
        stats.painted_models,
        if stats.total_models > 0 {
            stats.painted_models * 100 / stats.total_models
        } else {
            0
        },
    );
    log::info!("  Armies:         {:>8}", stats.total_armies);
    log::info!("  Total points:   {:>8}", stats.total_points);

    if !stats.by_army.is_empty() {
        crate::log_blank();
        log::info!("By army:");
        for (army, count) in &stats.by_army {
            log::info!("  {:<30} {:>6}", army, count);
        }
    }

    if !stats.by_paint_status.is_empty() {
        crate::log_blank();
        log::info!("By paint status:");
        for (status, count) in &stats.by_paint_status {
            log::info!("  {:<30} {:>6}", status, count);
        }
    }

    Ok(())
}
