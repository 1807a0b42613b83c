use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use muster_core::{enrich_collection, filter_by_army, filter_by_paint_status, search};
use muster_data::Dataset;
use muster_db::{Connection, load_collection};

use crate::CliError;
use crate::commands::{paint_status_label, parse_paint_status};

/// List the collection, enriched with dataset names and points.
pub(crate) fn run_list(
    conn: &Connection,
    dataset: &Dataset,
    army: Option<String>,
    status: Option<String>,
    query: Option<String>,
) -> Result<(), CliError> {
    let entries = load_collection(conn)?;
    let mut shown = enrich_collection(entries, dataset);

    if let Some(army) = &army {
        shown = filter_by_army(shown, army);
    }
    if let Some(raw) = &status {
        shown = filter_by_paint_status(shown, parse_paint_status(raw)?);
    }
    if let Some(query) = &query {
        shown = search(shown, query);
    }

    if shown.is_empty() {
        log::info!("No matching entries. Add units with: muster add <model_id>");
        return Ok(());
    }

    for e in &shown {
        log::info!(
            "  #{:<4} {:<40} {:<20} x{:<3} ({}/{} painted) {:>5} pts  {}",
            e.entry.id,
            e.display_name.if_supports_color(Stdout, |t| t.bold()),
            e.army_name.if_supports_color(Stdout, |t| t.cyan()),
            e.entry.owned_quantity,
            e.entry.painted_quantity,
            e.entry.owned_quantity,
            e.total_points(),
            paint_status_label(e.entry.paint_status),
        );
        if let Some(notes) = &e.entry.notes {
            log::info!("        {}", notes.if_supports_color(Stdout, |t| t.dimmed()));
        }
    }

    crate::log_blank();
    let models: u32 = shown.iter().map(|e| e.entry.owned_quantity).sum();
    let points: u32 = shown.iter().map(|e| e.total_points()).sum();
    log::info!("{} entries, {} models, {} points", shown.len(), models, points);

    Ok(())
}
