use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use muster_core::{PlayStatus, enrich_collection, play_status};
use muster_data::{Dataset, Scenario, age_label, location_label};
use muster_db::{Connection, load_collection};

use crate::CliError;
use crate::commands::accent;
use crate::settings::Theme;

pub(crate) struct ScenarioFilters {
    pub location: Option<String>,
    pub book: Option<String>,
    pub search: Option<String>,
    pub playable: bool,
}

fn status_badge(status: PlayStatus) -> String {
    match status {
        PlayStatus::Full => "full   "
            .if_supports_color(Stdout, |t| t.green())
            .to_string(),
        PlayStatus::Partial => "partial"
            .if_supports_color(Stdout, |t| t.yellow())
            .to_string(),
        PlayStatus::None => "none   "
            .if_supports_color(Stdout, |t| t.red())
            .to_string(),
    }
}

/// Scenario list with tri-state playability badges against the current
/// collection. Playability is recomputed on every invocation.
pub(crate) fn run_scenarios(
    conn: &Connection,
    dataset: &Dataset,
    theme: Theme,
    filters: ScenarioFilters,
) -> Result<(), CliError> {
    let collection = enrich_collection(load_collection(conn)?, dataset);

    let mut scenarios: Vec<&Scenario> = match &filters.search {
        Some(q) => dataset.search_scenarios(q),
        None => dataset.scenarios().iter().collect(),
    };

    if let Some(location) = &filters.location {
        scenarios.retain(|s| s.location.eq_ignore_ascii_case(location));
    }
    if let Some(book) = &filters.book {
        let b = book.to_lowercase();
        scenarios.retain(|s| {
            s.sources
                .iter()
                .any(|src| src.title.to_lowercase().contains(&b))
        });
    }

    let mut shown = 0;
    for scenario in &scenarios {
        let status = play_status(dataset.factions(scenario.id), &collection);
        if filters.playable && status == PlayStatus::None {
            continue;
        }
        shown += 1;

        let location = location_label(&scenario.location).unwrap_or(&scenario.location);
        let age = age_label(scenario.date_age).unwrap_or("--");
        log::info!(
            "  {:>4}  [{}]  {:<45} {:<15} {} {:>5}  {} models  {:.1}★",
            scenario.id,
            status_badge(status),
            accent(theme, &scenario.name),
            location,
            age,
            scenario.date_year,
            scenario.size,
            scenario.avg_rating,
        );
    }

    crate::log_blank();
    if shown == 0 {
        log::info!("No scenarios match.");
    } else {
        log::info!("{shown} scenario(s). Details with: muster scenario <id>");
    }

    Ok(())
}
