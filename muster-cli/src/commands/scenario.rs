use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use muster_core::{check_scenario, enrich_collection};
use muster_data::{Dataset, age_label, location_label};
use muster_db::{Connection, load_collection};

use crate::CliError;
use crate::commands::accent;
use crate::settings::Theme;

/// Scenario detail: metadata, sources, and the per-role ownership check
/// for every side.
pub(crate) fn run_scenario(
    conn: &Connection,
    dataset: &Dataset,
    theme: Theme,
    id: u32,
) -> Result<(), CliError> {
    let Some(scenario) = dataset.scenario(id) else {
        return Err(CliError::other(format!("Unknown scenario id {id}")));
    };

    log::info!("{}", accent(theme, &scenario.name));
    let location = location_label(&scenario.location).unwrap_or(&scenario.location);
    let age = age_label(scenario.date_age).unwrap_or("--");
    log::info!(
        "  {} — {} {} | {} models | {}\" x {}\" | {:.1}★ ({} votes)",
        location,
        age,
        scenario.date_year,
        scenario.size,
        scenario.map_width,
        scenario.map_height,
        scenario.avg_rating,
        scenario.num_votes,
    );
    if !scenario.blurb.is_empty() {
        log::info!("  {}", scenario.blurb.if_supports_color(Stdout, |t| t.dimmed()));
    }

    if !scenario.sources.is_empty() {
        crate::log_blank();
        log::info!("Sources:");
        for source in &scenario.sources {
            let issue = source
                .issue
                .as_deref()
                .map(|i| format!(" #{i}"))
                .unwrap_or_default();
            log::info!("  {}{} p.{}", source.title, issue, source.page);
        }
    }

    let factions = dataset.factions(id);
    if factions.is_empty() {
        crate::log_blank();
        log::info!("No role data for this scenario.");
        return Ok(());
    }

    let collection = enrich_collection(load_collection(conn)?, dataset);
    let check = check_scenario(factions, &collection);

    for (i, fc) in check.faction_checks.iter().enumerate() {
        crate::log_blank();
        let readiness = if fc.all_satisfied {
            "ready".if_supports_color(Stdout, |t| t.green()).to_string()
        } else {
            "not ready"
                .if_supports_color(Stdout, |t| t.red())
                .to_string()
        };
        log::info!(
            "{} ({} pts suggested) — {}",
            format!("Side {}", i + 1).if_supports_color(Stdout, |t| t.bold()),
            fc.faction.suggested_points,
            readiness,
        );

        if fc.role_checks.is_empty() {
            log::info!("  No stated requirements.");
            continue;
        }

        for rc in &fc.role_checks {
            let mark = if rc.satisfied {
                "✓".if_supports_color(Stdout, |t| t.green()).to_string()
            } else {
                "✗".if_supports_color(Stdout, |t| t.red()).to_string()
            };
            log::info!(
                "  {mark} {:<35} {}/{}",
                rc.role.name,
                rc.owned,
                rc.role.amount,
            );
            if !rc.matched.is_empty() {
                log::info!(
                    "      from: {}",
                    rc.matched
                        .join(", ")
                        .if_supports_color(Stdout, |t| t.dimmed()),
                );
            }
        }
    }

    crate::log_blank();
    if check.can_play {
        log::info!(
            "{}",
            "You can field at least one full side — playable!"
                .if_supports_color(Stdout, |t| t.green()),
        );
    } else {
        log::info!("You cannot field a full side of this scenario yet.");
    }

    Ok(())
}
