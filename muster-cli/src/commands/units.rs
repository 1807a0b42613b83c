use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use muster_data::{Dataset, Unit, parse_mwfw};

use crate::CliError;

/// Search the unit dataset, the lookup aid for the add flow.
pub(crate) fn run_units(
    dataset: &Dataset,
    query: Option<String>,
    army: Option<String>,
    heroes: bool,
) -> Result<(), CliError> {
    let mut units: Vec<&Unit> = match &query {
        Some(q) => dataset.search_units(q),
        None => {
            let mut all: Vec<&Unit> = dataset.units().collect();
            all.sort_by(|a, b| a.name.cmp(&b.name));
            all
        }
    };

    if let Some(army) = &army {
        units.retain(|u| u.army_list.eq_ignore_ascii_case(army));
    }
    if heroes {
        units.retain(|u| u.unit_type.is_hero());
    }

    if units.is_empty() {
        log::info!("No units match.");
        return Ok(());
    }

    for unit in &units {
        log::info!(
            "  {:<40} {} [{}] {} pts  ({})",
            unit.name.if_supports_color(Stdout, |t| t.bold()),
            unit.army_list.if_supports_color(Stdout, |t| t.cyan()),
            unit.unit_type.as_str(),
            unit.base_points,
            unit.model_id,
        );
    }
    crate::log_blank();
    log::info!("{} unit(s). Add one with: muster add <model_id>", units.len());

    Ok(())
}

/// Full unit card for one profile.
pub(crate) fn run_unit(dataset: &Dataset, model_id: &str) -> Result<(), CliError> {
    let Some(unit) = dataset.unit(model_id) else {
        // Suggest near matches by name before giving up.
        let hits = dataset.search_units(model_id);
        if hits.is_empty() {
            return Err(CliError::other(format!("Unknown unit '{model_id}'")));
        }
        log::info!("Unknown model id '{model_id}'. Did you mean:");
        for unit in hits.iter().take(5) {
            log::info!("  {}  ({})", unit.name, unit.model_id);
        }
        return Ok(());
    };

    log::info!("{}", unit.name.if_supports_color(Stdout, |t| t.bold()));
    log::info!(
        "  {} — {} [{}]",
        unit.army_list,
        unit.army_type.as_str(),
        unit.unit_type.as_str(),
    );
    log::info!("  Base points: {}", unit.base_points);
    if unit.unique {
        log::info!("  Unique");
    }
    if unit.warband_size > 0 {
        log::info!("  Warband size: {}", unit.warband_size);
    }
    if unit.siege_crew > 0 {
        log::info!("  Siege crew: {}", unit.siege_crew);
    }

    for row in &unit.mwfw {
        if let [name, raw] = row.as_slice() {
            if let Some(mwfw) = parse_mwfw(raw) {
                log::info!(
                    "  {}: M{} W{} F{} / {}W",
                    name,
                    mwfw.might,
                    mwfw.will,
                    mwfw.fate,
                    mwfw.wounds,
                );
            }
        }
    }

    if !unit.options.is_empty() {
        crate::log_blank();
        log::info!("Options:");
        for option in &unit.options {
            log::info!(
                "  {:<30} {:>+4} pts{}  ({})",
                option.name,
                option.points,
                if option.included { " [included]" } else { "" },
                option.id,
            );
        }
    }

    Ok(())
}
