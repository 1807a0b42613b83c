mod add;
mod config;
mod list;
mod remove;
mod scenario;
mod scenarios;
mod stats;
mod units;
mod update;

pub(crate) use add::{AddArgs, run_add};
pub(crate) use config::{run_config_data_dir, run_config_path, run_config_show, run_config_theme};
pub(crate) use list::run_list;
pub(crate) use remove::{run_clear, run_remove};
pub(crate) use scenario::run_scenario;
pub(crate) use scenarios::{ScenarioFilters, run_scenarios};
pub(crate) use stats::run_stats;
pub(crate) use units::{run_unit, run_units};
pub(crate) use update::{UpdateArgs, run_paint, run_update};

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use muster_data::PaintStatus;

use crate::CliError;
use crate::settings::Theme;

/// Header accent for the active theme: cyan reads well on dark terminals,
/// blue on light ones.
pub(crate) fn accent(theme: Theme, text: &str) -> String {
    match theme {
        Theme::Dark => text
            .if_supports_color(Stdout, |t| t.cyan())
            .to_string(),
        Theme::Light => text
            .if_supports_color(Stdout, |t| t.blue())
            .to_string(),
    }
}

/// Parse a paint status argument, rejecting unknown values with the list
/// of accepted ones.
pub(crate) fn parse_paint_status(raw: &str) -> Result<PaintStatus, CliError> {
    let status = PaintStatus::from_str_loose(raw);
    if status == PaintStatus::Unpainted && !raw.eq_ignore_ascii_case("unpainted") {
        let options: Vec<&str> = PaintStatus::all().iter().map(|s| s.as_str()).collect();
        return Err(CliError::other(format!(
            "Unknown paint status '{raw}' (expected one of: {})",
            options.join(", ")
        )));
    }
    Ok(status)
}

/// Colored paint-status label.
pub(crate) fn paint_status_label(status: PaintStatus) -> String {
    let text = status.as_str();
    match status {
        PaintStatus::Unpainted => text
            .if_supports_color(Stdout, |t| t.red())
            .to_string(),
        PaintStatus::Primed | PaintStatus::InProgress => text
            .if_supports_color(Stdout, |t| t.yellow())
            .to_string(),
        PaintStatus::Painted | PaintStatus::Based => text
            .if_supports_color(Stdout, |t| t.green())
            .to_string(),
    }
}
