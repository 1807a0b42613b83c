use std::path::PathBuf;

use crate::CliError;
use crate::settings;

pub(crate) fn run_config_show() -> Result<(), CliError> {
    match settings::load_settings_string() {
        Some(contents) => {
            log::info!("{}", contents.trim_end());
        }
        None => {
            log::info!("No settings saved yet ({}).", settings::settings_path().display());
        }
    }
    Ok(())
}

pub(crate) fn run_config_path() -> Result<(), CliError> {
    log::info!("{}", settings::settings_path().display());
    Ok(())
}

pub(crate) fn run_config_theme(value: String) -> Result<(), CliError> {
    let theme = settings::Theme::from_str_loose(&value)
        .ok_or_else(|| CliError::config(format!("Unknown theme '{value}' (dark or light)")))?;
    settings::save_theme(theme)?;
    log::info!("Theme set to {}", theme.as_str());
    Ok(())
}

pub(crate) fn run_config_data_dir(dir: PathBuf) -> Result<(), CliError> {
    if !dir.is_dir() {
        log::warn!("{} is not a directory (saving anyway)", dir.display());
    }
    settings::save_data_dir(&dir)?;
    log::info!("Dataset directory set to {}", dir.display());
    Ok(())
}
