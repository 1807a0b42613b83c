//! JSON loading for the bundled datasets.
//!
//! All three datasets are produced by an offline batch job and shipped as
//! plain JSON files. Shapes are validated once here, at load time, so the
//! evaluators downstream never see malformed data.

use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::scenarios::{Faction, Scenario};
use crate::units::Unit;

#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("I/O error reading {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("JSON parse error in {path}: {source}")]
    Parse {
        path: String,
        source: serde_json::Error,
    },
    #[error("Invalid dataset {path}: {message}")]
    Invalid { path: String, message: String },
    #[error("Dataset directory not found: {0}")]
    DirNotFound(String),
}

fn read_file(path: &Path) -> Result<String, DatasetError> {
    std::fs::read_to_string(path).map_err(|e| DatasetError::Io {
        path: path.display().to_string(),
        source: e,
    })
}

fn parse<T: serde::de::DeserializeOwned>(path: &Path, contents: &str) -> Result<T, DatasetError> {
    serde_json::from_str(contents).map_err(|e| DatasetError::Parse {
        path: path.display().to_string(),
        source: e,
    })
}

fn invalid(path: &Path, message: impl Into<String>) -> DatasetError {
    DatasetError::Invalid {
        path: path.display().to_string(),
        message: message.into(),
    }
}

/// Load the unit dataset: a JSON object keyed by `model_id`.
///
/// Fails if an entry's `model_id` field disagrees with its key.
pub fn load_units(path: &Path) -> Result<HashMap<String, Unit>, DatasetError> {
    let units: HashMap<String, Unit> = parse(path, &read_file(path)?)?;

    for (key, unit) in &units {
        if key != &unit.model_id {
            return Err(invalid(
                path,
                format!("unit key '{}' != model_id '{}'", key, unit.model_id),
            ));
        }
    }

    log::debug!("loaded {} units from {}", units.len(), path.display());
    Ok(units)
}

/// Wrapper shape of the scenario metadata file.
#[derive(Deserialize)]
struct ScenarioFile {
    data: Vec<Scenario>,
}

/// Load the scenario metadata dataset: `{"data": [...]}`.
///
/// Fails on duplicate scenario ids.
pub fn load_scenarios(path: &Path) -> Result<Vec<Scenario>, DatasetError> {
    let file: ScenarioFile = parse(path, &read_file(path)?)?;

    let mut seen = std::collections::HashSet::new();
    for scenario in &file.data {
        if !seen.insert(scenario.id) {
            return Err(invalid(path, format!("duplicate scenario id {}", scenario.id)));
        }
    }

    log::debug!(
        "loaded {} scenarios from {}",
        file.data.len(),
        path.display()
    );
    Ok(file.data)
}

/// Load the scenario role dataset: a JSON object mapping a string-typed
/// numeric scenario id to that scenario's faction list.
///
/// Keys are converted to numeric ids here; non-numeric keys and roles with
/// `amount == 0` (a requirement that could never mean anything) fail fast.
pub fn load_roles(path: &Path) -> Result<HashMap<u32, Vec<Faction>>, DatasetError> {
    let raw: HashMap<String, Vec<Faction>> = parse(path, &read_file(path)?)?;

    let mut roles = HashMap::with_capacity(raw.len());
    for (key, factions) in raw {
        let id: u32 = key
            .parse()
            .map_err(|_| invalid(path, format!("non-numeric scenario key '{key}'")))?;

        for faction in &factions {
            for role in &faction.roles {
                if role.amount == 0 {
                    return Err(invalid(
                        path,
                        format!(
                            "scenario {id}, faction {}: role '{}' has amount 0",
                            faction.id, role.name
                        ),
                    ));
                }
            }
        }

        roles.insert(id, factions);
    }

    log::debug!(
        "loaded role data for {} scenarios from {}",
        roles.len(),
        path.display()
    );
    Ok(roles)
}
