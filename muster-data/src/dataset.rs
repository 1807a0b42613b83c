//! Indexed, immutable view over the three loaded datasets.
//!
//! Built once at startup; everything downstream (enrichment, evaluators,
//! display) reads from this snapshot. Lookup misses are normal — an unknown
//! scenario simply has no factions, an unknown model_id no unit profile.

use std::collections::HashMap;
use std::path::Path;

use crate::json::{DatasetError, load_roles, load_scenarios, load_units};
use crate::scenarios::{Faction, Scenario};
use crate::units::{ArmyType, Unit};

/// File names expected inside the dataset directory.
pub const UNITS_FILE: &str = "units.json";
pub const SCENARIOS_FILE: &str = "scenarios.json";
pub const ROLES_FILE: &str = "scenario_roles.json";

/// The loaded static datasets with lookup indexes.
pub struct Dataset {
    units: HashMap<String, Unit>,
    scenarios: Vec<Scenario>,
    /// Scenario id → position in `scenarios`.
    scenario_index: HashMap<u32, usize>,
    roles: HashMap<u32, Vec<Faction>>,
}

impl Dataset {
    /// Load all three datasets from a directory.
    pub fn load(dir: &Path) -> Result<Self, DatasetError> {
        if !dir.is_dir() {
            return Err(DatasetError::DirNotFound(dir.display().to_string()));
        }
        Ok(Self::from_parts(
            load_units(&dir.join(UNITS_FILE))?,
            load_scenarios(&dir.join(SCENARIOS_FILE))?,
            load_roles(&dir.join(ROLES_FILE))?,
        ))
    }

    /// Build a dataset from already-loaded parts. Mostly useful in tests.
    pub fn from_parts(
        units: HashMap<String, Unit>,
        scenarios: Vec<Scenario>,
        roles: HashMap<u32, Vec<Faction>>,
    ) -> Self {
        let scenario_index = scenarios
            .iter()
            .enumerate()
            .map(|(i, s)| (s.id, i))
            .collect();
        Self {
            units,
            scenarios,
            scenario_index,
            roles,
        }
    }

    // ── Units ───────────────────────────────────────────────────────────

    pub fn unit(&self, model_id: &str) -> Option<&Unit> {
        self.units.get(model_id)
    }

    pub fn units(&self) -> impl Iterator<Item = &Unit> {
        self.units.values()
    }

    pub fn unit_count(&self) -> usize {
        self.units.len()
    }

    /// Case-insensitive substring search on unit names, sorted by name.
    pub fn search_units(&self, query: &str) -> Vec<&Unit> {
        let q = query.to_lowercase();
        let mut hits: Vec<&Unit> = self
            .units
            .values()
            .filter(|u| u.name.to_lowercase().contains(&q))
            .collect();
        hits.sort_by(|a, b| a.name.cmp(&b.name));
        hits
    }

    /// Sorted unique army list names.
    pub fn armies(&self) -> Vec<&str> {
        let mut armies: Vec<&str> = self.units.values().map(|u| u.army_list.as_str()).collect();
        armies.sort_unstable();
        armies.dedup();
        armies
    }

    /// Sorted unique army list names for one alignment (legacy lists
    /// counted with their base alignment).
    pub fn armies_by_type(&self, army_type: ArmyType) -> Vec<&str> {
        let mut armies: Vec<&str> = self
            .units
            .values()
            .filter(|u| u.army_type.is_good() == army_type.is_good())
            .map(|u| u.army_list.as_str())
            .collect();
        armies.sort_unstable();
        armies.dedup();
        armies
    }

    // ── Scenarios ───────────────────────────────────────────────────────

    pub fn scenario(&self, id: u32) -> Option<&Scenario> {
        self.scenario_index.get(&id).map(|&i| &self.scenarios[i])
    }

    pub fn scenarios(&self) -> &[Scenario] {
        &self.scenarios
    }

    /// Case-insensitive search over name, blurb, and location.
    pub fn search_scenarios(&self, query: &str) -> Vec<&Scenario> {
        let q = query.to_lowercase();
        self.scenarios
            .iter()
            .filter(|s| {
                s.name.to_lowercase().contains(&q)
                    || s.blurb.to_lowercase().contains(&q)
                    || s.location.to_lowercase().contains(&q)
            })
            .collect()
    }

    pub fn scenarios_at(&self, location: &str) -> Vec<&Scenario> {
        self.scenarios
            .iter()
            .filter(|s| s.location == location)
            .collect()
    }

    /// Sorted unique location slugs across all scenarios.
    pub fn locations(&self) -> Vec<&str> {
        let mut locations: Vec<&str> =
            self.scenarios.iter().map(|s| s.location.as_str()).collect();
        locations.sort_unstable();
        locations.dedup();
        locations
    }

    /// Sorted unique non-empty source titles across all scenarios.
    pub fn sourcebooks(&self) -> Vec<&str> {
        let mut titles: Vec<&str> = self
            .scenarios
            .iter()
            .flat_map(|s| s.sources.iter())
            .filter(|src| !src.title.is_empty())
            .map(|src| src.title.as_str())
            .collect();
        titles.sort_unstable();
        titles.dedup();
        titles
    }

    // ── Roles ───────────────────────────────────────────────────────────

    /// Factions (sides) associated with a scenario. Empty for scenarios
    /// the role dataset does not cover.
    pub fn factions(&self, scenario_id: u32) -> &[Faction] {
        self.roles
            .get(&scenario_id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}
