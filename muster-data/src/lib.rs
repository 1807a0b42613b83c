//! Static game data model, JSON dataset loading, and name normalization.
//!
//! This crate defines the data model for the bundled MESBG datasets (unit
//! profiles, scenarios, and scenario role requirements) plus the user's
//! collection entry type, without any database dependencies. Consumers can
//! use these types directly for display, pass collection entries to
//! `muster-db` for persistence, or hand a loaded [`Dataset`] to
//! `muster-core` for playability evaluation.

pub mod collection;
pub mod dataset;
pub mod json;
pub mod names;
pub mod scenarios;
pub mod units;

pub use collection::{CollectionEntry, PaintStatus};
pub use dataset::Dataset;
pub use json::{DatasetError, load_roles, load_scenarios, load_units};
pub use names::match_key;
pub use scenarios::{Faction, Figure, Role, Scenario, ScenarioSource, age_label, location_label};
pub use units::{ArmyType, Mwfw, StatModifier, Unit, UnitKind, UnitOption, parse_mwfw, unit_points};
