//! Collection enrichment, statistics, and the scenario playability matcher.
//!
//! Everything in this crate is a pure, synchronous computation over
//! immutable snapshots: the loaded [`muster_data::Dataset`] and the user's
//! collection as read from `muster-db`. There is no I/O and no shared
//! state; results are recomputed per invocation.

pub mod enrich;
pub mod playability;
pub mod stats;

pub use enrich::{EnrichedEntry, enrich, enrich_collection, filter_by_army,
    filter_by_paint_status, search};
pub use playability::{FactionCheck, PlayStatus, RoleCheck, ScenarioCheck, check_scenario,
    evaluate_faction, evaluate_role, play_status};
pub use stats::{CollectionStats, collection_stats};
