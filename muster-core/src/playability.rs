//! The scenario playability matcher.
//!
//! Reconciles the user's collection against a scenario's faction role
//! requirements: per role, how many owned models qualify; per faction,
//! whether every role is filled; per scenario, whether at least one side
//! can be fully fielded, plus a tri-state summary for list views.
//!
//! Matching is exact set membership on normalized and raw-lowercased name
//! keys. This is a precision-over-recall choice: the accepted-figure lists
//! were curated against exact keys, and fuzzy matching would silently
//! change satisfaction outcomes.

use std::collections::HashSet;

use muster_data::{Faction, Role, match_key};

use crate::enrich::EnrichedEntry;

/// Result of checking one role requirement against the collection.
#[derive(Debug, Clone)]
pub struct RoleCheck<'a> {
    pub role: &'a Role,
    /// Total owned models matching the role, summed across entries.
    pub owned: u32,
    /// `owned >= role.amount`. No partial credit.
    pub satisfied: bool,
    /// Display names of the entries that matched, for explanation.
    pub matched: Vec<String>,
}

/// Result of checking one faction (side) of a scenario.
#[derive(Debug, Clone)]
pub struct FactionCheck<'a> {
    pub faction: &'a Faction,
    pub role_checks: Vec<RoleCheck<'a>>,
    /// True when the faction has at least one role and every role is
    /// satisfied. A faction with no stated requirements conveys nothing
    /// about playability, so it is never counted as fieldable.
    pub all_satisfied: bool,
}

/// Result of checking every faction of a scenario.
#[derive(Debug, Clone)]
pub struct ScenarioCheck<'a> {
    pub faction_checks: Vec<FactionCheck<'a>>,
    /// True when at least one side can be fully fielded. Scenarios are
    /// adversarial; owning one full side is enough to play.
    pub can_play: bool,
}

/// Tri-state playability summary for scenario lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayStatus {
    /// Every qualifying faction can be fielded.
    Full,
    /// Some but not all qualifying factions can be fielded.
    Partial,
    /// No qualifying faction can be fielded, or there are none.
    None,
}

impl PlayStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Full => "full",
            Self::Partial => "partial",
            Self::None => "none",
        }
    }
}

/// Insert a key into the accepted set unless it is empty. Empty keys come
/// from names that are entirely parenthetical and must never match.
fn insert_key(keys: &mut HashSet<String>, key: String) {
    if !key.is_empty() {
        keys.insert(key);
    }
}

/// Build the set of name keys a role accepts: every accepted figure in
/// normalized and raw-lowercased form, plus the role's own name both ways.
/// The role name acts as a stand-in unit name for roles whose figure list
/// is not usefully populated.
fn accepted_keys(role: &Role) -> HashSet<String> {
    let mut keys = HashSet::new();
    for figure in &role.figures {
        insert_key(&mut keys, match_key(&figure.name));
        insert_key(&mut keys, figure.name.to_lowercase());
    }
    insert_key(&mut keys, match_key(&role.name));
    insert_key(&mut keys, role.name.to_lowercase());
    keys
}

/// Check one role requirement against the collection.
///
/// Owned quantities add across distinct entries that match the same role —
/// the same unit split over two entries with different paint state counts
/// once per model, not once per entry.
pub fn evaluate_role<'a>(role: &'a Role, collection: &[EnrichedEntry]) -> RoleCheck<'a> {
    let accepted = accepted_keys(role);

    let mut owned = 0;
    let mut matched = Vec::new();

    for entry in collection {
        let name = entry.match_name();
        let raw = name.to_lowercase();
        let stripped = match_key(name);

        let matches = accepted.contains(&raw)
            || (!stripped.is_empty() && accepted.contains(&stripped));
        if matches {
            owned += entry.entry.owned_quantity;
            matched.push(entry.display_name.clone());
        }
    }

    RoleCheck {
        role,
        owned,
        satisfied: owned >= role.amount,
        matched,
    }
}

/// Check every role of a faction. `all_satisfied` is an AND over the role
/// checks, with the empty faction explicitly excluded (see [`FactionCheck`]).
pub fn evaluate_faction<'a>(faction: &'a Faction, collection: &[EnrichedEntry]) -> FactionCheck<'a> {
    let role_checks: Vec<RoleCheck<'a>> = faction
        .roles
        .iter()
        .map(|role| evaluate_role(role, collection))
        .collect();

    let all_satisfied = !role_checks.is_empty() && role_checks.iter().all(|rc| rc.satisfied);

    FactionCheck {
        faction,
        role_checks,
        all_satisfied,
    }
}

/// Check every faction of a scenario, in dataset order. Detail-view
/// semantics: `can_play` is true when any one side is fully fieldable.
///
/// An unknown scenario (empty faction slice) or an empty collection yields
/// `can_play = false`, never an error.
pub fn check_scenario<'a>(
    factions: &'a [Faction],
    collection: &[EnrichedEntry],
) -> ScenarioCheck<'a> {
    let faction_checks: Vec<FactionCheck<'a>> = factions
        .iter()
        .map(|faction| evaluate_faction(faction, collection))
        .collect();

    let can_play = faction_checks.iter().any(|fc| fc.all_satisfied);

    ScenarioCheck {
        faction_checks,
        can_play,
    }
}

/// List-view tri-state summary, computed over the qualifying factions
/// (those with at least one role).
pub fn play_status(factions: &[Faction], collection: &[EnrichedEntry]) -> PlayStatus {
    let qualifying: Vec<&Faction> = factions.iter().filter(|f| !f.roles.is_empty()).collect();
    if qualifying.is_empty() {
        return PlayStatus::None;
    }

    let satisfied = qualifying
        .iter()
        .filter(|f| evaluate_faction(f, collection).all_satisfied)
        .count();

    if satisfied == 0 {
        PlayStatus::None
    } else if satisfied == qualifying.len() {
        PlayStatus::Full
    } else {
        PlayStatus::Partial
    }
}
