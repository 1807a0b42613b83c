//! Data model for the static scenario and role-requirement datasets.
//!
//! Scenarios carry the narrative metadata; the role dataset maps each
//! scenario id to the factions (sides) that can be fielded and the role
//! requirements each side must fill. Both are read-only, loaded once.

use serde::{Deserialize, Serialize};

/// A sourcebook citation for a scenario.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioSource {
    pub id: u32,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub book: String,
    #[serde(default)]
    pub issue: Option<String>,
    #[serde(default)]
    pub page: u32,
}

/// One playable scenario's static definition.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scenario {
    pub id: u32,
    #[serde(default)]
    pub name: String,
    /// Total model count the scenario is written for.
    #[serde(default)]
    pub size: u32,
    /// Location slug (e.g. "eriador", "mordor"); see [`location_label`].
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub blurb: String,
    /// 1 = First Age, 2 = Second Age, 3 = Third Age.
    #[serde(default)]
    pub date_age: u8,
    #[serde(default)]
    pub date_year: i32,
    #[serde(default)]
    pub map_width: u32,
    #[serde(default)]
    pub map_height: u32,
    #[serde(default)]
    pub avg_rating: f64,
    #[serde(default)]
    pub num_votes: u32,
    #[serde(default)]
    pub sources: Vec<ScenarioSource>,
}

/// A figure name accepted by a role. The name may carry a parenthetical
/// variant qualifier ("Théoden (plastic)") that matching strips.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Figure {
    pub figure_id: u32,
    pub name: String,
}

/// A required slot within a faction: at least `amount` owned models whose
/// names match the accepted figure list (or the role name itself).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Role {
    pub id: u32,
    pub name: String,
    pub amount: u32,
    #[serde(default)]
    pub sort_order: u32,
    #[serde(default)]
    pub figures: Vec<Figure>,
}

/// One side of a scenario.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Faction {
    pub id: u32,
    #[serde(default)]
    pub sort_order: u32,
    #[serde(default)]
    pub suggested_points: u32,
    #[serde(default)]
    pub roles: Vec<Role>,
}

/// Display label for a scenario location slug.
pub fn location_label(slug: &str) -> Option<&'static str> {
    let label = match slug {
        "amon_hen" => "Amon Hen",
        "arnor" => "Arnor",
        "dale" => "Dale",
        "dol_guldur" => "Dol Guldur",
        "erebor" => "Erebor",
        "eriador" => "Eriador",
        "fangorn" => "Fangorn",
        "fornost" => "Fornost",
        "goblintown" => "Goblin-town",
        "gondor" => "Gondor",
        "harad" => "Harad",
        "harondor" => "Harondor",
        "helms_deep" => "Helm's Deep",
        "isengard" => "Isengard",
        "ithilien" => "Ithilien",
        "laketown" => "Lake-town",
        "lothlorien" => "Lothlórien",
        "minas_morgul" => "Minas Morgul",
        "minas_tirith" => "Minas Tirith",
        "mirkwood" => "Mirkwood",
        "morannon" => "Morannon",
        "mordor" => "Mordor",
        "moria" => "Moria",
        "orthanc" => "Orthanc",
        "osgiliath" => "Osgiliath",
        "rhovanion" => "Rhovanion",
        "rhun" => "Rhûn",
        "rohan" => "Rohan",
        "the_shire" => "The Shire",
        "weathertop" => "Weathertop",
        _ => return None,
    };
    Some(label)
}

/// Display label for a scenario age (1 = FA, 2 = SA, 3 = TA).
pub fn age_label(age: u8) -> Option<&'static str> {
    match age {
        1 => Some("FA"),
        2 => Some("SA"),
        3 => Some("TA"),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_location_labels() {
        assert_eq!(location_label("helms_deep"), Some("Helm's Deep"));
        assert_eq!(location_label("the_shire"), Some("The Shire"));
        assert_eq!(location_label("atlantis"), None);
    }

    #[test]
    fn age_labels() {
        assert_eq!(age_label(3), Some("TA"));
        assert_eq!(age_label(0), None);
        assert_eq!(age_label(4), None);
    }
}
