//! Data model for the static unit dataset.
//!
//! The dataset is a JSON object keyed by `model_id`, one [`Unit`] per key.
//! It is read-only reference data: the application never creates or mutates
//! units, it only joins collection entries against them.

use serde::{Deserialize, Serialize};

/// Whether a unit fights for the Free Peoples or the Shadow, and whether its
/// army list is a legacy one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ArmyType {
    Good,
    Evil,
    #[serde(rename = "Good (Legacy)")]
    GoodLegacy,
    #[serde(rename = "Evil (Legacy)")]
    EvilLegacy,
}

impl ArmyType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Good => "Good",
            Self::Evil => "Evil",
            Self::GoodLegacy => "Good (Legacy)",
            Self::EvilLegacy => "Evil (Legacy)",
        }
    }

    /// Good/Evil alignment ignoring the legacy distinction.
    pub fn is_good(&self) -> bool {
        matches!(self, Self::Good | Self::GoodLegacy)
    }

    pub fn is_legacy(&self) -> bool {
        matches!(self, Self::GoodLegacy | Self::EvilLegacy)
    }
}

/// Profile tier of a unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UnitKind {
    #[serde(rename = "Hero of Legend")]
    HeroOfLegend,
    #[serde(rename = "Hero of Valour")]
    HeroOfValour,
    #[serde(rename = "Hero of Fortitude")]
    HeroOfFortitude,
    #[serde(rename = "Minor Hero")]
    MinorHero,
    #[serde(rename = "Independent Hero")]
    IndependentHero,
    Warrior,
    #[serde(rename = "Siege Engine")]
    SiegeEngine,
}

impl UnitKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::HeroOfLegend => "Hero of Legend",
            Self::HeroOfValour => "Hero of Valour",
            Self::HeroOfFortitude => "Hero of Fortitude",
            Self::MinorHero => "Minor Hero",
            Self::IndependentHero => "Independent Hero",
            Self::Warrior => "Warrior",
            Self::SiegeEngine => "Siege Engine",
        }
    }

    pub fn is_hero(&self) -> bool {
        !matches!(self, Self::Warrior | Self::SiegeEngine)
    }
}

/// A stat adjustment granted by a wargear option (e.g. a mount).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatModifier {
    pub stat: String,
    #[serde(rename = "mod")]
    pub delta: i32,
    pub label: String,
}

/// A wargear/upgrade option on a unit profile.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UnitOption {
    pub id: String,
    pub name: String,
    /// Point delta added when the option is selected. May be zero.
    pub points: i32,
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    /// Wargear bundled by default rather than purchased.
    #[serde(default)]
    pub included: bool,
    #[serde(default)]
    pub quantity: Option<u32>,
    #[serde(default)]
    pub min: Option<u32>,
    #[serde(default)]
    pub max: Option<u32>,
    #[serde(default)]
    pub mount_name: Option<String>,
    #[serde(default)]
    pub modifiers: Vec<StatModifier>,
}

/// One unit profile from the static dataset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Unit {
    pub model_id: String,
    pub army_type: ArmyType,
    /// Army list the unit belongs to (e.g. "Minas Tirith").
    pub army_list: String,
    #[serde(default)]
    pub profile_origin: String,
    pub name: String,
    pub unit_type: UnitKind,
    pub base_points: u32,
    #[serde(default)]
    pub unique: bool,
    #[serde(default)]
    pub legacy: bool,
    #[serde(default)]
    pub siege_crew: u32,
    /// Might/Will/Fate/Wounds rows: `[name, "M:W:F:W"]` pairs.
    #[serde(rename = "MWFW", default)]
    pub mwfw: Vec<Vec<String>>,
    #[serde(default)]
    pub warband_size: u32,
    #[serde(default)]
    pub bow_limit: bool,
    #[serde(default)]
    pub opt_mandatory: bool,
    #[serde(default)]
    pub no_followers: bool,
    #[serde(default)]
    pub default_bow: bool,
    #[serde(default)]
    pub default_throw: bool,
    #[serde(default)]
    pub options: Vec<UnitOption>,
}

/// Parsed Might/Will/Fate/Wounds values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mwfw {
    pub might: u32,
    pub will: u32,
    pub fate: u32,
    pub wounds: u32,
}

/// Parse an `"M:W:F:W"` stat string. Returns `None` unless the string has
/// exactly four colon-separated parts; non-numeric parts count as zero.
pub fn parse_mwfw(raw: &str) -> Option<Mwfw> {
    if raw.is_empty() {
        return None;
    }
    let parts: Vec<u32> = raw
        .split(':')
        .map(|p| p.trim().parse().unwrap_or(0))
        .collect();
    if parts.len() != 4 {
        return None;
    }
    Some(Mwfw {
        might: parts[0],
        will: parts[1],
        fate: parts[2],
        wounds: parts[3],
    })
}

/// Total points for one model of this unit with the given options selected.
///
/// Option ids not present on the unit are ignored. Negative option deltas
/// are clamped so the total never underflows zero.
pub fn unit_points(unit: &Unit, selected_options: &[String]) -> u32 {
    let mut total = unit.base_points as i64;
    for option_id in selected_options {
        if let Some(option) = unit.options.iter().find(|o| &o.id == option_id) {
            total += option.points as i64;
        }
    }
    total.max(0) as u32
}
