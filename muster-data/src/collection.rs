//! The user's collection entry type and paint progress states.

use serde::{Deserialize, Serialize};

/// Painting progress of a collection entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum PaintStatus {
    #[default]
    Unpainted,
    Primed,
    #[serde(rename = "In Progress")]
    InProgress,
    Painted,
    /// Painted and based.
    #[serde(rename = "Painted & Based")]
    Based,
}

impl PaintStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Unpainted => "Unpainted",
            Self::Primed => "Primed",
            Self::InProgress => "In Progress",
            Self::Painted => "Painted",
            Self::Based => "Painted & Based",
        }
    }

    /// Parse from user or stored input, accepting short forms.
    pub fn from_str_loose(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "primed" => Self::Primed,
            "in progress" | "in-progress" | "wip" => Self::InProgress,
            "painted" => Self::Painted,
            "painted & based" | "based" => Self::Based,
            _ => Self::Unpainted,
        }
    }

    /// All states in painting-pipeline order, for display and validation.
    pub fn all() -> &'static [PaintStatus] {
        &[
            Self::Unpainted,
            Self::Primed,
            Self::InProgress,
            Self::Painted,
            Self::Based,
        ]
    }
}

/// One ownership record in the user's collection.
///
/// References a unit profile by `model_id`; the reference may dangle (the
/// dataset is versioned independently), in which case display falls back to
/// "Unknown Unit". The `painted_quantity <= owned_quantity` invariant is
/// enforced at the edit boundary in `muster-db`, not here.
#[derive(Debug, Clone)]
pub struct CollectionEntry {
    /// Database-assigned row id.
    pub id: i64,
    pub model_id: String,
    pub owned_quantity: u32,
    pub painted_quantity: u32,
    pub paint_status: PaintStatus,
    pub notes: Option<String>,
    /// Optional display-name override.
    pub custom_name: Option<String>,
    /// Selected wargear option ids, referencing `UnitOption::id`.
    pub selected_options: Vec<String>,
    /// RFC 3339 creation timestamp.
    pub date_added: String,
    pub purchase_date: Option<String>,
    pub storage_location: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paint_status_round_trip() {
        for status in PaintStatus::all() {
            assert_eq!(PaintStatus::from_str_loose(status.as_str()), *status);
        }
    }

    #[test]
    fn paint_status_short_forms() {
        assert_eq!(PaintStatus::from_str_loose("wip"), PaintStatus::InProgress);
        assert_eq!(PaintStatus::from_str_loose("based"), PaintStatus::Based);
        assert_eq!(PaintStatus::from_str_loose("???"), PaintStatus::Unpainted);
    }
}
