//! Joining collection entries with their unit profiles.
//!
//! An [`EnrichedEntry`] is the sole input type the playability matcher and
//! the statistics consume. Display-name resolution is total: custom
//! override, else the canonical dataset name, else "Unknown Unit".

use muster_data::{CollectionEntry, Dataset, PaintStatus, Unit, unit_points};

/// A collection entry joined with its unit profile.
#[derive(Debug, Clone)]
pub struct EnrichedEntry {
    pub entry: CollectionEntry,
    /// Canonical dataset name, when the model_id resolves.
    pub unit_name: Option<String>,
    /// Never empty.
    pub display_name: String,
    pub army_name: String,
    pub unit_kind: String,
    pub base_points: u32,
    /// Per-model points including the entry's selected options.
    pub entry_points: u32,
}

impl EnrichedEntry {
    /// The name the matcher compares against role requirements: the
    /// canonical unit name when known, so a custom display override does
    /// not break matching.
    pub fn match_name(&self) -> &str {
        self.unit_name.as_deref().unwrap_or(&self.display_name)
    }

    /// Total points across all owned models of this entry.
    pub fn total_points(&self) -> u32 {
        self.entry_points * self.entry.owned_quantity
    }
}

/// Join one collection entry with its unit profile, if any.
pub fn enrich(entry: CollectionEntry, unit: Option<&Unit>) -> EnrichedEntry {
    let display_name = entry
        .custom_name
        .clone()
        .filter(|n| !n.is_empty())
        .or_else(|| unit.map(|u| u.name.clone()))
        .unwrap_or_else(|| "Unknown Unit".to_string());

    EnrichedEntry {
        unit_name: unit.map(|u| u.name.clone()),
        display_name,
        army_name: unit
            .map(|u| u.army_list.clone())
            .unwrap_or_else(|| "Unknown Army".to_string()),
        unit_kind: unit
            .map(|u| u.unit_type.as_str().to_string())
            .unwrap_or_else(|| "Unknown".to_string()),
        base_points: unit.map(|u| u.base_points).unwrap_or(0),
        entry_points: unit
            .map(|u| unit_points(u, &entry.selected_options))
            .unwrap_or(0),
        entry,
    }
}

/// Enrich a whole collection snapshot against the dataset.
pub fn enrich_collection(entries: Vec<CollectionEntry>, dataset: &Dataset) -> Vec<EnrichedEntry> {
    entries
        .into_iter()
        .map(|entry| {
            let unit = dataset.unit(&entry.model_id);
            enrich(entry, unit)
        })
        .collect()
}

/// Entries belonging to one army (case-insensitive).
pub fn filter_by_army(entries: Vec<EnrichedEntry>, army: &str) -> Vec<EnrichedEntry> {
    entries
        .into_iter()
        .filter(|e| e.army_name.eq_ignore_ascii_case(army))
        .collect()
}

/// Entries in one paint state.
pub fn filter_by_paint_status(
    entries: Vec<EnrichedEntry>,
    status: PaintStatus,
) -> Vec<EnrichedEntry> {
    entries
        .into_iter()
        .filter(|e| e.entry.paint_status == status)
        .collect()
}

/// Case-insensitive search over display name, army, and notes.
pub fn search(entries: Vec<EnrichedEntry>, query: &str) -> Vec<EnrichedEntry> {
    let q = query.to_lowercase();
    entries
        .into_iter()
        .filter(|e| {
            e.display_name.to_lowercase().contains(&q)
                || e.army_name.to_lowercase().contains(&q)
                || e.entry
                    .notes
                    .as_deref()
                    .is_some_and(|n| n.to_lowercase().contains(&q))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use muster_data::{ArmyType, UnitKind, UnitOption};

    fn entry(model_id: &str, custom_name: Option<&str>) -> CollectionEntry {
        CollectionEntry {
            id: 1,
            model_id: model_id.into(),
            owned_quantity: 3,
            painted_quantity: 1,
            paint_status: PaintStatus::InProgress,
            notes: Some("second-hand lot".into()),
            custom_name: custom_name.map(Into::into),
            selected_options: vec!["shield".into()],
            date_added: "2026-01-01T00:00:00Z".into(),
            purchase_date: None,
            storage_location: None,
        }
    }

    fn unit() -> Unit {
        Unit {
            model_id: "warrior_mt".into(),
            army_type: ArmyType::Good,
            army_list: "Minas Tirith".into(),
            profile_origin: String::new(),
            name: "Warrior of Minas Tirith".into(),
            unit_type: UnitKind::Warrior,
            base_points: 8,
            unique: false,
            legacy: false,
            siege_crew: 0,
            mwfw: vec![],
            warband_size: 12,
            bow_limit: false,
            opt_mandatory: false,
            no_followers: false,
            default_bow: false,
            default_throw: false,
            options: vec![UnitOption {
                id: "shield".into(),
                name: "Shield".into(),
                points: 1,
                kind: None,
                included: false,
                quantity: None,
                min: None,
                max: None,
                mount_name: None,
                modifiers: vec![],
            }],
        }
    }

    #[test]
    fn resolves_canonical_name_and_points() {
        let e = enrich(entry("warrior_mt", None), Some(&unit()));
        assert_eq!(e.display_name, "Warrior of Minas Tirith");
        assert_eq!(e.army_name, "Minas Tirith");
        assert_eq!(e.base_points, 8);
        assert_eq!(e.entry_points, 9); // shield selected
        assert_eq!(e.total_points(), 27);
    }

    #[test]
    fn custom_name_overrides_display_but_not_matching() {
        let e = enrich(entry("warrior_mt", Some("My painted boys")), Some(&unit()));
        assert_eq!(e.display_name, "My painted boys");
        assert_eq!(e.match_name(), "Warrior of Minas Tirith");
    }

    #[test]
    fn unknown_unit_fallbacks() {
        let e = enrich(entry("gone_from_dataset", None), None);
        assert_eq!(e.display_name, "Unknown Unit");
        assert_eq!(e.army_name, "Unknown Army");
        assert_eq!(e.unit_kind, "Unknown");
        assert_eq!(e.entry_points, 0);
        assert_eq!(e.match_name(), "Unknown Unit");
    }

    #[test]
    fn empty_custom_name_is_ignored() {
        let e = enrich(entry("warrior_mt", Some("")), Some(&unit()));
        assert_eq!(e.display_name, "Warrior of Minas Tirith");
    }

    #[test]
    fn search_hits_notes() {
        let entries = vec![enrich(entry("warrior_mt", None), Some(&unit()))];
        assert_eq!(search(entries.clone(), "second-hand").len(), 1);
        assert_eq!(search(entries.clone(), "minas").len(), 1);
        assert!(search(entries, "balrog").is_empty());
    }

    #[test]
    fn filters() {
        let entries = vec![enrich(entry("warrior_mt", None), Some(&unit()))];
        assert_eq!(filter_by_army(entries.clone(), "minas tirith").len(), 1);
        assert!(filter_by_army(entries.clone(), "Rohan").is_empty());
        assert_eq!(
            filter_by_paint_status(entries.clone(), PaintStatus::InProgress).len(),
            1
        );
        assert!(filter_by_paint_status(entries, PaintStatus::Painted).is_empty());
    }
}
