//! Aggregate statistics over an enriched collection.

use std::collections::BTreeMap;

use crate::enrich::EnrichedEntry;

/// Model counts and point totals across the collection.
#[derive(Debug, Clone, Default)]
pub struct CollectionStats {
    pub total_models: u32,
    pub painted_models: u32,
    pub total_armies: usize,
    /// Points including each entry's selected options.
    pub total_points: u32,
    /// Owned model counts per army, in army-name order.
    pub by_army: BTreeMap<String, u32>,
    /// Owned model counts per paint status label.
    pub by_paint_status: BTreeMap<&'static str, u32>,
}

pub fn collection_stats(entries: &[EnrichedEntry]) -> CollectionStats {
    let mut stats = CollectionStats::default();

    for e in entries {
        let owned = e.entry.owned_quantity;
        stats.total_models += owned;
        stats.painted_models += e.entry.painted_quantity;
        stats.total_points += e.total_points();
        *stats.by_army.entry(e.army_name.clone()).or_default() += owned;
        *stats
            .by_paint_status
            .entry(e.entry.paint_status.as_str())
            .or_default() += owned;
    }

    stats.total_armies = stats.by_army.len();
    stats
}

#[cfg(test)]
mod tests {
    use super::*;
    use muster_data::{CollectionEntry, PaintStatus};

    fn entry(army: &str, owned: u32, painted: u32, status: PaintStatus, points: u32) -> EnrichedEntry {
        EnrichedEntry {
            entry: CollectionEntry {
                id: 0,
                model_id: "m".into(),
                owned_quantity: owned,
                painted_quantity: painted,
                paint_status: status,
                notes: None,
                custom_name: None,
                selected_options: vec![],
                date_added: "2026-01-01T00:00:00Z".into(),
                purchase_date: None,
                storage_location: None,
            },
            unit_name: None,
            display_name: "x".into(),
            army_name: army.into(),
            unit_kind: "Warrior".into(),
            base_points: points,
            entry_points: points,
        }
    }

    #[test]
    fn empty_collection() {
        let stats = collection_stats(&[]);
        assert_eq!(stats.total_models, 0);
        assert_eq!(stats.total_armies, 0);
        assert!(stats.by_army.is_empty());
    }

    #[test]
    fn aggregates_across_armies() {
        let entries = vec![
            entry("Rohan", 12, 6, PaintStatus::InProgress, 7),
            entry("Rohan", 1, 1, PaintStatus::Painted, 95),
            entry("Mordor", 24, 0, PaintStatus::Unpainted, 7),
        ];
        let stats = collection_stats(&entries);

        assert_eq!(stats.total_models, 37);
        assert_eq!(stats.painted_models, 7);
        assert_eq!(stats.total_armies, 2);
        assert_eq!(stats.total_points, 12 * 7 + 95 + 24 * 7);
        assert_eq!(stats.by_army["Rohan"], 13);
        assert_eq!(stats.by_army["Mordor"], 24);
        assert_eq!(stats.by_paint_status["Unpainted"], 24);
        assert_eq!(stats.by_paint_status["In Progress"], 12);
    }
}
