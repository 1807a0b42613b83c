use muster_data::PaintStatus;
use muster_db::*;

fn insert(conn: &rusqlite::Connection, model_id: &str, owned: u32, painted: u32) -> i64 {
    insert_entry(
        conn,
        &NewEntry {
            model_id: model_id.to_string(),
            owned_quantity: owned,
            painted_quantity: painted,
            paint_status: PaintStatus::Unpainted,
            ..Default::default()
        },
    )
    .unwrap()
}

#[test]
fn load_collection_orders_stably() {
    let conn = open_memory().unwrap();
    // Same implicit date_added for all three; id breaks the tie.
    let a = insert(&conn, "warrior_mt", 12, 0);
    let b = insert(&conn, "gondor_ranger", 6, 0);
    let c = insert(&conn, "warrior_mt", 6, 6);

    let collection = load_collection(&conn).unwrap();
    let ids: Vec<i64> = collection.iter().map(|e| e.id).collect();
    assert_eq!(ids, vec![a, b, c]);
}

#[test]
fn entries_for_model_finds_split_entries() {
    let conn = open_memory().unwrap();
    insert(&conn, "warrior_mt", 12, 0);
    insert(&conn, "gondor_ranger", 6, 0);
    insert(&conn, "warrior_mt", 6, 6);

    let split = entries_for_model(&conn, "warrior_mt").unwrap();
    assert_eq!(split.len(), 2);
    assert!(split.iter().all(|e| e.model_id == "warrior_mt"));

    assert!(entries_for_model(&conn, "balrog").unwrap().is_empty());
}

#[test]
fn counts_sum_quantities() {
    let conn = open_memory().unwrap();
    insert(&conn, "warrior_mt", 12, 4);
    insert(&conn, "gondor_ranger", 6, 6);

    let counts = collection_counts(&conn).unwrap();
    assert_eq!(counts.entries, 2);
    assert_eq!(counts.models_owned, 18);
    assert_eq!(counts.models_painted, 10);
}

#[test]
fn counts_on_empty_database() {
    let conn = open_memory().unwrap();
    let counts = collection_counts(&conn).unwrap();
    assert_eq!(counts.entries, 0);
    assert_eq!(counts.models_owned, 0);
}
