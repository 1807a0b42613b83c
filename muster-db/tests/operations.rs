use muster_data::PaintStatus;
use muster_db::*;

fn new_entry(model_id: &str, owned: u32) -> NewEntry {
    NewEntry {
        model_id: model_id.to_string(),
        owned_quantity: owned,
        painted_quantity: 0,
        paint_status: PaintStatus::Unpainted,
        notes: None,
        custom_name: None,
        selected_options: vec![],
        purchase_date: None,
        storage_location: None,
    }
}

#[test]
fn insert_and_fetch_entry() {
    let conn = open_memory().unwrap();
    let id = insert_entry(
        &conn,
        &NewEntry {
            notes: Some("boxed set".into()),
            selected_options: vec!["shield".into(), "spear".into()],
            ..new_entry("warrior_mt", 12)
        },
    )
    .unwrap();

    let entry = get_entry(&conn, id).unwrap().unwrap();
    assert_eq!(entry.model_id, "warrior_mt");
    assert_eq!(entry.owned_quantity, 12);
    assert_eq!(entry.notes.as_deref(), Some("boxed set"));
    assert_eq!(entry.selected_options, vec!["shield", "spear"]);
    assert!(!entry.date_added.is_empty());
}

#[test]
fn insert_rejects_painted_over_owned() {
    let conn = open_memory().unwrap();
    let result = insert_entry(
        &conn,
        &NewEntry {
            painted_quantity: 5,
            ..new_entry("warrior_mt", 3)
        },
    );
    assert!(matches!(
        result,
        Err(OperationError::InvalidQuantity { painted: 5, owned: 3 })
    ));
}

#[test]
fn update_entry_replaces_fields_and_options() {
    let conn = open_memory().unwrap();
    let id = insert_entry(
        &conn,
        &NewEntry {
            selected_options: vec!["shield".into()],
            ..new_entry("warrior_mt", 12)
        },
    )
    .unwrap();

    let mut entry = get_entry(&conn, id).unwrap().unwrap();
    entry.owned_quantity = 24;
    entry.painted_quantity = 12;
    entry.paint_status = PaintStatus::InProgress;
    entry.custom_name = Some("Second company".into());
    entry.selected_options = vec!["bow".into()];
    update_entry(&conn, &entry).unwrap();

    let reloaded = get_entry(&conn, id).unwrap().unwrap();
    assert_eq!(reloaded.owned_quantity, 24);
    assert_eq!(reloaded.painted_quantity, 12);
    assert_eq!(reloaded.paint_status, PaintStatus::InProgress);
    assert_eq!(reloaded.custom_name.as_deref(), Some("Second company"));
    assert_eq!(reloaded.selected_options, vec!["bow"]);
}

#[test]
fn update_missing_entry_is_not_found() {
    let conn = open_memory().unwrap();
    let mut entry = {
        let id = insert_entry(&conn, &new_entry("warrior_mt", 1)).unwrap();
        get_entry(&conn, id).unwrap().unwrap()
    };
    entry.id = 9999;
    assert!(matches!(
        update_entry(&conn, &entry),
        Err(OperationError::NotFound(9999))
    ));
}

#[test]
fn quick_paint_update() {
    let conn = open_memory().unwrap();
    let id = insert_entry(&conn, &new_entry("warrior_mt", 10)).unwrap();

    update_paint(&conn, id, 4, PaintStatus::InProgress).unwrap();
    let entry = get_entry(&conn, id).unwrap().unwrap();
    assert_eq!(entry.painted_quantity, 4);
    assert_eq!(entry.paint_status, PaintStatus::InProgress);

    // Validated against the stored owned quantity.
    assert!(matches!(
        update_paint(&conn, id, 11, PaintStatus::Painted),
        Err(OperationError::InvalidQuantity { painted: 11, owned: 10 })
    ));

    assert!(matches!(
        update_paint(&conn, 777, 1, PaintStatus::Painted),
        Err(OperationError::NotFound(777))
    ));
}

#[test]
fn delete_entry_cascades_options() {
    let conn = open_memory().unwrap();
    let id = insert_entry(
        &conn,
        &NewEntry {
            selected_options: vec!["shield".into()],
            ..new_entry("warrior_mt", 1)
        },
    )
    .unwrap();

    delete_entry(&conn, id).unwrap();
    assert!(get_entry(&conn, id).unwrap().is_none());

    let orphans: i64 = conn
        .query_row("SELECT COUNT(*) FROM entry_options", [], |row| row.get(0))
        .unwrap();
    assert_eq!(orphans, 0);

    assert!(matches!(
        delete_entry(&conn, id),
        Err(OperationError::NotFound(_))
    ));
}

#[test]
fn clear_collection_removes_everything() {
    let conn = open_memory().unwrap();
    insert_entry(&conn, &new_entry("a", 1)).unwrap();
    insert_entry(&conn, &new_entry("b", 2)).unwrap();

    assert_eq!(clear_collection(&conn).unwrap(), 2);
    assert!(load_collection(&conn).unwrap().is_empty());
}
