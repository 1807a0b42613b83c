//! Write operations on the collection.

use muster_data::{CollectionEntry, PaintStatus};
use rusqlite::{Connection, params};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum OperationError {
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
    #[error("Entry not found: id {0}")]
    NotFound(i64),
    #[error("Painted quantity {painted} exceeds owned quantity {owned}")]
    InvalidQuantity { painted: u32, owned: u32 },
}

/// Fields for a new collection entry; id and date_added are db-assigned.
#[derive(Debug, Clone, Default)]
pub struct NewEntry {
    pub model_id: String,
    pub owned_quantity: u32,
    pub painted_quantity: u32,
    pub paint_status: PaintStatus,
    pub notes: Option<String>,
    pub custom_name: Option<String>,
    pub selected_options: Vec<String>,
    pub purchase_date: Option<String>,
    pub storage_location: Option<String>,
}

fn check_quantities(painted: u32, owned: u32) -> Result<(), OperationError> {
    if painted > owned {
        return Err(OperationError::InvalidQuantity { painted, owned });
    }
    Ok(())
}

fn replace_options(
    conn: &Connection,
    entry_id: i64,
    options: &[String],
) -> Result<(), OperationError> {
    conn.execute(
        "DELETE FROM entry_options WHERE entry_id = ?1",
        params![entry_id],
    )?;
    for option_id in options {
        conn.execute(
            "INSERT OR IGNORE INTO entry_options (entry_id, option_id) VALUES (?1, ?2)",
            params![entry_id, option_id],
        )?;
    }
    Ok(())
}

/// Insert a new collection entry (the add-unit flow). Returns the assigned id.
pub fn insert_entry(conn: &Connection, new: &NewEntry) -> Result<i64, OperationError> {
    check_quantities(new.painted_quantity, new.owned_quantity)?;

    conn.execute(
        "INSERT INTO collection (model_id, owned_quantity, painted_quantity, paint_status,
                                 notes, custom_name, purchase_date, storage_location)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
        params![
            new.model_id,
            new.owned_quantity,
            new.painted_quantity,
            new.paint_status.as_str(),
            new.notes,
            new.custom_name,
            new.purchase_date,
            new.storage_location,
        ],
    )?;
    let id = conn.last_insert_rowid();

    replace_options(conn, id, &new.selected_options)?;

    log::debug!("inserted collection entry {id} ({})", new.model_id);
    Ok(id)
}

/// Update every editable field of an entry (the edit flow).
pub fn update_entry(conn: &Connection, entry: &CollectionEntry) -> Result<(), OperationError> {
    check_quantities(entry.painted_quantity, entry.owned_quantity)?;

    let changed = conn.execute(
        "UPDATE collection
         SET model_id = ?2, owned_quantity = ?3, painted_quantity = ?4, paint_status = ?5,
             notes = ?6, custom_name = ?7, purchase_date = ?8, storage_location = ?9
         WHERE id = ?1",
        params![
            entry.id,
            entry.model_id,
            entry.owned_quantity,
            entry.painted_quantity,
            entry.paint_status.as_str(),
            entry.notes,
            entry.custom_name,
            entry.purchase_date,
            entry.storage_location,
        ],
    )?;
    if changed == 0 {
        return Err(OperationError::NotFound(entry.id));
    }

    replace_options(conn, entry.id, &entry.selected_options)?;
    Ok(())
}

/// Quick paint-progress update: set the painted count and status without
/// touching the rest of the entry. Validated against the stored owned
/// quantity.
pub fn update_paint(
    conn: &Connection,
    id: i64,
    painted_quantity: u32,
    paint_status: PaintStatus,
) -> Result<(), OperationError> {
    let owned: u32 = conn
        .query_row(
            "SELECT owned_quantity FROM collection WHERE id = ?1",
            params![id],
            |row| row.get(0),
        )
        .map_err(|e| match e {
            rusqlite::Error::QueryReturnedNoRows => OperationError::NotFound(id),
            other => other.into(),
        })?;
    check_quantities(painted_quantity, owned)?;

    conn.execute(
        "UPDATE collection SET painted_quantity = ?2, paint_status = ?3 WHERE id = ?1",
        params![id, painted_quantity, paint_status.as_str()],
    )?;
    Ok(())
}

/// Delete an entry and its selected options.
pub fn delete_entry(conn: &Connection, id: i64) -> Result<(), OperationError> {
    let changed = conn.execute("DELETE FROM collection WHERE id = ?1", params![id])?;
    if changed == 0 {
        return Err(OperationError::NotFound(id));
    }
    Ok(())
}

/// Remove every entry. Returns the number deleted.
pub fn clear_collection(conn: &Connection) -> Result<usize, OperationError> {
    let deleted = conn.execute("DELETE FROM collection", [])?;
    log::debug!("cleared {deleted} collection entries");
    Ok(deleted)
}
