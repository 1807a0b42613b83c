//! Read queries for the collection database.

use muster_data::{CollectionEntry, PaintStatus};
use rusqlite::{Connection, Row, params};

use crate::operations::OperationError;

fn row_to_entry(row: &Row) -> rusqlite::Result<CollectionEntry> {
    Ok(CollectionEntry {
        id: row.get(0)?,
        model_id: row.get(1)?,
        owned_quantity: row.get(2)?,
        painted_quantity: row.get(3)?,
        paint_status: PaintStatus::from_str_loose(&row.get::<_, String>(4)?),
        notes: row.get(5)?,
        custom_name: row.get(6)?,
        date_added: row.get(7)?,
        purchase_date: row.get(8)?,
        storage_location: row.get(9)?,
        selected_options: Vec::new(),
    })
}

const ENTRY_COLUMNS: &str = "id, model_id, owned_quantity, painted_quantity, paint_status,
                             notes, custom_name, date_added, purchase_date, storage_location";

fn load_options(conn: &Connection, entry: &mut CollectionEntry) -> Result<(), OperationError> {
    let mut stmt = conn.prepare(
        "SELECT option_id FROM entry_options WHERE entry_id = ?1 ORDER BY option_id",
    )?;
    let options = stmt.query_map(params![entry.id], |row| row.get::<_, String>(0))?;
    entry.selected_options = options.collect::<Result<Vec<_>, _>>()?;
    Ok(())
}

/// Load the full collection snapshot, ordered by creation time then id.
///
/// The ordering is only promised to be stable for the duration of one
/// read; callers hand the snapshot to the matcher as-is.
pub fn load_collection(conn: &Connection) -> Result<Vec<CollectionEntry>, OperationError> {
    let mut stmt = conn.prepare(&format!(
        "SELECT {ENTRY_COLUMNS} FROM collection ORDER BY date_added, id"
    ))?;
    let rows = stmt.query_map([], row_to_entry)?;
    let mut entries = rows.collect::<Result<Vec<_>, _>>()?;

    for entry in &mut entries {
        load_options(conn, entry)?;
    }
    Ok(entries)
}

/// Fetch one entry by id.
pub fn get_entry(conn: &Connection, id: i64) -> Result<Option<CollectionEntry>, OperationError> {
    let mut stmt = conn.prepare(&format!(
        "SELECT {ENTRY_COLUMNS} FROM collection WHERE id = ?1"
    ))?;
    let result = stmt.query_row(params![id], row_to_entry);
    match result {
        Ok(mut entry) => {
            load_options(conn, &mut entry)?;
            Ok(Some(entry))
        }
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

/// All entries referencing one unit profile (a unit may be split across
/// entries with different paint state).
pub fn entries_for_model(
    conn: &Connection,
    model_id: &str,
) -> Result<Vec<CollectionEntry>, OperationError> {
    let mut stmt = conn.prepare(&format!(
        "SELECT {ENTRY_COLUMNS} FROM collection WHERE model_id = ?1 ORDER BY date_added, id"
    ))?;
    let rows = stmt.query_map(params![model_id], row_to_entry)?;
    let mut entries = rows.collect::<Result<Vec<_>, _>>()?;

    for entry in &mut entries {
        load_options(conn, entry)?;
    }
    Ok(entries)
}

/// Headline counts for the database.
#[derive(Debug, Clone, Copy)]
pub struct CollectionCounts {
    pub entries: u32,
    pub models_owned: u32,
    pub models_painted: u32,
}

pub fn collection_counts(conn: &Connection) -> Result<CollectionCounts, OperationError> {
    conn.query_row(
        "SELECT COUNT(*),
                COALESCE(SUM(owned_quantity), 0),
                COALESCE(SUM(painted_quantity), 0)
         FROM collection",
        [],
        |row| {
            Ok(CollectionCounts {
                entries: row.get(0)?,
                models_owned: row.get(1)?,
                models_painted: row.get(2)?,
            })
        },
    )
    .map_err(Into::into)
}
