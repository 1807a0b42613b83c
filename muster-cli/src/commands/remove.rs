use muster_db::{Connection, clear_collection, delete_entry, get_entry};

use crate::CliError;

pub(crate) fn run_remove(conn: &Connection, id: i64) -> Result<(), CliError> {
    let entry = get_entry(conn, id)?.ok_or(CliError::UnknownEntry(id))?;
    delete_entry(conn, id)?;
    log::info!("Removed entry {id} ({})", entry.model_id);
    Ok(())
}

/// Delete every entry. Refuses without `--yes`; there is no undo.
pub(crate) fn run_clear(conn: &Connection, yes: bool) -> Result<(), CliError> {
    if !yes {
        log::warn!("This deletes the entire collection. Re-run with --yes to confirm.");
        return Ok(());
    }
    let deleted = clear_collection(conn)?;
    log::info!("Removed {deleted} entries");
    Ok(())
}
