use muster_db::{Connection, get_entry, update_entry, update_paint};

use crate::CliError;
use crate::commands::parse_paint_status;

pub(crate) struct UpdateArgs {
    pub id: i64,
    pub owned: Option<u32>,
    pub painted: Option<u32>,
    pub status: Option<String>,
    pub notes: Option<String>,
    pub name: Option<String>,
    pub options: Option<Vec<String>>,
}

/// Edit flow: apply the provided fields, leave the rest untouched.
pub(crate) fn run_update(conn: &Connection, args: UpdateArgs) -> Result<(), CliError> {
    let mut entry = get_entry(conn, args.id)?.ok_or(CliError::UnknownEntry(args.id))?;

    if let Some(owned) = args.owned {
        entry.owned_quantity = owned;
    }
    if let Some(painted) = args.painted {
        entry.painted_quantity = painted;
    }
    if let Some(raw) = &args.status {
        entry.paint_status = parse_paint_status(raw)?;
    }
    if let Some(notes) = args.notes {
        entry.notes = if notes.is_empty() { None } else { Some(notes) };
    }
    if let Some(name) = args.name {
        entry.custom_name = if name.is_empty() { None } else { Some(name) };
    }
    if let Some(options) = args.options {
        entry.selected_options = options;
    }

    update_entry(conn, &entry)?;
    log::info!("Updated entry {}", entry.id);
    Ok(())
}

/// Quick paint-progress update.
pub(crate) fn run_paint(
    conn: &Connection,
    id: i64,
    painted: u32,
    status: Option<String>,
) -> Result<(), CliError> {
    let current = get_entry(conn, id)?.ok_or(CliError::UnknownEntry(id))?;
    let status = match &status {
        Some(raw) => parse_paint_status(raw)?,
        None => current.paint_status,
    };

    update_paint(conn, id, painted, status)?;
    log::info!(
        "Entry {id}: {painted}/{} painted ({})",
        current.owned_quantity,
        status.as_str(),
    );
    Ok(())
}
