use muster_data::Dataset;
use muster_db::{Connection, NewEntry, insert_entry};

use crate::CliError;
use crate::commands::parse_paint_status;

pub(crate) struct AddArgs {
    pub model_id: String,
    pub quantity: u32,
    pub painted: u32,
    pub status: Option<String>,
    pub notes: Option<String>,
    pub name: Option<String>,
    pub options: Vec<String>,
    pub purchased: Option<String>,
}

/// Validate a `--purchased` date and normalize it to ISO form.
fn parse_purchase_date(raw: &str) -> Result<String, CliError> {
    let date = chrono::NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map_err(|_| CliError::other(format!("Invalid date '{raw}' (expected YYYY-MM-DD)")))?;
    Ok(date.format("%Y-%m-%d").to_string())
}

/// Create a collection entry. Unknown model ids are allowed (they display
/// as "Unknown Unit") but warned about, since they are usually typos.
pub(crate) fn run_add(conn: &Connection, dataset: &Dataset, args: AddArgs) -> Result<(), CliError> {
    let status = match &args.status {
        Some(raw) => parse_paint_status(raw)?,
        None => Default::default(),
    };
    let purchase_date = args.purchased.as_deref().map(parse_purchase_date).transpose()?;

    let unit = dataset.unit(&args.model_id);
    if unit.is_none() {
        log::warn!(
            "No unit '{}' in the dataset; entry will show as Unknown Unit",
            args.model_id,
        );
    }
    if let Some(unit) = unit {
        for option_id in &args.options {
            if !unit.options.iter().any(|o| &o.id == option_id) {
                log::warn!("Unit '{}' has no option '{}'", unit.name, option_id);
            }
        }
    }

    let id = insert_entry(
        conn,
        &NewEntry {
            model_id: args.model_id.clone(),
            owned_quantity: args.quantity,
            painted_quantity: args.painted,
            paint_status: status,
            notes: args.notes,
            custom_name: args.name,
            selected_options: args.options,
            purchase_date,
            storage_location: None,
        },
    )?;

    let shown = unit.map(|u| u.name.as_str()).unwrap_or(&args.model_id);
    log::info!("Added entry {id}: {} x{}", shown, args.quantity);
    Ok(())
}
