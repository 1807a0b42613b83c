//! muster CLI
//!
//! Command-line interface for tracking a miniatures collection and
//! checking which scenarios it can field.

use std::io::Write;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

mod commands;
mod error;
mod settings;

use commands::{AddArgs, ScenarioFilters, UpdateArgs};
use error::CliError;
use settings::Theme;

#[derive(Parser)]
#[command(name = "muster")]
#[command(about = "Track your miniatures collection and muster forces for scenarios", long_about = None)]
struct Cli {
    /// Dataset directory (units.json, scenarios.json, scenario_roles.json)
    #[arg(short = 'd', long, global = true)]
    data_dir: Option<PathBuf>,

    /// Collection database path
    #[arg(long, global = true)]
    db: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

/// Common arguments for commands that filter the collection listing.
#[derive(Args, Clone)]
struct CollectionFilterArgs {
    /// Army name (e.g. "Minas Tirith")
    #[arg(short, long)]
    army: Option<String>,

    /// Paint status (unpainted, primed, wip, painted, based)
    #[arg(short, long)]
    status: Option<String>,

    /// Search display names, armies, and notes
    #[arg(long)]
    search: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Search the unit dataset
    Units {
        /// Name fragment to search for
        query: Option<String>,

        /// Restrict to one army list
        #[arg(short, long)]
        army: Option<String>,

        /// Heroes only
        #[arg(long)]
        heroes: bool,
    },

    /// Show one unit profile with its options
    Unit {
        /// Unit model id (e.g. gondor_ranger)
        model_id: String,
    },

    /// Add a unit to the collection
    Add {
        /// Unit model id from the dataset
        model_id: String,

        /// Number of models owned
        #[arg(short, long, default_value_t = 1)]
        quantity: u32,

        /// Number already painted
        #[arg(long, default_value_t = 0)]
        painted: u32,

        /// Paint status (unpainted, primed, wip, painted, based)
        #[arg(short, long)]
        status: Option<String>,

        /// Free-text notes
        #[arg(long)]
        notes: Option<String>,

        /// Custom display name override
        #[arg(long)]
        name: Option<String>,

        /// Selected wargear option ids
        #[arg(short = 'o', long, value_delimiter = ',')]
        options: Option<Vec<String>>,

        /// Purchase date (YYYY-MM-DD)
        #[arg(long)]
        purchased: Option<String>,
    },

    /// List the collection
    List {
        #[command(flatten)]
        filters: CollectionFilterArgs,
    },

    /// Edit a collection entry
    Update {
        /// Entry id (see `muster list`)
        id: i64,

        /// Owned quantity
        #[arg(short = 'q', long)]
        owned: Option<u32>,

        /// Painted quantity
        #[arg(long)]
        painted: Option<u32>,

        /// Paint status
        #[arg(short, long)]
        status: Option<String>,

        /// Replace notes (empty string clears)
        #[arg(long)]
        notes: Option<String>,

        /// Replace the custom display name (empty string clears)
        #[arg(long)]
        name: Option<String>,

        /// Replace selected wargear option ids
        #[arg(short = 'o', long, value_delimiter = ',')]
        options: Option<Vec<String>>,
    },

    /// Quick paint-progress update
    Paint {
        /// Entry id
        id: i64,

        /// Painted quantity
        painted: u32,

        /// New paint status (defaults to the current one)
        #[arg(short, long)]
        status: Option<String>,
    },

    /// Remove a collection entry
    Remove {
        /// Entry id
        id: i64,
    },

    /// Delete the entire collection
    Clear {
        /// Confirm deletion
        #[arg(long)]
        yes: bool,
    },

    /// Collection statistics
    Stats,

    /// List scenarios with playability against your collection
    Scenarios {
        /// Filter by location slug (e.g. helms_deep)
        #[arg(short, long)]
        location: Option<String>,

        /// Filter by sourcebook title fragment
        #[arg(short, long)]
        book: Option<String>,

        /// Search names, blurbs, and locations
        #[arg(long)]
        search: Option<String>,

        /// Only scenarios where you can field at least part of a side
        #[arg(short, long)]
        playable: bool,
    },

    /// Scenario detail with per-role ownership checks
    Scenario {
        /// Scenario id
        id: u32,
    },

    /// Manage persisted settings
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Show the saved settings
    Show,

    /// Print the settings file path
    Path,

    /// Set the display theme (dark or light)
    Theme { value: String },

    /// Set the default dataset directory
    DataDir { dir: PathBuf },
}

fn main() {
    init_logging();

    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        log::error!("{e}");
        std::process::exit(1);
    }
}

/// Plain message-only format: command output goes through the log facade
/// so RUST_LOG can silence or augment it uniformly.
fn init_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format(|buf, record| match record.level() {
            log::Level::Info => writeln!(buf, "{}", record.args()),
            level => writeln!(buf, "{}: {}", level.to_string().to_lowercase(), record.args()),
        })
        .init();
}

/// Blank output line.
pub(crate) fn log_blank() {
    log::info!("");
}

fn open_dataset(data_dir: Option<PathBuf>) -> Result<muster_data::Dataset, CliError> {
    let dir = settings::resolve_data_dir(data_dir);
    Ok(muster_data::Dataset::load(&dir)?)
}

fn open_collection(db: Option<PathBuf>) -> Result<muster_db::Connection, CliError> {
    let path = settings::resolve_db_path(db);
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    Ok(muster_db::open_database(&path)?)
}

fn run(cli: Cli) -> Result<(), CliError> {
    let theme = settings::load_theme();

    match cli.command {
        Commands::Units { query, army, heroes } => {
            let dataset = open_dataset(cli.data_dir)?;
            commands::run_units(&dataset, query, army, heroes)
        }
        Commands::Unit { model_id } => {
            let dataset = open_dataset(cli.data_dir)?;
            commands::run_unit(&dataset, &model_id)
        }
        Commands::Add {
            model_id,
            quantity,
            painted,
            status,
            notes,
            name,
            options,
            purchased,
        } => {
            let dataset = open_dataset(cli.data_dir)?;
            let conn = open_collection(cli.db)?;
            commands::run_add(
                &conn,
                &dataset,
                AddArgs {
                    model_id,
                    quantity,
                    painted,
                    status,
                    notes,
                    name,
                    options: options.unwrap_or_default(),
                    purchased,
                },
            )
        }
        Commands::List { filters } => {
            let dataset = open_dataset(cli.data_dir)?;
            let conn = open_collection(cli.db)?;
            commands::run_list(&conn, &dataset, filters.army, filters.status, filters.search)
        }
        Commands::Update {
            id,
            owned,
            painted,
            status,
            notes,
            name,
            options,
        } => {
            let conn = open_collection(cli.db)?;
            commands::run_update(
                &conn,
                UpdateArgs {
                    id,
                    owned,
                    painted,
                    status,
                    notes,
                    name,
                    options,
                },
            )
        }
        Commands::Paint { id, painted, status } => {
            let conn = open_collection(cli.db)?;
            commands::run_paint(&conn, id, painted, status)
        }
        Commands::Remove { id } => {
            let conn = open_collection(cli.db)?;
            commands::run_remove(&conn, id)
        }
        Commands::Clear { yes } => {
            let conn = open_collection(cli.db)?;
            commands::run_clear(&conn, yes)
        }
        Commands::Stats => {
            let dataset = open_dataset(cli.data_dir)?;
            let conn = open_collection(cli.db)?;
            commands::run_stats(&conn, &dataset)
        }
        Commands::Scenarios {
            location,
            book,
            search,
            playable,
        } => {
            let dataset = open_dataset(cli.data_dir)?;
            let conn = open_collection(cli.db)?;
            commands::run_scenarios(
                &conn,
                &dataset,
                theme,
                ScenarioFilters {
                    location,
                    book,
                    search,
                    playable,
                },
            )
        }
        Commands::Scenario { id } => {
            let dataset = open_dataset(cli.data_dir)?;
            let conn = open_collection(cli.db)?;
            commands::run_scenario(&conn, &dataset, theme, id)
        }
        Commands::Config { action } => match action {
            ConfigAction::Show => commands::run_config_show(),
            ConfigAction::Path => commands::run_config_path(),
            ConfigAction::Theme { value } => commands::run_config_theme(value),
            ConfigAction::DataDir { dir } => commands::run_config_data_dir(dir),
        },
    }
}
