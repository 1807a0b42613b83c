//! Shared application settings (data directory, database path, theme).
//!
//! All persisted preferences live in `~/.config/muster/settings.toml`.
//! Writes are surgical `toml::Value` updates with an atomic rename so
//! unrelated keys survive a partial edit.

use std::io;
use std::path::{Path, PathBuf};

/// Display theme preference. Loaded once at startup; toggled via an
/// explicit setter that persists the new value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub(crate) fn as_str(&self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }

    pub(crate) fn from_str_loose(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "dark" => Some(Self::Dark),
            "light" => Some(Self::Light),
            _ => None,
        }
    }
}

/// Canonical path to the settings file: `~/.config/muster/settings.toml`.
pub(crate) fn settings_path() -> PathBuf {
    let config = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    config.join("muster").join("settings.toml")
}

/// Resolve the dataset directory using a priority chain:
///
/// 1. CLI override (if `Some`)
/// 2. Saved `data.dir` in `settings.toml`
/// 3. `./data`
pub(crate) fn resolve_data_dir(cli_override: Option<PathBuf>) -> PathBuf {
    if let Some(p) = cli_override {
        return p;
    }
    if let Some(p) = load_string_key("data", "dir") {
        return PathBuf::from(p);
    }
    PathBuf::from("data")
}

/// Resolve the collection database path:
///
/// 1. CLI override
/// 2. Saved `data.db` in `settings.toml`
/// 3. Platform data dir (`~/.local/share/muster/collection.sqlite3`)
pub(crate) fn resolve_db_path(cli_override: Option<PathBuf>) -> PathBuf {
    if let Some(p) = cli_override {
        return p;
    }
    if let Some(p) = load_string_key("data", "db") {
        return PathBuf::from(p);
    }
    let base = dirs::data_dir().unwrap_or_else(|| PathBuf::from("."));
    base.join("muster").join("collection.sqlite3")
}

/// Read the persisted theme, defaulting to dark.
pub(crate) fn load_theme() -> Theme {
    load_string_key("display", "theme")
        .and_then(|s| Theme::from_str_loose(&s))
        .unwrap_or_default()
}

/// Persist the theme preference.
pub(crate) fn save_theme(theme: Theme) -> io::Result<()> {
    save_string_key("display", "theme", theme.as_str())
}

/// Persist the dataset directory.
pub(crate) fn save_data_dir(dir: &Path) -> io::Result<()> {
    save_string_key("data", "dir", &dir.to_string_lossy())
}

/// Load the full settings file as a pretty-printed TOML string for display.
pub(crate) fn load_settings_string() -> Option<String> {
    let contents = std::fs::read_to_string(settings_path()).ok()?;
    let doc: toml::Value = contents.parse().ok()?;
    toml::to_string_pretty(&doc).ok()
}

fn load_string_key(table: &str, key: &str) -> Option<String> {
    let contents = std::fs::read_to_string(settings_path()).ok()?;
    let doc: toml::Value = contents.parse().ok()?;
    let value = doc.get(table)?.get(key)?.as_str()?;
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

fn save_string_key(table: &str, key: &str, value: &str) -> io::Result<()> {
    let settings = settings_path();
    let mut doc: toml::Value = if let Ok(contents) = std::fs::read_to_string(&settings) {
        contents
            .parse()
            .unwrap_or_else(|_| toml::Value::Table(Default::default()))
    } else {
        toml::Value::Table(Default::default())
    };

    let root = doc
        .as_table_mut()
        .ok_or_else(|| io::Error::other("settings.toml root is not a table"))?;
    let section = root
        .entry(table)
        .or_insert_with(|| toml::Value::Table(Default::default()));
    let section_table = section
        .as_table_mut()
        .ok_or_else(|| io::Error::other(format!("[{table}] is not a table")))?;
    section_table.insert(key.to_string(), toml::Value::String(value.to_string()));

    // Write atomically
    if let Some(parent) = settings.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let serialized = toml::to_string_pretty(&doc).map_err(io::Error::other)?;
    let tmp = settings.with_extension("toml.tmp");
    std::fs::write(&tmp, &serialized)?;
    std::fs::rename(&tmp, &settings)?;

    Ok(())
}
