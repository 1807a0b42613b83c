//! SQLite persistence for the user's collection.
//!
//! Provides schema creation, CRUD operations on collection entries, and
//! read queries, backed by SQLite (via rusqlite with bundled feature).
//! The `painted <= owned` invariant is enforced here, at the edit
//! boundary, so the matching core can treat snapshots as already valid.

pub mod operations;
pub mod queries;
pub mod schema;

pub use rusqlite::Connection;

pub use operations::{
    NewEntry, OperationError, clear_collection, delete_entry, insert_entry, update_entry,
    update_paint,
};
pub use queries::{CollectionCounts, collection_counts, entries_for_model, get_entry,
    load_collection};
pub use schema::{SchemaError, open_database, open_memory};
