//! Core runtime configuration.
//!
//! Configuration is resolved once at process startup and then passed into core services.
//! Nothing in this crate reads environment variables during request handling; binaries read
//! `WISHLIST_DB_PATH` and hand the raw value to [`database_location_from_env_value`].

use crate::constants::{DEFAULT_DATABASE_PATH, IN_MEMORY_DATABASE};
use crate::{WishlistError, WishlistResult};
use std::path::{Path, PathBuf};

/// Where the place table lives.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DatabaseLocation {
    File(PathBuf),
    Memory,
}

/// Core configuration resolved at startup.
#[derive(Clone, Debug)]
pub struct CoreConfig {
    database: DatabaseLocation,
}

impl CoreConfig {
    pub fn new(database: DatabaseLocation) -> Self {
        Self { database }
    }

    pub fn database(&self) -> &DatabaseLocation {
        &self.database
    }

    /// Path of the database file, or `None` for an in-memory database.
    pub fn database_path(&self) -> Option<&Path> {
        match &self.database {
            DatabaseLocation::File(path) => Some(path),
            DatabaseLocation::Memory => None,
        }
    }
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self::new(DatabaseLocation::File(PathBuf::from(DEFAULT_DATABASE_PATH)))
    }
}

/// Parse the database location from an optional string value.
///
/// `None` or an empty/whitespace value yields the default file `wishlist.db`;
/// `:memory:` yields an in-memory database.
///
/// # Errors
///
/// Returns `WishlistError::InvalidInput` if the value names an existing directory.
pub fn database_location_from_env_value(value: Option<String>) -> WishlistResult<DatabaseLocation> {
    let value = value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty());

    match value.as_deref() {
        None => Ok(DatabaseLocation::File(PathBuf::from(DEFAULT_DATABASE_PATH))),
        Some(IN_MEMORY_DATABASE) => Ok(DatabaseLocation::Memory),
        Some(raw) => {
            let path = PathBuf::from(raw);
            if path.is_dir() {
                return Err(WishlistError::InvalidInput(format!(
                    "WISHLIST_DB_PATH points at a directory: {}",
                    path.display()
                )));
            }
            Ok(DatabaseLocation::File(path))
        }
    }
}
