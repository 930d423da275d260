//! Constants used throughout the wishlist core crate.

/// Default SQLite database file when no explicit path is configured.
pub const DEFAULT_DATABASE_PATH: &str = "wishlist.db";

/// Value of `WISHLIST_DB_PATH` that selects a throwaway in-memory database.
pub const IN_MEMORY_DATABASE: &str = ":memory:";

/// How long a connection waits on a locked database before giving up.
pub const BUSY_TIMEOUT_SECS: u64 = 5;
