//! # Wishlist Core
//!
//! Core business logic for the travel wishlist.
//!
//! This crate owns the `Place` record and everything needed to persist it:
//! - SQLite connection bootstrap and schema migrations (`db`)
//! - The `PlaceStore` storage contract and its SQLite implementation (`store`)
//! - `WishlistService`, the record manager behind list / add / mark-visited (`service`)
//!
//! **No API concerns**: HTTP routing, rendering and transport types belong in `api-rest`
//! and `api-shared`.

pub mod config;
pub mod constants;
pub mod db;
pub mod error;
pub mod place;
pub mod service;
pub mod store;

pub use config::{database_location_from_env_value, CoreConfig, DatabaseLocation};
pub use error::{WishlistError, WishlistResult};
pub use place::{NewPlace, Place, PlaceId};
pub use service::WishlistService;
pub use store::sqlite::SqlitePlaceStore;
pub use store::{PlaceListQuery, PlaceStore};

pub use wishlist_types::{PlaceName, TextError, PLACE_NAME_MAX_CHARS};

/// Opens the configured database and wraps it in a ready-to-use service.
///
/// Migrations are applied before the service is returned.
pub fn open_service(cfg: &CoreConfig) -> WishlistResult<WishlistService<SqlitePlaceStore>> {
    let conn = match cfg.database() {
        DatabaseLocation::File(path) => db::open_db(path)?,
        DatabaseLocation::Memory => db::open_db_in_memory()?,
    };
    Ok(WishlistService::new(SqlitePlaceStore::new(conn)))
}
