//! SQLite-backed place store.
//!
//! The connection is owned behind a `Mutex` so the store can be shared between request
//! handlers; every call holds the lock for exactly one statement.

use crate::db::DbError;
use crate::place::{NewPlace, Place, PlaceId};
use crate::store::{PlaceListQuery, PlaceStore};
use crate::{WishlistError, WishlistResult};
use rusqlite::{params, Connection, OptionalExtension, Row};
use std::sync::{Mutex, MutexGuard};
use wishlist_types::PlaceName;

const PLACE_SELECT_SQL: &str = "SELECT id, name, visited FROM places";
const PLACE_ORDER_SQL: &str = "ORDER BY name COLLATE NOCASE ASC, id ASC";

pub struct SqlitePlaceStore {
    conn: Mutex<Connection>,
}

impl SqlitePlaceStore {
    /// Wraps a connection returned by [`crate::db::open_db`] or
    /// [`crate::db::open_db_in_memory`]; migrations must already be applied.
    pub fn new(conn: Connection) -> Self {
        Self {
            conn: Mutex::new(conn),
        }
    }

    fn conn(&self) -> WishlistResult<MutexGuard<'_, Connection>> {
        self.conn
            .lock()
            .map_err(|_| WishlistError::Db(DbError::LockPoisoned))
    }
}

impl PlaceStore for SqlitePlaceStore {
    fn create(&self, new_place: &NewPlace) -> WishlistResult<Place> {
        let conn = self.conn()?;
        conn.execute(
            "INSERT INTO places (name, visited) VALUES (?1, ?2);",
            params![new_place.name.as_str(), new_place.visited],
        )?;
        let id = PlaceId::new(conn.last_insert_rowid());

        Ok(Place {
            id,
            name: new_place.name.clone(),
            visited: new_place.visited,
        })
    }

    fn get(&self, id: PlaceId) -> WishlistResult<Option<Place>> {
        let conn = self.conn()?;
        let mut stmt = conn.prepare(&format!("{PLACE_SELECT_SQL} WHERE id = ?1;"))?;
        let raw = stmt
            .query_row([id.get()], RawPlace::from_row)
            .optional()?;

        raw.map(RawPlace::into_place).transpose()
    }

    fn list(&self, query: &PlaceListQuery) -> WishlistResult<Vec<Place>> {
        let conn = self.conn()?;
        let raws = match query.visited {
            Some(visited) => {
                let mut stmt = conn.prepare(&format!(
                    "{PLACE_SELECT_SQL} WHERE visited = ?1 {PLACE_ORDER_SQL};"
                ))?;
                let rows = stmt.query_map([visited], RawPlace::from_row)?;
                rows.collect::<Result<Vec<_>, _>>()?
            }
            None => {
                let mut stmt = conn.prepare(&format!("{PLACE_SELECT_SQL} {PLACE_ORDER_SQL};"))?;
                let rows = stmt.query_map([], RawPlace::from_row)?;
                rows.collect::<Result<Vec<_>, _>>()?
            }
        };

        raws.into_iter().map(RawPlace::into_place).collect()
    }

    fn mark_visited(&self, id: PlaceId) -> WishlistResult<()> {
        let conn = self.conn()?;
        // SQLite counts matched rows, so re-marking a visited place still reports one change.
        let changed = conn.execute("UPDATE places SET visited = 1 WHERE id = ?1;", [id.get()])?;

        if changed == 0 {
            return Err(WishlistError::NotFound(id));
        }

        Ok(())
    }

    fn ping(&self) -> WishlistResult<()> {
        let conn = self.conn()?;
        conn.query_row("SELECT 1;", [], |row| row.get::<_, i64>(0))?;
        Ok(())
    }
}

/// Row as stored, before domain validation.
struct RawPlace {
    id: i64,
    name: String,
    visited: i64,
}

impl RawPlace {
    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get("id")?,
            name: row.get("name")?,
            visited: row.get("visited")?,
        })
    }

    fn into_place(self) -> WishlistResult<Place> {
        let name = PlaceName::new(&self.name).map_err(|err| {
            WishlistError::InvalidData(format!(
                "invalid name `{}` in places.name for id {}: {err}",
                self.name, self.id
            ))
        })?;

        let visited = match self.visited {
            0 => false,
            1 => true,
            other => {
                return Err(WishlistError::InvalidData(format!(
                    "invalid visited value `{other}` in places.visited for id {}",
                    self.id
                )));
            }
        };

        Ok(Place {
            id: PlaceId::new(self.id),
            name,
            visited,
        })
    }
}
