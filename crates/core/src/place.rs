//! The `Place` record.
//!
//! A place is created unvisited unless the caller says otherwise. The only mutation is the
//! one-way transition to visited, performed by `PlaceStore::mark_visited`; places are never
//! deleted.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use wishlist_types::PlaceName;

/// Store-assigned identifier of a place. Never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlaceId(i64);

impl PlaceId {
    pub const fn new(raw: i64) -> Self {
        Self(raw)
    }

    pub const fn get(self) -> i64 {
        self.0
    }
}

impl fmt::Display for PlaceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for PlaceId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse::<i64>().map(Self)
    }
}

/// A persisted wishlist entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Place {
    pub id: PlaceId,
    pub name: PlaceName,
    pub visited: bool,
}

/// Input for creating a place; the id is assigned by the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPlace {
    pub name: PlaceName,
    pub visited: bool,
}
