//! Storage contract for places.
//!
//! The record manager talks to storage only through [`PlaceStore`], so the backing engine is
//! injected rather than ambient. Implementations must report a missing id on mutation as
//! `WishlistError::NotFound` and must reject invalid persisted rows instead of masking them.

pub mod sqlite;

use crate::place::{NewPlace, Place, PlaceId};
use crate::WishlistResult;

/// Filter for listing places.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PlaceListQuery {
    /// `None` lists every place.
    pub visited: Option<bool>,
}

impl PlaceListQuery {
    pub fn unvisited() -> Self {
        Self {
            visited: Some(false),
        }
    }

    pub fn visited() -> Self {
        Self {
            visited: Some(true),
        }
    }
}

/// Create / get-by-id / list-where / mark-visited over the place collection.
///
/// The only mutation is the one-way transition to visited. Listings are ordered by name
/// (case-insensitive) and then id, so repeated calls without intervening writes return the
/// same sequence.
pub trait PlaceStore: Send + Sync {
    fn create(&self, new_place: &NewPlace) -> WishlistResult<Place>;
    fn get(&self, id: PlaceId) -> WishlistResult<Option<Place>>;
    fn list(&self, query: &PlaceListQuery) -> WishlistResult<Vec<Place>>;
    fn mark_visited(&self, id: PlaceId) -> WishlistResult<()>;
    fn ping(&self) -> WishlistResult<()>;
}
