//! Wishlist record manager.
//!
//! `WishlistService` owns the lifecycle of a `Place`: listing, creation and the one-way
//! transition to visited. It holds no cache; every operation reads or writes through to the
//! injected [`PlaceStore`].

use crate::place::{NewPlace, Place, PlaceId};
use crate::store::{PlaceListQuery, PlaceStore};
use crate::{WishlistError, WishlistResult};
use wishlist_types::PlaceName;

/// Use-case service over an injected place store.
pub struct WishlistService<S: PlaceStore> {
    store: S,
}

impl<S: PlaceStore> WishlistService<S> {
    /// Creates a service using the provided store implementation.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Lists every place not yet visited, ordered by name.
    ///
    /// An empty store yields an empty list.
    pub fn list_unvisited(&self) -> WishlistResult<Vec<Place>> {
        self.store.list(&PlaceListQuery::unvisited())
    }

    /// Lists every visited place, ordered by name.
    pub fn list_visited(&self) -> WishlistResult<Vec<Place>> {
        self.store.list(&PlaceListQuery::visited())
    }

    /// Creates a place from raw user input.
    ///
    /// # Errors
    ///
    /// Returns `WishlistError::Validation` when `name` is empty, whitespace-only or too long.
    /// Nothing is written in that case.
    pub fn add_place(&self, name: &str, visited: bool) -> WishlistResult<Place> {
        let name = PlaceName::new(name).inspect_err(|err| {
            tracing::debug!(error = %err, "add_place rejected");
        })?;
        self.create(&NewPlace { name, visited })
    }

    /// Creates a place from already-validated input.
    pub fn create(&self, new_place: &NewPlace) -> WishlistResult<Place> {
        let place = self.store.create(new_place)?;
        tracing::info!(place_id = %place.id, visited = place.visited, "place created");
        Ok(place)
    }

    /// Looks a place up by id.
    pub fn get_place(&self, id: PlaceId) -> WishlistResult<Option<Place>> {
        self.store.get(id)
    }

    /// Marks the place visited and returns its new state.
    ///
    /// Marking an already visited place succeeds and leaves it visited.
    ///
    /// # Errors
    ///
    /// Returns `WishlistError::NotFound` when no place has the given id.
    pub fn mark_visited(&self, id: PlaceId) -> WishlistResult<Place> {
        if let Err(err) = self.store.mark_visited(id) {
            if matches!(err, WishlistError::NotFound(_)) {
                tracing::warn!(place_id = %id, "mark_visited on unknown place");
            }
            return Err(err);
        }

        let place = self.store.get(id)?.ok_or(WishlistError::NotFound(id))?;
        tracing::info!(place_id = %id, "place marked visited");
        Ok(place)
    }

    /// Checks that the store answers queries.
    pub fn ping(&self) -> WishlistResult<()> {
        self.store.ping()
    }
}
