//! Request and response bodies for the JSON API.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use wishlist_core::Place;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct PlaceRes {
    pub id: i64,
    pub name: String,
    pub visited: bool,
}

impl From<Place> for PlaceRes {
    fn from(place: Place) -> Self {
        Self {
            id: place.id.get(),
            name: place.name.into_inner(),
            visited: place.visited,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ListPlacesRes {
    pub places: Vec<PlaceRes>,
}

impl FromIterator<Place> for ListPlacesRes {
    fn from_iter<I: IntoIterator<Item = Place>>(iter: I) -> Self {
        Self {
            places: iter.into_iter().map(PlaceRes::from).collect(),
        }
    }
}

/// Body of `POST /api/places`.
///
/// `name` is kept as a raw string so that validation errors come from the core
/// rules rather than from JSON decoding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct AddPlaceReq {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub visited: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct HealthRes {
    pub ok: bool,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ErrorRes {
    pub error: String,
}

impl ErrorRes {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}
