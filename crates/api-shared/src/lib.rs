//! # API Shared
//!
//! Transport types and shared services for the wishlist HTTP surfaces.
//!
//! Contains:
//! - Request/response DTOs (`dto` module), with OpenAPI schemas
//! - `HealthService`, which turns a store ping into a `HealthRes`
//!
//! Used by `api-rest`; the core crate knows nothing about these types.

pub mod dto;
pub mod health;

pub use dto::{AddPlaceReq, ErrorRes, HealthRes, ListPlacesRes, PlaceRes};
pub use health::HealthService;
