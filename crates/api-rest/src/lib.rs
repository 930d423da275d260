//! # API REST
//!
//! HTTP boundary for the travel wishlist.
//!
//! Handles:
//! - HTML pages: the wishlist, the add-place form, mark-visited, the visited list
//! - A JSON API over the same operations, described by an OpenAPI document
//! - HTTP concerns (status mapping, redirects, CORS, request tracing)
//!
//! The record manager lives in `wishlist-core`; handlers only translate requests into its
//! operations and results into responses.

#![warn(rust_2018_idioms)]

pub mod api;
pub mod error;
pub mod forms;
pub mod pages;
pub mod render;

use axum::routing::{get, post};
use axum::Router;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use wishlist_core::{SqlitePlaceStore, WishlistService};

pub use api::ApiDoc;
pub use error::{ApiError, PageError};

/// Application state shared by all request handlers.
#[derive(Clone)]
pub struct AppState {
    service: Arc<WishlistService<SqlitePlaceStore>>,
}

impl AppState {
    pub fn new(service: WishlistService<SqlitePlaceStore>) -> Self {
        Self {
            service: Arc::new(service),
        }
    }

    pub fn service(&self) -> &WishlistService<SqlitePlaceStore> {
        &self.service
    }
}

/// Builds the routing table.
///
/// | Method | Path                        | Handler                    |
/// |--------|-----------------------------|----------------------------|
/// | GET    | `/`                         | wishlist page              |
/// | POST   | `/`                         | add place (form)           |
/// | POST   | `/place/:id/was_visited`    | mark visited (form)        |
/// | GET    | `/visited`                  | visited places page        |
/// | GET    | `/health`                   | store ping                 |
/// | GET    | `/api/places`               | list places (JSON)         |
/// | POST   | `/api/places`               | add place (JSON)           |
/// | GET    | `/api/places/:id`           | get place (JSON)           |
/// | POST   | `/api/places/:id/visited`   | mark visited (JSON)        |
/// | GET    | `/api-docs/openapi.json`    | OpenAPI document           |
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(pages::place_list).post(pages::add_place))
        .route("/place/:id/was_visited", post(pages::place_was_visited))
        .route("/visited", get(pages::places_visited))
        .route("/health", get(api::health))
        .route("/api/places", get(api::list_places).post(api::add_place))
        .route("/api/places/:id", get(api::get_place))
        .route("/api/places/:id/visited", post(api::mark_visited))
        .route("/api-docs/openapi.json", get(api::openapi))
        .fallback(pages::not_found)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
