//! HTML page handlers.
//!
//! Successful writes answer with `303 See Other` back to the wishlist so a browser refresh
//! does not resubmit the form.

use crate::error::PageError;
use crate::forms::AddPlaceForm;
use crate::render;
use crate::AppState;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::Form;
use wishlist_core::{PlaceId, WishlistError};

/// `GET /` — the wishlist of unvisited places.
pub async fn place_list(State(state): State<AppState>) -> Result<Html<String>, PageError> {
    let places = state.service().list_unvisited()?;
    Ok(Html(render::render_page(&render::wishlist_view(
        &places, None,
    ))))
}

/// `POST /` — add a place from the wishlist form.
///
/// Invalid input re-renders the wishlist with the validation message and `400 Bad Request`.
pub async fn add_place(
    State(state): State<AppState>,
    Form(form): Form<AddPlaceForm>,
) -> Result<Response, PageError> {
    let service = state.service();
    let outcome = form
        .visited()
        .and_then(|visited| service.add_place(form.name(), visited));

    match outcome {
        Ok(_) => Ok(Redirect::to("/").into_response()),
        Err(err @ (WishlistError::Validation(_) | WishlistError::InvalidInput(_))) => {
            let places = service.list_unvisited()?;
            let view = render::wishlist_view(&places, Some(err.to_string()));
            Ok((StatusCode::BAD_REQUEST, Html(render::render_page(&view))).into_response())
        }
        Err(err) => Err(err.into()),
    }
}

/// `POST /place/:id/was_visited` — mark a place visited.
///
/// An id that is not an integer cannot name a place, so it is a 404 like an unknown id.
pub async fn place_was_visited(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<Redirect, PageError> {
    let id = raw_id
        .parse::<PlaceId>()
        .map_err(|_| PageError::not_found())?;
    state.service().mark_visited(id)?;
    Ok(Redirect::to("/"))
}

/// `GET /visited` — places already visited.
pub async fn places_visited(State(state): State<AppState>) -> Result<Html<String>, PageError> {
    let places = state.service().list_visited()?;
    Ok(Html(render::render_page(&render::visited_view(&places))))
}

/// Fallback for unknown routes.
pub async fn not_found() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Html(render::render_not_found("Page not found")),
    )
}
