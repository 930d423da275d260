//! JSON API handlers with their OpenAPI descriptions.

use crate::error::ApiError;
use crate::AppState;
use api_shared::{AddPlaceReq, ErrorRes, HealthRes, HealthService, ListPlacesRes, PlaceRes};
use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::Json;
use serde::Deserialize;
use utoipa::{IntoParams, OpenApi};
use wishlist_core::PlaceId;

#[derive(OpenApi)]
#[openapi(
    paths(health, list_places, add_place, get_place, mark_visited),
    components(schemas(HealthRes, ListPlacesRes, PlaceRes, AddPlaceReq, ErrorRes))
)]
pub struct ApiDoc;

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListPlacesParams {
    /// `true` lists visited places; omitted or `false` lists the wishlist.
    pub visited: Option<bool>,
}

/// `GET /api-docs/openapi.json`
pub async fn openapi() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Store reachable", body = HealthRes),
        (status = 503, description = "Store unreachable", body = HealthRes)
    )
)]
/// Health check endpoint; pings the store.
#[axum::debug_handler]
pub async fn health(State(state): State<AppState>) -> (StatusCode, Json<HealthRes>) {
    let res = HealthService::check_health(state.service());
    let status = if res.ok {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };
    (status, Json(res))
}

#[utoipa::path(
    get,
    path = "/api/places",
    params(ListPlacesParams),
    responses(
        (status = 200, description = "Places matching the filter", body = ListPlacesRes),
        (status = 400, description = "Unparseable query string", body = ErrorRes),
        (status = 500, description = "Internal server error", body = ErrorRes)
    )
)]
/// Lists unvisited places, or visited ones with `?visited=true`.
#[axum::debug_handler]
pub async fn list_places(
    State(state): State<AppState>,
    params: Result<Query<ListPlacesParams>, QueryRejection>,
) -> Result<Json<ListPlacesRes>, ApiError> {
    let Query(params) = params.map_err(|rejection| ApiError::bad_request(rejection.body_text()))?;
    let places = if params.visited.unwrap_or(false) {
        state.service().list_visited()?
    } else {
        state.service().list_unvisited()?
    };
    Ok(Json(places.into_iter().collect()))
}

#[utoipa::path(
    post,
    path = "/api/places",
    request_body = AddPlaceReq,
    responses(
        (status = 201, description = "Place created", body = PlaceRes),
        (status = 400, description = "Invalid place name or malformed body", body = ErrorRes),
        (status = 500, description = "Internal server error", body = ErrorRes)
    )
)]
/// Adds a place to the wishlist.
#[axum::debug_handler]
pub async fn add_place(
    State(state): State<AppState>,
    payload: Result<Json<AddPlaceReq>, JsonRejection>,
) -> Result<(StatusCode, Json<PlaceRes>), ApiError> {
    let Json(req) = payload.map_err(|rejection| ApiError::bad_request(rejection.body_text()))?;
    let place = state.service().add_place(&req.name, req.visited)?;
    Ok((StatusCode::CREATED, Json(place.into())))
}

#[utoipa::path(
    get,
    path = "/api/places/{id}",
    params(("id" = i64, Path, description = "Place id")),
    responses(
        (status = 200, description = "The place", body = PlaceRes),
        (status = 404, description = "No place with this id", body = ErrorRes)
    )
)]
/// Reads one place by id.
#[axum::debug_handler]
pub async fn get_place(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<Json<PlaceRes>, ApiError> {
    let id = parse_id(&raw_id)?;
    let place = state
        .service()
        .get_place(id)?
        .ok_or_else(|| ApiError::not_found("Place not found"))?;
    Ok(Json(place.into()))
}

#[utoipa::path(
    post,
    path = "/api/places/{id}/visited",
    params(("id" = i64, Path, description = "Place id")),
    responses(
        (status = 200, description = "Place is now visited", body = PlaceRes),
        (status = 404, description = "No place with this id", body = ErrorRes)
    )
)]
/// Marks a place visited. Repeating the call is harmless.
#[axum::debug_handler]
pub async fn mark_visited(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<Json<PlaceRes>, ApiError> {
    let id = parse_id(&raw_id)?;
    let place = state.service().mark_visited(id)?;
    Ok(Json(place.into()))
}

fn parse_id(raw: &str) -> Result<PlaceId, ApiError> {
    raw.parse::<PlaceId>()
        .map_err(|_| ApiError::not_found("Place not found"))
}
