//! Mapping of core errors onto HTTP responses.
//!
//! `Validation`, `InvalidInput` and undecodable request bodies or queries become 400.
//! `NotFound` becomes 404. Storage failures become 500 with a generic body; their details
//! only reach the logs.

use crate::render;
use api_shared::ErrorRes;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::Json;
use wishlist_core::WishlistError;

/// Error returned by the JSON API.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    /// A request the extractors could not decode.
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            message: message.into(),
        }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<WishlistError> for ApiError {
    fn from(err: WishlistError) -> Self {
        match &err {
            WishlistError::Validation(_) | WishlistError::InvalidInput(_) => Self {
                status: StatusCode::BAD_REQUEST,
                message: err.to_string(),
            },
            WishlistError::NotFound(_) => Self {
                status: StatusCode::NOT_FOUND,
                message: "Place not found".into(),
            },
            WishlistError::Db(_) | WishlistError::InvalidData(_) => {
                tracing::error!(error = %err, "request failed");
                Self {
                    status: StatusCode::INTERNAL_SERVER_ERROR,
                    message: "Internal error".into(),
                }
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(ErrorRes::new(self.message))).into_response()
    }
}

/// Error returned by the HTML pages; same status mapping, HTML body.
#[derive(Debug)]
pub struct PageError(ApiError);

impl PageError {
    pub fn not_found() -> Self {
        Self(ApiError::not_found("Place not found"))
    }
}

impl From<WishlistError> for PageError {
    fn from(err: WishlistError) -> Self {
        Self(ApiError::from(err))
    }
}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        let body = if self.0.status == StatusCode::INTERNAL_SERVER_ERROR {
            render::render_server_error()
        } else {
            render::render_not_found(&self.0.message)
        };
        (self.0.status, Html(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wishlist_core::db::DbError;
    use wishlist_core::{PlaceId, TextError};

    #[test]
    fn status_mapping_follows_error_kind() {
        assert_eq!(
            ApiError::from(WishlistError::Validation(TextError::Empty)).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::from(WishlistError::NotFound(PlaceId::new(200))).status(),
            StatusCode::NOT_FOUND
        );

        let internal = ApiError::from(WishlistError::Db(DbError::LockPoisoned));
        assert_eq!(internal.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(internal.message(), "Internal error");
    }

    #[test]
    fn bad_request_keeps_extractor_message() {
        let err = ApiError::bad_request("Failed to parse the request body as JSON");
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.message(), "Failed to parse the request body as JSON");
    }

    #[test]
    fn validation_message_is_passed_through() {
        let err = ApiError::from(WishlistError::Validation(TextError::Empty));
        assert_eq!(err.message(), "Place name cannot be empty");
    }
}
