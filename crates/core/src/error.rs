use crate::db::DbError;
use crate::place::PlaceId;

#[derive(Debug, thiserror::Error)]
pub enum WishlistError {
    /// Input to "add place" failed the required-field rules.
    #[error("{0}")]
    Validation(#[from] wishlist_types::TextError),
    /// No place exists with the requested id.
    #[error("place not found: {0}")]
    NotFound(PlaceId),
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("database error: {0}")]
    Db(#[from] DbError),
    #[error("invalid persisted place data: {0}")]
    InvalidData(String),
}

impl From<rusqlite::Error> for WishlistError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

pub type WishlistResult<T> = std::result::Result<T, WishlistError>;
