//! HTML form input for the wishlist page.

use serde::Deserialize;
use wishlist_core::{WishlistError, WishlistResult};

/// Body of `POST /`, `application/x-www-form-urlencoded`.
///
/// Both fields are optional at the decoding stage so that a missing name is reported by the
/// core validation rules instead of as a decoding failure.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AddPlaceForm {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub visited: Option<String>,
}

impl AddPlaceForm {
    pub fn name(&self) -> &str {
        self.name.as_deref().unwrap_or("")
    }

    pub fn visited(&self) -> WishlistResult<bool> {
        parse_checkbox(self.visited.as_deref())
    }
}

/// Interprets a checkbox value the way HTML forms and form-posting clients send it.
///
/// An unchecked box is simply absent.
pub fn parse_checkbox(value: Option<&str>) -> WishlistResult<bool> {
    let Some(raw) = value else {
        return Ok(false);
    };

    match raw.trim().to_ascii_lowercase().as_str() {
        "" | "false" | "0" | "off" => Ok(false),
        "true" | "1" | "on" => Ok(true),
        other => Err(WishlistError::InvalidInput(format!(
            "visited must be true or false, got `{other}`"
        ))),
    }
}
