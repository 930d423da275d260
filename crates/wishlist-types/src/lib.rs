//! Validated value types shared across the wishlist crates.

/// Maximum number of characters a place name may hold.
pub const PLACE_NAME_MAX_CHARS: usize = 200;

/// Errors that can occur when creating validated text types.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TextError {
    /// The input text was empty or contained only whitespace
    #[error("Place name cannot be empty")]
    Empty,
    /// The trimmed input exceeded the allowed length
    #[error("Place name must be at most {max} characters (got {actual})")]
    TooLong { max: usize, actual: usize },
}

/// The name of a place on the wishlist.
///
/// Construction trims leading and trailing whitespace and then requires at least one
/// character and at most [`PLACE_NAME_MAX_CHARS`] characters.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PlaceName(String);

impl PlaceName {
    /// Creates a new `PlaceName` from the given input.
    ///
    /// # Errors
    ///
    /// Returns `TextError::Empty` if the trimmed input is empty, or
    /// `TextError::TooLong` if it is longer than [`PLACE_NAME_MAX_CHARS`].
    pub fn new(input: impl AsRef<str>) -> Result<Self, TextError> {
        let trimmed = input.as_ref().trim();
        if trimmed.is_empty() {
            return Err(TextError::Empty);
        }

        let actual = trimmed.chars().count();
        if actual > PLACE_NAME_MAX_CHARS {
            return Err(TextError::TooLong {
                max: PLACE_NAME_MAX_CHARS,
                actual,
            });
        }

        Ok(Self(trimmed.to_owned()))
    }

    /// Returns the inner string as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl std::fmt::Display for PlaceName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for PlaceName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::str::FromStr for PlaceName {
    type Err = TextError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl serde::Serialize for PlaceName {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> serde::Deserialize<'de> for PlaceName {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        PlaceName::new(&s).map_err(serde::de::Error::custom)
    }
}
