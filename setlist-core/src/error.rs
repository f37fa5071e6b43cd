/// Structured error types for setlist-core library.
///
/// Library operations fail synchronously with one of these variants.
/// The server maps each variant onto an HTTP status; binaries can
/// still wrap them in `anyhow` for convenience.
use thiserror::Error;

/// Main error type for library operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LibraryError {
    /// Insert with an id that already exists
    #[error("{resource} '{id}' already exists")]
    DuplicateKey { resource: &'static str, id: i64 },

    /// Operation on a missing song or playlist
    #[error("{resource} '{id}' not found")]
    NotFound { resource: &'static str, id: i64 },

    /// Unsupported argument value (e.g. sort key)
    #[error("invalid {field}: '{value}'")]
    InvalidArgument { field: &'static str, value: String },
}

/// Result type alias for library operations
pub type Result<T> = std::result::Result<T, LibraryError>;

impl LibraryError {
    pub fn duplicate_song(id: i64) -> Self {
        Self::DuplicateKey {
            resource: "song",
            id,
        }
    }

    pub fn duplicate_playlist(id: i64) -> Self {
        Self::DuplicateKey {
            resource: "playlist",
            id,
        }
    }

    pub fn song_not_found(id: i64) -> Self {
        Self::NotFound {
            resource: "song",
            id,
        }
    }

    pub fn playlist_not_found(id: i64) -> Self {
        Self::NotFound {
            resource: "playlist",
            id,
        }
    }

    /// Create an invalid argument error
    pub fn invalid_argument(field: &'static str, value: impl Into<String>) -> Self {
        Self::InvalidArgument {
            field,
            value: value.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = LibraryError::song_not_found(7);
        assert_eq!(err.to_string(), "song '7' not found");

        let err = LibraryError::duplicate_playlist(10);
        assert_eq!(err.to_string(), "playlist '10' already exists");

        let err = LibraryError::invalid_argument("sort key", "tempo");
        assert_eq!(err.to_string(), "invalid sort key: 'tempo'");
    }
}
