//! Custom Axum extractors

use axum::extract::{FromRequestParts, Path};
use axum::http::request::Parts;

use super::error::ApiError;

const NOT_AN_INTEGER: &str = "must be an integer";

fn parse_id(field: &'static str, raw: &str) -> Result<i64, ApiError> {
    raw.parse().map_err(|_| ApiError::Validation {
        field,
        reason: NOT_AN_INTEGER,
    })
}

/// Extract and validate a single integer id from path
pub struct ValidId(pub i64);

impl<S> FromRequestParts<S> for ValidId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id): Path<String> = Path::from_request_parts(parts, state)
            .await
            .map_err(|_| ApiError::Validation {
                field: "id",
                reason: NOT_AN_INTEGER,
            })?;

        Ok(Self(parse_id("id", &id)?))
    }
}

/// Extract a `{id}/.../{song_id}` pair from path
pub struct ValidIdPair(pub i64, pub i64);

impl<S> FromRequestParts<S> for ValidIdPair
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path((first, second)): Path<(String, String)> =
            Path::from_request_parts(parts, state)
                .await
                .map_err(|_| ApiError::Validation {
                    field: "id",
                    reason: NOT_AN_INTEGER,
                })?;

        Ok(Self(parse_id("id", &first)?, parse_id("song_id", &second)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_signed_integers() {
        assert_eq!(parse_id("id", "42").unwrap(), 42);
        assert_eq!(parse_id("id", "-3").unwrap(), -3);
        assert!(matches!(
            parse_id("song_id", "abc"),
            Err(ApiError::Validation { field: "song_id", .. })
        ));
    }
}
