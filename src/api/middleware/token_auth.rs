//! Token authentication via the `x-access-token` header

use axum::{
    extract::FromRequestParts,
    http::{request::Parts, HeaderMap},
};
use tracing::debug;

use crate::api::state::AppState;
use crate::api::types::ApiError;
use crate::infrastructure::auth::TokenClaims;

/// Header carrying the token on authenticated routes
pub const ACCESS_TOKEN_HEADER: &str = "x-access-token";

/// Extractor that requires a valid token in `x-access-token`
#[derive(Debug, Clone)]
pub struct RequireToken(pub TokenClaims);

impl FromRequestParts<AppState> for RequireToken {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = extract_access_token(&parts.headers)?;

        debug!("Validating access token");

        let claims = state.tokens.validate(&token)?;

        Ok(RequireToken(claims))
    }
}

/// Extract the raw token from the `x-access-token` header
pub fn extract_access_token(headers: &HeaderMap) -> Result<String, ApiError> {
    let value = headers.get(ACCESS_TOKEN_HEADER).ok_or_else(|| {
        ApiError::unauthorized(
            "Authentication required. Provide a token via the 'x-access-token' header",
        )
    })?;

    let token = value
        .to_str()
        .map_err(|_| ApiError::unauthorized("Invalid x-access-token header encoding"))?
        .trim();

    if token.is_empty() {
        return Err(ApiError::unauthorized("Empty access token"));
    }

    Ok(token.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::{HeaderValue, StatusCode};

    #[test]
    fn test_extract_token() {
        let mut headers = HeaderMap::new();
        headers.insert(ACCESS_TOKEN_HEADER, "eyJhbGciOiJIUzI1NiJ9.test".parse().unwrap());

        assert_eq!(
            extract_access_token(&headers).unwrap(),
            "eyJhbGciOiJIUzI1NiJ9.test"
        );
    }

    #[test]
    fn test_missing_token() {
        let headers = HeaderMap::new();

        let err = extract_access_token(&headers).unwrap_err();
        assert_eq!(err.status, StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn test_blank_token() {
        let mut headers = HeaderMap::new();
        headers.insert(ACCESS_TOKEN_HEADER, "   ".parse().unwrap());

        let err = extract_access_token(&headers).unwrap_err();
        assert_eq!(err.status, StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn test_non_ascii_token_is_unauthorized() {
        let mut headers = HeaderMap::new();
        headers.insert(
            ACCESS_TOKEN_HEADER,
            HeaderValue::from_bytes("tökén".as_bytes()).unwrap(),
        );

        let err = extract_access_token(&headers).unwrap_err();
        assert_eq!(err.status, StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn test_trimmed_token() {
        let mut headers = HeaderMap::new();
        headers.insert(ACCESS_TOKEN_HEADER, "  token-with-spaces  ".parse().unwrap());

        assert_eq!(extract_access_token(&headers).unwrap(), "token-with-spaces");
    }
}
