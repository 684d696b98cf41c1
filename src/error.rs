use axum::{Json, http::StatusCode, response::IntoResponse};
use sqlx::Error as SqlxError;
use thiserror::Error as ThisError;

/// Gateway-level failures. Each request resolves to exactly one of these or
/// to a success reply, never both.
#[derive(Debug, ThisError)]
pub enum GatewayError {
    /// The shared secret is absent or empty. This is a deployment error, not
    /// a per-request auth failure, and disables every protected route.
    #[error("API_TOKEN not configured")]
    TokenNotConfigured,

    /// The `Authorization` header is missing or does not match the expected
    /// `Bearer <token>` value byte for byte.
    #[error("Unauthorized")]
    Unauthorized,

    /// Query or driver failure; the message carries the underlying error
    /// text and is surfaced to the client verbatim.
    #[error("{0}")]
    Database(#[from] SqlxError),
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> axum::response::Response {
        let status = match &self {
            GatewayError::Unauthorized => StatusCode::UNAUTHORIZED,
            GatewayError::TokenNotConfigured | GatewayError::Database(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        // Bodies are bare JSON strings; the error text never includes the
        // token value.
        (status, Json(self.to_string())).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_mapping() {
        assert_eq!(
            GatewayError::Unauthorized.into_response().status(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            GatewayError::TokenNotConfigured.into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            GatewayError::Database(SqlxError::PoolClosed)
                .into_response()
                .status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn display_strings_match_response_bodies() {
        assert_eq!(
            GatewayError::TokenNotConfigured.to_string(),
            "API_TOKEN not configured"
        );
        assert_eq!(GatewayError::Unauthorized.to_string(), "Unauthorized");
    }
}
