use axum::extract::FromRequestParts;
use axum::http::{HeaderMap, header, request::Parts};
use subtle::ConstantTimeEq;

use crate::error::GatewayError;
use crate::router::GatewayState;

/// Ensure the inbound request carries `Authorization: Bearer <token>`,
/// compared byte for byte against the configured secret.
///
/// An unset or empty secret is a misconfiguration and short-circuits with a
/// 500-class error before any handler runs; every header mismatch (absent
/// header, wrong scheme case, extra whitespace, wrong token) is a 401. The
/// token value is never logged or echoed.
pub fn ensure_authorized(headers: &HeaderMap, api_token: &str) -> Result<(), GatewayError> {
    if api_token.is_empty() {
        return Err(GatewayError::TokenNotConfigured);
    }

    let expected = format!("Bearer {api_token}");
    let presented = headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");

    // subtle yields false on length mismatch, so no early exit leaks length
    if bool::from(expected.as_bytes().ct_eq(presented.as_bytes())) {
        Ok(())
    } else {
        Err(GatewayError::Unauthorized)
    }
}

/// Extractor form of the gate; stateless beyond reading the process-wide
/// secret out of router state, so it attaches to any number of protected
/// routes.
#[derive(Debug, Clone, Copy)]
pub struct RequireBearerAuth;

impl FromRequestParts<GatewayState> for RequireBearerAuth {
    type Rejection = GatewayError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &GatewayState,
    ) -> Result<Self, Self::Rejection> {
        ensure_authorized(&parts.headers, &state.api_token)?;
        Ok(Self)
    }
}
