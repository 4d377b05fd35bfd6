// =============================================================================
// Connect-U Web - Auth API
// =============================================================================
// Table of Contents:
// 1. Request/Response Types
// 2. Auth API Functions
// =============================================================================

use serde::Serialize;

use super::{decode, ApiClient, ApiError, HttpTransport};
use crate::session::TokenPair;

/// JWT issuance endpoint.
pub const LOGIN_ENDPOINT: &str = "/api/v1/auth/jwt/create/";

// -----------------------------------------------------------------------------
// 1. Request/Response Types
// -----------------------------------------------------------------------------

/// Login request payload.
#[derive(Debug, Serialize)]
pub struct LoginRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

// -----------------------------------------------------------------------------
// 2. Auth API Functions
// -----------------------------------------------------------------------------

impl<T: HttpTransport> ApiClient<T> {
    /// Exchange credentials for a token pair.
    ///
    /// Any non-2xx status is reported as `InvalidCredentials`. The tokens
    /// are returned, not stored.
    pub async fn login(&self, email: &str, password: &str) -> Result<TokenPair, ApiError> {
        let request = LoginRequest { email, password };
        let response = self.post(LOGIN_ENDPOINT, &request, false).await?;

        if !response.is_success() {
            return Err(ApiError::InvalidCredentials);
        }

        decode(&response)
    }
}
