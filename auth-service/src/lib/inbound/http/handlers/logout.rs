use axum::http::StatusCode;

use super::ApiSuccess;

/// POST /api/auth/logout
///
/// Tokens are stateless, so there is nothing to revoke; the client drops its copy.
pub async fn logout() -> ApiSuccess<()> {
    ApiSuccess::message(StatusCode::OK, "Logged out successfully")
}
