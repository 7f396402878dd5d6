use axum::http::StatusCode;
use axum::Extension;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use super::StaffProfile;
use crate::inbound::http::middleware::AuthenticatedStaff;

/// POST /api/auth/validate - token already verified by the middleware
pub async fn validate(
    Extension(staff): Extension<AuthenticatedStaff>,
) -> Result<ApiSuccess<ValidateResponseData>, ApiError> {
    Ok(ApiSuccess::new(
        StatusCode::OK,
        ValidateResponseData {
            user: (&staff.claims).into(),
        },
    ))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidateResponseData {
    pub user: StaffProfile,
}
