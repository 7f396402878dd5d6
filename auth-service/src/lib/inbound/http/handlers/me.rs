use axum::http::StatusCode;
use axum::Extension;

use super::ApiError;
use super::ApiSuccess;
use super::StaffProfile;
use crate::inbound::http::middleware::AuthenticatedStaff;

pub async fn me(
    Extension(staff): Extension<AuthenticatedStaff>,
) -> Result<ApiSuccess<StaffProfile>, ApiError> {
    Ok(ApiSuccess::new(StatusCode::OK, (&staff.claims).into()))
}
