use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use super::StaffProfile;
use super::MISSING_CREDENTIALS;
use crate::domain::staff::errors::CredentialsError;
use crate::domain::staff::models::Credentials;
use crate::domain::staff::ports::AuthServicePort;
use crate::inbound::http::router::AppState;

pub async fn login(
    State(state): State<AppState>,
    body: Result<Json<LoginRequestBody>, JsonRejection>,
) -> Result<ApiSuccess<LoginResponseData>, ApiError> {
    // Absent, non-JSON and wrongly typed bodies all mean the fields are missing
    let Json(body) = body.map_err(|rejection| {
        tracing::debug!(error = %rejection, "Unreadable login body");
        ApiError::BadRequest(MISSING_CREDENTIALS.to_string())
    })?;

    let session = state
        .auth_service
        .login(body.try_into_credentials()?)
        .await?;

    Ok(ApiSuccess::new(
        StatusCode::OK,
        LoginResponseData {
            token: session.token,
            user: (&session.member).into(),
        },
    ))
}

/// HTTP request body for logging in (raw JSON)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoginRequestBody {
    email: Option<String>,
    password: Option<String>,
}

impl LoginRequestBody {
    fn try_into_credentials(self) -> Result<Credentials, CredentialsError> {
        Credentials::new(
            self.email.unwrap_or_default(),
            self.password.unwrap_or_default(),
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoginResponseData {
    pub token: String,
    pub user: StaffProfile,
}
