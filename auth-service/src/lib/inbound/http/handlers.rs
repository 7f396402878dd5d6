use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use serde::Serialize;

use crate::domain::staff::errors::AuthError;
use crate::domain::staff::errors::CredentialsError;
use crate::domain::staff::models::Role;
use crate::domain::staff::models::SessionClaims;
use crate::domain::staff::models::StaffMember;

pub mod health;
pub mod login;
pub mod logout;
pub mod me;
pub mod validate;

pub const MISSING_CREDENTIALS: &str = "Email and password are required";
pub const INVALID_CREDENTIALS: &str = "Invalid credentials";
pub const NO_TOKEN: &str = "No token provided";
pub const INVALID_TOKEN: &str = "Invalid token";
pub const INTERNAL_ERROR: &str = "Internal server error";

#[derive(Debug, Clone)]
pub struct ApiSuccess<T: Serialize + PartialEq>(StatusCode, Json<ApiResponseBody<T>>);

impl<T> PartialEq for ApiSuccess<T>
where
    T: Serialize + PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0 && self.1 .0 == other.1 .0
    }
}

impl<T: Serialize + PartialEq> ApiSuccess<T> {
    pub fn new(status: StatusCode, data: T) -> Self {
        ApiSuccess(status, Json(ApiResponseBody::new(data)))
    }
}

impl ApiSuccess<()> {
    /// Success envelope carrying only a message.
    pub fn message(status: StatusCode, message: impl Into<String>) -> Self {
        ApiSuccess(status, Json(ApiResponseBody::new_message(message.into())))
    }
}

impl<T: Serialize + PartialEq> IntoResponse for ApiSuccess<T> {
    fn into_response(self) -> Response {
        (self.0, self.1).into_response()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    InternalServerError(String),
    BadRequest(String),
    Unauthorized(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::InternalServerError(cause) => {
                // The cause stays in the logs, clients get a generic message
                tracing::error!(error = %cause, "Request failed");
                (StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_ERROR.to_string())
            }
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg),
        };

        (status, Json(ApiResponseBody::new_error(message))).into_response()
    }
}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::InvalidCredentials => {
                ApiError::Unauthorized(INVALID_CREDENTIALS.to_string())
            }
            AuthError::InvalidToken => ApiError::Unauthorized(INVALID_TOKEN.to_string()),
            AuthError::Password(_)
            | AuthError::TokenIssuance(_)
            | AuthError::DirectoryError(_)
            | AuthError::Unknown(_) => ApiError::InternalServerError(err.to_string()),
        }
    }
}

impl From<CredentialsError> for ApiError {
    fn from(_: CredentialsError) -> Self {
        ApiError::BadRequest(MISSING_CREDENTIALS.to_string())
    }
}

/// Response envelope: `{success, data?, error?, message?}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiResponseBody<T: Serialize + PartialEq> {
    success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<String>,
}

impl<T: Serialize + PartialEq> ApiResponseBody<T> {
    pub fn new(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
            message: None,
        }
    }
}

impl ApiResponseBody<()> {
    pub fn new_message(message: String) -> Self {
        Self {
            success: true,
            data: None,
            error: None,
            message: Some(message),
        }
    }

    pub fn new_error(error: String) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(error),
            message: None,
        }
    }
}

/// Public view of a staff member, shared by login, validate and me.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StaffProfile {
    pub id: String,
    pub email: String,
    pub role: Role,
    pub staff_id: String,
    pub first_name: String,
    pub last_name: String,
}

impl From<&StaffMember> for StaffProfile {
    fn from(member: &StaffMember) -> Self {
        Self {
            id: member.id.clone(),
            email: member.email.clone(),
            role: member.role,
            staff_id: member.staff_id.clone(),
            first_name: member.first_name.clone(),
            last_name: member.last_name.clone(),
        }
    }
}

impl From<&SessionClaims> for StaffProfile {
    fn from(claims: &SessionClaims) -> Self {
        Self {
            id: claims.sub.clone(),
            email: claims.private.email.clone(),
            role: claims.private.role,
            staff_id: claims.private.staff_id.clone(),
            first_name: claims.private.first_name.clone(),
            last_name: claims.private.last_name.clone(),
        }
    }
}
