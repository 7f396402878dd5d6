use axum::extract::Request;
use axum::extract::State;
use axum::http::header;
use axum::middleware::Next;
use axum::response::Response;

use super::handlers::ApiError;
use super::handlers::NO_TOKEN;
use crate::domain::staff::models::SessionClaims;
use crate::domain::staff::ports::AuthServicePort;
use crate::inbound::http::router::AppState;

/// Extension type carrying the verified session in request extensions
#[derive(Debug, Clone)]
pub struct AuthenticatedStaff {
    pub claims: SessionClaims,
}

/// Middleware that validates bearer tokens and adds the session to request extensions
pub async fn authenticate(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let token = extract_token_from_header(&req)?;

    let claims = state.auth_service.validate(token)?;

    req.extensions_mut().insert(AuthenticatedStaff { claims });

    Ok(next.run(req).await)
}

/// Token after the `Bearer ` scheme. A missing header, a non-ASCII value and
/// any other scheme all count as no token.
fn extract_token_from_header(req: &Request) -> Result<&str, ApiError> {
    req.headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .ok_or_else(|| ApiError::Unauthorized(NO_TOKEN.to_string()))
}

#[cfg(test)]
mod tests {
    use axum::body::Body;

    use super::*;

    fn request_with(authorization: Option<&str>) -> Request {
        let mut builder = axum::http::Request::builder().uri("/api/auth/me");
        if let Some(value) = authorization {
            builder = builder.header(header::AUTHORIZATION, value);
        }
        builder.body(Body::empty()).unwrap()
    }

    #[test]
    fn test_extract_bearer_token() {
        let req = request_with(Some("Bearer abc.def.ghi"));
        assert_eq!(extract_token_from_header(&req), Ok("abc.def.ghi"));

        // An empty token is still a token; it fails validation later
        let req = request_with(Some("Bearer "));
        assert_eq!(extract_token_from_header(&req), Ok(""));
    }

    #[test]
    fn test_extract_rejects_missing_or_foreign_scheme() {
        let no_token = Err(ApiError::Unauthorized("No token provided".to_string()));

        assert_eq!(extract_token_from_header(&request_with(None)), no_token);
        assert_eq!(
            extract_token_from_header(&request_with(Some("Basic dXNlcjpwYXNz"))),
            no_token
        );
        assert_eq!(
            extract_token_from_header(&request_with(Some("bearer abc.def.ghi"))),
            no_token
        );
        assert_eq!(
            extract_token_from_header(&request_with(Some("Bearerabc.def.ghi"))),
            no_token
        );
    }
}
