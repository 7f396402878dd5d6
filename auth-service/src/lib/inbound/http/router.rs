use std::any::Any;
use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::header;
use axum::http::HeaderName;
use axum::http::HeaderValue;
use axum::http::Method;
use axum::http::Request;
use axum::http::Response;
use axum::middleware;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::routing::post;
use axum::Router;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;
use tracing::Span;

use super::handlers::health::health;
use super::handlers::login::login;
use super::handlers::logout::logout;
use super::handlers::me::me;
use super::handlers::validate::validate;
use super::handlers::ApiError;
use super::middleware::authenticate as auth_middleware;
use crate::domain::staff::service::AuthService;
use crate::outbound::repositories::MockStaffDirectory;

/// Hardening headers added to every response unless a handler set them.
const SECURITY_HEADERS: [(&str, &str); 11] = [
    (
        "content-security-policy",
        "default-src 'self'; base-uri 'self'; frame-ancestors 'self'; object-src 'none'",
    ),
    ("cross-origin-opener-policy", "same-origin"),
    ("cross-origin-resource-policy", "same-origin"),
    ("origin-agent-cluster", "?1"),
    ("referrer-policy", "no-referrer"),
    ("strict-transport-security", "max-age=31536000; includeSubDomains"),
    ("x-content-type-options", "nosniff"),
    ("x-dns-prefetch-control", "off"),
    ("x-frame-options", "SAMEORIGIN"),
    ("x-permitted-cross-domain-policies", "none"),
    ("x-xss-protection", "0"),
];

#[derive(Clone)]
pub struct AppState {
    pub auth_service: Arc<AuthService<MockStaffDirectory>>,
}

pub fn create_router(
    auth_service: Arc<AuthService<MockStaffDirectory>>,
    cors_origin: HeaderValue,
) -> Router {
    let state = AppState { auth_service };

    let public_routes = Router::new()
        .route("/health", get(health))
        .route("/api/auth/login", post(login))
        .route("/api/auth/logout", post(logout));

    let protected_routes = Router::new()
        .route("/api/auth/validate", post(validate))
        .route("/api/auth/me", get(me))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ));

    // Headers are left out of the span so bearer tokens never reach the logs
    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|request: &Request<Body>| {
            tracing::info_span!(
                "http_request",
                method = %request.method(),
                uri = %request.uri(),
                version = ?request.version(),
            )
        })
        .on_request(|request: &Request<Body>, _span: &Span| {
            tracing::info!(
                method = %request.method(),
                uri = %request.uri(),
                "Request started"
            );
        })
        .on_response(
            |response: &Response<Body>, latency: Duration, _span: &Span| {
                tracing::info!(
                    status = response.status().as_u16(),
                    latency_ms = latency.as_millis(),
                    "Request completed"
                );
            },
        );

    let cors_layer = CorsLayer::new()
        .allow_origin(cors_origin)
        .allow_credentials(true)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE]);

    let router = Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(trace_layer);

    SECURITY_HEADERS
        .into_iter()
        .fold(router, |router, (name, value)| {
            router.layer(SetResponseHeaderLayer::if_not_present(
                HeaderName::from_static(name),
                HeaderValue::from_static(value),
            ))
        })
        .layer(cors_layer)
        .with_state(state)
}

fn handle_panic(panic: Box<dyn Any + Send + 'static>) -> Response<Body> {
    let detail = if let Some(s) = panic.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = panic.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic".to_string()
    };

    ApiError::InternalServerError(format!("Handler panicked: {}", detail)).into_response()
}
