use std::sync::Arc;

use auth::Authenticator;
use auth::JwtHandler;
use auth::PasswordHasher;
use auth_service::domain::staff::service::AuthService;
use auth_service::inbound::http::router::create_router;
use auth_service::outbound::repositories::MockStaffDirectory;
use auth_service::outbound::repositories::DEFAULT_PASSWORD;
use axum::http::HeaderValue;
use serde_json::json;

pub const JWT_SECRET: &[u8] = b"test-secret-key-for-jwt-signing-at-least-32-bytes";
pub const CORS_ORIGIN: &str = "http://localhost:3000";

/// Test application that spawns a real server
pub struct TestApp {
    pub address: String,
    pub port: u16,
    pub api_client: reqwest::Client,
    pub jwt_handler: JwtHandler,
    pub roster: MockStaffDirectory,
}

impl TestApp {
    /// Spawn the application in a background task and return TestApp
    pub async fn spawn() -> Self {
        // Use random port (0 = OS assigns)
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind random port");
        let port = listener.local_addr().unwrap().port();
        let address = format!("http://127.0.0.1:{}", port);

        let password_hasher = PasswordHasher::with_cost(PasswordHasher::DEFAULT_COST)
            .expect("Failed to create password hasher");
        let directory = MockStaffDirectory::seed(&password_hasher, DEFAULT_PASSWORD)
            .expect("Failed to seed staff directory");
        let roster = directory.clone();

        let authenticator = Arc::new(Authenticator::with_hasher(JWT_SECRET, password_hasher));
        let auth_service = Arc::new(AuthService::new(
            Arc::new(directory),
            authenticator,
            chrono::Duration::hours(24),
        ));

        let router = create_router(auth_service, HeaderValue::from_static(CORS_ORIGIN));

        // Spawn server in background
        tokio::spawn(async move {
            axum::serve(listener, router).await.expect("Server error");
        });

        Self {
            address,
            port,
            api_client: reqwest::Client::new(),
            jwt_handler: JwtHandler::new(JWT_SECRET),
            roster,
        }
    }

    /// Helper to make GET request
    pub fn get(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.get(format!("{}{}", self.address, path))
    }

    /// Helper to make POST request
    pub fn post(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.post(format!("{}{}", self.address, path))
    }

    /// Helper to make GET request with Bearer token
    pub fn get_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.get(path).bearer_auth(token)
    }

    /// Helper to make POST request with Bearer token
    pub fn post_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.post(path).bearer_auth(token)
    }

    /// Log in and return the issued token
    pub async fn login(&self, email: &str, password: &str) -> String {
        let response = self
            .post("/api/auth/login")
            .json(&json!({ "email": email, "password": password }))
            .send()
            .await
            .expect("Failed to execute request");
        assert_eq!(response.status(), reqwest::StatusCode::OK);

        let body: serde_json::Value = response.json().await.expect("Failed to parse response");
        body["data"]["token"]
            .as_str()
            .expect("Login response should carry a token")
            .to_string()
    }
}
