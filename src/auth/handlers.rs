use axum::{Extension, Json};
use std::sync::Arc;

use super::service::{AuthError, AuthService};
use super::types::{LoginRequest, LoginResponse, SignupRequest, SignupResponse};

/// `POST /api/signup`
pub async fn handle_signup(
    Extension(auth): Extension<Arc<AuthService>>,
    Json(request): Json<SignupRequest>,
) -> Result<Json<SignupResponse>, AuthError> {
    let account = auth.register(request)?;
    tracing::info!("Registered user '{}'", account.name);

    Ok(Json(SignupResponse {
        message: "Registered user".to_string(),
        email: account.email,
    }))
}

/// `POST /api/login`
pub async fn handle_login(
    Extension(auth): Extension<Arc<AuthService>>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, AuthError> {
    let (token, account) = auth.login(request)?;

    Ok(Json(LoginResponse {
        token,
        username: account.name,
    }))
}
