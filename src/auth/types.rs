//! Identity Data Types
//!
//! Account storage structure and the signup/login DTOs.

use serde::{Deserialize, Serialize};

/// A registered user.
///
/// The raw password is never stored; `password_hash` is the hex SHA-256 digest
/// of `password_salt` and the password. Other subsystems only ever read `name`.
#[derive(Debug, Clone, PartialEq)]
pub struct UserAccount {
    pub name: String,
    pub email: String,
    pub password_salt: String,
    pub password_hash: String,
    pub verified: bool,
}

/// Body of `POST /api/signup`.
///
/// Every field is optional at the serde layer so a missing field surfaces as
/// an enumerated validation error instead of a deserialization rejection.
#[derive(Debug, Default, Deserialize)]
pub struct SignupRequest {
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct SignupResponse {
    pub message: String,
    pub email: String,
}

/// Body of `POST /api/login`.
#[derive(Debug, Default, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
    pub username: String,
}
