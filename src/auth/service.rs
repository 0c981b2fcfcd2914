use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use regex::Regex;
use serde_json::json;
use sha2::{Digest, Sha256};
use thiserror::Error;

use super::types::{LoginRequest, SignupRequest, UserAccount};

/// Identity failures.
///
/// An unknown email yields `UserNotFound` (a caller-input error), while a
/// known email with the wrong password yields `IncorrectPassword` (an
/// authentication failure). The two carry different status classes.
#[derive(Debug, Error, PartialEq)]
pub enum AuthError {
    #[error("Invalid value for {0}")]
    InvalidField(&'static str),
    #[error("A user with that username already exists")]
    DuplicateUsername,
    #[error("A user with that email already exists")]
    DuplicateEmail,
    #[error("User not found")]
    UserNotFound,
    #[error("Incorrect password")]
    IncorrectPassword,
}

impl AuthError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::IncorrectPassword => StatusCode::UNAUTHORIZED,
            _ => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let status = self.status();
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

/// In-process identity provider.
///
/// Accounts are keyed by email; a second map claims usernames so both stay
/// unique under concurrent signups. Tokens map back to the account email and
/// live for the process lifetime: there is no expiry or revocation, so the
/// token table grows with the number of logins.
pub struct AuthService {
    users: DashMap<String, UserAccount>,
    usernames: DashMap<String, String>,
    tokens: DashMap<String, String>,
    email_shape: Regex,
}

impl AuthService {
    pub fn new() -> Self {
        Self {
            users: DashMap::new(),
            usernames: DashMap::new(),
            tokens: DashMap::new(),
            email_shape: Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$")
                .expect("email pattern is a valid regex"),
        }
    }

    /// Registers a new account. All fields required and non-empty, email must
    /// look like an address, username and email must both be unused.
    pub fn register(&self, request: SignupRequest) -> Result<UserAccount, AuthError> {
        let username = require_field(request.username, "username")?;
        let email = require_field(request.email, "email")?;
        let password = require_field(request.password, "password")?;

        if !self.email_shape.is_match(&email) {
            return Err(AuthError::InvalidField("email"));
        }

        // Claim the username before inserting the account so two concurrent
        // signups cannot share it.
        match self.usernames.entry(username.clone()) {
            Entry::Occupied(_) => return Err(AuthError::DuplicateUsername),
            Entry::Vacant(slot) => {
                slot.insert(email.clone());
            }
        }

        let salt = random_hex_128();
        let account = UserAccount {
            name: username.clone(),
            email: email.clone(),
            password_hash: hash_password(&salt, &password),
            password_salt: salt,
            verified: true,
        };

        match self.users.entry(email) {
            Entry::Occupied(_) => {
                // Release the username claim taken above.
                self.usernames.remove(&username);
                Err(AuthError::DuplicateEmail)
            }
            Entry::Vacant(slot) => {
                slot.insert(account.clone());
                Ok(account)
            }
        }
    }

    pub fn find_user_by_email(&self, email: &str) -> Option<UserAccount> {
        self.users.get(email).map(|entry| entry.value().clone())
    }

    pub fn validate_password(&self, account: &UserAccount, password: &str) -> bool {
        hash_password(&account.password_salt, password) == account.password_hash
    }

    /// Validates credentials and issues a bearer token.
    pub fn login(&self, request: LoginRequest) -> Result<(String, UserAccount), AuthError> {
        let email = require_field(request.email, "email")?;
        let password = require_field(request.password, "password")?;

        let account = self
            .find_user_by_email(&email)
            .ok_or(AuthError::UserNotFound)?;
        if !self.validate_password(&account, &password) {
            return Err(AuthError::IncorrectPassword);
        }

        Ok((self.issue_token(&account), account))
    }

    /// Mints a random 128-bit bearer token and remembers it for `account`.
    pub fn issue_token(&self, account: &UserAccount) -> String {
        let token = random_hex_128();
        self.tokens.insert(token.clone(), account.email.clone());
        token
    }

    /// Maps an `Authorization` header value back to the account it belongs to.
    /// Accepts the raw token with or without a `Bearer ` prefix.
    pub fn resolve_token(&self, header: &str) -> Option<UserAccount> {
        let token = header
            .strip_prefix("Bearer ")
            .unwrap_or(header)
            .trim();
        if token.is_empty() {
            return None;
        }

        let email = self.tokens.get(token)?.value().clone();
        self.find_user_by_email(&email)
    }
}

impl Default for AuthService {
    fn default() -> Self {
        Self::new()
    }
}

fn require_field(
    value: Option<String>,
    field: &'static str,
) -> Result<String, AuthError> {
    value
        .map(|text| text.trim().to_string())
        .filter(|text| !text.is_empty())
        .ok_or(AuthError::InvalidField(field))
}

fn hash_password(salt: &str, password: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(salt.as_bytes());
    hasher.update(b":");
    hasher.update(password.as_bytes());
    hex::encode(hasher.finalize())
}

fn random_hex_128() -> String {
    hex::encode(rand::random::<[u8; 16]>())
}
