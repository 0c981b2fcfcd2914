//! Identity Module
//!
//! The identity collaborator: user accounts, credential validation and bearer
//! tokens. The submission pipeline consumes it only through `resolve_token`.
//!
//! ## Responsibilities
//! - **Registration**: `/api/signup` with uniqueness on both username and email.
//! - **Login**: `/api/login`, credential check against salted digests, token issue.
//! - **Resolution**: Mapping an `Authorization` header back to a user account.
//!
//! Passwords are stored as salted SHA-256 digests and never leave this module.
//! Email verification is out of scope; accounts are marked verified at signup.

pub mod handlers;
pub mod service;
pub mod types;
