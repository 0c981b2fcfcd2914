//! Scenario Hub Library
//!
//! This library crate defines the core modules of the scenario repository service.
//! It serves as the foundation for the binary executable (`main.rs`).
//!
//! ## Architecture Modules
//! The system is composed of four loosely coupled subsystems:
//!
//! - **`auth`**: The identity layer. Handles user registration, credential
//!   validation (salted digests) and bearer-token issue/resolution.
//! - **`scenario`**: The submission pipeline. Parses the uploaded TOML metadata,
//!   cross-validates it against the form fields, mints the scenario id and
//!   persists the record plus the bundle files as one logical unit.
//! - **`search`**: The query side. Translates an optional free-text query into a
//!   capped, recency-ordered listing of scenario summaries.
//! - **`store`**: The state layer. An in-process record store with a
//!   uniqueness-constrained insert, and the on-disk bundle store.

pub mod auth;
pub mod scenario;
pub mod search;
pub mod store;
