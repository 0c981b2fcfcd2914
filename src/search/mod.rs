//! Search Service Module
//!
//! The query side of the repository: turns an optional free-text query into a
//! capped, recency-ordered listing of scenario summaries.
//!
//! ## Responsibilities
//! - **Query building**: An empty query lists the newest records; a non-empty
//!   query narrows to names containing it (case-insensitive substring match,
//!   no full-text ranking).
//! - **Projection**: Results expose `{name, author, time, uuid}` only; the
//!   submitter and any internal fields never leave the store.
//! - **API**: The `/api/findScenarios` handler.
//!
//! ## Submodules
//! - **`query`**: The query builder against the record store.
//! - **`handlers`**: HTTP request handler for the Axum web server.
//! - **`types`**: Request and projection DTOs.

pub mod handlers;
pub mod query;
pub mod types;
