//! Scenario Submission Module
//!
//! The core component responsible for turning an authenticated multipart upload
//! into a persisted scenario record plus an on-disk bundle.
//!
//! ## Overview
//! A submission carries two files (the TOML metadata document and the Lua
//! script) and three redundant text fields (`name`, `author`, `time`). The
//! document embedded in the bundle is authoritative; the text fields are the
//! client-supplied summary that gets indexed. Both must agree, otherwise the
//! bundle on disk would disagree with its searchable record.
//!
//! ## Responsibilities
//! - **Parsing**: Decoding the uploaded metadata document into a typed record.
//! - **Validation**: Field-wise cross-check of document vs form fields.
//! - **Orchestration**: Id minting, record insert and bundle write as one
//!   logical unit with rollback on partial failure.
//! - **API**: The `/api/createScenario` handler.
//!
//! ## Submodules
//! - **`metadata`**: The pure parser and consistency validator.
//! - **`service`**: The submission orchestrator (saga ordering lives here).
//! - **`handlers`**: HTTP request handler for the Axum web server.
//! - **`error`**: The enumerated submission error taxonomy.
//! - **`types`**: Records, form DTOs and API response types.

pub mod error;
pub mod handlers;
pub mod metadata;
pub mod service;
pub mod types;
