//! Scenario Data Types
//!
//! Defines the persisted record, the ephemeral metadata document, the typed
//! multipart form and the API response DTOs of the submission pipeline.

use crate::store::files::{INFO_FILE_NAME, SCRIPT_FILE_NAME, StoredBundle};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::error::SubmissionError;

/// The persisted scenario entity.
///
/// `name` is unique system-wide (the record store keys on it), `uuid` is minted
/// server-side and never reused, and `created_by` holds only the submitter's
/// username so removing a user account never cascades into scenario records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioRecord {
    pub name: String,
    pub author: String,
    pub time: f64,
    pub uuid: String,
    pub created: DateTime<Utc>,
    pub created_by: String,
}

/// The metadata document embedded in an uploaded bundle.
///
/// Lives only for the duration of one submission request. Unrecognized keys in
/// the document are ignored; the three fields below are required.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct InfoDocument {
    pub name: String,
    pub author: String,
    pub time: f64,
}

/// The redundant text fields submitted alongside the bundle files.
///
/// `time` stays a string here: parsing it to a number is a validation step of
/// its own, with a failure mode distinct from a plain mismatch.
#[derive(Debug, Clone, PartialEq)]
pub struct SubmissionFields {
    pub name: String,
    pub author: String,
    pub time: String,
}

/// Raw multipart collector. Every slot is optional until `validate` runs.
#[derive(Debug, Default)]
pub struct SubmissionForm {
    pub info_file: Option<Vec<u8>>,
    pub script_file: Option<Vec<u8>>,
    pub name: Option<String>,
    pub author: Option<String>,
    pub time: Option<String>,
}

/// A submission whose structural requirements have been checked: both files
/// present and non-empty, all three text fields present and non-empty.
#[derive(Debug)]
pub struct ValidatedSubmission {
    pub info_file: Vec<u8>,
    pub script_file: Vec<u8>,
    pub fields: SubmissionFields,
}

impl SubmissionForm {
    /// Turns the loose multipart slots into a validated submission, or the
    /// first enumerated structural error. Runs before any business logic.
    pub fn validate(self) -> Result<ValidatedSubmission, SubmissionError> {
        let info_file = self
            .info_file
            .filter(|bytes| !bytes.is_empty())
            .ok_or(SubmissionError::MissingFile(INFO_FILE_NAME))?;
        let script_file = self
            .script_file
            .filter(|bytes| !bytes.is_empty())
            .ok_or(SubmissionError::MissingFile(SCRIPT_FILE_NAME))?;

        let name = require_text(self.name, "name")?;
        let author = require_text(self.author, "author")?;
        let time = require_text(self.time, "time")?;

        Ok(ValidatedSubmission {
            info_file,
            script_file,
            fields: SubmissionFields { name, author, time },
        })
    }
}

// The raw form string is kept as-is: the consistency check compares it against
// the document verbatim, so a padded field is a mismatch, not a match.
fn require_text(
    value: Option<String>,
    field: &'static str,
) -> Result<String, SubmissionError> {
    value
        .filter(|text| !text.is_empty())
        .ok_or(SubmissionError::MissingField(field))
}

/// What the orchestrator hands back on success: the persisted record plus the
/// public paths of the stored bundle files.
#[derive(Debug, Clone)]
pub struct SubmissionReceipt {
    pub record: ScenarioRecord,
    pub bundle: StoredBundle,
}

/// Response returned to the client after a successful submission.
#[derive(Debug, Serialize)]
pub struct CreateScenarioResponse {
    pub id: String,
    pub info_file: String,
    pub script_file: String,
}

impl From<SubmissionReceipt> for CreateScenarioResponse {
    fn from(receipt: SubmissionReceipt) -> Self {
        Self {
            id: receipt.record.uuid,
            info_file: receipt.bundle.info_path,
            script_file: receipt.bundle.script_path,
        }
    }
}

/// Multipart field name of the metadata upload. Matches the stored file name.
pub const INFO_FIELD: &str = INFO_FILE_NAME;
/// Multipart field name of the script upload. Matches the stored file name.
pub const SCRIPT_FIELD: &str = SCRIPT_FILE_NAME;
