use thiserror::Error;

use super::types::{InfoDocument, SubmissionFields};

/// Reasons the uploaded metadata document cannot be turned into an
/// [`InfoDocument`].
#[derive(Debug, Error)]
pub enum MetadataError {
    #[error("info.toml is not valid UTF-8")]
    NotUtf8,
    #[error("info.toml is not well-formed: {0}")]
    Malformed(#[from] toml::de::Error),
}

/// Outcome of cross-checking the document against the form fields.
///
/// `InvalidTimeField` is deliberately not folded into `Mismatch`: a form time
/// that fails to parse as a number is a hard input error, not a disagreement
/// between two well-formed values.
#[derive(Debug, Error, PartialEq)]
pub enum ConsistencyError {
    #[error("the 'time' form field is not a non-negative number")]
    InvalidTimeField,
    #[error("supplied metadata and metadata in info.toml do not match")]
    Mismatch,
}

/// Decodes the raw bytes of an uploaded metadata document.
///
/// Extracts exactly `name`, `author` and `time`; any other keys in the
/// document are ignored. Pure, no side effects.
pub fn parse_info_document(bytes: &[u8]) -> Result<InfoDocument, MetadataError> {
    let text = std::str::from_utf8(bytes).map_err(|_| MetadataError::NotUtf8)?;
    let document: InfoDocument = toml::from_str(text)?;
    Ok(document)
}

/// Field-wise equality check of the parsed document against the form fields.
///
/// The form's `time` is text and is parsed first; equality on time is numeric,
/// never string-based. Returns the parsed time so the caller persists the same
/// value it validated.
pub fn check_consistency(
    document: &InfoDocument,
    fields: &SubmissionFields,
) -> Result<f64, ConsistencyError> {
    let form_time: f64 = fields
        .time
        .parse()
        .map_err(|_| ConsistencyError::InvalidTimeField)?;
    // Negated form also rejects NaN.
    if !(form_time >= 0.0) {
        return Err(ConsistencyError::InvalidTimeField);
    }

    if document.name != fields.name
        || document.author != fields.author
        || document.time != form_time
    {
        return Err(ConsistencyError::Mismatch);
    }

    Ok(form_time)
}
