use axum::extract::Multipart;
use axum::http::HeaderMap;
use axum::http::header::AUTHORIZATION;
use axum::{Extension, Json};
use std::sync::Arc;

use super::error::SubmissionError;
use super::service::SubmissionService;
use super::types::{CreateScenarioResponse, INFO_FIELD, SCRIPT_FIELD, SubmissionForm};

/// `POST /api/createScenario`
///
/// Multipart upload: file fields `info.toml` and `script.lua` plus text fields
/// `name`, `author` and `time`, authenticated by the `Authorization` header.
/// The handler only collects the multipart fields into a typed form; every
/// check and write happens inside the submission service.
pub async fn handle_create_scenario(
    headers: HeaderMap,
    Extension(submissions): Extension<Arc<SubmissionService>>,
    multipart: Multipart,
) -> Result<Json<CreateScenarioResponse>, SubmissionError> {
    let auth_header = headers
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok());

    let form = collect_form(multipart).await?;
    let receipt = submissions.submit(auth_header, form).await?;

    Ok(Json(receipt.into()))
}

async fn collect_form(mut multipart: Multipart) -> Result<SubmissionForm, SubmissionError> {
    let mut form = SubmissionForm::default();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|_| SubmissionError::MalformedBody)?
    {
        let Some(field_name) = field.name().map(str::to_string) else {
            continue;
        };

        match field_name.as_str() {
            name if name == INFO_FIELD => {
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|_| SubmissionError::MalformedBody)?;
                form.info_file = Some(bytes.to_vec());
            }
            name if name == SCRIPT_FIELD => {
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|_| SubmissionError::MalformedBody)?;
                form.script_file = Some(bytes.to_vec());
            }
            "name" => form.name = Some(read_text(field).await?),
            "author" => form.author = Some(read_text(field).await?),
            "time" => form.time = Some(read_text(field).await?),
            // Unknown multipart fields are ignored, like unknown keys in the
            // metadata document.
            _ => {}
        }
    }

    Ok(form)
}

async fn read_text(field: axum::extract::multipart::Field<'_>) -> Result<String, SubmissionError> {
    field
        .text()
        .await
        .map_err(|_| SubmissionError::MalformedBody)
}
