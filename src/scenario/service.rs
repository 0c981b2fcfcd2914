use std::sync::Arc;
use uuid::Uuid;

use super::error::SubmissionError;
use super::metadata::{check_consistency, parse_info_document};
use super::types::{ScenarioRecord, SubmissionForm, SubmissionReceipt};
use crate::auth::service::AuthService;
use crate::store::files::BundleStore;
use crate::store::records::ScenarioStore;

/// Mints the identifier of a freshly accepted scenario.
///
/// A v4 UUID carries 122 random bits; a collision is treated as statistically
/// impossible and no existence check is made against the record store.
pub fn new_scenario_id() -> String {
    Uuid::new_v4().to_string()
}

/// Sequences one submission from bearer token to persisted record plus bundle.
///
/// Owns the write path for both stores during a submission: nothing else in
/// the process creates scenario records or bundle directories.
pub struct SubmissionService {
    auth: Arc<AuthService>,
    records: Arc<ScenarioStore>,
    bundles: Arc<BundleStore>,
}

impl SubmissionService {
    pub fn new(
        auth: Arc<AuthService>,
        records: Arc<ScenarioStore>,
        bundles: Arc<BundleStore>,
    ) -> Self {
        Self {
            auth,
            records,
            bundles,
        }
    }

    /// Runs the full submission pipeline.
    ///
    /// Ordering: authentication, structural form validation, metadata parse,
    /// consistency check, id minting, record insert, bundle write. The record
    /// insert runs before the file writes because it carries the uniqueness
    /// risk; a rejected duplicate must never touch the disk. If the bundle
    /// write fails afterwards, the insert is rolled back and the partial
    /// directory removed, so no record can point at missing files.
    pub async fn submit(
        &self,
        auth_header: Option<&str>,
        form: SubmissionForm,
    ) -> Result<SubmissionReceipt, SubmissionError> {
        let user = auth_header
            .and_then(|header| self.auth.resolve_token(header))
            .ok_or(SubmissionError::Unauthenticated)?;

        let submission = form.validate()?;
        let document = parse_info_document(&submission.info_file)?;
        let time = check_consistency(&document, &submission.fields)?;

        let scenario_id = new_scenario_id();
        let record = ScenarioRecord {
            name: submission.fields.name.clone(),
            author: submission.fields.author.clone(),
            time,
            uuid: scenario_id.clone(),
            created: chrono::Utc::now(),
            created_by: user.name.clone(),
        };

        self.records.insert(record.clone())?;

        let bundle = match self
            .bundles
            .write_bundle(&scenario_id, &submission.info_file, &submission.script_file)
            .await
        {
            Ok(bundle) => bundle,
            Err(err) => {
                tracing::error!(
                    "Bundle write failed for scenario {}, rolling back record: {}",
                    scenario_id,
                    err
                );
                self.records.remove_by_uuid(&scenario_id);
                if let Err(cleanup_err) = self.bundles.remove_bundle(&scenario_id).await {
                    tracing::error!(
                        "Failed to remove partial bundle {}: {}",
                        scenario_id,
                        cleanup_err
                    );
                }
                return Err(err.into());
            }
        };

        tracing::info!(
            "Stored scenario '{}' ({}) submitted by {}",
            record.name,
            scenario_id,
            user.name
        );

        Ok(SubmissionReceipt { record, bundle })
    }
}
