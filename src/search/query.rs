use std::sync::Arc;

use super::types::ScenarioSummary;
use crate::store::records::ScenarioStore;

/// Fixed page size of a search call. Callers wanting more results re-issue
/// the call once offset support exists; there is no cursor to resume.
pub const RESULT_LIMIT: usize = 50;

/// Runs one search call against the record store.
///
/// `None` or an empty string lists the newest records; anything else narrows
/// to names containing the query, case-insensitively. Both paths are ordered
/// by creation time descending and capped at [`RESULT_LIMIT`].
pub fn search(store: &Arc<ScenarioStore>, query: Option<&str>) -> Vec<ScenarioSummary> {
    let records = match query {
        None | Some("") => store.find_recent(RESULT_LIMIT),
        Some(text) => store.find_name_contains(text, RESULT_LIMIT),
    };

    records.into_iter().map(ScenarioSummary::from).collect()
}
