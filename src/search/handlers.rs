use axum::{Extension, Json};
use std::sync::Arc;

use super::query::search;
use super::types::{FindScenariosRequest, ScenarioSummary};
use crate::store::records::ScenarioStore;

/// `POST /api/findScenarios`
pub async fn handle_find_scenarios(
    Extension(records): Extension<Arc<ScenarioStore>>,
    Json(request): Json<FindScenariosRequest>,
) -> Json<Vec<ScenarioSummary>> {
    Json(search(&records, request.query.as_deref()))
}
