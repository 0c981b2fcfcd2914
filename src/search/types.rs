use serde::{Deserialize, Serialize};

use crate::scenario::types::ScenarioRecord;

/// Body of `POST /api/findScenarios`. An absent or empty query means
/// "list the newest scenarios".
#[derive(Debug, Default, Deserialize)]
pub struct FindScenariosRequest {
    #[serde(default)]
    pub query: Option<String>,
}

/// Public projection of a scenario record.
///
/// Deliberately excludes `created_by` and the creation timestamp; clients get
/// exactly what the search listing needs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioSummary {
    pub name: String,
    pub author: String,
    pub time: f64,
    pub uuid: String,
}

impl From<ScenarioRecord> for ScenarioSummary {
    fn from(record: ScenarioRecord) -> Self {
        Self {
            name: record.name,
            author: record.author,
            time: record.time,
            uuid: record.uuid,
        }
    }
}
