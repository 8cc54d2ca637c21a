use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A fully answered questionnaire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) struct Application {
    pub(crate) username: String,
    pub(crate) full_name: String,
    pub(crate) group_number: String,
    pub(crate) programming_level: String,
    /// Only asked by the full form
    pub(crate) direction: Option<String>,
    pub(crate) known_languages: String,
    pub(crate) motivation: String,
    pub(crate) teaching_experience: String,
}

/// Application row as read back from the store
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub(crate) struct StoredApplication {
    #[serde(flatten)]
    pub(crate) application: Application,
    pub(crate) submitted_at: DateTime<Utc>,
}
