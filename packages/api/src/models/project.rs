use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An accessibility testing project.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    pub name: String,
    pub url: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    /// Owning user; assigned by the server and never edited here.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner: Option<serde_json::Value>,
}

/// Body for creating or updating a project.
///
/// Build it through form validation so that only complete, trimmed values
/// reach the API.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ProjectPayload {
    pub name: String,
    pub url: String,
    pub description: String,
}
