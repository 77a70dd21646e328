//! # User record as the API sends it
//!
//! The server owns users; the client only mirrors the fields it renders. The
//! API serialises with camelCase keys and a MongoDB-style `_id`, so [`User`]
//! renames on the wire and accepts either `_id` or `id` when reading.
//!
//! The same shape is what gets written to persistent storage, which keeps a
//! stored record and a fresh server response interchangeable.

use serde::{Deserialize, Serialize};

/// The signed-in user.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(rename = "_id", alias = "id", default)]
    pub id: String,
    pub email: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub is_verified: bool,
    /// Absolute URL, data URL, or a path on the API origin.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_pic: Option<String>,
}

impl User {
    /// Get display name, falling back to email if name is not set.
    pub fn display_name(&self) -> &str {
        self.name
            .as_deref()
            .filter(|n| !n.trim().is_empty())
            .unwrap_or(&self.email)
    }

    /// Copy of this user with the verification flag set.
    pub fn verified(&self) -> Self {
        Self {
            is_verified: true,
            ..self.clone()
        }
    }

    /// Copy of this user pointing at a new profile picture.
    pub fn with_profile_pic(&self, profile_pic: String) -> Self {
        Self {
            profile_pic: Some(profile_pic),
            ..self.clone()
        }
    }
}
