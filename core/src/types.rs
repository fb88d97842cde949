//! Request and response bodies for the asset API.

use serde::{Deserialize, Serialize};

/// An asset as returned by the server.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Asset {
    pub name: String,
    pub uri: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// Body for `POST /api/assets`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateAsset {
    pub name: String,
    pub uri: String,
}

/// Body for `PUT /api/assets`: attach `note` to the asset at `uri`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddNote {
    pub uri: String,
    pub note: String,
}

/// Body for `DELETE /api/assets`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemoveAsset {
    pub uri: String,
}
