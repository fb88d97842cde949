use serde::{Deserialize, Serialize};
use tracing::debug;

/// A named resource identified by a structural URI.
///
/// `uri` doubles as the primary key in the store.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Asset {
    pub name: String,
    pub uri: String,
    #[serde(default, skip_serializing_if = "note_is_empty")]
    pub note: Option<String>,
}

fn note_is_empty(note: &Option<String>) -> bool {
    note.as_deref().map_or(true, str::is_empty)
}

/// Request body shared by create, update and delete. Every field is optional
/// so each method only has to send the fields it uses.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct AssetPayload {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub uri: String,
    #[serde(default)]
    pub note: Option<String>,
}

impl AssetPayload {
    /// Decode a request body, falling back to an empty payload when the body
    /// is not JSON. The empty payload never passes URI validation.
    pub fn decode(body: &[u8]) -> Self {
        serde_json::from_slice(body).unwrap_or_else(|e| {
            debug!(error = %e, "undecodable asset payload, using empty payload");
            Self::default()
        })
    }

    /// The note, if one was supplied and is non-empty.
    pub fn note(&self) -> Option<&str> {
        self.note.as_deref().filter(|n| !n.is_empty())
    }
}

impl From<AssetPayload> for Asset {
    /// New assets start without a note.
    fn from(payload: AssetPayload) -> Self {
        Self {
            name: payload.name,
            uri: payload.uri,
            note: None,
        }
    }
}
