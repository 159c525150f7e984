use serde::{Deserialize, Serialize};

/// The `{status, data}` wrapper the V1 backend puts around single-entity
/// responses (employees, deletion flags). The collection endpoint returns a
/// bare array instead and bypasses this type.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(bound(serialize = "T: Serialize", deserialize = "T: Deserialize<'de>"))]
pub struct BackendEnvelope<T> {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

impl<T> BackendEnvelope<T> {
    /// Wraps a payload the way the backend reports success.
    pub fn success(data: T) -> Self {
        Self {
            data: Some(data),
            status: Some("Successfully processed request.".to_string()),
        }
    }

    pub fn into_data(self) -> Option<T> {
        self.data
    }
}
