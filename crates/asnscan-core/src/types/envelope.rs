use serde::{Deserialize, Deserializer, Serialize};

/// Response wrapper used by every BGPView endpoint.
///
/// ```json
/// { "status": "ok", "status_message": "Query was successful", "data": { ... } }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiEnvelope<T> {
    /// "ok" or "error"
    #[serde(default)]
    pub status: Option<String>,

    /// Human-readable status text
    #[serde(default)]
    pub status_message: Option<String>,

    /// Endpoint payload
    pub data: T,
}

impl<T> ApiEnvelope<T> {
    /// Unwrap the payload
    pub fn into_data(self) -> T {
        self.data
    }
}

/// Treat an explicit `null` the same as a missing field.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
