use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

/// Error body returned by the API with any non-200 status.
///
/// Every field is optional on the wire: a 202 "processing" answer carries
/// only `type`, `description` and `retry_after`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Error, Serialize, Deserialize)]
#[error("{code}: {description}")]
pub struct ApiError {
    #[serde(rename = "type", default)]
    pub error_type: String,
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub description: String,
    /// Name of the request parameter that caused the failure.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameter: Option<String>,
    /// Suggested delay in seconds before retrying. Never acted on by the client.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub retry_after: Option<u32>,
}

impl ApiError {
    pub fn retry_after_duration(&self) -> Option<Duration> {
        self.retry_after.map(|secs| Duration::from_secs(u64::from(secs)))
    }
}
