use serde::{Deserialize, Serialize};

/// Error response
///
/// `details` carries the router's raw explanation when the backend forwards one
/// (e.g. `"Blockhash not found"`).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ErrorResponse {
    /// `error` followed by `details`, when present.
    pub fn message(&self) -> String {
        match self.details.as_deref().map(str::trim).filter(|d| !d.is_empty()) {
            Some(details) => format!("{}: {}", self.error, details),
            None => self.error.clone(),
        }
    }
}
