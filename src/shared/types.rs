use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Error body returned by every JSON endpoint
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<String>>,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>, errors: Option<Vec<String>>) -> Self {
        Self {
            message: message.into(),
            errors,
        }
    }
}
