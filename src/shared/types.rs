use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Envelope for every error response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ApiErrorResponse {
    pub success: bool,
    pub message: Option<String>,
    pub errors: Option<Vec<String>>,
}

impl ApiErrorResponse {
    pub fn new(message: Option<String>, errors: Option<Vec<String>>) -> Self {
        Self {
            success: false,
            message,
            errors,
        }
    }
}
