use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Body of `POST /login`
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct LoginRequest {
    #[serde(default)]
    pub password: Option<String>,
}

/// Result of a password check. No session or token is issued.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct LoginResponse {
    pub message: String,
    pub success: bool,
}

impl LoginResponse {
    pub fn accepted() -> Self {
        Self {
            message: "Login successful".to_string(),
            success: true,
        }
    }

    pub fn rejected(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            success: false,
        }
    }
}
