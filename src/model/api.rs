use serde::{Deserialize, Serialize};

/// Body of every plain success response: `{"status": "success"}`.
#[derive(Serialize, Deserialize)]
pub struct StatusDto {
    pub status: String,
}

impl StatusDto {
    pub fn success() -> Self {
        Self {
            status: "success".to_string(),
        }
    }
}

/// Body of every error response: `{"status": "error", "message": ...}`.
#[derive(Serialize, Deserialize)]
pub struct ErrorDto {
    pub status: String,
    pub message: String,
}

impl ErrorDto {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            status: "error".to_string(),
            message: message.into(),
        }
    }
}
