use serde::{Deserialize, Serialize};

// === Translation Operation Models ===

#[derive(Debug, Deserialize)]
pub struct TranslateRequest {
    pub text: String,
    #[serde(default = "default_src")]
    pub src: String,
    pub dest: String,
    #[serde(default)]
    pub user_id: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct BulkTranslateRequest {
    // Entries may be null; they are dropped during validation
    pub texts: Vec<Option<String>>,
    #[serde(default = "default_src")]
    pub src: String,
    pub dest: String,
    #[serde(default)]
    pub user_id: Option<String>,
}

fn default_src() -> String {
    "auto".to_string()
}

#[derive(Serialize)]
pub struct TranslateResponse {
    pub translated: String,
}

#[derive(Serialize)]
pub struct BulkTranslateResponse {
    pub translated: Vec<String>,
    pub duration: f64,
}

#[derive(Serialize)]
pub struct HealthResponse {
    pub message: String,
}

// Error response
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}
