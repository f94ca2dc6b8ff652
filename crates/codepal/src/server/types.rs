use codepal_core::debug::DebugReport;
use serde::{Deserialize, Serialize};

// Every request field is optional: missing values fall back to defaults instead of
// rejecting the request.

#[derive(Debug, Deserialize)]
pub struct GenerateRequest {
    pub prompt: Option<String>,
    pub language: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CodeRequest {
    pub code: Option<String>,
    pub language: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct GenerateResponse {
    pub ok: bool,
    pub code: String,
}

#[derive(Debug, Serialize)]
pub struct ExplainResponse {
    pub ok: bool,
    pub explanation: String,
}

#[derive(Debug, Serialize)]
pub struct DebugResponse {
    pub ok: bool,
    #[serde(flatten)]
    pub report: DebugReport,
}

#[derive(Debug, Serialize)]
pub struct LanguagesResponse {
    pub ok: bool,
    pub languages: Vec<&'static str>,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub ok: bool,
    pub error: String,
}
