use crate::prelude::eprintln;
use axum::{body::Bytes, extract::State, response::Html, Json};
use codepal_core::{
    debug::debug_code, explain::explain_code, normalize_language, page::render_index,
    snippets::generate_code, Language, LanguageError, SUPPORTED_LANGS,
};
use serde::de::DeserializeOwned;
use std::sync::Arc;

use super::error::ApiError;
use super::types::{
    CodeRequest, DebugResponse, ExplainResponse, GenerateRequest, GenerateResponse,
    LanguagesResponse,
};

type Shared = State<Arc<crate::Global>>;

/// Decode a JSON body regardless of the declared content type.
fn parse_body<T: DeserializeOwned>(body: &Bytes) -> std::result::Result<T, ApiError> {
    serde_json::from_slice(body).map_err(|e| ApiError::InvalidBody(e.to_string()))
}

pub async fn index() -> Html<String> {
    Html(render_index(&SUPPORTED_LANGS))
}

pub async fn languages() -> Json<LanguagesResponse> {
    Json(LanguagesResponse {
        ok: true,
        languages: SUPPORTED_LANGS.to_vec(),
    })
}

pub async fn generate(
    State(global): Shared,
    body: Bytes,
) -> std::result::Result<Json<GenerateResponse>, ApiError> {
    let request: GenerateRequest = parse_body(&body)?;
    let prompt = request.prompt.unwrap_or_default();
    let language = normalize_language(request.language.as_deref());

    if let Err(err) = Language::parse(&language) {
        let LanguageError::Unsupported(rejected) = &err;
        log::debug!("generate rejected language {rejected:?}");
        return Err(err.into());
    }

    if global.verbose {
        eprintln!("generate: language={language}, prompt={prompt:?}");
    }
    log::debug!("generate language={language} prompt_len={}", prompt.len());

    Ok(Json(GenerateResponse {
        ok: true,
        code: generate_code(&prompt, &language),
    }))
}

pub async fn explain(
    State(global): Shared,
    body: Bytes,
) -> std::result::Result<Json<ExplainResponse>, ApiError> {
    let request: CodeRequest = parse_body(&body)?;
    let code = request.code.unwrap_or_default();
    let language = normalize_language(request.language.as_deref());

    if global.verbose {
        eprintln!("explain: language={language}, {} bytes", code.len());
    }
    log::debug!("explain language={language} code_len={}", code.len());

    Ok(Json(ExplainResponse {
        ok: true,
        explanation: explain_code(&code, &language),
    }))
}

pub async fn debug(
    State(global): Shared,
    body: Bytes,
) -> std::result::Result<Json<DebugResponse>, ApiError> {
    let request: CodeRequest = parse_body(&body)?;
    let code = request.code.unwrap_or_default();
    let language = normalize_language(request.language.as_deref());

    if global.verbose {
        eprintln!("debug: language={language}, {} bytes", code.len());
    }

    let report = debug_code(&code, &language);
    log::debug!(
        "debug language={language} code_len={} issues={}",
        code.len(),
        report.issues.len()
    );

    Ok(Json(DebugResponse { ok: true, report }))
}
