mod error;
mod handlers;
mod types;

use crate::prelude::{eprintln, *};
use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

#[derive(Debug, clap::Args)]
pub struct ServeOptions {
    /// Port to listen on
    #[arg(short, long, env = "CODEPAL_PORT", default_value = "5000")]
    pub port: u16,

    /// Host to bind to
    #[arg(long, env = "CODEPAL_HOST", default_value = "127.0.0.1")]
    pub host: String,
}

pub async fn run(options: ServeOptions, global: crate::Global) -> Result<()> {
    let addr = format!("{}:{}", options.host, options.port);

    if global.verbose {
        eprintln!("Starting codepal on {}...", addr);
    }

    let app = router(global.clone());

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| Error::Bind(addr.clone(), e.to_string()))?;

    log::info!("listening on http://{addr}");
    if global.verbose {
        eprintln!("Web UI: http://{}/", addr);
        eprintln!("API: http://{}/api/{{generate,explain,debug}}", addr);
    }

    axum::serve(listener, app)
        .await
        .map_err(|e| eyre!("Server error: {e}"))?;

    Ok(())
}

/// Build the application router.
pub fn router(global: crate::Global) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(handlers::index))
        .route("/api/languages", get(handlers::languages))
        .route("/api/generate", post(handlers::generate))
        .route("/api/explain", post(handlers::explain))
        .route("/api/debug", post(handlers::debug))
        .layer(cors)
        .with_state(Arc::new(global))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use http_body_util::BodyExt;
    use serde_json::{json, Value};
    use tower::ServiceExt;

    fn app() -> Router {
        router(crate::Global { verbose: false })
    }

    async fn send(request: Request<Body>) -> (StatusCode, Vec<u8>) {
        let response = app().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, bytes.to_vec())
    }

    async fn post_raw(uri: &str, body: &str) -> (StatusCode, Value) {
        let request = Request::builder()
            .method("POST")
            .uri(uri)
            .body(Body::from(body.to_string()))
            .unwrap();
        let (status, bytes) = send(request).await;
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    async fn post_json(uri: &str, body: Value) -> (StatusCode, Value) {
        post_raw(uri, &body.to_string()).await
    }

    // ============================================================================
    // /api/generate
    // ============================================================================

    #[tokio::test]
    async fn test_generate_python_calculator() {
        let (status, body) = post_json(
            "/api/generate",
            json!({"prompt": "build me a calculator", "language": "python"}),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["ok"], true);
        assert!(body["code"].as_str().unwrap().contains("def add(a, b)"));
    }

    #[tokio::test]
    async fn test_generate_lowercases_language() {
        let (status, body) =
            post_json("/api/generate", json!({"prompt": "FizzBuzz", "language": "CPP"})).await;

        assert_eq!(status, StatusCode::OK);
        assert!(body["code"]
            .as_str()
            .unwrap()
            .contains("#include <bits/stdc++.h>"));
    }

    #[tokio::test]
    async fn test_generate_unsupported_language() {
        let (status, body) =
            post_json("/api/generate", json!({"prompt": "x", "language": "rust"})).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({"ok": false, "error": "Unsupported language"}));
    }

    #[tokio::test]
    async fn test_generate_empty_language_is_unsupported() {
        let (status, _) = post_json("/api/generate", json!({"language": ""})).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_generate_defaults_to_python_scaffold() {
        let (status, body) = post_json("/api/generate", json!({})).await;

        assert_eq!(status, StatusCode::OK);
        assert!(body["code"]
            .as_str()
            .unwrap()
            .starts_with("# Starter Python Program"));
    }

    #[tokio::test]
    async fn test_generate_ignores_content_type() {
        // No content-type header at all; the body is still read as JSON.
        let (status, body) =
            post_raw("/api/generate", r#"{"prompt":"guess","language":"javascript"}"#).await;

        assert_eq!(status, StatusCode::OK);
        assert!(body["code"].as_str().unwrap().contains("Math.random()"));
    }

    #[tokio::test]
    async fn test_generate_rejects_malformed_json() {
        let (status, body) = post_raw("/api/generate", "{not json").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["ok"], false);
        assert!(body["error"]
            .as_str()
            .unwrap()
            .starts_with("Invalid JSON body"));
    }

    // ============================================================================
    // /api/explain
    // ============================================================================

    #[tokio::test]
    async fn test_explain_annotates_lines() {
        let (status, body) = post_json(
            "/api/explain",
            json!({"code": "x = 1\n# comment\nfoo();", "language": "python"}),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["ok"], true);
        let explanation = body["explanation"].as_str().unwrap();
        assert!(explanation.contains("  1: x = 1 (assigns a value)"));
        assert!(explanation.contains("  2: # comment (comment)"));
        assert!(explanation.contains("  3: foo(); (likely a statement or function call)"));
    }

    #[tokio::test]
    async fn test_explain_accepts_any_language() {
        let (status, body) =
            post_json("/api/explain", json!({"code": "a = 2", "language": "cobol"})).await;

        assert_eq!(status, StatusCode::OK);
        assert!(body["explanation"]
            .as_str()
            .unwrap()
            .ends_with("  1: a = 2 (assigns a value)"));
    }

    // ============================================================================
    // /api/debug
    // ============================================================================

    #[tokio::test]
    async fn test_debug_python_syntax_error() {
        let (status, body) = post_json(
            "/api/debug",
            json!({"code": "def f(:\n  pass", "language": "python"}),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["ok"], true);
        let issues = body["issues"].as_array().unwrap();
        assert_eq!(issues.len(), 1);
        assert!(issues[0].as_str().unwrap().starts_with("Python SyntaxError:"));
        assert!(body["suggestion"].as_str().unwrap().contains("colons"));
    }

    #[tokio::test]
    async fn test_debug_defaults_to_python() {
        // Unbalanced as text, but without a language it is parsed as Python.
        let (_, body) = post_json("/api/debug", json!({"code": "foo(bar"})).await;

        let issues = body["issues"].as_array().unwrap();
        assert_eq!(issues.len(), 1);
        assert!(issues[0].as_str().unwrap().starts_with("Python SyntaxError:"));
    }

    #[tokio::test]
    async fn test_debug_javascript_unbalanced() {
        let (status, body) = post_json(
            "/api/debug",
            json!({"code": "foo(bar", "language": "JavaScript"}),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!({
                "ok": true,
                "issues": ["Unbalanced delimiters: ()=1, {}=0, []=0"],
                "suggestion": "Ensure all parentheses/braces/brackets are properly closed."
            })
        );
    }

    #[tokio::test]
    async fn test_debug_empty_body_object() {
        let (status, body) = post_json("/api/debug", json!({"language": "java"})).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["issues"], json!([]));
    }

    #[tokio::test]
    async fn test_handlers_are_idempotent() {
        let payload = json!({"code": "System.out.println(1)", "language": "java"});
        let first = post_json("/api/debug", payload.clone()).await;
        let second = post_json("/api/debug", payload).await;
        assert_eq!(first, second);
    }

    // ============================================================================
    // Static routes
    // ============================================================================

    #[tokio::test]
    async fn test_languages_endpoint() {
        let request = Request::builder()
            .uri("/api/languages")
            .body(Body::empty())
            .unwrap();
        let (status, bytes) = send(request).await;
        let body: Value = serde_json::from_slice(&bytes).unwrap();

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!({"ok": true, "languages": ["python", "javascript", "cpp", "java"]})
        );
    }

    #[tokio::test]
    async fn test_index_page_lists_languages() {
        let request = Request::builder().uri("/").body(Body::empty()).unwrap();
        let (status, bytes) = send(request).await;
        let html = String::from_utf8(bytes).unwrap();

        assert_eq!(status, StatusCode::OK);
        assert!(html.contains("<option value=\"javascript\">javascript</option>"));
    }

    #[tokio::test]
    async fn test_generate_requires_post() {
        let request = Request::builder()
            .uri("/api/generate")
            .body(Body::empty())
            .unwrap();
        let (status, _) = send(request).await;
        assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    }
}
