//! Axum route handlers for the Match API.

use axum::extract::{Multipart, State};
use axum::Json;
use bytes::Bytes;
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::extract::extract_text;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct MatchTextRequest {
    pub resume_text: String,
    pub job_text: String,
}

#[derive(Debug, Serialize)]
pub struct MatchResponse {
    /// Match score in [0.0, 100.0], rounded to two decimals.
    pub score: f64,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/match
///
/// Multipart upload: a `resume` file field (PDF, DOCX, or plain text) plus a
/// `job_desc` text field. Extracts the resume text and scores it against the
/// job description. Nothing is persisted; the upload lives only in memory for
/// the duration of the request.
pub async fn handle_match(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<MatchResponse>, AppError> {
    let mut resume: Option<(String, Bytes)> = None;
    let mut job_desc: Option<String> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("invalid multipart request: {e}")))?
    {
        // `bytes()`/`text()` consume the field, so detach the name first.
        let name = field.name().map(str::to_string);
        match name.as_deref() {
            Some("resume") => {
                // No filename means no extension to dispatch on; treat the
                // upload as plain text, like any other unrecognized name.
                let filename = field
                    .file_name()
                    .map(str::to_string)
                    .unwrap_or_else(|| "resume.txt".to_string());
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::Validation(format!("failed to read resume upload: {e}")))?;
                resume = Some((filename, bytes));
            }
            Some("job_desc") => {
                let text = field
                    .text()
                    .await
                    .map_err(|e| AppError::Validation(format!("failed to read job description: {e}")))?;
                job_desc = Some(text);
            }
            _ => {}
        }
    }

    let (filename, bytes) =
        resume.ok_or_else(|| AppError::Validation("resume file is required".to_string()))?;
    let job_desc =
        job_desc.ok_or_else(|| AppError::Validation("job description is required".to_string()))?;
    if job_desc.trim().is_empty() {
        return Err(AppError::Validation(
            "job description cannot be empty".to_string(),
        ));
    }

    let resume_text = extract_text(&bytes, &filename)?;
    let score = state.scorer.score(&resume_text, &job_desc).await?;

    Ok(Json(MatchResponse { score }))
}

/// POST /api/v1/match/text
///
/// JSON variant for callers that already hold plain text on both sides,
/// skipping upload handling and extraction entirely.
pub async fn handle_match_text(
    State(state): State<AppState>,
    Json(request): Json<MatchTextRequest>,
) -> Result<Json<MatchResponse>, AppError> {
    let score = state
        .scorer
        .score(&request.resume_text, &request.job_text)
        .await?;

    Ok(Json(MatchResponse { score }))
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::body::Body;
    use axum::http::{header::CONTENT_TYPE, Request, StatusCode};
    use axum::Router;
    use tower::ServiceExt;

    use super::*;
    use crate::config::Config;
    use crate::matching::scoring::TfidfCosineScorer;
    use crate::routes::build_router;

    fn test_app() -> Router {
        let config = Config {
            port: 0,
            rust_log: "info".to_string(),
            max_upload_bytes: 5 * 1024 * 1024,
        };
        build_router(AppState {
            config,
            scorer: Arc::new(TfidfCosineScorer),
        })
    }

    const BOUNDARY: &str = "match-test-boundary";

    fn multipart_body(parts: &[(&str, Option<&str>, &str)]) -> (String, Body) {
        let mut body = String::new();
        for (name, filename, content) in parts {
            body.push_str(&format!("--{BOUNDARY}\r\n"));
            match filename {
                Some(f) => body.push_str(&format!(
                    "Content-Disposition: form-data; name=\"{name}\"; filename=\"{f}\"\r\nContent-Type: application/octet-stream\r\n\r\n"
                )),
                None => body.push_str(&format!(
                    "Content-Disposition: form-data; name=\"{name}\"\r\n\r\n"
                )),
            }
            body.push_str(content);
            body.push_str("\r\n");
        }
        body.push_str(&format!("--{BOUNDARY}--\r\n"));
        (
            format!("multipart/form-data; boundary={BOUNDARY}"),
            Body::from(body),
        )
    }

    async fn response_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_multipart_upload_returns_score() {
        let (content_type, body) = multipart_body(&[
            ("job_desc", None, "Looking for a Python developer"),
            (
                "resume",
                Some("resume.txt"),
                "Python developer with Flask experience",
            ),
        ]);
        let request = Request::builder()
            .method("POST")
            .uri("/api/v1/match")
            .header(CONTENT_TYPE, content_type)
            .body(body)
            .unwrap();

        let response = test_app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = response_json(response).await;
        let score = json["score"].as_f64().unwrap();
        assert!(score > 0.0 && score < 100.0, "score was {score}");
    }

    #[tokio::test]
    async fn test_missing_resume_field_is_400() {
        let (content_type, body) =
            multipart_body(&[("job_desc", None, "Looking for a Python developer")]);
        let request = Request::builder()
            .method("POST")
            .uri("/api/v1/match")
            .header(CONTENT_TYPE, content_type)
            .body(body)
            .unwrap();

        let response = test_app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let json = response_json(response).await;
        assert_eq!(json["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_empty_job_desc_is_400() {
        let (content_type, body) = multipart_body(&[
            ("job_desc", None, "   "),
            ("resume", Some("resume.txt"), "Python developer"),
        ]);
        let request = Request::builder()
            .method("POST")
            .uri("/api/v1/match")
            .header(CONTENT_TYPE, content_type)
            .body(body)
            .unwrap();

        let response = test_app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_empty_resume_upload_is_user_input_error() {
        let (content_type, body) = multipart_body(&[
            ("job_desc", None, "Engineer"),
            ("resume", Some("resume.txt"), ""),
        ]);
        let request = Request::builder()
            .method("POST")
            .uri("/api/v1/match")
            .header(CONTENT_TYPE, content_type)
            .body(body)
            .unwrap();

        let response = test_app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let json = response_json(response).await;
        assert_eq!(json["error"]["code"], "USER_INPUT_ERROR");
    }

    #[tokio::test]
    async fn test_corrupt_pdf_upload_is_422() {
        let (content_type, body) = multipart_body(&[
            ("job_desc", None, "Engineer"),
            ("resume", Some("resume.pdf"), "this is not a pdf"),
        ]);
        let request = Request::builder()
            .method("POST")
            .uri("/api/v1/match")
            .header(CONTENT_TYPE, content_type)
            .body(body)
            .unwrap();

        let response = test_app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let json = response_json(response).await;
        assert_eq!(json["error"]["code"], "EXTRACTION_ERROR");
    }

    #[tokio::test]
    async fn test_text_endpoint_identical_texts_score_100() {
        let request = Request::builder()
            .method("POST")
            .uri("/api/v1/match/text")
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(
                serde_json::json!({
                    "resume_text": "Senior Rust engineer",
                    "job_text": "Senior Rust engineer"
                })
                .to_string(),
            ))
            .unwrap();

        let response = test_app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = response_json(response).await;
        assert_eq!(json["score"], 100.0);
    }

    #[tokio::test]
    async fn test_text_endpoint_stopword_only_is_422() {
        let request = Request::builder()
            .method("POST")
            .uri("/api/v1/match/text")
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(
                serde_json::json!({
                    "resume_text": "the a an",
                    "job_text": "of in on"
                })
                .to_string(),
            ))
            .unwrap();

        let response = test_app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let json = response_json(response).await;
        assert_eq!(json["error"]["code"], "EMPTY_VOCABULARY");
    }
}
