// src/server/routes.rs

use std::convert::Infallible;
use std::time::Duration;

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::sse::{Event, KeepAlive, Sse};
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use tokio_stream::wrappers::ReceiverStream;
use tokio_stream::{Stream, StreamExt};
use tracing::{error, info};
use uuid::Uuid;

use crate::core::models::{ScanFindings, ScanSummary};
use crate::core::{extractor, report, scanner};
use crate::server::state::AppState;
use crate::tasks::TaskEvent;

const KEEP_ALIVE_INTERVAL: Duration = Duration::from_secs(30);

#[derive(Debug, Deserialize)]
pub struct ScanRequest {
    #[serde(default)]
    pub url: String,
}

#[derive(Debug, Serialize)]
pub struct ScanResponse {
    pub success: bool,
    pub url: String,
    pub results: ScanFindings,
    pub summary: ScanSummary,
    pub task_id: Uuid,
}

#[derive(Debug, Deserialize)]
pub struct RecommendationRequest {
    #[serde(default)]
    pub issue_type: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub current_content: String,
    #[serde(default)]
    pub context: String,
}

fn error_body(message: String) -> Json<Value> {
    Json(json!({ "success": false, "error": message }))
}

/// Fetches the requested page, kicks off background summarization, and
/// returns the scan findings. Fetch failures come back as a structured
/// error, never as an empty result.
pub async fn scan_handler(
    State(state): State<AppState>,
    Json(request): Json<ScanRequest>,
) -> Response {
    let input = request.url.trim();
    if input.is_empty() {
        return error_body("Please enter a URL".to_string()).into_response();
    }

    let page = match state.fetcher.fetch(input).await {
        Ok(page) => page,
        Err(fetch_error) => {
            error!(url = input, error = %fetch_error, "Fetch failed.");
            return error_body(format!("Failed to fetch URL: {fetch_error}")).into_response();
        }
    };

    let task_id = state.tasks.register().await;

    // The parsed document is dropped before the response is built; only
    // the findings and the extracted text travel further.
    let (body_text, findings) = {
        let document = extractor::parse(&page.html);
        let content = extractor::extract(&document);
        let findings = scanner::evaluate(&document, Some(&page.final_url));
        (content.body_text, findings)
    };

    spawn_summarization(state.clone(), task_id, body_text);

    let summary = report::summarize(&findings);
    info!(
        url = %page.final_url,
        total_issues = summary.total_issues,
        task_id = %task_id,
        "Scan finished."
    );

    Json(ScanResponse {
        success: true,
        url: page.final_url.to_string(),
        results: findings,
        summary,
        task_id,
    })
    .into_response()
}

fn spawn_summarization(state: AppState, task_id: Uuid, body_text: String) {
    tokio::spawn(async move {
        state.tasks.mark_processing(task_id).await;
        match state.assistant.summarize(&body_text).await {
            Ok(summary) => state.tasks.complete(task_id, summary).await,
            Err(assistant_error) => {
                error!(task_id = %task_id, error = %assistant_error, "Summarization failed.");
                state.tasks.fail(task_id, assistant_error.to_string()).await;
            }
        }
    });
}

/// Polls a background task's status.
pub async fn task_status_handler(
    State(state): State<AppState>,
    Path(task_id): Path<Uuid>,
) -> Json<Value> {
    match state.tasks.status(task_id).await {
        Some((status, outcome)) => Json(json!({
            "task_id": task_id,
            "status": status,
            "result": outcome.map_or(json!({}), |outcome| json!(outcome)),
        })),
        None => Json(json!({
            "task_id": task_id,
            "status": "not_found",
            "result": {},
        })),
    }
}

/// Streams a task's single terminal event over SSE, with keep-alives while
/// the task is still running. The stream closes after the event.
pub async fn events_handler(
    State(state): State<AppState>,
    Path(task_id): Path<Uuid>,
) -> Result<Sse<impl Stream<Item = Result<Event, Infallible>>>, StatusCode> {
    let Some(receiver) = state.tasks.subscribe(task_id).await else {
        return Err(StatusCode::NOT_FOUND);
    };

    let stream = ReceiverStream::new(receiver).map(|event: TaskEvent| {
        let built = Event::default().event(event.name()).json_data(&event);
        Ok(built.unwrap_or_else(|encode_error| {
            error!(error = %encode_error, "Failed to encode task event.");
            Event::default().event(event.name()).data("{}")
        }))
    });

    Ok(Sse::new(stream).keep_alive(
        KeepAlive::new()
            .interval(KEEP_ALIVE_INTERVAL)
            .text("heartbeat"),
    ))
}

/// Asks the model for replacement copy for one flagged issue.
pub async fn ai_recommendation_handler(
    State(state): State<AppState>,
    Json(request): Json<RecommendationRequest>,
) -> Json<Value> {
    let suggestion = state
        .assistant
        .suggest_replacement(
            &request.issue_type,
            &request.description,
            &request.current_content,
            &request.context,
        )
        .await;

    match suggestion {
        Ok(suggestion) => Json(json!({
            "success": true,
            "recommendations": [suggestion],
        })),
        Err(assistant_error) => {
            error!(error = %assistant_error, "Recommendation failed.");
            error_body(format!(
                "Failed to generate recommendations: {assistant_error}"
            ))
        }
    }
}

pub async fn health_handler() -> Json<Value> {
    Json(json!({ "status": "healthy" }))
}
