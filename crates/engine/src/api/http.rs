//! HTTP routes.

use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Query, State,
    },
    http::{header, StatusCode},
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use serde_json::Value;
use std::sync::Arc;
use waitlist_domain::Submission;
use waitlist_shared::{DataResponse, ErrorResponse, SubmissionSearchQuery, SubmitSubmissionRequest};

use crate::app::App;
use crate::use_cases::submissions::SignupError;

const INVALID_REQUEST: &str = "Invalid request.";
const CSV_CONTENT_TYPE: &str = "text/csv; charset=utf-8";
const CSV_DISPOSITION: &str = "attachment; filename=\"waitlist.csv\"";

/// Create all HTTP routes.
pub fn routes() -> Router<Arc<App>> {
    Router::new()
        .route("/", get(health))
        .route("/api/health", get(health))
        .route(
            "/api/submissions",
            get(list_submissions).post(create_submission),
        )
        .route("/api/submissions/export", get(export_submissions))
        .fallback(not_found)
}

async fn health() -> &'static str {
    "OK"
}

async fn not_found() -> ApiError {
    ApiError::NotFound
}

// =============================================================================
// Submissions
// =============================================================================

async fn list_submissions(
    State(app): State<Arc<App>>,
    query: Result<Query<SubmissionSearchQuery>, QueryRejection>,
) -> Result<Json<DataResponse<Vec<Submission>>>, ApiError> {
    let query = search_query(query)?;
    let data = app
        .use_cases
        .submissions
        .browse
        .search(query.q.as_deref())
        .await;
    Ok(Json(DataResponse::new(data)))
}

async fn create_submission(
    State(app): State<Arc<App>>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<DataResponse<Submission>>, ApiError> {
    let Json(body) = payload.map_err(|rejection| {
        tracing::debug!(error = %rejection, "Unreadable submission body");
        ApiError::BadRequest(INVALID_REQUEST.to_string())
    })?;

    let saved = app
        .use_cases
        .submissions
        .submit
        .execute(signup_request(body))
        .await?;
    Ok(Json(DataResponse::new(saved)))
}

async fn export_submissions(
    State(app): State<Arc<App>>,
    query: Result<Query<SubmissionSearchQuery>, QueryRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let query = search_query(query)?;
    let csv = app
        .use_cases
        .submissions
        .browse
        .export_csv(query.q.as_deref())
        .await;

    Ok((
        [
            (header::CONTENT_TYPE, CSV_CONTENT_TYPE),
            (header::CONTENT_DISPOSITION, CSV_DISPOSITION),
        ],
        csv,
    ))
}

/// Any JSON document is a signup attempt; non-objects carry no fields.
fn signup_request(body: Value) -> SubmitSubmissionRequest {
    if !body.is_object() {
        return SubmitSubmissionRequest::default();
    }
    serde_json::from_value(body).unwrap_or_default()
}

fn search_query(
    query: Result<Query<SubmissionSearchQuery>, QueryRejection>,
) -> Result<SubmissionSearchQuery, ApiError> {
    let Query(query) = query.map_err(|rejection| {
        tracing::debug!(error = %rejection, "Unreadable search query");
        ApiError::BadRequest(INVALID_REQUEST.to_string())
    })?;
    Ok(query)
}

// =============================================================================
// Errors
// =============================================================================

#[derive(Debug)]
pub enum ApiError {
    NotFound,
    BadRequest(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            ApiError::NotFound => (StatusCode::NOT_FOUND, "Not found".to_string()),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
        };
        (status, Json(ErrorResponse::new(message))).into_response()
    }
}

impl From<SignupError> for ApiError {
    fn from(e: SignupError) -> Self {
        ApiError::BadRequest(e.to_string())
    }
}
