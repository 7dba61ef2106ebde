//! HTTP surface. Four read endpoints, one delete. The handlers do no logic
//! of their own; everything is a pass-through to [`JobBoard`].

use std::sync::Arc;

use axum::{
    Router,
    extract::{Path, State},
    http::StatusCode,
    response::{Html, IntoResponse},
    routing::{delete, get},
    Json,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::board::JobBoard;
use crate::store::Store;

pub struct AppState<S: Store> {
    pub board: Arc<JobBoard<S>>,
}

impl<S: Store> AppState<S> {
    pub fn new(board: JobBoard<S>) -> Self {
        AppState {
            board: Arc::new(board),
        }
    }
}

impl<S: Store> Clone for AppState<S> {
    fn clone(&self) -> Self {
        AppState {
            board: self.board.clone(),
        }
    }
}

/// Static instructions page listing the other endpoints.
pub fn api_instructions_html() -> &'static str {
    r#"
<style>
a, h1 {
	background-color: #ddd;
	font-family: courier;
}
</style>
<h1>GETAJOB API</h1>
<ul>
	<li><a href="jobs">/jobs</a> - array of job listings with all fields</li>
	<li><a href="todos">/todos</a> - array of todos with todo/company/title fields</li>
	<li><a href="totaledSkills">/totaledSkills</a> - array of skills with totals how often they occur in job listings</li>
</ul>
"#
}

async fn instructions() -> impl IntoResponse {
    Html(api_instructions_html())
}

/// All jobs, each with its resolved `skills`.
async fn jobs<S: Store>(State(state): State<AppState<S>>) -> impl IntoResponse {
    Json(state.board.jobs_with_skills())
}

async fn todos<S: Store>(State(state): State<AppState<S>>) -> impl IntoResponse {
    Json(state.board.todos())
}

async fn totaled_skills<S: Store>(State(state): State<AppState<S>>) -> impl IntoResponse {
    Json(state.board.totaled_skills())
}

/// Removes a job and reports what was removed. 404 when no job matched,
/// 500 when the write-back failed (in which case nothing changed).
async fn delete_job<S: Store>(
    State(state): State<AppState<S>>,
    Path(id): Path<i64>,
) -> impl IntoResponse {
    match state.board.delete_job(id) {
        Ok(Some(job)) => (StatusCode::OK, Json(job)).into_response(),
        Ok(None) => (StatusCode::NOT_FOUND, format!("Job {} not found", id)).into_response(),
        Err(e) => {
            tracing::error!(id, "Failed to delete job: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Failed to delete job: {}", e),
            )
                .into_response()
        }
    }
}

pub fn routes<S: Store>() -> Router<AppState<S>> {
    Router::new()
        .route("/", get(instructions))
        .route("/jobs", get(jobs::<S>))
        .route("/todos", get(todos::<S>))
        .route("/totaledSkills", get(totaled_skills::<S>))
        .route("/jobs/{id}", delete(delete_job::<S>))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn instructions_page_lists_every_read_endpoint() {
        let html = api_instructions_html();
        assert!(html.contains("jobs"));
        assert!(html.contains("todos"));
        assert!(html.contains("totaledSkills"));
    }

    #[test]
    fn routes_build_for_the_test_store() {
        // Catches state/bound mismatches at router construction time
        let _router = routes::<crate::store::MemoryStore>();
    }
}
