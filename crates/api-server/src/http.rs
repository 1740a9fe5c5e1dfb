use std::sync::Arc;

use axum::Router;
use axum::extract::{Form, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::routing::{get, post};
use serde::Deserialize;
use shared::history::HistoryError;
use shared::service::InterviewService;
use tracing::error;

mod render;

#[derive(Clone)]
pub struct AppState {
    pub service: Arc<InterviewService>,
}

pub fn build_router(app_state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/interview", get(interview_form))
        .route("/interview/result", post(interview_result))
        .route("/history", get(history))
        .with_state(app_state)
}

async fn index() -> Redirect {
    Redirect::to("/interview")
}

async fn interview_form() -> Html<String> {
    Html(render::interview_form_page())
}

#[derive(Debug, Deserialize)]
struct InterviewSubmission {
    company: String,
    user_intro: String,
}

async fn interview_result(
    State(state): State<AppState>,
    Form(submission): Form<InterviewSubmission>,
) -> Response {
    match state
        .service
        .generate(&submission.company, &submission.user_intro)
        .await
    {
        Ok(result) => Html(render::interview_result_page(&result)).into_response(),
        Err(err) => history_error_response(err),
    }
}

async fn history(State(state): State<AppState>) -> Response {
    match state.service.history() {
        Ok(records) => Html(render::history_page(&records)).into_response(),
        Err(err) => history_error_response(err),
    }
}

fn history_error_response(err: HistoryError) -> Response {
    error!("history log operation failed: {err}");
    (StatusCode::INTERNAL_SERVER_ERROR, Html(render::error_page())).into_response()
}
