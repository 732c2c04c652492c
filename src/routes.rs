use std::sync::Arc;

use axum::{
    Form,
    extract::{State, rejection::FormRejection},
    http::header::CONTENT_TYPE,
    response::{Html, IntoResponse},
};
use serde::Deserialize;
use tracing::{info, warn};

use crate::{
    error::AppError,
    render::{render_document, render_entry_list},
    state::AppState,
};

const FAVICON: &[u8] = include_bytes!("../assets/favicon.png");

#[derive(Deserialize)]
pub struct Submission {
    name: String,
    message: String,
}

pub async fn page_handler(State(state): State<Arc<AppState>>) -> Result<Html<String>, AppError> {
    let entries = state.guestbook.list_entries().await?;

    Ok(Html(render_document(&entries)))
}

/// Stores the submission, then answers with the refreshed `#message-list`.
pub async fn submit_handler(
    State(state): State<Arc<AppState>>,
    payload: Result<Form<Submission>, FormRejection>,
) -> Result<Html<String>, AppError> {
    let Form(submission) = payload.map_err(|e| {
        warn!("Rejected submission: {e}");
        AppError::MalformedPayload
    })?;

    info!("New entry from {}", submission.name);
    state
        .guestbook
        .add_entry(submission.name, submission.message)
        .await?;

    let entries = state.guestbook.list_entries().await?;

    Ok(Html(render_entry_list(&entries).to_string()))
}

pub async fn favicon_handler() -> impl IntoResponse {
    ([(CONTENT_TYPE, "image/png")], FAVICON)
}
