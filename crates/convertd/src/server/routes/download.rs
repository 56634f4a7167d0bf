//! Result download endpoint

use axum::{
    extract::{Query, State},
    http::header,
    response::IntoResponse,
};

use crate::error::{Error, Result};
use crate::server::state::AppState;
use crate::types::TaskState;

use super::status::TaskQuery;

/// GET /download/?task_id=<id> - Download the processed document
///
/// Only completed tasks are downloadable; a failed task's error is surfaced
/// through /status/, not here.
pub async fn download_result(
    State(state): State<AppState>,
    Query(query): Query<TaskQuery>,
) -> Result<impl IntoResponse> {
    let record = state
        .registry()
        .get(query.task_id)
        .ok_or(Error::TaskNotFound(query.task_id))?;

    let result = match record.state {
        TaskState::Completed { result } => result,
        _ => return Err(Error::NotReady(query.task_id)),
    };

    let body = tokio::fs::read(&result).await?;
    let filename = format!("{}_processed.json", query.task_id);

    Ok((
        [
            (header::CONTENT_TYPE, "application/json".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", filename),
            ),
        ],
        body,
    ))
}
