//! Task status endpoints

use axum::{
    extract::{Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{Error, Result};
use crate::server::state::AppState;
use crate::types::{TaskRecord, TaskState};

/// Query parameters identifying a task
#[derive(Debug, Deserialize)]
pub struct TaskQuery {
    pub task_id: Uuid,
}

/// GET /status/?task_id=<id> - Current state of a task
pub async fn task_status(
    State(state): State<AppState>,
    Query(query): Query<TaskQuery>,
) -> Result<Json<TaskRecord>> {
    state
        .registry()
        .get(query.task_id)
        .map(Json)
        .ok_or(Error::TaskNotFound(query.task_id))
}

/// Response for the task list
#[derive(Debug, Serialize)]
pub struct TaskListResponse {
    pub tasks: Vec<TaskRecord>,
    pub total: usize,
    pub processing: usize,
    pub completed: usize,
    pub failed: usize,
}

/// GET /tasks/ - All tracked tasks with counts
pub async fn list_tasks(State(state): State<AppState>) -> Json<TaskListResponse> {
    let tasks = state.registry().list();

    let processing = tasks
        .iter()
        .filter(|t| t.state == TaskState::Processing)
        .count();
    let completed = tasks
        .iter()
        .filter(|t| matches!(t.state, TaskState::Completed { .. }))
        .count();
    let failed = tasks
        .iter()
        .filter(|t| matches!(t.state, TaskState::Failed { .. }))
        .count();

    Json(TaskListResponse {
        total: tasks.len(),
        processing,
        completed,
        failed,
        tasks,
    })
}
