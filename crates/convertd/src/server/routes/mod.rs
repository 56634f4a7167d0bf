//! API routes for the conversion server

pub mod download;
pub mod status;
pub mod upload;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::server::state::AppState;

/// Build all API routes
pub fn api_routes(max_upload_size: usize) -> Router<AppState> {
    Router::new()
        // Upload - with body limit for multipart uploads
        .route(
            "/upload/",
            post(upload::upload_file).layer(DefaultBodyLimit::max(max_upload_size)),
        )
        // Task state
        .route("/status/", get(status::task_status))
        .route("/tasks/", get(status::list_tasks))
        // Result download
        .route("/download/", get(download::download_result))
}
