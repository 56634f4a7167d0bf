//! Upload endpoint

use axum::{
    extract::{Multipart, State},
    Json,
};
use serde::Serialize;
use uuid::Uuid;

use crate::error::{Error, Result};
use crate::processing::ConversionJob;
use crate::server::state::AppState;

/// Response from a successful upload
#[derive(Debug, Serialize)]
pub struct UploadResponse {
    pub task_id: Uuid,
    pub message: String,
}

/// POST /upload/ - Accept a file and queue its conversion
///
/// The first multipart field carrying a filename is taken as the upload;
/// fields without one are skipped. The response is sent as soon as the raw
/// bytes are on disk, processing happens in the background.
pub async fn upload_file(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<UploadResponse>> {
    let mut upload: Option<(String, Vec<u8>)> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| Error::Upload(format!("Failed to read multipart field: {}", e)))?
    {
        let Some(filename) = field.file_name().map(|s| s.to_string()) else {
            continue;
        };

        let data = field
            .bytes()
            .await
            .map_err(|e| Error::Upload(format!("Failed to read file '{}': {}", filename, e)))?;

        upload = Some((filename, data.to_vec()));
        break;
    }

    let (filename, data) = upload.ok_or_else(|| Error::Upload("No file provided".to_string()))?;

    let task_id = Uuid::new_v4();

    // Raw bytes keyed by the client-supplied filename, overwriting any
    // previous upload of the same name
    let input_path = state.storage().upload_path(&filename);
    tokio::fs::write(&input_path, &data).await?;

    state.registry().create(task_id);
    tracing::info!(
        "Upload accepted: {} ({} bytes), task {}",
        filename,
        data.len(),
        task_id
    );

    state.processor().dispatch(ConversionJob {
        task_id,
        input_path,
    });

    Ok(Json(UploadResponse {
        task_id,
        message: "File uploaded successfully".to_string(),
    }))
}
