//! End-to-end tests driving the router over HTTP semantics

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use std::time::Duration;
use tempfile::TempDir;
use tower::ServiceExt;
use uuid::Uuid;

use convertd::config::{ConvertConfig, ProcessingConfig, ServerConfig, StorageConfig};
use convertd::server::{build_router, state::AppState};

const BOUNDARY: &str = "convertd-test-boundary";

/// Build a router over temp storage with the given simulated delay
fn test_app(tmp: &TempDir, delay_secs: u64) -> Router {
    let config = ConvertConfig {
        server: ServerConfig::default(),
        storage: StorageConfig {
            upload_dir: tmp.path().join("uploads"),
            processed_dir: tmp.path().join("processed"),
        },
        processing: ProcessingConfig { delay_secs },
    };
    let state = AppState::new(config).unwrap();
    build_router(state, 1024 * 1024)
}

fn upload_request(filename: &str, content: &str) -> Request<Body> {
    let body = format!(
        "--{b}\r\n\
         Content-Disposition: form-data; name=\"file\"; filename=\"{f}\"\r\n\
         Content-Type: application/octet-stream\r\n\r\n\
         {c}\r\n\
         --{b}--\r\n",
        b = BOUNDARY,
        f = filename,
        c = content,
    );
    Request::builder()
        .method("POST")
        .uri("/upload/")
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={}", BOUNDARY),
        )
        .body(Body::from(body))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

async fn upload(app: &Router, filename: &str, content: &str) -> String {
    let response = app
        .clone()
        .oneshot(upload_request(filename, content))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["message"], "File uploaded successfully");
    json["task_id"].as_str().unwrap().to_string()
}

/// Poll /status/ until the task leaves the processing state
async fn wait_for_terminal(app: &Router, task_id: &str) -> Value {
    for _ in 0..100 {
        let response = app
            .clone()
            .oneshot(get(&format!("/status/?task_id={}", task_id)))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        if json["status"] != "processing" {
            return json;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    panic!("task {} never reached a terminal state", task_id);
}

#[tokio::test]
async fn test_health() {
    let tmp = TempDir::new().unwrap();
    let app = test_app(&tmp, 0);

    let response = app.oneshot(get("/health")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    assert_eq!(&bytes[..], b"OK");
}

#[tokio::test]
async fn test_csv_upload_end_to_end() {
    let tmp = TempDir::new().unwrap();
    let app = test_app(&tmp, 0);

    let task_id = upload(&app, "a.csv", "name,age\nAda,30\n").await;

    let status = wait_for_terminal(&app, &task_id).await;
    assert_eq!(status["status"], "completed");
    assert!(status["result"]
        .as_str()
        .unwrap()
        .ends_with(&format!("{}_processed.json", task_id)));

    let response = app
        .clone()
        .oneshot(get(&format!("/download/?task_id={}", task_id)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::CONTENT_TYPE],
        "application/json"
    );
    assert_eq!(
        response.headers()[header::CONTENT_DISPOSITION],
        format!("attachment; filename=\"{}_processed.json\"", task_id)
    );

    let json = body_json(response).await;
    assert_eq!(json, json!([{"name": "Ada", "age": "30"}]));
}

#[tokio::test]
async fn test_json_upload_end_to_end() {
    let tmp = TempDir::new().unwrap();
    let app = test_app(&tmp, 0);

    let task_id = upload(&app, "b.json", r#"{"x": 1}"#).await;

    let status = wait_for_terminal(&app, &task_id).await;
    assert_eq!(status["status"], "completed");

    let response = app
        .clone()
        .oneshot(get(&format!("/download/?task_id={}", task_id)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let text = String::from_utf8(bytes.to_vec()).unwrap();

    // Reformatted with 4-space indentation, same structure
    assert_eq!(text, "{\n    \"x\": 1\n}");
}

#[tokio::test]
async fn test_unsupported_extension_fails_task() {
    let tmp = TempDir::new().unwrap();
    let app = test_app(&tmp, 0);

    let task_id = upload(&app, "notes.txt", "plain text").await;

    let status = wait_for_terminal(&app, &task_id).await;
    assert_eq!(status["status"], "failed");
    assert!(status["error"]
        .as_str()
        .unwrap()
        .contains("Unsupported file format"));

    // Failed tasks are not downloadable
    let response = app
        .oneshot(get(&format!("/download/?task_id={}", task_id)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_malformed_json_fails_task() {
    let tmp = TempDir::new().unwrap();
    let app = test_app(&tmp, 0);

    let task_id = upload(&app, "broken.json", "{not json").await;

    let status = wait_for_terminal(&app, &task_id).await;
    assert_eq!(status["status"], "failed");
    assert!(status["error"].as_str().unwrap().contains("broken.json"));
}

#[tokio::test]
async fn test_status_unknown_task() {
    let tmp = TempDir::new().unwrap();
    let app = test_app(&tmp, 0);

    let response = app
        .oneshot(get(&format!("/status/?task_id={}", Uuid::new_v4())))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let json = body_json(response).await;
    assert_eq!(json["error"]["type"], "not_found");
}

#[tokio::test]
async fn test_download_unknown_task() {
    let tmp = TempDir::new().unwrap();
    let app = test_app(&tmp, 0);

    let response = app
        .oneshot(get(&format!("/download/?task_id={}", Uuid::new_v4())))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_download_while_processing() {
    let tmp = TempDir::new().unwrap();
    // Long delay keeps the task in the processing state for the whole test
    let app = test_app(&tmp, 600);

    let task_id = upload(&app, "slow.csv", "a,b\n1,2\n").await;

    let response = app
        .clone()
        .oneshot(get(&format!("/status/?task_id={}", task_id)))
        .await
        .unwrap();
    let json = body_json(response).await;
    assert_eq!(json["status"], "processing");

    let response = app
        .oneshot(get(&format!("/download/?task_id={}", task_id)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["error"]["type"], "not_ready");
}

#[tokio::test]
async fn test_upload_without_file_field() {
    let tmp = TempDir::new().unwrap();
    let app = test_app(&tmp, 0);

    // A form field without a filename is not an upload
    let body = format!(
        "--{b}\r\n\
         Content-Disposition: form-data; name=\"note\"\r\n\r\n\
         hello\r\n\
         --{b}--\r\n",
        b = BOUNDARY,
    );
    let request = Request::builder()
        .method("POST")
        .uri("/upload/")
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={}", BOUNDARY),
        )
        .body(Body::from(body))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["error"]["type"], "upload_error");
}

#[tokio::test]
async fn test_task_list() {
    let tmp = TempDir::new().unwrap();
    let app = test_app(&tmp, 0);

    let first = upload(&app, "a.csv", "h\nv\n").await;
    let second = upload(&app, "b.txt", "nope").await;
    wait_for_terminal(&app, &first).await;
    wait_for_terminal(&app, &second).await;

    let response = app.oneshot(get("/tasks/")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["total"], 2);
    assert_eq!(json["completed"], 1);
    assert_eq!(json["failed"], 1);
    assert_eq!(json["processing"], 0);
    assert_eq!(json["tasks"].as_array().unwrap().len(), 2);
}
