//! Integration tests for archive transitions and cascades.

use http::StatusCode;
use serde_json::json;

use crate::helpers::TestApp;

#[tokio::test]
async fn test_archive_folder_cascades_to_documents() {
    let app = TestApp::new();
    let folder = app.create_folder("Invoices").await;
    let folder_id = folder["id"].as_str().unwrap();
    app.create_document("Q1.pdf", folder_id).await;
    app.create_document("Q2.pdf", folder_id).await;

    let response = app
        .request(
            "PUT",
            &format!("/api/folders/{folder_id}/archive"),
            Some(json!({ "archived": true })),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["archived"], true);

    let response = app
        .request("GET", &format!("/api/folders/{folder_id}/documents"), None)
        .await;
    for doc in response.body["data"].as_array().unwrap() {
        assert_eq!(doc["archived"], true);
    }
}

#[tokio::test]
async fn test_unarchive_folder_cascades_back() {
    let app = TestApp::new();
    let folder = app.create_folder("Invoices").await;
    let folder_id = folder["id"].as_str().unwrap();
    app.create_document("Q1.pdf", folder_id).await;

    let path = format!("/api/folders/{folder_id}/archive");
    app.request("PUT", &path, Some(json!({ "archived": true })))
        .await;
    let response = app
        .request("PUT", &path, Some(json!({ "archived": false })))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["archived"], false);

    let response = app
        .request("GET", "/api/documents/by-name/Q1.pdf", None)
        .await;
    assert_eq!(response.body["data"]["archived"], false);
}

#[tokio::test]
async fn test_archive_is_idempotent() {
    let app = TestApp::new();
    let folder = app.create_folder("Invoices").await;
    let folder_id = folder["id"].as_str().unwrap();

    let path = format!("/api/folders/{folder_id}/archive");
    let first = app
        .request("PUT", &path, Some(json!({ "archived": true })))
        .await;
    let second = app
        .request("PUT", &path, Some(json!({ "archived": true })))
        .await;

    assert_eq!(first.status, StatusCode::OK);
    assert_eq!(second.status, StatusCode::OK);
    assert_eq!(second.body["data"]["archived"], true);
}

#[tokio::test]
async fn test_legacy_numeric_archive_flag() {
    let app = TestApp::new();
    let folder = app.create_folder("Legacy").await;
    let folder_id = folder["id"].as_str().unwrap();

    let path = format!("/api/folders/{folder_id}/archive");
    let response = app
        .request("PUT", &path, Some(json!({ "archived": 1 })))
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["archived"], true);

    let response = app
        .request("PUT", &path, Some(json!({ "archived": 0 })))
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["archived"], false);
}

#[tokio::test]
async fn test_invalid_archive_flag_rejected() {
    let app = TestApp::new();
    let folder = app.create_folder("Legacy").await;
    let folder_id = folder["id"].as_str().unwrap();

    let response = app
        .request(
            "PUT",
            &format!("/api/folders/{folder_id}/archive"),
            Some(json!({ "archived": 2 })),
        )
        .await;

    assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(response.body["error"], "INVALID_ARGUMENT");

    // The folder is untouched.
    let response = app
        .request("GET", &format!("/api/folders/{folder_id}"), None)
        .await;
    assert_eq!(response.body["data"]["archived"], false);
}

#[tokio::test]
async fn test_document_archive_diverges_from_folder() {
    let app = TestApp::new();
    let folder = app.create_folder("A").await;
    let folder_id = folder["id"].as_str().unwrap();
    let doc = app.create_document("a.txt", folder_id).await;
    let doc_id = doc["id"].as_str().unwrap();

    let response = app
        .request(
            "PUT",
            &format!("/api/documents/{doc_id}/archive"),
            Some(json!({ "archived": true })),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["archived"], true);

    let response = app
        .request("GET", &format!("/api/folders/{folder_id}"), None)
        .await;
    assert_eq!(response.body["data"]["archived"], false);
}

#[tokio::test]
async fn test_document_created_under_archived_folder_starts_active() {
    let app = TestApp::new();
    let folder = app.create_folder("Archive").await;
    let folder_id = folder["id"].as_str().unwrap();
    app.request(
        "PUT",
        &format!("/api/folders/{folder_id}/archive"),
        Some(json!({ "archived": true })),
    )
    .await;

    let doc = app.create_document("late.txt", folder_id).await;
    assert_eq!(doc["archived"], false);
}

#[tokio::test]
async fn test_archive_missing_targets() {
    let app = TestApp::new();

    let response = app
        .request(
            "PUT",
            "/api/folders/00000000-0000-0000-0000-999999999999/archive",
            Some(json!({ "archived": true })),
        )
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.body["error"], "FOLDER_NOT_FOUND");

    let response = app
        .request(
            "PUT",
            "/api/documents/00000000-0000-0000-0000-999999999999/archive",
            Some(json!({ "archived": true })),
        )
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.body["error"], "DOCUMENT_NOT_FOUND");
}
