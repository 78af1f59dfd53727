//! Integration tests for document operations.

use http::StatusCode;
use serde_json::json;

use crate::helpers::TestApp;

#[tokio::test]
async fn test_create_document() {
    let app = TestApp::new();
    let folder = app.create_folder("Invoices").await;
    let folder_id = folder["id"].as_str().unwrap();

    let response = app
        .request(
            "POST",
            "/api/documents",
            Some(json!({ "name": "Q1.pdf", "folder_id": folder_id })),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["name"], "Q1.pdf");
    assert_eq!(response.body["data"]["folder_id"], folder["id"]);
    assert_eq!(response.body["data"]["archived"], false);
}

#[tokio::test]
async fn test_create_document_missing_folder() {
    let app = TestApp::new();

    let response = app
        .request(
            "POST",
            "/api/documents",
            Some(json!({
                "name": "orphan.txt",
                "folder_id": "00000000-0000-0000-0000-999999999999"
            })),
        )
        .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.body["error"], "FOLDER_NOT_FOUND");

    // Nothing was stored.
    let response = app
        .request("GET", "/api/documents/by-name/orphan.txt", None)
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_document_name_unique_across_folders() {
    let app = TestApp::new();
    let a = app.create_folder("A").await;
    let b = app.create_folder("B").await;
    app.create_document("Report.pdf", a["id"].as_str().unwrap())
        .await;

    let response = app
        .request(
            "POST",
            "/api/documents",
            Some(json!({ "name": "report.PDF", "folder_id": b["id"] })),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "DUPLICATE_NAME");
}

#[tokio::test]
async fn test_create_document_empty_name() {
    let app = TestApp::new();
    let folder = app.create_folder("A").await;

    let response = app
        .request(
            "POST",
            "/api/documents",
            Some(json!({ "name": "  ", "folder_id": folder["id"] })),
        )
        .await;

    assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_get_document_by_id_and_name() {
    let app = TestApp::new();
    let folder = app.create_folder("A").await;
    let doc = app
        .create_document("Notes.md", folder["id"].as_str().unwrap())
        .await;
    let id = doc["id"].as_str().unwrap();

    let response = app
        .request("GET", &format!("/api/documents/{id}"), None)
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["id"], doc["id"]);

    let response = app
        .request("GET", "/api/documents/by-name/notes.MD", None)
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["name"], "Notes.md");
}

#[tokio::test]
async fn test_get_document_not_found() {
    let app = TestApp::new();

    let response = app
        .request("GET", "/api/documents/by-name/missing.txt", None)
        .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.body["error"], "DOCUMENT_NOT_FOUND");
}

#[tokio::test]
async fn test_list_documents_in_folder() {
    let app = TestApp::new();
    let folder = app.create_folder("A").await;
    let folder_id = folder["id"].as_str().unwrap();
    app.create_document("one.txt", folder_id).await;
    app.create_document("two.txt", folder_id).await;

    let response = app
        .request("GET", &format!("/api/folders/{folder_id}/documents"), None)
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_list_documents_missing_folder() {
    let app = TestApp::new();

    let response = app
        .request(
            "GET",
            "/api/folders/00000000-0000-0000-0000-999999999999/documents",
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
}
