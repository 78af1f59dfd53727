//! Route definitions for the Docshelf HTTP API.
//!
//! All routes are organized by domain and mounted under `/api`.
//! The router receives `AppState` and passes it to all handlers via Axum's
//! `State` extractor.

use axum::{
    Router,
    routing::{delete, get, post, put},
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
///
/// Receives the fully-constructed `AppState` and threads it through
/// every route via `.with_state(state)`.
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .merge(folder_routes())
        .merge(document_routes())
        .merge(health_routes());

    let cors = build_cors_layer(&state);

    Router::new()
        .nest("/api", api_routes)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Folder CRUD, archive cascade, and document listing
fn folder_routes() -> Router<AppState> {
    Router::new()
        .route("/folders", get(handlers::folder::list_folders))
        .route("/folders", post(handlers::folder::create_folder))
        .route("/folders/{id}", get(handlers::folder::get_folder))
        .route(
            "/folders/by-name/{name}",
            get(handlers::folder::get_folder_by_name),
        )
        .route(
            "/folders/{id}/documents",
            get(handlers::folder::list_documents),
        )
        .route("/folders/{id}/archive", put(handlers::folder::set_archive))
        .route("/folders/{id}", delete(handlers::folder::delete_folder))
}

/// Document creation, lookup, and archive updates
fn document_routes() -> Router<AppState> {
    Router::new()
        .route("/documents", post(handlers::document::create_document))
        .route("/documents/{id}", get(handlers::document::get_document))
        .route(
            "/documents/by-name/{name}",
            get(handlers::document::get_document_by_name),
        )
        .route(
            "/documents/{id}/archive",
            put(handlers::document::set_archive),
        )
}

/// Health check endpoints
fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health_check))
}

/// Build CORS layer from configuration
fn build_cors_layer(state: &AppState) -> CorsLayer {
    use http::Method;
    use tower_http::cors::Any;

    let cors_config = &state.config.server.cors;

    let mut cors = CorsLayer::new();

    if cors_config.allowed_origins.contains(&"*".to_string()) {
        cors = cors.allow_origin(Any);
    } else {
        let origins: Vec<http::HeaderValue> = cors_config
            .allowed_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        cors = cors.allow_origin(origins);
    }

    let methods: Vec<Method> = cors_config
        .allowed_methods
        .iter()
        .filter_map(|m| m.parse().ok())
        .collect();
    cors = cors.allow_methods(methods);

    if cors_config.allowed_headers.contains(&"*".to_string()) {
        cors = cors.allow_headers(Any);
    }

    cors = cors.max_age(std::time::Duration::from_secs(cors_config.max_age_seconds));

    cors
}
