use axum::{Json, Router};
use axum::response::Redirect;
use axum::routing::get;
use utoipa::OpenApi;
use crate::docs::ApiDoc;
use crate::modules::genre::model::GENRE_LIST_URL;
use crate::state::AppState;

pub fn configure_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(|| async { Redirect::to(GENRE_LIST_URL) }))
        .route("/health", get(|| async { "ok" }))
        .route("/api-docs/openapi.json", get(|| async { Json(ApiDoc::openapi()) }))
        .nest("/catalog", crate::modules::genre::router())
}
