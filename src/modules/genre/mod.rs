use axum::Router;
use axum::routing::get;
use crate::state::AppState;

pub mod dto;
pub mod handler;
pub mod model;
pub mod repository;
pub mod service;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/genres", get(handler::genre_list))
        .route(
            "/genre/create",
            get(handler::genre_create_form).post(handler::genre_create),
        )
        .route("/genre/{id}", get(handler::genre_detail))
        .route(
            "/genre/{id}/delete",
            get(handler::genre_delete_form).post(handler::genre_delete),
        )
        .route(
            "/genre/{id}/update",
            get(handler::genre_update_form).post(handler::genre_update),
        )
}
