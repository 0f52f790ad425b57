use super::dto::{DeleteGenreForm, GenreForm};
use super::service::GenreService;
use crate::common::error::AppError;
use crate::state::AppState;
use axum::{
    extract::{
        rejection::{FormRejection, PathRejection},
        Path, State,
    },
    response::Response,
    Form,
};
use uuid::Uuid;

/// List all genres
#[utoipa::path(
    get,
    path = "/catalog/genres",
    responses(
        (status = 200, description = "Genre list page", content_type = "text/html", body = String)
    ),
    tag = "Genre"
)]
pub async fn genre_list(State(state): State<AppState>) -> Result<Response, AppError> {
    GenreService::list(&state).await?.respond(state.views.as_ref())
}

/// Show one genre with its books
#[utoipa::path(
    get,
    path = "/catalog/genre/{id}",
    params(
        ("id" = Uuid, Path, description = "Genre ID")
    ),
    responses(
        (status = 200, description = "Genre detail page", content_type = "text/html", body = String),
        (status = 404, description = "Genre not found")
    ),
    tag = "Genre"
)]
pub async fn genre_detail(
    State(state): State<AppState>,
    id: Result<Path<Uuid>, PathRejection>,
) -> Result<Response, AppError> {
    let Path(id) = id?;
    GenreService::detail(&state, id).await?.respond(state.views.as_ref())
}

/// Empty create form
#[utoipa::path(
    get,
    path = "/catalog/genre/create",
    responses(
        (status = 200, description = "Genre form page", content_type = "text/html", body = String)
    ),
    tag = "Genre"
)]
pub async fn genre_create_form(State(state): State<AppState>) -> Result<Response, AppError> {
    GenreService::create_form().respond(state.views.as_ref())
}

/// Create a genre, or reuse one with the same name
#[utoipa::path(
    post,
    path = "/catalog/genre/create",
    request_body(content = GenreForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 303, description = "Redirect to the genre detail page"),
        (status = 200, description = "Form re-rendered with validation errors", content_type = "text/html", body = String)
    ),
    tag = "Genre"
)]
pub async fn genre_create(
    State(state): State<AppState>,
    form: Result<Form<GenreForm>, FormRejection>,
) -> Result<Response, AppError> {
    let Form(form) = form?;
    GenreService::create(&state, form).await?.respond(state.views.as_ref())
}

/// Delete confirmation page
#[utoipa::path(
    get,
    path = "/catalog/genre/{id}/delete",
    params(
        ("id" = Uuid, Path, description = "Genre ID")
    ),
    responses(
        (status = 200, description = "Delete confirmation page", content_type = "text/html", body = String),
        (status = 303, description = "Genre does not exist, redirect to the list")
    ),
    tag = "Genre"
)]
pub async fn genre_delete_form(
    State(state): State<AppState>,
    id: Result<Path<Uuid>, PathRejection>,
) -> Result<Response, AppError> {
    let Path(id) = id?;
    GenreService::delete_form(&state, id).await?.respond(state.views.as_ref())
}

/// Delete a genre that no book references
#[utoipa::path(
    post,
    path = "/catalog/genre/{id}/delete",
    params(
        ("id" = Uuid, Path, description = "Genre ID")
    ),
    request_body(content = DeleteGenreForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 303, description = "Deleted, redirect to the list"),
        (status = 200, description = "Refused, books still reference the genre", content_type = "text/html", body = String),
        (status = 400, description = "Form id does not match the path")
    ),
    tag = "Genre"
)]
pub async fn genre_delete(
    State(state): State<AppState>,
    id: Result<Path<Uuid>, PathRejection>,
    form: Result<Form<DeleteGenreForm>, FormRejection>,
) -> Result<Response, AppError> {
    let Path(id) = id?;
    let Form(form) = form?;
    GenreService::delete(&state, id, form).await?.respond(state.views.as_ref())
}

/// Edit form pre-filled with the current name
#[utoipa::path(
    get,
    path = "/catalog/genre/{id}/update",
    params(
        ("id" = Uuid, Path, description = "Genre ID")
    ),
    responses(
        (status = 200, description = "Genre form page", content_type = "text/html", body = String),
        (status = 404, description = "Genre not found")
    ),
    tag = "Genre"
)]
pub async fn genre_update_form(
    State(state): State<AppState>,
    id: Result<Path<Uuid>, PathRejection>,
) -> Result<Response, AppError> {
    let Path(id) = id?;
    GenreService::update_form(&state, id).await?.respond(state.views.as_ref())
}

/// Rename a genre
#[utoipa::path(
    post,
    path = "/catalog/genre/{id}/update",
    params(
        ("id" = Uuid, Path, description = "Genre ID")
    ),
    request_body(content = GenreForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 303, description = "Updated, redirect to the genre detail page"),
        (status = 200, description = "Form re-rendered with validation errors", content_type = "text/html", body = String),
        (status = 404, description = "Genre not found")
    ),
    tag = "Genre"
)]
pub async fn genre_update(
    State(state): State<AppState>,
    id: Result<Path<Uuid>, PathRejection>,
    form: Result<Form<GenreForm>, FormRejection>,
) -> Result<Response, AppError> {
    let Path(id) = id?;
    let Form(form) = form?;
    GenreService::update(&state, id, form).await?.respond(state.views.as_ref())
}
