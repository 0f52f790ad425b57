use super::dto::{CleanedGenre, DeleteGenreForm, FieldError, GenreForm, GenreView};
use super::model::{Genre, GENRE_LIST_URL};
use crate::common::error::AppError;
use crate::common::response::Page;
use crate::state::AppState;
use crate::views::{Template, View};
use tracing::{info, warn};
use uuid::Uuid;

pub struct GenreService;

impl GenreService {
    pub async fn list(state: &AppState) -> Result<Page, AppError> {
        let genres = state.genres.find_all().await?;

        Ok(Page::Render(
            View::new(Template::GenreList, "Genres").genre_list(genres),
        ))
    }

    pub async fn detail(state: &AppState, id: Uuid) -> Result<Page, AppError> {
        let (genre, genre_books) = tokio::try_join!(
            state.genres.find_by_id(id),
            state.books.find_by_genre(id),
        )?;
        let genre = genre.ok_or(AppError::NotFound("Genre"))?;

        Ok(Page::Render(
            View::new(Template::GenreDetail, "Genre Detail")
                .genre(genre)
                .genre_books(genre_books),
        ))
    }

    pub fn create_form() -> Page {
        Page::Render(View::new(Template::GenreForm, "Create Genre"))
    }

    pub async fn create(state: &AppState, form: GenreForm) -> Result<Page, AppError> {
        let cleaned = form.clean();

        if !cleaned.is_valid() {
            info!(errors = cleaned.errors.len(), "Genre create rejected by validation");
            return Ok(Page::Render(
                View::new(Template::GenreForm, "Create Genre")
                    .genre(GenreView::draft(cleaned.name))
                    .errors(cleaned.errors),
            ));
        }
        let name = cleaned.name;

        if let Some(found) = state.genres.find_by_name(&name).await? {
            info!(genre_id = %found.id, "Genre already exists, reusing it");
            return Ok(Page::redirect(found.url()));
        }

        let genre = state.genres.insert(&name).await?;
        info!(genre_id = %genre.id, "Genre created");
        Ok(Page::redirect(genre.url()))
    }

    pub async fn delete_form(state: &AppState, id: Uuid) -> Result<Page, AppError> {
        let (genre, genre_books) = tokio::try_join!(
            state.genres.find_by_id(id),
            state.books.find_by_genre(id),
        )?;

        let Some(genre) = genre else {
            return Ok(Page::redirect(GENRE_LIST_URL));
        };

        Ok(Page::Render(
            View::new(Template::GenreDelete, "Delete Genre")
                .genre(genre)
                .genre_books(genre_books),
        ))
    }

    pub async fn delete(
        state: &AppState,
        id: Uuid,
        form: DeleteGenreForm,
    ) -> Result<Page, AppError> {
        if form.genreid != id {
            return Err(AppError::BadRequest(
                "Genre id in form does not match the requested genre".to_string(),
            ));
        }

        let (genre, genre_books) = tokio::try_join!(
            state.genres.find_by_id(id),
            state.books.find_by_genre(id),
        )?;

        if !genre_books.is_empty() {
            warn!(genre_id = %id, books = genre_books.len(), "Genre delete refused, still referenced by books");
            let mut view = View::new(Template::GenreDelete, "Delete Genre").genre_books(genre_books);
            if let Some(genre) = genre {
                view = view.genre(genre);
            }
            return Ok(Page::Render(view));
        }

        if state.genres.delete(id).await? {
            info!(genre_id = %id, "Genre deleted");
        }
        Ok(Page::redirect(GENRE_LIST_URL))
    }

    pub async fn update_form(state: &AppState, id: Uuid) -> Result<Page, AppError> {
        let genre = state
            .genres
            .find_by_id(id)
            .await?
            .ok_or(AppError::NotFound("Genre"))?;

        Ok(Page::Render(
            View::new(Template::GenreForm, "Update Genre").genre(genre),
        ))
    }

    pub async fn update(state: &AppState, id: Uuid, form: GenreForm) -> Result<Page, AppError> {
        let CleanedGenre { name, mut errors } = form.clean();

        if errors.is_empty() {
            if let Some(other) = state.genres.find_by_name(&name).await? {
                if other.id != id {
                    errors.push(FieldError::new("name", "A genre with this name already exists", &name));
                }
            }
        }

        if !errors.is_empty() {
            info!(genre_id = %id, errors = errors.len(), "Genre update rejected by validation");
            let current = state
                .genres
                .find_by_id(id)
                .await?
                .ok_or(AppError::NotFound("Genre"))?;
            return Ok(Page::Render(
                View::new(Template::GenreForm, "Update Genre")
                    .genre(current)
                    .errors(errors),
            ));
        }

        let genre = Genre { id, name };
        let updated = state
            .genres
            .update(&genre)
            .await?
            .ok_or(AppError::NotFound("Genre"))?;
        info!(genre_id = %updated.id, "Genre updated");
        Ok(Page::redirect(updated.url()))
    }
}
