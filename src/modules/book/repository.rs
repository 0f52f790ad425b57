use super::model::Book;
use anyhow::{anyhow, Result};
use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

/// Read-only view of books, as far as genres care about them.
#[async_trait]
pub trait BookStore: Send + Sync + 'static {
    /// Books that list `genre_id` among their genres, ordered by title.
    async fn find_by_genre(&self, genre_id: Uuid) -> Result<Vec<Book>>;
}

#[derive(Clone)]
pub struct BookRepository {
    pool: PgPool,
}

impl BookRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BookStore for BookRepository {
    async fn find_by_genre(&self, genre_id: Uuid) -> Result<Vec<Book>> {
        let books = sqlx::query_as::<_, Book>(
            r#"
            SELECT b.id, b.title, b.summary
            FROM books b
            JOIN book_genres bg ON bg.book_id = b.id
            WHERE bg.genre_id = $1
            ORDER BY b.title ASC
            "#,
        )
        .bind(genre_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| anyhow!("Failed to fetch books for genre: {}", e))?;

        Ok(books)
    }
}
