use super::model::Genre;
use anyhow::{anyhow, Result};
use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

/// Persistence seam for genres. Every call is a single store round trip.
#[async_trait]
pub trait GenreStore: Send + Sync + 'static {
    /// All genres, ordered by name with case-sensitive byte collation.
    async fn find_all(&self) -> Result<Vec<Genre>>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Genre>>;

    async fn find_by_name(&self, name: &str) -> Result<Option<Genre>>;

    /// Inserts a genre, or returns the existing row if the name is taken.
    async fn insert(&self, name: &str) -> Result<Genre>;

    /// Full replace by id. `None` when no such genre exists.
    async fn update(&self, genre: &Genre) -> Result<Option<Genre>>;

    /// Returns whether a row was removed.
    async fn delete(&self, id: Uuid) -> Result<bool>;
}

#[derive(Clone)]
pub struct GenreRepository {
    pool: PgPool,
}

impl GenreRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl GenreStore for GenreRepository {
    async fn find_all(&self) -> Result<Vec<Genre>> {
        let genres = sqlx::query_as::<_, Genre>(
            r#"
            SELECT id, name
            FROM genres
            ORDER BY name COLLATE "C" ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| anyhow!("Failed to fetch genres: {}", e))?;

        Ok(genres)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Genre>> {
        let genre = sqlx::query_as::<_, Genre>(
            r#"
            SELECT id, name
            FROM genres
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| anyhow!("Failed to fetch genre: {}", e))?;

        Ok(genre)
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Genre>> {
        let genre = sqlx::query_as::<_, Genre>(
            r#"
            SELECT id, name
            FROM genres
            WHERE name = $1
            "#,
        )
        .bind(name)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| anyhow!("Failed to fetch genre by name: {}", e))?;

        Ok(genre)
    }

    async fn insert(&self, name: &str) -> Result<Genre> {
        // The no-op update makes RETURNING yield the existing row on conflict.
        let genre = sqlx::query_as::<_, Genre>(
            r#"
            INSERT INTO genres (name)
            VALUES ($1)
            ON CONFLICT (name) DO UPDATE SET name = EXCLUDED.name
            RETURNING id, name
            "#,
        )
        .bind(name)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| anyhow!("Failed to create genre: {}", e))?;

        Ok(genre)
    }

    async fn update(&self, genre: &Genre) -> Result<Option<Genre>> {
        let updated = sqlx::query_as::<_, Genre>(
            r#"
            UPDATE genres
            SET name = $1
            WHERE id = $2
            RETURNING id, name
            "#,
        )
        .bind(&genre.name)
        .bind(genre.id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| anyhow!("Failed to update genre: {}", e))?;

        Ok(updated)
    }

    async fn delete(&self, id: Uuid) -> Result<bool> {
        let result = sqlx::query("DELETE FROM genres WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| anyhow!("Failed to delete genre: {}", e))?;

        Ok(result.rows_affected() > 0)
    }
}
