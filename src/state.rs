use std::sync::Arc;

use crate::config::settings::AppConfig;
use crate::infrastructure::db::pool::DbPool;
use crate::modules::book::repository::{BookRepository, BookStore};
use crate::modules::genre::repository::{GenreRepository, GenreStore};
use crate::views::ViewRenderer;
use crate::views::html::HtmlRenderer;

#[derive(Clone)]
pub struct AppState {
    pub config: AppConfig,
    pub genres: Arc<dyn GenreStore>,
    pub books: Arc<dyn BookStore>,
    pub views: Arc<dyn ViewRenderer>,
}

impl AppState {
    pub fn new(
        config: AppConfig,
        genres: Arc<dyn GenreStore>,
        books: Arc<dyn BookStore>,
        views: Arc<dyn ViewRenderer>,
    ) -> Self {
        Self {
            config,
            genres,
            books,
            views,
        }
    }

    pub fn with_postgres(config: AppConfig, db: DbPool) -> Self {
        Self::new(
            config,
            Arc::new(GenreRepository::new(db.clone())),
            Arc::new(BookRepository::new(db)),
            Arc::new(HtmlRenderer::new()),
        )
    }
}

#[cfg(test)]
impl AppState {
    pub fn in_memory(catalog: crate::infrastructure::memory::MemoryCatalog) -> Self {
        let config = AppConfig {
            server_port: 0,
            database_url: String::new(),
            db_max_connections: 1,
            db_min_connections: 0,
            run_migrations: false,
        };
        Self::new(
            config,
            Arc::new(catalog.clone()),
            Arc::new(catalog),
            Arc::new(HtmlRenderer::new()),
        )
    }
}
