//! In-process catalog backing both stores, for tests.

use std::sync::{Arc, Mutex, MutexGuard};

use anyhow::{bail, Result};
use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::book::model::Book;
use crate::modules::book::repository::BookStore;
use crate::modules::genre::model::Genre;
use crate::modules::genre::repository::GenreStore;

#[derive(Default)]
struct Inner {
    genres: Vec<Genre>,
    books: Vec<(Book, Vec<Uuid>)>,
    genres_failing: bool,
    books_failing: bool,
}

#[derive(Clone, Default)]
pub struct MemoryCatalog {
    inner: Arc<Mutex<Inner>>,
}

impl MemoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().expect("catalog lock poisoned")
    }

    /// Locks for a genre store call, failing like an unreachable database when asked to.
    fn genre_store(&self) -> Result<MutexGuard<'_, Inner>> {
        let inner = self.lock();
        if inner.genres_failing {
            bail!("connection refused");
        }
        Ok(inner)
    }

    fn book_store(&self) -> Result<MutexGuard<'_, Inner>> {
        let inner = self.lock();
        if inner.books_failing {
            bail!("connection refused");
        }
        Ok(inner)
    }

    pub fn set_failing(&self, failing: bool) {
        let mut inner = self.lock();
        inner.genres_failing = failing;
        inner.books_failing = failing;
    }

    pub fn set_genres_failing(&self, failing: bool) {
        self.lock().genres_failing = failing;
    }

    pub fn set_books_failing(&self, failing: bool) {
        self.lock().books_failing = failing;
    }

    pub fn add_genre(&self, name: &str) -> Genre {
        let genre = Genre {
            id: Uuid::new_v4(),
            name: name.to_string(),
        };
        self.lock().genres.push(genre.clone());
        genre
    }

    pub fn add_book(&self, title: &str, genres: &[Uuid]) -> Book {
        let book = Book {
            id: Uuid::new_v4(),
            title: title.to_string(),
            summary: String::new(),
        };
        self.lock().books.push((book.clone(), genres.to_vec()));
        book
    }

    pub fn genre(&self, id: Uuid) -> Option<Genre> {
        self.lock().genres.iter().find(|g| g.id == id).cloned()
    }

    pub fn genres(&self) -> Vec<Genre> {
        self.lock().genres.clone()
    }
}

#[async_trait]
impl GenreStore for MemoryCatalog {
    async fn find_all(&self) -> Result<Vec<Genre>> {
        let mut genres = self.genre_store()?.genres.clone();
        genres.sort_by(|a, b| a.name.as_bytes().cmp(b.name.as_bytes()));
        Ok(genres)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Genre>> {
        Ok(self.genre_store()?.genres.iter().find(|g| g.id == id).cloned())
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Genre>> {
        Ok(self.genre_store()?.genres.iter().find(|g| g.name == name).cloned())
    }

    async fn insert(&self, name: &str) -> Result<Genre> {
        let mut inner = self.genre_store()?;
        if let Some(existing) = inner.genres.iter().find(|g| g.name == name) {
            return Ok(existing.clone());
        }
        let genre = Genre {
            id: Uuid::new_v4(),
            name: name.to_string(),
        };
        inner.genres.push(genre.clone());
        Ok(genre)
    }

    async fn update(&self, genre: &Genre) -> Result<Option<Genre>> {
        let mut inner = self.genre_store()?;
        if inner.genres.iter().any(|g| g.name == genre.name && g.id != genre.id) {
            bail!("duplicate key value violates unique constraint \"genres_name_key\"");
        }
        match inner.genres.iter_mut().find(|g| g.id == genre.id) {
            Some(slot) => {
                *slot = genre.clone();
                Ok(Some(genre.clone()))
            }
            None => Ok(None),
        }
    }

    async fn delete(&self, id: Uuid) -> Result<bool> {
        let mut inner = self.genre_store()?;
        if inner.books.iter().any(|(_, genres)| genres.contains(&id)) {
            bail!("update or delete on table \"genres\" violates foreign key constraint");
        }
        let before = inner.genres.len();
        inner.genres.retain(|g| g.id != id);
        Ok(inner.genres.len() != before)
    }
}

#[async_trait]
impl BookStore for MemoryCatalog {
    async fn find_by_genre(&self, genre_id: Uuid) -> Result<Vec<Book>> {
        let mut books: Vec<Book> = self
            .book_store()?
            .books
            .iter()
            .filter(|(_, genres)| genres.contains(&genre_id))
            .map(|(book, _)| book.clone())
            .collect();
        books.sort_by(|a, b| a.title.cmp(&b.title));
        Ok(books)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn insert_with_taken_name_returns_existing_row() {
        let catalog = MemoryCatalog::new();
        let first = catalog.insert("Fiction").await.unwrap();

        let second = catalog.insert("Fiction").await.unwrap();

        assert_eq!(second, first);
        assert_eq!(catalog.genres().len(), 1);
    }

    #[tokio::test]
    async fn delete_of_referenced_genre_fails_like_a_restrict_key() {
        let catalog = MemoryCatalog::new();
        let genre = catalog.add_genre("Horror");
        catalog.add_book("Dracula", &[genre.id]);

        assert!(GenreStore::delete(&catalog, genre.id).await.is_err());
        assert!(catalog.genre(genre.id).is_some());
    }

    #[tokio::test]
    async fn failure_switches_are_independent() {
        let catalog = MemoryCatalog::new();
        let genre = catalog.add_genre("Horror");
        catalog.set_books_failing(true);

        assert!(catalog.find_by_id(genre.id).await.unwrap().is_some());
        assert!(catalog.find_by_genre(genre.id).await.is_err());
    }
}
