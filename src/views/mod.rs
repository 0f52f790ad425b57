use serde::Serialize;

use crate::modules::book::model::Book;
use crate::modules::genre::dto::{FieldError, GenreView};
use crate::modules::genre::model::Genre;

pub mod html;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Template {
    GenreList,
    GenreDetail,
    GenreForm,
    GenreDelete,
}

impl Template {
    pub fn name(&self) -> &'static str {
        match self {
            Template::GenreList => "genre_list",
            Template::GenreDetail => "genre_detail",
            Template::GenreForm => "genre_form",
            Template::GenreDelete => "genre_delete",
        }
    }
}

/// Data bag handed to a template. Absent keys are simply not rendered.
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct ViewContext {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub genre: Option<GenreView>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub genre_list: Option<Vec<Genre>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub genre_books: Option<Vec<Book>>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<FieldError>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct View {
    pub template: Template,
    pub context: ViewContext,
}

impl View {
    pub fn new(template: Template, title: &str) -> Self {
        Self {
            template,
            context: ViewContext {
                title: title.to_string(),
                ..Default::default()
            },
        }
    }

    pub fn genre(mut self, genre: impl Into<GenreView>) -> Self {
        self.context.genre = Some(genre.into());
        self
    }

    pub fn genre_list(mut self, genres: Vec<Genre>) -> Self {
        self.context.genre_list = Some(genres);
        self
    }

    pub fn genre_books(mut self, books: Vec<Book>) -> Self {
        self.context.genre_books = Some(books);
        self
    }

    pub fn errors(mut self, errors: Vec<FieldError>) -> Self {
        self.context.errors = errors;
        self
    }
}

pub trait ViewRenderer: Send + Sync + 'static {
    fn render(&self, view: &View) -> anyhow::Result<String>;
}
