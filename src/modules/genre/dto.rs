use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::{Validate, ValidationErrors};

use crate::common::sanitize::escape;
use crate::modules::genre::model::Genre;

#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
pub struct GenreForm {
    #[serde(default)]
    #[validate(length(min = 3, max = 100, message = "Genre name must be between 3 and 100 characters long"))]
    pub name: String,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct DeleteGenreForm {
    pub genreid: Uuid,
}

/// A submitted form after trimming, validation and escaping.
#[derive(Debug)]
pub struct CleanedGenre {
    pub name: String,
    pub errors: Vec<FieldError>,
}

impl CleanedGenre {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

impl GenreForm {
    pub fn clean(mut self) -> CleanedGenre {
        self.name = self.name.trim().to_string();
        let name = escape(&self.name);
        let errors = match self.validate() {
            Ok(()) => Vec::new(),
            Err(e) => FieldError::collect(&e, &name),
        };
        CleanedGenre { name, errors }
    }
}

#[derive(Debug, Clone, Serialize, ToSchema, PartialEq, Eq)]
pub struct FieldError {
    pub field: String,
    pub message: String,
    pub value: String,
}

impl FieldError {
    pub fn new(field: &str, message: &str, value: &str) -> Self {
        Self {
            field: field.to_string(),
            message: message.to_string(),
            value: value.to_string(),
        }
    }

    fn collect(errors: &ValidationErrors, value: &str) -> Vec<Self> {
        let mut out: Vec<Self> = errors
            .field_errors()
            .into_iter()
            .flat_map(|(field, errs)| {
                errs.iter().map(move |err| FieldError {
                    field: field.to_string(),
                    message: err
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| err.code.to_string()),
                    value: value.to_string(),
                })
            })
            .collect();
        out.sort_by(|a, b| a.field.cmp(&b.field));
        out
    }
}

/// Genre as shown on a page; drafts from a rejected form have no id yet.
#[derive(Debug, Clone, Serialize, ToSchema, PartialEq, Eq)]
pub struct GenreView {
    pub id: Option<Uuid>,
    pub name: String,
    pub url: Option<String>,
}

impl GenreView {
    pub fn draft(name: String) -> Self {
        Self {
            id: None,
            name,
            url: None,
        }
    }
}

impl From<Genre> for GenreView {
    fn from(g: Genre) -> Self {
        Self {
            id: Some(g.id),
            url: Some(g.url()),
            name: g.name,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(name: &str) -> GenreForm {
        GenreForm {
            name: name.to_string(),
        }
    }

    #[test]
    fn trims_before_validating() {
        let cleaned = form("   Fiction  ").clean();
        assert!(cleaned.is_valid());
        assert_eq!(cleaned.name, "Fiction");
    }

    #[test]
    fn rejects_short_names_after_trim() {
        let cleaned = form("  Dr  ").clean();
        assert!(!cleaned.is_valid());
        assert_eq!(cleaned.errors.len(), 1);
        assert_eq!(cleaned.errors[0].field, "name");
        assert_eq!(cleaned.errors[0].value, "Dr");
    }

    #[test]
    fn rejects_empty_and_overlong_names() {
        assert!(!form("").clean().is_valid());
        assert!(!form("     ").clean().is_valid());
        assert!(!form(&"x".repeat(101)).clean().is_valid());
        assert!(form(&"x".repeat(100)).clean().is_valid());
    }

    #[test]
    fn escapes_markup_in_valid_and_invalid_input() {
        let cleaned = form("<b>Horror</b>").clean();
        assert!(cleaned.is_valid());
        assert_eq!(cleaned.name, "&lt;b&gt;Horror&lt;&#x2F;b&gt;");

        let rejected = form("<a").clean();
        assert!(!rejected.is_valid());
        assert_eq!(rejected.name, "&lt;a");
        assert_eq!(rejected.errors[0].value, "&lt;a");
    }

    #[test]
    fn genre_view_carries_detail_url() {
        let id = Uuid::new_v4();
        let view = GenreView::from(Genre {
            id,
            name: "Poetry".to_string(),
        });
        assert_eq!(view.url, Some(format!("/catalog/genre/{}", id)));
        assert_eq!(GenreView::draft("Poetry".into()).url, None);
    }
}
