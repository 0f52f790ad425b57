use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize, FromRow, ToSchema, Clone, PartialEq, Eq)]
pub struct Genre {
    pub id: Uuid,
    pub name: String,
}

impl Genre {
    /// Detail page location; derived from the id, never stored.
    pub fn url(&self) -> String {
        genre_url(self.id)
    }
}

pub fn genre_url(id: Uuid) -> String {
    format!("/catalog/genre/{}", id)
}

pub const GENRE_LIST_URL: &str = "/catalog/genres";
