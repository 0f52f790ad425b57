pub mod book;
pub mod genre;
