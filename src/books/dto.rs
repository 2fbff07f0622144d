use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use crate::books::domain::Book;
use crate::core::domain::Identifiable;
use crate::utils::date::serializer;

// BookDto is a data transfer object for the Catalog service; instances
// returned by the service are snapshots detached from catalog state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookDto {
    pub book_id: u64,
    pub title: String,
    pub author: String,
    pub genre: String,
    #[serde(with = "serializer")]
    pub publication_date: NaiveDate,
    pub rating: f64,
    pub is_available: bool,
}

impl BookDto {
    pub fn new(title: &str, author: &str, genre: &str,
               publication_date: NaiveDate, rating: f64, is_available: bool) -> BookDto {
        BookDto {
            book_id: 0, // assigned on add
            title: title.to_string(),
            author: author.to_string(),
            genre: genre.to_string(),
            publication_date,
            rating,
            is_available,
        }
    }
}

impl Identifiable for BookDto {
    fn id(&self) -> u64 {
        self.book_id
    }
}

impl Book for BookDto {
    fn is_available(&self) -> bool {
        self.is_available
    }

    fn rating(&self) -> f64 {
        self.rating
    }
}
