use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use crate::books::domain::Book;
use crate::core::domain::Identifiable;
use crate::utils::date::serializer;

// BookEntity is the stored representation of a catalog record. The store
// assigns book_id on insertion; a caller-supplied id is always overwritten.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookEntity {
    pub book_id: u64,
    pub title: String,
    pub author: String,
    pub genre: String,
    #[serde(with = "serializer")]
    pub publication_date: NaiveDate,
    pub rating: f64,
    pub is_available: bool,
}

impl BookEntity {
    pub fn new(title: &str, author: &str, genre: &str,
               publication_date: NaiveDate, rating: f64, is_available: bool) -> Self {
        Self {
            book_id: 0, // assigned by the repository
            title: title.to_string(),
            author: author.to_string(),
            genre: genre.to_string(),
            publication_date,
            rating,
            is_available,
        }
    }
}

impl Identifiable for BookEntity {
    fn id(&self) -> u64 {
        self.book_id
    }
}

impl Book for BookEntity {
    fn is_available(&self) -> bool {
        self.is_available
    }

    fn rating(&self) -> f64 {
        self.rating
    }
}
