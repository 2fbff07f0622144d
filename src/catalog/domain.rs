pub mod service;

use async_trait::async_trait;
use chrono::NaiveDate;
use crate::books::dto::BookDto;
use crate::core::library::LibraryResult;

// CatalogService owns the book collection and id assignment. Misses are
// never errors: unknown ids, unmatched terms and inverted date ranges all
// degrade to an absent value, an empty list or a zero count.
#[async_trait]
pub trait CatalogService: Sync + Send {
    // fails with a validation error when book is absent; otherwise assigns
    // the next id and returns the stored snapshot
    async fn add_book(&self, book: Option<&BookDto>) -> LibraryResult<BookDto>;

    // removes every book matching id, returning the number removed
    async fn remove_book(&self, id: u64) -> LibraryResult<usize>;

    // fails with a validation error when book is absent; overwrites every
    // field except the id of the matching book, no-op when missing
    async fn update_book(&self, id: u64, book: Option<&BookDto>) -> LibraryResult<usize>;

    async fn find_book_by_id(&self, id: u64) -> LibraryResult<Option<BookDto>>;

    async fn find_all_books(&self) -> LibraryResult<Vec<BookDto>>;

    // case-insensitive substring search over author and genre
    async fn search_books(&self, term: &str) -> LibraryResult<Vec<BookDto>>;

    async fn count_books(&self) -> LibraryResult<usize>;

    async fn find_available_books(&self) -> LibraryResult<Vec<BookDto>>;

    async fn find_books_by_rating(&self, min_rating: f64) -> LibraryResult<Vec<BookDto>>;

    async fn find_books_by_publication_date(&self, start: NaiveDate, end: NaiveDate) -> LibraryResult<Vec<BookDto>>;
}
