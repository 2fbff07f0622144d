pub mod memory_book_repository;

use async_trait::async_trait;
use chrono::NaiveDate;
use crate::books::domain::model::BookEntity;
use crate::core::library::LibraryResult;
use crate::core::repository::Repository;

#[async_trait]
pub trait BookRepository: Repository<BookEntity> {
    // case-insensitive substring match on author or genre, never title
    async fn find_by_author_or_genre(&self, term: &str) -> LibraryResult<Vec<BookEntity>>;

    async fn find_available(&self) -> LibraryResult<Vec<BookEntity>>;

    async fn find_by_min_rating(&self, min_rating: f64) -> LibraryResult<Vec<BookEntity>>;

    // inclusive on both bounds
    async fn find_by_publication_dates(&self, start: NaiveDate, end: NaiveDate) -> LibraryResult<Vec<BookEntity>>;
}
