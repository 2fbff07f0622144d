use async_trait::async_trait;
use chrono::NaiveDate;
use tracing::debug;

use crate::books::domain::model::BookEntity;
use crate::books::dto::BookDto;
use crate::books::repository::BookRepository;
use crate::catalog::domain::CatalogService;
use crate::core::library::{LibraryError, LibraryResult};

pub(crate) struct CatalogServiceImpl {
    book_repository: Box<dyn BookRepository>,
}

impl CatalogServiceImpl {
    pub(crate) fn new(book_repository: Box<dyn BookRepository>) -> Self {
        Self {
            book_repository,
        }
    }
}

#[async_trait]
impl CatalogService for CatalogServiceImpl {
    async fn add_book(&self, book: Option<&BookDto>) -> LibraryResult<BookDto> {
        let book = book.ok_or_else(|| LibraryError::validation("book is required", None))?;
        let id = self.book_repository.create(&BookEntity::from(book)).await?;
        debug!("added book {}", id);
        let mut added = book.clone();
        added.book_id = id;
        Ok(added)
    }

    async fn remove_book(&self, id: u64) -> LibraryResult<usize> {
        let removed = self.book_repository.delete(id).await?;
        debug!("removed {} books for {}", removed, id);
        Ok(removed)
    }

    async fn update_book(&self, id: u64, book: Option<&BookDto>) -> LibraryResult<usize> {
        let book = book.ok_or_else(|| LibraryError::validation("updated book is required", None))?;
        let updated = self.book_repository.update(id, &BookEntity::from(book)).await?;
        debug!("updated {} books for {}", updated, id);
        Ok(updated)
    }

    async fn find_book_by_id(&self, id: u64) -> LibraryResult<Option<BookDto>> {
        let res = self.book_repository.get(id).await?;
        Ok(res.as_ref().map(BookDto::from))
    }

    async fn find_all_books(&self) -> LibraryResult<Vec<BookDto>> {
        let res = self.book_repository.all().await?;
        Ok(res.iter().map(BookDto::from).collect())
    }

    async fn search_books(&self, term: &str) -> LibraryResult<Vec<BookDto>> {
        let res = self.book_repository.find_by_author_or_genre(term).await?;
        Ok(res.iter().map(BookDto::from).collect())
    }

    async fn count_books(&self) -> LibraryResult<usize> {
        self.book_repository.count().await
    }

    async fn find_available_books(&self) -> LibraryResult<Vec<BookDto>> {
        let res = self.book_repository.find_available().await?;
        Ok(res.iter().map(BookDto::from).collect())
    }

    async fn find_books_by_rating(&self, min_rating: f64) -> LibraryResult<Vec<BookDto>> {
        let res = self.book_repository.find_by_min_rating(min_rating).await?;
        Ok(res.iter().map(BookDto::from).collect())
    }

    async fn find_books_by_publication_date(&self, start: NaiveDate, end: NaiveDate) -> LibraryResult<Vec<BookDto>> {
        let res = self.book_repository.find_by_publication_dates(start, end).await?;
        Ok(res.iter().map(BookDto::from).collect())
    }
}

impl From<&BookEntity> for BookDto {
    fn from(other: &BookEntity) -> Self {
        Self {
            book_id: other.book_id,
            title: other.title.to_string(),
            author: other.author.to_string(),
            genre: other.genre.to_string(),
            publication_date: other.publication_date,
            rating: other.rating,
            is_available: other.is_available,
        }
    }
}

impl From<&BookDto> for BookEntity {
    fn from(other: &BookDto) -> Self {
        Self {
            book_id: other.book_id,
            title: other.title.to_string(),
            author: other.author.to_string(),
            genre: other.genre.to_string(),
            publication_date: other.publication_date,
            rating: other.rating,
            is_available: other.is_available,
        }
    }
}
