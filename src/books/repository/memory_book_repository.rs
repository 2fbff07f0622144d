use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::books::domain::Book;
use crate::books::domain::model::BookEntity;
use crate::books::repository::BookRepository;
use crate::core::domain::Identifiable;
use crate::core::library::{LibraryError, LibraryResult};
use crate::core::repository::Repository;

// books and the id counter share one guard so that create stays atomic
#[derive(Debug)]
struct CatalogState {
    books: Vec<BookEntity>,
    next_id: u64,
}

#[derive(Debug)]
pub struct MemoryBookRepository {
    state: Mutex<CatalogState>,
}

impl MemoryBookRepository {
    pub(crate) fn new() -> Self {
        Self {
            state: Mutex::new(CatalogState {
                books: Vec::new(),
                next_id: 1,
            }),
        }
    }

    fn locked(&self) -> LibraryResult<MutexGuard<'_, CatalogState>> {
        self.state.lock().map_err(|_| LibraryError::runtime("catalog lock poisoned", None))
    }

    fn filtered<F>(&self, predicate: F) -> LibraryResult<Vec<BookEntity>>
        where F: Fn(&BookEntity) -> bool {
        let state = self.locked()?;
        Ok(state.books.iter().filter(|&b| predicate(b)).cloned().collect())
    }
}

#[async_trait]
impl Repository<BookEntity> for MemoryBookRepository {
    async fn create(&self, entity: &BookEntity) -> LibraryResult<u64> {
        let mut state = self.locked()?;
        let id = state.next_id;
        state.next_id += 1;
        let mut stored = entity.clone();
        stored.book_id = id; // any caller-supplied id is overwritten
        state.books.push(stored);
        Ok(id)
    }

    async fn update(&self, id: u64, entity: &BookEntity) -> LibraryResult<usize> {
        let mut state = self.locked()?;
        match state.books.iter_mut().find(|b| b.id() == id) {
            Some(existing) => {
                // every field except book_id is overwritten in place
                existing.title = entity.title.to_string();
                existing.author = entity.author.to_string();
                existing.genre = entity.genre.to_string();
                existing.publication_date = entity.publication_date;
                existing.rating = entity.rating;
                existing.is_available = entity.is_available;
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn get(&self, id: u64) -> LibraryResult<Option<BookEntity>> {
        let state = self.locked()?;
        Ok(state.books.iter().find(|b| b.id() == id).cloned())
    }

    async fn delete(&self, id: u64) -> LibraryResult<usize> {
        let mut state = self.locked()?;
        let before = state.books.len();
        // removes every match; normal use never produces duplicate ids but
        // the store tolerates them
        state.books.retain(|b| b.id() != id);
        Ok(before - state.books.len())
    }

    async fn all(&self) -> LibraryResult<Vec<BookEntity>> {
        let state = self.locked()?;
        Ok(state.books.to_vec())
    }

    async fn count(&self) -> LibraryResult<usize> {
        let state = self.locked()?;
        Ok(state.books.len())
    }
}

#[async_trait]
impl BookRepository for MemoryBookRepository {
    async fn find_by_author_or_genre(&self, term: &str) -> LibraryResult<Vec<BookEntity>> {
        if term.is_empty() {
            return Ok(Vec::new());
        }
        let term = term.to_lowercase();
        self.filtered(|b| {
            b.author.to_lowercase().contains(&term) || b.genre.to_lowercase().contains(&term)
        })
    }

    async fn find_available(&self) -> LibraryResult<Vec<BookEntity>> {
        self.filtered(|b| b.is_available())
    }

    async fn find_by_min_rating(&self, min_rating: f64) -> LibraryResult<Vec<BookEntity>> {
        self.filtered(|b| b.rating() >= min_rating)
    }

    async fn find_by_publication_dates(&self, start: NaiveDate, end: NaiveDate) -> LibraryResult<Vec<BookEntity>> {
        self.filtered(|b| b.publication_date >= start && b.publication_date <= end)
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use crate::books::domain::model::BookEntity;
    use crate::books::repository::BookRepository;
    use crate::books::repository::memory_book_repository::MemoryBookRepository;
    use crate::core::repository::Repository;

    fn test_book(title: &str, author: &str, genre: &str) -> BookEntity {
        BookEntity::new(title, author, genre,
                        NaiveDate::from_ymd_opt(2023, 1, 15).unwrap(), 4.0, true)
    }

    #[tokio::test]
    async fn test_should_create_get_books() {
        let books_repo = MemoryBookRepository::new();
        let book = test_book("test book", "test author", "test genre");
        let id = books_repo.create(&book).await.expect("should create book");
        assert_eq!(1, id);

        let loaded = books_repo.get(id).await.expect("should return book").expect("should find book");
        assert_eq!(id, loaded.book_id);
        assert_eq!(book.title, loaded.title);
    }

    #[tokio::test]
    async fn test_should_assign_monotonic_ids() {
        let books_repo = MemoryBookRepository::new();
        for i in 1..=5 {
            let mut book = test_book("test book", "test author", "test genre");
            book.book_id = 99; // ignored by the store
            let id = books_repo.create(&book).await.expect("should create book");
            assert_eq!(i, id);
        }
        // removal never frees an id for reuse
        let removed = books_repo.delete(5).await.expect("should delete book");
        assert_eq!(1, removed);
        let id = books_repo.create(&test_book("test book", "test author", "test genre"))
            .await.expect("should create book");
        assert_eq!(6, id);
    }

    #[tokio::test]
    async fn test_should_create_update_books() {
        let books_repo = MemoryBookRepository::new();
        let id = books_repo.create(&test_book("test book", "test author", "test genre"))
            .await.expect("should create book");

        let mut updated = test_book("new title", "new author", "new genre");
        updated.publication_date = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        updated.rating = 3.8;
        updated.is_available = false;
        updated.book_id = 42; // ignored, the stored id never changes
        let size = books_repo.update(id, &updated).await.expect("should update book");
        assert_eq!(1, size);

        let loaded = books_repo.get(id).await.expect("should return book").expect("should find book");
        assert_eq!(id, loaded.book_id);
        assert_eq!("new title", loaded.title.as_str());
        assert_eq!("new author", loaded.author.as_str());
        assert_eq!("new genre", loaded.genre.as_str());
        assert_eq!(3.8, loaded.rating);
        assert!(!loaded.is_available);
    }

    #[tokio::test]
    async fn test_should_ignore_update_of_missing_books() {
        let books_repo = MemoryBookRepository::new();
        let size = books_repo.update(100, &test_book("test book", "test author", "test genre"))
            .await.expect("should not fail");
        assert_eq!(0, size);
        assert_eq!(0, books_repo.count().await.expect("should count books"));
    }

    #[tokio::test]
    async fn test_should_create_delete_books() {
        let books_repo = MemoryBookRepository::new();
        let id = books_repo.create(&test_book("test book", "test author", "test genre"))
            .await.expect("should create book");

        let deleted = books_repo.delete(id).await.expect("should delete book");
        assert_eq!(1, deleted);
        assert_eq!(None, books_repo.get(id).await.expect("should not fail"));

        let deleted = books_repo.delete(id).await.expect("should not fail");
        assert_eq!(0, deleted);
    }

    #[tokio::test]
    async fn test_should_list_books_in_insertion_order() {
        let books_repo = MemoryBookRepository::new();
        for i in 0..10 {
            let _ = books_repo.create(&test_book(format!("title_{}", i).as_str(), "test author", "test genre"))
                .await.expect("should create book");
        }
        let _ = books_repo.delete(4).await.expect("should delete book");
        let all = books_repo.all().await.expect("should list books");
        assert_eq!(9, all.len());
        let ids: Vec<u64> = all.iter().map(|b| b.book_id).collect();
        assert_eq!(vec![1, 2, 3, 5, 6, 7, 8, 9, 10], ids);
    }

    #[tokio::test]
    async fn test_should_return_snapshots() {
        let books_repo = MemoryBookRepository::new();
        let id = books_repo.create(&test_book("test book", "test author", "test genre"))
            .await.expect("should create book");

        let mut all = books_repo.all().await.expect("should list books");
        all[0].title = "mutated".to_string();

        let loaded = books_repo.get(id).await.expect("should return book").expect("should find book");
        assert_eq!("test book", loaded.title.as_str());
    }

    #[tokio::test]
    async fn test_should_find_by_author_or_genre() {
        let books_repo = MemoryBookRepository::new();
        let _ = books_repo.create(&test_book("The Hobbit", "Tolkien", "Fantasy"))
            .await.expect("should create book");
        let _ = books_repo.create(&test_book("Foundation", "Asimov", "SciFi"))
            .await.expect("should create book");

        let res = books_repo.find_by_author_or_genre("tolkien").await.expect("should search books");
        assert_eq!(1, res.len());
        assert_eq!("The Hobbit", res[0].title.as_str());

        let res = books_repo.find_by_author_or_genre("SCIFI").await.expect("should search books");
        assert_eq!(1, res.len());
        assert_eq!("Foundation", res[0].title.as_str());

        // titles are never matched
        let res = books_repo.find_by_author_or_genre("hobbit").await.expect("should search books");
        assert_eq!(0, res.len());

        let res = books_repo.find_by_author_or_genre("").await.expect("should search books");
        assert_eq!(0, res.len());
    }

    #[tokio::test]
    async fn test_should_find_available_books() {
        let books_repo = MemoryBookRepository::new();
        let mut book = test_book("test book", "test author", "test genre");
        let _ = books_repo.create(&book).await.expect("should create book");
        book.is_available = false;
        let _ = books_repo.create(&book).await.expect("should create book");

        let res = books_repo.find_available().await.expect("should find books");
        assert_eq!(1, res.len());
        assert_eq!(1, res[0].book_id);
    }

    #[tokio::test]
    async fn test_should_find_by_min_rating() {
        let books_repo = MemoryBookRepository::new();
        for rating in [4.0, 3.5, 4.5] {
            let mut book = test_book("test book", "test author", "test genre");
            book.rating = rating;
            let _ = books_repo.create(&book).await.expect("should create book");
        }
        let res = books_repo.find_by_min_rating(4.0).await.expect("should find books");
        let ratings: Vec<f64> = res.iter().map(|b| b.rating).collect();
        assert_eq!(vec![4.0, 4.5], ratings);
    }

    #[tokio::test]
    async fn test_should_find_by_publication_dates() {
        let books_repo = MemoryBookRepository::new();
        for (y, m, d) in [(2023, 1, 15), (2023, 2, 20), (2023, 3, 10)] {
            let mut book = test_book("test book", "test author", "test genre");
            book.publication_date = NaiveDate::from_ymd_opt(y, m, d).unwrap();
            let _ = books_repo.create(&book).await.expect("should create book");
        }
        let res = books_repo.find_by_publication_dates(
            NaiveDate::from_ymd_opt(2023, 2, 1).unwrap(),
            NaiveDate::from_ymd_opt(2023, 2, 28).unwrap()).await.expect("should find books");
        assert_eq!(1, res.len());
        assert_eq!(NaiveDate::from_ymd_opt(2023, 2, 20).unwrap(), res[0].publication_date);

        // bounds are inclusive
        let res = books_repo.find_by_publication_dates(
            NaiveDate::from_ymd_opt(2023, 2, 20).unwrap(),
            NaiveDate::from_ymd_opt(2023, 2, 20).unwrap()).await.expect("should find books");
        assert_eq!(1, res.len());

        // inverted range is empty, not an error
        let res = books_repo.find_by_publication_dates(
            NaiveDate::from_ymd_opt(2023, 3, 1).unwrap(),
            NaiveDate::from_ymd_opt(2023, 2, 1).unwrap()).await.expect("should find books");
        assert_eq!(0, res.len());
    }
}
