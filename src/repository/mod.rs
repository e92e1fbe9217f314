//! Persistence layer for the book collection

pub mod books;

use crate::{error::AppResult, models::Book};

pub use books::JsonFileStore;

/// Whole-collection store backing the catalog.
///
/// Implementations keep no reference to the books between calls: `save`
/// writes a snapshot of the slice it is given and `load_books` returns a
/// freshly built collection.
#[cfg_attr(test, mockall::automock)]
pub trait BookStore {
    /// Replace the stored collection with `books`
    fn save(&self, books: &[Book]) -> AppResult<()>;

    /// Read the stored collection, reporting unreadable or malformed data as an error
    fn try_load(&self) -> AppResult<Vec<Book>>;

    /// Read the stored collection, degrading to an empty one on any failure
    fn load_books(&self) -> Vec<Book> {
        self.try_load().unwrap_or_else(|e| {
            tracing::warn!("Could not load stored catalog, starting empty: {}", e);
            Vec::new()
        })
    }
}
