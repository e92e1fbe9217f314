//! Catalog management service.
//!
//! [`CatalogService`] owns the in-memory collection for the lifetime of the
//! process. Every mutation is applied in memory first and then mirrored to
//! the [`BookStore`] as a full-collection save. A failed save is returned to
//! the caller but the in-memory change is kept.

use std::{cmp::Ordering, fmt, str::FromStr};

use rust_decimal::Decimal;
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::{
        book::{compare_authors, compare_titles},
        Author, Book, Reader,
    },
    repository::BookStore,
};

type BookComparator = fn(&Book, &Book) -> Ordering;

/// Comparators indexed by [`SortCriterion`] discriminant
const COMPARATORS: [BookComparator; 2] = [compare_titles, compare_authors];

/// Orderings the catalog can be sorted by
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortCriterion {
    Title = 0,
    Author = 1,
}

impl SortCriterion {
    fn comparator(self) -> BookComparator {
        COMPARATORS[self as usize]
    }
}

impl FromStr for SortCriterion {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "title" | "titulo" | "título" => Ok(SortCriterion::Title),
            "author" | "autor" => Ok(SortCriterion::Author),
            other => Err(AppError::InvalidArgument(format!(
                "Unsupported sort criterion: {:?}",
                other
            ))),
        }
    }
}

/// Menu numbering: 1 sorts by title, 2 by author
impl TryFrom<u8> for SortCriterion {
    type Error = AppError;

    fn try_from(v: u8) -> Result<Self, Self::Error> {
        match v {
            1 => Ok(SortCriterion::Title),
            2 => Ok(SortCriterion::Author),
            other => Err(AppError::InvalidArgument(format!(
                "Unsupported sort criterion: {}",
                other
            ))),
        }
    }
}

impl fmt::Display for SortCriterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            SortCriterion::Title => "title",
            SortCriterion::Author => "author",
        };
        write!(f, "{}", label)
    }
}

/// Parse a caller-supplied book identifier; blank or malformed ids match nothing
fn parse_id(id: &str) -> Option<Uuid> {
    let id = id.trim();
    if id.is_empty() {
        return None;
    }
    Uuid::parse_str(id).ok()
}

pub(crate) fn not_found(id: &str) -> AppError {
    AppError::NotFound(format!("Book with id {} not found", id))
}

fn check_price(price: Decimal) -> AppResult<()> {
    if price.is_sign_negative() && !price.is_zero() {
        return Err(AppError::InvalidArgument(format!(
            "Price must not be negative: {}",
            price
        )));
    }
    Ok(())
}

pub struct CatalogService<S> {
    store: S,
    books: Vec<Book>,
}

impl<S: BookStore> CatalogService<S> {
    /// Open the catalog, loading whatever the store holds.
    ///
    /// An absent, empty or unreadable store yields an empty catalog.
    pub fn open(store: S) -> Self {
        let books = store.load_books();
        tracing::info!(count = books.len(), "Catalog opened");
        Self { store, books }
    }

    /// All books in their current stored order
    pub fn books(&self) -> &[Book] {
        &self.books
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    fn persist(&self) -> AppResult<()> {
        self.store.save(&self.books).map_err(|e| {
            tracing::warn!("Catalog change kept in memory but not saved: {}", e);
            e
        })
    }

    /// Add a new book and return its identifier.
    ///
    /// Fails with [`AppError::Duplicate`] when a book with the same title
    /// (case-sensitive) and the same author is already cataloged.
    pub fn add(
        &mut self,
        title: &str,
        author: Author,
        pages: u32,
        year: i32,
        price: Decimal,
    ) -> AppResult<Uuid> {
        check_price(price)?;

        if self.books.iter().any(|b| b.is_same_entry(title, &author)) {
            return Err(AppError::Duplicate(format!(
                "'{}' by {} is already in the catalog",
                title,
                author.name()
            )));
        }

        let book = Book::new(title, author, pages, year, price);
        let id = book.id();
        tracing::info!(book_id = %id, title = %book.title, "Book added");
        self.books.push(book);

        self.persist()?;
        Ok(id)
    }

    /// Get a book by its identifier
    pub fn find_by_id(&self, id: &str) -> Option<&Book> {
        self.index_by_id(id).map(|index| &self.books[index])
    }

    /// Position of a book in the stored order
    pub fn index_by_id(&self, id: &str) -> Option<usize> {
        let id = parse_id(id)?;
        self.books.iter().position(|b| b.id() == id)
    }

    /// Remove a book, keeping the order of the others
    pub fn remove(&mut self, id: &str) -> AppResult<()> {
        let index = self.index_by_id(id).ok_or_else(|| not_found(id))?;
        let removed = self.books.remove(index);
        tracing::info!(book_id = %removed.id(), title = %removed.title, "Book removed");

        self.persist()
    }

    /// Overwrite every mutable field of a book.
    ///
    /// Passing `None` as borrower clears any loan.
    #[allow(clippy::too_many_arguments)]
    pub fn edit(
        &mut self,
        id: &str,
        title: &str,
        author: Author,
        pages: u32,
        year: i32,
        price: Decimal,
        borrower: Option<Reader>,
    ) -> AppResult<()> {
        let index = self.index_by_id(id).ok_or_else(|| not_found(id))?;
        check_price(price)?;

        let book = &mut self.books[index];
        book.title = title.to_string();
        book.author = author;
        book.pages = pages;
        book.year = year;
        book.price = price;
        book.borrower = borrower;
        tracing::info!(
            book_id = %book.id(),
            title = %book.title,
            borrowed = book.is_borrowed(),
            "Book updated"
        );

        self.persist()
    }

    /// Books written by `author`, in catalog order
    pub fn books_by_author(&self, author: &Author) -> Vec<&Book> {
        self.books.iter().filter(|b| b.author == *author).collect()
    }

    /// Books currently on loan to `reader`, in catalog order
    pub fn books_borrowed_by(&self, reader: &Reader) -> Vec<&Book> {
        self.books
            .iter()
            .filter(|b| b.borrower.as_ref() == Some(reader))
            .collect()
    }

    /// Case-insensitive exact title lookup
    pub fn find_by_title(&self, title: &str) -> Option<&Book> {
        if title.trim().is_empty() {
            return None;
        }
        let title = title.to_lowercase();
        self.books.iter().find(|b| b.title.to_lowercase() == title)
    }

    /// Reorder the stored collection in place (stable) and persist the new order
    pub fn sort(&mut self, criterion: SortCriterion) -> AppResult<&[Book]> {
        self.books.sort_by(criterion.comparator());
        tracing::info!(%criterion, count = self.books.len(), "Catalog sorted");

        self.persist()?;
        Ok(&self.books)
    }
}
