//! Book (catalog entry) model.
//!
//! A book carries two notions of equality. [`PartialEq`] and [`Hash`] use the
//! immutable identifier and back every lookup. [`Book::is_same_entry`]
//! compares the (title, author) pair and is only used to reject duplicates
//! when a new book is added.

use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::author::Author;
use super::person::compare_ignore_case;
use super::reader::Reader;

/// Book stored in the catalog
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Book {
    id: Uuid,
    pub title: String,
    pub author: Author,
    pub pages: u32,
    pub year: i32,
    pub price: Decimal,
    /// Reader currently holding the book, `None` when available
    pub borrower: Option<Reader>,
}

impl Book {
    /// Create an available book with a freshly generated identifier
    pub fn new(
        title: impl Into<String>,
        author: Author,
        pages: u32,
        year: i32,
        price: Decimal,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            author,
            pages,
            year,
            price,
            borrower: None,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn is_borrowed(&self) -> bool {
        self.borrower.is_some()
    }

    /// Duplicate-detection equality: same title (case-sensitive) and same author
    pub fn is_same_entry(&self, title: &str, author: &Author) -> bool {
        self.title == title && self.author == *author
    }

    /// Multi-line detail view shown to library staff
    pub fn details(&self) -> String {
        let status = match &self.borrower {
            Some(reader) => format!("Emprestado para: {}", reader),
            None => "Status: Disponível".to_string(),
        };

        format!(
            "--- Livro ---\n\
             Título: {}\n\
             Autor: {}\n\
             Número de págs.: {}\n\
             Ano de publicação: {}\n\
             Preço: R${:.2}\n\
             {}",
            self.title, self.author, self.pages, self.year, self.price, status
        )
    }
}

impl PartialEq for Book {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Book {}

impl Hash for Book {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

/// Natural ordering of books: case-insensitive title
pub fn compare_titles(a: &Book, b: &Book) -> Ordering {
    compare_ignore_case(&a.title, &b.title)
}

/// Order by the author's lowercased name
pub fn compare_authors(a: &Book, b: &Book) -> Ordering {
    a.author.name().to_lowercase().cmp(&b.author.name().to_lowercase())
}
