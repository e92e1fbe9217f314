//! Loan tracking on top of the catalog.
//!
//! A loan is nothing more than the borrower recorded on a book, so lending
//! and returning go through [`CatalogService::edit`] and persist the same way.

use crate::{
    error::{AppError, AppResult},
    models::{Book, Reader},
    repository::BookStore,
};

use super::catalog::{not_found, CatalogService};

impl<S: BookStore> CatalogService<S> {
    /// Lend a book to `reader`
    pub fn lend(&mut self, id: &str, reader: Reader) -> AppResult<()> {
        let book = self.find_by_id(id).ok_or_else(|| not_found(id))?;
        if let Some(current) = &book.borrower {
            return Err(AppError::BusinessRule(format!(
                "'{}' is already on loan to {}",
                book.title, current
            )));
        }

        let book = book.clone();
        self.edit(
            id,
            &book.title,
            book.author,
            book.pages,
            book.year,
            book.price,
            Some(reader),
        )
    }

    /// Record the return of a borrowed book
    pub fn give_back(&mut self, id: &str) -> AppResult<()> {
        let book = self.find_by_id(id).ok_or_else(|| not_found(id))?;
        if !book.is_borrowed() {
            return Err(AppError::BusinessRule(format!(
                "'{}' is not on loan",
                book.title
            )));
        }

        let book = book.clone();
        self.edit(
            id,
            &book.title,
            book.author,
            book.pages,
            book.year,
            book.price,
            None,
        )
    }

    pub fn available_books(&self) -> Vec<&Book> {
        self.books().iter().filter(|b| !b.is_borrowed()).collect()
    }

    pub fn borrowed_books(&self) -> Vec<&Book> {
        self.books().iter().filter(|b| b.is_borrowed()).collect()
    }
}
