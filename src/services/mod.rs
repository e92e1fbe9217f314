//! Business logic services

pub mod catalog;
pub mod loans;

pub use catalog::{CatalogService, SortCriterion};
