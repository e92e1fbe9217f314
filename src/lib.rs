//! Libris library catalog
//!
//! A single-user book catalog: authors, readers and books kept in memory by
//! [`services::CatalogService`] and mirrored to a local JSON file after every
//! change.

pub mod config;
pub mod error;
pub mod models;
pub mod repository;
pub mod services;

pub use crate::config::AppConfig;
pub use error::{AppError, AppResult};
