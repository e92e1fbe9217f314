//! Data models for the catalog

pub mod author;
pub mod book;
pub mod person;
pub mod reader;

// Re-export commonly used types
pub use author::Author;
pub use book::Book;
pub use person::Identity;
pub use reader::Reader;
