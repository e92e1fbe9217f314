//! JSON file store for the book collection

use std::{
    fs::{self, File},
    io::{BufReader, BufWriter, Write},
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};

use crate::{
    error::{AppError, AppResult},
    models::Book,
};

use super::BookStore;

const FORMAT_VERSION: u32 = 1;

/// On-disk document wrapping the collection
#[derive(Serialize)]
struct StoredCatalogRef<'a> {
    version: u32,
    books: &'a [Book],
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct StoredCatalog {
    version: u32,
    books: Vec<Book>,
}

/// Stores the whole collection as one JSON document, replaced atomically on save
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self.path.as_os_str().to_owned();
        name.push(".tmp");
        PathBuf::from(name)
    }

    fn write_temp(&self, temp_path: &Path, books: &[Book]) -> AppResult<()> {
        let file = File::create(temp_path)?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(
            &mut writer,
            &StoredCatalogRef {
                version: FORMAT_VERSION,
                books,
            },
        )?;
        writer.flush()?;
        writer.get_ref().sync_all()?;
        Ok(())
    }
}

impl BookStore for JsonFileStore {
    fn save(&self, books: &[Book]) -> AppResult<()> {
        if let Some(dir) = self.path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir)?;
        }

        // Write temp + fsync + rename so a failed save never truncates the previous file
        let temp_path = self.temp_path();
        if let Err(e) = self.write_temp(&temp_path, books) {
            tracing::warn!(path = %temp_path.display(), "Failed to write catalog: {}", e);
            let _ = fs::remove_file(&temp_path);
            return Err(e);
        }

        if let Err(e) = fs::rename(&temp_path, &self.path) {
            let _ = fs::remove_file(&temp_path);
            return Err(e.into());
        }

        tracing::debug!(path = %self.path.display(), count = books.len(), "Catalog saved");
        Ok(())
    }

    fn try_load(&self) -> AppResult<Vec<Book>> {
        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %self.path.display(), "No stored catalog");
                return Ok(Vec::new());
            }
            Err(e) => return Err(e.into()),
        };

        if file.metadata()?.len() == 0 {
            tracing::debug!(path = %self.path.display(), "Stored catalog is empty");
            return Ok(Vec::new());
        }

        let stored: StoredCatalog = serde_json::from_reader(BufReader::new(file))?;
        if stored.version != FORMAT_VERSION {
            return Err(AppError::Serialization(serde::de::Error::custom(format!(
                "unsupported catalog format version {} in {}",
                stored.version,
                self.path.display()
            ))));
        }

        tracing::debug!(path = %self.path.display(), count = stored.books.len(), "Catalog loaded");
        Ok(stored.books)
    }
}
