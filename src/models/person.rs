//! Identity shared by every kind of person in the catalog.
//!
//! Authors and readers embed an [`Identity`] instead of inheriting from a
//! common base. Equality between people is decided by the identifier alone;
//! ordering is a case-insensitive comparison of display names.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Process-unique identifier plus mutable display name
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Identity {
    id: Uuid,
    pub name: String,
}

impl Identity {
    /// Create an identity with a freshly generated identifier
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }
}

/// Two identities denote the same person when their identifiers match
pub fn same_person(a: &Identity, b: &Identity) -> bool {
    a.id == b.id
}

/// Natural ordering of people: case-insensitive name comparison
pub fn compare_names(a: &Identity, b: &Identity) -> Ordering {
    compare_ignore_case(&a.name, &b.name)
}

/// Case-insensitive string comparison used for titles and names.
pub(crate) fn compare_ignore_case(a: &str, b: &str) -> Ordering {
    a.chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase))
}
