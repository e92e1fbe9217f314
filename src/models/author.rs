//! Author model

use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::person::{same_person, Identity};

/// Author of one or more books
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Author {
    #[serde(flatten)]
    pub identity: Identity,
    pub nationality: String,
}

impl Author {
    pub fn new(name: impl Into<String>, nationality: impl Into<String>) -> Self {
        Self {
            identity: Identity::new(name),
            nationality: nationality.into(),
        }
    }

    pub fn id(&self) -> Uuid {
        self.identity.id()
    }

    pub fn name(&self) -> &str {
        &self.identity.name
    }
}

impl PartialEq for Author {
    fn eq(&self, other: &Self) -> bool {
        same_person(&self.identity, &other.identity)
    }
}

impl Eq for Author {}

impl Hash for Author {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id().hash(state);
    }
}

impl fmt::Display for Author {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.identity.name, self.nationality)
    }
}
