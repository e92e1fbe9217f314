//! Reader (borrower) model

use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::person::{same_person, Identity};

/// A library patron who can borrow books
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Reader {
    #[serde(flatten)]
    pub identity: Identity,
    pub phone: String,
    pub email: String,
}

impl Reader {
    pub fn new(
        name: impl Into<String>,
        phone: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            identity: Identity::new(name),
            phone: phone.into(),
            email: email.into(),
        }
    }

    pub fn id(&self) -> Uuid {
        self.identity.id()
    }

    pub fn name(&self) -> &str {
        &self.identity.name
    }
}

impl PartialEq for Reader {
    fn eq(&self, other: &Self) -> bool {
        same_person(&self.identity, &other.identity)
    }
}

impl Eq for Reader {}

impl Hash for Reader {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id().hash(state);
    }
}

impl fmt::Display for Reader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (Telefone: {})", self.identity.name, self.phone)
    }
}
