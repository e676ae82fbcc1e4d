use serde::{Deserialize, Serialize};
use indexmap::IndexMap;

/// One time-boxed waiver for a package.
///
/// Only `purl` and `expires` take part in matching. Any other fields
/// (owner, reason, ticket...) are kept as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Exception {
    #[serde(default)]
    pub purl: Option<String>,
    #[serde(default)]
    pub expires: Option<String>,
    #[serde(flatten)]
    pub extra: IndexMap<String, serde_json::Value>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct ExceptionsFile {
    #[serde(default)]
    pub exceptions: Vec<Exception>,
}

/// Exceptions still in force on the run date, keyed by purl
#[derive(Debug, Clone, Default)]
pub struct ActiveExceptions {
    by_purl: IndexMap<String, Exception>,
}

impl ActiveExceptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Later inserts for the same purl replace earlier ones
    pub fn insert(&mut self, purl: String, exception: Exception) {
        self.by_purl.insert(purl, exception);
    }

    pub fn get(&self, purl: &str) -> Option<&Exception> {
        self.by_purl.get(purl)
    }

    pub fn len(&self) -> usize {
        self.by_purl.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_purl.is_empty()
    }
}
