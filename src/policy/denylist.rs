use std::collections::BTreeSet;
use std::fs;
use std::path::Path;
use crate::error::{Error, Result};

/// Set of license identifiers that must not ship.
///
/// Matching is exact and case-sensitive, as loaded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Denylist {
    licenses: BTreeSet<String>,
}

impl Denylist {
    pub fn contains(&self, license: &str) -> bool {
        self.licenses.contains(license)
    }

    pub fn len(&self) -> usize {
        self.licenses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.licenses.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.licenses.iter().map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<S> for Denylist {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            licenses: iter.into_iter().map(Into::into).collect(),
        }
    }
}

/// Parse denylist text: one identifier per line, blank lines and `#` comments skipped
pub fn parse_denylist(content: &str) -> Denylist {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .collect()
}

/// Load the denylist from disk. A missing file is fatal.
pub fn load_denylist<P: AsRef<Path>>(path: P) -> Result<Denylist> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| Error::DenylistRead {
        path: path.to_path_buf(),
        source,
    })?;

    let denylist = parse_denylist(&content);
    if denylist.is_empty() {
        log::warn!("Denylist {} has no entries; every license passes", path.display());
    }
    log::debug!("Loaded {} denied licenses from {}", denylist.len(), path.display());
    Ok(denylist)
}
