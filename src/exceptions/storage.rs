use std::fs;
use std::path::Path;
use chrono::NaiveDate;
use super::models::{ActiveExceptions, ExceptionsFile};
use crate::error::{Error, Result};

impl ExceptionsFile {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| Error::ExceptionsRead {
            path: path.to_path_buf(),
            source,
        })?;

        serde_json::from_str(&content).map_err(|source| Error::ExceptionsParse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Drop expired entries and index the rest by purl.
    ///
    /// Every entry must carry a valid date, even ones that could never match.
    pub fn into_active(self, today: NaiveDate) -> Result<ActiveExceptions> {
        let mut active = ActiveExceptions::new();

        for (index, exception) in self.exceptions.into_iter().enumerate() {
            if !exception.is_active(index, today)? {
                log::info!(
                    "Ignoring expired exception for {} (expired {})",
                    exception.purl.as_deref().unwrap_or("<no purl>"),
                    exception.expires.as_deref().unwrap_or_default()
                );
                continue;
            }

            match exception.purl.clone() {
                Some(purl) if !purl.trim().is_empty() => active.insert(purl, exception),
                _ => log::warn!("Exception #{} has no purl and cannot match any component", index),
            }
        }

        Ok(active)
    }
}

/// Load active exceptions. A missing file means there are none.
pub fn load_exceptions<P: AsRef<Path>>(path: P, today: NaiveDate) -> Result<ActiveExceptions> {
    let path = path.as_ref();
    if !path.exists() {
        log::debug!("No exceptions file at {}", path.display());
        return Ok(ActiveExceptions::new());
    }

    let active = ExceptionsFile::load_from_file(path)?.into_active(today)?;
    log::debug!("Loaded {} active exceptions from {}", active.len(), path.display());
    Ok(active)
}
