use chrono::NaiveDate;
use super::models::{ActiveExceptions, Exception};
use crate::error::{Error, Result};

impl Exception {
    fn purl_label(&self) -> String {
        self.purl.clone().unwrap_or_else(|| "<no purl>".to_string())
    }

    /// Parse `expires` as a calendar date. `index` only labels the error.
    pub fn expiry_date(&self, index: usize) -> Result<NaiveDate> {
        let value = self.expires.as_deref().ok_or_else(|| Error::MissingExpiry {
            index,
            purl: self.purl_label(),
        })?;

        NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").map_err(|source| Error::InvalidExpiry {
            index,
            purl: self.purl_label(),
            value: value.to_string(),
            source,
        })
    }

    /// Still in force on `today`, inclusive of the expiry day itself
    pub fn is_active(&self, index: usize, today: NaiveDate) -> Result<bool> {
        Ok(self.expiry_date(index)? >= today)
    }
}

impl ActiveExceptions {
    /// Whether a component with this purl is waived. Blank purls never are.
    pub fn excepts(&self, purl: &str) -> bool {
        !purl.is_empty() && self.get(purl).is_some()
    }
}
