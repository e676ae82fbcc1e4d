//! Lenient view of CycloneDX-style documents.
//!
//! Only the handful of fields the gate needs are modelled. Anything else in the
//! document is ignored, and malformed entries inside `components` or `licenses`
//! are skipped instead of failing the whole file.

use serde::{Deserialize, Deserializer};

#[derive(Debug, Default, Deserialize)]
pub struct Bom {
    #[serde(default)]
    pub components: Option<Vec<serde_json::Value>>,
}

impl Bom {
    /// Components in document order. Entries that are not component objects are skipped.
    pub fn components(&self) -> impl Iterator<Item = Component> + '_ {
        self.components
            .iter()
            .flatten()
            .enumerate()
            .filter_map(|(index, value)| match Component::deserialize(value) {
                Ok(component) => Some(component),
                Err(e) => {
                    log::debug!("Skipping malformed component #{}: {}", index, e);
                    None
                }
            })
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Component {
    #[serde(default, deserialize_with = "lenient_string")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub version: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub purl: Option<String>,
    #[serde(default)]
    pub licenses: Option<Vec<LicenseChoice>>,
}

/// One entry of a component's `licenses` array
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum LicenseChoice {
    License { license: Option<License> },
    /// Expressions, bare strings and anything else we don't evaluate
    Other(serde_json::Value),
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct License {
    #[serde(default, deserialize_with = "lenient_string")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub name: Option<String>,
}

/// Accept any scalar as text: numbers and booleans become their string form,
/// null, arrays and objects become `None`.
fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<serde_json::Value>::deserialize(deserializer)? {
        Some(serde_json::Value::String(value)) => Some(value),
        Some(serde_json::Value::Number(value)) => Some(value.to_string()),
        Some(serde_json::Value::Bool(value)) => Some(value.to_string()),
        _ => None,
    })
}

impl License {
    /// `id` if non-empty, else `name`. Not trimmed: a whitespace-only `id` still wins.
    pub fn identifier(&self) -> Option<&str> {
        [self.id.as_deref(), self.name.as_deref()]
            .into_iter()
            .flatten()
            .find(|value| !value.is_empty())
    }
}

impl Component {
    /// License identifier of the first entry declaring one, trimmed.
    ///
    /// If that identifier is blank after trimming the component has no usable license;
    /// later entries are not consulted.
    pub fn license_id(&self) -> Option<String> {
        self.licenses
            .iter()
            .flatten()
            .find_map(|choice| match choice {
                LicenseChoice::License { license: Some(license) } => license.identifier(),
                _ => None,
            })
            .map(str::trim)
            .filter(|license| !license.is_empty())
            .map(str::to_string)
    }

    /// Trimmed purl, empty when absent
    pub fn purl(&self) -> &str {
        self.purl.as_deref().map(str::trim).unwrap_or("")
    }
}
