use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use crate::error::{Result, SbomError};
use crate::exceptions::ActiveExceptions;
use crate::policy::Denylist;

pub mod discovery;
pub mod model;

pub use discovery::{discover_sboms, SBOM_PATTERNS};
pub use model::{Bom, Component, License, LicenseChoice};

/// A component declaring a denied license with no active exception.
///
/// Field order here is the field order of the report file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Finding {
    pub name: Option<String>,
    pub version: Option<String>,
    pub license: String,
    pub purl: String,
    #[serde(rename = "sbom")]
    pub sbom_path: String,
}

/// Read and parse one SBOM file
pub fn load_bom(path: &Path) -> std::result::Result<Bom, SbomError> {
    let content = fs::read(path).map_err(|source| SbomError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json::from_slice(&content).map_err(|source| SbomError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Evaluate a single component against the policy
pub fn check_component(
    component: &Component,
    sbom_path: &str,
    denylist: &Denylist,
    exceptions: &ActiveExceptions,
) -> Option<Finding> {
    let license = component.license_id()?;
    if !denylist.contains(&license) {
        return None;
    }

    let purl = component.purl();
    if exceptions.excepts(purl) {
        log::debug!("{} ({}) is covered by an exception", purl, license);
        return None;
    }

    Some(Finding {
        name: component.name.clone(),
        version: component.version.clone(),
        license,
        purl: purl.to_string(),
        sbom_path: sbom_path.to_string(),
    })
}

/// Check already discovered files (relative to `root`), in the given order.
///
/// Files that cannot be read or parsed are logged and contribute nothing.
pub fn scan_files(
    root: &Path,
    files: &[PathBuf],
    denylist: &Denylist,
    exceptions: &ActiveExceptions,
) -> Vec<Finding> {
    let mut findings = Vec::new();

    for relative in files {
        let bom = match load_bom(&root.join(relative)) {
            Ok(bom) => bom,
            Err(e) => {
                log::warn!("Skipping {}: {}", relative.display(), error_chain(&e));
                continue;
            }
        };

        let sbom_path = relative.to_string_lossy();
        let before = findings.len();
        findings.extend(
            bom.components()
                .filter_map(|component| check_component(&component, &sbom_path, denylist, exceptions)),
        );
        log::debug!("{}: {} findings", sbom_path, findings.len() - before);
    }

    findings
}

/// Discover SBOMs under `root` and check every component they declare
pub fn scan(root: &Path, denylist: &Denylist, exceptions: &ActiveExceptions) -> Result<Vec<Finding>> {
    let files = discover_sboms(root)?;
    Ok(scan_files(root, &files, denylist, exceptions))
}

fn error_chain(error: &dyn std::error::Error) -> String {
    let mut message = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}
