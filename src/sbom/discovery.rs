use std::collections::BTreeSet;
use std::path::{Component, Path, PathBuf};
use glob::{MatchOptions, Pattern};
use crate::error::Result;

/// Filename conventions SBOM generators in the pipeline write to
pub const SBOM_PATTERNS: [&str; 3] = ["sbom-*.json", "**/sbom-*.json", "**/bom.json"];

/// Find SBOM files under `root`.
///
/// Returned paths are relative to `root`, deduplicated and sorted by their string
/// form. Hidden files and directories are not matched by wildcards.
pub fn discover_sboms(root: &Path) -> Result<Vec<PathBuf>> {
    let options = MatchOptions {
        require_literal_leading_dot: true,
        ..MatchOptions::new()
    };
    let escaped_root = PathBuf::from(Pattern::escape(&root.to_string_lossy()));

    let mut found = BTreeSet::new();
    for pattern in SBOM_PATTERNS {
        let full_pattern = escaped_root.join(pattern);
        for entry in glob::glob_with(&full_pattern.to_string_lossy(), options)? {
            let path = match entry {
                Ok(path) => path,
                Err(e) => {
                    log::warn!("Skipping unreadable path during discovery: {}", e);
                    continue;
                }
            };
            if !path.is_file() {
                continue;
            }
            let relative = path.strip_prefix(root).unwrap_or(&path);
            if is_hidden(relative) {
                continue;
            }
            found.insert(relative.to_string_lossy().into_owned());
        }
    }

    log::debug!("Discovered {} SBOM files under {}", found.len(), root.display());
    Ok(found.into_iter().map(PathBuf::from).collect())
}

fn is_hidden(relative: &Path) -> bool {
    relative.components().any(|component| match component {
        Component::Normal(name) => name.to_string_lossy().starts_with('.'),
        _ => false,
    })
}
