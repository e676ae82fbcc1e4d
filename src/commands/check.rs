use anyhow::{Context, Result};
use chrono::Local;
use sbom_license_gate::config::Config;
use sbom_license_gate::exceptions::load_exceptions;
use sbom_license_gate::output::{report, Outcome, NO_SBOMS_MESSAGE};
use sbom_license_gate::policy::load_denylist;
use sbom_license_gate::sbom::{discover_sboms, scan_files};

pub fn handle_check(config: &Config, quiet: bool) -> Result<Outcome> {
    let today = Local::now().date_naive();

    // Both loaders must succeed before anything is scanned or written
    let denylist = load_denylist(&config.denylist_file)?;
    let exceptions = load_exceptions(&config.exceptions_file, today)?;
    log::info!(
        "Policy: {} denied licenses, {} active exceptions as of {}",
        denylist.len(),
        exceptions.len(),
        today
    );

    let files = discover_sboms(&config.root)
        .with_context(|| format!("Failed to search for SBOMs under {}", config.root.display()))?;

    if files.is_empty() {
        if !quiet {
            println!("{}", NO_SBOMS_MESSAGE);
        }
        return Ok(Outcome::NoSboms);
    }

    let findings = scan_files(&config.root, &files, &denylist, &exceptions);
    log::info!("Scanned {} SBOM files, {} findings", files.len(), findings.len());

    Ok(report(&findings, &config.output_file, quiet)?)
}
