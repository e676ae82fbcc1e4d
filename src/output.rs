use std::fs;
use std::path::Path;
use crate::error::{Error, Result};
use crate::sbom::Finding;

/// Maximum findings listed on the console; the report file always has all of them
pub const CONSOLE_LIMIT: usize = 200;

pub const NO_SBOMS_MESSAGE: &str = "No SBOM files found. (This is non-blocking.)";
pub const CLEAN_MESSAGE: &str = "OK: no forbidden licenses found.";

/// Result of a completed check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Nothing to check
    NoSboms,
    Clean,
    Violations,
}

impl Outcome {
    pub fn exit_code(self) -> u8 {
        match self {
            Outcome::NoSboms | Outcome::Clean => 0,
            Outcome::Violations => 1,
        }
    }
}

/// Report file body: findings as a pretty-printed JSON array
pub fn format_report_json(findings: &[Finding]) -> Result<String> {
    serde_json::to_string_pretty(findings).map_err(Error::ReportSerialize)
}

pub fn write_report(findings: &[Finding], path: &Path) -> Result<()> {
    let content = format_report_json(findings)?;
    fs::write(path, content).map_err(|source| Error::ReportWrite {
        path: path.to_path_buf(),
        source,
    })
}

/// `name@version | license | purl | sbom`
pub fn format_finding_line(finding: &Finding) -> String {
    format!(
        "- {}@{} | {} | {} | {}",
        finding.name.as_deref().unwrap_or("None"),
        finding.version.as_deref().unwrap_or("None"),
        finding.license,
        finding.purl,
        finding.sbom_path
    )
}

pub fn format_violation_summary(findings: &[Finding], report_path: &Path) -> String {
    let mut output = String::from("Forbidden licenses detected:\n");

    for finding in findings.iter().take(CONSOLE_LIMIT) {
        output.push_str(&format_finding_line(finding));
        output.push('\n');
    }
    if findings.len() > CONSOLE_LIMIT {
        output.push_str(&format!(
            "... and {} more (see report)\n",
            findings.len() - CONSOLE_LIMIT
        ));
    }

    output.push_str(&format!("Report: {}\n", report_path.display()));
    output
}

/// Write the report (when there is anything to report) and print the summary.
///
/// The report file is fully written before `Outcome::Violations` is returned.
pub fn report(findings: &[Finding], report_path: &Path, quiet: bool) -> Result<Outcome> {
    if findings.is_empty() {
        if !quiet {
            println!("{}", CLEAN_MESSAGE);
        }
        return Ok(Outcome::Clean);
    }

    write_report(findings, report_path)?;
    log::debug!("Wrote {} findings to {}", findings.len(), report_path.display());

    if !quiet {
        print!("{}", format_violation_summary(findings, report_path));
    }
    Ok(Outcome::Violations)
}
