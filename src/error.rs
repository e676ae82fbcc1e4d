use std::path::PathBuf;

/// Fatal errors: any of these aborts the run before a report is written.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to read denylist file {}", path.display())]
    DenylistRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read exceptions file {}", path.display())]
    ExceptionsRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse exceptions file {}", path.display())]
    ExceptionsParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("exception #{index} ({purl}) has no 'expires' date")]
    MissingExpiry { index: usize, purl: String },

    #[error("exception #{index} ({purl}) has invalid 'expires' date '{value}', expected YYYY-MM-DD")]
    InvalidExpiry {
        index: usize,
        purl: String,
        value: String,
        #[source]
        source: chrono::ParseError,
    },

    #[error(transparent)]
    Pattern(#[from] glob::PatternError),

    #[error("failed to serialize report")]
    ReportSerialize(#[source] serde_json::Error),

    #[error("failed to write report file {}", path.display())]
    ReportWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, Error>;

/// Per-file SBOM failures. The scan logs these and moves on.
#[derive(Debug, thiserror::Error)]
pub enum SbomError {
    #[error("failed to read SBOM {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse SBOM {}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
