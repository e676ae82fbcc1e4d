pub mod config;
pub mod error;
pub mod policy;
pub mod exceptions;
pub mod sbom;
pub mod output;

// Re-export main types for easy access
pub use config::{load_config, Config};
pub use error::{Error, Result, SbomError};
pub use exceptions::{load_exceptions, ActiveExceptions, Exception};
pub use output::{report, Outcome};
pub use policy::{load_denylist, Denylist};
pub use sbom::{scan, Finding};
