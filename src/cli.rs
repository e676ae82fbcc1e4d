use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "sbom-license-gate")]
#[command(about = "Fail the build when SBOM components declare denylisted licenses")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    #[command(flatten)]
    pub paths: PathArgs,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress the console summary
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

/// Overrides for file locations; these win over DENYLIST_FILE / EXCEPTIONS_FILE
#[derive(Args, Default)]
pub struct PathArgs {
    /// Denylist file (one license identifier per line)
    #[arg(long, global = true, value_name = "FILE")]
    pub denylist: Option<PathBuf>,

    /// Exceptions file (JSON, optional)
    #[arg(long, global = true, value_name = "FILE")]
    pub exceptions: Option<PathBuf>,

    /// Report file written when forbidden licenses are found
    #[arg(long, global = true, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Directory to search for SBOM files
    #[arg(long, global = true, value_name = "DIR")]
    pub root: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Scan SBOMs for denylisted licenses (default)
    Check,
    /// Show or validate configuration
    Config {
        /// Show resolved configuration
        #[arg(long)]
        show: bool,

        /// Load denylist and exceptions and report problems
        #[arg(long)]
        validate: bool,
    },
}
