use anyhow::Result;
use chrono::Local;
use sbom_license_gate::config::{load_config, Config};
use sbom_license_gate::exceptions::load_exceptions;
use sbom_license_gate::policy::load_denylist;
use crate::cli::PathArgs;

/// Defaults, then environment, then command line
pub fn resolve_config(paths: PathArgs) -> Config {
    let mut config = load_config();

    if let Some(path) = paths.denylist {
        config.denylist_file = path;
    }
    if let Some(path) = paths.exceptions {
        config.exceptions_file = path;
    }
    if let Some(path) = paths.output {
        config.output_file = path;
    }
    if let Some(path) = paths.root {
        config.root = path;
    }
    config
}

pub fn handle_config(config: &Config, show: bool, validate: bool, quiet: bool) -> Result<u8> {
    if !show && !validate {
        if !quiet {
            eprintln!("Use --show or --validate");
        }
        return Ok(1);
    }

    if show && !quiet {
        println!("{}", serde_json::to_string_pretty(config)?);
    }

    if validate {
        let denylist = load_denylist(&config.denylist_file)?;
        let exceptions = load_exceptions(&config.exceptions_file, Local::now().date_naive())?;
        if !quiet {
            println!(
                "✅ Configuration is valid ({} denied licenses, {} active exceptions)",
                denylist.len(),
                exceptions.len()
            );
        }
    }

    Ok(0)
}
