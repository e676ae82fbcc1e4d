use clap::Parser;
use std::process::ExitCode;

mod cli;
mod commands;

use cli::{Cli, Commands};
use commands::{handle_check, handle_config, resolve_config};

/// Exit code for errors that stop the run before a verdict
const FATAL_EXIT_CODE: u8 = 2;

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let env = env_logger::Env::default().default_filter_or(default_level);
    if let Err(e) = env_logger::Builder::from_env(env).format_timestamp_millis().try_init() {
        eprintln!("Error initializing logging: {:?}", e);
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let quiet = cli.quiet;
    let config = resolve_config(cli.paths);

    let result = match cli.command.unwrap_or(Commands::Check) {
        Commands::Check => handle_check(&config, quiet).map(|outcome| outcome.exit_code()),
        Commands::Config { show, validate } => handle_config(&config, show, validate, quiet),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            eprintln!("Error: {:?}", e);
            ExitCode::from(FATAL_EXIT_CODE)
        }
    }
}
