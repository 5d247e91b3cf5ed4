//! folio - portfolio gallery inspector
//!
//! Runs the gallery filter over a CMS export and prints the result as JSON.
//!
//! # Examples
//!
//! ```bash
//! # Records the develop gallery would show, newest first
//! folio filter export.json --gallery develop --pretty
//!
//! # Several galleries at once, drafts included
//! folio batch export.json --gallery develop --gallery other --status all
//!
//! # Category and year counts for everything in the export
//! folio stats export.json
//! ```

use folio_cli::{Cli, load_config, logger, run};

use std::process::ExitCode;

use clap::Parser;

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match load_config(cli.config_dir.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = logger::initialize(&config.logging) {
        eprintln!("Error: {}", e);
        return ExitCode::FAILURE;
    }

    config.log_summary();

    match run(&cli.command, &config) {
        Ok(value) => {
            let output = if cli.pretty {
                serde_json::to_string_pretty(&value)
            } else {
                serde_json::to_string(&value)
            };

            match output {
                Ok(json) => {
                    println!("{}", json);
                    ExitCode::SUCCESS
                }
                Err(e) => {
                    eprintln!("Error serializing response: {}", e);
                    ExitCode::FAILURE
                }
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
