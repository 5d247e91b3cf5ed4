//! folio-cli library
//!
//! Argument definitions and command execution for the `folio` binary.

pub(crate) mod cli;
pub(crate) mod commands;
pub(crate) mod criteria_args;
pub(crate) mod error;
pub mod logger;
pub(crate) mod runner;

#[cfg(test)]
mod tests;

pub use cli::Cli;
pub use commands::Commands;
pub use criteria_args::CriteriaArgs;
pub use error::{CliError, CliResult};
pub use runner::{load_items, run};

use folio_config::Config;

use std::path::Path;

/// Load and validate configuration, from `config_dir` when given.
pub fn load_config(config_dir: Option<&Path>) -> CliResult<Config> {
    let config = match config_dir {
        Some(dir) => Config::load_from_dir(dir)?,
        None => Config::load()?,
    };
    config.validate()?;

    Ok(config)
}
