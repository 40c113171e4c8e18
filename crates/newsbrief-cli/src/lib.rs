//! newsbrief CLI library.
//!
//! Argument parsing, configuration, logging setup and the command
//! implementations behind the `newsbrief` binary.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod logging;
pub mod output;

pub use cli::{Cli, Command};
pub use config::AppConfig;
pub use error::{CliError, Result};
