//! Interactive test client for the stability-control HTTP API.

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod output;
pub mod shell;

pub use cli::Cli;
pub use config::ClientConfig;
pub use error::{CliError, Result};
