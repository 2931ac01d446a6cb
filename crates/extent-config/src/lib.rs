//! Configuration for Extent tools.
//!
//! Settings persist to disk as RON files, can be overridden from the command
//! line via clap, and survive forward/backward compatible edits.

mod cli;
mod config;
mod error;

pub use cli::CliArgs;
pub use config::{AreaConfig, Config, DebugConfig, default_config_dir};
pub use error::ConfigError;
