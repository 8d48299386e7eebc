//! Sala terminal shell
//!
//! Configuration, command parsing and text rendering for the `sala`
//! binary. The application logic itself lives in the workspace crates.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod command;
pub mod config;
pub mod render;

pub use command::{parse_command, Command, CommandError};
pub use config::{AppConfig, ConfigError};
