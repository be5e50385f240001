//! Command-line interface for bus inspection.
//!
//! Provides a hierarchical command system for browsing D-Bus topology.
//! Commands are organized by category and generate help text from their
//! own metadata.

mod commands;
pub mod formatting;
mod registry;
mod service;
#[cfg(test)]
mod tests;
mod types;

pub use registry::CommandRegistry;
pub use service::CliService;
pub use types::{CliError, Command, CommandResult};
