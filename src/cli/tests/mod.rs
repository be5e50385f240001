//! Unit tests for CLI module
//!
//! Tests command registry lookup, help generation, and CLI formatting.
//! No bus connection is made.

use std::sync::Arc;

use crate::cli::{CliError, CommandRegistry, formatting};
use crate::config::Config;

fn registry() -> CommandRegistry {
    let mut registry = CommandRegistry::new(Arc::new(Config::default()));
    registry.register_all_commands();
    registry
}

#[test]
fn registers_bus_commands() {
    let listing = registry().list_commands();

    assert_eq!(listing.len(), 1);
    let (category, commands) = &listing[0];
    assert_eq!(category, "bus");
    assert_eq!(commands, &["names", "tree", "watch"]);
}

#[tokio::test]
async fn unknown_category_is_not_found() {
    let result = registry().execute("nope", "names", &[]).await;

    assert!(matches!(result, Err(CliError::CommandNotFound(_))));
}

#[tokio::test]
async fn unknown_command_is_not_found() {
    let result = registry().execute("bus", "nope", &[]).await;

    let Err(CliError::CommandNotFound(message)) = result else {
        unreachable!("lookup should fail");
    };
    assert_eq!(message, "bus nope");
}

#[test]
fn help_text_lists_every_command() {
    let help = registry().help_text();

    assert!(help.contains("bus names"));
    assert!(help.contains("bus tree"));
    assert!(help.contains("bus watch"));
    assert!(help.contains("<service>"));
}

#[test]
fn error_formatting_wraps_in_red() {
    let formatted = formatting::format_error("boom");

    assert!(formatted.starts_with(formatting::Colors::BOLD));
    assert!(formatted.contains("boom"));
    assert!(formatted.ends_with(formatting::Colors::RESET));
}
