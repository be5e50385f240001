use std::sync::Arc;

use crate::config::Config;

use super::{CliError, CommandRegistry};

/// High-level service for managing and executing CLI commands.
///
/// Provides a unified interface for command registration, discovery, and
/// execution. Commands are organized by category and can be listed or
/// executed by name.
pub struct CliService {
    registry: CommandRegistry,
}

impl CliService {
    /// Creates a new CLI service with all available commands registered.
    ///
    /// The configuration is shared across commands that need it (notably
    /// the default bus selection).
    pub fn new(config: Config) -> Self {
        let config = Arc::new(config);
        let mut registry = CommandRegistry::new(config);
        registry.register_all_commands();

        CliService { registry }
    }

    /// Executes a command by category and name with the provided arguments.
    ///
    /// # Errors
    /// Returns `CliError::CommandNotFound` if the command doesn't exist in
    /// the category; other errors come from the command's own execution.
    pub async fn execute_command(
        &self,
        category: &str,
        command_name: &str,
        args: &[String],
    ) -> Result<String, CliError> {
        self.registry.execute(category, command_name, args).await
    }

    /// Lists all available commands organized by category.
    pub fn list_all(&self) -> Vec<(String, Vec<String>)> {
        self.registry.list_commands()
    }

    /// Help text covering every registered command.
    pub fn help_text(&self) -> String {
        self.registry.help_text()
    }
}
