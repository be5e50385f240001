use std::{collections::HashMap, sync::Arc};

use crate::config::Config;

use super::{
    CliError, Command,
    commands::bus::{NamesCommand, TreeCommand, WatchCommand},
    formatting::{format_category, format_command, format_description, format_header},
};

/// Registry for CLI commands organized by category.
///
/// Commands are grouped by logical categories so command lookup stays a
/// table walk rather than a growing match statement.
pub struct CommandRegistry {
    /// Nested map: category name -> (command name -> command implementation)
    categories: HashMap<String, HashMap<String, Box<dyn Command>>>,
    config: Arc<Config>,
}

impl CommandRegistry {
    /// Creates a new empty command registry.
    pub fn new(config: Arc<Config>) -> Self {
        Self {
            categories: HashMap::new(),
            config,
        }
    }

    /// Registers every built-in command.
    pub fn register_all_commands(&mut self) {
        let default_bus = self.config.general.default_bus;
        self.register_command("bus", Box::new(NamesCommand::new(default_bus)));
        self.register_command("bus", Box::new(TreeCommand::new(default_bus)));
        self.register_command("bus", Box::new(WatchCommand::new(default_bus)));
    }

    /// Registers a command under the given category.
    ///
    /// The command's own metadata provides its name; a command registered
    /// twice replaces the earlier one.
    pub fn register_command(&mut self, category: &str, command: Box<dyn Command>) {
        self.categories
            .entry(category.to_string())
            .or_default()
            .insert(command.metadata().name, command);
    }

    /// Executes a command by category and name with the provided arguments.
    ///
    /// # Errors
    /// Returns `CliError::CommandNotFound` if the category or command does
    /// not exist; other errors come from the command itself.
    pub async fn execute(
        &self,
        category: &str,
        command_name: &str,
        args: &[String],
    ) -> Result<String, CliError> {
        let found_category = self
            .categories
            .get(category)
            .ok_or_else(|| CliError::CommandNotFound(category.to_string()))?;

        let command = found_category.get(command_name).ok_or_else(|| {
            CliError::CommandNotFound(format!("{category} {command_name}"))
        })?;

        command.execute(args).await
    }

    /// Lists all registered commands grouped by category.
    pub fn list_commands(&self) -> Vec<(String, Vec<String>)> {
        let mut listing: Vec<(String, Vec<String>)> = self
            .categories
            .iter()
            .map(|(category, commands)| {
                let mut names: Vec<String> = commands.keys().cloned().collect();
                names.sort();
                (category.clone(), names)
            })
            .collect();

        listing.sort_by(|a, b| a.0.cmp(&b.0));
        listing
    }

    /// Builds the help text from the registered commands' metadata.
    pub fn help_text(&self) -> String {
        let mut output = format!("{}\n\n", format_header("espy - D-Bus topology spy"));

        for (category, commands) in self.list_commands() {
            output.push_str(&format!("{}\n", format_category(&category)));
            for name in commands {
                if let Some(command) = self
                    .categories
                    .get(&category)
                    .and_then(|commands| commands.get(&name))
                {
                    let metadata = command.metadata();
                    let usage: Vec<String> = metadata
                        .args
                        .iter()
                        .map(|arg| {
                            if arg.required {
                                format!("<{}>", arg.name)
                            } else {
                                format!("[{}]", arg.name)
                            }
                        })
                        .collect();

                    output.push_str(&format!(
                        "  {} {}\n      {}\n",
                        format_command(&format!("{category} {name}")),
                        usage.join(" "),
                        format_description(&metadata.description),
                    ));
                    for example in &metadata.examples {
                        output.push_str(&format!(
                            "      {}\n",
                            format_description(&format!("e.g. {example}"))
                        ));
                    }
                }
            }
            output.push('\n');
        }

        output
    }
}
