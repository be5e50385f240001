use async_trait::async_trait;

use crate::{
    cli::{
        Command, CommandResult,
        formatting::format_subheader,
        types::{CommandArg, CommandMetadata},
    },
    services::{common::BusType, names::{NameDirectory, ServiceNames}},
};

use super::utils::{service_error, split_bus_arg};

/// Command to list the names registered on a bus.
///
/// Output groups well-known names above unique connection names, each
/// group sorted case-insensitively.
pub struct NamesCommand {
    default_bus: BusType,
}

impl NamesCommand {
    /// Creates a new NamesCommand.
    pub fn new(default_bus: BusType) -> Self {
        Self { default_bus }
    }
}

#[async_trait]
impl Command for NamesCommand {
    async fn execute(&self, args: &[String]) -> CommandResult {
        let (bus, _rest) = split_bus_arg(args, self.default_bus);

        let directory = NameDirectory::new(bus)
            .await
            .map_err(|e| service_error("Names", e))?;
        let names = directory
            .list()
            .await
            .map_err(|e| service_error("Names", e))?;
        let groups = ServiceNames::partition(names);

        Ok(render_groups(&groups))
    }

    fn metadata(&self) -> CommandMetadata {
        CommandMetadata {
            name: "names".to_string(),
            description: "List services registered on the bus".to_string(),
            category: "bus".to_string(),
            args: vec![CommandArg {
                name: "bus".to_string(),
                description: "Bus to query: session or system".to_string(),
                required: false,
            }],
            examples: vec![
                "espy bus names".to_string(),
                "espy bus names system".to_string(),
            ],
        }
    }
}

fn render_groups(groups: &ServiceNames) -> String {
    let mut output = format!("{}\n", format_subheader("Public Services"));
    for name in &groups.public {
        output.push_str(&format!("  {name}\n"));
    }

    output.push_str(&format!("\n{}\n", format_subheader("Private Services")));
    for name in &groups.private {
        output.push_str(&format!("  {name}\n"));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_both_groups() {
        let groups = ServiceNames::partition(
            ["org.foo.Bar", ":1.7"].into_iter().map(String::from),
        );
        let output = render_groups(&groups);

        assert!(output.contains("Public Services"));
        assert!(output.contains("  org.foo.Bar\n"));
        assert!(output.contains("Private Services"));
        assert!(output.contains("  :1.7\n"));
    }
}
