use async_trait::async_trait;
use futures::StreamExt;
use tokio::pin;
use tracing::info;

use crate::{
    cli::{
        Command, CommandResult,
        types::{CommandArg, CommandMetadata},
    },
    services::{
        common::BusType,
        names::{NameDirectory, NameEvent},
    },
};

use super::utils::{service_error, split_bus_arg};

/// Command to follow name ownership changes on a bus.
///
/// Prints one line per change until interrupted with Ctrl-C.
pub struct WatchCommand {
    default_bus: BusType,
}

impl WatchCommand {
    /// Creates a new WatchCommand.
    pub fn new(default_bus: BusType) -> Self {
        Self { default_bus }
    }
}

#[async_trait]
impl Command for WatchCommand {
    async fn execute(&self, args: &[String]) -> CommandResult {
        let (bus, _rest) = split_bus_arg(args, self.default_bus);

        let directory = NameDirectory::new(bus)
            .await
            .map_err(|e| service_error("Names", e))?;
        let events = directory
            .events()
            .await
            .map_err(|e| service_error("Names", e))?;
        pin!(events);

        info!(bus = %bus, "watching name owner changes, Ctrl-C to stop");

        loop {
            tokio::select! {
                event = events.next() => {
                    match event {
                        Some(event) => println!("{}", render_event(&event)),
                        None => break,
                    }
                }
                _ = tokio::signal::ctrl_c() => break,
            }
        }

        Ok(String::new())
    }

    fn metadata(&self) -> CommandMetadata {
        CommandMetadata {
            name: "watch".to_string(),
            description: "Follow bus name appearances and disappearances".to_string(),
            category: "bus".to_string(),
            args: vec![CommandArg {
                name: "bus".to_string(),
                description: "Bus to watch: session or system".to_string(),
                required: false,
            }],
            examples: vec!["espy bus watch".to_string()],
        }
    }
}

fn render_event(event: &NameEvent) -> String {
    match event {
        NameEvent::Appeared(name) => format!("+ {name}"),
        NameEvent::Vanished(name) => format!("- {name}"),
        NameEvent::OwnerChanged {
            name,
            old_owner,
            new_owner,
        } => format!("~ {name}: {old_owner} -> {new_owner}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_event_lines() {
        assert_eq!(
            render_event(&NameEvent::Appeared("org.foo".to_string())),
            "+ org.foo"
        );
        assert_eq!(
            render_event(&NameEvent::Vanished("org.foo".to_string())),
            "- org.foo"
        );
        assert_eq!(
            render_event(&NameEvent::OwnerChanged {
                name: "org.foo".to_string(),
                old_owner: ":1.7".to_string(),
                new_owner: ":1.9".to_string(),
            }),
            "~ org.foo: :1.7 -> :1.9"
        );
    }
}
