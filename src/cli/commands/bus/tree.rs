use async_trait::async_trait;

use crate::{
    cli::{
        CliError, Command, CommandResult,
        types::{CommandArg, CommandMetadata},
    },
    services::{
        common::BusType,
        introspection::{self, BusIntrospector, DbusObject, format},
    },
};

use super::utils::{service_error, split_bus_arg};

/// Command to walk a service's object tree and print it.
///
/// Objects render with `[OBJ]` markers, their interfaces beneath them, and
/// interface members sorted properties-first. Pass `json` for a serialized
/// tree instead.
pub struct TreeCommand {
    default_bus: BusType,
}

impl TreeCommand {
    /// Creates a new TreeCommand.
    pub fn new(default_bus: BusType) -> Self {
        Self { default_bus }
    }
}

#[async_trait]
impl Command for TreeCommand {
    async fn execute(&self, args: &[String]) -> CommandResult {
        let (bus, rest) = split_bus_arg(args, self.default_bus);

        let mut service = None;
        let mut root_path = "/".to_string();
        let mut json = false;
        for arg in &rest {
            if arg == "json" {
                json = true;
            } else if arg.starts_with('/') {
                root_path = arg.clone();
            } else if service.is_none() {
                service = Some(arg.clone());
            } else {
                return Err(CliError::InvalidArguments(format!(
                    "unexpected argument '{arg}'"
                )));
            }
        }

        let Some(service) = service else {
            return Err(CliError::InvalidArguments(
                "a service name is required".to_string(),
            ));
        };

        let transport = BusIntrospector::new(bus)
            .await
            .map_err(|e| service_error("Introspection", e))?;
        let objects = introspection::walk(&transport, &service, &root_path)
            .await
            .map_err(|e| service_error("Introspection", e))?;

        if json {
            return serde_json::to_string_pretty(&objects)
                .map_err(|e| service_error("Introspection", e));
        }

        if objects.is_empty() {
            return Ok(format!("No introspectable objects under {root_path}"));
        }

        Ok(render_tree(&objects))
    }

    fn metadata(&self) -> CommandMetadata {
        CommandMetadata {
            name: "tree".to_string(),
            description: "Recursively introspect a service's object tree".to_string(),
            category: "bus".to_string(),
            args: vec![
                CommandArg {
                    name: "service".to_string(),
                    description: "Well-known or unique name to introspect".to_string(),
                    required: true,
                },
                CommandArg {
                    name: "path".to_string(),
                    description: "Root object path, defaults to /".to_string(),
                    required: false,
                },
                CommandArg {
                    name: "bus".to_string(),
                    description: "Bus to query: session or system".to_string(),
                    required: false,
                },
                CommandArg {
                    name: "json".to_string(),
                    description: "Emit the tree as JSON".to_string(),
                    required: false,
                },
            ],
            examples: vec![
                "espy bus tree org.freedesktop.Notifications".to_string(),
                "espy bus tree org.freedesktop.login1 /org/freedesktop/login1 system".to_string(),
                "espy bus tree org.freedesktop.DBus json".to_string(),
            ],
        }
    }
}

/// Renders the walked objects as an indented text tree.
fn render_tree(objects: &[DbusObject]) -> String {
    let mut output = String::new();
    for object in objects {
        output.push_str(&format!("[OBJ] {}\n", object.path));
        for interface in &object.interfaces {
            output.push_str(&format!("  [IFACE] {}\n", interface.name));
            for member in format::sorted_members(interface) {
                let marker = match member {
                    format::InterfaceMember::Property(_) => "[PROP]",
                    format::InterfaceMember::Method(_) => "[METH]",
                    format::InterfaceMember::Signal(_) => "[SIG]",
                };
                output.push_str(&format!("    {marker} {}\n", member.render()));
            }
        }
    }

    output
}
