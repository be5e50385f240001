use crate::{
    cli::CliError,
    services::common::BusType,
};

/// Pulls an optional bus selector (`session` or `system`) out of a
/// command's trailing arguments, falling back to the configured default.
///
/// Every other argument is handed back untouched for the command to
/// interpret.
pub fn split_bus_arg(args: &[String], default_bus: BusType) -> (BusType, Vec<String>) {
    let mut bus = default_bus;
    let mut rest = Vec::new();

    for arg in args {
        match arg.parse::<BusType>() {
            Ok(selected) => bus = selected,
            Err(_) => rest.push(arg.clone()),
        }
    }

    (bus, rest)
}

/// Maps a service-layer failure into a CLI error.
pub fn service_error(service: &str, error: impl std::fmt::Display) -> CliError {
    CliError::ServiceError {
        service: service.to_string(),
        details: error.to_string(),
    }
}
