use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use zbus::Connection;

/// Which message bus to talk to.
///
/// The selected bus is an explicit value handed to the services; espy keeps
/// no process-wide "current bus" state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BusType {
    /// The per-login session bus.
    #[default]
    Session,
    /// The system-wide bus.
    System,
}

impl BusType {
    /// Opens a connection to this bus.
    ///
    /// # Errors
    /// Returns error if the bus socket cannot be reached or authentication fails
    pub async fn connect(self) -> zbus::Result<Connection> {
        match self {
            BusType::Session => Connection::session().await,
            BusType::System => Connection::system().await,
        }
    }
}

impl fmt::Display for BusType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BusType::Session => write!(f, "session"),
            BusType::System => write!(f, "system"),
        }
    }
}

impl FromStr for BusType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "session" => Ok(BusType::Session),
            "system" => Ok(BusType::System),
            other => Err(format!("unknown bus '{other}' (expected session or system)")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_bus_names() {
        assert_eq!("session".parse::<BusType>(), Ok(BusType::Session));
        assert_eq!("system".parse::<BusType>(), Ok(BusType::System));
        assert!("sessionbus".parse::<BusType>().is_err());
    }

    #[test]
    fn displays_lowercase() {
        assert_eq!(BusType::Session.to_string(), "session");
        assert_eq!(BusType::System.to_string(), "system");
    }
}
