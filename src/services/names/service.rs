use futures::{Stream, StreamExt};
use tracing::debug;
use zbus::{Connection, fdo};

use super::{NamesError, types::NameEvent};
use crate::services::common::BusType;

/// Directory of the names registered on one bus.
///
/// Holds its own connection; the bus it watches is fixed at construction,
/// never swapped behind its back.
#[derive(Debug, Clone)]
pub struct NameDirectory {
    connection: Connection,
}

impl NameDirectory {
    /// Connects to the given bus.
    ///
    /// # Errors
    /// Returns error if the bus connection cannot be established
    pub async fn new(bus: BusType) -> Result<Self, NamesError> {
        Ok(Self {
            connection: bus.connect().await?,
        })
    }

    /// Wraps an existing connection.
    pub fn with_connection(connection: Connection) -> Self {
        Self { connection }
    }

    /// The connection this directory watches.
    pub fn connection(&self) -> &Connection {
        &self.connection
    }

    /// Lists the names currently registered on the bus.
    ///
    /// # Errors
    /// Returns error if the D-Bus daemon cannot be queried
    pub async fn list(&self) -> Result<Vec<String>, NamesError> {
        let proxy = fdo::DBusProxy::new(&self.connection).await?;
        let names = proxy
            .list_names()
            .await
            .map_err(|e| NamesError::Dbus(e.into()))?;

        Ok(names.into_iter().map(|name| name.to_string()).collect())
    }

    /// Subscribes to name ownership changes.
    ///
    /// An absent old owner means the name appeared, an absent new owner
    /// means it vanished; anything else is a handover between connections.
    /// The returned stream ends when the connection closes.
    ///
    /// # Errors
    /// Returns error if the signal subscription fails
    pub async fn events(&self) -> Result<impl Stream<Item = NameEvent> + Send, NamesError> {
        let proxy = fdo::DBusProxy::new(&self.connection).await?;
        let mut owner_changes = proxy.receive_name_owner_changed().await?;

        Ok(async_stream::stream! {
            while let Some(signal) = owner_changes.next().await {
                let Ok(args) = signal.args() else {
                    continue;
                };

                let name = args.name().to_string();
                debug!(name = %name, "name owner changed");

                match (args.old_owner().as_deref(), args.new_owner().as_deref()) {
                    (None, Some(_)) => yield NameEvent::Appeared(name),
                    (Some(_), None) => yield NameEvent::Vanished(name),
                    (Some(old_owner), Some(new_owner)) => {
                        yield NameEvent::OwnerChanged {
                            name,
                            old_owner: old_owner.to_string(),
                            new_owner: new_owner.to_string(),
                        }
                    }
                    (None, None) => {}
                }
            }
        })
    }
}
