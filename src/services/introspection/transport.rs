use async_trait::async_trait;
use zbus::{Connection, fdo};

use crate::services::common::BusType;

/// Transport seam for introspection round-trips.
///
/// One call fetches the raw introspection XML for a single `(service, path)`
/// pair. The walker drives this once per discovered node, strictly in
/// sequence. Tests substitute an in-memory implementation.
#[async_trait]
pub trait Introspect: Send + Sync {
    /// Fetches the introspection document for `path` on `service`.
    ///
    /// # Errors
    /// Returns error if the service is unreachable or not introspectable
    async fn introspect(&self, service: &str, path: &str) -> Result<String, zbus::Error>;
}

/// Production transport backed by a live bus connection.
#[derive(Debug, Clone)]
pub struct BusIntrospector {
    connection: Connection,
}

impl BusIntrospector {
    /// Connects to the given bus.
    ///
    /// # Errors
    /// Returns error if the bus connection cannot be established
    pub async fn new(bus: BusType) -> zbus::Result<Self> {
        Ok(Self {
            connection: bus.connect().await?,
        })
    }

    /// Wraps an existing connection.
    pub fn with_connection(connection: Connection) -> Self {
        Self { connection }
    }
}

#[async_trait]
impl Introspect for BusIntrospector {
    async fn introspect(&self, service: &str, path: &str) -> Result<String, zbus::Error> {
        let proxy = fdo::IntrospectableProxy::builder(&self.connection)
            .destination(service.to_string())?
            .path(path.to_string())?
            .build()
            .await?;

        proxy.introspect().await.map_err(Into::into)
    }
}
