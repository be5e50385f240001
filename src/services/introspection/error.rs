/// Errors that can occur while walking a service's object tree.
///
/// Any error aborts the whole walk; the caller never receives a partially
/// built tree alongside an error.
#[derive(thiserror::Error, Debug)]
pub enum IntrospectionError {
    /// The bus round-trip failed: the service is unreachable, does not
    /// exist, or does not implement `org.freedesktop.DBus.Introspectable`.
    #[error("failed to introspect {path} on {service}: {source}")]
    Transport {
        /// Service being walked
        service: String,
        /// Object path whose introspection call failed
        path: String,
        /// Underlying bus error
        #[source]
        source: zbus::Error,
    },

    /// The introspection response was not well-formed introspection XML.
    #[error("failed to parse introspection data for {path} on {service}: {source}")]
    Parse {
        /// Service being walked
        service: String,
        /// Object path whose document failed to parse
        path: String,
        /// Underlying XML error
        #[source]
        source: quick_xml::Error,
    },
}

impl IntrospectionError {
    /// Object path at which the walk failed.
    pub fn path(&self) -> &str {
        match self {
            IntrospectionError::Transport { path, .. }
            | IntrospectionError::Parse { path, .. } => path,
        }
    }

    /// Service whose walk failed.
    pub fn service(&self) -> &str {
        match self {
            IntrospectionError::Transport { service, .. }
            | IntrospectionError::Parse { service, .. } => service,
        }
    }
}
