/// Errors that can occur while querying the bus name directory.
#[derive(thiserror::Error, Debug)]
pub enum NamesError {
    /// D-Bus communication error.
    #[error("D-Bus operation failed: {0}")]
    Dbus(#[from] zbus::Error),
}
