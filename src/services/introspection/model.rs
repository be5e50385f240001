use std::fmt;

use serde::Serialize;

/// Access mode of a D-Bus property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Access {
    /// Property can be read.
    Read,
    /// Property can be written.
    Write,
    /// Property can be read and written.
    ReadWrite,
    /// The document did not declare a recognizable access mode.
    Unknown,
}

impl Access {
    /// Parses the `access` attribute of a `property` element.
    ///
    /// Unrecognized values map to [`Access::Unknown`] rather than failing;
    /// a cosmetically non-conformant document should not abort a walk.
    pub fn parse(value: &str) -> Self {
        match value {
            "read" => Access::Read,
            "write" => Access::Write,
            "readwrite" => Access::ReadWrite,
            _ => Access::Unknown,
        }
    }
}

impl fmt::Display for Access {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Access::Read => write!(f, "read"),
            Access::Write => write!(f, "write"),
            Access::ReadWrite => write!(f, "readwrite"),
            Access::Unknown => write!(f, "unknown"),
        }
    }
}

/// A named and typed argument of a method or signal.
///
/// Unnamed arguments are legal on the bus; `name` is then empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Arg {
    /// Argument name, possibly empty.
    pub name: String,
    /// D-Bus type signature, possibly empty when the document omits it.
    pub ty: String,
}

impl Arg {
    /// Creates an argument.
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
        }
    }
}

/// A property declared by an interface.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Property {
    /// Property name.
    pub name: String,
    /// D-Bus type signature, `"unknown"` when the document omits it.
    pub ty: String,
    /// Declared access mode.
    pub access: Access,
}

/// A callable member of an interface.
///
/// Arguments keep their declaration order, partitioned by direction:
/// `in` (the default when unspecified) arguments land in `inputs`,
/// `out` arguments in `outputs`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Method {
    /// Method name.
    pub name: String,
    /// Input arguments in declaration order.
    pub inputs: Vec<Arg>,
    /// Output arguments in declaration order.
    pub outputs: Vec<Arg>,
}

/// A signal emitted by an interface. All arguments are outputs by convention.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Signal {
    /// Signal name.
    pub name: String,
    /// Signal arguments in declaration order.
    pub args: Vec<Arg>,
}

/// An interface implemented by exactly one object.
///
/// Owns its members outright; there are no back-references into the tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Interface {
    /// Fully qualified interface name.
    pub name: String,
    /// Properties in document order.
    pub properties: Vec<Property>,
    /// Methods in document order.
    pub methods: Vec<Method>,
    /// Signals in document order.
    pub signals: Vec<Signal>,
}

impl Interface {
    /// Creates an empty interface.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            properties: Vec::new(),
            methods: Vec::new(),
            signals: Vec::new(),
        }
    }
}

/// A reachable object path that declares at least one interface.
///
/// The owning service is stored as a plain label for display, not a live
/// reference; the whole tree is an independently owned value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DbusObject {
    /// Object path, unique within one walk of a service.
    pub path: String,
    /// Name of the service that owns this object.
    pub service: String,
    /// Interfaces in document order.
    pub interfaces: Vec<Interface>,
}
