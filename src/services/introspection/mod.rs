/// Introspection error types
pub mod error;
/// Ordering and rendering of tree members
pub mod format;
/// Object tree data model
pub mod model;
/// Introspection XML document parsing
pub mod parser;
/// Introspection transport seam
pub mod transport;
/// Recursive tree walker
pub mod walker;

pub use error::IntrospectionError;
pub use format::InterfaceMember;
pub use model::{Access, Arg, DbusObject, Interface, Method, Property, Signal};
pub use transport::{BusIntrospector, Introspect};
pub use walker::{join_path, walk};
