/// Shared service types.
pub mod common;
/// Recursive introspection walker and object tree model.
pub mod introspection;
/// Bus name directory and owner-change events.
pub mod names;
