//! Ordering and rendering of tree members for display.
//!
//! Rendering templates: a method is `name(ty name, ...) -> (ty name, ...)`
//! with the arrow omitted when there are no outputs, a property is
//! `ty name (access)`, a signal is `name(ty name, ...)`. Members of an
//! expanded interface sort properties first, then methods, then signals,
//! alphabetically within each kind.

use std::cmp::Ordering;

use super::model::{Arg, Interface, Method, Property, Signal};

/// A borrowed view over any member of an interface.
///
/// The kind set is closed, so display code matches exhaustively instead of
/// dispatching dynamically.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InterfaceMember<'a> {
    /// A property member.
    Property(&'a Property),
    /// A method member.
    Method(&'a Method),
    /// A signal member.
    Signal(&'a Signal),
}

impl<'a> InterfaceMember<'a> {
    /// Member name.
    pub fn name(&self) -> &'a str {
        match self {
            InterfaceMember::Property(p) => &p.name,
            InterfaceMember::Method(m) => &m.name,
            InterfaceMember::Signal(s) => &s.name,
        }
    }

    /// Sort rank: properties above methods above signals.
    fn rank(&self) -> u8 {
        match self {
            InterfaceMember::Property(_) => 3,
            InterfaceMember::Method(_) => 2,
            InterfaceMember::Signal(_) => 1,
        }
    }

    /// Renders the member using its kind's display template.
    pub fn render(&self) -> String {
        match self {
            InterfaceMember::Property(p) => format_property(p),
            InterfaceMember::Method(m) => format_method(m),
            InterfaceMember::Signal(s) => format_signal(s),
        }
    }
}

/// Collects every member of `interface`, ordered for display: kind rank
/// descending, then case-insensitive name ascending.
pub fn sorted_members(interface: &Interface) -> Vec<InterfaceMember<'_>> {
    let mut members: Vec<InterfaceMember<'_>> = interface
        .properties
        .iter()
        .map(InterfaceMember::Property)
        .chain(interface.methods.iter().map(InterfaceMember::Method))
        .chain(interface.signals.iter().map(InterfaceMember::Signal))
        .collect();

    members.sort_by(|a, b| {
        b.rank().cmp(&a.rank()).then_with(|| compare_names(a.name(), b.name()))
    });

    members
}

/// Case-insensitive string ordering used for member and service names.
pub fn compare_names(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase())
}

/// Renders `ty name (access)`.
pub fn format_property(property: &Property) -> String {
    format!("{} {} ({})", property.ty, property.name, property.access)
}

/// Renders `name(inputs)` or `name(inputs) -> (outputs)`.
pub fn format_method(method: &Method) -> String {
    let inputs = format_args(&method.inputs);
    if method.outputs.is_empty() {
        format!("{}({})", method.name, inputs)
    } else {
        format!(
            "{}({}) -> ({})",
            method.name,
            inputs,
            format_args(&method.outputs)
        )
    }
}

/// Renders `name(args)`.
pub fn format_signal(signal: &Signal) -> String {
    format!("{}({})", signal.name, format_args(&signal.args))
}

/// Each argument renders as `ty name`, trimmed so unnamed or untyped
/// arguments leave no stray spaces.
fn format_args(args: &[Arg]) -> String {
    args.iter()
        .map(|arg| format!("{} {}", arg.ty, arg.name).trim().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
