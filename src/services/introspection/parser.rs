//! Parses one D-Bus introspection XML document.
//!
//! The standard schema is a root `node` element holding zero or more
//! `interface` elements (whose children are `property`, `method` and
//! `signal` elements, methods and signals holding `arg` elements) and zero
//! or more `node` elements naming child object paths. Anything else, such
//! as `annotation` elements, is skipped.

use quick_xml::{
    Reader,
    events::{BytesStart, Event},
};

use super::model::{Access, Arg, Interface, Method, Property, Signal};

/// Sentinel for property attributes a document fails to declare.
const UNKNOWN: &str = "unknown";

/// The parsed content of a single introspection response.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    /// Interfaces declared at this path, in document order.
    pub interfaces: Vec<Interface>,
    /// Names of child nodes to introspect beneath this path, in document order.
    pub child_nodes: Vec<String>,
}

/// Element scopes the parser distinguishes while streaming events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Scope {
    Root,
    Interface,
    Method,
    Signal,
    /// Any element we carry no state for (child node declarations,
    /// committed properties, annotations, unknown extensions).
    Other,
}

#[derive(Default)]
struct DocumentBuilder {
    doc: Document,
    interface: Option<Interface>,
    method: Option<Method>,
    signal: Option<Signal>,
}

/// Parses an introspection response into interfaces and child node names.
///
/// Missing attributes degrade rather than fail: a property without `type`
/// or `access` gets the `unknown` sentinel, an `arg` without `name` or
/// `type` gets the empty string, and a method `arg` without a `direction`
/// counts as an input.
///
/// # Errors
/// Returns error if the document is not well-formed XML
pub fn parse_document(xml: &str) -> Result<Document, quick_xml::Error> {
    let mut reader = Reader::from_str(xml);
    let mut builder = DocumentBuilder::default();
    let mut scopes: Vec<Scope> = Vec::new();

    loop {
        match reader.read_event()? {
            Event::Start(element) => {
                let scope = builder.open(&element, scopes.last().copied())?;
                scopes.push(scope);
            }
            Event::Empty(element) => {
                let scope = builder.open(&element, scopes.last().copied())?;
                builder.close(scope);
            }
            Event::End(_) => {
                if let Some(scope) = scopes.pop() {
                    builder.close(scope);
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(builder.doc)
}

impl DocumentBuilder {
    /// Handles an opening element, returning the scope it introduces.
    fn open(
        &mut self,
        element: &BytesStart<'_>,
        enclosing: Option<Scope>,
    ) -> Result<Scope, quick_xml::Error> {
        let scope = match (element.name().as_ref(), enclosing) {
            (b"node", None) => Scope::Root,
            (b"node", Some(Scope::Root)) => {
                // A nameless child node cannot be addressed, skip it.
                if let Some(name) = attr_value(element, b"name")? {
                    self.doc.child_nodes.push(name);
                }
                Scope::Other
            }
            (b"interface", Some(Scope::Root)) => {
                let name = attr_value(element, b"name")?.unwrap_or_default();
                self.interface = Some(Interface::new(name));
                Scope::Interface
            }
            (b"property", Some(Scope::Interface)) => {
                let property = Property {
                    name: attr_value(element, b"name")?.unwrap_or_default(),
                    ty: attr_value(element, b"type")?.unwrap_or_else(|| UNKNOWN.to_string()),
                    access: attr_value(element, b"access")?
                        .map_or(Access::Unknown, |a| Access::parse(&a)),
                };
                if let Some(interface) = self.interface.as_mut() {
                    interface.properties.push(property);
                }
                Scope::Other
            }
            (b"method", Some(Scope::Interface)) => {
                self.method = Some(Method {
                    name: attr_value(element, b"name")?.unwrap_or_default(),
                    inputs: Vec::new(),
                    outputs: Vec::new(),
                });
                Scope::Method
            }
            (b"signal", Some(Scope::Interface)) => {
                self.signal = Some(Signal {
                    name: attr_value(element, b"name")?.unwrap_or_default(),
                    args: Vec::new(),
                });
                Scope::Signal
            }
            (b"arg", Some(Scope::Method)) => {
                let arg = parse_arg(element)?;
                let direction = attr_value(element, b"direction")?;
                if let Some(method) = self.method.as_mut() {
                    match direction.as_deref() {
                        Some("out") => method.outputs.push(arg),
                        _ => method.inputs.push(arg),
                    }
                }
                Scope::Other
            }
            (b"arg", Some(Scope::Signal)) => {
                let arg = parse_arg(element)?;
                if let Some(signal) = self.signal.as_mut() {
                    signal.args.push(arg);
                }
                Scope::Other
            }
            _ => Scope::Other,
        };

        Ok(scope)
    }

    /// Commits the state a closing element completes.
    fn close(&mut self, scope: Scope) {
        match scope {
            Scope::Interface => {
                if let Some(interface) = self.interface.take() {
                    self.doc.interfaces.push(interface);
                }
            }
            Scope::Method => {
                if let (Some(interface), Some(method)) =
                    (self.interface.as_mut(), self.method.take())
                {
                    interface.methods.push(method);
                }
            }
            Scope::Signal => {
                if let (Some(interface), Some(signal)) =
                    (self.interface.as_mut(), self.signal.take())
                {
                    interface.signals.push(signal);
                }
            }
            Scope::Root | Scope::Other => {}
        }
    }
}

fn parse_arg(element: &BytesStart<'_>) -> Result<Arg, quick_xml::Error> {
    Ok(Arg {
        name: attr_value(element, b"name")?.unwrap_or_default(),
        ty: attr_value(element, b"type")?.unwrap_or_default(),
    })
}

fn attr_value(element: &BytesStart<'_>, key: &[u8]) -> Result<Option<String>, quick_xml::Error> {
    for attr in element.attributes() {
        let attr = attr.map_err(quick_xml::Error::InvalidAttr)?;
        if attr.key.as_ref() == key {
            return Ok(Some(attr.unescape_value()?.into_owned()));
        }
    }
    Ok(None)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn parses_interfaces_and_child_nodes() {
        let doc = parse_document(
            r#"<node>
                 <interface name="org.example.Greeter">
                   <method name="SayHello">
                     <arg name="greeting" type="s" direction="in"/>
                     <arg name="reply" type="s" direction="out"/>
                   </method>
                   <signal name="Greeted">
                     <arg name="who" type="s"/>
                   </signal>
                   <property name="Language" type="s" access="readwrite"/>
                 </interface>
                 <node name="child"/>
                 <node name="other"/>
               </node>"#,
        )
        .unwrap();

        assert_eq!(doc.child_nodes, vec!["child", "other"]);
        assert_eq!(doc.interfaces.len(), 1);

        let iface = &doc.interfaces[0];
        assert_eq!(iface.name, "org.example.Greeter");
        assert_eq!(
            iface.methods,
            vec![Method {
                name: "SayHello".to_string(),
                inputs: vec![Arg::new("greeting", "s")],
                outputs: vec![Arg::new("reply", "s")],
            }]
        );
        assert_eq!(
            iface.signals,
            vec![Signal {
                name: "Greeted".to_string(),
                args: vec![Arg::new("who", "s")],
            }]
        );
        assert_eq!(
            iface.properties,
            vec![Property {
                name: "Language".to_string(),
                ty: "s".to_string(),
                access: Access::ReadWrite,
            }]
        );
    }

    #[test]
    fn node_only_document_has_no_interfaces() {
        let doc = parse_document(r#"<node><node name="a"/><node name="b"/></node>"#).unwrap();

        assert!(doc.interfaces.is_empty());
        assert_eq!(doc.child_nodes, vec!["a", "b"]);
    }

    #[test]
    fn method_arg_without_direction_is_an_input() {
        let doc = parse_document(
            r#"<node>
                 <interface name="org.example.I">
                   <method name="M">
                     <arg name="implicit" type="i"/>
                     <arg name="explicit" type="u" direction="in"/>
                     <arg name="result" type="s" direction="out"/>
                   </method>
                 </interface>
               </node>"#,
        )
        .unwrap();

        let method = &doc.interfaces[0].methods[0];
        assert_eq!(
            method.inputs,
            vec![Arg::new("implicit", "i"), Arg::new("explicit", "u")]
        );
        assert_eq!(method.outputs, vec![Arg::new("result", "s")]);
    }

    #[test]
    fn missing_attributes_fall_back_to_defaults() {
        let doc = parse_document(
            r#"<node>
                 <interface name="org.example.I">
                   <property name="P"/>
                   <method name="M">
                     <arg type="i"/>
                     <arg name="named"/>
                   </method>
                 </interface>
               </node>"#,
        )
        .unwrap();

        let iface = &doc.interfaces[0];
        assert_eq!(iface.properties[0].ty, "unknown");
        assert_eq!(iface.properties[0].access, Access::Unknown);

        let method = &iface.methods[0];
        assert_eq!(method.inputs, vec![Arg::new("", "i"), Arg::new("named", "")]);
    }

    #[test]
    fn annotations_and_nested_nodes_are_skipped() {
        let doc = parse_document(
            r#"<node>
                 <interface name="org.example.I">
                   <method name="M">
                     <annotation name="org.freedesktop.DBus.Deprecated" value="true"/>
                   </method>
                 </interface>
                 <node name="child">
                   <interface name="org.example.Hidden"/>
                   <node name="grandchild"/>
                 </node>
               </node>"#,
        )
        .unwrap();

        // Only the direct child is recorded; its contents come from its own
        // introspection call, not this document.
        assert_eq!(doc.child_nodes, vec!["child"]);
        assert_eq!(doc.interfaces.len(), 1);
        assert_eq!(doc.interfaces[0].name, "org.example.I");
        assert!(doc.interfaces[0].methods[0].inputs.is_empty());
    }

    #[test]
    fn doctype_header_is_accepted() {
        let doc = parse_document(
            r#"<!DOCTYPE node PUBLIC "-//freedesktop//DTD D-BUS Object Introspection 1.0//EN"
                 "http://www.freedesktop.org/standards/dbus/1.0/introspect.dtd">
               <node>
                 <interface name="org.example.I"/>
               </node>"#,
        )
        .unwrap();

        assert_eq!(doc.interfaces.len(), 1);
    }

    #[test]
    fn malformed_document_is_an_error() {
        assert!(parse_document("<node><interface name=").is_err());
        assert!(parse_document("<node></interface>").is_err());
    }

    #[test]
    fn nameless_child_node_is_skipped() {
        let doc = parse_document(r#"<node><node/><node name="ok"/></node>"#).unwrap();

        assert_eq!(doc.child_nodes, vec!["ok"]);
    }
}
