//! Depth-first recursive walk over a service's object hierarchy.
//!
//! Each walk starts from an empty result and returns a fresh, independently
//! owned tree; nothing is cached between invocations. Round-trips are
//! awaited one at a time, so sibling nodes are never introspected
//! concurrently. Any failure aborts the whole walk and the partially built
//! result is discarded.

use futures::future::BoxFuture;
use tracing::debug;

use super::{IntrospectionError, Introspect, model::DbusObject, parser};

/// Joins an object path with a child node name.
///
/// The root path is special: `/` + `foo` is `/foo`, not `//foo`.
pub fn join_path(parent: &str, child: &str) -> String {
    if parent == "/" {
        format!("/{child}")
    } else {
        format!("{parent}/{child}")
    }
}

/// Walks `service` from `root_path`, returning every reachable object that
/// declares at least one interface, in depth-first document order.
///
/// Paths with only child nodes and no interfaces contribute no object of
/// their own. A path already emitted is skipped, so a service reporting two
/// routes to the same path cannot produce duplicates.
///
/// # Errors
/// Returns error if any introspection round-trip fails or returns a
/// document that is not well-formed introspection XML
pub async fn walk(
    transport: &dyn Introspect,
    service: &str,
    root_path: &str,
) -> Result<Vec<DbusObject>, IntrospectionError> {
    let mut objects = Vec::new();
    walk_path(transport, service, root_path.to_string(), &mut objects).await?;
    Ok(objects)
}

fn walk_path<'a>(
    transport: &'a dyn Introspect,
    service: &'a str,
    path: String,
    objects: &'a mut Vec<DbusObject>,
) -> BoxFuture<'a, Result<(), IntrospectionError>> {
    Box::pin(async move {
        debug!(service, path = %path, "introspecting object path");

        let xml = transport.introspect(service, &path).await.map_err(|source| {
            IntrospectionError::Transport {
                service: service.to_string(),
                path: path.clone(),
                source,
            }
        })?;

        let doc =
            parser::parse_document(&xml).map_err(|source| IntrospectionError::Parse {
                service: service.to_string(),
                path: path.clone(),
                source,
            })?;

        if !doc.interfaces.is_empty() && !objects.iter().any(|o| o.path == path) {
            objects.push(DbusObject {
                path: path.clone(),
                service: service.to_string(),
                interfaces: doc.interfaces,
            });
        }

        for child in &doc.child_nodes {
            let child_path = join_path(&path, child);
            walk_path(transport, service, child_path, objects).await?;
        }

        Ok(())
    })
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use std::collections::HashMap;

    use async_trait::async_trait;

    use super::*;

    /// Transport backed by a map of path -> introspection document.
    struct MapTransport {
        docs: HashMap<&'static str, &'static str>,
    }

    #[async_trait]
    impl Introspect for MapTransport {
        async fn introspect(&self, _service: &str, path: &str) -> Result<String, zbus::Error> {
            self.docs
                .get(path)
                .map(|xml| (*xml).to_string())
                .ok_or_else(|| zbus::Error::Failure(format!("no object at {path}")))
        }
    }

    fn two_level_bus() -> MapTransport {
        MapTransport {
            docs: HashMap::from([
                (
                    "/",
                    r#"<node>
                         <node name="org"/>
                       </node>"#,
                ),
                (
                    "/org",
                    r#"<node>
                         <interface name="org.example.Root"/>
                         <node name="first"/>
                         <node name="second"/>
                       </node>"#,
                ),
                (
                    "/org/first",
                    r#"<node><interface name="org.example.First"/></node>"#,
                ),
                (
                    "/org/second",
                    r#"<node><interface name="org.example.Second"/></node>"#,
                ),
            ]),
        }
    }

    #[test]
    fn join_path_handles_root() {
        assert_eq!(join_path("/", "foo"), "/foo");
        assert_eq!(join_path("/foo", "bar"), "/foo/bar");
    }

    #[tokio::test]
    async fn walk_collects_objects_in_document_order() {
        let transport = two_level_bus();
        let objects = walk(&transport, "org.example", "/").await.unwrap();

        let paths: Vec<&str> = objects.iter().map(|o| o.path.as_str()).collect();
        assert_eq!(paths, vec!["/org", "/org/first", "/org/second"]);
        assert!(objects.iter().all(|o| o.service == "org.example"));
    }

    #[tokio::test]
    async fn interface_free_paths_produce_no_object() {
        let transport = two_level_bus();
        let objects = walk(&transport, "org.example", "/").await.unwrap();

        // "/" only declares a child node, so it contributes no object.
        assert!(objects.iter().all(|o| o.path != "/"));
    }

    #[tokio::test]
    async fn transport_failure_aborts_the_walk() {
        let transport = MapTransport {
            docs: HashMap::from([(
                "/",
                r#"<node>
                     <interface name="org.example.Root"/>
                     <node name="missing"/>
                   </node>"#,
            )]),
        };

        let err = walk(&transport, "org.example", "/").await.unwrap_err();
        assert!(matches!(err, IntrospectionError::Transport { .. }));
        assert_eq!(err.path(), "/missing");
        assert_eq!(err.service(), "org.example");
        assert!(
            err.to_string()
                .contains("failed to introspect /missing on org.example")
        );
    }

    #[tokio::test]
    async fn malformed_document_aborts_the_walk() {
        let transport = MapTransport {
            docs: HashMap::from([("/", "<node><interface name=")]),
        };

        let err = walk(&transport, "org.example", "/").await.unwrap_err();
        assert!(matches!(err, IntrospectionError::Parse { .. }));
    }

    #[tokio::test]
    async fn duplicate_paths_are_emitted_once() {
        let transport = MapTransport {
            docs: HashMap::from([
                (
                    "/",
                    r#"<node>
                         <node name="dup"/>
                         <node name="dup"/>
                       </node>"#,
                ),
                ("/dup", r#"<node><interface name="org.example.Dup"/></node>"#),
            ]),
        };

        let objects = walk(&transport, "org.example", "/").await.unwrap();
        assert_eq!(objects.len(), 1);
        assert_eq!(objects[0].path, "/dup");
    }

    #[tokio::test]
    async fn repeated_walks_yield_equal_trees() {
        let transport = two_level_bus();
        let first = walk(&transport, "org.example", "/").await.unwrap();
        let second = walk(&transport, "org.example", "/").await.unwrap();

        assert_eq!(first, second);
    }
}
