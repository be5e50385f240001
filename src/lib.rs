//! Espy - D-Bus topology spy.
//!
//! Espy walks a named D-Bus service via recursive introspection and
//! reconstructs the tree of objects, interfaces, properties, methods and
//! signals it exposes. It also keeps a directory of the names currently
//! registered on a bus. The main features include:
//!
//! - Recursive introspection walker over any `Introspect` transport
//! - Bus name directory with live owner-change events
//! - CLI interface for browsing bus topology
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use espy::services::{common::BusType, introspection};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let transport = introspection::BusIntrospector::new(BusType::Session).await?;
//! let objects = introspection::walk(&transport, "org.freedesktop.DBus", "/").await?;
//! for object in &objects {
//!     println!("{}", object.path);
//! }
//! # Ok(())
//! # }
//! ```

/// Configuration schema definitions and path resolution.
pub mod config;

/// Core error types and result aliases.
pub mod core;

/// Command-line interface for bus inspection.
pub mod cli;

/// Bus inspection services.
pub mod services;

/// Tracing initialization.
pub mod tracing_config;

/// Re-exported core types for convenience.
pub use core::{EspyError, Result};
