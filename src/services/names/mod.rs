/// Name directory error types
pub mod error;
/// Name directory over a live bus
pub mod service;
/// Name grouping and event types
pub mod types;

pub use error::NamesError;
pub use service::NameDirectory;
pub use types::{NameEvent, ServiceNames};
