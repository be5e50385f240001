mod types;

pub use types::BusType;
