/// Bus inspection commands
pub mod bus;
