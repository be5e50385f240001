mod names;
mod tree;
mod utils;
mod watch;

pub use names::NamesCommand;
pub use tree::TreeCommand;
pub use watch::WatchCommand;
