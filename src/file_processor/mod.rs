//! File discovery and formatting for `gherkinfmt fmt`.

mod discovery;
mod processing;

pub use discovery::*;
pub use processing::*;
