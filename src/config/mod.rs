//!
//! Configuration structures and loading for gherkinfmt.
//! Settings live in a TOML file discovered by walking up from the working directory.

mod loading;
pub mod types;

pub use loading::CONFIG_FILES;
pub use types::*;
