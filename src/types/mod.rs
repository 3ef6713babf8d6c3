//! Type-safe value types for gherkinfmt.
//!
//! Newtype wrappers that enforce constraints on indentation values at both
//! construction time and when deserialized from configuration.

mod indent_level;
mod indent_size;

pub use indent_level::IndentLevel;
pub use indent_size::{IndentSize, IndentSizeError};
