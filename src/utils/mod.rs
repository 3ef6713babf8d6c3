//! Shared text utilities.

pub mod line_ending;

pub use line_ending::{BOM, SplitLines, split_lines};
