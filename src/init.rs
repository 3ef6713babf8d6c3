//!
//! Initialization utilities for gherkinfmt, such as creating a default configuration file.

use std::fs;
use std::io;
use std::path::Path;
use thiserror::Error;

/// Error type for initialization operations
#[derive(Error, Debug)]
pub enum InitError {
    #[error("Failed to access file {path}: {source}")]
    IoError { source: io::Error, path: String },
}

/// Default content written by `gherkinfmt init`
pub const DEFAULT_CONFIG: &str = r##"# gherkinfmt configuration file

[global]
# Keyword language used when a feature file has no "# language:" header (en, fr)
language = "en"

# Let a leading "# language: xx" comment select the keyword language
language-header = true

# Indent with "tab" or "space"
indent-style = "tab"

# Spaces per nesting level when indent-style = "space" (1-8)
indent-width = 2

# Also align data tables attached to steps, not only Examples tables
data-tables = false

# List of file/directory patterns to include (if provided, only these will be formatted)
# include = ["features/**/*.feature"]

# List of file/directory patterns to exclude from formatting
exclude = [
    ".git",
    "node_modules",
    "target",
    "vendor",
]

# Respect .gitignore files when scanning directories (default: true)
respect-gitignore = true
"##;

/// Create a default configuration file at the specified path.
///
/// Returns `true` if the file was created, or `false` if it already exists.
///
/// # Errors
///
/// Returns an error if the file cannot be created due to permissions or other I/O errors.
pub fn create_default_config(path: &str) -> Result<bool, InitError> {
    if Path::new(path).exists() {
        return Ok(false);
    }

    fs::write(path, DEFAULT_CONFIG).map_err(|e| InitError::IoError {
        source: e,
        path: path.to_string(),
    })?;

    Ok(true)
}
