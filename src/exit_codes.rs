/// Exit codes for gherkinfmt, following rustfmt's `--check` convention
///
/// These exit codes allow users and CI/CD systems to distinguish between
/// "files need formatting" and "the tool could not run".
/// Success - Everything formatted (or already formatted)
pub const SUCCESS: i32 = 0;

/// Unformatted files found - `--check` saw at least one file that would change
pub const UNFORMATTED: i32 = 1;

/// Tool error - Configuration error, invalid language, file access error
pub const TOOL_ERROR: i32 = 2;

/// Helper functions for consistent exit behavior
pub mod exit {
    use super::{SUCCESS, TOOL_ERROR, UNFORMATTED};

    /// Exit with success code (0)
    pub fn success() -> ! {
        std::process::exit(SUCCESS);
    }

    /// Exit with unformatted-files code (1)
    pub fn unformatted() -> ! {
        std::process::exit(UNFORMATTED);
    }

    /// Exit with tool error code (2)
    pub fn tool_error() -> ! {
        std::process::exit(TOOL_ERROR);
    }
}
