//! Command handlers for the gherkinfmt CLI.
//!
//! Each subcommand has its own module with a public handler function
//! that `main()` dispatches to.

pub mod completions;
pub mod fmt;
pub mod init;
pub mod languages;
pub mod server;
