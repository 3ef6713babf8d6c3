//! Handler for the `init` command.

use colored::*;

use gherkinfmt_lib::exit_codes::exit;
use gherkinfmt_lib::init::create_default_config;

const CONFIG_FILE: &str = ".gherkinfmt.toml";

/// Write a commented default configuration to the current directory.
pub fn handle_init() {
    match create_default_config(CONFIG_FILE) {
        Ok(true) => {
            println!("Created default configuration file: {CONFIG_FILE}");
        }
        Ok(false) => {
            eprintln!(
                "{}: Configuration file {} already exists",
                "Error".red().bold(),
                CONFIG_FILE
            );
            exit::tool_error();
        }
        Err(e) => {
            eprintln!("{}: Failed to create config file: {}", "Error".red().bold(), e);
            exit::tool_error();
        }
    }
}
