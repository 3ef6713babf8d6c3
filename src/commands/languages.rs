//! Handler for the `languages` command.

use colored::*;

use gherkinfmt_lib::catalog::{GherkinRole, Language, RoleKind, resolve_catalog_code};
use gherkinfmt_lib::exit_codes::exit;

/// List supported languages, or print every keyword of one language grouped by role.
pub fn handle_languages(code: Option<&str>) {
    let Some(code) = code else {
        println!("{}", "Supported languages:".bold());
        for language in Language::ALL {
            println!("  {} {}", format!("{:<4}", language.code()).cyan(), language.name());
        }
        return;
    };

    let catalog = match resolve_catalog_code(code) {
        Ok(catalog) => catalog,
        Err(e) => {
            eprintln!("{}: {}", "Error".red().bold(), e);
            exit::tool_error();
        }
    };

    println!("{} ({})", catalog.language().name().bold(), catalog.language().code());
    for role in GherkinRole::ALL {
        if role.kind() == RoleKind::Inline {
            continue;
        }
        let literals: Vec<String> = catalog.literals(role).iter().map(|l| format!("\"{l}\"")).collect();
        println!("  {} {}", format!("{:<18}", role.name()).cyan(), literals.join(", "));
    }
}
