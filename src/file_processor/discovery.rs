//! Feature file discovery and path utilities

use anyhow::{Result, bail};
use globset::{Glob, GlobSet, GlobSetBuilder};
use ignore::WalkBuilder;
use ignore::overrides::OverrideBuilder;
use ignore::types::TypesBuilder;
use std::path::Path;

use gherkinfmt_lib::config::Config;

use crate::FmtArgs;

/// Per-directory ignore file honored in addition to .gitignore
const IGNORE_FILENAME: &str = ".gherkinfmtignore";

/// Expands directory-style patterns to also match files within them.
/// Pattern "dir/path" becomes ["dir/path", "dir/path/**"].
///
/// Patterns containing glob characters (*, ?, [) are returned unchanged.
fn expand_directory_pattern(pattern: &str) -> Vec<String> {
    if pattern.contains('*') || pattern.contains('?') || pattern.contains('[') {
        return vec![pattern.to_string()];
    }

    let base = pattern.trim_end_matches('/');
    vec![base.to_string(), format!("{base}/**")]
}

fn split_patterns(list: &str) -> Vec<String> {
    list.split(',')
        .map(|p| p.trim().to_string())
        .filter(|p| !p.is_empty())
        .collect()
}

fn build_globset(patterns: &[String]) -> GlobSet {
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        match Glob::new(pattern) {
            Ok(glob) => {
                builder.add(glob);
            }
            Err(e) => log::warn!("Invalid exclude pattern '{pattern}': {e}"),
        }
    }
    builder.build().unwrap_or_else(|e| {
        log::warn!("Failed to compile exclude patterns: {e}");
        GlobSet::empty()
    })
}

fn clean_path(path: &str) -> String {
    path.strip_prefix("./").unwrap_or(path).to_string()
}

/// Path of `file` relative to `root` for pattern matching, resolving symlinks on both sides.
fn path_for_matching(file: &Path, root: Option<&Path>) -> String {
    if let Some(root) = root
        && let (Ok(canonical_file), Ok(canonical_root)) = (file.canonicalize(), root.canonicalize())
        && let Ok(relative) = canonical_file.strip_prefix(&canonical_root)
    {
        return relative.to_string_lossy().to_string();
    }
    clean_path(&file.to_string_lossy())
}

/// Collect the files `gherkinfmt fmt` should process.
///
/// Explicit file paths are always taken (unless excluded); directories are walked for
/// `*.feature` files, honoring include/exclude patterns and ignore files. Patterns are matched
/// against paths relative to `project_root`, the directory holding the config file.
pub fn find_feature_files(args: &FmtArgs, config: &Config, project_root: Option<&Path>) -> Result<Vec<String>> {
    let include_patterns = match args.include.as_deref() {
        Some(cli_include) => split_patterns(cli_include),
        None => config.global.include.clone(),
    };
    let exclude_patterns: Vec<String> = match args.exclude.as_deref() {
        Some(cli_exclude) => split_patterns(cli_exclude),
        None => config.global.exclude.clone(),
    }
    .iter()
    .flat_map(|p| expand_directory_pattern(p))
    .collect();
    let excluded = build_globset(&exclude_patterns);
    let respect_gitignore = args.respect_gitignore.unwrap_or(config.global.respect_gitignore);

    log::debug!("Include patterns: {include_patterns:?}");
    log::debug!("Exclude patterns: {exclude_patterns:?}");

    let paths = if args.paths.is_empty() {
        vec![".".to_string()]
    } else {
        args.paths.clone()
    };

    let mut file_paths = Vec::new();
    let mut walk_roots = Vec::new();

    for path_str in &paths {
        let path = Path::new(path_str);
        if !path.exists() {
            bail!("File not found: {path_str}");
        }
        if path.is_file() {
            let relative = path_for_matching(path, project_root);
            if excluded.is_match(&relative) {
                eprintln!("warning: {relative} ignored because of an exclude pattern");
            } else {
                file_paths.push(clean_path(path_str));
            }
        } else {
            walk_roots.push(path_str.as_str());
        }
    }

    if let Some((first, rest)) = walk_roots.split_first() {
        let mut walk_builder = WalkBuilder::new(first);
        for root in rest {
            walk_builder.add(root);
        }

        // With explicit include patterns the patterns decide which files are taken
        if include_patterns.is_empty() {
            let mut types_builder = TypesBuilder::new();
            types_builder.add("gherkin", "*.feature")?;
            types_builder.select("gherkin");
            walk_builder.types(types_builder.build()?);
        }

        if !include_patterns.is_empty() || !exclude_patterns.is_empty() {
            let mut override_builder = OverrideBuilder::new(project_root.unwrap_or(Path::new(".")));
            for pattern in &include_patterns {
                if let Err(e) = override_builder.add(pattern) {
                    log::warn!("Invalid include pattern '{pattern}': {e}");
                }
            }
            for pattern in &exclude_patterns {
                let exclude_rule = if pattern.starts_with('!') {
                    pattern.clone()
                } else {
                    format!("!{pattern}")
                };
                if let Err(e) = override_builder.add(&exclude_rule) {
                    log::warn!("Invalid exclude pattern '{pattern}': {e}");
                }
            }
            walk_builder.overrides(override_builder.build()?);
        }

        walk_builder.ignore(respect_gitignore);
        walk_builder.git_ignore(respect_gitignore);
        walk_builder.git_global(respect_gitignore);
        walk_builder.git_exclude(respect_gitignore);
        walk_builder.parents(respect_gitignore);
        walk_builder.require_git(false);
        walk_builder.add_custom_ignore_filename(IGNORE_FILENAME);

        for result in walk_builder.build() {
            match result {
                Ok(entry) => {
                    if entry.file_type().is_some_and(|ft| ft.is_file()) {
                        let path = entry.path();
                        // Overrides are rooted at the config directory; re-check against it
                        if !excluded.is_match(path_for_matching(path, project_root)) {
                            file_paths.push(clean_path(&path.to_string_lossy()));
                        }
                    }
                }
                Err(err) => log::warn!("Error walking directory: {err}"),
            }
        }
    }

    file_paths.sort();
    file_paths.dedup();
    Ok(file_paths)
}
