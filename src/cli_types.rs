use clap::Args;

#[derive(Args, Debug, Default)]
pub struct FmtArgs {
    /// Files or directories to format (use '-' for stdin)
    #[arg(required = false)]
    pub paths: Vec<String>,

    /// Exit with code 1 if any file would be reformatted, without writing anything
    #[arg(long, help = "Exit with code 1 if any formatting changes would be made (for CI)")]
    pub check: bool,

    /// Show diff of what would change instead of writing files
    #[arg(long, help = "Show diff of what would change instead of writing files")]
    pub diff: bool,

    /// Keyword language for files without a `# language:` header (en, fr)
    #[arg(short, long)]
    pub language: Option<String>,

    /// Exclude specific files or directories (comma-separated glob patterns)
    #[arg(long)]
    pub exclude: Option<String>,

    /// Include only specific files or directories (comma-separated glob patterns)
    #[arg(long)]
    pub include: Option<String>,

    /// Respect .gitignore files when scanning directories
    /// When not specified, uses config file value (default: true)
    #[arg(
        long,
        num_args(0..=1),
        require_equals(true),
        default_missing_value = "true",
        help = "Respect .gitignore files when scanning directories (does not apply to explicitly provided paths)"
    )]
    pub respect_gitignore: Option<bool>,

    /// Filename to use for stdin input (for context and error messages)
    #[arg(long, help = "Filename to use when reading from stdin (e.g., login.feature)")]
    pub stdin_filename: Option<String>,

    /// Print nothing but errors
    #[arg(short, long)]
    pub quiet: bool,
}

impl FmtArgs {
    /// Formatting reads stdin when the only path is `-`
    pub fn reads_stdin(&self) -> bool {
        self.paths.len() == 1 && self.paths[0] == "-"
    }
}
