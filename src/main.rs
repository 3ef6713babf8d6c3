use clap::{Parser, Subcommand};
use clap_complete::Shell;

use gherkinfmt_lib::exit_codes::exit;

mod cli_types;
mod commands;
mod file_processor;
mod formatter;
mod stdin_processor;

pub use cli_types::FmtArgs;

#[derive(Parser)]
#[command(name = "gherkinfmt", author, version, about = "A formatter for Gherkin feature files", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Configuration file path
    #[arg(short, long, global = true)]
    config: Option<String>,

    /// Ignore all configuration files and use built-in defaults
    #[arg(long, global = true)]
    no_config: bool,

    /// Show detailed output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Format feature files in place
    Fmt(FmtArgs),
    /// Create a default configuration file
    Init,
    /// Start the Language Server Protocol server
    Server {
        /// TCP port to listen on (for debugging)
        #[arg(long)]
        port: Option<u16>,
        /// Use stdio for communication (default)
        #[arg(long)]
        stdio: bool,
    },
    /// List supported keyword languages, or show the keywords of one
    Languages {
        /// Language code to show keywords for
        code: Option<String>,
    },
    /// Generate shell completion scripts
    Completions {
        /// Shell to generate completions for (detected from $SHELL if omitted)
        #[arg(value_enum)]
        shell: Option<Shell>,
        /// List available shells
        #[arg(long)]
        list: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    let mut logger = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if cli.verbose {
        logger.filter_level(log::LevelFilter::Debug);
    }
    logger.init();

    match cli.command {
        Commands::Fmt(ref args) => {
            commands::fmt::handle_fmt(args, cli.config.as_deref(), cli.no_config, cli.verbose);
        }
        Commands::Init => commands::init::handle_init(),
        Commands::Server { port, stdio } => commands::server::handle_server(port, stdio, cli.config),
        Commands::Languages { ref code } => commands::languages::handle_languages(code.as_deref()),
        Commands::Completions { shell, list } => commands::completions::handle_completions(shell, list),
    }

    exit::success();
}
