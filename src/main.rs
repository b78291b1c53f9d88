#![forbid(unsafe_code)]
//! todo-to-issue Command Line Interface

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use todo_to_issue::commands::{
    execute_create, execute_init, execute_scan, CreateOptions, InitOptions, ScanOptions,
};
use todo_to_issue::config::DEFAULT_CONFIG_FILE;
use todo_to_issue::Config;

#[derive(Parser)]
#[command(name = "todo-to-issue")]
#[command(about = "Turn TODO comments into GitHub issues")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Config file path
    #[arg(short, long, global = true, default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a starter configuration file
    Init {
        /// Force overwrite existing config
        #[arg(short, long)]
        force: bool,

        /// GitHub repository (owner/name)
        #[arg(long)]
        repo: Option<String>,

        /// Skip interactive prompts
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// List TODO comments without touching the tracker
    Scan {
        /// Directory or file to scan
        #[arg(default_value = ".")]
        source: PathBuf,

        /// Output as JSON (default: human-readable)
        #[arg(long)]
        json: bool,
    },

    /// Create issues for TODO comments
    Create {
        /// Directory or file to scan
        #[arg(default_value = ".")]
        source: PathBuf,

        /// Show the issues that would be created without creating them
        #[arg(long)]
        dry_run: bool,

        /// GitHub repository (owner/name), overrides github.repo
        #[arg(long)]
        repo: Option<String>,

        /// GitHub token, overrides github.token
        #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
        token: Option<String>,

        /// Skip the confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose {
        "todo_to_issue=debug,warn"
    } else {
        "warn"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Init { force, repo, yes } => {
            let options = InitOptions {
                path: cli.config,
                force,
                repo,
                yes,
            };
            execute_init(options)?;
        }

        Commands::Scan { source, json } => {
            let config = Config::load_or_default(&cli.config)?;
            let options = ScanOptions { source, json };
            execute_scan(options, &config)?;
        }

        Commands::Create {
            source,
            dry_run,
            repo,
            token,
            yes,
        } => {
            let config = Config::load_or_default(&cli.config)?;
            let options = CreateOptions {
                source,
                dry_run,
                repo,
                token,
                yes,
            };
            execute_create(options, &config)?;
        }
    }

    Ok(())
}
