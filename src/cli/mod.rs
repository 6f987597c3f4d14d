//! CLI command definitions and handlers

use clap::{Parser, Subcommand};
pub use clap_complete::Shell;

pub mod args;
pub mod build;
pub mod completions;
pub mod context;
pub mod deployment;
pub mod repo;
pub mod validate;

pub use args::GlobalOptions;
use build::BuildViewArgs;
use deployment::DeploymentViewArgs;
use repo::RepoGetArgs;

/// Command-line client for the Vela build orchestration service
#[derive(Parser, Debug)]
#[command(name = "vela")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Vela server address
    #[arg(long, global = true, env = "VELA_ADDR", hide_env = true)]
    pub addr: Option<String>,

    /// Token used to authenticate with the server
    #[arg(long, global = true, env = "VELA_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Override config file location (default ~/.vela/config.yml)
    #[arg(long, global = true, env = "VELA_CONFIG", hide_env = true)]
    pub config: Option<String>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long = "log-level", global = true, env = "VELA_LOG_LEVEL", hide_env = true)]
    pub log_level: Option<String>,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Get a list of resources
    #[command(subcommand)]
    Get(GetCommands),

    /// View details of a resource
    #[command(subcommand)]
    View(ViewCommands),

    /// Generate shell completions
    #[command(after_help = "\
EXAMPLES:
  bash:   vela completion bash > /etc/bash_completion.d/vela
  zsh:    vela completion zsh > \"${fpath[1]}/_vela\"
  fish:   vela completion fish > ~/.config/fish/completions/vela.fish")]
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },

    /// Display version information
    Version,
}

/// List subcommands
#[derive(Subcommand, Debug)]
pub enum GetCommands {
    /// Display a list of repositories
    #[command(
        visible_alias = "repos",
        after_help = "EXAMPLES:\n  \
            vela get repo                    # Get repositories\n  \
            vela get repo --output wide      # Wide view\n  \
            vela get repo --output yaml      # YAML output\n  \
            vela get repo --output json      # JSON output\n  \
            vela get repo --page 2 --pp 20   # Second page of 20"
    )]
    Repo(RepoGetArgs),
}

/// View subcommands
#[derive(Subcommand, Debug)]
pub enum ViewCommands {
    /// View details of the provided build
    #[command(after_help = "EXAMPLES:\n  \
            vela view build --org github --repo octocat --build-number 1\n  \
            vela view build --org github --repo octocat --build-number 1 --output json\n  \
            vela view build --build-number 1   # org and repo from config or env")]
    Build(BuildViewArgs),

    /// View details of the provided deployment
    #[command(after_help = "EXAMPLES:\n  \
            vela view deployment --org github --repo octocat --deployment 1\n  \
            vela view deployment --org github --repo octocat --deployment 1 --output json\n  \
            vela view deployment --deployment 1   # org and repo from config or env")]
    Deployment(DeploymentViewArgs),
}
