//! Global CLI options shared across all commands

use crate::cli::Cli;
use crate::config::Config;

/// Global options resolved from flags, environment and the config file.
///
/// # Precedence
///
/// CLI flag > environment variable > config file > empty. The first two are
/// resolved by clap before this struct is built.
#[derive(Debug, Clone, Default)]
pub struct GlobalOptions {
    /// Vela server address
    pub addr: String,

    /// Bearer token for the server
    pub token: String,

    /// Loaded config file, used for per-command defaults
    pub config: Config,
}

impl GlobalOptions {
    /// Merge the parsed CLI with the loaded config file.
    pub fn new(cli: &Cli, config: Config) -> Self {
        let addr = pick(cli.addr.as_deref(), config.api.addr.as_deref());
        let token = pick(cli.token.as_deref(), config.api.token.as_deref());

        Self {
            addr,
            token,
            config,
        }
    }
}

/// First non-empty value, or empty when neither layer has one
fn pick(flag: Option<&str>, file: Option<&str>) -> String {
    flag.filter(|v| !v.is_empty())
        .or(file)
        .unwrap_or_default()
        .to_string()
}
