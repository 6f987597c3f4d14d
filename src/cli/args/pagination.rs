//! Pagination argument types for CLI commands

use clap::Args;

use crate::client::ListOptions;
use crate::client::pagination::{DEFAULT_PAGE, DEFAULT_PER_PAGE};

/// Shared pagination arguments for list commands.
///
/// Flatten this into any command that supports pagination:
/// ```ignore
/// Repo {
///     #[command(flatten)]
///     pagination: PaginationArgs,
/// }
/// ```
#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct PaginationArgs {
    /// Print a specific page of results
    #[arg(
        long,
        visible_alias = "p",
        env = "VELA_PAGE",
        hide_env = true,
        default_value_t = DEFAULT_PAGE,
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    pub page: u32,

    /// Expand the number of items contained within page
    #[arg(
        long = "per-page",
        visible_alias = "pp",
        env = "VELA_PER_PAGE",
        hide_env = true,
        default_value_t = DEFAULT_PER_PAGE,
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    pub per_page: u32,
}

impl Default for PaginationArgs {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            per_page: DEFAULT_PER_PAGE,
        }
    }
}

impl PaginationArgs {
    /// Convert CLI args to API list options, unchanged.
    pub fn to_options(&self) -> ListOptions {
        ListOptions::new(self.page, self.per_page)
    }
}
