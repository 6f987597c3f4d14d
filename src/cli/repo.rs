//! Repository commands

use clap::Args;
use log::{debug, info};

use crate::cli::args::{GlobalOptions, ListOutput, PaginationArgs};
use crate::cli::context::CommandContext;
use crate::cli::validate::{Requirement, Validate};
use crate::client::VelaApi;
use crate::error::Result;
use crate::output::{self, OutputMode};

/// Arguments for `vela get repo`
#[derive(Args, Debug, Clone, Default)]
pub struct RepoGetArgs {
    #[command(flatten)]
    pub pagination: PaginationArgs,

    /// Print the output in wide, yaml or json format
    #[arg(long, short = 'o', visible_alias = "o", value_enum, env = "REPO_OUTPUT", hide_env = true)]
    pub output: Option<ListOutput>,
}

impl Validate for RepoGetArgs {
    fn required(&self) -> Vec<Requirement<'_>> {
        Vec::new()
    }
}

/// Run the repo get command
pub async fn get(opts: &GlobalOptions, args: &RepoGetArgs) -> Result<()> {
    let ctx = CommandContext::new(opts, args)?;

    let output = list(&ctx.client, args).await?;
    println!("{}", output);

    Ok(())
}

/// Fetch one page of repositories and render it
pub async fn list<A: VelaApi + ?Sized>(client: &A, args: &RepoGetArgs) -> Result<String> {
    let opts = args.pagination.to_options();

    debug!(
        "Fetching repositories page {} ({} per page)",
        opts.page, opts.per_page
    );

    let (repos, raw) = client.list_repos(&opts).await?;

    debug!("Fetched {} repositories ({})", repos.len(), raw.status);

    if let Some(hint) = raw.links().hint(opts.page) {
        info!("{}", hint);
    }

    let mode = args.output.map(OutputMode::from).unwrap_or_default();
    output::render(repos.as_slice(), mode)
}
