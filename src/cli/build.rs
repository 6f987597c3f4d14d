//! Build commands

use clap::Args;
use log::debug;

use crate::cli::args::{GlobalOptions, ViewOutput};
use crate::cli::context::CommandContext;
use crate::cli::validate::{Requirement, Validate, flag};
use crate::client::VelaApi;
use crate::config::Config;
use crate::error::Result;
use crate::output::{self, OutputMode};

/// Arguments for `vela view build`
#[derive(Args, Debug, Clone, Default)]
pub struct BuildViewArgs {
    /// Provide the organization for the repository
    #[arg(long, env = "BUILD_ORG", hide_env = true)]
    pub org: Option<String>,

    /// Provide the repository contained within the organization
    #[arg(long, env = "BUILD_REPO", hide_env = true)]
    pub repo: Option<String>,

    /// Provide the build number
    #[arg(
        long = "build-number",
        visible_aliases = ["build", "b"],
        env = "BUILD_NUMBER",
        hide_env = true,
        default_value_t = 0,
        hide_default_value = true
    )]
    pub build_number: u64,

    /// Print the output in json format
    #[arg(long, short = 'o', visible_alias = "o", value_enum, env = "BUILD_OUTPUT", hide_env = true)]
    pub output: Option<ViewOutput>,
}

impl BuildViewArgs {
    /// Fill org and repo from the config file when not given
    pub fn with_defaults(mut self, config: &Config) -> Self {
        self.org = self.org.filter(|o| !o.is_empty()).or_else(|| config.org.clone());
        self.repo = self.repo.filter(|r| !r.is_empty()).or_else(|| config.repo.clone());
        self
    }
}

impl Validate for BuildViewArgs {
    fn required(&self) -> Vec<Requirement<'_>> {
        vec![
            flag("org", &self.org),
            flag("repo", &self.repo),
            flag("build-number", &self.build_number),
        ]
    }
}

/// Run the build view command
pub async fn view(opts: &GlobalOptions, args: &BuildViewArgs) -> Result<()> {
    let args = args.clone().with_defaults(&opts.config);
    let ctx = CommandContext::new(opts, &args)?;

    let output = fetch(&ctx.client, &args).await?;
    println!("{}", output);

    Ok(())
}

/// Fetch the build and render it
pub async fn fetch<A: VelaApi + ?Sized>(client: &A, args: &BuildViewArgs) -> Result<String> {
    let org = args.org.as_deref().unwrap_or_default();
    let repo = args.repo.as_deref().unwrap_or_default();

    debug!("Fetching build {}/{}#{}", org, repo, args.build_number);

    let (build, _) = client.get_build(org, repo, args.build_number).await?;

    let mode = args.output.map(OutputMode::from).unwrap_or_default();
    output::render(&build, mode)
}
