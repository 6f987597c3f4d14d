//! Deployment commands

use clap::Args;
use log::debug;

use crate::cli::args::{GlobalOptions, ViewOutput};
use crate::cli::context::CommandContext;
use crate::cli::validate::{Requirement, Validate, flag};
use crate::client::VelaApi;
use crate::config::Config;
use crate::error::Result;
use crate::output::{self, OutputMode};

/// Arguments for `vela view deployment`
#[derive(Args, Debug, Clone, Default)]
pub struct DeploymentViewArgs {
    /// Provide the organization for the repository
    #[arg(long, env = "DEPLOYMENT_ORG", hide_env = true)]
    pub org: Option<String>,

    /// Provide the repository contained within the organization
    #[arg(long, env = "DEPLOYMENT_REPO", hide_env = true)]
    pub repo: Option<String>,

    /// Provide the deployment number
    #[arg(
        long,
        env = "DEPLOYMENT_NUMBER",
        hide_env = true,
        default_value_t = 0,
        hide_default_value = true
    )]
    pub deployment: u64,

    /// Print the output in json format
    #[arg(long, short = 'o', visible_alias = "o", value_enum, env = "DEPLOYMENT_OUTPUT", hide_env = true)]
    pub output: Option<ViewOutput>,
}

impl DeploymentViewArgs {
    /// Fill org and repo from the config file when not given
    pub fn with_defaults(mut self, config: &Config) -> Self {
        self.org = self.org.filter(|o| !o.is_empty()).or_else(|| config.org.clone());
        self.repo = self.repo.filter(|r| !r.is_empty()).or_else(|| config.repo.clone());
        self
    }
}

impl Validate for DeploymentViewArgs {
    fn required(&self) -> Vec<Requirement<'_>> {
        vec![
            flag("org", &self.org),
            flag("repo", &self.repo),
            flag("deployment", &self.deployment),
        ]
    }
}

/// Run the deployment view command
pub async fn view(opts: &GlobalOptions, args: &DeploymentViewArgs) -> Result<()> {
    let args = args.clone().with_defaults(&opts.config);
    let ctx = CommandContext::new(opts, &args)?;

    let output = fetch(&ctx.client, &args).await?;
    println!("{}", output);

    Ok(())
}

/// Fetch the deployment and render it
pub async fn fetch<A: VelaApi + ?Sized>(client: &A, args: &DeploymentViewArgs) -> Result<String> {
    let org = args.org.as_deref().unwrap_or_default();
    let repo = args.repo.as_deref().unwrap_or_default();

    debug!("Fetching deployment {}/{} {}", org, repo, args.deployment);

    let (deployment, _) = client.get_deployment(org, repo, args.deployment).await?;

    let mode = args.output.map(OutputMode::from).unwrap_or_default();
    output::render(&deployment, mode)
}
