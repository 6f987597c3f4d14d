//! Vela API client

use async_trait::async_trait;
use reqwest::StatusCode;
use reqwest::header::HeaderMap;

use crate::error::Result;

#[cfg(test)]
pub mod mock;
pub mod models;
pub mod pagination;
pub mod vela;

#[cfg(test)]
pub use mock::MockVelaClient;
pub use models::{Build, Deployment, Repository};
pub use pagination::{ListOptions, PageLinks};
pub use vela::VelaClient;

/// Vela API operations used by the CLI.
///
/// Every call is a single round trip; failures are returned as-is with no retry.
#[async_trait]
pub trait VelaApi: Send + Sync {
    /// Fetch one build of a repository by build number
    async fn get_build(&self, org: &str, repo: &str, number: u64) -> Result<(Build, RawResponse)>;

    /// Fetch one deployment of a repository by id
    async fn get_deployment(
        &self,
        org: &str,
        repo: &str,
        id: u64,
    ) -> Result<(Deployment, RawResponse)>;

    /// List repositories visible to the authenticated user
    async fn list_repos(&self, opts: &ListOptions) -> Result<(Vec<Repository>, RawResponse)>;
}

/// HTTP response metadata that accompanies decoded data
#[derive(Debug, Clone, Default)]
pub struct RawResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
}

impl RawResponse {
    /// Pagination links advertised by the server
    pub fn links(&self) -> PageLinks {
        PageLinks::from_headers(&self.headers)
    }
}
