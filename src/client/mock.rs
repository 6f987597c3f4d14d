//! Mock Vela API client for testing
//!
//! Provides a mock implementation of [`VelaApi`] for unit testing command
//! handlers without making real API calls.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::Mutex;

use super::{Build, Deployment, ListOptions, RawResponse, Repository, VelaApi};
use crate::error::{ApiError, Result};

/// A call observed by the mock, for test assertions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CapturedRequest {
    GetBuild {
        org: String,
        repo: String,
        number: u64,
    },
    GetDeployment {
        org: String,
        repo: String,
        id: u64,
    },
    ListRepos(ListOptions),
}

/// Mock API client for testing.
///
/// Configure expected responses via builder methods, then use in tests.
///
/// # Example
/// ```ignore
/// let mock = MockVelaClient::new().with_repos(vec![repo]);
/// let (repos, _) = mock.list_repos(&ListOptions::default()).await?;
/// assert_eq!(repos.len(), 1);
/// ```
#[derive(Default)]
pub struct MockVelaClient {
    build: Arc<Mutex<Option<Build>>>,
    deployment: Arc<Mutex<Option<Deployment>>>,
    repos: Arc<Mutex<Vec<Repository>>>,
    /// Error to return (if any) - consumed on first use
    error: Arc<Mutex<Option<ApiError>>>,
    captured_requests: Arc<Mutex<Vec<CapturedRequest>>>,
}

impl MockVelaClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_build(self, build: Build) -> Self {
        *self.build.try_lock().expect("mock not shared yet") = Some(build);
        self
    }

    pub fn with_deployment(self, deployment: Deployment) -> Self {
        *self.deployment.try_lock().expect("mock not shared yet") = Some(deployment);
        self
    }

    pub fn with_repos(self, repos: Vec<Repository>) -> Self {
        *self.repos.try_lock().expect("mock not shared yet") = repos;
        self
    }

    /// Make the next call fail with `error`
    pub fn with_error(self, error: ApiError) -> Self {
        *self.error.try_lock().expect("mock not shared yet") = Some(error);
        self
    }

    /// Requests seen so far, in call order
    pub async fn captured_requests(&self) -> Vec<CapturedRequest> {
        self.captured_requests.lock().await.clone()
    }

    async fn record(&self, request: CapturedRequest) -> Result<()> {
        self.captured_requests.lock().await.push(request);
        match self.error.lock().await.take() {
            Some(err) => Err(err.into()),
            None => Ok(()),
        }
    }

    fn not_found(what: &str) -> ApiError {
        ApiError::Remote {
            status: 404,
            body: format!("{} not found", what),
        }
    }
}

#[async_trait]
impl VelaApi for MockVelaClient {
    async fn get_build(&self, org: &str, repo: &str, number: u64) -> Result<(Build, RawResponse)> {
        self.record(CapturedRequest::GetBuild {
            org: org.to_string(),
            repo: repo.to_string(),
            number,
        })
        .await?;

        let build = self.build.lock().await.clone();
        let build = build.ok_or_else(|| Self::not_found("build"))?;
        Ok((build, RawResponse::default()))
    }

    async fn get_deployment(
        &self,
        org: &str,
        repo: &str,
        id: u64,
    ) -> Result<(Deployment, RawResponse)> {
        self.record(CapturedRequest::GetDeployment {
            org: org.to_string(),
            repo: repo.to_string(),
            id,
        })
        .await?;

        let deployment = self.deployment.lock().await.clone();
        let deployment = deployment.ok_or_else(|| Self::not_found("deployment"))?;
        Ok((deployment, RawResponse::default()))
    }

    async fn list_repos(&self, opts: &ListOptions) -> Result<(Vec<Repository>, RawResponse)> {
        self.record(CapturedRequest::ListRepos(*opts)).await?;

        let repos = self.repos.lock().await.clone();
        Ok((repos, RawResponse::default()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[tokio::test]
    async fn test_mock_returns_configured_repos() {
        let mock = MockVelaClient::new().with_repos(vec![Repository::default()]);

        let (repos, raw) = mock.list_repos(&ListOptions::default()).await.unwrap();

        assert_eq!(repos.len(), 1);
        assert!(raw.status.is_success());
    }

    #[tokio::test]
    async fn test_mock_error_is_consumed_once() {
        let mock = MockVelaClient::new().with_error(ApiError::Network("down".to_string()));

        let first = mock.list_repos(&ListOptions::default()).await;
        let second = mock.list_repos(&ListOptions::default()).await;

        assert!(matches!(first, Err(Error::Api(ApiError::Network(_)))));
        assert!(second.is_ok());
    }

    #[tokio::test]
    async fn test_mock_missing_build_is_not_found() {
        let mock = MockVelaClient::new();

        let err = mock.get_build("github", "octocat", 1).await.unwrap_err();

        assert!(matches!(
            err,
            Error::Api(ApiError::Remote { status: 404, .. })
        ));
    }
}
