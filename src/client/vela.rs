//! Vela API client implementation

use std::time::Duration;

use async_trait::async_trait;
use log::debug;
use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue};
use reqwest::{Client as HttpClient, Url};
use serde::de::DeserializeOwned;

use super::{Build, Deployment, ListOptions, RawResponse, Repository, VelaApi};
use crate::error::{ApiError, Result};

/// Request timeout applied to every call
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Vela API client bound to one server address and token
#[derive(Debug)]
pub struct VelaClient {
    http: HttpClient,
    base_url: Url,
}

impl VelaClient {
    /// Create a client for `addr`, authenticating every request with `token`.
    pub fn new(addr: &str, token: &str) -> Result<Self> {
        let construction = |reason: String| ApiError::ClientConstruction {
            addr: addr.to_string(),
            reason,
        };

        let base_url = Url::parse(addr).map_err(|e| construction(e.to_string()))?;
        if !matches!(base_url.scheme(), "http" | "https") {
            return Err(construction(format!("unsupported scheme '{}'", base_url.scheme())).into());
        }

        let mut auth = HeaderValue::from_str(&format!("Bearer {}", token))
            .map_err(|e| construction(format!("invalid token: {}", e)))?;
        auth.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, auth);

        let http = HttpClient::builder()
            .default_headers(headers)
            .timeout(REQUEST_TIMEOUT)
            .user_agent(concat!("vela-cli/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| construction(e.to_string()))?;

        Ok(Self { http, base_url })
    }

    /// Build an endpoint URL below the server address, escaping each segment.
    fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| ApiError::ClientConstruction {
                addr: self.base_url.to_string(),
                reason: "address cannot be used as a base URL".to_string(),
            })?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// Issue a GET and decode the JSON body
    async fn get<T: DeserializeOwned>(
        &self,
        url: Url,
        query: &[(&'static str, String)],
    ) -> Result<(T, RawResponse)> {
        debug!("GET {}", url);

        let response = self
            .http
            .get(url)
            .query(query)
            .send()
            .await
            .map_err(ApiError::from)?;

        let status = response.status();
        let headers = response.headers().clone();
        let body = response.text().await.map_err(ApiError::from)?;

        debug!("Response status {}", status);

        if !status.is_success() {
            return Err(ApiError::Remote {
                status: status.as_u16(),
                body,
            }
            .into());
        }

        let data = serde_json::from_str(&body)
            .map_err(|e| ApiError::Decode(format!("Failed to parse response: {}", e)))?;

        Ok((data, RawResponse { status, headers }))
    }
}

#[async_trait]
impl VelaApi for VelaClient {
    async fn get_build(&self, org: &str, repo: &str, number: u64) -> Result<(Build, RawResponse)> {
        let number = number.to_string();
        let url = self.endpoint(&["api", "v1", "repos", org, repo, "builds", &number])?;
        self.get(url, &[]).await
    }

    async fn get_deployment(
        &self,
        org: &str,
        repo: &str,
        id: u64,
    ) -> Result<(Deployment, RawResponse)> {
        let id = id.to_string();
        let url = self.endpoint(&["api", "v1", "deployments", org, repo, &id])?;
        self.get(url, &[]).await
    }

    async fn list_repos(&self, opts: &ListOptions) -> Result<(Vec<Repository>, RawResponse)> {
        let url = self.endpoint(&["api", "v1", "repos"])?;
        self.get(url, &opts.to_query()).await
    }
}
