//! Build model

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A single pipeline execution for a repository
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Build {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repo_id: Option<i64>,

    /// Build number, unique within the repository
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub number: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent: Option<i64>,

    /// Event that triggered the build (push, pull_request, tag, ...)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event: Option<String>,

    /// Build status (pending, running, success, failure, killed, error)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,

    /// Unix timestamps (seconds)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enqueued: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub started: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub finished: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deploy: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub clone: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    /// Commit SHA the build ran against
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub commit: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sender: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub branch: Option<String>,

    #[serde(default, rename = "ref", skip_serializing_if = "Option::is_none")]
    pub git_ref: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_ref: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub runtime: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distribution: Option<String>,

    /// Fields returned by the server that this client does not model
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
