//! Repository model

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Repository enabled on the Vela server.
///
/// Every modelled field is optional so that json/yaml output carries exactly
/// what the server sent; an omitted or `null` field stays absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Repository {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub org: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// `org/name`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,

    /// Web link to the repository at the source provider
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub clone: Option<String>,

    /// Default branch
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub branch: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visibility: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub private: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trusted: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allow_pull: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allow_push: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allow_deploy: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allow_tag: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allow_comment: Option<bool>,

    /// Fields returned by the server that this client does not model
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Repository {
    /// `org/name`, derived from the parts when the server omits it
    pub fn full_name(&self) -> String {
        match self.full_name.as_deref() {
            Some(full) if !full.is_empty() => full.to_string(),
            _ => format!(
                "{}/{}",
                self.org.as_deref().unwrap_or_default(),
                self.name.as_deref().unwrap_or_default()
            ),
        }
    }

    pub fn is_active(&self) -> bool {
        self.active.unwrap_or_default()
    }

    pub fn link(&self) -> &str {
        self.link.as_deref().unwrap_or_default()
    }

    pub fn branch(&self) -> &str {
        self.branch.as_deref().unwrap_or_default()
    }

    pub fn visibility(&self) -> &str {
        self.visibility.as_deref().unwrap_or_default()
    }
}
