//! Repository display models

use tabled::Tabled;

use crate::client::Repository;
use crate::error::Result;
use crate::output::{Formattable, table};

// Event names in the order they appear in the EVENTS column
const EVENT_PUSH: &str = "push";
const EVENT_PULL: &str = "pull";
const EVENT_TAG: &str = "tag";
const EVENT_DEPLOY: &str = "deploy";
const EVENT_COMMENT: &str = "comment";

/// Comma-separated list of the events a repository accepts.
///
/// Empty when no capability flag is set.
pub fn events(repo: &Repository) -> String {
    [
        (repo.allow_push.unwrap_or_default(), EVENT_PUSH),
        (repo.allow_pull.unwrap_or_default(), EVENT_PULL),
        (repo.allow_tag.unwrap_or_default(), EVENT_TAG),
        (repo.allow_deploy.unwrap_or_default(), EVENT_DEPLOY),
        (repo.allow_comment.unwrap_or_default(), EVENT_COMMENT),
    ]
    .into_iter()
    .filter_map(|(enabled, name)| enabled.then_some(name))
    .collect::<Vec<_>>()
    .join(",")
}

/// Repository row for the default table.
#[derive(Debug, Clone, PartialEq, Tabled)]
pub struct RepoDisplay {
    #[tabled(rename = "ORG/REPO")]
    pub full_name: String,

    /// Whether the repository is active
    #[tabled(rename = "STATUS")]
    pub active: bool,

    #[tabled(rename = "EVENTS")]
    pub events: String,

    #[tabled(rename = "VISIBILITY")]
    pub visibility: String,

    #[tabled(rename = "BRANCH")]
    pub branch: String,
}

impl From<&Repository> for RepoDisplay {
    fn from(repo: &Repository) -> Self {
        Self {
            full_name: repo.full_name(),
            active: repo.is_active(),
            events: events(repo),
            visibility: repo.visibility().to_string(),
            branch: repo.branch().to_string(),
        }
    }
}

/// Repository row for the wide table: the default columns plus the remote link.
#[derive(Debug, Clone, PartialEq, Tabled)]
pub struct RepoWideDisplay {
    #[tabled(inline)]
    pub repo: RepoDisplay,

    #[tabled(rename = "REMOTE")]
    pub remote: String,
}

impl From<&Repository> for RepoWideDisplay {
    fn from(repo: &Repository) -> Self {
        Self {
            repo: RepoDisplay::from(repo),
            remote: repo.link().to_string(),
        }
    }
}

impl Formattable for [Repository] {
    fn format_default(&self) -> Result<String> {
        let rows: Vec<RepoDisplay> = self.iter().map(RepoDisplay::from).collect();
        Ok(table::format_table(&rows))
    }

    fn format_wide(&self) -> Result<String> {
        let rows: Vec<RepoWideDisplay> = self.iter().map(RepoWideDisplay::from).collect();
        Ok(table::format_table(&rows))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::table::cells;
    use crate::output::{OutputMode, render};

    fn octocat() -> Repository {
        Repository {
            id: Some(1),
            org: Some("github".to_string()),
            name: Some("octocat".to_string()),
            full_name: Some("github/octocat".to_string()),
            link: Some("https://github.com/github/octocat".to_string()),
            branch: Some("main".to_string()),
            visibility: Some("public".to_string()),
            active: Some(true),
            allow_push: Some(true),
            allow_pull: Some(true),
            ..Default::default()
        }
    }

    #[test]
    fn test_events_all_flags() {
        let repo = Repository {
            allow_push: Some(true),
            allow_pull: Some(true),
            allow_tag: Some(true),
            allow_deploy: Some(true),
            allow_comment: Some(true),
            ..Default::default()
        };

        assert_eq!(events(&repo), "push,pull,tag,deploy,comment");
    }

    #[test]
    fn test_events_no_flags() {
        assert_eq!(events(&Repository::default()), "");
    }

    #[test]
    fn test_events_keeps_fixed_order() {
        let repo = Repository {
            allow_comment: Some(true),
            allow_tag: Some(true),
            ..Default::default()
        };

        assert_eq!(events(&repo), "tag,comment");
    }

    #[test]
    fn test_repo_display_from_repository() {
        let display = RepoDisplay::from(&octocat());

        assert_eq!(display.full_name, "github/octocat");
        assert!(display.active);
        assert_eq!(display.events, "push,pull");
        assert_eq!(display.visibility, "public");
        assert_eq!(display.branch, "main");
    }

    #[test]
    fn test_default_table_row() {
        let repos = vec![octocat()];

        let output = render(repos.as_slice(), OutputMode::Default).unwrap();
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(
            cells(lines[0]),
            vec!["ORG/REPO", "STATUS", "EVENTS", "VISIBILITY", "BRANCH"]
        );
        assert_eq!(
            cells(lines[2]),
            vec!["github/octocat", "true", "push,pull", "public", "main"]
        );
    }

    #[test]
    fn test_wide_adds_remote_column() {
        let mut inactive = octocat();
        inactive.full_name = Some("github/hello-world".to_string());
        inactive.active = Some(false);
        inactive.allow_push = Some(false);
        inactive.link = Some("https://github.com/github/hello-world".to_string());
        let repos = vec![octocat(), inactive];

        let narrow = render(repos.as_slice(), OutputMode::Default).unwrap();
        let wide = render(repos.as_slice(), OutputMode::Wide).unwrap();

        for (n, w) in narrow.lines().zip(wide.lines()).filter(|(n, _)| n.contains('|')) {
            let n = cells(n);
            let w = cells(w);
            assert_eq!(w.len(), n.len() + 1);
            assert_eq!(&w[..n.len()], &n[..]);
        }

        let wide_lines: Vec<&str> = wide.lines().collect();
        assert_eq!(cells(wide_lines[0]).last().unwrap(), "REMOTE");
        assert_eq!(
            cells(wide_lines[3]).last().unwrap(),
            "https://github.com/github/hello-world"
        );
    }

    #[test]
    fn test_empty_list_renders_header_only() {
        let repos: Vec<Repository> = vec![];

        let output = render(repos.as_slice(), OutputMode::Default).unwrap();

        assert!(output.contains("ORG/REPO"));
        assert!(!output.contains("github"));
    }

    #[test]
    fn test_repo_list_json_round_trips() {
        let mut repo = octocat();
        repo.extra
            .insert("pipeline_type".to_string(), serde_json::json!("yaml"));
        let repos = vec![repo];

        let output = render(repos.as_slice(), OutputMode::Json).unwrap();
        let decoded: Vec<Repository> = serde_json::from_str(&output).unwrap();

        assert_eq!(decoded, repos);
    }

    #[test]
    fn test_sparse_repo_renders_without_invented_fields() {
        let repos: Vec<Repository> =
            serde_json::from_str(r#"[{"full_name": "github/octocat", "branch": null}]"#).unwrap();

        let table = render(repos.as_slice(), OutputMode::Default).unwrap();
        let json = render(repos.as_slice(), OutputMode::Json).unwrap();

        let row: Vec<&str> = table.lines().collect();
        assert_eq!(cells(row[2]), vec!["github/octocat", "false", "", "", ""]);
        assert!(!json.contains("branch"));
        assert!(!json.contains("active"));
    }
}
