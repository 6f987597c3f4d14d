//! Pagination helpers for API requests
//!
//! List endpoints take `page`/`per_page` query parameters and describe the
//! surrounding pages in an RFC 8288 `Link` response header.

use reqwest::Url;
use reqwest::header::{HeaderMap, LINK};

/// Default page requested when none is given
pub const DEFAULT_PAGE: u32 = 1;

/// Default number of items per page
pub const DEFAULT_PER_PAGE: u32 = 10;

/// Pagination parameters for list requests. Both values are 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListOptions {
    pub page: u32,
    pub per_page: u32,
}

impl Default for ListOptions {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            per_page: DEFAULT_PER_PAGE,
        }
    }
}

impl ListOptions {
    pub fn new(page: u32, per_page: u32) -> Self {
        Self { page, per_page }
    }

    /// Query parameters as sent on the wire
    pub fn to_query(&self) -> [(&'static str, String); 2] {
        [
            ("page", self.page.to_string()),
            ("per_page", self.per_page.to_string()),
        ]
    }
}

/// Page numbers advertised by a `Link` header
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PageLinks {
    pub first: Option<u32>,
    pub prev: Option<u32>,
    pub next: Option<u32>,
    pub last: Option<u32>,
}

impl PageLinks {
    /// Parse the `Link` header from a response, ignoring anything malformed.
    pub fn from_headers(headers: &HeaderMap) -> Self {
        headers
            .get(LINK)
            .and_then(|v| v.to_str().ok())
            .map(Self::parse)
            .unwrap_or_default()
    }

    /// Parse a raw `Link` header value.
    ///
    /// `<https://vela/api/v1/repos?page=2&per_page=10>; rel="next", ...`
    pub fn parse(value: &str) -> Self {
        let mut links = Self::default();

        for entry in value.split(',') {
            let mut parts = entry.split(';').map(str::trim);
            let Some(target) = parts
                .next()
                .and_then(|t| t.strip_prefix('<'))
                .and_then(|t| t.strip_suffix('>'))
            else {
                continue;
            };

            let rel = parts.find_map(|p| {
                p.strip_prefix("rel=")
                    .map(|r| r.trim_matches('"').to_string())
            });
            let page = page_from_url(target);

            match rel.as_deref() {
                Some("first") => links.first = page,
                Some("prev") => links.prev = page,
                Some("next") => links.next = page,
                Some("last") => links.last = page,
                _ => {}
            }
        }

        links
    }

    /// Navigation hint for the page just shown, or `None` when the server
    /// advertised no other pages.
    pub fn hint(&self, current: u32) -> Option<String> {
        let nav: Vec<String> = [
            ("first", self.first),
            ("prev", self.prev),
            ("next", self.next),
            ("last", self.last),
        ]
        .into_iter()
        .filter_map(|(rel, page)| page.map(|p| format!("{}: --page {}", rel, p)))
        .collect();

        if nav.is_empty() {
            return None;
        }

        let position = match self.last {
            Some(last) => format!("Showing page {} of {}", current, last),
            None => format!("Showing page {}", current),
        };
        Some(format!("{} ({})", position, nav.join(", ")))
    }
}

fn page_from_url(target: &str) -> Option<u32> {
    let url = Url::parse(target).ok()?;
    url.query_pairs()
        .find(|(k, _)| k == "page")
        .and_then(|(_, v)| v.parse().ok())
}
