//! Hypermedia link construction.
//!
//! Every representation carries a `_links` map of absolute URIs. Entity
//! links are `self`, `all`, `delete`, `update` and `search`; search pages
//! add `first`, `last`, the conditional `prev` and `next`, and a link to
//! the unfiltered collection keyed by the resource's plural path.

use crate::{CampusError, CampusResult, PageInfo};
use std::collections::BTreeMap;
use std::fmt::{self, Display};
use url::{form_urlencoded, Url};

/// Named links embedded in a response body.
pub type Links = BTreeMap<String, String>;

/// Validated absolute base URI that all links are built from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkBase(String);

impl LinkBase {
    /// Parses an absolute base URI such as `http://localhost:8080/`.
    pub fn parse(raw: &str) -> CampusResult<Self> {
        let url = Url::parse(raw)
            .map_err(|e| CampusError::validation(format!("Invalid base URI '{}': {}", raw, e)))?;

        if url.cannot_be_a_base() {
            return Err(CampusError::validation(format!(
                "Base URI '{}' cannot hold paths",
                raw
            )));
        }

        Ok(Self(url.as_str().trim_end_matches('/').to_string()))
    }

    /// The base without a trailing slash.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// `{base}/{path}`
    #[must_use]
    pub fn collection(&self, path: &str) -> String {
        format!("{}/{}", self.0, path)
    }

    /// `{base}/{path}/{id}`
    #[must_use]
    pub fn member(&self, path: &str, id: impl Display) -> String {
        format!("{}/{}/{}", self.0, path, id)
    }

    /// `{base}/{path}/search`
    #[must_use]
    pub fn search(&self, path: &str) -> String {
        format!("{}/{}/search", self.0, path)
    }

    /// The five links every entity representation carries.
    #[must_use]
    pub fn entity_links(&self, path: &str, id: impl Display) -> Links {
        let member = self.member(path, id);
        let mut links = Links::new();
        links.insert("self".to_string(), member.clone());
        links.insert("all".to_string(), self.collection(path));
        links.insert("delete".to_string(), member.clone());
        links.insert("update".to_string(), member);
        links.insert("search".to_string(), self.search(path));
        links
    }

    /// Navigation links for one page of search results.
    #[must_use]
    pub fn search_links(&self, path: &str, query: &SearchLinkQuery<'_>, info: &PageInfo) -> Links {
        let search = self.search(path);
        let at = |page: u64| format!("{}?{}", search, query.encode(page));

        let mut links = Links::new();
        links.insert("self".to_string(), at(info.page));
        links.insert("first".to_string(), at(1));
        links.insert("last".to_string(), at(info.total_pages));
        if info.has_previous() {
            links.insert("prev".to_string(), at(info.page - 1));
        }
        if info.has_next() {
            links.insert("next".to_string(), at(info.page + 1));
        }
        links.insert(path.to_string(), self.collection(path));
        links
    }
}

impl Display for LinkBase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Query parameters echoed into every search navigation link.
#[derive(Debug, Clone, Copy)]
pub struct SearchLinkQuery<'a> {
    /// Free-text query; omitted from links when absent or blank.
    pub q: Option<&'a str>,
    /// Resolved sort field.
    pub sort: &'a str,
    /// Direction as the caller sent it.
    pub direction: &'a str,
    /// Normalized page size.
    pub size: u64,
}

impl SearchLinkQuery<'_> {
    /// `q=..&sort=..&direction=..&size=..&page=..`, form-encoded.
    fn encode(&self, page: u64) -> String {
        let mut serializer = form_urlencoded::Serializer::new(String::new());
        if let Some(q) = self.q.filter(|q| !q.trim().is_empty()) {
            serializer.append_pair("q", q);
        }
        serializer
            .append_pair("sort", self.sort)
            .append_pair("direction", self.direction)
            .append_pair("size", &self.size.to_string())
            .append_pair("page", &page.to_string());
        serializer.finish()
    }
}
