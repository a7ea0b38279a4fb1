//! Generic search over any stored resource.
//!
//! Normalizes the raw parameters, asks the session for one filtered and
//! sorted page, renders it and attaches navigation links that echo the
//! effective parameters back.

use crate::mappers::{render_all, Render};
use campus_core::{CampusResult, LinkBase, Links, PageInfo, SearchLinkQuery, SearchParams};
use campus_repository::Session;
use tracing::debug;

/// One rendered page plus its pagination block and links.
#[derive(Debug, Clone)]
pub struct SearchResult<O> {
    pub items: Vec<O>,
    pub info: PageInfo,
    pub links: Links,
}

/// Runs a search for `T`.
///
/// Out-of-range pages yield an empty item list with correct totals.
pub async fn search<T: Render, X: Session>(
    session: &mut X,
    params: &SearchParams,
    default_size: u64,
    base: &LinkBase,
) -> CampusResult<SearchResult<T::Output>> {
    let page = params.page_request(default_size);
    let sort = params.sort_for::<T>();
    let filter = params.filter();

    debug!(
        resource = T::NAME,
        page = page.page,
        size = page.size,
        sort = sort.field(),
        "Searching"
    );

    let found = session.search::<T>(&filter, sort, page).await?;
    let info = found.info;

    let query = SearchLinkQuery {
        q: params.query_param(),
        sort: sort.field(),
        direction: params.direction_param(),
        size: page.size,
    };
    let links = base.search_links(T::PATH, &query, &info);
    let items = render_all(found.content, session, base).await?;

    Ok(SearchResult { items, info, links })
}
