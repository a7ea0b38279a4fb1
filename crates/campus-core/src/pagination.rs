//! Pagination types for search operations.
//!
//! Pages are 1-based on the wire. Requests are normalized rather than
//! rejected: a page below 1 becomes 1 and a size below 1 becomes 1. Any
//! positive size is honored as sent.

use serde::{Deserialize, Serialize};

/// A request for a page of results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    /// The page number (1-indexed).
    pub page: u64,
    /// The number of items per page.
    pub size: u64,
}

impl PageRequest {
    /// The default page number.
    pub const DEFAULT_PAGE: u64 = 1;
    /// The default page size.
    pub const DEFAULT_SIZE: u64 = 10;

    /// Creates a normalized page request from raw query values.
    #[must_use]
    pub fn new(page: i64, size: i64) -> Self {
        let page = u64::try_from(page).unwrap_or(0).max(1);
        let size = u64::try_from(size).unwrap_or(0).max(1);
        Self { page, size }
    }

    /// Creates a page request for the first page with default size.
    #[must_use]
    pub const fn first() -> Self {
        Self {
            page: Self::DEFAULT_PAGE,
            size: Self::DEFAULT_SIZE,
        }
    }

    /// Returns the offset for database queries.
    #[must_use]
    pub const fn offset(&self) -> u64 {
        self.page.saturating_sub(1) * self.size
    }

    /// Returns the limit for database queries.
    #[must_use]
    pub const fn limit(&self) -> u64 {
        self.size
    }

    /// Number of pages needed to hold `total_elements` items.
    #[must_use]
    pub const fn total_pages(&self, total_elements: u64) -> u64 {
        total_elements.div_ceil(self.size)
    }

    /// Takes this request's window out of an already filtered and sorted list.
    #[must_use]
    pub fn slice<T>(&self, items: Vec<T>) -> Vec<T> {
        let offset = usize::try_from(self.offset()).unwrap_or(usize::MAX);
        let limit = usize::try_from(self.limit()).unwrap_or(usize::MAX);
        items.into_iter().skip(offset).take(limit).collect()
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::first()
    }
}

/// Pagination metadata rendered alongside search results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    /// The current page number (1-indexed).
    pub page: u64,
    /// The number of items per page.
    pub size: u64,
    /// The total number of matching items across all pages.
    pub total_elements: u64,
    /// The total number of pages.
    pub total_pages: u64,
}

impl PageInfo {
    /// Creates page info for a request and a total match count.
    #[must_use]
    pub const fn new(request: PageRequest, total_elements: u64) -> Self {
        Self {
            page: request.page,
            size: request.size,
            total_elements,
            total_pages: request.total_pages(total_elements),
        }
    }

    /// Returns true if there is a next page.
    #[must_use]
    pub const fn has_next(&self) -> bool {
        self.page < self.total_pages
    }

    /// Returns true if there is a previous page.
    #[must_use]
    pub const fn has_previous(&self) -> bool {
        self.page > 1
    }
}

/// A page of results.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page<T> {
    /// The items on this page.
    pub content: Vec<T>,
    /// Information about this page.
    pub info: PageInfo,
}

impl<T> Page<T> {
    /// Creates a new page.
    #[must_use]
    pub const fn new(content: Vec<T>, request: PageRequest, total_elements: u64) -> Self {
        Self {
            content,
            info: PageInfo::new(request, total_elements),
        }
    }

    /// Creates an empty page.
    #[must_use]
    pub const fn empty(request: PageRequest) -> Self {
        Self::new(Vec::new(), request, 0)
    }

    /// Maps the page content to a different type.
    #[must_use]
    pub fn map<U, F: FnMut(T) -> U>(self, f: F) -> Page<U> {
        Page {
            content: self.content.into_iter().map(f).collect(),
            info: self.info,
        }
    }

    /// Returns true if the page is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// Returns the number of items on this page.
    #[must_use]
    pub fn len(&self) -> usize {
        self.content.len()
    }

    /// Returns the total number of elements across all pages.
    #[must_use]
    pub const fn total_elements(&self) -> u64 {
        self.info.total_elements
    }

    /// Returns the total number of pages.
    #[must_use]
    pub const fn total_pages(&self) -> u64 {
        self.info.total_pages
    }
}

impl<T> IntoIterator for Page<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.content.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_request_offset() {
        let req = PageRequest::new(3, 10);
        assert_eq!(req.offset(), 20);
        assert_eq!(req.limit(), 10);
    }

    #[test]
    fn test_page_zero_and_negative_behave_like_first_page() {
        assert_eq!(PageRequest::new(0, 10), PageRequest::new(1, 10));
        assert_eq!(PageRequest::new(-4, 10), PageRequest::new(1, 10));
        assert_eq!(PageRequest::new(0, 10).offset(), 0);
    }

    #[test]
    fn test_page_request_size_below_one_becomes_one() {
        assert_eq!(PageRequest::new(1, 0).size, 1);
        assert_eq!(PageRequest::new(1, -3).size, 1);
    }

    #[test]
    fn test_large_size_is_kept() {
        let req = PageRequest::new(1, 150);
        assert_eq!(req.size, 150);
        assert_eq!(req.total_pages(120), 1);
        assert_eq!(req.slice((1..=120).collect::<Vec<u32>>()).len(), 120);
        assert!(!PageInfo::new(req, 120).has_next());
    }

    #[test]
    fn test_page_request_first() {
        let req = PageRequest::default();
        assert_eq!(req.page, 1);
        assert_eq!(req.size, 10);
        assert_eq!(req.offset(), 0);
    }

    #[test]
    fn test_total_pages_is_ceiling() {
        let req = PageRequest::new(1, 5);
        assert_eq!(req.total_pages(0), 0);
        assert_eq!(req.total_pages(1), 1);
        assert_eq!(req.total_pages(5), 1);
        assert_eq!(req.total_pages(11), 3);
        assert_eq!(PageRequest::new(1, 10).total_pages(25), 3);
    }

    #[test]
    fn test_slice_takes_window() {
        let items: Vec<u32> = (1..=25).collect();
        assert_eq!(PageRequest::new(3, 10).slice(items.clone()), vec![21, 22, 23, 24, 25]);
        assert_eq!(PageRequest::new(1, 2).slice(items.clone()), vec![1, 2]);
        assert!(PageRequest::new(4, 10).slice(items).is_empty());
    }

    #[test]
    fn test_page_info_navigation() {
        let first = PageInfo::new(PageRequest::new(1, 10), 25);
        assert_eq!(first.total_pages, 3);
        assert!(first.has_next());
        assert!(!first.has_previous());

        let last = PageInfo::new(PageRequest::new(3, 10), 25);
        assert!(!last.has_next());
        assert!(last.has_previous());
    }

    #[test]
    fn test_page_info_serializes_camel_case() {
        let info = PageInfo::new(PageRequest::new(2, 10), 11);
        let json = serde_json::to_value(info).unwrap();
        assert_eq!(json["page"], 2);
        assert_eq!(json["totalElements"], 11);
        assert_eq!(json["totalPages"], 2);
    }

    #[test]
    fn test_page_map() {
        let page = Page::new(vec![1, 2, 3], PageRequest::first(), 3);
        let mapped = page.map(|x| x * 2);
        assert_eq!(mapped.content, vec![2, 4, 6]);
        assert_eq!(mapped.total_elements(), 3);
    }

    #[test]
    fn test_page_empty() {
        let page: Page<i32> = Page::empty(PageRequest::first());
        assert!(page.is_empty());
        assert_eq!(page.len(), 0);
        assert_eq!(page.total_pages(), 0);
    }
}
