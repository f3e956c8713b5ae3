//! Pagination requests and the pages they produce.

use serde::{Deserialize, Serialize};

use crate::uri::QueryParams;

/// Offset pagination request: page number (0-based), page size, and whether
/// the server should wrap the result in an envelope with totals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationInfo {
    pub page: u32,
    pub per_page: u32,
    pub include_totals: bool,
}

impl Default for PaginationInfo {
    fn default() -> Self {
        PaginationInfo {
            page: 0,
            per_page: 50,
            include_totals: false,
        }
    }
}

impl PaginationInfo {
    pub fn new(page: u32, per_page: u32, include_totals: bool) -> Self {
        Self {
            page,
            per_page,
            include_totals,
        }
    }

    /// Appends `page`, `per_page` and `include_totals`.
    pub fn add_to_params(&self, params: &mut QueryParams) {
        params
            .push("page", self.page)
            .push("per_page", self.per_page)
            .push("include_totals", self.include_totals);
    }
}

/// Checkpoint pagination request. `from` is the opaque cursor returned as
/// [`CheckpointPage::next_cursor`] by the previous page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CheckpointPaginationInfo {
    pub from: Option<String>,
    pub take: Option<u32>,
}

impl CheckpointPaginationInfo {
    pub fn new(take: u32) -> Self {
        Self {
            from: None,
            take: Some(take),
        }
    }

    pub fn with_from(mut self, from: impl Into<String>) -> Self {
        self.from = Some(from.into());
        self
    }

    /// Request for the page after `page`, or `None` when it was the last one.
    pub fn next<T>(&self, page: &CheckpointPage<T>) -> Option<Self> {
        page.next_cursor().map(|cursor| Self {
            from: Some(cursor.to_string()),
            take: self.take,
        })
    }

    /// Appends `from` and `take`, skipping whichever is unset.
    pub fn add_to_params(&self, params: &mut QueryParams) {
        params
            .push_opt("from", self.from.as_deref())
            .push_opt("take", self.take);
    }
}

/// Offset metadata reported by an envelope. A field the server did not send
/// stays `None`; it is never defaulted to zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PagingMetadata {
    pub total: Option<u64>,
    /// Page number or start offset.
    pub page: Option<u64>,
    /// Page size or limit.
    pub per_page: Option<u64>,
    /// Number of items the server says it returned.
    pub length: Option<u64>,
}

/// One page of an offset-paginated listing, in server order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page<T> {
    items: Vec<T>,
    paging: Option<PagingMetadata>,
}

impl<T> Page<T> {
    pub(crate) fn new(items: Vec<T>, paging: Option<PagingMetadata>) -> Self {
        Self { items, paging }
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn into_items(self) -> Vec<T> {
        self.items
    }

    /// Metadata, present only when the server answered with an envelope.
    pub fn paging(&self) -> Option<&PagingMetadata> {
        self.paging.as_ref()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }
}

impl<T> IntoIterator for Page<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

/// One page of a checkpoint-paginated listing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CheckpointPage<T> {
    items: Vec<T>,
    next_cursor: Option<String>,
}

impl<T> CheckpointPage<T> {
    pub(crate) fn new(items: Vec<T>, next_cursor: Option<String>) -> Self {
        Self { items, next_cursor }
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn into_items(self) -> Vec<T> {
        self.items
    }

    /// Opaque cursor for the next page; `None` on the last page.
    pub fn next_cursor(&self) -> Option<&str> {
        self.next_cursor.as_deref()
    }

    pub fn has_more(&self) -> bool {
        self.next_cursor.is_some()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }
}

impl<T> IntoIterator for CheckpointPage<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}
