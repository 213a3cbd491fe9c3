//! Query parameter composition for paginated listings.

use crate::entity::Entity;
use crate::error::{Error, InvalidInputError};

/// A request for one page of a listing.
///
/// `per_page` is fixed for the lifetime of a screen; `page` starts at 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: u32,
    per_page: u32,
}

impl PageRequest {
    /// Create a page request. `page` values below 1 are treated as 1.
    ///
    /// # Errors
    ///
    /// Returns an error when `per_page` is zero.
    pub fn new(page: u32, per_page: u32) -> Result<Self, Error> {
        if per_page == 0 {
            return Err(InvalidInputError::PageSize.into());
        }
        Ok(Self { page: page.max(1), per_page })
    }

    /// The first page at the given page size.
    pub fn first(per_page: u32) -> Result<Self, Error> {
        Self::new(1, per_page)
    }

    /// Current page number, 1-based.
    pub fn page(&self) -> u32 {
        self.page
    }

    /// Page size.
    pub fn per_page(&self) -> u32 {
        self.per_page
    }

    /// Same page size, different page number.
    pub fn with_page(&self, page: u32) -> Self {
        Self { page: page.max(1), per_page: self.per_page }
    }

    /// Zero-based offset of the first row on this page.
    pub fn offset(&self) -> u64 {
        (self.page as u64 - 1) * self.per_page as u64
    }

    /// Inclusive zero-based item range `[from, to]` for this page.
    pub fn range(&self) -> (u64, u64) {
        let from = self.offset();
        (from, from + self.per_page as u64 - 1)
    }
}

/// Composed parameters for one listing fetch: pagination, free-text search
/// and the structured filter.
#[derive(Debug, Clone)]
pub struct ListQuery<E: Entity> {
    /// Pagination window.
    pub page: PageRequest,
    /// Free-text search term; ignored when blank.
    pub search: String,
    /// Structured filter predicates.
    pub filter: E::Filter,
}

impl<E: Entity> ListQuery<E> {
    /// An unfiltered, unsearched query for the given page.
    pub fn new(page: PageRequest) -> Self {
        Self {
            page,
            search: String::new(),
            filter: E::Filter::default(),
        }
    }

    /// The search term with surrounding whitespace removed, if non-empty.
    pub fn search_term(&self) -> Option<&str> {
        let term = self.search.trim();
        (!term.is_empty()).then_some(term)
    }
}
