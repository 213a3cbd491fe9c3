//! The record store trait.
//!
//! The remote data gateway is consumed through this seam; implementations
//! live elsewhere (`registro-rest` for the hosted gateway, in-memory doubles
//! in tests).

use async_trait::async_trait;

use crate::Result;
use crate::entity::Entity;
use crate::query::ListQuery;
use crate::types::RecordId;

/// One fetched page of a listing: the rows in gateway sort order plus the
/// total size of the full filtered set.
#[derive(Debug, Clone)]
pub struct ResultPage<E> {
    /// Rows of this page; at most `per_page` of them.
    pub rows: Vec<E>,

    /// Size of the entire filtered set, not just this page.
    pub total_count: u64,
}

impl<E> ResultPage<E> {
    /// An empty page over an empty set.
    pub fn empty() -> Self {
        Self { rows: Vec::new(), total_count: 0 }
    }
}

/// Query and mutation operations over named record collections.
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Fetch one page of `E`'s collection.
    ///
    /// Applies OR-combined case-insensitive substring matching over
    /// [`Entity::SEARCH_FIELDS`] when the query carries a search term,
    /// equality predicates from the structured filter, the collection's
    /// fixed sort order, and the query's inclusive item range. Returns the
    /// page rows together with the exact total count of the filtered set.
    async fn select<E: Entity>(&self, query: &ListQuery<E>) -> Result<ResultPage<E>>;

    /// Create one record; returns the authoritative stored record with its
    /// server-assigned identifier.
    async fn insert<E: Entity>(&self, new: &E::Insert) -> Result<E>;

    /// Partially update the record addressed by `id`; returns the
    /// authoritative updated record.
    async fn update<E: Entity>(&self, id: RecordId, patch: &E::Patch) -> Result<E>;

    /// Delete the record addressed by `id`.
    async fn delete<E: Entity>(&self, id: RecordId) -> Result<()>;
}
