//! The entity seam between typed records and the gateway.
//!
//! Each record kind the registry manages is an explicit struct implementing
//! [`Entity`]; the trait carries everything a [`RecordStore`](crate::RecordStore)
//! needs to compose a query for it: collection name, searchable fields, sort
//! order, and the shapes used for creation and partial update.

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::InvalidInputError;
use crate::types::RecordId;

/// The fixed sort clause a collection is listed with.
///
/// Row order is defined by the gateway's sort, never reconstructed
/// client-side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortOrder {
    /// Persisted field to sort by.
    pub field: &'static str,
    /// Ascending when true, descending otherwise.
    pub ascending: bool,
}

impl SortOrder {
    /// Ascending sort on `field`.
    pub const fn ascending(field: &'static str) -> Self {
        Self { field, ascending: true }
    }

    /// Descending sort on `field`.
    pub const fn descending(field: &'static str) -> Self {
        Self { field, ascending: false }
    }
}

/// An equality predicate contributed by a structured filter.
///
/// Rendered by gateway implementations as `field=eq.value`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Predicate {
    /// Persisted field the predicate applies to.
    pub field: &'static str,
    /// Literal the field must equal, already rendered as its wire form.
    pub equals: String,
}

/// A typed, non-text filter applied in addition to free-text search.
///
/// The `Default` value must mean "include everything" so a fresh screen
/// starts unfiltered.
pub trait EntityFilter: std::fmt::Debug + Clone + Default + PartialEq + Send + Sync {
    /// Equality predicates to AND onto the query. Empty means unfiltered.
    fn predicates(&self) -> Vec<Predicate>;
}

/// Filter type for collections with no structured filter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Unfiltered;

impl EntityFilter for Unfiltered {
    fn predicates(&self) -> Vec<Predicate> {
        Vec::new()
    }
}

/// The creation shape of an entity: user-editable fields only, validated
/// before any network call.
pub trait NewRecord: Serialize + Send + Sync {
    /// Check required fields and field formats.
    fn validate(&self) -> Result<(), InvalidInputError>;
}

/// A persisted record kind.
pub trait Entity:
    Serialize + DeserializeOwned + Clone + Send + Sync + Unpin + 'static
{
    /// Collection name under the gateway base URL.
    const COLLECTION: &'static str;

    /// Fields the free-text search matches against, OR-combined.
    const SEARCH_FIELDS: &'static [&'static str];

    /// Creation shape (no identifier, server assigns one).
    type Insert: NewRecord;

    /// Partial-update shape; absent fields are not serialized.
    type Patch: Serialize + Send + Sync;

    /// Structured filter for this collection.
    type Filter: EntityFilter;

    /// The fixed sort clause for listings of this collection.
    fn sort() -> SortOrder;

    /// The server-assigned unique identifier.
    fn id(&self) -> RecordId;
}
