//! registro-core - Core types and traits for the registro toolkit.

pub mod browser;
pub mod entities;
pub mod entity;
pub mod error;
pub mod page;
pub mod query;
pub mod store;
pub mod types;

pub use browser::{BrowseError, FetchTicket, ListState, RecordBrowser};
pub use entities::{Candidate, CandidatePatch, ElectedFilter, NewCandidate, NewPerson, Person, PersonPatch};
pub use entity::{Entity, EntityFilter, NewRecord, Predicate, SortOrder, Unfiltered};
pub use error::Error;
pub use page::{DEFAULT_WINDOW, PageEntry, page_window, total_pages};
pub use query::{ListQuery, PageRequest};
pub use store::{RecordStore, ResultPage};
pub use types::{GatewayUrl, RecordId};

/// Result type alias using the crate's Error type.
pub type Result<T> = std::result::Result<T, Error>;
