//! The record browser: one entity's paginated, searchable listing state.
//!
//! A browser is the single source of truth a list screen renders from: the
//! current page of rows, the total filtered count, a busy flag, and the last
//! user-facing error. It owns the search term and structured filter, resets
//! pagination when either changes, and funnels every mutation through the
//! store so held state stays consistent with the gateway.
//!
//! No gateway failure escapes this boundary: reads degrade to a fixed display
//! message over the previously held rows, writes report a fixed message back
//! to the caller, and the technical cause goes to the diagnostic log only.

use thiserror::Error;
use tracing::{debug, warn};

use crate::Result;
use crate::entity::{Entity, NewRecord};
use crate::page::{self, DEFAULT_WINDOW, PageEntry};
use crate::query::{ListQuery, PageRequest};
use crate::store::{RecordStore, ResultPage};
use crate::types::RecordId;

/// Fixed display message for a failed listing fetch.
pub const LOAD_FAILED: &str = "Could not load records. Please try again.";
/// Fixed display message for a failed creation.
pub const CREATE_FAILED: &str = "Could not save the record. Please try again.";
/// Fixed display message for a failed update.
pub const UPDATE_FAILED: &str = "Could not update the record. Please try again.";
/// Fixed display message for a failed deletion.
pub const DELETE_FAILED: &str = "Could not delete the record. Please try again.";

/// A user-facing failure from a browser mutation. Carries only the short
/// message a notification surface shows; never raw backend detail.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct BrowseError {
    pub message: String,
}

impl BrowseError {
    fn fixed(message: &'static str) -> Self {
        Self { message: message.to_string() }
    }
}

/// The mutually exclusive states a list screen renders, in priority order.
#[derive(Debug, PartialEq)]
pub enum ListState<'a, E> {
    /// A fetch is in flight.
    Busy,
    /// The last fetch failed; previously held rows stay available through
    /// [`RecordBrowser::rows`] for graceful degradation.
    Error(&'a str),
    /// A completed, non-erroring fetch returned zero rows.
    Empty,
    /// Rows to render.
    Rows(&'a [E]),
}

/// Handle for one issued fetch. Applying a completed fetch whose ticket is no
/// longer the latest discards the result, so overlapping fetches resolve to
/// the latest-issued query regardless of completion order.
#[derive(Debug)]
#[must_use = "a fetch that is never applied leaves the browser busy"]
pub struct FetchTicket(u64);

/// Paginated, searchable listing state for one entity collection backed by a
/// record store.
#[derive(Debug)]
pub struct RecordBrowser<E: Entity, S: RecordStore> {
    store: S,
    page: PageRequest,
    search: String,
    filter: E::Filter,
    rows: Vec<E>,
    total_count: u64,
    error: Option<&'static str>,
    busy: bool,
    seq: u64,
}

impl<E: Entity, S: RecordStore> RecordBrowser<E, S> {
    /// Create a browser over `store` with a fixed page size.
    ///
    /// # Errors
    ///
    /// Returns an error when `per_page` is zero.
    pub fn new(store: S, per_page: u32) -> Result<Self> {
        Ok(Self {
            store,
            page: PageRequest::first(per_page)?,
            search: String::new(),
            filter: E::Filter::default(),
            rows: Vec::new(),
            total_count: 0,
            error: None,
            busy: false,
            seq: 0,
        })
    }

    /// Pre-position on a page before the first fetch, without clamping
    /// against a total that is not known yet.
    pub fn start_at(&mut self, page: u32) {
        self.page = self.page.with_page(page);
    }

    /// Pre-set the search term before the first fetch, without refetching.
    /// Once a listing is live, use [`set_search`](Self::set_search) instead.
    pub fn start_search(&mut self, term: impl Into<String>) {
        self.search = term.into();
    }

    /// Pre-set the structured filter before the first fetch, without
    /// refetching. Once a listing is live, use
    /// [`set_filter`](Self::set_filter) instead.
    pub fn start_filter(&mut self, filter: E::Filter) {
        self.filter = filter;
    }

    /// Rows of the current page, in gateway sort order.
    pub fn rows(&self) -> &[E] {
        &self.rows
    }

    /// Total size of the filtered set.
    pub fn total_count(&self) -> u64 {
        self.total_count
    }

    /// Number of pages in the filtered set; at least 1.
    pub fn total_pages(&self) -> u32 {
        page::total_pages(self.total_count, self.page.per_page())
    }

    /// Current page number, 1-based.
    pub fn page(&self) -> u32 {
        self.page.page()
    }

    /// Fixed page size.
    pub fn per_page(&self) -> u32 {
        self.page.per_page()
    }

    /// Current free-text search term.
    pub fn search(&self) -> &str {
        &self.search
    }

    /// Current structured filter.
    pub fn filter(&self) -> &E::Filter {
        &self.filter
    }

    /// Display message of the last failed fetch, if any.
    pub fn error(&self) -> Option<&'static str> {
        self.error
    }

    /// True while a fetch is in flight.
    pub fn is_busy(&self) -> bool {
        self.busy
    }

    /// The state a list screen should render, evaluated in priority order:
    /// busy, error, empty, rows.
    pub fn state(&self) -> ListState<'_, E> {
        if self.busy {
            ListState::Busy
        } else if let Some(message) = self.error {
            ListState::Error(message)
        } else if self.rows.is_empty() {
            ListState::Empty
        } else {
            ListState::Rows(&self.rows)
        }
    }

    /// The bounded page-number window around the current page.
    pub fn window(&self) -> Vec<PageEntry> {
        page::page_window(self.page(), self.total_pages(), DEFAULT_WINDOW)
    }

    /// Issue a fetch: marks the browser busy and returns the ticket plus the
    /// query composed from the current page, search term and filter.
    ///
    /// Split from [`apply_fetch`](Self::apply_fetch) so overlapping fetches
    /// can be resolved deterministically; [`refresh`](Self::refresh) is the
    /// one-call form.
    pub fn begin_fetch(&mut self) -> (FetchTicket, ListQuery<E>) {
        self.seq += 1;
        self.busy = true;
        let query = ListQuery {
            page: self.page,
            search: self.search.clone(),
            filter: self.filter.clone(),
        };
        debug!(
            collection = E::COLLECTION,
            page = self.page.page(),
            search = %self.search,
            "issuing fetch"
        );
        (FetchTicket(self.seq), query)
    }

    /// Apply a completed fetch. Returns false when the ticket is stale (a
    /// newer fetch has been issued since) and the result was discarded.
    pub fn apply_fetch(&mut self, ticket: FetchTicket, outcome: Result<ResultPage<E>>) -> bool {
        if ticket.0 != self.seq {
            debug!(collection = E::COLLECTION, "discarding stale fetch result");
            return false;
        }
        self.busy = false;
        match outcome {
            Ok(page) => {
                self.rows = page.rows;
                self.total_count = page.total_count;
                self.error = None;
            }
            Err(err) => {
                // Held rows are kept on purpose; the screen shows the error
                // banner and stays retryable with visible context.
                warn!(collection = E::COLLECTION, error = %err, "listing fetch failed");
                self.error = Some(LOAD_FAILED);
            }
        }
        true
    }

    /// Fetch the current page with the current search term and filter.
    pub async fn refresh(&mut self) {
        let (ticket, query) = self.begin_fetch();
        let outcome = self.store.select::<E>(&query).await;
        self.apply_fetch(ticket, outcome);
    }

    /// Set the search term, reset to page 1 and refetch.
    pub async fn set_search(&mut self, term: impl Into<String>) {
        self.search = term.into();
        self.page = self.page.with_page(1);
        self.refresh().await;
    }

    /// Set the structured filter, reset to page 1 and refetch.
    pub async fn set_filter(&mut self, filter: E::Filter) {
        self.filter = filter;
        self.page = self.page.with_page(1);
        self.refresh().await;
    }

    /// Go to the next page; no-op on the last page.
    pub async fn next(&mut self) {
        if self.page() < self.total_pages() {
            self.move_to(self.page() + 1).await;
        }
    }

    /// Go to the previous page; no-op on the first page.
    pub async fn previous(&mut self) {
        if self.page() > 1 {
            self.move_to(self.page() - 1).await;
        }
    }

    /// Go to the first page.
    pub async fn first(&mut self) {
        self.move_to(1).await;
    }

    /// Go to the last page.
    pub async fn last(&mut self) {
        self.move_to(self.total_pages()).await;
    }

    /// Go to page `n`, clamped to `[1, total_pages]`.
    pub async fn go_to(&mut self, n: u32) {
        self.move_to(n.clamp(1, self.total_pages())).await;
    }

    async fn move_to(&mut self, target: u32) {
        if target != self.page() {
            self.page = self.page.with_page(target);
            self.refresh().await;
        }
    }

    /// Create a record. Validation failures are reported before any network
    /// call; on success the authoritative record is prepended to the held
    /// rows and returned.
    ///
    /// Callers re-derive pagination themselves, conventionally by refetching
    /// page 1.
    pub async fn insert(&mut self, new: E::Insert) -> std::result::Result<E, BrowseError> {
        if let Err(err) = new.validate() {
            return Err(BrowseError { message: err.to_string() });
        }
        self.busy = true;
        let outcome = self.store.insert::<E>(&new).await;
        self.busy = false;
        match outcome {
            Ok(record) => {
                self.rows.insert(0, record.clone());
                self.total_count += 1;
                Ok(record)
            }
            Err(err) => {
                warn!(collection = E::COLLECTION, error = %err, "create failed");
                Err(BrowseError::fixed(CREATE_FAILED))
            }
        }
    }

    /// Delete the record addressed by `id` and drop it from the held rows.
    pub async fn delete(&mut self, id: RecordId) -> std::result::Result<(), BrowseError> {
        self.busy = true;
        let outcome = self.store.delete::<E>(id).await;
        self.busy = false;
        match outcome {
            Ok(()) => {
                let before = self.rows.len();
                self.rows.retain(|row| row.id() != id);
                if self.rows.len() < before {
                    self.total_count = self.total_count.saturating_sub(1);
                }
                Ok(())
            }
            Err(err) => {
                warn!(collection = E::COLLECTION, %id, error = %err, "delete failed");
                Err(BrowseError::fixed(DELETE_FAILED))
            }
        }
    }

    /// Partially update the record addressed by `id`; the held row, when
    /// present, is replaced with the authoritative returned record.
    pub async fn update(
        &mut self,
        id: RecordId,
        patch: E::Patch,
    ) -> std::result::Result<E, BrowseError> {
        self.busy = true;
        let outcome = self.store.update::<E>(id, &patch).await;
        self.busy = false;
        match outcome {
            Ok(record) => {
                if let Some(held) = self.rows.iter_mut().find(|row| row.id() == id) {
                    *held = record.clone();
                }
                Ok(record)
            }
            Err(err) => {
                warn!(collection = E::COLLECTION, %id, error = %err, "update failed");
                Err(BrowseError::fixed(UPDATE_FAILED))
            }
        }
    }
}
