//! PostgREST-backed implementation of the record store.

use async_trait::async_trait;
use tracing::debug;

use registro_core::entity::EntityFilter;
use registro_core::{
    Entity, GatewayUrl, ListQuery, RecordId, RecordStore, Result, ResultPage,
};

use crate::client::RestClient;

/// A record store backed by a PostgREST-style gateway.
#[derive(Debug, Clone)]
pub struct RestStore {
    client: RestClient,
}

impl RestStore {
    /// Create a store for the given gateway.
    pub fn new(base: GatewayUrl, api_key: impl Into<String>) -> Self {
        Self { client: RestClient::new(base, api_key) }
    }

    /// Returns the gateway base URL this store talks to.
    pub fn base(&self) -> &GatewayUrl {
        self.client.base()
    }
}

#[async_trait]
impl RecordStore for RestStore {
    async fn select<E: Entity>(&self, query: &ListQuery<E>) -> Result<ResultPage<E>> {
        let mut params: Vec<(String, String)> = vec![("select".into(), "*".into())];

        if let Some(term) = query.search_term() {
            params.push(("or".into(), search_clause(E::SEARCH_FIELDS, term)));
        }
        for predicate in query.filter.predicates() {
            params.push((predicate.field.into(), format!("eq.{}", predicate.equals)));
        }

        let sort = E::sort();
        params.push((
            "order".into(),
            format!("{}.{}", sort.field, if sort.ascending { "asc" } else { "desc" }),
        ));

        debug!(collection = E::COLLECTION, page = query.page.page(), "select");
        let (rows, total_count) = self
            .client
            .select_rows(E::COLLECTION, &params, query.page.range())
            .await?;
        Ok(ResultPage { rows, total_count })
    }

    async fn insert<E: Entity>(&self, new: &E::Insert) -> Result<E> {
        self.client.insert_row(E::COLLECTION, new).await
    }

    async fn update<E: Entity>(&self, id: RecordId, patch: &E::Patch) -> Result<E> {
        self.client.update_row(E::COLLECTION, id, patch).await
    }

    async fn delete<E: Entity>(&self, id: RecordId) -> Result<()> {
        self.client.delete_row(E::COLLECTION, id).await
    }
}

/// Render the OR-combined case-insensitive substring clause for a search
/// term: `(name.ilike.*term*,email.ilike.*term*)`.
fn search_clause(fields: &[&str], term: &str) -> String {
    let pattern = format!("*{}*", sanitize_term(term));
    let clauses: Vec<String> = fields
        .iter()
        .map(|field| format!("{}.ilike.{}", field, pattern))
        .collect();
    format!("({})", clauses.join(","))
}

/// Strip characters the gateway's filter grammar reserves, so a search term
/// can be embedded in an `or=()` clause without splitting it.
fn sanitize_term(term: &str) -> String {
    term.chars()
        .filter(|c| !matches!(c, ',' | '(' | ')' | '"' | '\\') && !c.is_control())
        .collect()
}
