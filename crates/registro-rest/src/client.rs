//! HTTP client for the PostgREST gateway.

use reqwest::header::{ACCEPT, AUTHORIZATION, HeaderMap, HeaderValue, RANGE};
use serde::{Serialize, de::DeserializeOwned};
use tracing::{debug, instrument, trace};

use registro_core::error::{Error, GatewayError, InvalidInputError, TransportError};
use registro_core::{GatewayUrl, RecordId};

/// PostgREST answers single-object requests with this media type.
const PGRST_OBJECT: &str = "application/vnd.pgrst.object+json";

/// The gateway's JSON error body.
#[derive(Debug, serde::Deserialize)]
struct GatewayErrorBody {
    code: Option<String>,
    message: Option<String>,
    details: Option<String>,
    hint: Option<String>,
}

/// HTTP client for a PostgREST-style gateway.
///
/// Authenticates every request with the configured API key, both as the
/// `apikey` header and as a bearer token, the way hosted gateways expect.
#[derive(Debug, Clone)]
pub struct RestClient {
    http: reqwest::Client,
    base: GatewayUrl,
    api_key: String,
}

impl RestClient {
    /// Create a new client for the given gateway.
    pub fn new(base: GatewayUrl, api_key: impl Into<String>) -> Self {
        let http = reqwest::Client::builder()
            .user_agent(concat!("registro/", env!("CARGO_PKG_VERSION")))
            .build()
            .expect("failed to build HTTP client");

        Self { http, base, api_key: api_key.into() }
    }

    /// Returns the gateway base URL this client is configured for.
    pub fn base(&self) -> &GatewayUrl {
        &self.base
    }

    /// Fetch one range of rows from a collection, together with the exact
    /// total count of the filtered set (from the `Content-Range` header).
    #[instrument(skip(self, params), fields(gateway = %self.base))]
    pub(crate) async fn select_rows<R>(
        &self,
        table: &str,
        params: &[(String, String)],
        range: (u64, u64),
    ) -> Result<(Vec<R>, u64), Error>
    where
        R: DeserializeOwned,
    {
        let url = self.base.table_url(table);
        debug!(table, from = range.0, to = range.1, "select");
        trace!(?params, "query parameters");

        let mut headers = self.auth_headers();
        headers.insert("Range-Unit", HeaderValue::from_static("items"));
        headers.insert(
            RANGE,
            HeaderValue::from_str(&format!("{}-{}", range.0, range.1))
                .expect("numeric range header"),
        );
        headers.insert("Prefer", HeaderValue::from_static("count=exact"));

        let response = self
            .http
            .get(&url)
            .query(params)
            .headers(headers)
            .send()
            .await
            .map_err(transport)?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::Gateway(self.parse_error_response(response).await));
        }

        let total = content_range_total(
            response
                .headers()
                .get("Content-Range")
                .and_then(|v| v.to_str().ok())
                .unwrap_or(""),
        )?;
        let rows = response.json::<Vec<R>>().await.map_err(transport)?;
        Ok((rows, total))
    }

    /// Insert one row and return the stored representation.
    #[instrument(skip(self, body), fields(gateway = %self.base))]
    pub(crate) async fn insert_row<B, R>(&self, table: &str, body: &B) -> Result<R, Error>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let url = self.base.table_url(table);
        debug!(table, "insert");

        let mut headers = self.auth_headers();
        headers.insert("Prefer", HeaderValue::from_static("return=representation"));
        headers.insert(ACCEPT, HeaderValue::from_static(PGRST_OBJECT));

        let response = self
            .http
            .post(&url)
            .headers(headers)
            .json(body)
            .send()
            .await
            .map_err(transport)?;

        self.handle_object_response(response).await
    }

    /// Partially update the row addressed by `id` and return the stored
    /// representation.
    #[instrument(skip(self, body), fields(gateway = %self.base))]
    pub(crate) async fn update_row<B, R>(
        &self,
        table: &str,
        id: RecordId,
        body: &B,
    ) -> Result<R, Error>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let url = self.base.table_url(table);
        debug!(table, %id, "update");

        let mut headers = self.auth_headers();
        headers.insert("Prefer", HeaderValue::from_static("return=representation"));
        headers.insert(ACCEPT, HeaderValue::from_static(PGRST_OBJECT));

        let response = self
            .http
            .patch(&url)
            .query(&[("id", format!("eq.{}", id))])
            .headers(headers)
            .json(body)
            .send()
            .await
            .map_err(transport)?;

        self.handle_object_response(response).await
    }

    /// Delete the row addressed by `id`.
    #[instrument(skip(self), fields(gateway = %self.base))]
    pub(crate) async fn delete_row(&self, table: &str, id: RecordId) -> Result<(), Error> {
        let url = self.base.table_url(table);
        debug!(table, %id, "delete");

        let response = self
            .http
            .delete(&url)
            .query(&[("id", format!("eq.{}", id))])
            .headers(self.auth_headers())
            .send()
            .await
            .map_err(transport)?;

        if response.status().is_success() {
            Ok(())
        } else {
            Err(Error::Gateway(self.parse_error_response(response).await))
        }
    }

    /// Authentication headers for every gateway request.
    fn auth_headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();
        let key = HeaderValue::from_str(&self.api_key).expect("invalid API key characters");
        headers.insert("apikey", key);
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&format!("Bearer {}", self.api_key))
                .expect("invalid API key characters"),
        );
        headers
    }

    /// Parse a single-object response body or the gateway error.
    async fn handle_object_response<R: DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> Result<R, Error> {
        let status = response.status();
        trace!(status = %status, "gateway response");

        if status.is_success() {
            response.json::<R>().await.map_err(transport)
        } else {
            Err(Error::Gateway(self.parse_error_response(response).await))
        }
    }

    /// Parse the gateway's JSON error body, falling back to the bare status.
    async fn parse_error_response(&self, response: reqwest::Response) -> GatewayError {
        let status = response.status().as_u16();

        match response.json::<GatewayErrorBody>().await {
            Ok(body) => GatewayError {
                status,
                code: body.code,
                message: body.message,
                details: body.details,
                hint: body.hint,
            },
            Err(_) => GatewayError::from_status(status),
        }
    }
}

/// Classify a reqwest error into the transport taxonomy.
fn transport(err: reqwest::Error) -> Error {
    let transport = if err.is_timeout() {
        TransportError::Timeout
    } else if err.is_connect() {
        TransportError::Connection { message: err.to_string() }
    } else {
        TransportError::Http { message: err.to_string() }
    };
    Error::Transport(transport)
}

/// Extract the total set size from a `Content-Range` header value.
///
/// PostgREST answers `0-4/47` for a populated range and `*/0` for an empty
/// set; an `items ` unit prefix is tolerated.
fn content_range_total(value: &str) -> Result<u64, Error> {
    let malformed = |reason: &str| {
        Error::InvalidInput(InvalidInputError::ContentRange {
            value: value.to_string(),
            reason: reason.to_string(),
        })
    };

    let descriptor = value.strip_prefix("items ").unwrap_or(value).trim();
    let (_, total) = descriptor
        .rsplit_once('/')
        .ok_or_else(|| malformed("missing '/'"))?;
    if total == "*" {
        return Err(malformed("total count missing; gateway ignored count=exact"));
    }
    total.parse::<u64>().map_err(|_| malformed("total is not a number"))
}
