//! An addressable set of same-typed resources.
//!
//! A [`Collection`] is identified by its endpoint URL and the lowercase
//! type name that keys listing payloads. Collections are stateless: no
//! membership is cached, every lookup or traversal re-queries, and cloning
//! a collection just copies the immutable endpoint/name/credentials triple.
//!
//! Listing traversal is driven entirely by the server: each page carries an
//! optional `next_page_uri`, and the [`Pager`] follows it until it is
//! absent. The client never computes page numbers.

use std::collections::VecDeque;
use std::sync::Arc;

use serde::Deserialize;
use serde_json::{Map, Value};

use crate::clients::Invoker;
use crate::error::Result;
use crate::params::Params;
use crate::rest::Resource;

/// A handle onto a set of same-typed remote resources.
///
/// # Example
///
/// ```rust,ignore
/// let calls = client.calls();
///
/// // Key-based access: no I/O until the first attribute read.
/// let call = calls.get("CAaf0c49374b67e65717c398b2d6a72cdb");
///
/// // Filtered traversal across every page of the listing.
/// let mut pager = calls.iterate(Params::new().with("status", "completed"));
/// while let Some(call) = pager.next().await? {
///     println!("{:?}", call.get("duration").await?);
/// }
/// ```
#[derive(Debug, Clone)]
pub struct Collection {
    invoker: Arc<Invoker>,
    uri: String,
    name: String,
}

impl Collection {
    /// Creates a collection with an explicit listing key.
    pub(crate) fn new(
        invoker: Arc<Invoker>,
        uri: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        Self {
            invoker,
            uri: strip_format_suffix(uri.into()),
            name: name.into(),
        }
    }

    /// Creates a collection from a server-supplied URL, deriving the
    /// listing key from the last path segment, lowercased.
    pub(crate) fn from_uri(invoker: Arc<Invoker>, uri: impl Into<String>) -> Self {
        let uri = strip_format_suffix(uri.into());
        let name = uri
            .rsplit('/')
            .next()
            .unwrap_or_default()
            .to_lowercase();
        Self { invoker, uri, name }
    }

    /// The collection's endpoint URL.
    #[must_use]
    pub fn uri(&self) -> &str {
        &self.uri
    }

    /// The lowercase type name keying this collection's listing payloads.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns a lazy handle for `endpoint/key` without any network I/O.
    /// The handle fetches its detail record on first attribute access.
    #[must_use]
    pub fn get(&self, key: &str) -> Resource {
        Resource::lazy(
            Arc::clone(&self.invoker),
            format!("{}/{key}", self.uri),
            Some(key.to_string()),
        )
    }

    /// Deletes the resource addressed by `key`.
    ///
    /// # Errors
    ///
    /// Propagates the classified transport error.
    pub async fn delete(&self, key: &str) -> Result<()> {
        self.get(key).delete().await
    }

    /// Creates a resource by POSTing the given fields to the collection
    /// endpoint. The server's response record becomes an eagerly-loaded
    /// [`Resource`], addressed by its returned `uri` when present, else by
    /// the server-assigned sid.
    ///
    /// # Errors
    ///
    /// Propagates the classified transport error; a 400 carries the
    /// server-supplied validation message.
    pub async fn create(&self, fields: &Params) -> Result<Resource> {
        let body = self.invoker.post(&self.uri, fields).await?;
        let record: Map<String, Value> = serde_json::from_value(body)?;
        let url = self.record_url(&record);
        Ok(Resource::from_record(Arc::clone(&self.invoker), url, record))
    }

    /// Starts a fresh traversal of the listing. Each call restarts from the
    /// collection's own endpoint; `filters` are re-sent identically on
    /// every page request.
    #[must_use]
    pub fn iterate(&self, filters: Params) -> Pager {
        Pager {
            invoker: Arc::clone(&self.invoker),
            collection_uri: self.uri.clone(),
            name: self.name.clone(),
            filters,
            next_uri: Some(self.uri.clone()),
            buffer: VecDeque::new(),
        }
    }

    /// Collects every resource in the listing, across all pages.
    ///
    /// # Errors
    ///
    /// Propagates the first page-fetch error.
    pub async fn values(&self, filters: Params) -> Result<Vec<Resource>> {
        let mut pager = self.iterate(filters);
        let mut resources = Vec::new();
        while let Some(resource) = pager.next().await? {
            resources.push(resource);
        }
        Ok(resources)
    }

    /// Collects every row's key (sid), across all pages. Rows without a
    /// sid yield `None`.
    ///
    /// # Errors
    ///
    /// Propagates the first page-fetch error.
    pub async fn keys(&self, filters: Params) -> Result<Vec<Option<String>>> {
        let mut pager = self.iterate(filters);
        let mut keys = Vec::new();
        while let Some(resource) = pager.next().await? {
            keys.push(resource.key().map(ToString::to_string));
        }
        Ok(keys)
    }

    /// Endpoint URL for a response record: the server's own `uri` when
    /// present, else `endpoint/sid`, else the collection endpoint itself.
    fn record_url(&self, record: &Map<String, Value>) -> String {
        record
            .get("uri")
            .and_then(Value::as_str)
            .map(|uri| self.invoker.resolve(uri))
            .or_else(|| {
                record
                    .get("sid")
                    .and_then(Value::as_str)
                    .map(|sid| format!("{}/{sid}", self.uri))
            })
            .unwrap_or_else(|| self.uri.clone())
    }
}

/// One page of a listing: the rows sit under the collection's lowercase
/// type name, alongside the optional link to the next page.
#[derive(Debug, Deserialize)]
struct Page {
    #[serde(default)]
    next_page_uri: Option<String>,
    #[serde(flatten)]
    body: Map<String, Value>,
}

/// A lazy, finite, strictly-ordered traversal over a listing.
///
/// Page N+1 is requested only after page N's `next_page_uri` has been
/// observed, so rows arrive in server-determined order. The traversal is
/// exhausted when a page omits the field (or returns it empty).
#[derive(Debug)]
pub struct Pager {
    invoker: Arc<Invoker>,
    collection_uri: String,
    name: String,
    filters: Params,
    next_uri: Option<String>,
    buffer: VecDeque<Resource>,
}

impl Pager {
    /// Returns the next resource, fetching the next page when the current
    /// one is drained. Returns `Ok(None)` once the listing is exhausted.
    ///
    /// # Errors
    ///
    /// Propagates the classified transport error of the failing page fetch.
    pub async fn next(&mut self) -> Result<Option<Resource>> {
        loop {
            if let Some(resource) = self.buffer.pop_front() {
                return Ok(Some(resource));
            }
            let Some(uri) = self.next_uri.take() else {
                return Ok(None);
            };

            let filters = (!self.filters.is_empty()).then_some(&self.filters);
            let body = self.invoker.get(&uri, filters).await?;
            let mut page: Page = serde_json::from_value(body)?;

            self.next_uri = page
                .next_page_uri
                .take()
                .filter(|next| !next.is_empty())
                .map(|next| self.invoker.resolve(&next));

            if let Some(Value::Array(rows)) = page.body.remove(&self.name) {
                for row in rows {
                    if let Value::Object(record) = row {
                        let url = self.record_url(&record);
                        self.buffer.push_back(Resource::from_record(
                            Arc::clone(&self.invoker),
                            url,
                            record,
                        ));
                    }
                }
            }
        }
    }

    fn record_url(&self, record: &Map<String, Value>) -> String {
        record
            .get("uri")
            .and_then(Value::as_str)
            .map(|uri| self.invoker.resolve(uri))
            .or_else(|| {
                record
                    .get("sid")
                    .and_then(Value::as_str)
                    .map(|sid| format!("{}/{sid}", self.collection_uri))
            })
            .unwrap_or_else(|| self.collection_uri.clone())
    }
}

fn strip_format_suffix(uri: String) -> String {
    uri.strip_suffix(".json")
        .map_or(uri.clone(), ToString::to_string)
}
