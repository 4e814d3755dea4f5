//! A single addressable remote entity.
//!
//! A [`Resource`] is a handle onto one remote record, identified by its
//! endpoint URL. Handles are cheap: constructing one performs no I/O.
//! The detail record is fetched lazily, on the first attribute read, and
//! cached for the life of the handle; handles built from a listing row or a
//! create response are already loaded and never fetch.

use std::collections::HashMap;
use std::sync::Arc;

use serde_json::{Map, Value};
use tokio::sync::{Mutex, MutexGuard};

use crate::clients::Invoker;
use crate::error::{Error, Result};
use crate::params::Params;
use crate::rest::Collection;

/// Record state: unloaded until the first fetch or an inline construction.
#[derive(Debug, Default)]
struct State {
    loaded: bool,
    fields: Map<String, Value>,
    subresources: HashMap<String, Collection>,
}

/// A handle onto a single remote resource.
///
/// Attribute access goes through [`Resource::get`], which triggers at most
/// one fetch of the full detail record; the load transition is guarded by an
/// async mutex, so concurrent readers observe a single request. The record
/// is dynamic — a string-keyed map of server-defined fields — because the
/// API does not publish a fixed schema per type.
///
/// Two rewrites are applied when a record is absorbed:
/// - the `from` field is renamed to `sender` (reserved-word clash);
/// - `subresource_uris` entries become nested [`Collection`] handles,
///   reachable through [`Resource::subresource`].
///
/// # Example
///
/// ```rust,ignore
/// let call = client.calls().get("CAaf0c49374b67e65717c398b2d6a72cdb");
/// let status = call.get("status").await?;       // fetches once
/// let duration = call.get("duration").await?;   // served from cache
/// let recordings = call.subresource("recordings").await?;
/// ```
#[derive(Debug)]
pub struct Resource {
    invoker: Arc<Invoker>,
    url: String,
    key: Option<String>,
    state: Mutex<State>,
}

impl Resource {
    /// Creates an unloaded handle; the first [`get`](Self::get) fetches.
    pub(crate) fn lazy(invoker: Arc<Invoker>, url: impl Into<String>, key: Option<String>) -> Self {
        Self {
            invoker,
            url: strip_format_suffix(url.into()),
            key,
            state: Mutex::new(State::default()),
        }
    }

    /// Creates an already-loaded handle from a response record (a listing
    /// row or a create response). Never fetches for reads of the absorbed
    /// fields.
    pub(crate) fn from_record(
        invoker: Arc<Invoker>,
        url: impl Into<String>,
        record: Map<String, Value>,
    ) -> Self {
        let key = record
            .get("sid")
            .and_then(Value::as_str)
            .map(ToString::to_string);
        let mut state = State::default();
        absorb(&mut state, &invoker, record);
        Self {
            invoker,
            url: strip_format_suffix(url.into()),
            key,
            state: Mutex::new(state),
        }
    }

    /// The endpoint URL this handle addresses.
    #[must_use]
    pub fn uri(&self) -> &str {
        &self.url
    }

    /// The key this handle was addressed by: the server-assigned sid when
    /// known, or the key used to index the collection.
    #[must_use]
    pub fn key(&self) -> Option<&str> {
        self.key.as_deref()
    }

    /// Whether the detail record has been loaded.
    pub async fn is_loaded(&self) -> bool {
        self.state.lock().await.loaded
    }

    /// Reads an attribute, fetching the detail record first if this handle
    /// has not loaded yet.
    ///
    /// # Errors
    ///
    /// Propagates any fetch error to the caller that triggered the load;
    /// returns [`Error::MissingAttribute`] when the loaded record has no
    /// such field.
    pub async fn get(&self, attribute: &str) -> Result<Value> {
        let state = self.ensure_loaded().await?;
        state
            .fields
            .get(attribute)
            .cloned()
            .ok_or_else(|| Error::MissingAttribute {
                url: self.url.clone(),
                attribute: attribute.to_string(),
            })
    }

    /// The server-assigned unique identifier, as a string.
    ///
    /// # Errors
    ///
    /// Same as [`Resource::get`].
    pub async fn sid(&self) -> Result<String> {
        let value = self.get("sid").await?;
        value
            .as_str()
            .map(ToString::to_string)
            .ok_or_else(|| Error::MissingAttribute {
                url: self.url.clone(),
                attribute: "sid".to_string(),
            })
    }

    /// Returns the nested collection a subresource link points at.
    ///
    /// # Errors
    ///
    /// Same as [`Resource::get`]; the name must appear in the record's
    /// subresource links.
    pub async fn subresource(&self, name: &str) -> Result<Collection> {
        let state = self.ensure_loaded().await?;
        state
            .subresources
            .get(name)
            .cloned()
            .ok_or_else(|| Error::MissingAttribute {
                url: self.url.clone(),
                attribute: name.to_string(),
            })
    }

    /// Updates the remote record with a partial POST merge.
    ///
    /// The server returns the authoritative updated record, which replaces
    /// the cached fields wholesale and marks the handle loaded.
    ///
    /// # Errors
    ///
    /// Propagates the classified transport error.
    pub async fn update(&self, fields: &Params) -> Result<()> {
        let body = self.invoker.post(&self.url, fields).await?;
        let mut state = self.state.lock().await;
        state.fields.clear();
        state.subresources.clear();
        if let Value::Object(record) = body {
            absorb(&mut state, &self.invoker, record);
        }
        state.loaded = true;
        Ok(())
    }

    /// Deletes the remote resource.
    ///
    /// Local cached state is left untouched and later access is not
    /// guarded: callers must not keep using a handle after deleting it.
    ///
    /// # Errors
    ///
    /// Propagates the classified transport error.
    pub async fn delete(&self) -> Result<()> {
        self.invoker.delete(&self.url).await
    }

    /// Locks the record, fetching it first if this is the first access.
    /// Holding the lock across the fetch gives concurrent callers a single
    /// load.
    async fn ensure_loaded(&self) -> Result<MutexGuard<'_, State>> {
        let mut state = self.state.lock().await;
        if !state.loaded {
            let body = self.invoker.get(&self.url, None).await?;
            if let Value::Object(record) = body {
                absorb(&mut state, &self.invoker, record);
            }
            state.loaded = true;
        }
        Ok(state)
    }
}

/// Merges a response record into the cached state, applying the
/// `from` → `sender` rename and expanding subresource links into nested
/// collections.
fn absorb(state: &mut State, invoker: &Arc<Invoker>, record: Map<String, Value>) {
    for (name, value) in record {
        if name == "from" {
            state.fields.insert("sender".to_string(), value);
            continue;
        }
        if name == "subresource_uris" {
            if let Value::Object(links) = &value {
                for (sub_name, uri) in links {
                    if let Some(uri) = uri.as_str() {
                        state.subresources.insert(
                            sub_name.clone(),
                            Collection::new(
                                Arc::clone(invoker),
                                invoker.resolve(uri),
                                sub_name.clone(),
                            ),
                        );
                    }
                }
            }
        }
        state.fields.insert(name, value);
    }
    state.loaded = true;
}

/// Resource URLs are stored without the wire format suffix; the invoker
/// appends it at dispatch.
fn strip_format_suffix(url: String) -> String {
    url.strip_suffix(".json")
        .map_or(url.clone(), ToString::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Credentials;
    use serde_json::json;

    fn test_invoker() -> Arc<Invoker> {
        Arc::new(Invoker::new(
            Credentials::new("AC_test", "token"),
            "https://api.twilio.com",
        ))
    }

    fn record(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            other => panic!("expected object, got {other}"),
        }
    }

    #[tokio::test]
    async fn from_field_is_renamed_to_sender() {
        let resource = Resource::from_record(
            test_invoker(),
            "https://api.twilio.com/2010-04-01/Accounts/AC_test/Calls/CA1",
            record(json!({"sid": "CA1", "from": "+14158675309", "to": "+15105551234"})),
        );

        let sender = resource.get("sender").await.unwrap();
        assert_eq!(sender, json!("+14158675309"));
        assert!(matches!(
            resource.get("from").await,
            Err(Error::MissingAttribute { attribute, .. }) if attribute == "from"
        ));
    }

    #[tokio::test]
    async fn subresource_links_become_collections() {
        let resource = Resource::from_record(
            test_invoker(),
            "https://api.twilio.com/2010-04-01/Accounts/AC_test/Calls/CA1",
            record(json!({
                "sid": "CA1",
                "subresource_uris": {
                    "recordings": "/2010-04-01/Accounts/AC_test/Calls/CA1/Recordings.json"
                }
            })),
        );

        let recordings = resource.subresource("recordings").await.unwrap();
        assert_eq!(recordings.name(), "recordings");
        assert_eq!(
            recordings.uri(),
            "https://api.twilio.com/2010-04-01/Accounts/AC_test/Calls/CA1/Recordings"
        );
    }

    #[tokio::test]
    async fn inline_records_are_loaded_and_keyed_by_sid() {
        let resource = Resource::from_record(
            test_invoker(),
            "https://api.twilio.com/2010-04-01/Accounts/AC_test/Calls/CA1",
            record(json!({"sid": "CA1", "status": "completed"})),
        );

        assert!(resource.is_loaded().await);
        assert_eq!(resource.key(), Some("CA1"));
        assert_eq!(resource.sid().await.unwrap(), "CA1");
    }

    #[tokio::test]
    async fn lazy_handles_start_unloaded() {
        let resource = Resource::lazy(
            test_invoker(),
            "https://api.twilio.com/2010-04-01/Accounts/AC_test/Calls/CA1.json",
            Some("CA1".to_string()),
        );

        assert!(!resource.is_loaded().await);
        assert_eq!(resource.key(), Some("CA1"));
        // The stored URL drops the wire format suffix.
        assert_eq!(
            resource.uri(),
            "https://api.twilio.com/2010-04-01/Accounts/AC_test/Calls/CA1"
        );
    }
}
