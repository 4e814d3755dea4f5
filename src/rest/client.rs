//! The API client and its resource-type registry.
//!
//! A [`Client`] resolves logical resource-type names (`"calls"`,
//! `"recordings"`, ...) to [`Collection`] endpoints under the account's
//! base URL. Resolution happens once per name and is remembered for the
//! life of the client; unknown names resolve to a generic collection with
//! no specialization, so the surface grows with the server rather than
//! with this crate.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

use crate::clients::Invoker;
use crate::config::Credentials;
use crate::error::Result;
use crate::params;
use crate::rest::resources::{CallerIds, Calls, Messages, Participants, PhoneNumbers};
use crate::rest::{Collection, Resource};

/// Default API origin.
pub const DEFAULT_BASE_URL: &str = "https://api.twilio.com";

/// API version segment used in every endpoint URL.
pub const API_VERSION: &str = "2010-04-01";

/// A client for the REST API.
///
/// Construction resolves credentials exactly once — explicit arguments or
/// the environment (see [`Credentials`]) — and computes the account-scoped
/// base URL every collection hangs off.
///
/// # Example
///
/// ```rust,ignore
/// use twilio_api::{Client, Params};
///
/// let client = Client::from_env()?;
///
/// // Listing with range filters.
/// for call in client.calls().values(Params::new().with("status", "completed")).await? {
///     println!("{}", call.sid().await?);
/// }
///
/// // Any resource type the server knows, specialized or not.
/// let recordings = client.collection("recordings");
/// ```
#[derive(Debug)]
pub struct Client {
    invoker: Arc<Invoker>,
    version_uri: String,
    account_uri: String,
    resolved: Mutex<HashMap<String, Collection>>,
}

impl Client {
    /// Creates a client from an explicit account sid and auth token.
    ///
    /// # Errors
    ///
    /// Infallible for explicit credentials today; kept fallible to match
    /// the other constructors.
    pub fn new(account_sid: impl Into<String>, auth_token: impl Into<String>) -> Result<Self> {
        Self::builder()
            .credentials(Credentials::new(account_sid, auth_token))
            .build()
    }

    /// Creates a client from the `TWILIO_ACCOUNT_SID` and
    /// `TWILIO_AUTH_TOKEN` environment variables.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Configuration`](crate::Error::Configuration) when
    /// either variable is missing.
    pub fn from_env() -> Result<Self> {
        Self::builder().build()
    }

    /// Returns a builder for customized construction (credentials, API
    /// origin override).
    #[must_use]
    pub fn builder() -> ClientBuilder {
        ClientBuilder::default()
    }

    /// The account sid this client is scoped to.
    #[must_use]
    pub fn account_sid(&self) -> &str {
        self.invoker.credentials().account_sid()
    }

    /// The account-scoped base URL.
    #[must_use]
    pub fn account_uri(&self) -> &str {
        &self.account_uri
    }

    /// Resolves a resource-type name to its collection.
    ///
    /// Known special case: `accounts` lives at the version level, not under
    /// the account. Every other name maps to
    /// `{account}/{UpperCamelCase(name)}`. The result is memoized for the
    /// life of the client.
    #[must_use]
    pub fn collection(&self, name: &str) -> Collection {
        let mut resolved = self
            .resolved
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        if let Some(collection) = resolved.get(name) {
            return collection.clone();
        }

        tracing::debug!(name, "resolving resource type");
        let collection = if name == "accounts" {
            Collection::new(
                Arc::clone(&self.invoker),
                format!("{}/Accounts", self.version_uri),
                "accounts",
            )
        } else {
            Collection::new(
                Arc::clone(&self.invoker),
                format!("{}/{}", self.account_uri, params::camel_case(name)),
                name,
            )
        };
        resolved.insert(name.to_string(), collection.clone());
        collection
    }

    /// Builds a collection handle from a server-supplied URL (a canonical
    /// link from a response payload); the listing key is derived from the
    /// URL's last path segment.
    #[must_use]
    pub fn collection_at(&self, uri: &str) -> Collection {
        Collection::from_uri(Arc::clone(&self.invoker), self.invoker.resolve(uri))
    }

    /// The calls collection, with call-control conveniences.
    #[must_use]
    pub fn calls(&self) -> Calls {
        Calls::new(self.collection("calls"))
    }

    /// The SMS messages collection.
    #[must_use]
    pub fn messages(&self) -> Messages {
        Messages::new(self.collection("sms_messages"))
    }

    /// The accounts listing. Unlike every other type this one is scoped to
    /// the API version, not to the authenticated account.
    #[must_use]
    pub fn accounts(&self) -> Collection {
        self.collection("accounts")
    }

    /// The conferences collection.
    #[must_use]
    pub fn conferences(&self) -> Collection {
        self.collection("conferences")
    }

    /// The participants of one conference.
    #[must_use]
    pub fn participants(&self, conference_sid: &str) -> Participants {
        Participants::new(Collection::new(
            Arc::clone(&self.invoker),
            format!("{}/Conferences/{conference_sid}/Participants", self.account_uri),
            "participants",
        ))
    }

    /// The incoming phone numbers collection, with number search and
    /// purchase conveniences.
    #[must_use]
    pub fn phone_numbers(&self) -> PhoneNumbers {
        PhoneNumbers::new(
            self.collection("incoming_phone_numbers"),
            Arc::clone(&self.invoker),
            self.account_uri.clone(),
        )
    }

    /// The outgoing caller IDs collection, with validation-request
    /// convenience.
    #[must_use]
    pub fn caller_ids(&self) -> CallerIds {
        CallerIds::new(self.collection("outgoing_caller_ids"))
    }

    /// The account's sandbox: a singleton resource, not a collection.
    #[must_use]
    pub fn sandbox(&self) -> Resource {
        Resource::lazy(
            Arc::clone(&self.invoker),
            format!("{}/Sandbox", self.account_uri),
            None,
        )
    }
}

/// Builder for [`Client`].
///
/// The API origin override exists for proxies and mock servers; production
/// callers normally leave it at [`DEFAULT_BASE_URL`].
#[derive(Debug, Default)]
pub struct ClientBuilder {
    credentials: Option<Credentials>,
    base_url: Option<String>,
    version: Option<String>,
}

impl ClientBuilder {
    /// Sets explicit credentials, overriding the environment.
    #[must_use]
    pub fn credentials(mut self, credentials: Credentials) -> Self {
        self.credentials = Some(credentials);
        self
    }

    /// Overrides the API origin.
    #[must_use]
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Overrides the API version segment.
    #[must_use]
    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    /// Resolves credentials and builds the client.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Configuration`](crate::Error::Configuration) when
    /// no credentials were given and the environment supplies none.
    pub fn build(self) -> Result<Client> {
        let credentials = Credentials::resolve(self.credentials)?;
        let base_url = self
            .base_url
            .as_deref()
            .unwrap_or(DEFAULT_BASE_URL)
            .trim_end_matches('/')
            .to_string();
        let version = self.version.unwrap_or_else(|| API_VERSION.to_string());

        let version_uri = format!("{base_url}/{version}");
        let account_uri = format!("{version_uri}/Accounts/{}", credentials.account_sid());
        let invoker = Arc::new(Invoker::new(credentials, base_url));

        Ok(Client {
            invoker,
            version_uri,
            account_uri,
            resolved: Mutex::new(HashMap::new()),
        })
    }
}
