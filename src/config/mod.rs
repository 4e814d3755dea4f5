//! Account credentials and their resolution.
//!
//! Every request carries an (account sid, auth token) pair as HTTP basic
//! authentication. Credentials are resolved exactly once, when the client is
//! built: explicit arguments win, otherwise the [`ENV_ACCOUNT_SID`] and
//! [`ENV_AUTH_TOKEN`] environment variables are consulted, and if neither
//! source yields a pair, construction fails with
//! [`Error::Configuration`](crate::Error::Configuration).
//!
//! Credentials are immutable after construction and shared read-only by
//! every [`Resource`](crate::rest::Resource) and
//! [`Collection`](crate::rest::Collection) the client hands out.

use std::env;

use crate::error::{Error, Result};

/// Environment variable holding the default account sid.
pub const ENV_ACCOUNT_SID: &str = "TWILIO_ACCOUNT_SID";

/// Environment variable holding the default auth token.
pub const ENV_AUTH_TOKEN: &str = "TWILIO_AUTH_TOKEN";

/// An (account sid, auth token) pair used as basic authentication on every
/// request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    account_sid: String,
    auth_token: String,
}

impl Credentials {
    /// Creates credentials from an explicit sid and token.
    #[must_use]
    pub fn new(account_sid: impl Into<String>, auth_token: impl Into<String>) -> Self {
        Self {
            account_sid: account_sid.into(),
            auth_token: auth_token.into(),
        }
    }

    /// Looks up credentials in the process environment.
    ///
    /// Returns `None` unless both [`ENV_ACCOUNT_SID`] and [`ENV_AUTH_TOKEN`]
    /// are set.
    #[must_use]
    pub fn from_env() -> Option<Self> {
        let account_sid = env::var(ENV_ACCOUNT_SID).ok()?;
        let auth_token = env::var(ENV_AUTH_TOKEN).ok()?;
        Some(Self {
            account_sid,
            auth_token,
        })
    }

    /// Resolves credentials from explicit arguments, falling back to the
    /// environment.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Configuration`] if no explicit pair is given and the
    /// environment variables are not both set.
    pub fn resolve(explicit: Option<Self>) -> Result<Self> {
        explicit
            .or_else(Self::from_env)
            .ok_or(Error::Configuration)
    }

    /// The account sid, used both for authentication and to scope resource
    /// URLs.
    #[must_use]
    pub fn account_sid(&self) -> &str {
        &self.account_sid
    }

    /// The auth token.
    #[must_use]
    pub fn auth_token(&self) -> &str {
        &self.auth_token
    }
}
