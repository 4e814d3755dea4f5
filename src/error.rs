//! Error types for the Twilio API SDK.
//!
//! Every fallible operation in the crate returns [`Result`], whose error
//! type classifies failures so callers can distinguish "absent", "caller
//! mistake", and "server fault" without matching on message strings.
//!
//! # Example
//!
//! ```rust,ignore
//! use twilio_api::Error;
//!
//! match client.calls().get("CA123").get("status").await {
//!     Ok(status) => println!("status: {status}"),
//!     Err(Error::NotFound { url }) => println!("no such call at {url}"),
//!     Err(Error::InvalidRequest { message }) => println!("rejected: {message}"),
//!     Err(other) => return Err(other.into()),
//! }
//! ```

use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced by the SDK.
///
/// HTTP failures are classified by status code: 404 becomes [`NotFound`],
/// 400 becomes [`InvalidRequest`], and any other non-2xx status (after the
/// one automatic retry on server errors) becomes [`Service`]. Configuration
/// problems are caught at client construction and never retried.
///
/// [`NotFound`]: Error::NotFound
/// [`InvalidRequest`]: Error::InvalidRequest
/// [`Service`]: Error::Service
#[derive(Debug, Error)]
pub enum Error {
    /// No account credentials were supplied and none were found in the
    /// environment.
    #[error(
        "Could not find your Twilio account credentials. Pass them in explicitly:

    let client = Client::new(\"ACXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXX\", \"your-auth-token\")?;

Or export them in your shell environment:

    export TWILIO_ACCOUNT_SID=ACXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXX
    export TWILIO_AUTH_TOKEN=your-auth-token

and construct the client with Client::from_env()."
    )]
    Configuration,

    /// The remote resource does not exist (HTTP 404).
    #[error("the resource {url} could not be found")]
    NotFound {
        /// URL of the resource that was requested.
        url: String,
    },

    /// The request was rejected by the server (HTTP 400).
    #[error("{message}")]
    InvalidRequest {
        /// Server-supplied message, or a generic bad-request text.
        message: String,
    },

    /// The server failed to handle the request (any other non-2xx status,
    /// after the one permitted retry for 5xx).
    #[error("{message}")]
    Service {
        /// The HTTP status code of the final response.
        status: u16,
        /// Server-supplied message, or a generic service-unavailable text.
        message: String,
    },

    /// The resource record was fetched but does not contain the requested
    /// attribute.
    #[error("resource at {url} has no attribute `{attribute}`")]
    MissingAttribute {
        /// URL of the resource that was read.
        url: String,
        /// The attribute that was requested.
        attribute: String,
    },

    /// Network or connection error from the underlying transport.
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// A successful response carried a body that was not valid JSON.
    #[error("failed to decode response body: {0}")]
    Decode(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn configuration_error_shows_both_setup_paths() {
        let message = Error::Configuration.to_string();
        assert!(message.contains("Client::new("));
        assert!(message.contains("TWILIO_ACCOUNT_SID"));
        assert!(message.contains("TWILIO_AUTH_TOKEN"));
        assert!(message.contains("Client::from_env()"));
    }

    #[test]
    fn not_found_error_carries_url() {
        let error = Error::NotFound {
            url: "https://api.twilio.com/2010-04-01/Accounts/AC1/Calls/CA1".to_string(),
        };
        assert!(error.to_string().contains("/Calls/CA1"));
    }

    #[test]
    fn missing_attribute_error_names_the_attribute() {
        let error = Error::MissingAttribute {
            url: "https://example.invalid/Calls/CA1".to_string(),
            attribute: "duration".to_string(),
        };
        let message = error.to_string();
        assert!(message.contains("duration"));
        assert!(message.contains("Calls/CA1"));
    }

    #[test]
    fn error_implements_std_error() {
        let _: &dyn std::error::Error = &Error::Configuration;
    }
}
