//! # Twilio API Rust SDK
//!
//! A Rust SDK for the Twilio REST API: a resource-oriented client that maps
//! remote account, call, message, and conference resources onto local
//! handles, plus a builder for the TwiML markup returned by call-handling
//! endpoints.
//!
//! ## Overview
//!
//! This SDK provides:
//! - A [`Client`] with account-scoped URLs and a resource-type registry
//! - Generic [`Collection`] / [`Resource`] handles with lazy loading,
//!   server-driven pagination, and partial updates
//! - Parameter encoding from `snake_case` arguments to the API's
//!   UpperCamelCase wire names via [`Params`]
//! - Automatic one-shot retry for transient server failures
//! - An [`Error`] taxonomy that distinguishes "absent", "caller mistake",
//!   and "server fault" by variant
//! - TwiML generation via [`twiml::Element`]
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use twilio_api::{Client, Params};
//!
//! // Credentials from TWILIO_ACCOUNT_SID / TWILIO_AUTH_TOKEN.
//! let client = Client::from_env()?;
//!
//! // Place a call.
//! let call = client
//!     .calls()
//!     .make("+14158675309", "+15105551234", "https://example.com/handle")
//!     .await?;
//! println!("placed {}", call.sid().await?);
//!
//! // Iterate a filtered listing across every page.
//! let mut pager = client
//!     .calls()
//!     .iterate(Params::new().with("status", "completed"));
//! while let Some(call) = pager.next().await? {
//!     println!("{:?}", call.get("duration").await?);
//! }
//! ```
//!
//! ## Lazy loading
//!
//! Key-based access performs no I/O; the detail record is fetched exactly
//! once, on the first attribute read:
//!
//! ```rust,ignore
//! let call = client.calls().get("CAaf0c49374b67e65717c398b2d6a72cdb");
//! let status = call.get("status").await?;    // one fetch
//! let sender = call.get("sender").await?;    // cached ("from" is renamed)
//! let recordings = call.subresource("recordings").await?;
//! ```
//!
//! ## TwiML
//!
//! ```rust
//! use twilio_api::twiml::Element;
//!
//! let mut response = Element::response();
//! response.child("Say").body("Hello World");
//! assert_eq!(
//!     response.to_xml(),
//!     r#"<?xml version="1.0" encoding="UTF-8"?><Response><Say>Hello World</Say></Response>"#
//! );
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: credentials are resolved once per client and
//!   shared read-only by every handle
//! - **Open schemas**: resource fields and markup tags are string-keyed,
//!   not fixed enums, so the surface grows with the server
//! - **Thread-safe**: handles are `Send + Sync`; the lazy-load transition
//!   is guarded so concurrent readers trigger a single fetch
//! - **Async-first**: designed for use with the Tokio runtime

pub mod clients;
pub mod config;
pub mod error;
pub mod params;
pub mod rest;
pub mod twiml;

// Re-export public types at crate root for convenience
pub use config::{Credentials, ENV_ACCOUNT_SID, ENV_AUTH_TOKEN};
pub use error::{Error, Result};
pub use params::{ParamValue, Params};
pub use rest::{Client, ClientBuilder, Collection, Pager, Resource, API_VERSION, DEFAULT_BASE_URL};

// Re-export the resource-type specializations
pub use rest::resources::{CallerIds, Calls, Messages, Participants, PhoneNumbers};
