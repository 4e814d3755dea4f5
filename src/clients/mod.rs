//! Transport layer for API communication.
//!
//! This module provides the [`Invoker`] type, the single place where HTTP
//! requests are issued. Higher layers ([`Resource`](crate::rest::Resource),
//! [`Collection`](crate::rest::Collection)) never open sockets themselves;
//! they delegate every fetch, create, update, and delete to an `Invoker`
//! shared through an `Arc`.
//!
//! # Retry behavior
//!
//! A request that fails with a server-class status (>= 500) is retried
//! exactly once, immediately and identically. A second server-class failure
//! propagates as [`Error::Service`](crate::Error::Service). No other status
//! is retried.

mod invoker;

pub use invoker::{Invoker, SDK_VERSION};
