//! Resource-oriented REST client.
//!
//! This module maps URL-addressable remote resources onto local handles:
//!
//! - [`Client`]: credential resolution, account-scoped base URLs, and the
//!   resource-type registry
//! - [`Collection`]: an addressable set of same-typed resources, with
//!   key-based access, creation, deletion, and paginated traversal
//! - [`Resource`]: a single remote entity with lazy fetch-on-first-access,
//!   partial update, and deletion
//! - [`Pager`]: the server-driven page traversal behind
//!   [`Collection::iterate`]
//! - [`resources`]: specializations adding domain conveniences on top of
//!   the generic machinery

mod client;
mod collection;
mod resource;
pub mod resources;

pub use client::{Client, ClientBuilder, API_VERSION, DEFAULT_BASE_URL};
pub use collection::{Collection, Pager};
pub use resource::Resource;
