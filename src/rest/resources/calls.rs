//! Call placement and in-progress call control.

use std::ops::Deref;

use crate::error::Result;
use crate::params::Params;
use crate::rest::{Collection, Resource};

/// Status sentinel that cancels a queued or ringing call.
pub const STATUS_CANCELED: &str = "canceled";

/// Status sentinel that ends an in-progress call.
pub const STATUS_COMPLETED: &str = "completed";

/// The calls collection.
///
/// Dereferences to [`Collection`] for the generic operations; the methods
/// here only wrap `create`/`update` with fixed field sets.
#[derive(Debug, Clone)]
pub struct Calls {
    collection: Collection,
}

impl Calls {
    pub(crate) const fn new(collection: Collection) -> Self {
        Self { collection }
    }

    /// Places an outgoing call. `url` is the caller-supplied endpoint that
    /// returns the markup describing how to handle the call.
    ///
    /// # Errors
    ///
    /// Propagates the classified transport error.
    pub async fn make(&self, from: &str, to: &str, url: &str) -> Result<Resource> {
        self.collection
            .create(
                &Params::new()
                    .with("from", from)
                    .with("to", to)
                    .with("url", url),
            )
            .await
    }

    /// Ends an in-progress call.
    ///
    /// # Errors
    ///
    /// Propagates the classified transport error.
    pub async fn hangup(&self, sid: &str) -> Result<()> {
        self.collection
            .get(sid)
            .update(&Params::new().with("status", STATUS_COMPLETED))
            .await
    }

    /// Cancels a call that has not yet been answered.
    ///
    /// # Errors
    ///
    /// Propagates the classified transport error.
    pub async fn cancel(&self, sid: &str) -> Result<()> {
        self.collection
            .get(sid)
            .update(&Params::new().with("status", STATUS_CANCELED))
            .await
    }

    /// Redirects an in-progress call to a new handling URL.
    ///
    /// # Errors
    ///
    /// Propagates the classified transport error.
    pub async fn redirect(&self, sid: &str, url: &str) -> Result<()> {
        self.collection
            .get(sid)
            .update(&Params::new().with("url", url))
            .await
    }
}

impl Deref for Calls {
    type Target = Collection;

    fn deref(&self) -> &Collection {
        &self.collection
    }
}
