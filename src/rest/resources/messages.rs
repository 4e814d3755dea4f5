//! SMS message sending.

use std::ops::Deref;

use crate::error::Result;
use crate::params::Params;
use crate::rest::{Collection, Resource};

/// The SMS messages collection.
#[derive(Debug, Clone)]
pub struct Messages {
    collection: Collection,
}

impl Messages {
    pub(crate) const fn new(collection: Collection) -> Self {
        Self { collection }
    }

    /// Sends a message.
    ///
    /// # Errors
    ///
    /// Propagates the classified transport error; a 400 carries the
    /// server's validation message (bad numbers, oversized body).
    pub async fn send(&self, from: &str, to: &str, body: &str) -> Result<Resource> {
        self.collection
            .create(
                &Params::new()
                    .with("from", from)
                    .with("to", to)
                    .with("body", body),
            )
            .await
    }
}

impl Deref for Messages {
    type Target = Collection;

    fn deref(&self) -> &Collection {
        &self.collection
    }
}
