//! Outgoing caller ID validation.

use std::ops::Deref;

use crate::error::Result;
use crate::params::Params;
use crate::rest::{Collection, Resource};

/// The outgoing caller IDs collection.
#[derive(Debug, Clone)]
pub struct CallerIds {
    collection: Collection,
}

impl CallerIds {
    pub(crate) const fn new(collection: Collection) -> Self {
        Self { collection }
    }

    /// Starts a validation request for a phone number the account wants to
    /// use as a caller ID. The returned record carries the
    /// `validation_code` the user must read back when the platform calls
    /// them.
    ///
    /// # Errors
    ///
    /// Propagates the classified transport error.
    pub async fn validate(&self, phone_number: &str) -> Result<Resource> {
        self.collection
            .create(&Params::new().with("phone_number", phone_number))
            .await
    }
}

impl Deref for CallerIds {
    type Target = Collection;

    fn deref(&self) -> &Collection {
        &self.collection
    }
}
