//! Conference participant control.

use std::ops::Deref;

use crate::error::Result;
use crate::params::Params;
use crate::rest::Collection;

/// The participants of a single conference, keyed by call sid.
#[derive(Debug, Clone)]
pub struct Participants {
    collection: Collection,
}

impl Participants {
    pub(crate) const fn new(collection: Collection) -> Self {
        Self { collection }
    }

    /// Mutes a participant.
    ///
    /// # Errors
    ///
    /// Propagates the classified transport error.
    pub async fn mute(&self, call_sid: &str) -> Result<()> {
        self.collection
            .get(call_sid)
            .update(&Params::new().with("muted", true))
            .await
    }

    /// Unmutes a participant.
    ///
    /// # Errors
    ///
    /// Propagates the classified transport error.
    pub async fn unmute(&self, call_sid: &str) -> Result<()> {
        self.collection
            .get(call_sid)
            .update(&Params::new().with("muted", false))
            .await
    }

    /// Removes a participant from the conference.
    ///
    /// # Errors
    ///
    /// Propagates the classified transport error.
    pub async fn kick(&self, call_sid: &str) -> Result<()> {
        self.collection.delete(call_sid).await
    }
}

impl Deref for Participants {
    type Target = Collection;

    fn deref(&self) -> &Collection {
        &self.collection
    }
}
