//! Phone number search and provisioning.

use std::ops::Deref;
use std::sync::Arc;

use crate::clients::Invoker;
use crate::error::Result;
use crate::params::Params;
use crate::rest::{Collection, Resource};

/// The incoming phone numbers collection, plus search over the available
/// number inventory.
///
/// Searches address the `AvailablePhoneNumbers` listing, which is a
/// sibling of the provisioned-numbers collection, so this wrapper also
/// carries the account base URL.
#[derive(Debug, Clone)]
pub struct PhoneNumbers {
    collection: Collection,
    invoker: Arc<Invoker>,
    account_uri: String,
}

impl PhoneNumbers {
    pub(crate) const fn new(
        collection: Collection,
        invoker: Arc<Invoker>,
        account_uri: String,
    ) -> Self {
        Self {
            collection,
            invoker,
            account_uri,
        }
    }

    /// Searches local numbers available for purchase in a country.
    ///
    /// `country` is an ISO 3166-1 alpha-2 code; `filters` supports the
    /// listing's search parameters (`area_code`, `contains`, ...).
    ///
    /// # Errors
    ///
    /// Propagates the classified transport error.
    pub async fn search(&self, country: &str, filters: Params) -> Result<Vec<Resource>> {
        self.available(country, "Local").values(filters).await
    }

    /// Searches toll-free numbers available for purchase in a country.
    ///
    /// # Errors
    ///
    /// Propagates the classified transport error.
    pub async fn search_toll_free(&self, country: &str, filters: Params) -> Result<Vec<Resource>> {
        self.available(country, "TollFree").values(filters).await
    }

    /// Provisions a number found through search.
    ///
    /// # Errors
    ///
    /// Propagates the classified transport error; a 400 means the number is
    /// no longer available.
    pub async fn purchase(&self, phone_number: &str) -> Result<Resource> {
        self.collection
            .create(&Params::new().with("phone_number", phone_number))
            .await
    }

    fn available(&self, country: &str, kind: &str) -> Collection {
        Collection::new(
            Arc::clone(&self.invoker),
            format!("{}/AvailablePhoneNumbers/{country}/{kind}", self.account_uri),
            "available_phone_numbers",
        )
    }
}

impl Deref for PhoneNumbers {
    type Target = Collection;

    fn deref(&self) -> &Collection {
        &self.collection
    }
}
