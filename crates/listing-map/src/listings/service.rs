use tracing::{info, warn};

use super::domain::{DraftError, Listing, ListingDraft, ListingId};
use super::filter::FilterCriteria;
use super::store::{ListingStore, SharedListingStore, StoreError};
use crate::config::ListingsConfig;

/// Publishing, browsing, bookmarking, and "My Listings" on top of the shared store.
#[derive(Debug, Clone)]
pub struct ListingService {
    store: SharedListingStore,
    config: ListingsConfig,
}

impl ListingService {
    pub fn new(store: SharedListingStore, config: ListingsConfig) -> Self {
        Self { store, config }
    }

    /// Build a service over a fresh store, seeded when the configuration asks for it.
    pub fn from_config(config: ListingsConfig) -> Self {
        let store = if config.seed_catalog {
            ListingStore::with_catalog()
        } else {
            ListingStore::empty()
        };
        Self::new(SharedListingStore::new(store), config)
    }

    pub fn store(&self) -> &SharedListingStore {
        &self.store
    }

    pub fn config(&self) -> &ListingsConfig {
        &self.config
    }

    /// Validate a draft and add it to the front of the collection.
    pub fn publish(&self, draft: ListingDraft) -> Result<Listing, ListingServiceError> {
        if let Err(err) = draft.validate() {
            warn!(error = %err, "rejecting listing draft");
            return Err(err.into());
        }

        let config = &self.config;
        let listing = self.store.write(|store| {
            let id = store.allocate_id();
            let listing = draft.into_listing(id, &config.city, &config.placeholder_image)?;
            store.add_listing(listing.clone())?;
            Ok::<_, ListingServiceError>(listing)
        })??;

        info!(
            id = %listing.id,
            title = %listing.title,
            property_type = %listing.property_type,
            address = %listing.address,
            "listing published"
        );
        Ok(listing)
    }

    pub fn browse(&self, criteria: &FilterCriteria) -> Result<Vec<Listing>, ListingServiceError> {
        let listings = self
            .store
            .read(|store| store.search(criteria).into_iter().cloned().collect())?;
        Ok(listings)
    }

    /// Map a raw path segment onto a stored id.
    pub fn resolve_id(&self, raw: &str) -> Result<ListingId, ListingServiceError> {
        Ok(self.store.read(|store| store.resolve_id(raw))?)
    }

    pub fn get(&self, id: &ListingId) -> Result<Option<Listing>, ListingServiceError> {
        Ok(self.store.read(|store| store.get(id).cloned())?)
    }

    pub fn my_listings(&self) -> Result<Vec<Listing>, ListingServiceError> {
        let listings = self
            .store
            .read(|store| store.user_listings().into_iter().cloned().collect())?;
        Ok(listings)
    }

    pub fn saved_listings(&self) -> Result<Vec<Listing>, ListingServiceError> {
        let listings = self
            .store
            .read(|store| store.saved_listings().into_iter().cloned().collect())?;
        Ok(listings)
    }

    /// `Some(state)` after toggling, `None` when the listing does not exist.
    pub fn toggle_bookmark(&self, id: &ListingId) -> Result<Option<bool>, ListingServiceError> {
        Ok(self.store.write(|store| store.toggle_bookmark(id))?)
    }

    /// Delete from "My Listings". Catalog records cannot be removed here; unknown ids are a
    /// no-op and return `None`.
    pub fn delete_my_listing(&self, id: &ListingId) -> Result<Option<Listing>, ListingServiceError> {
        self.store.write(|store| {
            let user_created = match store.get(id) {
                Some(listing) => listing.is_user_created,
                None => return Ok(None),
            };
            if !user_created {
                warn!(%id, "refusing to delete catalog listing");
                return Err(ListingServiceError::NotUserCreated(id.clone()));
            }
            Ok(store.delete_listing(id))
        })?
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ListingServiceError {
    #[error(transparent)]
    Draft(#[from] DraftError),
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error("listing {0} was not created by this user")]
    NotUserCreated(ListingId),
}
