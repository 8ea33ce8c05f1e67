//! Listing catalog, bookmark store, filtering, and the HTTP surface over them.

pub mod catalog;
pub mod domain;
pub mod filter;
pub mod router;
pub mod service;
pub mod store;

#[cfg(test)]
mod tests;

pub use domain::{Coordinate, DraftError, Listing, ListingDraft, ListingId, PropertyType};
pub use filter::{matches, FilterCriteria, TypeFilter};
pub use router::listing_router;
pub use service::{ListingService, ListingServiceError};
pub use store::{
    ChangeKind, ListingStore, SharedListingStore, StoreChange, StoreError, Subscriber,
    SubscriptionId,
};
