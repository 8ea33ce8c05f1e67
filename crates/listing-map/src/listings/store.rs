//! Authoritative listing collection and bookmark set.
//!
//! The store is constructed explicitly and handed to every consumer. Mutations notify
//! subscribers synchronously once the collection and bookmarks are consistent again, so a
//! subscriber never observes a bookmark for a listing that has already been removed.

use std::collections::HashSet;
use std::fmt;
use std::sync::{Arc, Mutex};

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{debug, warn};

use super::catalog::seed_listings;
use super::domain::{Listing, ListingId};
use super::filter::{matches, FilterCriteria};

/// Callback invoked after every state change.
pub type Subscriber = Box<dyn Fn(&StoreChange) + Send>;

/// Handle returned by [`ListingStore::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// Change notification delivered to subscribers.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StoreChange {
    pub revision: u64,
    pub kind: ChangeKind,
    pub occurred_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "change", rename_all = "snake_case")]
pub enum ChangeKind {
    Added {
        id: ListingId,
    },
    Deleted {
        id: ListingId,
        bookmark_cleared: bool,
    },
    BookmarkToggled {
        id: ListingId,
        bookmarked: bool,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    #[error("listing {0} already exists")]
    DuplicateId(ListingId),
    #[error("listing store unavailable: {0}")]
    Unavailable(String),
}

pub struct ListingStore {
    listings: Vec<Listing>,
    bookmarked: HashSet<ListingId>,
    subscribers: Vec<(SubscriptionId, Subscriber)>,
    next_subscription: u64,
    next_generated: u64,
    revision: u64,
}

impl fmt::Debug for ListingStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListingStore")
            .field("listings", &self.listings.len())
            .field("bookmarked", &self.bookmarked.len())
            .field("subscribers", &self.subscribers.len())
            .field("revision", &self.revision)
            .finish()
    }
}

impl Default for ListingStore {
    fn default() -> Self {
        Self::empty()
    }
}

impl ListingStore {
    /// Start from `seed` in the given order. Later duplicates of an id are dropped.
    pub fn new(seed: Vec<Listing>) -> Self {
        let mut seen = HashSet::new();
        let listings = seed
            .into_iter()
            .filter(|listing| {
                let fresh = seen.insert(listing.id.clone());
                if !fresh {
                    warn!(id = %listing.id, "dropping duplicate seed listing");
                }
                fresh
            })
            .collect();

        Self {
            listings,
            bookmarked: HashSet::new(),
            subscribers: Vec::new(),
            next_subscription: 1,
            next_generated: 1,
            revision: 0,
        }
    }

    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    pub fn with_catalog() -> Self {
        Self::new(seed_listings())
    }

    /// Most recent first.
    pub fn listings(&self) -> &[Listing] {
        &self.listings
    }

    pub fn user_listings(&self) -> Vec<&Listing> {
        self.listings
            .iter()
            .filter(|listing| listing.is_user_created)
            .collect()
    }

    pub fn saved_listings(&self) -> Vec<&Listing> {
        self.listings
            .iter()
            .filter(|listing| self.bookmarked.contains(&listing.id))
            .collect()
    }

    pub fn bookmarked_ids(&self) -> &HashSet<ListingId> {
        &self.bookmarked
    }

    pub fn search(&self, criteria: &FilterCriteria) -> Vec<&Listing> {
        self.listings
            .iter()
            .filter(|listing| matches(listing, criteria))
            .collect()
    }

    pub fn get(&self, id: &ListingId) -> Option<&Listing> {
        self.listings.iter().find(|listing| &listing.id == id)
    }

    /// Parse a raw id, preferring the numeric form unless only a text id of the same
    /// spelling is stored.
    pub fn resolve_id(&self, raw: &str) -> ListingId {
        let parsed = ListingId::parse(raw);
        if matches!(parsed, ListingId::Numeric(_)) && !self.contains(&parsed) {
            let text = ListingId::Text(raw.trim().to_string());
            if self.contains(&text) {
                return text;
            }
        }
        parsed
    }

    pub fn contains(&self, id: &ListingId) -> bool {
        self.get(id).is_some()
    }

    pub fn is_bookmarked(&self, id: &ListingId) -> bool {
        self.bookmarked.contains(id)
    }

    pub fn len(&self) -> usize {
        self.listings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listings.is_empty()
    }

    /// Number of state changes applied since construction.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Prepend `listing`. Ids must be unique for the lifetime of the store.
    pub fn add_listing(&mut self, listing: Listing) -> Result<(), StoreError> {
        if self.contains(&listing.id) {
            warn!(id = %listing.id, "rejecting listing with duplicate id");
            return Err(StoreError::DuplicateId(listing.id));
        }

        let id = listing.id.clone();
        self.listings.insert(0, listing);
        debug!(%id, total = self.listings.len(), "listing added");
        self.commit(ChangeKind::Added { id });
        Ok(())
    }

    /// Remove the listing and its bookmark together. Absent ids are a no-op.
    pub fn delete_listing(&mut self, id: &ListingId) -> Option<Listing> {
        let position = self.listings.iter().position(|listing| &listing.id == id)?;
        let removed = self.listings.remove(position);
        let bookmark_cleared = self.bookmarked.remove(id);
        debug!(%id, bookmark_cleared, "listing deleted");
        self.commit(ChangeKind::Deleted {
            id: id.clone(),
            bookmark_cleared,
        });
        Some(removed)
    }

    /// Flip bookmark membership. Returns the new state, or `None` when no such listing
    /// exists (nothing changes in that case).
    pub fn toggle_bookmark(&mut self, id: &ListingId) -> Option<bool> {
        if !self.contains(id) {
            debug!(%id, "ignoring bookmark toggle for unknown listing");
            return None;
        }

        let bookmarked = if self.bookmarked.remove(id) {
            false
        } else {
            self.bookmarked.insert(id.clone());
            true
        };
        debug!(%id, bookmarked, "bookmark toggled");
        self.commit(ChangeKind::BookmarkToggled {
            id: id.clone(),
            bookmarked,
        });
        Some(bookmarked)
    }

    /// Next `lst-NNNNNN` id not already present in the collection.
    pub fn allocate_id(&mut self) -> ListingId {
        loop {
            let candidate = ListingId::Text(format!("lst-{:06}", self.next_generated));
            self.next_generated += 1;
            if !self.contains(&candidate) {
                return candidate;
            }
        }
    }

    pub fn subscribe(&mut self, subscriber: Subscriber) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.subscribers.push((id, subscriber));
        id
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(existing, _)| *existing != id);
        self.subscribers.len() != before
    }

    fn commit(&mut self, kind: ChangeKind) {
        self.revision += 1;
        let change = StoreChange {
            revision: self.revision,
            kind,
            occurred_at: Utc::now(),
        };
        for (_, subscriber) in &self.subscribers {
            subscriber(&change);
        }
    }
}

/// Store handle shared by HTTP handlers. Each call holds the lock for the whole operation,
/// so mutations are applied one at a time. Subscribers run under that lock and must not
/// call back into the handle.
#[derive(Debug, Clone, Default)]
pub struct SharedListingStore {
    inner: Arc<Mutex<ListingStore>>,
}

impl SharedListingStore {
    pub fn new(store: ListingStore) -> Self {
        Self {
            inner: Arc::new(Mutex::new(store)),
        }
    }

    pub fn read<T>(&self, f: impl FnOnce(&ListingStore) -> T) -> Result<T, StoreError> {
        let guard = self
            .inner
            .lock()
            .map_err(|err| StoreError::Unavailable(err.to_string()))?;
        Ok(f(&guard))
    }

    pub fn write<T>(&self, f: impl FnOnce(&mut ListingStore) -> T) -> Result<T, StoreError> {
        let mut guard = self
            .inner
            .lock()
            .map_err(|err| StoreError::Unavailable(err.to_string()))?;
        Ok(f(&mut guard))
    }
}

impl From<ListingStore> for SharedListingStore {
    fn from(store: ListingStore) -> Self {
        Self::new(store)
    }
}
