use std::sync::{Arc, Mutex};

use axum::response::Response;
use serde_json::Value;

use crate::config::ListingsConfig;
use crate::listings::domain::{Coordinate, Listing, ListingDraft, ListingId, PropertyType};
use crate::listings::store::{ListingStore, SharedListingStore, StoreChange};
use crate::listings::{listing_router, ListingService};

pub(super) fn listing(id: u64, property_type: PropertyType, title: &str, address: &str) -> Listing {
    Listing {
        id: ListingId::Numeric(id),
        title: title.to_string(),
        property_type,
        price: "₱4M".to_string(),
        address: address.to_string(),
        lat: 6.1164,
        lng: 125.1716,
        images: vec!["https://images.example.test/lot.jpg".to_string()],
        details: "Cemented road access.".to_string(),
        documents: Vec::new(),
        polygon: Vec::new(),
        pay_to_view: true,
        is_user_created: false,
    }
}

/// Commercial lot in Tambler.
pub(super) fn listing_a() -> Listing {
    listing(
        1,
        PropertyType::Commercial,
        "Fish Port Warehouse",
        "X, Brgy. Tambler, GenSan",
    )
}

/// Private lot in Lagao.
pub(super) fn listing_b() -> Listing {
    listing(
        2,
        PropertyType::Private,
        "Lagao Family Home",
        "Y, Brgy. Lagao, GenSan",
    )
}

pub(super) fn user_listing(id: &str) -> Listing {
    let mut listing = listing(
        0,
        PropertyType::Private,
        "Apopong Starter Lot",
        "Apopong, GenSan",
    );
    listing.id = ListingId::from(id);
    listing.is_user_created = true;
    listing
}

pub(super) fn store_ab() -> ListingStore {
    ListingStore::new(vec![listing_a(), listing_b()])
}

pub(super) fn draft() -> ListingDraft {
    ListingDraft {
        title: "Calumpang Beachfront".to_string(),
        price: "₱12M".to_string(),
        property_type: PropertyType::Commercial,
        barangay: "Calumpang".to_string(),
        details: "Beach access, titled.".to_string(),
        location: Some(Coordinate::new(6.0800, 125.1500)),
        polygon: vec![
            Coordinate::new(6.0805, 125.1495),
            Coordinate::new(6.0805, 125.1505),
            Coordinate::new(6.0795, 125.1505),
        ],
        images: Vec::new(),
        documents: vec!["tct-scan.pdf".to_string()],
    }
}

pub(super) fn listings_config() -> ListingsConfig {
    ListingsConfig {
        seed_catalog: false,
        placeholder_image: "https://images.example.test/placeholder.png".to_string(),
        city: "GenSan".to_string(),
    }
}

pub(super) fn service_with(store: ListingStore) -> ListingService {
    ListingService::new(SharedListingStore::new(store), listings_config())
}

pub(super) fn router_with(store: ListingStore) -> axum::Router {
    listing_router(Arc::new(service_with(store)))
}

/// Subscriber that records every change it receives.
pub(super) fn recorder(store: &mut ListingStore) -> Arc<Mutex<Vec<StoreChange>>> {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = seen.clone();
    store.subscribe(Box::new(move |change| {
        sink.lock().expect("recorder mutex poisoned").push(change.clone());
    }));
    seen
}

pub(super) fn ids(listings: &[&Listing]) -> Vec<ListingId> {
    listings.iter().map(|listing| listing.id.clone()).collect()
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
