//! Built-in General Santos City catalog used to seed a new store.

use super::domain::{Coordinate, Listing, ListingId, PropertyType};

/// Image reference substituted when a draft is published without photos.
pub const DEFAULT_PLACEHOLDER_IMAGE: &str =
    "https://images.unsplash.com/photo-1500382017468-9049fed747ef?auto=format&fit=crop&q=80&w=600";

/// Barangays offered by the neighborhood filter and the add-listing form.
pub const BARANGAYS: [&str; 27] = [
    "Apopong",
    "Baluan",
    "Batomelong",
    "Buayan",
    "Bula",
    "Calumpang",
    "City Heights",
    "Conel",
    "Dadiangas East",
    "Dadiangas North",
    "Dadiangas South",
    "Dadiangas West",
    "Fatima",
    "Katangawan",
    "Labangal",
    "Lagao",
    "Ligaya",
    "Mabuhay",
    "Mao-i",
    "Olympog",
    "San Isidro",
    "San Jose",
    "Siguel",
    "Sinawal",
    "Tambler",
    "Tinagacan",
    "Upper Labay",
];

pub fn is_known_barangay(name: &str) -> bool {
    BARANGAYS.contains(&name.trim())
}

fn unsplash(photo: &str) -> String {
    format!("https://images.unsplash.com/{photo}?auto=format&fit=crop&q=80&w=600")
}

/// Five-vertex boundary around a pin, the shape every seed lot uses.
fn lot_boundary(lat: f64, lng: f64) -> Vec<Coordinate> {
    vec![
        Coordinate::new(lat + 0.0005, lng - 0.0005),
        Coordinate::new(lat + 0.0005, lng + 0.0005),
        Coordinate::new(lat - 0.0005, lng + 0.0010),
        Coordinate::new(lat - 0.0010, lng),
        Coordinate::new(lat - 0.0005, lng - 0.0010),
    ]
}

struct SeedLot {
    id: u64,
    title: &'static str,
    property_type: PropertyType,
    price: &'static str,
    address: &'static str,
    lat: f64,
    lng: f64,
    photos: &'static [&'static str],
    details: &'static str,
}

const SEED_LOTS: [SeedLot; 4] = [
    SeedLot {
        id: 1,
        title: "101ha Agri-Residential Estate",
        property_type: PropertyType::Commercial,
        price: "₱659.3M",
        address: "National Hwy, Brgy. Tambler, GenSan",
        lat: 6.0650,
        lng: 125.1300,
        photos: &[
            "photo-1500382017468-9049fed747ef",
            "photo-1470071459604-3b5ec3a7fe05",
            "photo-1449844908441-8829872d2607",
        ],
        details: "101.43 Hectares. Flat terrain front, rolling back overlooking sea. Near Fish ports and Resorts.",
    },
    SeedLot {
        id: 2,
        title: "60ha Prime Development Lot",
        property_type: PropertyType::Commercial,
        price: "₱1.2B",
        address: "Brgy. San Isidro, GenSan",
        lat: 6.1350,
        lng: 125.1950,
        photos: &[
            "photo-1449844908441-8829872d2607",
            "photo-1599809275372-b4036fa43633",
        ],
        details: "R2 Zoning. Along Brgy Road with 900m frontage. Near Dionisia Pacquiao subdivision.",
    },
    SeedLot {
        id: 3,
        title: "Corner Lot near UST",
        property_type: PropertyType::Private,
        price: "₱4.5M",
        address: "Baluan, General Santos City",
        lat: 6.1300,
        lng: 125.1600,
        photos: &[
            "photo-1599809275372-b4036fa43633",
            "photo-1568605114967-8130f3a36994",
        ],
        details: "250m from Highway. Corner lot along cemented road. Ideal for apartment or mini warehouse.",
    },
    SeedLot {
        id: 4,
        title: "Semi-Commercial Lot",
        property_type: PropertyType::Private,
        price: "₱4M",
        address: "Mabuhay, General Santos City",
        lat: 6.1600,
        lng: 125.1800,
        photos: &[
            "photo-1564013799919-ab600027ffc6",
            "photo-1600585154340-be6161a56a0c",
        ],
        details: "130m from Diversion Rd. 15 mins to UST. Best for office, warehouse, or simple subdivision.",
    },
];

/// Catalog records in display order. None of them are user-created.
pub fn seed_listings() -> Vec<Listing> {
    SEED_LOTS
        .iter()
        .map(|lot| Listing {
            id: ListingId::Numeric(lot.id),
            title: lot.title.to_string(),
            property_type: lot.property_type,
            price: lot.price.to_string(),
            address: lot.address.to_string(),
            lat: lot.lat,
            lng: lot.lng,
            images: lot.photos.iter().map(|photo| unsplash(photo)).collect(),
            details: lot.details.to_string(),
            documents: Vec::new(),
            polygon: lot_boundary(lot.lat, lot.lng),
            pay_to_view: true,
            is_user_created: false,
        })
        .collect()
}
