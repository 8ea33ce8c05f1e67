use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

use super::catalog::is_known_barangay;

/// Identifier for a listing. The seed catalog uses numbers, listings published through the
/// add form receive generated text ids.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ListingId {
    Numeric(u64),
    Text(String),
}

impl ListingId {
    /// Interpret a raw path segment, preferring the numeric form.
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        match trimmed.parse::<u64>() {
            Ok(value) => ListingId::Numeric(value),
            Err(_) => ListingId::Text(trimmed.to_string()),
        }
    }
}

impl fmt::Display for ListingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ListingId::Numeric(value) => write!(f, "{value}"),
            ListingId::Text(value) => f.write_str(value),
        }
    }
}

impl From<u64> for ListingId {
    fn from(value: u64) -> Self {
        ListingId::Numeric(value)
    }
}

impl From<&str> for ListingId {
    fn from(value: &str) -> Self {
        ListingId::Text(value.to_string())
    }
}

/// Listing bucket; drives the map pin and the type filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum PropertyType {
    Commercial,
    Private,
}

impl PropertyType {
    pub const fn label(self) -> &'static str {
        match self {
            PropertyType::Commercial => "Commercial",
            PropertyType::Private => "Private",
        }
    }

    pub const fn pin_icon(self) -> &'static str {
        match self {
            PropertyType::Commercial => "office-building",
            PropertyType::Private => "home",
        }
    }

    pub const fn pin_color(self) -> &'static str {
        match self {
            PropertyType::Commercial => "#FAB700",
            PropertyType::Private => "#089A96",
        }
    }
}

impl fmt::Display for PropertyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown property type '{0}'")]
pub struct UnknownPropertyType(pub String);

impl FromStr for PropertyType {
    type Err = UnknownPropertyType;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "commercial" => Ok(PropertyType::Commercial),
            "private" => Ok(PropertyType::Private),
            _ => Err(UnknownPropertyType(value.to_string())),
        }
    }
}

impl<'de> Deserialize<'de> for PropertyType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// Decimal-degree point. Ranges are not validated; points only place things on the map.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// One property for sale or rent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Listing {
    pub id: ListingId,
    pub title: String,
    #[serde(rename = "type")]
    pub property_type: PropertyType,
    /// Display string such as `₱4.5M`; never used for arithmetic.
    pub price: String,
    pub address: String,
    pub lat: f64,
    pub lng: f64,
    pub images: Vec<String>,
    pub details: String,
    #[serde(default)]
    pub documents: Vec<String>,
    /// Closed boundary; empty when no shape was drawn.
    #[serde(default)]
    pub polygon: Vec<Coordinate>,
    pub pay_to_view: bool,
    #[serde(default)]
    pub is_user_created: bool,
}

/// Add-listing form submission before it becomes a [`Listing`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingDraft {
    pub title: String,
    #[serde(default)]
    pub price: String,
    #[serde(rename = "type")]
    pub property_type: PropertyType,
    pub barangay: String,
    #[serde(default)]
    pub details: String,
    /// Pin dropped on the location picker.
    #[serde(default)]
    pub location: Option<Coordinate>,
    #[serde(default)]
    pub polygon: Vec<Coordinate>,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub documents: Vec<String>,
}

/// Reasons a draft cannot be published.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DraftError {
    #[error("listing title is required")]
    MissingTitle,
    #[error("a location pin is required before saving")]
    MissingLocation,
    #[error("unknown barangay '{0}'")]
    UnknownBarangay(String),
}

impl ListingDraft {
    /// Check the draft against the barangay catalog and required fields.
    pub fn validate(&self) -> Result<(), DraftError> {
        if self.title.trim().is_empty() {
            return Err(DraftError::MissingTitle);
        }
        if self.location.is_none() {
            return Err(DraftError::MissingLocation);
        }
        if !is_known_barangay(&self.barangay) {
            return Err(DraftError::UnknownBarangay(self.barangay.clone()));
        }
        Ok(())
    }

    /// Build the user-created listing. Call [`ListingDraft::validate`] first; a missing
    /// location is reported rather than defaulted.
    pub fn into_listing(
        self,
        id: ListingId,
        city: &str,
        placeholder_image: &str,
    ) -> Result<Listing, DraftError> {
        let location = self.location.ok_or(DraftError::MissingLocation)?;
        let images = if self.images.is_empty() {
            vec![placeholder_image.to_string()]
        } else {
            self.images
        };

        Ok(Listing {
            id,
            title: self.title.trim().to_string(),
            property_type: self.property_type,
            price: self.price,
            address: format!("{}, {}", self.barangay.trim(), city),
            lat: location.latitude,
            lng: location.longitude,
            images,
            details: self.details,
            documents: self.documents,
            polygon: self.polygon,
            pay_to_view: true,
            is_user_created: true,
        })
    }
}
