use serde::{Deserialize, Deserializer, Serialize};

use super::domain::{Listing, PropertyType};

/// Type bucket selected on the browse screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TypeFilter {
    #[default]
    All,
    Commercial,
    Private,
}

impl TypeFilter {
    /// Unrecognised values leave the criterion inactive.
    pub fn parse(raw: &str) -> Self {
        match raw.parse::<PropertyType>() {
            Ok(PropertyType::Commercial) => TypeFilter::Commercial,
            Ok(PropertyType::Private) => TypeFilter::Private,
            Err(_) => TypeFilter::All,
        }
    }

    pub fn admits(self, property_type: PropertyType) -> bool {
        match self {
            TypeFilter::All => true,
            TypeFilter::Commercial => property_type == PropertyType::Commercial,
            TypeFilter::Private => property_type == PropertyType::Private,
        }
    }
}

impl<'de> Deserialize<'de> for TypeFilter {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Ok(TypeFilter::parse(&raw))
    }
}

/// Combination of type, free-text, and barangay constraints. Missing fields are inactive.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterCriteria {
    #[serde(default, rename = "type")]
    pub property_type: TypeFilter,
    #[serde(default, rename = "q")]
    pub search_text: String,
    #[serde(default, rename = "barangay")]
    pub neighborhood: Option<String>,
}

impl FilterCriteria {
    pub fn all() -> Self {
        Self::default()
    }

    pub fn with_type(mut self, property_type: TypeFilter) -> Self {
        self.property_type = property_type;
        self
    }

    pub fn with_search(mut self, text: impl Into<String>) -> Self {
        self.search_text = text.into();
        self
    }

    pub fn with_neighborhood(mut self, name: impl Into<String>) -> Self {
        self.neighborhood = Some(name.into());
        self
    }

    /// Matching listings, preserving the order they were supplied in.
    pub fn apply<'a, I>(&self, listings: I) -> Vec<&'a Listing>
    where
        I: IntoIterator<Item = &'a Listing>,
    {
        listings
            .into_iter()
            .filter(|listing| matches(listing, self))
            .collect()
    }
}

/// Conjunction of the three criteria.
pub fn matches(listing: &Listing, criteria: &FilterCriteria) -> bool {
    criteria.property_type.admits(listing.property_type)
        && matches_search(listing, &criteria.search_text)
        && matches_neighborhood(listing, criteria.neighborhood.as_deref())
}

fn matches_search(listing: &Listing, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    let query = query.to_lowercase();
    listing.title.to_lowercase().contains(&query) || listing.address.to_lowercase().contains(&query)
}

// Addresses end with the exact barangay name, so containment stays case-sensitive.
fn matches_neighborhood(listing: &Listing, neighborhood: Option<&str>) -> bool {
    match neighborhood {
        Some(name) if !name.is_empty() => listing.address.contains(name),
        _ => true,
    }
}
