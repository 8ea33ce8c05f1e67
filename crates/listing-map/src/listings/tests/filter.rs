use super::common::*;
use crate::listings::catalog::seed_listings;
use crate::listings::domain::ListingId;
use crate::listings::filter::{matches, FilterCriteria, TypeFilter};

#[test]
fn inactive_criteria_match_everything() {
    let criteria = FilterCriteria::all();
    for listing in seed_listings().iter().chain([listing_a(), listing_b()].iter()) {
        assert!(matches(listing, &criteria), "{} filtered out", listing.id);
    }
}

#[test]
fn type_criterion_selects_bucket() {
    let commercial = FilterCriteria::all().with_type(TypeFilter::Commercial);
    assert!(matches(&listing_a(), &commercial));
    assert!(!matches(&listing_b(), &commercial));

    let private = FilterCriteria::all().with_type(TypeFilter::parse("Private"));
    assert!(!matches(&listing_a(), &private));
    assert!(matches(&listing_b(), &private));
}

#[test]
fn neighborhood_criterion_checks_address() {
    let tambler = FilterCriteria::all().with_neighborhood("Tambler");
    assert!(matches(&listing_a(), &tambler));
    assert!(!matches(&listing_b(), &tambler));
}

#[test]
fn neighborhood_criterion_is_case_sensitive() {
    let lowercase = FilterCriteria::all().with_neighborhood("tambler");
    assert!(!matches(&listing_a(), &lowercase));
}

#[test]
fn search_matches_title_or_address_ignoring_case() {
    let by_title = FilterCriteria::all().with_search("WAREHOUSE");
    assert!(matches(&listing_a(), &by_title));
    assert!(!matches(&listing_b(), &by_title));

    let by_address = FilterCriteria::all().with_search("brgy. lagao");
    assert!(!matches(&listing_a(), &by_address));
    assert!(matches(&listing_b(), &by_address));
}

#[test]
fn criteria_combine_with_and() {
    let criteria = FilterCriteria::all()
        .with_type(TypeFilter::Commercial)
        .with_search("gensan")
        .with_neighborhood("Lagao");
    assert!(!matches(&listing_a(), &criteria));
    assert!(!matches(&listing_b(), &criteria));

    let criteria = FilterCriteria::all()
        .with_type(TypeFilter::Commercial)
        .with_search("gensan")
        .with_neighborhood("Tambler");
    assert!(matches(&listing_a(), &criteria));
}

#[test]
fn apply_preserves_catalog_order() {
    let catalog = seed_listings();
    let private = FilterCriteria::all().with_type(TypeFilter::Private);

    let found: Vec<ListingId> = private
        .apply(&catalog)
        .into_iter()
        .map(|listing| listing.id.clone())
        .collect();

    assert_eq!(found, vec![ListingId::Numeric(3), ListingId::Numeric(4)]);
}

#[test]
fn store_search_uses_predicate() {
    let store = store_ab();
    let found = store.search(&FilterCriteria::all().with_neighborhood("Lagao"));
    assert_eq!(ids(&found), vec![listing_b().id]);
}
