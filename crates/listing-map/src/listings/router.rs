use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde_json::json;

use super::catalog::BARANGAYS;
use super::domain::{ListingDraft, ListingId};
use super::filter::FilterCriteria;
use super::service::{ListingService, ListingServiceError};
use super::store::StoreError;

/// Router exposing browse, publish, bookmark, and "My Listings" endpoints.
pub fn listing_router(service: Arc<ListingService>) -> Router {
    Router::new()
        .route(
            "/api/v1/listings",
            get(browse_handler).post(publish_handler),
        )
        .route(
            "/api/v1/listings/:listing_id",
            get(detail_handler).delete(delete_handler),
        )
        .route(
            "/api/v1/listings/:listing_id/bookmark",
            post(bookmark_handler),
        )
        .route("/api/v1/my-listings", get(my_listings_handler))
        .route("/api/v1/bookmarks", get(bookmarks_handler))
        .route("/api/v1/barangays", get(barangays_handler))
        .with_state(service)
}

fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    let payload = json!({ "error": message.into() });
    (status, Json(payload)).into_response()
}

fn not_found(id: &ListingId) -> Response {
    let payload = json!({
        "error": "listing not found",
        "id": id,
    });
    (StatusCode::NOT_FOUND, Json(payload)).into_response()
}

fn service_error_response(error: ListingServiceError) -> Response {
    match error {
        ListingServiceError::Draft(error) => {
            error_response(StatusCode::UNPROCESSABLE_ENTITY, error.to_string())
        }
        ListingServiceError::Store(StoreError::DuplicateId(id)) => {
            error_response(StatusCode::CONFLICT, format!("listing {id} already exists"))
        }
        ListingServiceError::NotUserCreated(id) => error_response(
            StatusCode::FORBIDDEN,
            format!("listing {id} can only be removed by its publisher"),
        ),
        other => error_response(StatusCode::INTERNAL_SERVER_ERROR, other.to_string()),
    }
}

pub(crate) async fn browse_handler(
    State(service): State<Arc<ListingService>>,
    Query(criteria): Query<FilterCriteria>,
) -> Response {
    match service.browse(&criteria) {
        Ok(listings) => (StatusCode::OK, Json(listings)).into_response(),
        Err(error) => service_error_response(error),
    }
}

pub(crate) async fn publish_handler(
    State(service): State<Arc<ListingService>>,
    Json(draft): Json<ListingDraft>,
) -> Response {
    match service.publish(draft) {
        Ok(listing) => (StatusCode::CREATED, Json(listing)).into_response(),
        Err(error) => service_error_response(error),
    }
}

pub(crate) async fn detail_handler(
    State(service): State<Arc<ListingService>>,
    Path(listing_id): Path<String>,
) -> Response {
    let id = match service.resolve_id(&listing_id) {
        Ok(id) => id,
        Err(error) => return service_error_response(error),
    };
    match service.get(&id) {
        Ok(Some(listing)) => (StatusCode::OK, Json(listing)).into_response(),
        Ok(None) => not_found(&id),
        Err(error) => service_error_response(error),
    }
}

pub(crate) async fn delete_handler(
    State(service): State<Arc<ListingService>>,
    Path(listing_id): Path<String>,
) -> Response {
    let id = match service.resolve_id(&listing_id) {
        Ok(id) => id,
        Err(error) => return service_error_response(error),
    };
    match service.delete_my_listing(&id) {
        Ok(_) => StatusCode::NO_CONTENT.into_response(),
        Err(error) => service_error_response(error),
    }
}

pub(crate) async fn bookmark_handler(
    State(service): State<Arc<ListingService>>,
    Path(listing_id): Path<String>,
) -> Response {
    let id = match service.resolve_id(&listing_id) {
        Ok(id) => id,
        Err(error) => return service_error_response(error),
    };
    match service.toggle_bookmark(&id) {
        Ok(Some(bookmarked)) => {
            let payload = json!({ "id": id, "bookmarked": bookmarked });
            (StatusCode::OK, Json(payload)).into_response()
        }
        Ok(None) => not_found(&id),
        Err(error) => service_error_response(error),
    }
}

pub(crate) async fn my_listings_handler(State(service): State<Arc<ListingService>>) -> Response {
    match service.my_listings() {
        Ok(listings) => (StatusCode::OK, Json(listings)).into_response(),
        Err(error) => service_error_response(error),
    }
}

pub(crate) async fn bookmarks_handler(State(service): State<Arc<ListingService>>) -> Response {
    match service.saved_listings() {
        Ok(listings) => (StatusCode::OK, Json(listings)).into_response(),
        Err(error) => service_error_response(error),
    }
}

pub(crate) async fn barangays_handler() -> Json<serde_json::Value> {
    Json(json!({ "barangays": BARANGAYS }))
}
