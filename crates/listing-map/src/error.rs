use crate::config::ConfigError;
use crate::listings::{ListingServiceError, StoreError};
use crate::telemetry::TelemetryError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use std::fmt;

#[derive(Debug)]
pub enum AppError {
    Config(ConfigError),
    Telemetry(TelemetryError),
    Io(std::io::Error),
    Listing(ListingServiceError),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Config(err) => write!(f, "configuration error: {}", err),
            AppError::Telemetry(err) => write!(f, "telemetry error: {}", err),
            AppError::Io(err) => write!(f, "io error: {}", err),
            AppError::Listing(err) => write!(f, "listing error: {}", err),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Config(err) => Some(err),
            AppError::Telemetry(err) => Some(err),
            AppError::Io(err) => Some(err),
            AppError::Listing(err) => Some(err),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::Listing(ListingServiceError::Draft(_)) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::Listing(ListingServiceError::Store(StoreError::DuplicateId(_))) => {
                StatusCode::CONFLICT
            }
            AppError::Listing(ListingServiceError::NotUserCreated(_)) => StatusCode::FORBIDDEN,
            AppError::Listing(ListingServiceError::Store(StoreError::Unavailable(_)))
            | AppError::Config(_)
            | AppError::Telemetry(_)
            | AppError::Io(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = Json(json!({ "error": self.to_string() }));
        (status, body).into_response()
    }
}

impl From<ConfigError> for AppError {
    fn from(value: ConfigError) -> Self {
        Self::Config(value)
    }
}

impl From<TelemetryError> for AppError {
    fn from(value: TelemetryError) -> Self {
        Self::Telemetry(value)
    }
}

impl From<std::io::Error> for AppError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<ListingServiceError> for AppError {
    fn from(value: ListingServiceError) -> Self {
        Self::Listing(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::listings::{DraftError, ListingId};

    #[test]
    fn listing_errors_map_to_client_statuses() {
        let draft = AppError::from(ListingServiceError::Draft(DraftError::MissingTitle));
        assert_eq!(
            draft.into_response().status(),
            StatusCode::UNPROCESSABLE_ENTITY
        );

        let duplicate = AppError::from(ListingServiceError::Store(StoreError::DuplicateId(
            ListingId::Numeric(1),
        )));
        assert_eq!(duplicate.into_response().status(), StatusCode::CONFLICT);

        let catalog = AppError::from(ListingServiceError::NotUserCreated(ListingId::Numeric(2)));
        assert_eq!(catalog.into_response().status(), StatusCode::FORBIDDEN);
    }

    #[test]
    fn io_errors_are_internal() {
        let err = AppError::from(std::io::Error::new(
            std::io::ErrorKind::AddrInUse,
            "port taken",
        ));
        assert_eq!(err.to_string(), "io error: port taken");
        assert_eq!(
            err.into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
