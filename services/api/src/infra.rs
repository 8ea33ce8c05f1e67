use listing_map::config::ListingsConfig;
use listing_map::listings::{ListingService, StoreError, TypeFilter};
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use tracing::{info, warn};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

pub(crate) fn listing_service(config: &ListingsConfig) -> Arc<ListingService> {
    let service = ListingService::from_config(config.clone());
    let _ = log_store_size(&service, config);
    Arc::new(service)
}

fn log_store_size(service: &ListingService, config: &ListingsConfig) -> Result<usize, StoreError> {
    match service.store().read(|store| store.len()) {
        Ok(total) => {
            info!(
                seed_catalog = config.seed_catalog,
                city = %config.city,
                listings = total,
                "listing store initialised"
            );
            Ok(total)
        }
        Err(err) => {
            warn!(error = %err, "listing store unavailable at startup");
            Err(err)
        }
    }
}

pub(crate) fn parse_type_filter(raw: &str) -> Result<TypeFilter, String> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "all" | "commercial" | "private" => Ok(TypeFilter::parse(raw)),
        _ => Err(format!(
            "unknown listing type '{raw}' (expected all, commercial, or private)"
        )),
    }
}
