//! Image generation: the backend seam, its simulated and HTTP
//! implementations, and the controller that runs transactions.

pub mod backend;
pub mod catalog;
pub mod clock;
pub mod controller;
pub mod error;
pub mod http;
pub mod simulated;

use std::sync::Arc;

pub use backend::ImageBackend;
pub use catalog::{CandidatePool, PRO_TIPS, QUICK_PROMPTS};
pub use clock::{Clock, InstantClock, TokioClock};
pub use controller::GenerationController;
pub use error::GenerationError;
pub use http::HttpBackend;
pub use simulated::SimulatedBackend;

use crate::app::settings::{BackendKind, Settings, SettingsError};

/// Build the backend selected by `settings`.
pub fn build_backend(settings: &Settings) -> Result<Arc<dyn ImageBackend>, SettingsError> {
    match settings.backend {
        BackendKind::Simulated => {
            let pool = match CandidatePool::new(&settings.candidates) {
                Some(pool) => pool,
                None => {
                    tracing::warn!("no usable candidates configured, using the built-in pool");
                    CandidatePool::default()
                }
            };
            let mut backend = SimulatedBackend::new(pool, settings.generation_delay());
            if let Some(seed) = settings.seed {
                backend = backend.with_seed(seed);
            }
            Ok(Arc::new(backend))
        }
        BackendKind::Http => {
            let endpoint = settings
                .endpoint
                .as_deref()
                .map(str::trim)
                .filter(|e| !e.is_empty())
                .ok_or_else(|| SettingsError::Invalid("backend = \"http\" requires an endpoint".to_string()))?;
            let backend = HttpBackend::new(endpoint, settings.request_timeout())
                .map_err(|e| SettingsError::Invalid(e.to_string()))?;
            Ok(Arc::new(backend))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_simulated_by_default() {
        let backend = build_backend(&Settings::default()).unwrap();
        assert_eq!(backend.name(), "simulated");
    }

    #[test]
    fn http_without_endpoint_is_rejected() {
        let settings = Settings {
            backend: BackendKind::Http,
            endpoint: Some("   ".to_string()),
            ..Settings::default()
        };
        assert!(matches!(build_backend(&settings), Err(SettingsError::Invalid(_))));
    }

    #[test]
    fn http_with_endpoint_builds() {
        let settings = Settings {
            backend: BackendKind::Http,
            endpoint: Some("http://127.0.0.1:9/generate".to_string()),
            ..Settings::default()
        };
        assert_eq!(build_backend(&settings).unwrap().name(), "http");
    }
}
