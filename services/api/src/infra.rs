use axum::http::HeaderValue;
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use zenflow::config::{ConfigError, CorsConfig};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Builds the CORS policy. Credentials are never allowed since the API is
/// stateless and `Any` origins cannot be combined with them.
pub(crate) fn cors_layer(config: &CorsConfig) -> Result<CorsLayer, ConfigError> {
    let layer = CorsLayer::new().allow_methods(Any).allow_headers(Any);

    match config {
        CorsConfig::AnyOrigin => Ok(layer.allow_origin(Any)),
        CorsConfig::Origins(origins) => {
            let values = origins
                .iter()
                .map(|origin| {
                    HeaderValue::from_str(origin).map_err(|_| ConfigError::InvalidCorsOrigin {
                        origin: origin.clone(),
                    })
                })
                .collect::<Result<Vec<_>, _>>()?;
            Ok(layer.allow_origin(AllowOrigin::list(values)))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_layer_for_origin_lists() {
        let config = CorsConfig::Origins(vec!["http://localhost:5173".to_string()]);
        assert!(cors_layer(&config).is_ok());
    }

    #[test]
    fn rejects_origins_with_control_characters() {
        let config = CorsConfig::Origins(vec!["http://bad\norigin".to_string()]);
        assert!(matches!(
            cors_layer(&config),
            Err(ConfigError::InvalidCorsOrigin { .. })
        ));
    }
}
