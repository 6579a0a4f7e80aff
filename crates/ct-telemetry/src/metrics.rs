//! Prometheus metrics for the identity core.
//!
//! All metrics follow the naming convention: `ct_<area>_<metric>_total`.

use lazy_static::lazy_static;
use prometheus::{CounterVec, Encoder, Opts, Registry, TextEncoder};
use std::sync::Arc;

use crate::TelemetryError;

lazy_static! {
    /// Global metrics registry
    pub static ref REGISTRY: Registry = Registry::new();

    /// Login attempts by role path and outcome (granted / denied / error)
    pub static ref LOGIN_ATTEMPTS: CounterVec = CounterVec::new(
        Opts::new("ct_login_attempts_total", "Login attempts by role and outcome"),
        &["role", "outcome"]
    ).expect("metric creation failed");

    /// Citizen registrations by outcome (success or error category)
    pub static ref REGISTRATIONS: CounterVec = CounterVec::new(
        Opts::new("ct_registrations_total", "Citizen registrations by outcome"),
        &["outcome"]
    ).expect("metric creation failed");

    /// Document uploads by outcome
    pub static ref CONTENT_UPLOADS: CounterVec = CounterVec::new(
        Opts::new("ct_content_uploads_total", "Document uploads by outcome"),
        &["outcome"]
    ).expect("metric creation failed");
}

/// Handle for the registered metrics
pub struct MetricsHandle {
    _registry: Arc<Registry>,
}

/// Register all metrics with the global registry.
pub fn register_metrics() -> Result<MetricsHandle, TelemetryError> {
    let metrics: Vec<Box<dyn prometheus::core::Collector>> = vec![
        Box::new(LOGIN_ATTEMPTS.clone()),
        Box::new(REGISTRATIONS.clone()),
        Box::new(CONTENT_UPLOADS.clone()),
    ];

    for metric in metrics {
        REGISTRY
            .register(metric)
            .map_err(|e| TelemetryError::MetricsInit(e.to_string()))?;
    }

    Ok(MetricsHandle {
        _registry: Arc::new(REGISTRY.clone()),
    })
}

/// Encode all metrics as Prometheus text format.
pub fn encode_metrics() -> Result<String, TelemetryError> {
    let encoder = TextEncoder::new();
    let metric_families = REGISTRY.gather();
    let mut buffer = Vec::new();
    encoder
        .encode(&metric_families, &mut buffer)
        .map_err(|e| TelemetryError::MetricsInit(e.to_string()))?;
    String::from_utf8(buffer).map_err(|e| TelemetryError::MetricsInit(e.to_string()))
}

/// Count one login attempt.
pub fn record_login(role: &str, outcome: &str) {
    LOGIN_ATTEMPTS.with_label_values(&[role, outcome]).inc();
}

/// Count one registration outcome.
pub fn record_registration(outcome: &str) {
    REGISTRATIONS.with_label_values(&[outcome]).inc();
}

/// Count one upload outcome.
pub fn record_upload(outcome: &str) {
    CONTENT_UPLOADS.with_label_values(&[outcome]).inc();
}
