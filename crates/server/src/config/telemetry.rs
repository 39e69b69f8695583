use std::collections::HashMap;
use std::fmt;
use std::time::Duration;

use serde::Deserialize;

/// OTLP transport used to ship spans.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OtlpProtocol {
    /// OTLP over gRPC, usually port 4317.
    #[default]
    Grpc,
    /// OTLP over HTTP/protobuf, usually port 4318.
    Http,
}

impl fmt::Display for OtlpProtocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Grpc => "grpc",
            Self::Http => "http",
        })
    }
}

/// Export of the server's spans to an OpenTelemetry collector.
///
/// Console logging is always on. Turning this section on additionally ships
/// the `tower_http` request spans, with the translator's `rule matched` /
/// `no rule matched` events nested inside them, to `endpoint`.
///
/// ```toml
/// [telemetry]
/// enabled = true
/// endpoint = "http://otel-collector:4318"
/// protocol = "http"
/// sample_ratio = 0.1
///
/// [telemetry.resource_attributes]
/// "deployment.environment" = "staging"
/// ```
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct TelemetryConfig {
    pub enabled: bool,
    /// Collector URL. Must match `protocol`.
    pub endpoint: String,
    pub protocol: OtlpProtocol,
    /// Reported as `service.name`.
    pub service_name: String,
    /// Fraction of requests traced. Values outside `0.0..=1.0` are clamped.
    pub sample_ratio: f64,
    /// Per-export timeout in seconds.
    pub timeout_seconds: u64,
    /// Extra resource attributes attached to every span.
    pub resource_attributes: HashMap<String, String>,
}

impl TelemetryConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            endpoint: "http://localhost:4317".to_owned(),
            protocol: OtlpProtocol::Grpc,
            service_name: "predicat".to_owned(),
            sample_ratio: 1.0,
            timeout_seconds: 10,
            resource_attributes: HashMap::new(),
        }
    }
}
