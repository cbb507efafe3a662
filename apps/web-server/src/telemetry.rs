//! Telemetry initialization - tracing setup.

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Telemetry configuration.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    /// Enable JSON logging (for production).
    pub json_logs: bool,
    /// Service name attached to the startup log.
    pub service_name: String,
}

impl TelemetryConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self::from_values(
            std::env::var("LOG_FORMAT").ok(),
            std::env::var("SERVICE_NAME").ok(),
        )
    }

    fn from_values(log_format: Option<String>, service_name: Option<String>) -> Self {
        Self {
            json_logs: log_format.is_some_and(|v| v.eq_ignore_ascii_case("json")),
            service_name: service_name
                .filter(|name| !name.trim().is_empty())
                .unwrap_or_else(|| "blog-web".to_string()),
        }
    }
}

/// Initialize the global tracing subscriber.
pub fn init_telemetry(config: &TelemetryConfig) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,web_server=debug,blog_infra=debug"));

    if config.json_logs {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer().pretty())
            .init();
    }

    tracing::info!(
        service = %config.service_name,
        json_logs = config.json_logs,
        "Telemetry initialized"
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_values() {
        let config = TelemetryConfig::from_values(Some("JSON".to_string()), Some("blog-eu".to_string()));
        assert!(config.json_logs);
        assert_eq!(config.service_name, "blog-eu");

        let config = TelemetryConfig::from_values(Some("pretty".to_string()), None);
        assert!(!config.json_logs);
        assert_eq!(config.service_name, "blog-web");
    }
}
