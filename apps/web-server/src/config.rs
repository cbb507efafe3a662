//! Application configuration loaded from environment variables.

use std::env;
use std::str::FromStr;

use blog_infra::DatabaseConfig;

use crate::telemetry::TelemetryConfig;

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub database: Option<DatabaseConfig>,
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let database = env::var("DATABASE_URL")
            .ok()
            .filter(|url| !url.trim().is_empty())
            .map(|url| DatabaseConfig {
                url,
                max_connections: parse_or(env::var("DB_MAX_CONNECTIONS").ok(), 100),
                min_connections: parse_or(env::var("DB_MIN_CONNECTIONS").ok(), 10),
            });

        Self {
            host: env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: parse_or(env::var("PORT").ok(), 8080),
            database,
            telemetry: TelemetryConfig::from_env(),
        }
    }
}

/// Parse an optional setting, falling back to `default` when it is
/// missing or malformed.
fn parse_or<T: FromStr>(value: Option<String>, default: T) -> T {
    value
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_or() {
        assert_eq!(parse_or(Some("9000".to_string()), 8080u16), 9000);
        assert_eq!(parse_or(Some(" 20 ".to_string()), 100u32), 20);
        assert_eq!(parse_or(Some("lots".to_string()), 100u32), 100);
        assert_eq!(parse_or(Some("70000".to_string()), 8080u16), 8080);
        assert_eq!(parse_or(None, 10u32), 10);
    }
}
