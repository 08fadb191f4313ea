//! Geolocation provider configuration.

use serde::Deserialize;

/// Default provider endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://www.googleapis.com/geolocation/v1/geolocate";

/// Default bound on the outbound provider call, in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Configuration for the geolocation HTTP adapter.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GeolocateConfig {
    /// Provider API key, passed as the `key` query parameter. Never logged.
    pub api_key: String,
    /// Provider endpoint URL.
    pub endpoint: String,
    /// Upper bound on the outbound call; a slower provider fails the request.
    pub timeout_secs: u64,
}

impl Default for GeolocateConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_have_sensible_defaults() {
        let config = GeolocateConfig::default();
        assert!(config.api_key.is_empty());
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(config.timeout_secs, 10);
    }

    #[test]
    fn should_deserialize_from_toml() {
        let toml = r#"
            api_key = "secret"
            endpoint = "https://geolocate.example.com/v1"
            timeout_secs = 3
        "#;
        let config: GeolocateConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.api_key, "secret");
        assert_eq!(config.endpoint, "https://geolocate.example.com/v1");
        assert_eq!(config.timeout_secs, 3);
    }

    #[test]
    fn should_use_defaults_for_missing_fields() {
        let toml = r#"api_key = "secret""#;
        let config: GeolocateConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(config.timeout_secs, 10);
    }
}
