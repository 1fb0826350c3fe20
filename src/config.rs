use chrono::Offset;
use std::time::Duration;

pub const ENDPOINT_ENV: &str = "DISH_DETECTOR_ENDPOINT";
pub const FAKE_CLASSIFIER_ENV: &str = "DISH_DETECTOR_FAKE";

#[derive(Debug, Clone)]
pub struct Config {
    pub endpoint: String,
    /// `None` keeps the HTTP client's default.
    pub request_timeout: Option<Duration>,
    pub use_fake_classifier: bool,
    pub fake_classifier_latency: Duration,
    pub logger_timezone: chrono::FixedOffset,
    pub window_size: [f32; 2],
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: "http://127.0.0.1:8000/api/upload/".to_string(),
            request_timeout: None,
            use_fake_classifier: false,
            fake_classifier_latency: Duration::from_millis(800),
            logger_timezone: utc(),
            window_size: [960.0, 720.0],
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup<F: Fn(&str) -> Option<String>>(lookup: F) -> Self {
        let mut config = Self::default();

        if let Some(endpoint) = lookup(ENDPOINT_ENV).filter(|v| !v.trim().is_empty()) {
            config.endpoint = endpoint.trim().to_string();
        }

        if let Some(flag) = lookup(FAKE_CLASSIFIER_ENV) {
            config.use_fake_classifier = matches!(flag.trim(), "1" | "true" | "yes");
        }

        config
    }
}

fn utc() -> chrono::FixedOffset {
    chrono::Utc.fix()
}

#[cfg(test)]
mod config_test {
    use super::{Config, ENDPOINT_ENV, FAKE_CLASSIFIER_ENV};

    #[test]
    fn test_default_endpoint_is_local_upload_path() {
        let config = Config::default();

        assert_eq!(config.endpoint, "http://127.0.0.1:8000/api/upload/");
        assert!(config.request_timeout.is_none());
        assert!(!config.use_fake_classifier);
    }

    #[test]
    fn test_lookup_overrides_endpoint_and_fake_flag() {
        let config = Config::from_lookup(|key| match key {
            ENDPOINT_ENV => Some(" http://dishes.local/api/upload/ ".to_string()),
            FAKE_CLASSIFIER_ENV => Some("1".to_string()),
            _ => None,
        });

        assert_eq!(config.endpoint, "http://dishes.local/api/upload/");
        assert!(config.use_fake_classifier);
    }

    #[test]
    fn test_blank_endpoint_keeps_default() {
        let config = Config::from_lookup(|key| match key {
            ENDPOINT_ENV => Some("   ".to_string()),
            _ => None,
        });

        assert_eq!(config.endpoint, Config::default().endpoint);
    }
}
