use serde::{Deserialize, Serialize};

const DEFAULT_API_BASE_URL: &str = "http://localhost:8080";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    pub api_base_url: String,
    pub environment: String,
    pub enable_logging: bool,
    pub log_level: String,
    pub verify_session_on_entry: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            environment: "development".to_string(),
            enable_logging: true,
            log_level: "info".to_string(),
            verify_session_on_entry: false,
        }
    }
}

impl AppConfig {
    /// Resolves configuration from compile-time environment variables.
    /// `build.rs` forwards the entries of `.env` so they are visible here.
    pub fn from_env() -> Self {
        Self::from_values(
            option_env!("API_BASE_URL"),
            option_env!("ENVIRONMENT"),
            option_env!("ENABLE_LOGGING"),
            option_env!("LOG_LEVEL"),
            option_env!("VERIFY_SESSION_ON_ENTRY"),
        )
    }

    fn from_values(
        api_base_url: Option<&str>,
        environment: Option<&str>,
        enable_logging: Option<&str>,
        log_level: Option<&str>,
        verify_session_on_entry: Option<&str>,
    ) -> Self {
        let defaults = Self::default();
        Self {
            api_base_url: api_base_url
                .map(|url| url.trim_end_matches('/').to_string())
                .filter(|url| !url.is_empty())
                .unwrap_or(defaults.api_base_url),
            environment: environment
                .map(str::to_string)
                .unwrap_or(defaults.environment),
            enable_logging: enable_logging
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.enable_logging),
            log_level: log_level
                .map(str::to_lowercase)
                .unwrap_or(defaults.log_level),
            verify_session_on_entry: verify_session_on_entry
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.verify_session_on_entry),
        }
    }

    pub fn is_logging_enabled(&self) -> bool {
        self.enable_logging
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    /// Level handed to `wasm_logger`. Unknown names fall back to `Info`.
    pub fn log_level(&self) -> log::Level {
        match self.log_level.as_str() {
            "error" => log::Level::Error,
            "warn" => log::Level::Warn,
            "debug" => log::Level::Debug,
            "trace" => log::Level::Trace,
            _ => log::Level::Info,
        }
    }
}

lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_values_use_defaults() {
        let config = AppConfig::from_values(None, None, None, None, None);
        assert_eq!(config, AppConfig::default());
        assert!(!config.is_production());
        assert_eq!(config.log_level(), log::Level::Info);
    }

    #[test]
    fn trailing_slash_is_stripped_from_base_url() {
        let config = AppConfig::from_values(Some("https://api.school.test/"), None, None, None, None);
        assert_eq!(config.api_base_url, "https://api.school.test");
    }

    #[test]
    fn unparsable_flags_keep_defaults() {
        let config = AppConfig::from_values(None, Some("production"), Some("yes"), Some("DEBUG"), Some("1"));
        assert!(config.is_production());
        assert!(config.enable_logging);
        assert!(!config.verify_session_on_entry);
        assert_eq!(config.log_level(), log::Level::Debug);
    }
}
