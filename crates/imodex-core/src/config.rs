//! Application configuration loaded from environment variables.
//!
//! All settings have defaults so a bare environment still yields a working
//! config; `ConfigError` only fires on values that fail to parse.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Base URL of the Nominatim-compatible geocoding service.
    pub nominatim_base_url: String,
    /// Client-identifying `User-Agent`, required by Nominatim's usage policy.
    pub geocoder_user_agent: String,
    pub request_timeout_secs: u64,
    /// Capacity of the in-process geocode cache (entries, not bytes).
    pub geocode_cache_capacity: usize,
    pub log_level: String,
}

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a set env var fails to parse.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the
/// process, without touching `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if a set env var fails to parse.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build configuration using the provided env-var lookup function.
///
/// The parsing logic is decoupled from the actual environment so it can be
/// tested with a pure `HashMap` lookup — no `set_var`/`remove_var` needed.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let parse_usize = |var: &str, default: &str| -> Result<usize, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<usize>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            })
    };

    Ok(AppConfig {
        nominatim_base_url: or_default(
            "IMODEX_NOMINATIM_URL",
            "https://nominatim.openstreetmap.org",
        ),
        geocoder_user_agent: or_default("IMODEX_USER_AGENT", "imodex/0.1 (listing-normalizer)"),
        request_timeout_secs: parse_u64("IMODEX_REQUEST_TIMEOUT_SECS", "10")?,
        geocode_cache_capacity: parse_usize("IMODEX_GEOCODE_CACHE_CAP", "4096")?,
        log_level: or_default("IMODEX_LOG", "info"),
    })
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::env::VarError;

    use super::*;

    fn lookup_from<'a>(
        map: &'a HashMap<&'a str, &'a str>,
    ) -> impl Fn(&str) -> Result<String, VarError> + 'a {
        move |key| map.get(key).map(|v| (*v).to_string()).ok_or(VarError::NotPresent)
    }

    #[test]
    fn defaults_apply_on_empty_environment() {
        let env = HashMap::new();
        let config = build_app_config(lookup_from(&env)).unwrap();
        assert_eq!(
            config.nominatim_base_url,
            "https://nominatim.openstreetmap.org"
        );
        assert_eq!(config.request_timeout_secs, 10);
        assert_eq!(config.geocode_cache_capacity, 4096);
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn env_vars_override_defaults() {
        let mut env = HashMap::new();
        env.insert("IMODEX_NOMINATIM_URL", "http://localhost:8080");
        env.insert("IMODEX_GEOCODE_CACHE_CAP", "16");
        let config = build_app_config(lookup_from(&env)).unwrap();
        assert_eq!(config.nominatim_base_url, "http://localhost:8080");
        assert_eq!(config.geocode_cache_capacity, 16);
    }

    #[test]
    fn invalid_numeric_value_is_an_error() {
        let mut env = HashMap::new();
        env.insert("IMODEX_REQUEST_TIMEOUT_SECS", "soon");
        let err = build_app_config(lookup_from(&env)).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidEnvVar { var, .. } if var == "IMODEX_REQUEST_TIMEOUT_SECS"
        ));
    }
}
