use crate::app_config::{AppConfig, Environment, ProviderConfig};
use crate::types::Provider;
use crate::ConfigError;

pub const DEFAULT_NEWSAPI_BASE_URL: &str = "https://newsapi.org/v2";
pub const DEFAULT_NYTIMES_BASE_URL: &str = "https://api.nytimes.com/svc";
pub const DEFAULT_GUARDIAN_BASE_URL: &str = "https://content.guardianapis.com";

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Decoupled from the real environment so tests can drive it from a `HashMap`.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::net::SocketAddr;

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let optional = |var: &str| -> Option<String> {
        lookup(var)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
    };

    let invalid = |var: &str, reason: String| ConfigError::InvalidEnvVar {
        var: var.to_string(),
        reason,
    };

    let parse_addr = |var: &str, default: &str| -> Result<SocketAddr, ConfigError> {
        or_default(var, default)
            .parse::<SocketAddr>()
            .map_err(|e| invalid(var, e.to_string()))
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        or_default(var, default)
            .parse::<u64>()
            .map_err(|e| invalid(var, e.to_string()))
    };

    let parse_provider = |var: &str, default: &str| -> Result<Provider, ConfigError> {
        or_default(var, default)
            .parse::<Provider>()
            .map_err(|e| invalid(var, e.to_string()))
    };

    let env = parse_environment(&or_default("NEWSDESK_ENV", "development"))?;
    let bind_addr = parse_addr("NEWSDESK_BIND_ADDR", "0.0.0.0:3000")?;
    let log_level = or_default("NEWSDESK_LOG_LEVEL", "info");

    let request_timeout_secs = parse_u64("NEWSDESK_REQUEST_TIMEOUT_SECS", "10")?;
    if request_timeout_secs == 0 {
        return Err(invalid(
            "NEWSDESK_REQUEST_TIMEOUT_SECS",
            "timeout must be at least one second".to_string(),
        ));
    }

    let default_top_provider = parse_provider("NEWSDESK_DEFAULT_TOP_PROVIDER", "guardian")?;
    let default_search_provider =
        parse_provider("NEWSDESK_DEFAULT_SEARCH_PROVIDER", "nytimes")?;

    let provider = |key_var: &str, url_var: &str, default_url: &str| ProviderConfig {
        base_url: or_default(url_var, default_url),
        api_key: optional(key_var),
        timeout_secs: request_timeout_secs,
    };

    Ok(AppConfig {
        env,
        bind_addr,
        log_level,
        request_timeout_secs,
        default_top_provider,
        default_search_provider,
        newsapi: provider("NEWSAPI_API_KEY", "NEWSAPI_BASE_URL", DEFAULT_NEWSAPI_BASE_URL),
        nytimes: provider("NYTIMES_API_KEY", "NYTIMES_BASE_URL", DEFAULT_NYTIMES_BASE_URL),
        guardian: provider(
            "GUARDIAN_API_KEY",
            "GUARDIAN_BASE_URL",
            DEFAULT_GUARDIAN_BASE_URL,
        ),
    })
}

fn parse_environment(s: &str) -> Result<Environment, ConfigError> {
    match s {
        "development" => Ok(Environment::Development),
        "test" => Ok(Environment::Test),
        "production" => Ok(Environment::Production),
        other => Err(ConfigError::InvalidEnvVar {
            var: "NEWSDESK_ENV".to_string(),
            reason: format!("unknown environment '{other}'"),
        }),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::env::VarError;

    use super::*;

    fn lookup_from_map<'a>(
        map: &'a HashMap<&'a str, &'a str>,
    ) -> impl Fn(&str) -> Result<String, VarError> + 'a {
        move |key| {
            map.get(key)
                .map(|v| (*v).to_string())
                .ok_or(VarError::NotPresent)
        }
    }

    #[test]
    fn parse_environment_known_values() {
        assert_eq!(
            parse_environment("development").unwrap(),
            Environment::Development
        );
        assert_eq!(parse_environment("test").unwrap(), Environment::Test);
        assert_eq!(
            parse_environment("production").unwrap(),
            Environment::Production
        );
    }

    #[test]
    fn parse_environment_unknown_fails() {
        let err = parse_environment("staging").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidEnvVar { ref var, .. } if var == "NEWSDESK_ENV"));
    }

    #[test]
    fn build_app_config_defaults_with_empty_env() {
        let map: HashMap<&str, &str> = HashMap::new();
        let cfg = build_app_config(lookup_from_map(&map)).expect("defaults should load");
        assert_eq!(cfg.env, Environment::Development);
        assert_eq!(cfg.bind_addr.to_string(), "0.0.0.0:3000");
        assert_eq!(cfg.log_level, "info");
        assert_eq!(cfg.request_timeout_secs, 10);
        assert_eq!(cfg.default_top_provider, Provider::Guardian);
        assert_eq!(cfg.default_search_provider, Provider::NyTimes);
        assert_eq!(cfg.newsapi.base_url, DEFAULT_NEWSAPI_BASE_URL);
        assert_eq!(cfg.nytimes.base_url, DEFAULT_NYTIMES_BASE_URL);
        assert_eq!(cfg.guardian.base_url, DEFAULT_GUARDIAN_BASE_URL);
        assert!(cfg.newsapi.api_key.is_none());
        assert_eq!(cfg.guardian.timeout_secs, 10);
    }

    #[test]
    fn build_app_config_reads_keys_and_overrides() {
        let mut map = HashMap::new();
        map.insert("NEWSAPI_API_KEY", "na-key");
        map.insert("NYTIMES_API_KEY", "  ");
        map.insert("GUARDIAN_BASE_URL", "http://localhost:9999");
        map.insert("NEWSDESK_REQUEST_TIMEOUT_SECS", "3");
        let cfg = build_app_config(lookup_from_map(&map)).expect("config");
        assert_eq!(cfg.newsapi.api_key.as_deref(), Some("na-key"));
        assert!(cfg.nytimes.api_key.is_none(), "blank key counts as unset");
        assert_eq!(cfg.guardian.base_url, "http://localhost:9999");
        assert_eq!(cfg.provider(Provider::NewsApi).timeout_secs, 3);
    }

    #[test]
    fn default_providers_are_independently_configurable() {
        let mut map = HashMap::new();
        map.insert("NEWSDESK_DEFAULT_TOP_PROVIDER", "NewsAPI");
        map.insert("NEWSDESK_DEFAULT_SEARCH_PROVIDER", "guardian");
        let cfg = build_app_config(lookup_from_map(&map)).expect("config");
        assert_eq!(cfg.default_top_provider, Provider::NewsApi);
        assert_eq!(cfg.default_search_provider, Provider::Guardian);
    }

    #[test]
    fn unknown_default_provider_fails() {
        let mut map = HashMap::new();
        map.insert("NEWSDESK_DEFAULT_SEARCH_PROVIDER", "bogus");
        let result = build_app_config(lookup_from_map(&map));
        assert!(
            matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "NEWSDESK_DEFAULT_SEARCH_PROVIDER"),
            "expected InvalidEnvVar(NEWSDESK_DEFAULT_SEARCH_PROVIDER), got: {result:?}"
        );
    }

    #[test]
    fn invalid_bind_addr_fails() {
        let mut map = HashMap::new();
        map.insert("NEWSDESK_BIND_ADDR", "not-a-socket-addr");
        let result = build_app_config(lookup_from_map(&map));
        assert!(
            matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "NEWSDESK_BIND_ADDR"),
            "expected InvalidEnvVar(NEWSDESK_BIND_ADDR), got: {result:?}"
        );
    }

    #[test]
    fn invalid_or_zero_timeout_fails() {
        for raw in ["not-a-number", "0"] {
            let mut map = HashMap::new();
            map.insert("NEWSDESK_REQUEST_TIMEOUT_SECS", raw);
            let result = build_app_config(lookup_from_map(&map));
            assert!(
                matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "NEWSDESK_REQUEST_TIMEOUT_SECS"),
                "expected InvalidEnvVar for {raw:?}, got: {result:?}"
            );
        }
    }

    #[test]
    fn debug_output_redacts_api_keys() {
        let mut map = HashMap::new();
        map.insert("GUARDIAN_API_KEY", "super-secret");
        let cfg = build_app_config(lookup_from_map(&map)).expect("config");
        let rendered = format!("{cfg:?}");
        assert!(!rendered.contains("super-secret"));
        assert!(rendered.contains("[redacted]"));
    }
}
