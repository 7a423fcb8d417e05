use anyhow::{Context, Result};
use serde::Deserialize;
use std::env;

const DEFAULT_BASE_URL: &str = "http://localhost:8080/api/v1";

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub service: ServiceConfig,
    pub auth: AuthConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServiceConfig {
    pub base_url: String,
}

#[derive(Clone, Deserialize)]
pub struct AuthConfig {
    pub token: Option<String>,
}

// Keep the token out of logs.
impl std::fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthConfig")
            .field("token", &self.token.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        Ok(Self {
            service: ServiceConfig {
                base_url: normalize_base_url(
                    &env::var("DOCSTORE_BASE_URL")
                        .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string()),
                ),
            },
            auth: AuthConfig {
                token: env::var("DOCSTORE_TOKEN").ok(),
            },
        })
    }

    /// Apply command-line overrides; a value given here wins over the environment.
    pub fn with_overrides(mut self, base_url: Option<&str>, token: Option<String>) -> Self {
        if let Some(base_url) = base_url {
            self.service.base_url = normalize_base_url(base_url);
        }
        if token.is_some() {
            self.auth.token = token;
        }
        self
    }

    /// The bearer token to send. An empty token is passed through unchecked.
    pub fn token(&self) -> Result<&str> {
        self.auth
            .token
            .as_deref()
            .context("no token given; pass --token or set DOCSTORE_TOKEN")
    }
}

/// Strip trailing slashes so endpoint paths can be appended with a single `/`.
pub fn normalize_base_url(base_url: &str) -> String {
    base_url.trim().trim_end_matches('/').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(base_url: &str, token: Option<&str>) -> Config {
        Config {
            service: ServiceConfig { base_url: base_url.to_string() },
            auth: AuthConfig { token: token.map(str::to_string) },
        }
    }

    // The only test that touches DOCSTORE_* variables, so no other test races it.
    #[test]
    fn test_from_env() {
        env::remove_var("DOCSTORE_BASE_URL");
        env::remove_var("DOCSTORE_TOKEN");

        let defaults = Config::from_env().unwrap();
        assert_eq!(defaults.service.base_url, "http://localhost:8080/api/v1");
        assert_eq!(defaults.auth.token, None);
        assert!(defaults.token().is_err());

        env::set_var("DOCSTORE_BASE_URL", "http://x/api/");
        env::set_var("DOCSTORE_TOKEN", "env-token");

        let loaded = Config::from_env().unwrap();
        assert_eq!(loaded.service.base_url, "http://x/api");
        assert_eq!(loaded.token().unwrap(), "env-token");

        env::remove_var("DOCSTORE_BASE_URL");
        env::remove_var("DOCSTORE_TOKEN");
    }

    #[test]
    fn test_overrides_win() {
        let config = config("http://env/api", Some("env-token"))
            .with_overrides(Some("http://flag/api/"), Some("flag-token".to_string()));

        assert_eq!(config.service.base_url, "http://flag/api");
        assert_eq!(config.token().unwrap(), "flag-token");
    }

    #[test]
    fn test_missing_overrides_keep_env_values() {
        let config = config("http://env/api", Some("env-token")).with_overrides(None, None);

        assert_eq!(config.service.base_url, "http://env/api");
        assert_eq!(config.token().unwrap(), "env-token");
    }

    #[test]
    fn test_missing_token_is_error() {
        let config = config("http://env/api", None).with_overrides(Some("http://flag"), None);

        let err = config.token().unwrap_err();
        assert!(err.to_string().contains("DOCSTORE_TOKEN"));
    }

    #[test]
    fn test_empty_token_is_forwarded() {
        let config = config("http://env/api", None).with_overrides(None, Some(String::new()));
        assert_eq!(config.token().unwrap(), "");
    }

    #[test]
    fn test_normalize_base_url() {
        assert_eq!(normalize_base_url("http://host/api"), "http://host/api");
        assert_eq!(normalize_base_url("http://host/api/"), "http://host/api");
        assert_eq!(normalize_base_url("http://host/api//"), "http://host/api");
        assert_eq!(normalize_base_url("  http://host  "), "http://host");
    }

    #[test]
    fn test_auth_debug_redacts_token() {
        let auth = AuthConfig { token: Some("secret-token".to_string()) };
        let printed = format!("{:?}", auth);
        assert!(!printed.contains("secret-token"));
        assert!(printed.contains("redacted"));
    }
}
