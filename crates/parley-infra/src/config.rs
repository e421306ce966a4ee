//! Environment configuration for the relay.
//!
//! Everything is env-provided: vendor selection and credential, model and
//! endpoint overrides, and the optional Postgres connection parameters.
//! Missing credentials fail here, at startup, rather than per request.

use secrecy::SecretString;
use thiserror::Error;

use std::fmt;
use std::str::FromStr;

/// Which vendor binding to construct.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderKind {
    OpenAi,
    Gemini,
}

impl ProviderKind {
    /// Environment variable holding this vendor's credential.
    pub fn credential_var(self) -> &'static str {
        match self {
            ProviderKind::OpenAi => "OPENAI_API_KEY",
            ProviderKind::Gemini => "GEMINI_API_KEY",
        }
    }

    /// Model used when `LLM_MODEL` is unset.
    pub fn default_model(self) -> &'static str {
        match self {
            ProviderKind::OpenAi => "gpt-4o-mini",
            ProviderKind::Gemini => "gemini-2.5-pro",
        }
    }
}

impl fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProviderKind::OpenAi => write!(f, "openai"),
            ProviderKind::Gemini => write!(f, "gemini"),
        }
    }
}

impl FromStr for ProviderKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "openai" => Ok(ProviderKind::OpenAi),
            "gemini" => Ok(ProviderKind::Gemini),
            other => Err(format!("invalid provider: '{other}'")),
        }
    }
}

/// Vendor binding settings.
///
/// Does NOT derive Debug so the API key cannot leak through debug output.
pub struct ProviderSettings {
    pub kind: ProviderKind,
    pub api_key: SecretString,
    pub model: String,
    /// Endpoint override, mainly for tests and proxies.
    pub base_url: Option<String>,
}

/// Postgres connection parameters for the persisting configuration.
pub struct StoreSettings {
    pub host: String,
    pub port: u16,
    pub database: String,
    pub user: String,
    pub password: SecretString,
}

/// Full relay configuration.
pub struct RelayConfig {
    pub provider: ProviderSettings,
    pub store: Option<StoreSettings>,
}

/// Errors from configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("environment variable {0} is required")]
    MissingVar(&'static str),

    #[error("invalid value for {var}: '{value}'")]
    InvalidValue { var: &'static str, value: String },
}

impl RelayConfig {
    /// Load the relay configuration from the environment.
    ///
    /// - `LLM_PROVIDER`: `openai` (default) or `gemini`
    /// - `OPENAI_API_KEY` / `GEMINI_API_KEY`: credential for the selected vendor
    /// - `LLM_MODEL`, `LLM_BASE_URL`: vendor overrides
    /// - `CHAT_PERSISTENCE`: enables the Postgres-backed chat log
    /// - `POSTGRES_HOST`/`POSTGRES_PORT`/`POSTGRES_DB`/`POSTGRES_USER`/`POSTGRES_PASSWORD`
    pub fn from_env() -> Result<Self, ConfigError> {
        let kind = match env_opt("LLM_PROVIDER") {
            Some(raw) => raw
                .parse::<ProviderKind>()
                .map_err(|_| ConfigError::InvalidValue {
                    var: "LLM_PROVIDER",
                    value: raw,
                })?,
            None => ProviderKind::OpenAi,
        };

        let api_key = env_opt(kind.credential_var())
            .filter(|v| !v.trim().is_empty())
            .map(SecretString::from)
            .ok_or(ConfigError::MissingVar(kind.credential_var()))?;

        let model = env_opt("LLM_MODEL").unwrap_or_else(|| kind.default_model().to_string());
        let base_url = env_opt("LLM_BASE_URL");

        let store = if persistence_enabled(env_opt("CHAT_PERSISTENCE").as_deref())? {
            Some(StoreSettings {
                host: env_opt("POSTGRES_HOST").unwrap_or_else(|| "localhost".to_string()),
                port: parse_port(env_opt("POSTGRES_PORT"))?,
                database: env_opt("POSTGRES_DB").unwrap_or_else(|| "chatdb".to_string()),
                user: env_opt("POSTGRES_USER").unwrap_or_else(|| "postgres".to_string()),
                password: SecretString::from(
                    env_opt("POSTGRES_PASSWORD").unwrap_or_else(|| "password".to_string()),
                ),
            })
        } else {
            None
        };

        Ok(Self {
            provider: ProviderSettings {
                kind,
                api_key,
                model,
                base_url,
            },
            store,
        })
    }
}

fn env_opt(name: &str) -> Option<String> {
    std::env::var(name).ok()
}

/// Parse the `CHAT_PERSISTENCE` flag. Unset means disabled.
fn persistence_enabled(raw: Option<&str>) -> Result<bool, ConfigError> {
    let Some(raw) = raw else {
        return Ok(false);
    };
    match raw.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "" | "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidValue {
            var: "CHAT_PERSISTENCE",
            value: raw.to_string(),
        }),
    }
}

fn parse_port(raw: Option<String>) -> Result<u16, ConfigError> {
    match raw {
        None => Ok(5432),
        Some(v) => v.trim().parse().map_err(|_| ConfigError::InvalidValue {
            var: "POSTGRES_PORT",
            value: v,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_kind_roundtrip() {
        for kind in [ProviderKind::OpenAi, ProviderKind::Gemini] {
            let parsed: ProviderKind = kind.to_string().parse().unwrap();
            assert_eq!(kind, parsed);
        }
        assert!("claude".parse::<ProviderKind>().is_err());
    }

    #[test]
    fn test_provider_kind_defaults() {
        assert_eq!(ProviderKind::OpenAi.default_model(), "gpt-4o-mini");
        assert_eq!(ProviderKind::Gemini.default_model(), "gemini-2.5-pro");
        assert_eq!(ProviderKind::OpenAi.credential_var(), "OPENAI_API_KEY");
        assert_eq!(ProviderKind::Gemini.credential_var(), "GEMINI_API_KEY");
    }

    #[test]
    fn test_persistence_flag_parsing() {
        assert!(!persistence_enabled(None).unwrap());
        assert!(persistence_enabled(Some("1")).unwrap());
        assert!(persistence_enabled(Some("TRUE")).unwrap());
        assert!(persistence_enabled(Some("yes")).unwrap());
        assert!(!persistence_enabled(Some("false")).unwrap());
        assert!(!persistence_enabled(Some("0")).unwrap());
        assert!(persistence_enabled(Some("maybe")).is_err());
    }

    #[test]
    fn test_parse_port() {
        assert_eq!(parse_port(None).unwrap(), 5432);
        assert_eq!(parse_port(Some("6543".to_string())).unwrap(), 6543);
        assert!(parse_port(Some("not-a-port".to_string())).is_err());
    }
}
