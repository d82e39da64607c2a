//! Server configuration loaded from environment variables.
//!
//! Everything the process reads from the environment is captured once at
//! startup and carried through [`crate::state::AppState`]; handlers never
//! touch ambient configuration.
//!
//! Variables:
//! - `PARROT_PORT`: listen port (default 3000)
//! - `PARROT_BACKEND`: compile strategy, `local` or `model` (default `local`)
//! - `LLM_API_KEY`: bearer key, required for the `model` backend
//! - `LLM_ENDPOINT`: OpenAI-compatible base URL (default `https://api.openai.com/v1`)
//! - `LLM_MODEL`: model identifier (default `gpt-4o-mini`)
//! - `PARROT_MAX_TOKENS`: completion token bound (default 1024)

use thiserror::Error;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_ENDPOINT: &str = "https://api.openai.com/v1";
pub const DEFAULT_MODEL: &str = "gpt-4o-mini";
pub const DEFAULT_MAX_TOKENS: u32 = 1024;

/// Resolved process configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Listen port for the HTTP server.
    pub port: u16,
    /// The compile strategy this deployment runs.
    pub backend: BackendKind,
}

/// Which compile strategy a deployment runs. Exactly one is active per
/// process; the two are never composed.
#[derive(Debug, Clone)]
pub enum BackendKind {
    /// Fixed `pront` to `console.log` substitution, no outbound calls.
    Local,
    /// Prompted chat-completion call to an external service.
    Model(LlmConfig),
}

impl BackendKind {
    /// Short name for startup logs.
    pub fn name(&self) -> &'static str {
        match self {
            BackendKind::Local => "local",
            BackendKind::Model(_) => "model",
        }
    }
}

/// Settings for the OpenAI-compatible completion service.
#[derive(Debug, Clone)]
pub struct LlmConfig {
    /// Secret bearer key.
    pub api_key: String,
    /// Base URL; the client appends `/chat/completions`.
    pub endpoint: String,
    /// Model identifier sent with every request.
    pub model: String,
    /// Upper bound on generated tokens per completion.
    pub max_tokens: u32,
}

/// Configuration problems that abort startup.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{name} must be set when PARROT_BACKEND=model")]
    MissingVar { name: &'static str },

    #[error("invalid value for {name}: {reason}")]
    InvalidVar { name: &'static str, reason: String },
}

/// Raw environment values consumed by [`Config::from_env`]. Unset and
/// empty variables are treated the same.
#[derive(Debug, Default)]
struct EnvVars {
    port: Option<String>,
    backend: Option<String>,
    api_key: Option<String>,
    endpoint: Option<String>,
    model: Option<String>,
    max_tokens: Option<String>,
}

impl EnvVars {
    fn capture() -> Self {
        let var = |name: &str| std::env::var(name).ok().filter(|v| !v.is_empty());
        EnvVars {
            port: var("PARROT_PORT"),
            backend: var("PARROT_BACKEND"),
            api_key: var("LLM_API_KEY"),
            endpoint: var("LLM_ENDPOINT"),
            model: var("LLM_MODEL"),
            max_tokens: var("PARROT_MAX_TOKENS"),
        }
    }
}

impl Config {
    /// Loads configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(EnvVars::capture())
    }

    fn from_vars(vars: EnvVars) -> Result<Self, ConfigError> {
        let port = match &vars.port {
            Some(raw) => raw.parse().map_err(|_| ConfigError::InvalidVar {
                name: "PARROT_PORT",
                reason: format!("expected a port number, got '{raw}'"),
            })?,
            None => DEFAULT_PORT,
        };

        let backend = match vars.backend.as_deref().unwrap_or("local") {
            "local" => BackendKind::Local,
            "model" => BackendKind::Model(LlmConfig::from_vars(&vars)?),
            other => {
                return Err(ConfigError::InvalidVar {
                    name: "PARROT_BACKEND",
                    reason: format!("expected 'local' or 'model', got '{other}'"),
                });
            }
        };

        Ok(Config { port, backend })
    }
}

impl LlmConfig {
    fn from_vars(vars: &EnvVars) -> Result<Self, ConfigError> {
        let api_key = vars
            .api_key
            .clone()
            .ok_or(ConfigError::MissingVar { name: "LLM_API_KEY" })?;

        let max_tokens = match &vars.max_tokens {
            Some(raw) => raw.parse().map_err(|_| ConfigError::InvalidVar {
                name: "PARROT_MAX_TOKENS",
                reason: format!("expected an integer, got '{raw}'"),
            })?,
            None => DEFAULT_MAX_TOKENS,
        };

        Ok(LlmConfig {
            api_key,
            endpoint: vars
                .endpoint
                .clone()
                .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string()),
            model: vars.model.clone().unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            max_tokens,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_environment_yields_local_defaults() {
        let config = Config::from_vars(EnvVars::default()).unwrap();
        assert_eq!(config.port, DEFAULT_PORT);
        assert!(matches!(config.backend, BackendKind::Local));
    }

    #[test]
    fn model_backend_requires_an_api_key() {
        let vars = EnvVars {
            backend: Some("model".into()),
            ..EnvVars::default()
        };
        let err = Config::from_vars(vars).unwrap_err();
        assert!(matches!(err, ConfigError::MissingVar { name: "LLM_API_KEY" }));
    }

    #[test]
    fn model_backend_fills_llm_defaults() {
        let vars = EnvVars {
            backend: Some("model".into()),
            api_key: Some("sk-test".into()),
            ..EnvVars::default()
        };
        let config = Config::from_vars(vars).unwrap();
        match config.backend {
            BackendKind::Model(llm) => {
                assert_eq!(llm.api_key, "sk-test");
                assert_eq!(llm.endpoint, DEFAULT_ENDPOINT);
                assert_eq!(llm.model, DEFAULT_MODEL);
                assert_eq!(llm.max_tokens, DEFAULT_MAX_TOKENS);
            }
            BackendKind::Local => panic!("expected the model backend"),
        }
    }

    #[test]
    fn explicit_llm_settings_override_defaults() {
        let vars = EnvVars {
            backend: Some("model".into()),
            api_key: Some("sk-test".into()),
            endpoint: Some("https://llm.internal/v1".into()),
            model: Some("gpt-4o".into()),
            max_tokens: Some("256".into()),
            ..EnvVars::default()
        };
        let config = Config::from_vars(vars).unwrap();
        match config.backend {
            BackendKind::Model(llm) => {
                assert_eq!(llm.endpoint, "https://llm.internal/v1");
                assert_eq!(llm.model, "gpt-4o");
                assert_eq!(llm.max_tokens, 256);
            }
            BackendKind::Local => panic!("expected the model backend"),
        }
    }

    #[test]
    fn unparseable_port_is_rejected() {
        let vars = EnvVars {
            port: Some("八千".into()),
            ..EnvVars::default()
        };
        let err = Config::from_vars(vars).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidVar { name: "PARROT_PORT", .. }));
    }

    #[test]
    fn unknown_backend_name_is_rejected() {
        let vars = EnvVars {
            backend: Some("remote".into()),
            ..EnvVars::default()
        };
        let err = Config::from_vars(vars).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidVar { name: "PARROT_BACKEND", .. }));
    }

    #[test]
    fn unparseable_max_tokens_is_rejected() {
        let vars = EnvVars {
            backend: Some("model".into()),
            api_key: Some("sk-test".into()),
            max_tokens: Some("lots".into()),
            ..EnvVars::default()
        };
        let err = Config::from_vars(vars).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidVar { name: "PARROT_MAX_TOKENS", .. }));
    }
}
