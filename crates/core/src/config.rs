//! Configuration management for the Idea Forge CLI.
//!
//! This module handles loading and merging configuration from multiple sources:
//! - Environment variables
//! - Command-line flags
//! - Config files (.forge/config.yaml)
//!
//! Precedence: CLI flags > environment variables > config file > defaults.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;

use crate::error::{AppError, AppResult};

/// Main application configuration.
///
/// This struct holds all global configuration options that affect
/// CLI behavior across commands.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Optional config file path
    pub config_file: Option<PathBuf>,

    /// Active LLM provider (e.g., "gemini", "ollama", "mock")
    pub provider: String,

    /// Default model identifier
    pub model: String,

    /// API key for the LLM provider
    pub api_key: Option<String>,

    /// Log level override
    pub log_level: Option<String>,

    /// Verbose mode (enables debug logging)
    pub verbose: bool,

    /// Disable colored output
    pub no_color: bool,

    /// Per-provider configurations from the config file
    pub providers: Option<HashMap<String, ProviderConfig>>,
}

/// Provider-specific configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ProviderConfig {
    Gemini {
        #[serde(rename = "apiKeyEnv")]
        api_key_env: String,
        model: String,
        endpoint: Option<String>,
    },
    Ollama {
        endpoint: String,
        model: String,
        timeout: Option<u64>,
    },
}

impl ProviderConfig {
    /// Get the model name for this provider.
    pub fn model(&self) -> &str {
        match self {
            Self::Gemini { model, .. } => model,
            Self::Ollama { model, .. } => model,
        }
    }

    /// Get the custom endpoint URL if configured.
    pub fn endpoint(&self) -> Option<&str> {
        match self {
            Self::Gemini { endpoint, .. } => endpoint.as_deref(),
            Self::Ollama { endpoint, .. } => Some(endpoint.as_str()),
        }
    }
}

/// Full configuration file structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ConfigFile {
    #[serde(rename = "activeProvider")]
    active_provider: Option<String>,
    providers: Option<HashMap<String, ProviderConfig>>,
    logging: Option<LoggingConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct LoggingConfig {
    level: Option<String>,
    color: Option<bool>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            config_file: None,
            provider: "gemini".to_string(),
            model: "gemini-2.0-flash".to_string(),
            api_key: None,
            log_level: None,
            verbose: false,
            no_color: false,
            providers: None,
        }
    }
}

impl AppConfig {
    /// Load configuration from the config file and environment variables.
    ///
    /// Environment variables:
    /// - `FORGE_CONFIG`: Path to config file
    /// - `FORGE_PROVIDER`: LLM provider
    /// - `FORGE_MODEL`: Model identifier
    /// - `FORGE_API_KEY`: API key
    /// - `RUST_LOG`: Log level
    /// - `NO_COLOR`: Disable colored output
    pub fn load() -> AppResult<Self> {
        Self::load_from(None)
    }

    /// Load configuration, preferring an explicitly supplied config file
    /// (the `--config` flag) over `FORGE_CONFIG` and the default path.
    pub fn load_from(config_file: Option<PathBuf>) -> AppResult<Self> {
        let mut config = Self::default();

        config.config_file = config_file;
        if config.config_file.is_none() {
            if let Ok(path) = std::env::var("FORGE_CONFIG") {
                config.config_file = Some(PathBuf::from(path));
            }
        }

        // A named config file must exist; only the default path is optional
        let config_path = if let Some(ref cf) = config.config_file {
            if !cf.exists() {
                return Err(AppError::Config(format!("Config file not found: {:?}", cf)));
            }
            cf.clone()
        } else {
            PathBuf::from(".forge/config.yaml")
        };

        if config_path.exists() {
            config = config.merge_yaml(&config_path)?;
        }

        // Environment variables override the config file
        if let Ok(provider) = std::env::var("FORGE_PROVIDER") {
            config.provider = provider;
        }

        if let Ok(model) = std::env::var("FORGE_MODEL") {
            config.model = model;
        }

        if let Ok(key) = std::env::var("FORGE_API_KEY") {
            config.api_key = Some(key);
        }

        if let Ok(level) = std::env::var("RUST_LOG") {
            config.log_level = Some(level);
        }

        if std::env::var("NO_COLOR").is_ok() {
            config.no_color = true;
        }

        Ok(config)
    }

    /// Merge YAML configuration file into this config.
    fn merge_yaml(&mut self, path: &PathBuf) -> AppResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            AppError::Config(format!("Failed to read config file {:?}: {}", path, e))
        })?;

        let config_file: ConfigFile = serde_yaml::from_str(&contents).map_err(|e| {
            AppError::Config(format!("Failed to parse config file {:?}: {}", path, e))
        })?;

        let mut result = self.clone();

        if let Some(logging) = config_file.logging {
            if let Some(level) = logging.level {
                result.log_level = Some(level);
            }
            if let Some(color) = logging.color {
                result.no_color = !color;
            }
        }

        if let Some(active) = config_file.active_provider {
            result.provider = active;
        }

        if let Some(providers) = config_file.providers {
            // The active provider's entry supplies the default model
            if let Some(provider_config) = providers.get(&result.provider) {
                result.model = provider_config.model().to_string();
            }
            result.providers = Some(providers);
        }

        Ok(result)
    }

    /// Apply CLI overrides to the configuration.
    ///
    /// This method merges command-line flags with the loaded configuration,
    /// giving precedence to CLI flags over environment variables.
    pub fn with_overrides(
        mut self,
        config_file: Option<PathBuf>,
        provider: Option<String>,
        model: Option<String>,
        log_level: Option<String>,
        verbose: bool,
        no_color: bool,
    ) -> Self {
        if let Some(config_file) = config_file {
            self.config_file = Some(config_file);
        }

        if let Some(provider) = provider {
            self.provider = provider;
        }

        if let Some(model) = model {
            self.model = model;
        }

        if let Some(log_level) = log_level {
            self.log_level = Some(log_level);
        }

        if verbose {
            self.verbose = true;
            // Verbose mode implies debug logging
            if self.log_level.is_none() {
                self.log_level = Some("debug".to_string());
            }
        }

        if no_color {
            self.no_color = true;
        }

        self
    }

    /// Get the configuration for a named provider, if present.
    pub fn get_provider_config(&self, provider: &str) -> Option<&ProviderConfig> {
        self.providers.as_ref().and_then(|p| p.get(provider))
    }

    /// Get the custom endpoint for the active provider, if configured.
    pub fn resolve_endpoint(&self) -> Option<&str> {
        self.get_provider_config(&self.provider)
            .and_then(|pc| pc.endpoint())
    }

    /// Resolve the API key for the active provider.
    ///
    /// Checks the explicit `FORGE_API_KEY` value first, then the provider's
    /// configured `apiKeyEnv` variable, then `GEMINI_API_KEY` as a fallback
    /// for the default provider.
    pub fn resolve_api_key(&self) -> Option<String> {
        if let Some(ref key) = self.api_key {
            return Some(key.clone());
        }

        if let Some(ProviderConfig::Gemini { api_key_env, .. }) =
            self.get_provider_config(&self.provider)
        {
            if let Ok(key) = std::env::var(api_key_env) {
                return Some(key);
            }
        }

        if self.provider == "gemini" {
            if let Ok(key) = std::env::var("GEMINI_API_KEY") {
                return Some(key);
            }
        }

        None
    }

    /// Validate configuration for the active provider.
    pub fn validate(&self) -> AppResult<()> {
        let provider = &self.provider;
        let known_providers = ["gemini", "ollama", "mock"];

        if !known_providers.contains(&provider.as_str()) {
            return Err(AppError::Config(format!(
                "Unknown provider: {}. Supported: {}",
                provider,
                known_providers.join(", ")
            )));
        }

        if provider == "gemini" && self.resolve_api_key().is_none() {
            return Err(AppError::Config(
                "Gemini provider requires an API key. Set FORGE_API_KEY or GEMINI_API_KEY."
                    .to_string(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.provider, "gemini");
        assert_eq!(config.model, "gemini-2.0-flash");
        assert!(!config.verbose);
        assert!(!config.no_color);
    }

    #[test]
    fn test_with_overrides() {
        let config = AppConfig::default();
        let overridden = config.with_overrides(
            None,
            Some("ollama".to_string()),
            Some("llama3.2".to_string()),
            None,
            true,
            false,
        );

        assert_eq!(overridden.provider, "ollama");
        assert_eq!(overridden.model, "llama3.2");
        assert!(overridden.verbose);
        assert_eq!(overridden.log_level, Some("debug".to_string()));
    }

    #[test]
    fn test_validate_unknown_provider() {
        let mut config = AppConfig::default();
        config.provider = "unknown".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_mock_provider() {
        let mut config = AppConfig::default();
        config.provider = "mock".to_string();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_provider_config_yaml() {
        let yaml = r#"
activeProvider: ollama
providers:
  ollama:
    endpoint: "http://localhost:11434"
    model: llama3.2
    timeout: 30
  gemini:
    apiKeyEnv: GEMINI_API_KEY
    model: gemini-2.0-flash
logging:
  level: debug
  color: false
"#;
        let parsed: ConfigFile = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(parsed.active_provider.as_deref(), Some("ollama"));

        let providers = parsed.providers.unwrap();
        match providers.get("ollama").unwrap() {
            ProviderConfig::Ollama {
                endpoint, model, ..
            } => {
                assert_eq!(endpoint, "http://localhost:11434");
                assert_eq!(model, "llama3.2");
            }
            other => panic!("Expected Ollama config, got {:?}", other),
        }
        match providers.get("gemini").unwrap() {
            ProviderConfig::Gemini {
                api_key_env, model, ..
            } => {
                assert_eq!(api_key_env, "GEMINI_API_KEY");
                assert_eq!(model, "gemini-2.0-flash");
            }
            other => panic!("Expected Gemini config, got {:?}", other),
        }
    }

    #[test]
    fn test_load_from_explicit_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        std::fs::write(
            &path,
            "activeProvider: ollama\nproviders:\n  ollama:\n    endpoint: \"http://localhost:11434\"\n    model: llama3.2\n",
        )
        .unwrap();

        let config = AppConfig::load_from(Some(path.clone())).unwrap();
        assert_eq!(config.provider, "ollama");
        assert_eq!(config.model, "llama3.2");
        assert_eq!(config.config_file, Some(path));
    }

    #[test]
    fn test_load_from_missing_config_file_errors() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.yaml");
        match AppConfig::load_from(Some(path)) {
            Err(AppError::Config(message)) => assert!(message.contains("not found")),
            other => panic!("Expected config error, got {:?}", other.is_ok()),
        }
    }

    #[test]
    fn test_resolve_api_key_explicit() {
        let mut config = AppConfig::default();
        config.api_key = Some("secret".to_string());
        assert_eq!(config.resolve_api_key(), Some("secret".to_string()));
    }
}
