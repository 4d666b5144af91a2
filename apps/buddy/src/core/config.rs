use std::env;
use std::time::Duration;

use buddy_llm::CompletionConfig;

use crate::core::error::ConfigError;

pub const API_KEY_VAR: &str = "OPENAI_API_KEY";
pub const MODEL_VAR: &str = "BUDDY_MODEL";
pub const TEMPERATURE_VAR: &str = "BUDDY_TEMPERATURE";

#[derive(Debug, Clone)]
pub struct Settings {
    pub model: String,
    pub temperature: f32,
    pub request_timeout_secs: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            model: "gpt-4o".to_string(),
            temperature: 0.9,
            request_timeout_secs: 30,
        }
    }
}

impl Settings {
    /// Defaults, overridden by `BUDDY_MODEL` / `BUDDY_TEMPERATURE` when set.
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut settings = Self::default();

        if let Ok(model) = env::var(MODEL_VAR) {
            if !model.trim().is_empty() {
                settings.model = model;
            }
        }

        if let Ok(raw) = env::var(TEMPERATURE_VAR) {
            settings.temperature = raw.parse().map_err(|_| {
                ConfigError::Invalid(format!("{} must be a number, got {:?}", TEMPERATURE_VAR, raw))
            })?;
        }

        Ok(settings)
    }

    pub fn completion_config(&self) -> CompletionConfig {
        CompletionConfig {
            model: self.model.clone(),
            temperature: self.temperature,
            timeout: Duration::from_secs(self.request_timeout_secs),
        }
    }
}

/// The API key is read once at startup. Absence is an operator-facing
/// configuration error, never a per-request failure.
pub fn api_key_from_env() -> Result<String, ConfigError> {
    match env::var(API_KEY_VAR) {
        Ok(key) if !key.trim().is_empty() => Ok(key),
        _ => Err(ConfigError::MissingVar(API_KEY_VAR.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.model, "gpt-4o");
        assert_eq!(settings.temperature, 0.9);

        let config = settings.completion_config();
        assert_eq!(config.model, "gpt-4o");
        assert_eq!(config.timeout, Duration::from_secs(30));
    }

    #[test]
    fn env_overrides() {
        env::set_var(MODEL_VAR, "gpt-4o-mini");
        env::set_var(TEMPERATURE_VAR, "0.5");
        let settings = Settings::from_env().unwrap();
        assert_eq!(settings.model, "gpt-4o-mini");
        assert_eq!(settings.temperature, 0.5);

        env::set_var(TEMPERATURE_VAR, "hot");
        assert!(Settings::from_env().is_err());

        env::remove_var(MODEL_VAR);
        env::remove_var(TEMPERATURE_VAR);
    }
}
