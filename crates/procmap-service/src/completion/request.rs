//! Completion request types and the defaults applied to every call.

#[cfg(feature = "config")]
use clap::Args;
use serde::{Deserialize, Serialize};

/// Model used when none is configured.
pub const DEFAULT_MODEL: &str = "gpt-4.1-nano-2025-04-14";

/// Sampling temperature used when none is configured.
pub const DEFAULT_TEMPERATURE: f32 = 0.0;

/// Output token cap used when none is configured.
pub const DEFAULT_MAX_TOKENS: u32 = 2048;

/// A single-prompt completion request.
///
/// The prompt is sent as the only message of the conversation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompletionRequest {
    /// Fully rendered prompt text.
    pub prompt: String,
    /// Model identifier; the provider picks its own when unset.
    pub model: Option<String>,
    /// Sampling temperature.
    pub temperature: f32,
    /// Maximum number of output tokens.
    pub max_tokens: u32,
}

impl CompletionRequest {
    /// Creates a request using the default sampling settings.
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            model: None,
            temperature: DEFAULT_TEMPERATURE,
            max_tokens: DEFAULT_MAX_TOKENS,
        }
    }

    /// Sets the model identifier.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    /// Sets the sampling temperature.
    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    /// Sets the output token cap.
    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    /// Returns the length of the prompt in bytes.
    #[inline]
    pub fn prompt_len(&self) -> usize {
        self.prompt.len()
    }
}

/// Model and sampling settings applied by [`CompletionService`].
///
/// [`CompletionService`]: super::CompletionService
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "config", derive(Args))]
pub struct CompletionDefaults {
    /// Model identifier sent with every request.
    #[cfg_attr(
        feature = "config",
        arg(long = "openai-model", env = "OPENAI_MODEL", default_value = DEFAULT_MODEL)
    )]
    #[serde(default = "default_model")]
    pub model: String,

    /// Sampling temperature; 0 keeps replies deterministic.
    #[cfg_attr(
        feature = "config",
        arg(long = "openai-temperature", env = "OPENAI_TEMPERATURE", default_value_t = DEFAULT_TEMPERATURE)
    )]
    #[serde(default)]
    pub temperature: f32,

    /// Maximum number of output tokens per reply.
    #[cfg_attr(
        feature = "config",
        arg(long = "openai-max-tokens", env = "OPENAI_MAX_TOKENS", default_value_t = DEFAULT_MAX_TOKENS)
    )]
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
}

fn default_model() -> String {
    DEFAULT_MODEL.to_owned()
}

fn default_max_tokens() -> u32 {
    DEFAULT_MAX_TOKENS
}

impl Default for CompletionDefaults {
    fn default() -> Self {
        Self {
            model: default_model(),
            temperature: DEFAULT_TEMPERATURE,
            max_tokens: DEFAULT_MAX_TOKENS,
        }
    }
}

impl CompletionDefaults {
    /// Builds a request for the given prompt with these settings.
    pub fn request(&self, prompt: impl Into<String>) -> CompletionRequest {
        CompletionRequest::new(prompt)
            .with_model(self.model.clone())
            .with_temperature(self.temperature)
            .with_max_tokens(self.max_tokens)
    }

    /// Validates the settings.
    ///
    /// Returns an error message if the model is blank, the temperature is
    /// outside `0.0..=2.0`, or the token cap is zero.
    pub fn validate(&self) -> Result<(), String> {
        if self.model.trim().is_empty() {
            return Err("Model identifier cannot be empty".to_owned());
        }

        if !(0.0..=2.0).contains(&self.temperature) {
            return Err(format!(
                "Temperature must be between 0.0 and 2.0, got {}",
                self.temperature
            ));
        }

        if self.max_tokens == 0 {
            return Err("Max tokens cannot be 0".to_owned());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_deterministic_settings() {
        let defaults = CompletionDefaults::default();
        assert_eq!(defaults.model, "gpt-4.1-nano-2025-04-14");
        assert_eq!(defaults.temperature, 0.0);
        assert_eq!(defaults.max_tokens, 2048);
        assert!(defaults.validate().is_ok());
    }

    #[test]
    fn request_carries_defaults() {
        let request = CompletionDefaults::default().request("hello");
        assert_eq!(request.prompt, "hello");
        assert_eq!(request.model.as_deref(), Some(DEFAULT_MODEL));
        assert_eq!(request.max_tokens, 2048);
        assert_eq!(request.prompt_len(), 5);
    }

    #[test]
    fn validate_rejects_bad_values() {
        let blank = CompletionDefaults {
            model: "  ".to_owned(),
            ..Default::default()
        };
        assert!(blank.validate().is_err());

        let hot = CompletionDefaults {
            temperature: 3.5,
            ..Default::default()
        };
        assert!(hot.validate().is_err());

        let capped = CompletionDefaults {
            max_tokens: 0,
            ..Default::default()
        };
        assert!(capped.validate().is_err());
    }
}
