//! Provider selection from configuration.

use jotter_config::AppConfig;
use jotter_core::error::ProviderError;
use jotter_core::provider::Provider;
use std::sync::Arc;
use tracing::debug;

use crate::gemini::GeminiProvider;

/// Message used when no API key could be resolved.
pub const MISSING_API_KEY: &str =
    "GOOGLE_GENERATIVE_AI_API_KEY or GEMINI_API_KEY environment variable is not set";

/// Build the configured provider.
///
/// Fails with [`ProviderError::NotConfigured`] when no API key is present,
/// so callers can start without a key and report the problem per request.
pub fn build_from_config(config: &AppConfig) -> Result<Arc<dyn Provider>, ProviderError> {
    let api_key = config
        .api_key
        .as_deref()
        .map(str::trim)
        .filter(|k| !k.is_empty())
        .ok_or_else(|| ProviderError::NotConfigured(MISSING_API_KEY.into()))?;

    match config.provider.as_str() {
        "gemini" => {
            let mut provider = GeminiProvider::new(api_key);
            if let Some(url) = &config.api_url {
                provider = provider.with_base_url(url.as_str());
            }
            debug!(provider = "gemini", model = %config.model, "Provider ready");
            Ok(Arc::new(provider))
        }
        other => Err(ProviderError::NotConfigured(format!(
            "Unknown provider '{other}'"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_key_is_not_configured() {
        let config = AppConfig::default();
        match build_from_config(&config) {
            Err(ProviderError::NotConfigured(msg)) => assert_eq!(msg, MISSING_API_KEY),
            Err(other) => panic!("unexpected error: {other:?}"),
            Ok(_) => panic!("expected an error"),
        }
    }

    #[test]
    fn blank_key_is_not_configured() {
        let config = AppConfig {
            api_key: Some("   ".into()),
            ..AppConfig::default()
        };
        assert!(build_from_config(&config).is_err());
    }

    #[test]
    fn builds_gemini_with_key() {
        let config = AppConfig {
            api_key: Some("test-key".into()),
            api_url: Some("http://localhost:9999".into()),
            ..AppConfig::default()
        };
        let provider = build_from_config(&config).unwrap();
        assert_eq!(provider.name(), "gemini");
    }

    #[test]
    fn unknown_provider_is_rejected() {
        let config = AppConfig {
            api_key: Some("test-key".into()),
            provider: "openai".into(),
            ..AppConfig::default()
        };
        assert!(matches!(
            build_from_config(&config),
            Err(ProviderError::NotConfigured(ref m)) if m.contains("openai")
        ));
    }
}
