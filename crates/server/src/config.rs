//! Environment-driven configuration.

use referent_core::GenerateConfig;

/// Reads generation settings from the environment.
///
/// `OPENROUTER_API_KEY` is the credential, `APP_URL` overrides the referer
/// header, `OPENROUTER_MODEL` overrides the model. A missing key is not an
/// error here: `Generator::new` rejects blank keys, so the failure surfaces
/// at the first request that actually needs generation.
pub fn generate_config() -> GenerateConfig {
    let mut config = GenerateConfig::new(std::env::var("OPENROUTER_API_KEY").unwrap_or_default());
    if let Ok(app_url) = std::env::var("APP_URL") {
        config.app_url = app_url;
    }
    if let Ok(model) = std::env::var("OPENROUTER_MODEL") {
        config.model = model;
    }
    config
}
