//! Entry point for the mtsa binary.

mod args;
mod tracing_setup;

use anyhow::Result;
use market_dioxus::MarketConfig;

fn main() -> Result<()> {
    let overrides = args::parse_args();

    let loaded = match &overrides.config {
        Some(path) => MarketConfig::load_from(path),
        None => MarketConfig::load_default(),
    };
    let (mut config, load_error) = match loaded {
        Ok(config) => (config, None),
        Err(err) => (MarketConfig::default(), Some(err)),
    };
    if let Some(url) = &overrides.api_url {
        config = config.with_api_url(url.clone());
    }
    if let Some(user_id) = &overrides.user_id {
        config = config.with_user_id(user_id.clone());
    }

    // Set up tracing subscriber BEFORE Dioxus to prevent dioxus-logger from setting its own.
    tracing_setup::init(&config.logging);

    if let Some(err) = load_error {
        log::warn!("Failed to load mtsa.toml, using default configuration: {err}");
    }
    for warning in &overrides.warnings {
        log::warn!("{warning}");
    }
    log::info!("Starting mtsa against {}", config.api_base());

    // API requests and dialog timers run on this runtime
    let runtime = tokio::runtime::Runtime::new()?;
    let _guard = runtime.enter();

    market_dioxus::launch(config)
}
