use crate::error::ConfigError;
use crate::settings::Settings;
use std::path::Path;

// Declare the modules that make up this crate.
pub mod error;
pub mod settings;

// Re-export the core types to provide a clean public API.
pub use settings::{Account, FeedKind, Market, Server, Settings as Config};

/// Loads the application configuration.
///
/// Reads the given TOML file if it exists, then applies `CRYPTOSIM_*`
/// environment variable overrides (e.g. `CRYPTOSIM_SERVER__PORT=9000`).
/// Every field has a default, so a missing file yields a fully usable
/// configuration.
pub fn load_settings(path: &Path) -> Result<Settings, ConfigError> {
    let builder = config::Config::builder()
        .add_source(config::File::from(path).required(false))
        .add_source(
            config::Environment::with_prefix("CRYPTOSIM")
                .prefix_separator("_")
                .separator("__"),
        )
        .build()?;

    // Attempt to deserialize the entire configuration into our `Settings` struct
    let settings = builder.try_deserialize::<Settings>()?;

    if settings.account.initial_balance.is_sign_negative() {
        return Err(ConfigError::ValidationError(
            "account.initial_balance must not be negative".to_string(),
        ));
    }
    if settings.market.refresh_interval_secs == 0 {
        return Err(ConfigError::ValidationError(
            "market.refresh_interval_secs must be at least 1".to_string(),
        ));
    }

    Ok(settings)
}
