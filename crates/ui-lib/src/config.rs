// ============================
// crates/ui-lib/src/config.rs
// ============================
//! Configuration management.
use anyhow::Result;
use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;

/// Application settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Server bind address
    pub bind_addr: SocketAddr,
    /// Log level
    pub log_level: String,
    /// Animation flag durations
    pub effects: EffectTimings,
}

/// How long each transient animation flag stays active, in milliseconds
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EffectTimings {
    /// Heading flash on every password edit
    pub flash_ms: u64,
    /// Form shake on submission
    pub shake_ms: u64,
    /// Heading spin-and-bounce on submission
    pub jump_ms: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            bind_addr: "127.0.0.1:3000".parse().unwrap(),
            log_level: "info".to_string(),
            effects: EffectTimings::default(),
        }
    }
}

impl Default for EffectTimings {
    fn default() -> Self {
        Self {
            flash_ms: 500,
            shake_ms: 1000,
            jump_ms: 1000,
        }
    }
}

impl Settings {
    /// Load settings from `config.toml` and `NEVERPASS_`-prefixed environment
    /// variables, on top of the defaults
    pub fn load() -> Result<Self> {
        Self::load_from("config.toml")
    }

    /// Load settings with an explicit config file path
    pub fn load_from(path: &str) -> Result<Self> {
        let settings = Figment::from(Serialized::defaults(Settings::default()))
            .merge(Toml::file(path))
            .merge(Env::prefixed("NEVERPASS_").split("__"))
            .extract()?;

        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.bind_addr.port(), 3000);
        assert_eq!(settings.log_level, "info");
        assert_eq!(settings.effects.flash_ms, 500);
        assert_eq!(settings.effects.shake_ms, 1000);
        assert_eq!(settings.effects.jump_ms, 1000);
    }

    #[test]
    fn test_load_without_config_file_uses_defaults() {
        let settings = Settings::load_from("does-not-exist.toml").unwrap();
        assert_eq!(settings.bind_addr, Settings::default().bind_addr);
        assert_eq!(settings.effects.jump_ms, 1000);
    }
}
