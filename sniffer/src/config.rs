use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Capture configuration, merged from an optional `sniffer.toml`, `LCP_*`
/// environment variables and command-line flags (strongest last).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Serial device, e.g. `/dev/ttyUSB0`.
    pub port: Option<String>,
    pub baud: u32,
    pub timeout_ms: u64,
    /// Also print the full reconstructed frame as hex.
    pub show_frame_hex: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: None,
            baud: 19200,
            timeout_ms: 1000,
            show_frame_hex: false,
        }
    }
}

impl Config {
    /// Load the file and environment layers.
    pub fn load() -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name("sniffer").required(false))
            .add_source(config::Environment::with_prefix("LCP").try_parsing(true))
            .build()?;

        settings.try_deserialize()
    }

    /// Read timeout as Duration.
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_wire_settings() {
        let cfg = Config::default();
        assert_eq!(cfg.port, None);
        assert_eq!(cfg.baud, 19200);
        assert_eq!(cfg.timeout(), Duration::from_millis(1000));
        assert!(!cfg.show_frame_hex);
    }
}
