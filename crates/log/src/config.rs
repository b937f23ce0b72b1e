//! Logging configuration and presets

use serde::{Deserialize, Serialize};

/// Environment variable holding the filter directive.
pub const LEVEL_ENV: &str = "ENDERECO_LOG";

/// Environment variable selecting the output format.
pub const FORMAT_ENV: &str = "ENDERECO_LOG_FORMAT";

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Filter directive (e.g., "info", "debug,endereco_form=trace")
    pub level: String,

    /// Output format
    pub format: Format,

    /// Colored output
    pub ansi: bool,

    /// Include the event target
    pub target: bool,
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    /// Human-readable with colors and indentation
    Pretty,
    /// Compact single-line output
    #[default]
    Compact,
    /// Structured JSON output
    Json,
}

impl Format {
    fn parse(value: &str) -> Self {
        match value.to_lowercase().as_str() {
            "pretty" => Format::Pretty,
            "json" => Format::Json,
            _ => Format::Compact,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: Format::Compact,
            ansi: true,
            target: true,
        }
    }
}

impl Config {
    /// Create configuration from environment variables
    ///
    /// `ENDERECO_LOG` wins over `RUST_LOG`; `ENDERECO_LOG_FORMAT` selects
    /// `pretty`, `json` or (anything else) `compact`.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`Config::from_env`] with a custom variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(level) = lookup(LEVEL_ENV).or_else(|| lookup("RUST_LOG")) {
            config.level = level;
        }

        if let Some(format) = lookup(FORMAT_ENV) {
            config.format = Format::parse(&format);
            if config.format == Format::Json {
                config.ansi = false;
            }
        }

        config
    }

    /// Development configuration (pretty, debug level)
    #[must_use]
    pub fn development() -> Self {
        Self {
            level: "debug".to_string(),
            format: Format::Pretty,
            ..Self::default()
        }
    }

    /// Production configuration (JSON, info level)
    #[must_use]
    pub fn production() -> Self {
        Self {
            level: "info".to_string(),
            format: Format::Json,
            ansi: false,
            ..Self::default()
        }
    }
}
