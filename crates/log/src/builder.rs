//! Logger builder implementation

use tracing_subscriber::{EnvFilter, Registry, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::{Config, Format};
use crate::{LogError, LogResult};

/// Logger builder
#[derive(Debug)]
pub struct LoggerBuilder {
    config: Config,
}

/// Guard that keeps the logger alive
///
/// Hold it for the lifetime of the program.
#[derive(Debug)]
#[must_use = "dropping the guard ends the logging session"]
pub struct LoggerGuard {
    config: Config,
}

impl LoggerGuard {
    /// Configuration the logger was installed with.
    pub fn config(&self) -> &Config {
        &self.config
    }
}

macro_rules! create_fmt_layer {
    ($format:ident, $config:expr) => {
        tracing_subscriber::fmt::layer()
            .$format()
            .with_writer(std::io::stderr)
            .with_ansi($config.ansi)
            .with_target($config.target)
    };
}

impl LoggerBuilder {
    /// Create builder from config
    #[must_use]
    pub fn from_config(config: Config) -> Self {
        Self { config }
    }

    /// Parses the configured filter directive.
    pub fn filter(&self) -> LogResult<EnvFilter> {
        EnvFilter::try_new(&self.config.level).map_err(|e| LogError::Filter {
            directive: self.config.level.clone(),
            reason: e.to_string(),
        })
    }

    /// Build and install the global subscriber
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - Filter string cannot be parsed
    /// - A global subscriber is already installed
    pub fn build(self) -> LogResult<LoggerGuard> {
        let filter = self.filter()?;

        match self.config.format {
            Format::Pretty => Registry::default()
                .with(filter)
                .with(create_fmt_layer!(pretty, self.config))
                .try_init()?,
            Format::Compact => Registry::default()
                .with(filter)
                .with(create_fmt_layer!(compact, self.config))
                .try_init()?,
            Format::Json => Registry::default()
                .with(filter)
                .with(create_fmt_layer!(json, self.config).with_current_span(true))
                .try_init()?,
        }

        Ok(LoggerGuard {
            config: self.config,
        })
    }
}
