//! # endereco-log
//!
//! `tracing` setup for hosts of the address form validator.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! fn main() -> endereco_log::LogResult<()> {
//!     let _guard = endereco_log::auto_init()?;
//!     tracing::info!("form mounted");
//!     Ok(())
//! }
//! ```

mod builder;
mod config;

pub use builder::{LoggerBuilder, LoggerGuard};
pub use config::{Config, FORMAT_ENV, Format, LEVEL_ENV};

/// Result type for logger operations
pub type LogResult<T> = Result<T, LogError>;

/// Error type for logger operations
#[derive(Debug, thiserror::Error)]
pub enum LogError {
    /// Filter directive could not be parsed
    #[error("invalid filter `{directive}`: {reason}")]
    Filter {
        /// The rejected directive
        directive: String,
        /// Parser message
        reason: String,
    },

    /// A global subscriber was already set
    #[error("logger already initialized: {0}")]
    AlreadyInitialized(#[from] tracing_subscriber::util::TryInitError),
}

/// Auto-detect and initialize the best logging configuration
///
/// Environment variables win; otherwise debug builds get
/// [`Config::development`] and release builds [`Config::production`].
pub fn auto_init() -> LogResult<LoggerGuard> {
    if std::env::var(LEVEL_ENV).is_ok() || std::env::var("RUST_LOG").is_ok() {
        init_with(Config::from_env())
    } else if cfg!(debug_assertions) {
        init_with(Config::development())
    } else {
        init_with(Config::production())
    }
}

/// Initialize with default configuration
pub fn init() -> LogResult<LoggerGuard> {
    init_with(Config::default())
}

/// Initialize with custom configuration
pub fn init_with(config: Config) -> LogResult<LoggerGuard> {
    LoggerBuilder::from_config(config).build()
}
