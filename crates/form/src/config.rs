//! Form configuration

use std::time::Duration;

use endereco_validator::MaskOptions;
use serde::{Deserialize, Serialize};

use crate::error::FormError;

/// Placeholder logged for a blank complement.
pub const COMPLEMENT_PLACEHOLDER: &str = "Não informado";

/// Timings and mask options of a form.
///
/// Durations accept human-readable strings (`"500ms"`, `"1s"`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormConfig {
    /// How long the `shake` marker stays after an error.
    #[serde(with = "humantime_serde")]
    pub shake_duration: Duration,

    /// How long the `pulse-success` marker stays after a success.
    #[serde(with = "humantime_serde")]
    pub pulse_duration: Duration,

    /// Delay between marking fields successful and the success notification.
    #[serde(with = "humantime_serde")]
    pub success_delay: Duration,

    /// Value recorded for a blank complement.
    pub complement_placeholder: String,

    /// Input mask options.
    pub mask: MaskOptions,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            shake_duration: Duration::from_millis(500),
            pulse_duration: Duration::from_millis(300),
            success_delay: Duration::from_millis(500),
            complement_placeholder: COMPLEMENT_PLACEHOLDER.to_string(),
            mask: MaskOptions::default(),
        }
    }
}

impl FormConfig {
    /// Reads a configuration document; missing keys keep their defaults.
    pub fn from_json(document: &str) -> Result<Self, FormError> {
        Ok(serde_json::from_str(document)?)
    }
}
