//! Tunables for the converter widget.
//!
//! The defaults reproduce the widget as shipped: an 800ms simulated round trip
//! and a five-entry recent conversions list. With the `with_serde` feature the
//! config can also be read from TOML:
//!
//! ```toml
//! pending_delay_ms = 250
//! history_capacity = 10
//! ```

use crate::error::{Error, Result};
use derive_builder::Builder;
use getset::Getters;
#[cfg(feature = "with_serde")]
use serde_derive::{Serialize, Deserialize};
use std::time::Duration;

/// How long a cross-currency conversion stays pending.
pub const DEFAULT_PENDING_DELAY_MS: u64 = 800;
/// How many conversions the history keeps.
pub const DEFAULT_HISTORY_CAPACITY: usize = 5;

#[derive(Clone, Debug, PartialEq, Getters, Builder)]
#[cfg_attr(feature = "with_serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "with_serde", serde(default, deny_unknown_fields))]
#[builder(pattern = "owned", setter(into), build_fn(validate = "Self::validate"))]
#[getset(get = "pub")]
pub struct ConverterConfig {
    /// Simulated network latency, in milliseconds.
    #[builder(default = "DEFAULT_PENDING_DELAY_MS")]
    pending_delay_ms: u64,
    /// Maximum number of records in the recent conversions list.
    #[builder(default = "DEFAULT_HISTORY_CAPACITY")]
    history_capacity: usize,
}

impl ConverterConfigBuilder {
    fn validate(&self) -> std::result::Result<(), String> {
        match self.history_capacity {
            Some(0) => Err("history_capacity must be at least 1".into()),
            _ => Ok(()),
        }
    }
}

impl Default for ConverterConfig {
    fn default() -> Self {
        Self {
            pending_delay_ms: DEFAULT_PENDING_DELAY_MS,
            history_capacity: DEFAULT_HISTORY_CAPACITY,
        }
    }
}

impl ConverterConfig {
    pub fn builder() -> ConverterConfigBuilder {
        ConverterConfigBuilder::default()
    }

    /// The pending delay as a `Duration`.
    pub fn pending_delay(&self) -> Duration {
        Duration::from_millis(self.pending_delay_ms)
    }

    /// Parse a config from a TOML document. Missing keys take their defaults.
    #[cfg(feature = "with_serde")]
    pub fn from_toml(contents: &str) -> Result<Self> {
        let config: Self = toml::from_str(contents)
            .map_err(|e| Error::ConfigInvalid(e.to_string()))?;
        if config.history_capacity == 0 {
            Err(Error::ConfigInvalid("history_capacity must be at least 1".into()))?;
        }
        Ok(config)
    }

    /// Build a config from explicit values, checking them.
    pub fn new(pending_delay_ms: u64, history_capacity: usize) -> Result<Self> {
        Self::builder()
            .pending_delay_ms(pending_delay_ms)
            .history_capacity(history_capacity)
            .build()
            .map_err(|e| Error::ConfigInvalid(e))
    }
}
