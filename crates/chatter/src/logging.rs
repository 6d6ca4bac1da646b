#![forbid(unsafe_code)]

//! Global log subscriber setup.
//!
//! Library crates only emit `tracing` events; applications call [`init`]
//! once at startup to print them. `RUST_LOG` takes precedence over
//! [`LogConfig::filter`] when set.

use tracing_subscriber::EnvFilter;

use crate::{Error, Result};

/// Log subscriber options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    /// Fallback `EnvFilter` directives, e.g. `"info,chatter_widgets=debug"`.
    pub filter: String,
    /// Emit one JSON object per line. Requires the `tracing-json` feature.
    pub json: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            filter: "info".to_owned(),
            json: false,
        }
    }
}

impl LogConfig {
    #[must_use]
    pub fn filter(mut self, directives: impl Into<String>) -> Self {
        self.filter = directives.into();
        self
    }

    #[must_use]
    pub fn json(mut self, json: bool) -> Self {
        self.json = json;
        self
    }

    /// Resolve the effective filter.
    pub fn env_filter(&self) -> Result<EnvFilter> {
        match EnvFilter::try_from_default_env() {
            Ok(filter) => Ok(filter),
            Err(_) => EnvFilter::try_new(&self.filter).map_err(|e| Error::Logging(e.to_string())),
        }
    }
}

/// Install the global subscriber.
///
/// Fails if the filter does not parse, if JSON output is requested without
/// the `tracing-json` feature, or if a global subscriber is already set.
pub fn init(config: LogConfig) -> Result<()> {
    let filter = config.env_filter()?;
    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    let installed = if config.json {
        #[cfg(feature = "tracing-json")]
        {
            builder.json().try_init()
        }
        #[cfg(not(feature = "tracing-json"))]
        {
            return Err(Error::Logging(
                "JSON output requires the `tracing-json` feature".to_owned(),
            ));
        }
    } else {
        builder.try_init()
    };
    installed.map_err(|e| Error::Logging(e.to_string()))?;

    tracing::debug!(json = config.json, "logging initialized");
    Ok(())
}
