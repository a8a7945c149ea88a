//! Environment configuration loading from .env files
//!
//! | Variable | Default | Meaning |
//! |----------|---------|---------|
//! | `MINIGRAD_FORMAT` | `plain` | Output format (`plain` or `json`) |
//! | `MINIGRAD_PRECISION` | `6` | Digits after the decimal point in plain output |
//! | `MINIGRAD_LOG` | `minigrad=warn,minigrad_ops=warn` | Tracing filter used when `RUST_LOG` is unset |
//!
//! Command-line flags override the environment.

use std::env;
use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::error::{CliError, CliResult};

static DOTENV_INIT: Lazy<()> = Lazy::new(|| {
    let _ = dotenv::dotenv();
});

#[inline]
fn ensure_loaded() {
    let _ = &*DOTENV_INIT;
}

/// Largest precision that still changes an `f64`'s printed digits
pub const MAX_PRECISION: usize = 17;

/// How results are written to stdout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Plain,
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Plain => f.write_str("plain"),
            OutputFormat::Json => f.write_str("json"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = CliError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "plain" | "text" => Ok(OutputFormat::Plain),
            "json" => Ok(OutputFormat::Json),
            other => Err(CliError::InvalidConfig(format!(
                "unknown output format '{}' (expected plain or json)",
                other
            ))),
        }
    }
}

/// CLI configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CliConfig {
    pub format: OutputFormat,
    pub precision: usize,
    pub log_filter: String,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Plain,
            precision: 6,
            log_filter: "minigrad=warn,minigrad_ops=warn".to_string(),
        }
    }
}

impl CliConfig {
    /// Load from the process environment (and `.env`, if present)
    pub fn from_env() -> CliResult<Self> {
        ensure_loaded();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load using an arbitrary variable lookup
    ///
    /// Range checks are left to [`CliConfig::validate`], which runs after
    /// command-line overrides are applied.
    pub fn from_lookup<F>(lookup: F) -> CliResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(format) = lookup("MINIGRAD_FORMAT") {
            config.format = format.parse()?;
        }

        if let Some(precision) = lookup("MINIGRAD_PRECISION") {
            config.precision = precision.trim().parse().map_err(|_| {
                CliError::InvalidConfig(format!(
                    "MINIGRAD_PRECISION must be an integer, got '{}'",
                    precision
                ))
            })?;
        }

        if let Some(filter) = lookup("MINIGRAD_LOG") {
            if !filter.trim().is_empty() {
                config.log_filter = filter;
            }
        }

        Ok(config)
    }

    /// Apply command-line overrides
    pub fn with_overrides(mut self, format: Option<OutputFormat>, precision: Option<usize>) -> Self {
        if let Some(format) = format {
            self.format = format;
        }
        if let Some(precision) = precision {
            self.precision = precision;
        }
        self
    }

    pub fn validate(&self) -> CliResult<()> {
        if self.precision > MAX_PRECISION {
            return Err(CliError::InvalidConfig(format!(
                "precision must be between 0 and {}, got {}",
                MAX_PRECISION, self.precision
            )));
        }
        Ok(())
    }
}
