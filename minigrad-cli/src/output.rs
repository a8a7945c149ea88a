//! Rendering of command results

use serde::Serialize;

use crate::config::{CliConfig, OutputFormat};

/// Result of one command
///
/// JSON output keeps full `f64` precision; non-finite values become `null`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Report {
    Scalar { op: String, value: f64 },
    List { op: String, values: Vec<f64> },
    Operators { unary: Vec<String>, binary: Vec<String> },
}

impl Report {
    pub fn scalar(op: impl Into<String>, value: f64) -> Self {
        Report::Scalar { op: op.into(), value }
    }

    pub fn list(op: impl Into<String>, values: Vec<f64>) -> Self {
        Report::List { op: op.into(), values }
    }

    pub fn render(&self, config: &CliConfig) -> serde_json::Result<String> {
        match config.format {
            OutputFormat::Plain => Ok(self.render_plain(config.precision)),
            OutputFormat::Json => serde_json::to_string(self),
        }
    }

    fn render_plain(&self, precision: usize) -> String {
        match self {
            Report::Scalar { value, .. } => format_number(*value, precision),
            Report::List { values, .. } => {
                let items: Vec<String> = values.iter().map(|v| format_number(*v, precision)).collect();
                format!("[{}]", items.join(", "))
            }
            Report::Operators { unary, binary } => {
                format!("unary:  {}\nbinary: {}", unary.join(", "), binary.join(", "))
            }
        }
    }
}

fn format_number(value: f64, precision: usize) -> String {
    if value.is_finite() {
        format!("{:.*}", precision, value)
    } else {
        // "inf", "-inf", "NaN"
        value.to_string()
    }
}
