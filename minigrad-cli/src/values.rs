//! Parsing of number lists given on the command line

use crate::error::{CliError, CliResult};

/// Parse a comma- or whitespace-separated list such as `"1, 2.5,-3"`
///
/// An empty (or all-blank) string is an empty list.
pub fn parse_list(input: &str) -> CliResult<Vec<f64>> {
    input
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|item| !item.is_empty())
        .map(|item| {
            item.parse::<f64>().map_err(|e| CliError::InvalidList {
                input: input.to_string(),
                reason: format!("'{}': {}", item, e),
            })
        })
        .collect()
}
