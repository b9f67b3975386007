//! Parsing of flat execution option strings (`opt1:val1;opt2:val2`).

use crate::error::{HarnessError, Result};
use std::collections::HashMap;

/// Casing rule applied to option names before they are stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionCase {
    /// Keys are upper-cased (ImpalaService query options).
    Upper,
    /// Keys are lower-cased (HiveService query options).
    Lower,
    /// Keys are stored as written.
    Preserve,
}

impl OptionCase {
    /// Applies the casing rule to an option name.
    pub fn apply(&self, key: &str) -> String {
        match self {
            Self::Upper => key.to_uppercase(),
            Self::Lower => key.to_lowercase(),
            Self::Preserve => key.to_string(),
        }
    }
}

/// Parses an options string into a map with normalized keys.
///
/// Options are separated by `;`, names and values by `:`. Every segment
/// must contain exactly one `:` and a non-empty name. Values are kept
/// verbatim; no whitespace is trimmed and no escaping is recognized.
pub fn parse_exec_options(input: &str, case: OptionCase) -> Result<HashMap<String, String>> {
    let mut options = HashMap::new();
    if input.is_empty() {
        return Ok(options);
    }

    for segment in input.split(';') {
        let parts: Vec<&str> = segment.split(':').collect();
        if parts.len() != 2 {
            return Err(HarnessError::malformed_options(format!(
                "'{segment}' in \"{input}\". Expected key:value"
            )));
        }
        if parts[0].is_empty() {
            return Err(HarnessError::malformed_options(format!(
                "'{segment}' in \"{input}\" has an empty option name"
            )));
        }
        options.insert(case.apply(parts[0]), parts[1].to_string());
    }

    Ok(options)
}
