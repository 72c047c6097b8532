// src/config.rs

use serde::Deserialize;
use std::path::PathBuf;

/// CSV file read from the current working directory.
pub const DEFAULT_SOURCE_FILE: &str = "test-cases.csv";
/// JSON file written to the current working directory.
pub const DEFAULT_DESTINATION_FILE: &str = "test-cases.json";
/// Spaces per nesting level in the pretty-printed output.
pub const DEFAULT_INDENT: usize = 4;

/// Where to read, where to write, and how to lay out the JSON.
///
/// The binary always runs with `ConverterConfig::default()`; tests and
/// harnesses build their own.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ConverterConfig {
    pub source: PathBuf,
    pub destination: PathBuf,
    pub indent: usize,
}

impl ConverterConfig {
    pub fn new(source: impl Into<PathBuf>, destination: impl Into<PathBuf>) -> Self {
        Self {
            source: source.into(),
            destination: destination.into(),
            indent: DEFAULT_INDENT,
        }
    }

    pub fn with_indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }
}

impl Default for ConverterConfig {
    fn default() -> Self {
        Self::new(DEFAULT_SOURCE_FILE, DEFAULT_DESTINATION_FILE)
    }
}
