// src/error.rs

use std::{io, path::PathBuf};
use thiserror::Error;

/// Everything that can stop a conversion run.
#[derive(Debug, Error)]
pub enum ConversionError {
    #[error("source file {} was not found", .path.display())]
    SourceNotFound {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("source file {} contains no data rows", .path.display())]
    EmptyInput { path: PathBuf },

    #[error("reading {}: {source}", .path.display())]
    SourceRead {
        path: PathBuf,
        #[source]
        source: ReadFault,
    },

    #[error("serializing records to JSON: {source}")]
    Serialize {
        #[source]
        source: serde_json::Error,
    },

    #[error("writing {}: {source}", .path.display())]
    DestinationWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Why the source could not be turned into records.
#[derive(Debug, Error)]
pub enum ReadFault {
    #[error(transparent)]
    Io(#[from] io::Error),

    #[error(transparent)]
    Csv(#[from] csv::Error),

    #[error("line {line}: row has {found} fields but the header has {expected}")]
    TooManyFields {
        line: u64,
        expected: usize,
        found: usize,
    },
}

impl ConversionError {
    /// The one-line message shown to whoever ran the tool.
    pub fn operator_message(&self) -> String {
        match self {
            Self::SourceNotFound { path, .. } => format!(
                "❌ Error: The file '{}' was not found. Make sure it exists in the same directory.",
                path.display()
            ),
            Self::EmptyInput { .. } => {
                "❌ Error: The CSV file is empty. Please provide valid data.".to_string()
            }
            Self::SourceRead { source, .. } => {
                format!("❌ Error reading the CSV file: {}", source)
            }
            Self::Serialize { source } => format!("❌ Error writing the JSON file: {}", source),
            Self::DestinationWrite { source, .. } => {
                format!("❌ Error writing the JSON file: {}", source)
            }
        }
    }
}
