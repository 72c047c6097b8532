// src/convert/mod.rs
pub mod read;
pub mod write;

use std::{path::PathBuf, time::Instant};
use tracing::{info, warn};

use crate::config::ConverterConfig;
use crate::error::ConversionError;

/// What a successful run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    pub destination: PathBuf,
    pub records: usize,
    pub columns: Vec<String>,
}

impl Summary {
    pub fn operator_message(&self) -> String {
        format!(
            "✅ JSON file '{}' created successfully!",
            self.destination.display()
        )
    }
}

/// Convert `config.source` (CSV, header row first) into a JSON array of
/// objects at `config.destination`.
///
/// Steps, in order, each one gating the next:
/// 1. read + parse the whole source
/// 2. reject a source with no data rows
/// 3. serialize in memory
/// 4. overwrite the destination in one write
///
/// Nothing touches the destination unless steps 1–3 succeed.
#[tracing::instrument(
    level = "info",
    skip(config),
    fields(source = %config.source.display(), destination = %config.destination.display())
)]
pub fn convert(config: &ConverterConfig) -> Result<Summary, ConversionError> {
    let start = Instant::now();

    // ─── 1) parse ────────────────────────────────────────────────────
    let dataset = read::read_dataset(&config.source)?;

    // ─── 2) validate ─────────────────────────────────────────────────
    if dataset.is_empty() {
        warn!("no data rows; nothing written");
        return Err(ConversionError::EmptyInput {
            path: config.source.clone(),
        });
    }
    info!(
        records = dataset.len(),
        columns = dataset.columns().len(),
        "parsed source"
    );

    // ─── 3) serialize ────────────────────────────────────────────────
    let json = write::to_json(&dataset, config.indent)
        .map_err(|source| ConversionError::Serialize { source })?;

    // ─── 4) write ────────────────────────────────────────────────────
    write::write_json(&config.destination, &json).map_err(|source| {
        ConversionError::DestinationWrite {
            path: config.destination.clone(),
            source,
        }
    })?;

    info!(bytes = json.len(), elapsed = ?start.elapsed(), "conversion done");
    Ok(Summary {
        destination: config.destination.clone(),
        records: dataset.len(),
        columns: dataset.columns().to_vec(),
    })
}
