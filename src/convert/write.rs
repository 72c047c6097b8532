// src/convert/write.rs

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use std::{fs, io, path::Path};
use tracing::{debug, instrument};

use crate::record::Dataset;

/// Render the records as a pretty-printed JSON array, `indent` spaces per
/// level, with a trailing newline.
pub fn to_json(dataset: &Dataset, indent: usize) -> Result<Vec<u8>, serde_json::Error> {
    let indent = vec![b' '; indent];
    let mut buf = Vec::new();
    let mut ser = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(&indent));
    dataset.records().serialize(&mut ser)?;
    buf.push(b'\n');
    Ok(buf)
}

/// Create or truncate `path` and write `contents` in a single call.
/// No temp file and no rename: a failed write may leave a partial file behind.
#[instrument(level = "debug", skip(contents), fields(path = %path.display(), bytes = contents.len()))]
pub fn write_json(path: &Path, contents: &[u8]) -> io::Result<()> {
    fs::write(path, contents)?;
    debug!("destination written");
    Ok(())
}
