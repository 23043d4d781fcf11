use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};

use crate::engine::{ChartPayload, ChartRequest};

pub fn load_request(path: &Path) -> Result<ChartRequest> {
    let file = File::open(path).context(format!("Failed to open request file: {:?}", path))?;
    let reader = BufReader::new(file);
    let request = serde_json::from_reader(reader)
        .context(format!("Failed to parse chart request: {:?}", path))?;
    Ok(request)
}

/// Serialize `payload` as JSON into any writer (stdout for the CLI).
pub fn write_payload<W: Write>(writer: W, payload: &ChartPayload, pretty: bool) -> Result<()> {
    let written = if pretty {
        serde_json::to_writer_pretty(writer, payload)
    } else {
        serde_json::to_writer(writer, payload)
    };
    written.context("Failed to serialize chart payload")
}

pub fn save_payload(path: &Path, payload: &ChartPayload, pretty: bool) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .context(format!("Failed to create directory: {}", parent.display()))?;
    }
    let file = File::create(path).context(format!("Failed to create file: {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    write_payload(&mut writer, payload, pretty)?;
    writer
        .flush()
        .context(format!("Failed to flush payload to: {}", path.display()))
}
