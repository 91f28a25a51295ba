//! Persist stage: serialize a record set to a local CSV file.

use crate::error::{EtlError, Result};
use pulse_common::types::{LocalArtifact, Record};
use std::path::PathBuf;
use tracing::info;

/// Fixed header row; column order never changes.
const CSV_HEADER: [&str; 3] = ["id", "value", "timestamp"];

/// Writes record sets beneath a configured local directory.
pub struct CsvWriter {
    local_folder: PathBuf,
}

impl CsvWriter {
    pub fn new(local_folder: impl Into<PathBuf>) -> Self {
        Self {
            local_folder: local_folder.into(),
        }
    }

    /// Write `records` to `<local_folder>/<filename>`.
    ///
    /// The directory is created if absent (safe to call repeatedly); a
    /// pre-existing file at the path is overwritten, not appended to.
    /// The file handle is flushed and released on every exit path.
    pub fn write(&self, records: &[Record], filename: &str) -> Result<LocalArtifact> {
        std::fs::create_dir_all(&self.local_folder).map_err(|e| {
            EtlError::write(format!(
                "cannot create {}: {}",
                self.local_folder.display(),
                e
            ))
        })?;

        let path = self.local_folder.join(filename);
        info!("Writing {} records to {}", records.len(), path.display());

        let mut writer = csv::Writer::from_path(&path)
            .map_err(|e| EtlError::write(format!("cannot open {}: {}", path.display(), e)))?;

        writer
            .write_record(CSV_HEADER)
            .map_err(|e| EtlError::write(format!("cannot write header: {}", e)))?;

        for record in records {
            writer
                .write_record([&record.id, &record.value, &record.timestamp])
                .map_err(|e| EtlError::write(format!("cannot write record: {}", e)))?;
        }

        writer
            .flush()
            .map_err(|e| EtlError::write(format!("cannot flush {}: {}", path.display(), e)))?;

        info!("Data saved locally at {}", path.display());
        Ok(LocalArtifact::new(path, filename))
    }
}
