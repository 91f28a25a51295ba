//! Orchestration: the four stages run strictly in order; the first
//! failure ends the run.
//!
//! There is no partial success. Artifacts written before a failure stay
//! on disk (no rollback), and later stages are never invoked once a
//! stage has failed.

use crate::config::PipelineConfig;
use crate::error::{EtlError, Result};
use crate::fetch::Fetcher;
use crate::store::ObjectStore;
use crate::transform;
use crate::writer::CsvWriter;
use chrono::{DateTime, Local};
use pulse_common::types::RemoteObjectRef;
use tracing::info;

/// Key prefix for uploaded artifacts.
const REMOTE_PREFIX: &str = "data";

/// One pipeline instance: configuration plus the stage components built
/// from it.
pub struct Pipeline {
    config: PipelineConfig,
    fetcher: Fetcher,
    writer: CsvWriter,
    store: ObjectStore,
}

impl Pipeline {
    pub fn new(config: PipelineConfig) -> Self {
        let fetcher = Fetcher::new(config.endpoint_url.as_str(), config.api_token.as_str());
        let writer = CsvWriter::new(&config.local_folder);
        let store = ObjectStore::new(&config.store);

        Self {
            config,
            fetcher,
            writer,
            store,
        }
    }

    /// Run fetch → transform → write → upload once.
    ///
    /// Returns where the artifact landed, or the first stage failure.
    /// An empty record set counts as a transform failure: the run halts
    /// rather than persist a header-only file.
    pub async fn run(&self) -> Result<RemoteObjectRef> {
        info!("Starting pipeline run");

        let payload = self.fetcher.fetch().await?;

        let records = transform::transform(&payload, &self.config.results_key)?;
        if records.is_empty() {
            return Err(EtlError::transform(
                "source returned no records, nothing to persist",
            ));
        }

        let filename = artifact_filename(&run_stamp(Local::now()));
        let artifact = self.writer.write(&records, &filename)?;

        // The key is derived from the filename actually written, never
        // from a second timestamp, so the two names cannot drift.
        let key = remote_key(&artifact.file_name);
        let object = self.store.upload(&artifact, &key).await?;

        info!("Pipeline run completed successfully");
        Ok(object)
    }
}

/// Timestamp component of artifact names, local time.
fn run_stamp(now: DateTime<Local>) -> String {
    now.format("%Y-%m-%d_%H-%M-%S").to_string()
}

/// Local filename for one run's artifact.
fn artifact_filename(stamp: &str) -> String {
    format!("transformed_data_{}.csv", stamp)
}

/// Remote key for an artifact filename.
fn remote_key(file_name: &str) -> String {
    format!("{}/{}", REMOTE_PREFIX, file_name)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_run_stamp_format() {
        let at = Local.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap();
        assert_eq!(run_stamp(at), "2024-01-02_03-04-05");
    }

    #[test]
    fn test_artifact_filename() {
        assert_eq!(
            artifact_filename("2024-01-02_03-04-05"),
            "transformed_data_2024-01-02_03-04-05.csv"
        );
    }

    #[test]
    fn test_remote_key_derives_from_filename() {
        assert_eq!(
            remote_key("transformed_data_2024-01-02_03-04-05.csv"),
            "data/transformed_data_2024-01-02_03-04-05.csv"
        );
    }
}
