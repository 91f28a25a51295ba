//! Domain types handed between the pipeline stages.
//!
//! Each type belongs to exactly one producing stage: the transformer
//! builds [`Record`]s, the local writer builds a [`LocalArtifact`], the
//! uploader builds a [`RemoteObjectRef`]. None of them is mutated after
//! creation.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// One normalized row extracted from the source payload.
///
/// All three fields are required; the transformer fails the run rather
/// than produce a record with a missing field. Values are kept in their
/// textual form so the CSV output matches the source rendering exactly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// Opaque identifier, taken verbatim from the source.
    pub id: String,
    /// Scalar measurement, rendered as the source serialized it.
    pub value: String,
    /// Point-in-time marker in whatever format the source uses.
    pub timestamp: String,
}

impl Record {
    pub fn new(
        id: impl Into<String>,
        value: impl Into<String>,
        timestamp: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            value: value.into(),
            timestamp: timestamp.into(),
        }
    }
}

/// Ordered sequence of records; iteration order follows the source
/// payload's order.
pub type RecordSet = Vec<Record>;

/// A CSV file written by the local writer.
///
/// The filename is carried separately from the full path so the uploader
/// can derive the remote key from the name that was actually written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalArtifact {
    /// Full path of the written file.
    pub path: PathBuf,
    /// Filename component only, e.g. `transformed_data_<stamp>.csv`.
    pub file_name: String,
}

impl LocalArtifact {
    pub fn new(path: impl Into<PathBuf>, file_name: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            file_name: file_name.into(),
        }
    }
}

/// Destination of an uploaded artifact: a (bucket, key) pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteObjectRef {
    pub bucket: String,
    pub key: String,
}

impl std::fmt::Display for RemoteObjectRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "s3://{}/{}", self.bucket, self.key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_new() {
        let record = Record::new("1", "10.5", "2024-01-01T00:00:00");
        assert_eq!(record.id, "1");
        assert_eq!(record.value, "10.5");
        assert_eq!(record.timestamp, "2024-01-01T00:00:00");
    }

    #[test]
    fn test_remote_object_ref_display() {
        let object = RemoteObjectRef {
            bucket: "pulse-data".to_string(),
            key: "data/transformed_data_2024-01-01_00-00-00.csv".to_string(),
        };
        assert_eq!(
            object.to_string(),
            "s3://pulse-data/data/transformed_data_2024-01-01_00-00-00.csv"
        );
    }

    #[test]
    fn test_local_artifact_keeps_filename() {
        let artifact = LocalArtifact::new("/tmp/out/report.csv", "report.csv");
        assert_eq!(artifact.path, PathBuf::from("/tmp/out/report.csv"));
        assert_eq!(artifact.file_name, "report.csv");
    }
}
