//! Error taxonomy for the pipeline.
//!
//! One coarse variant per stage, no transient/permanent
//! sub-classification. Every stage converts its internal errors
//! (transport, parsing, filesystem, SDK) into its own variant before
//! they cross the stage boundary, so the orchestrator's handling is
//! exhaustive and typed.

use thiserror::Error;

/// Result type alias for pipeline operations
pub type Result<T> = std::result::Result<T, EtlError>;

/// Stage-tagged failure for one pipeline run.
#[derive(Error, Debug)]
pub enum EtlError {
    /// Fetch stage failed: non-success status, network error, or an
    /// unparseable response body.
    #[error("fetch failed: {0}")]
    Fetch(String),

    /// Transform stage failed: missing expected key, an item missing a
    /// required field, or any other structural mismatch.
    #[error("transform failed: {0}")]
    Transform(String),

    /// Write stage failed: filesystem error while persisting the CSV.
    #[error("write failed: {0}")]
    Write(String),

    /// Upload stage failed: authentication, missing bucket, or transfer
    /// error.
    #[error("upload failed: {0}")]
    Upload(String),
}

impl EtlError {
    /// Create a fetch-stage error
    pub fn fetch(msg: impl Into<String>) -> Self {
        Self::Fetch(msg.into())
    }

    /// Create a transform-stage error
    pub fn transform(msg: impl Into<String>) -> Self {
        Self::Transform(msg.into())
    }

    /// Create a write-stage error
    pub fn write(msg: impl Into<String>) -> Self {
        Self::Write(msg.into())
    }

    /// Create an upload-stage error
    pub fn upload(msg: impl Into<String>) -> Self {
        Self::Upload(msg.into())
    }

    /// Name of the stage that produced this error, for diagnostics.
    pub fn stage(&self) -> &'static str {
        match self {
            EtlError::Fetch(_) => "fetch",
            EtlError::Transform(_) => "transform",
            EtlError::Write(_) => "write",
            EtlError::Upload(_) => "upload",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stage_names() {
        assert_eq!(EtlError::fetch("boom").stage(), "fetch");
        assert_eq!(EtlError::transform("boom").stage(), "transform");
        assert_eq!(EtlError::write("boom").stage(), "write");
        assert_eq!(EtlError::upload("boom").stage(), "upload");
    }

    #[test]
    fn test_error_display_names_stage() {
        let err = EtlError::fetch("status 500");
        assert_eq!(err.to_string(), "fetch failed: status 500");
    }
}
