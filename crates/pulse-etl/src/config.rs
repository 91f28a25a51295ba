//! Pipeline configuration.
//!
//! Explicit structs injected into each component at construction time,
//! so components are testable with injected values instead of
//! process-wide state.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::PathBuf;

// ============================================================================
// Configuration Constants
// ============================================================================

/// Default key under which the source payload carries its item array.
/// The source schema is a placeholder contract, so the key stays
/// configurable; the three-field record shape is the stable part.
pub const DEFAULT_RESULTS_KEY: &str = "results";

/// Default local directory for written artifacts.
pub const DEFAULT_LOCAL_FOLDER: &str = "./data";

/// Object store connection settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Custom endpoint for S3-compatible stores (MinIO etc.); `None`
    /// means AWS proper.
    pub endpoint: Option<String>,
    pub region: String,
    pub bucket: String,
    pub access_key: String,
    pub secret_key: String,
    /// Path-style addressing, required by most non-AWS stores.
    pub path_style: bool,
}

impl StoreConfig {
    /// Load store settings from the environment.
    ///
    /// Reads `S3_ENDPOINT`, `S3_REGION`, `S3_BUCKET`, `S3_ACCESS_KEY` /
    /// `AWS_ACCESS_KEY_ID`, `S3_SECRET_KEY` / `AWS_SECRET_ACCESS_KEY`,
    /// and `S3_PATH_STYLE`.
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            endpoint: env::var("S3_ENDPOINT").ok(),
            region: env::var("S3_REGION").unwrap_or_else(|_| "us-east-1".to_string()),
            bucket: env::var("S3_BUCKET").unwrap_or_else(|_| "pulse-data".to_string()),
            access_key: env::var("S3_ACCESS_KEY")
                .or_else(|_| env::var("AWS_ACCESS_KEY_ID"))
                .context("S3_ACCESS_KEY or AWS_ACCESS_KEY_ID must be set")?,
            secret_key: env::var("S3_SECRET_KEY")
                .or_else(|_| env::var("AWS_SECRET_ACCESS_KEY"))
                .context("S3_SECRET_KEY or AWS_SECRET_ACCESS_KEY must be set")?,
            path_style: env::var("S3_PATH_STYLE")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(false),
        })
    }
}

/// Everything one pipeline run needs, assembled once and handed to
/// [`crate::pipeline::Pipeline::new`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// Source API endpoint, fetched with a single GET.
    pub endpoint_url: String,

    /// Bearer token sent on the fetch request.
    pub api_token: String,

    /// Key under which the payload carries its item array.
    pub results_key: String,

    /// Local directory for written artifacts, created if absent.
    pub local_folder: PathBuf,

    /// Object store destination.
    pub store: StoreConfig,
}

impl PipelineConfig {
    /// Load pipeline settings from the environment.
    ///
    /// `PULSE_API_URL` and `PULSE_API_TOKEN` are required;
    /// `PULSE_RESULTS_KEY` and `PULSE_LOCAL_FOLDER` fall back to
    /// defaults. Store settings come from [`StoreConfig::from_env`].
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            endpoint_url: env::var("PULSE_API_URL").context("PULSE_API_URL must be set")?,
            api_token: env::var("PULSE_API_TOKEN").context("PULSE_API_TOKEN must be set")?,
            results_key: env::var("PULSE_RESULTS_KEY")
                .unwrap_or_else(|_| DEFAULT_RESULTS_KEY.to_string()),
            local_folder: env::var("PULSE_LOCAL_FOLDER")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(DEFAULT_LOCAL_FOLDER)),
            store: StoreConfig::from_env()?,
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_pipeline_config_from_env() {
        std::env::set_var("PULSE_API_URL", "https://api.example.com/data");
        std::env::set_var("PULSE_API_TOKEN", "test-token");
        std::env::set_var("S3_ACCESS_KEY", "test-access");
        std::env::set_var("S3_SECRET_KEY", "test-secret");
        std::env::set_var("S3_BUCKET", "test-bucket");

        let config = PipelineConfig::from_env().unwrap();
        assert_eq!(config.endpoint_url, "https://api.example.com/data");
        assert_eq!(config.api_token, "test-token");
        assert_eq!(config.results_key, DEFAULT_RESULTS_KEY);
        assert_eq!(config.local_folder, PathBuf::from(DEFAULT_LOCAL_FOLDER));
        assert_eq!(config.store.bucket, "test-bucket");
        assert!(!config.store.path_style);
    }
}
