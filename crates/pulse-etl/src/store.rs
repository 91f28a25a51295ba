//! Upload stage: single-shot copy of the local artifact to object
//! storage.

use crate::config::StoreConfig;
use crate::error::{EtlError, Result};
use aws_sdk_s3::{
    config::{Credentials, Region},
    primitives::ByteStream,
    Client,
};
use pulse_common::types::{LocalArtifact, RemoteObjectRef};
use tracing::{debug, info};

/// S3-compatible object store client bound to one bucket.
pub struct ObjectStore {
    client: Client,
    bucket: String,
}

impl ObjectStore {
    pub fn new(config: &StoreConfig) -> Self {
        debug!("Initializing object store for bucket {}", config.bucket);

        let credentials = Credentials::new(
            &config.access_key,
            &config.secret_key,
            None,
            None,
            "pulse-store",
        );

        let mut builder = aws_sdk_s3::Config::builder()
            .credentials_provider(credentials)
            .region(Region::new(config.region.clone()))
            .force_path_style(config.path_style);

        if let Some(endpoint) = &config.endpoint {
            builder = builder.endpoint_url(endpoint);
        }

        let client = Client::from_conf(builder.build());

        Self {
            client,
            bucket: config.bucket.clone(),
        }
    }

    /// Upload the artifact's bytes to `key` in one PutObject call.
    ///
    /// The bytes are transferred unchanged and no integrity check is
    /// performed afterwards. Nothing is retried, and the artifact stays
    /// on disk whatever the outcome. Authentication failures, a missing
    /// bucket, and transfer errors all collapse into the upload failure.
    pub async fn upload(&self, artifact: &LocalArtifact, key: &str) -> Result<RemoteObjectRef> {
        info!(
            "Uploading {} to s3://{}/{}",
            artifact.path.display(),
            self.bucket,
            key
        );

        let body = ByteStream::from_path(&artifact.path).await.map_err(|e| {
            EtlError::upload(format!("cannot read {}: {}", artifact.path.display(), e))
        })?;

        self.client
            .put_object()
            .bucket(&self.bucket)
            .key(key)
            .content_type("text/csv")
            .body(body)
            .send()
            .await
            .map_err(|e| {
                EtlError::upload(format!(
                    "put_object to s3://{}/{} failed: {}",
                    self.bucket, key, e
                ))
            })?;

        info!("File uploaded successfully to s3://{}/{}", self.bucket, key);

        Ok(RemoteObjectRef {
            bucket: self.bucket.clone(),
            key: key.to_string(),
        })
    }
}
