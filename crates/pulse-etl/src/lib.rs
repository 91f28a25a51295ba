//! Pulse ETL Library
//!
//! One linear run: fetch JSON from a remote API, flatten it into
//! records, persist them as a local CSV, upload the file to object
//! storage. Stages run strictly in order and the first failure ends the
//! run; nothing is retried and nothing is rolled back.
//!
//! # Example
//!
//! ```no_run
//! use pulse_etl::{config::PipelineConfig, pipeline::Pipeline};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = PipelineConfig::from_env()?;
//!     let object = Pipeline::new(config).run().await?;
//!     println!("uploaded {}", object);
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
pub mod fetch;
pub mod pipeline;
pub mod store;
pub mod tip;
pub mod transform;
pub mod writer;

pub use error::{EtlError, Result};
