//! Pulse Common Library
//!
//! Shared types and infrastructure for the Pulse workspace:
//!
//! - **Types**: the domain types handed between pipeline stages
//! - **Logging**: tracing subscriber setup shared by all binaries
//!
//! # Example
//!
//! ```no_run
//! use pulse_common::logging::{init_logging, LogConfig};
//!
//! fn main() -> anyhow::Result<()> {
//!     let config = LogConfig::from_env()?;
//!     init_logging(&config)?;
//!     Ok(())
//! }
//! ```

pub mod logging;
pub mod types;

pub use types::{LocalArtifact, Record, RecordSet, RemoteObjectRef};
