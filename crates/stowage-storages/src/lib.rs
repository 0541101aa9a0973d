//! # stowage-storages
//!
//! Minimal object storage abstraction for Stowage.
//!
//! A single `` `ObjectStorage` `` port exposes four operations (read, write,
//! delete and temporary URL issuance) over a flat key namespace. Backends
//! implement the port for Amazon S3 (and S3-compatible services), the local
//! file system and process memory.
//!
//! ## Features
//!
//! - **Unified API**: One `` `ObjectStorage` `` trait for every backend
//! - **Async I/O**: All operations are asynchronous using Tokio
//! - **Feature Flags**: `s3` and `local` backends are optional; memory is always available
//! - **Presigned URLs**: Time-limited read URLs without exposing credentials
//!
//! ## Example
//!
//! ```rust,no_run
//! use stowage_storages::{ObjectContent, StorageConfig, StorageWorkflow, create_storage};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Load configuration from environment
//!     let config = StorageConfig::from_env()?;
//!
//!     // Create storage backend
//!     let storage = create_storage(config).await?;
//!
//!     // Run upload, share, download and delete
//!     let workflow = StorageWorkflow::new(storage);
//!     let report = workflow
//!         .complete_file_workflow("example.txt", ObjectContent::from("Hello, world!"))
//!         .await?;
//!     println!("{} bytes via {}", report.downloaded_size, report.download_url);
//!
//!     Ok(())
//! }
//! ```

pub mod backend;
pub mod backends;
pub mod config;
pub mod content;
pub mod error;
pub mod factory;
pub mod use_cases;
pub mod workflow;

pub use backend::{DEFAULT_URL_EXPIRY_SECS, ObjectStorage};
pub use backends::MemoryStorage;
#[cfg(feature = "local")]
pub use backends::LocalStorage;
#[cfg(feature = "s3")]
pub use backends::S3Storage;
pub use config::{BackendType, MemoryConfig, StorageConfig};
#[cfg(feature = "local")]
pub use config::LocalConfig;
#[cfg(feature = "s3")]
pub use config::S3Config;
pub use content::ObjectContent;
pub use error::{Operation, Result, StorageError};
pub use factory::create_storage;
pub use use_cases::{GetItem, GetTempUrl, RemoveItem, SetItem};
pub use workflow::{StorageWorkflow, WorkflowReport};
