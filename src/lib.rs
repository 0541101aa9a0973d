//! # Stowage
//!
//! A minimal object storage abstraction for Rust.
//!
//! Stowage exposes one storage port with four operations (read, write,
//! delete and temporary URL issuance) and ships backends for Amazon S3 and
//! S3-compatible services, the local file system and process memory.
//!
//! ## Feature Flags
//!
//! - `full` (default) - All backends
//! - `s3` - Amazon S3 / LocalStack / MinIO backend
//! - `local` - Local file system backend
//!
//! The in-memory backend is always available.
//!
//! ## Quick Example
//!
//! ```rust,no_run
//! use stowage::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let storage = create_storage(StorageConfig::from_env()?).await?;
//!
//!     SetItem::new(storage.clone())
//!         .execute("hello.txt", ObjectContent::from("Hello").with_content_type("text/plain"))
//!         .await?;
//!
//!     let url = GetTempUrl::new(storage).execute("hello.txt").await?;
//!     println!("{}", url);
//!     Ok(())
//! }
//! ```

pub mod storages;

pub use stowage_storages::{
	BackendType, GetItem, GetTempUrl, MemoryConfig, MemoryStorage, ObjectContent, ObjectStorage,
	Operation, RemoveItem, Result, SetItem, StorageConfig, StorageError, StorageWorkflow,
	WorkflowReport, create_storage,
};

#[cfg(feature = "local")]
pub use stowage_storages::{LocalConfig, LocalStorage};

#[cfg(feature = "s3")]
pub use stowage_storages::{S3Config, S3Storage};

/// Commonly used types.
pub mod prelude {
	pub use crate::{
		GetItem, GetTempUrl, ObjectContent, ObjectStorage, RemoveItem, SetItem, StorageConfig,
		StorageError, StorageWorkflow, create_storage,
	};

	// External
	pub use async_trait::async_trait;
}
