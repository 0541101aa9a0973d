//! Factory function for creating storage backends.

use crate::backends::MemoryStorage;
use crate::{ObjectStorage, Result, StorageConfig};
use std::sync::Arc;

/// Create a storage backend from configuration.
///
/// # Arguments
///
/// * `config` - Storage configuration
///
/// # Returns
///
/// A shared trait object implementing `` `ObjectStorage` ``.
///
/// # Examples
///
/// ```rust,no_run
/// use stowage_storages::{create_storage, StorageConfig};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let config = StorageConfig::from_env()?;
///     let storage = create_storage(config).await?;
///     Ok(())
/// }
/// ```
pub async fn create_storage(config: StorageConfig) -> Result<Arc<dyn ObjectStorage>> {
	tracing::debug!(backend = %config.backend_type(), "Creating storage backend");

	match config {
		#[cfg(feature = "s3")]
		StorageConfig::S3(s3_config) => {
			let storage = crate::backends::s3::S3Storage::new(s3_config).await?;
			Ok(Arc::new(storage))
		}
		#[cfg(feature = "local")]
		StorageConfig::Local(local_config) => {
			let storage = crate::backends::local::LocalStorage::new(local_config)?;
			Ok(Arc::new(storage))
		}
		StorageConfig::Memory(memory_config) => Ok(Arc::new(MemoryStorage::new(memory_config))),
	}
}
