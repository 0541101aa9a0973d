//! Storage port definition.

use crate::{ObjectContent, Result};
use async_trait::async_trait;

/// Default lifetime of a temporary access URL, in seconds.
pub const DEFAULT_URL_EXPIRY_SECS: u64 = 3600;

/// Capability interface implemented by every object storage backend.
///
/// Keys are flat identifiers scoped to the backend's bucket or directory.
/// A key names at most one object; writing a key replaces its content.
///
/// # Examples
///
/// ```rust,no_run
/// use stowage_storages::{ObjectContent, ObjectStorage, Result};
///
/// async fn example(storage: &dyn ObjectStorage) -> Result<()> {
///     storage
///         .set_item("greeting.txt", ObjectContent::from("Hello").with_content_type("text/plain"))
///         .await?;
///
///     let content = storage.get_item("greeting.txt").await?;
///     println!("{} bytes", content.size());
///
///     let url = storage.get_temp_url("greeting.txt").await?;
///     println!("share: {}", url);
///
///     storage.remove_item("greeting.txt").await
/// }
/// ```
#[async_trait]
pub trait ObjectStorage: Send + Sync {
	/// Read the full content stored under `key`.
	///
	/// # Errors
	///
	/// Returns `` `StorageError::NotFound` `` if no object exists under the key.
	/// Returns `` `StorageError::Backend` `` on any transport or authentication failure.
	async fn get_item(&self, key: &str) -> Result<ObjectContent>;

	/// Store `content` under `key`, replacing any previous content.
	///
	/// # Errors
	///
	/// Returns `` `StorageError::Backend` `` if the backend rejects the write.
	async fn set_item(&self, key: &str, content: ObjectContent) -> Result<()>;

	/// Remove the object stored under `key`.
	///
	/// Whether removing an absent key is an error is up to the backend; the
	/// bundled backends treat it as success.
	async fn remove_item(&self, key: &str) -> Result<()>;

	/// Issue a temporary URL granting read access to `key`.
	///
	/// The key is not checked for existence.
	async fn get_temp_url(&self, key: &str) -> Result<String>;
}
