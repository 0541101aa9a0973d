//! Local file system storage backend implementation.

use async_trait::async_trait;
use std::io;
use std::path::{Component, Path, PathBuf};
use tokio::fs;

use crate::config::LocalConfig;
use crate::error::Operation;
use crate::{ObjectContent, ObjectStorage, Result, StorageError};

/// Local file system storage backend.
///
/// Keys are relative paths below the base directory. Content types are not
/// persisted; reads infer them from the key's extension.
#[derive(Debug, Clone)]
pub struct LocalStorage {
	base_path: PathBuf,
}

impl LocalStorage {
	/// Create a new local storage backend.
	///
	/// # Arguments
	///
	/// * `config` - Local storage configuration
	///
	/// # Errors
	///
	/// Returns `` `StorageError::ConfigError` `` if the base path is invalid.
	pub fn new(config: LocalConfig) -> Result<Self> {
		let base_path = PathBuf::from(config.base_path);

		if !base_path.exists() {
			return Err(StorageError::ConfigError(format!(
				"Base path does not exist: {}",
				base_path.display()
			)));
		}

		if !base_path.is_dir() {
			return Err(StorageError::ConfigError(format!(
				"Base path is not a directory: {}",
				base_path.display()
			)));
		}

		Ok(Self { base_path })
	}

	/// Base directory objects are stored under.
	pub fn base_path(&self) -> &Path {
		&self.base_path
	}

	/// Map a key onto a path below the base directory.
	fn get_path(&self, key: &str) -> Result<PathBuf> {
		let relative = Path::new(key);
		let is_safe = !key.is_empty()
			&& relative
				.components()
				.all(|component| matches!(component, Component::Normal(_)));

		if !is_safe {
			tracing::warn!(key, "Rejected object key outside the base directory");
			return Err(StorageError::InvalidKey(key.to_string()));
		}

		Ok(self.base_path.join(relative))
	}
}

async fn is_directory(path: &Path) -> bool {
	fs::metadata(path)
		.await
		.map(|metadata| metadata.is_dir())
		.unwrap_or(false)
}

#[async_trait]
impl ObjectStorage for LocalStorage {
	async fn get_item(&self, key: &str) -> Result<ObjectContent> {
		let path = self.get_path(key)?;

		let data = match fs::read(&path).await {
			Ok(data) => data,
			Err(e) if e.kind() == io::ErrorKind::NotFound => {
				return Err(StorageError::NotFound(key.to_string()));
			}
			Err(e) => {
				// Directories are not objects
				if is_directory(&path).await {
					return Err(StorageError::NotFound(key.to_string()));
				}
				return Err(StorageError::backend(Operation::GetItem, key, e));
			}
		};

		tracing::debug!(key, path = %path.display(), size = data.len(), "Read object file");

		let content = ObjectContent::new(data);
		Ok(match mime_guess::from_path(&path).first() {
			Some(mime) => content.with_content_type(mime.essence_str()),
			None => content,
		})
	}

	async fn set_item(&self, key: &str, content: ObjectContent) -> Result<()> {
		let path = self.get_path(key)?;

		// Create parent directories if they don't exist
		if let Some(parent) = path.parent() {
			fs::create_dir_all(parent)
				.await
				.map_err(|e| StorageError::backend(Operation::SetItem, key, e))?;
		}

		fs::write(&path, content.data())
			.await
			.map_err(|e| StorageError::backend(Operation::SetItem, key, e))?;

		tracing::debug!(key, path = %path.display(), size = content.size(), "Wrote object file");
		Ok(())
	}

	async fn remove_item(&self, key: &str) -> Result<()> {
		let path = self.get_path(key)?;

		match fs::remove_file(&path).await {
			Ok(()) => {
				tracing::debug!(key, path = %path.display(), "Removed object file");
				Ok(())
			}
			Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
			Err(e) => {
				if is_directory(&path).await {
					return Ok(());
				}
				Err(StorageError::backend(Operation::RemoveItem, key, e))
			}
		}
	}

	async fn get_temp_url(&self, key: &str) -> Result<String> {
		let path = self.get_path(key)?;

		// Canonicalize the base only: the object itself may not exist yet
		let base = self
			.base_path
			.canonicalize()
			.map_err(|e| StorageError::backend(Operation::GetTempUrl, key, e))?;
		let relative = path.strip_prefix(&self.base_path).unwrap_or(&path);

		Ok(format!("file://{}", base.join(relative).display()))
	}
}
