//! In-memory storage backend implementation.

use async_trait::async_trait;
use chrono::Utc;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;

use crate::config::MemoryConfig;
use crate::{ObjectContent, ObjectStorage, Result, StorageError};

/// In-memory storage backend.
///
/// Objects live in a shared map for as long as any clone of the backend is
/// alive. Temporary URLs are unsigned and take the form
/// `{base_url}/{key}?expires={unix_seconds}`.
#[derive(Debug, Clone)]
pub struct MemoryStorage {
	config: MemoryConfig,
	objects: Arc<RwLock<HashMap<String, ObjectContent>>>,
}

impl MemoryStorage {
	/// Create a new, empty in-memory backend.
	pub fn new(config: MemoryConfig) -> Self {
		Self {
			config,
			objects: Arc::new(RwLock::new(HashMap::new())),
		}
	}

	/// Number of stored objects.
	pub fn len(&self) -> usize {
		self.objects.read().len()
	}

	/// Returns `true` when nothing is stored.
	pub fn is_empty(&self) -> bool {
		self.objects.read().is_empty()
	}

	/// Join the base URL and the key, percent-encoding each key segment.
	fn normalize_url(&self, key: &str) -> String {
		let base = self.config.base_url.trim_end_matches('/');
		let key = key
			.trim_start_matches('/')
			.split('/')
			.map(|segment| urlencoding::encode(segment).into_owned())
			.collect::<Vec<_>>()
			.join("/");
		format!("{}/{}", base, key)
	}
}

impl Default for MemoryStorage {
	fn default() -> Self {
		Self::new(MemoryConfig::default())
	}
}

#[async_trait]
impl ObjectStorage for MemoryStorage {
	async fn get_item(&self, key: &str) -> Result<ObjectContent> {
		let content = self
			.objects
			.read()
			.get(key)
			.cloned()
			.ok_or_else(|| StorageError::NotFound(key.to_string()))?;

		tracing::debug!(key, size = content.size(), "Read object from memory");
		Ok(content)
	}

	async fn set_item(&self, key: &str, content: ObjectContent) -> Result<()> {
		let size = content.size();
		self.objects.write().insert(key.to_string(), content);

		tracing::debug!(key, size, "Stored object in memory");
		Ok(())
	}

	async fn remove_item(&self, key: &str) -> Result<()> {
		let removed = self.objects.write().remove(key).is_some();

		tracing::debug!(key, removed, "Removed object from memory");
		Ok(())
	}

	async fn get_temp_url(&self, key: &str) -> Result<String> {
		let expiry = chrono::Duration::from_std(self.config.url_expiry)
			.map_err(|e| StorageError::ConfigError(format!("Invalid URL expiry: {}", e)))?;
		let expires_at = Utc::now().checked_add_signed(expiry).ok_or_else(|| {
			StorageError::ConfigError(format!(
				"URL expiry of {} seconds is out of range",
				self.config.url_expiry.as_secs()
			))
		})?;

		Ok(format!(
			"{}?expires={}",
			self.normalize_url(key),
			expires_at.timestamp()
		))
	}
}
