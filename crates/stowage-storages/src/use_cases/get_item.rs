use std::sync::Arc;

use crate::{ObjectContent, ObjectStorage, Result};

/// Read an object.
#[derive(Clone)]
pub struct GetItem {
	storage: Arc<dyn ObjectStorage>,
}

impl GetItem {
	pub fn new(storage: Arc<dyn ObjectStorage>) -> Self {
		Self { storage }
	}

	/// # Errors
	///
	/// Returns `` `StorageError::NotFound` `` if nothing is stored under `key`.
	#[tracing::instrument(level = "debug", skip(self))]
	pub async fn execute(&self, key: &str) -> Result<ObjectContent> {
		self.storage.get_item(key).await
	}
}
