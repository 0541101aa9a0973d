use std::sync::Arc;

use crate::{ObjectStorage, Result};

/// Issue a temporary read URL for a key.
#[derive(Clone)]
pub struct GetTempUrl {
	storage: Arc<dyn ObjectStorage>,
}

impl GetTempUrl {
	pub fn new(storage: Arc<dyn ObjectStorage>) -> Self {
		Self { storage }
	}

	#[tracing::instrument(level = "debug", skip(self))]
	pub async fn execute(&self, key: &str) -> Result<String> {
		self.storage.get_temp_url(key).await
	}
}
