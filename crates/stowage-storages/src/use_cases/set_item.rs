use std::sync::Arc;

use crate::{ObjectContent, ObjectStorage, Result};

/// Store an object, replacing any previous content under the key.
#[derive(Clone)]
pub struct SetItem {
	storage: Arc<dyn ObjectStorage>,
}

impl SetItem {
	pub fn new(storage: Arc<dyn ObjectStorage>) -> Self {
		Self { storage }
	}

	#[tracing::instrument(level = "debug", skip(self, content), fields(size = content.size()))]
	pub async fn execute(&self, key: &str, content: ObjectContent) -> Result<()> {
		self.storage.set_item(key, content).await
	}
}
