use std::sync::Arc;

use crate::{ObjectStorage, Result};

/// Delete an object.
#[derive(Clone)]
pub struct RemoveItem {
	storage: Arc<dyn ObjectStorage>,
}

impl RemoveItem {
	pub fn new(storage: Arc<dyn ObjectStorage>) -> Self {
		Self { storage }
	}

	#[tracing::instrument(level = "debug", skip(self))]
	pub async fn execute(&self, key: &str) -> Result<()> {
		self.storage.remove_item(key).await
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::{MemoryStorage, ObjectContent};
	use rstest::rstest;

	#[rstest]
	#[tokio::test]
	async fn test_removed_item_is_not_found() {
		let storage = Arc::new(MemoryStorage::default());
		storage
			.set_item("delete-me.txt", ObjectContent::from("bye"))
			.await
			.unwrap();

		RemoveItem::new(storage.clone())
			.execute("delete-me.txt")
			.await
			.unwrap();

		assert!(storage.get_item("delete-me.txt").await.unwrap_err().is_not_found());
	}
}
