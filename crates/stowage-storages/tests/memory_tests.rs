//! Integration tests for MemoryStorage and the use cases running over it.

mod utils;

use fixtures::{
	TestFile, binary_file, greeting_file, large_file, memory_backend, random_file, test_files,
	unique_file_name,
};
use proptest::prelude::*;
use rstest::rstest;
use std::sync::Arc;
use stowage_storages::{
	GetItem, GetTempUrl, MemoryStorage, ObjectContent, ObjectStorage, RemoveItem, SetItem,
	StorageWorkflow,
};
use utils::{assert_content_matches, assert_not_found};

// ============================================================================
// Port Behaviour
// ============================================================================

mod port_tests {
	use super::*;

	#[rstest]
	#[case::greeting(greeting_file())]
	#[case::binary(binary_file())]
	#[case::large(large_file())]
	#[case::random(random_file())]
	#[tokio::test]
	async fn test_roundtrip_preserves_bytes(
		memory_backend: Arc<dyn ObjectStorage>,
		#[case] file: TestFile,
	) {
		memory_backend
			.set_item(&file.name, file.to_content())
			.await
			.expect("Failed to write object");

		let read = memory_backend
			.get_item(&file.name)
			.await
			.expect("Failed to read object");
		assert_eq!(read.size(), file.size());
		assert_eq!(read.content_type(), file.content_type.as_deref());
		assert_content_matches(&*memory_backend, &file.name, &file.content)
			.await
			.expect("Content should round-trip");
	}

	#[rstest]
	#[tokio::test]
	async fn test_files_coexist(memory_backend: Arc<dyn ObjectStorage>, test_files: Vec<TestFile>) {
		for file in &test_files {
			memory_backend
				.set_item(&file.name, file.to_content())
				.await
				.expect("Failed to write object");
		}

		for file in &test_files {
			assert_content_matches(&*memory_backend, &file.name, &file.content)
				.await
				.expect("Each object should keep its own content");
		}
	}

	#[rstest]
	#[tokio::test]
	async fn test_never_written_key_is_not_found(
		memory_backend: Arc<dyn ObjectStorage>,
		unique_file_name: String,
	) {
		assert_not_found(&*memory_backend, &unique_file_name)
			.await
			.expect("Unwritten key should be NotFound");
	}

	#[rstest]
	#[tokio::test]
	async fn test_temp_url_does_not_require_object(memory_backend: Arc<dyn ObjectStorage>) {
		let url = memory_backend
			.get_temp_url("url-test.txt")
			.await
			.expect("Failed to build URL");

		assert!(url.contains("url-test.txt"));
		assert!(url.contains("expires="));
	}

	#[rstest]
	#[tokio::test]
	async fn test_concurrent_writers_to_distinct_keys() {
		let storage = MemoryStorage::default();

		let handles: Vec<_> = (0..16)
			.map(|i| {
				let storage = storage.clone();
				tokio::spawn(async move {
					storage
						.set_item(&format!("key-{}", i), ObjectContent::from(vec![i as u8; i + 1]))
						.await
				})
			})
			.collect();

		for handle in handles {
			handle.await.expect("Task panicked").expect("Failed to write");
		}

		assert_eq!(storage.len(), 16);
		let read = storage.get_item("key-7").await.expect("Failed to read");
		assert_eq!(read.size(), 8);
	}
}

// ============================================================================
// Use Case Scenario
// ============================================================================

mod scenario_tests {
	use super::*;

	#[rstest]
	#[tokio::test]
	async fn test_use_cases_scenario(memory_backend: Arc<dyn ObjectStorage>) {
		let get_item = GetItem::new(memory_backend.clone());
		let set_item = SetItem::new(memory_backend.clone());
		let remove_item = RemoveItem::new(memory_backend.clone());
		let get_temp_url = GetTempUrl::new(memory_backend.clone());

		set_item
			.execute("bun-test.txt", ObjectContent::from("Hola LocalStack"))
			.await
			.expect("Failed to upload");
		let read = get_item.execute("bun-test.txt").await.expect("Failed to download");
		assert_eq!(read.size(), 15);

		set_item
			.execute("delete-me.txt", ObjectContent::from("bye"))
			.await
			.expect("Failed to upload");
		remove_item.execute("delete-me.txt").await.expect("Failed to delete");
		assert!(get_item.execute("delete-me.txt").await.is_err());

		let url = get_temp_url.execute("url-test.txt").await.expect("Failed to get URL");
		assert!(url.contains("url-test.txt"));

		assert!(get_item.execute("nope.txt").await.unwrap_err().is_not_found());
	}

	#[rstest]
	#[tokio::test]
	async fn test_workflow_over_shared_backend(memory_backend: Arc<dyn ObjectStorage>) {
		let workflow = StorageWorkflow::new(memory_backend.clone());

		let report = workflow
			.complete_file_workflow("walkthrough.txt", ObjectContent::from("Hola LocalStack"))
			.await
			.expect("Workflow should succeed");

		assert_eq!(report.downloaded_size, 15);
		assert!(report.download_url.starts_with("memory://stowage/walkthrough.txt"));
		assert_not_found(&*memory_backend, "walkthrough.txt")
			.await
			.expect("Workflow should delete the file");
	}
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
	#[test]
	fn prop_last_write_wins(
		key in "[a-z0-9/_.-]{1,32}",
		first in proptest::collection::vec(any::<u8>(), 0..256),
		second in proptest::collection::vec(any::<u8>(), 0..256),
	) {
		let runtime = tokio::runtime::Builder::new_current_thread()
			.build()
			.expect("Failed to build runtime");

		runtime.block_on(async {
			let storage = MemoryStorage::default();
			storage.set_item(&key, ObjectContent::new(first)).await.expect("first write");
			storage.set_item(&key, ObjectContent::new(second.clone())).await.expect("second write");

			let read = storage.get_item(&key).await.expect("read");
			prop_assert_eq!(read.size(), second.len());
			prop_assert_eq!(read.data().as_ref(), second.as_slice());

			storage.remove_item(&key).await.expect("remove");
			prop_assert!(storage.get_item(&key).await.unwrap_err().is_not_found());
			Ok(())
		})?;
	}
}
