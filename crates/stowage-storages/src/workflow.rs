//! End-to-end file workflow composed from the storage use cases.

use std::sync::Arc;

use crate::use_cases::{GetItem, GetTempUrl, RemoveItem, SetItem};
use crate::{ObjectContent, ObjectStorage, Result};

/// Outcome of [`StorageWorkflow::complete_file_workflow`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkflowReport {
	/// Temporary URL issued after the upload.
	pub download_url: String,
	/// Size in bytes of the content read back.
	pub downloaded_size: usize,
}

/// File operations over a storage backend, with success and failure logging.
///
/// Every failure is logged at `error` level and returned unchanged.
#[derive(Clone)]
pub struct StorageWorkflow {
	get_item: GetItem,
	set_item: SetItem,
	remove_item: RemoveItem,
	get_temp_url: GetTempUrl,
}

impl StorageWorkflow {
	pub fn new(storage: Arc<dyn ObjectStorage>) -> Self {
		Self {
			get_item: GetItem::new(storage.clone()),
			set_item: SetItem::new(storage.clone()),
			remove_item: RemoveItem::new(storage.clone()),
			get_temp_url: GetTempUrl::new(storage),
		}
	}

	pub async fn upload_file(&self, file_name: &str, content: ObjectContent) -> Result<()> {
		match self.set_item.execute(file_name, content).await {
			Ok(()) => {
				tracing::info!(file_name, "File uploaded");
				Ok(())
			}
			Err(e) => {
				tracing::error!(file_name, error = %e, "Error uploading file");
				Err(e)
			}
		}
	}

	pub async fn download_file(&self, file_name: &str) -> Result<ObjectContent> {
		match self.get_item.execute(file_name).await {
			Ok(content) => {
				tracing::info!(file_name, size = content.size(), "File downloaded");
				Ok(content)
			}
			Err(e) => {
				tracing::error!(file_name, error = %e, "Error downloading file");
				Err(e)
			}
		}
	}

	pub async fn delete_file(&self, file_name: &str) -> Result<()> {
		match self.remove_item.execute(file_name).await {
			Ok(()) => {
				tracing::info!(file_name, "File deleted");
				Ok(())
			}
			Err(e) => {
				tracing::error!(file_name, error = %e, "Error deleting file");
				Err(e)
			}
		}
	}

	pub async fn file_download_url(&self, file_name: &str) -> Result<String> {
		match self.get_temp_url.execute(file_name).await {
			Ok(url) => {
				tracing::info!(file_name, url = %url, "Download URL generated");
				Ok(url)
			}
			Err(e) => {
				tracing::error!(file_name, error = %e, "Error generating download URL");
				Err(e)
			}
		}
	}

	/// Upload, share, read back and delete a file.
	///
	/// Stops at the first failing step. Steps already completed are not
	/// undone, so a failure after the upload leaves the object stored.
	pub async fn complete_file_workflow(
		&self,
		file_name: &str,
		content: ObjectContent,
	) -> Result<WorkflowReport> {
		tracing::info!(file_name, "Starting file workflow");

		self.upload_file(file_name, content).await?;
		let download_url = self.file_download_url(file_name).await?;
		let downloaded = self.download_file(file_name).await?;
		self.delete_file(file_name).await?;

		tracing::info!(file_name, "File workflow completed");
		Ok(WorkflowReport {
			download_url,
			downloaded_size: downloaded.size(),
		})
	}
}
