//! Command implementations.

use std::path::Path;
use std::sync::Arc;

use anyhow::Context;
use stowage_storages::{ObjectContent, ObjectStorage, StorageWorkflow, WorkflowReport};
use tokio::io::AsyncWriteExt;

/// Default log filter for a `-v` count.
pub fn log_level(verbosity: u8) -> &'static str {
	match verbosity {
		0 => "warn",
		1 => "info",
		2 => "debug",
		_ => "trace",
	}
}

/// Explicit content type, or one guessed from the file name.
pub fn content_type_for(path: &Path, explicit: Option<String>) -> Option<String> {
	explicit.or_else(|| {
		mime_guess::from_path(path)
			.first()
			.map(|mime| mime.essence_str().to_string())
	})
}

async fn read_file(path: &Path, content_type: Option<String>) -> anyhow::Result<ObjectContent> {
	let data = tokio::fs::read(path)
		.await
		.with_context(|| format!("Failed to read {}", path.display()))?;

	let content = ObjectContent::new(data);
	Ok(match content_type_for(path, content_type) {
		Some(content_type) => content.with_content_type(content_type),
		None => content,
	})
}

pub async fn put(
	storage: &dyn ObjectStorage,
	key: &str,
	file: &Path,
	content_type: Option<String>,
) -> anyhow::Result<usize> {
	let content = read_file(file, content_type).await?;
	let size = content.size();
	storage.set_item(key, content).await?;
	Ok(size)
}

pub async fn get_to_file(storage: &dyn ObjectStorage, key: &str, output: &Path) -> anyhow::Result<usize> {
	let content = storage.get_item(key).await?;
	tokio::fs::write(output, content.data())
		.await
		.with_context(|| format!("Failed to write {}", output.display()))?;
	Ok(content.size())
}

pub async fn get_to_stdout(storage: &dyn ObjectStorage, key: &str) -> anyhow::Result<()> {
	let content = storage.get_item(key).await?;
	let mut stdout = tokio::io::stdout();
	stdout.write_all(content.data()).await?;
	stdout.flush().await?;
	Ok(())
}

pub async fn remove(storage: &dyn ObjectStorage, key: &str) -> anyhow::Result<()> {
	storage.remove_item(key).await?;
	Ok(())
}

pub async fn temp_url(storage: &dyn ObjectStorage, key: &str) -> anyhow::Result<String> {
	Ok(storage.get_temp_url(key).await?)
}

pub async fn workflow(
	storage: Arc<dyn ObjectStorage>,
	key: &str,
	file: &Path,
) -> anyhow::Result<WorkflowReport> {
	let content = read_file(file, None).await?;
	Ok(StorageWorkflow::new(storage)
		.complete_file_workflow(key, content)
		.await?)
}
