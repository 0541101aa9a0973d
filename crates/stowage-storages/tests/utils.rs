//! Custom assertions for storage backend tests.

#![allow(dead_code)]
#![allow(unreachable_pub)]

use std::fmt;
use stowage_storages::{ObjectStorage, StorageError};

/// Custom assertion error.
#[derive(Debug)]
pub struct AssertionError {
	pub message: String,
}

impl fmt::Display for AssertionError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.message)
	}
}

impl std::error::Error for AssertionError {}

impl AssertionError {
	/// Create a new assertion error.
	pub fn new(message: String) -> Self {
		Self { message }
	}
}

/// Assert that stored content matches expected bytes.
pub async fn assert_content_matches(
	storage: &dyn ObjectStorage,
	key: &str,
	expected: &[u8],
) -> Result<(), AssertionError> {
	let actual = storage
		.get_item(key)
		.await
		.map_err(|e| AssertionError::new(format!("Failed to read object: {}", e)))?;

	if actual.data().as_ref() != expected {
		return Err(AssertionError::new(format!(
			"Content mismatch for key: {} (expected {} bytes, got {} bytes)",
			key,
			expected.len(),
			actual.size()
		)));
	}

	Ok(())
}

/// Assert that reading `key` fails with `NotFound` naming the key.
pub async fn assert_not_found(storage: &dyn ObjectStorage, key: &str) -> Result<(), AssertionError> {
	match storage.get_item(key).await {
		Err(StorageError::NotFound(missing)) if missing == key => Ok(()),
		Err(StorageError::NotFound(missing)) => Err(AssertionError::new(format!(
			"NotFound should name {}, got {}",
			key, missing
		))),
		Ok(content) => Err(AssertionError::new(format!(
			"Expected NotFound for {}, but read {} bytes",
			key,
			content.size()
		))),
		Err(e) => Err(AssertionError::new(format!(
			"Expected NotFound error, got: {:?}",
			e
		))),
	}
}

/// Assert that presigned URL is valid.
pub fn assert_presigned_url(url: &str, key: &str) -> Result<(), AssertionError> {
	if !url.starts_with("http://") && !url.starts_with("https://") {
		return Err(AssertionError::new(format!(
			"Presigned URL should start with http:// or https://: {}",
			url
		)));
	}

	if !url.contains(key) {
		return Err(AssertionError::new(format!(
			"Presigned URL should contain the key {}: {}",
			key, url
		)));
	}

	// Check for AWS signature query params
	if !url.contains("X-Amz-Signature") {
		return Err(AssertionError::new(format!(
			"Presigned URL should contain AWS signature params: {}",
			url
		)));
	}

	Ok(())
}

/// Assert that local file URL is valid.
pub fn assert_file_url(url: &str) -> Result<(), AssertionError> {
	if !url.starts_with("file://") {
		return Err(AssertionError::new(format!(
			"Local URL should start with file://: {}",
			url
		)));
	}

	Ok(())
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_assert_presigned_url_valid() {
		let url = "https://bucket.s3.amazonaws.com/key.txt?X-Amz-Algorithm=AWS4-HMAC-SHA256&X-Amz-Signature=abc";
		assert!(assert_presigned_url(url, "key.txt").is_ok());
	}

	#[test]
	fn test_assert_presigned_url_invalid() {
		assert!(assert_presigned_url("ftp://invalid.com/key.txt", "key.txt").is_err());
		assert!(assert_presigned_url("https://host/other?X-Amz-Signature=a", "key.txt").is_err());
	}

	#[test]
	fn test_assert_file_url() {
		assert!(assert_file_url("file:///path/to/file.txt").is_ok());
		assert!(assert_file_url("http://example.com").is_err());
	}
}
