//! Amazon S3 storage backend implementation.

use async_trait::async_trait;
use aws_config::{BehaviorVersion, Region};
use aws_sdk_s3::Client;
use aws_sdk_s3::config::Credentials;
use aws_sdk_s3::error::DisplayErrorContext;
use aws_sdk_s3::presigning::PresigningConfig;
use aws_sdk_s3::primitives::ByteStream;
use aws_sdk_s3::types::{BucketLocationConstraint, CreateBucketConfiguration};
use std::time::Duration;

use crate::backend::DEFAULT_URL_EXPIRY_SECS;
use crate::config::{S3Config, validate_url_expiry};
use crate::error::Operation;
use crate::{ObjectContent, ObjectStorage, Result, StorageError};

const DEFAULT_REGION: &str = "us-east-1";

/// S3 storage backend.
///
/// Works against AWS S3 and S3-compatible services such as LocalStack or
/// MinIO. Temporary URLs are presigned GET requests.
#[derive(Debug, Clone)]
pub struct S3Storage {
	client: Client,
	bucket: String,
	prefix: Option<String>,
	url_expiry: Duration,
}

impl S3Storage {
	/// Create a new S3 storage backend.
	///
	/// Static credentials are used when the configuration carries them;
	/// otherwise the standard AWS credential chain is consulted.
	///
	/// # Errors
	///
	/// Returns `` `StorageError::ConfigError` `` if the configuration is invalid.
	pub async fn new(config: S3Config) -> Result<Self> {
		if config.bucket.trim().is_empty() {
			return Err(StorageError::ConfigError(
				"S3 bucket name must not be empty".to_string(),
			));
		}
		let url_expiry = validate_url_expiry(config.url_expiry)?;

		let mut loader =
			aws_config::defaults(BehaviorVersion::latest()).region(Region::new(config.region.clone()));

		if let Some(endpoint) = &config.endpoint {
			loader = loader.endpoint_url(endpoint);
		}

		match (&config.access_key_id, &config.secret_access_key) {
			(Some(access), Some(secret)) => {
				let creds = Credentials::new(access, secret, None, None, "stowage-config");
				loader = loader.credentials_provider(creds);
			}
			(None, None) => {}
			_ => {
				return Err(StorageError::ConfigError(
					"S3 access key id and secret access key must be set together".to_string(),
				));
			}
		}

		let shared = loader.load().await;
		let mut s3_config = aws_sdk_s3::config::Builder::from(&shared);
		if config.force_path_style {
			s3_config = s3_config.force_path_style(true);
		}
		let client = Client::from_conf(s3_config.build());

		tracing::info!(
			bucket = %config.bucket,
			region = %config.region,
			endpoint = config.endpoint.as_deref().unwrap_or("default"),
			"Initialized S3 storage"
		);

		Ok(Self {
			client,
			bucket: config.bucket,
			prefix: normalize_prefix(config.prefix),
			url_expiry,
		})
	}

	/// Wrap an already configured client.
	pub fn with_client(client: Client, bucket: impl Into<String>) -> Self {
		Self {
			client,
			bucket: bucket.into(),
			prefix: None,
			url_expiry: Duration::from_secs(DEFAULT_URL_EXPIRY_SECS),
		}
	}

	/// Store every key below `prefix`.
	pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
		self.prefix = normalize_prefix(Some(prefix.into()));
		self
	}

	/// Set the presigned URL lifetime.
	///
	/// # Errors
	///
	/// Returns `` `StorageError::ConfigError` `` if the lifetime is zero or longer than seven days.
	pub fn with_url_expiry(mut self, url_expiry: Duration) -> Result<Self> {
		self.url_expiry = validate_url_expiry(url_expiry)?;
		Ok(self)
	}

	/// Bucket this backend reads and writes.
	pub fn bucket(&self) -> &str {
		&self.bucket
	}

	/// Underlying S3 client.
	pub fn client(&self) -> &Client {
		&self.client
	}

	/// Create the bucket unless it already exists.
	///
	/// # Errors
	///
	/// Returns `` `StorageError::Backend` `` if the bucket cannot be checked or created.
	pub async fn ensure_bucket(&self) -> Result<()> {
		match self.client.head_bucket().bucket(&self.bucket).send().await {
			Ok(_) => return Ok(()),
			Err(e) => {
				let missing = e
					.as_service_error()
					.map(|service| service.is_not_found())
					.unwrap_or(false);
				if !missing {
					return Err(StorageError::backend(
						Operation::EnsureBucket,
						&self.bucket,
						DisplayErrorContext(&e),
					));
				}
			}
		}

		let mut request = self.client.create_bucket().bucket(&self.bucket);

		// us-east-1 rejects an explicit location constraint
		let region = self.client.config().region().map(|r| r.as_ref().to_string());
		if let Some(region) = region.filter(|r| r != DEFAULT_REGION) {
			request = request.create_bucket_configuration(
				CreateBucketConfiguration::builder()
					.location_constraint(BucketLocationConstraint::from(region.as_str()))
					.build(),
			);
		}

		request.send().await.map_err(|e| {
			StorageError::backend(Operation::EnsureBucket, &self.bucket, DisplayErrorContext(&e))
		})?;

		tracing::info!(bucket = %self.bucket, "Created S3 bucket");
		Ok(())
	}

	/// Get full S3 key with prefix.
	fn get_full_key(&self, key: &str) -> String {
		match &self.prefix {
			Some(prefix) => format!("{}/{}", prefix, key.trim_start_matches('/')),
			None => key.to_string(),
		}
	}
}

fn normalize_prefix(prefix: Option<String>) -> Option<String> {
	prefix
		.map(|p| p.trim_matches('/').to_string())
		.filter(|p| !p.is_empty())
}

#[async_trait]
impl ObjectStorage for S3Storage {
	async fn get_item(&self, key: &str) -> Result<ObjectContent> {
		let full_key = self.get_full_key(key);

		let output = self
			.client
			.get_object()
			.bucket(&self.bucket)
			.key(&full_key)
			.send()
			.await
			.map_err(|e| {
				let missing = e
					.as_service_error()
					.map(|service| service.is_no_such_key())
					.unwrap_or(false);
				if missing {
					StorageError::NotFound(key.to_string())
				} else {
					StorageError::backend(Operation::GetItem, key, DisplayErrorContext(&e))
				}
			})?;

		let content_type = output.content_type().map(str::to_string);
		let data = output
			.body
			.collect()
			.await
			.map_err(|e| StorageError::backend(Operation::GetItem, key, e))?
			.into_bytes();

		tracing::debug!(bucket = %self.bucket, key = %full_key, size = data.len(), "Downloaded object");

		let content = ObjectContent::new(data);
		Ok(match content_type {
			Some(content_type) => content.with_content_type(content_type),
			None => content,
		})
	}

	async fn set_item(&self, key: &str, content: ObjectContent) -> Result<()> {
		let full_key = self.get_full_key(key);
		let size = content.size();
		let content_type = content.content_type().map(str::to_string);

		self.client
			.put_object()
			.bucket(&self.bucket)
			.key(&full_key)
			.body(ByteStream::from(content.into_bytes()))
			.set_content_type(content_type)
			.send()
			.await
			.map_err(|e| StorageError::backend(Operation::SetItem, key, DisplayErrorContext(&e)))?;

		tracing::debug!(bucket = %self.bucket, key = %full_key, size, "Uploaded object");
		Ok(())
	}

	async fn remove_item(&self, key: &str) -> Result<()> {
		let full_key = self.get_full_key(key);

		self.client
			.delete_object()
			.bucket(&self.bucket)
			.key(&full_key)
			.send()
			.await
			.map_err(|e| {
				StorageError::backend(Operation::RemoveItem, key, DisplayErrorContext(&e))
			})?;

		tracing::debug!(bucket = %self.bucket, key = %full_key, "Deleted object");
		Ok(())
	}

	async fn get_temp_url(&self, key: &str) -> Result<String> {
		let full_key = self.get_full_key(key);

		let presigning = PresigningConfig::expires_in(self.url_expiry)
			.map_err(|e| StorageError::backend(Operation::GetTempUrl, key, e))?;

		let request = self
			.client
			.get_object()
			.bucket(&self.bucket)
			.key(&full_key)
			.presigned(presigning)
			.await
			.map_err(|e| {
				StorageError::backend(Operation::GetTempUrl, key, DisplayErrorContext(&e))
			})?;

		tracing::debug!(
			bucket = %self.bucket,
			key = %full_key,
			expires_in = self.url_expiry.as_secs(),
			"Presigned object URL"
		);
		Ok(request.uri().to_string())
	}
}
