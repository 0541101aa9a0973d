//! Configuration types for storage backends.

use crate::backend::DEFAULT_URL_EXPIRY_SECS;
use crate::{Result, StorageError};
use std::env;
use std::str::FromStr;
use std::time::Duration;

/// Longest expiry a presigned URL may carry (seven days).
pub const MAX_URL_EXPIRY_SECS: u64 = 7 * 24 * 3600;

/// Storage backend type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackendType {
	/// S3-compatible object store
	S3,
	/// Local file system
	Local,
	/// In-process memory
	Memory,
}

impl std::fmt::Display for BackendType {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			BackendType::S3 => write!(f, "S3"),
			BackendType::Local => write!(f, "Local"),
			BackendType::Memory => write!(f, "Memory"),
		}
	}
}

impl FromStr for BackendType {
	type Err = StorageError;

	fn from_str(s: &str) -> Result<Self> {
		match s.trim().to_lowercase().as_str() {
			"s3" => Ok(BackendType::S3),
			"local" => Ok(BackendType::Local),
			"memory" => Ok(BackendType::Memory),
			_ => Err(StorageError::ConfigError(format!(
				"Invalid backend type: {}",
				s
			))),
		}
	}
}

/// Validate a temporary URL expiry.
pub fn validate_url_expiry(expiry: Duration) -> Result<Duration> {
	let secs = expiry.as_secs();
	if secs == 0 || secs > MAX_URL_EXPIRY_SECS {
		return Err(StorageError::ConfigError(format!(
			"URL expiry must be between 1 and {} seconds, got {}",
			MAX_URL_EXPIRY_SECS, secs
		)));
	}
	Ok(expiry)
}

/// Configuration for the S3 storage backend.
///
/// Connection parameters are always explicit: when `access_key_id` and
/// `secret_access_key` are absent, the standard AWS credential chain is used.
#[cfg(feature = "s3")]
#[derive(Debug, Clone)]
pub struct S3Config {
	/// S3 bucket name
	pub bucket: String,
	/// AWS region (e.g., "us-east-1")
	pub region: String,
	/// Custom endpoint URL (for LocalStack or MinIO)
	pub endpoint: Option<String>,
	/// Static access key id
	pub access_key_id: Option<String>,
	/// Static secret access key
	pub secret_access_key: Option<String>,
	/// Address buckets by path instead of virtual host
	pub force_path_style: bool,
	/// Path prefix for all keys
	pub prefix: Option<String>,
	/// Lifetime of presigned URLs
	pub url_expiry: Duration,
}

#[cfg(feature = "s3")]
impl S3Config {
	/// Create a configuration for `bucket` in `region` with default settings.
	pub fn new(bucket: impl Into<String>, region: impl Into<String>) -> Self {
		Self {
			bucket: bucket.into(),
			region: region.into(),
			endpoint: None,
			access_key_id: None,
			secret_access_key: None,
			force_path_style: false,
			prefix: None,
			url_expiry: Duration::from_secs(DEFAULT_URL_EXPIRY_SECS),
		}
	}

	/// Set a custom endpoint URL.
	pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
		self.endpoint = Some(endpoint.into());
		self
	}

	/// Set static credentials.
	pub fn with_credentials(
		mut self,
		access_key_id: impl Into<String>,
		secret_access_key: impl Into<String>,
	) -> Self {
		self.access_key_id = Some(access_key_id.into());
		self.secret_access_key = Some(secret_access_key.into());
		self
	}

	/// Use path-style bucket addressing.
	pub fn with_force_path_style(mut self, force_path_style: bool) -> Self {
		self.force_path_style = force_path_style;
		self
	}

	/// Set a key prefix.
	pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
		self.prefix = Some(prefix.into());
		self
	}

	/// Set the presigned URL lifetime.
	pub fn with_url_expiry(mut self, url_expiry: Duration) -> Self {
		self.url_expiry = url_expiry;
		self
	}
}

/// Configuration for the local file system backend.
#[cfg(feature = "local")]
#[derive(Debug, Clone)]
pub struct LocalConfig {
	/// Base directory path for object files
	pub base_path: String,
}

/// Configuration for the in-memory backend.
#[derive(Debug, Clone)]
pub struct MemoryConfig {
	/// Base used to build temporary URLs
	pub base_url: String,
	/// Lifetime of temporary URLs
	pub url_expiry: Duration,
}

impl Default for MemoryConfig {
	fn default() -> Self {
		Self {
			base_url: "memory://stowage".to_string(),
			url_expiry: Duration::from_secs(DEFAULT_URL_EXPIRY_SECS),
		}
	}
}

/// Storage configuration.
#[derive(Debug, Clone)]
pub enum StorageConfig {
	#[cfg(feature = "s3")]
	S3(S3Config),
	#[cfg(feature = "local")]
	Local(LocalConfig),
	Memory(MemoryConfig),
}

impl StorageConfig {
	/// Backend type this configuration selects.
	pub fn backend_type(&self) -> BackendType {
		match self {
			#[cfg(feature = "s3")]
			StorageConfig::S3(_) => BackendType::S3,
			#[cfg(feature = "local")]
			StorageConfig::Local(_) => BackendType::Local,
			StorageConfig::Memory(_) => BackendType::Memory,
		}
	}

	/// Load configuration from environment variables.
	///
	/// # Environment Variables
	///
	/// - `STORAGE_BACKEND`: Backend type ("s3", "local", "memory")
	/// - `STORAGE_URL_EXPIRY_SECS`: Temporary URL lifetime (optional, default 3600)
	///
	/// ## S3 Backend
	/// - `S3_BUCKET`: Bucket name (required)
	/// - `S3_REGION`: AWS region (optional, default "us-east-1")
	/// - `S3_ENDPOINT`: Custom endpoint URL (optional)
	/// - `S3_ACCESS_KEY_ID` / `S3_SECRET_ACCESS_KEY`: Static credentials (optional, both or neither)
	/// - `S3_FORCE_PATH_STYLE`: Path-style addressing (optional, default false)
	/// - `S3_PREFIX`: Key prefix (optional)
	///
	/// ## Local Backend
	/// - `LOCAL_BASE_PATH`: Base directory path (required)
	///
	/// ## Memory Backend
	/// - `MEMORY_BASE_URL`: Base for temporary URLs (optional)
	pub fn from_env() -> Result<Self> {
		let backend_type = env::var("STORAGE_BACKEND").map_err(|_| {
			StorageError::ConfigError("STORAGE_BACKEND environment variable not set".to_string())
		})?;

		let backend_type = backend_type.parse::<BackendType>()?;
		let url_expiry = url_expiry_from_env()?;

		match backend_type {
			#[cfg(feature = "s3")]
			BackendType::S3 => {
				let bucket = env::var("S3_BUCKET").map_err(|_| {
					StorageError::ConfigError("S3_BUCKET environment variable not set".to_string())
				})?;
				let region = env::var("S3_REGION").unwrap_or_else(|_| "us-east-1".to_string());

				let mut config = S3Config::new(bucket, region).with_url_expiry(url_expiry);
				config.endpoint = env::var("S3_ENDPOINT").ok();
				config.prefix = env::var("S3_PREFIX").ok();
				config.force_path_style = env_bool("S3_FORCE_PATH_STYLE", false)?;

				match (
					env::var("S3_ACCESS_KEY_ID").ok(),
					env::var("S3_SECRET_ACCESS_KEY").ok(),
				) {
					(Some(access), Some(secret)) => {
						config = config.with_credentials(access, secret);
					}
					(None, None) => {}
					_ => {
						return Err(StorageError::ConfigError(
							"S3_ACCESS_KEY_ID and S3_SECRET_ACCESS_KEY must be set together"
								.to_string(),
						));
					}
				}

				Ok(StorageConfig::S3(config))
			}
			#[cfg(feature = "local")]
			BackendType::Local => {
				let base_path = env::var("LOCAL_BASE_PATH").map_err(|_| {
					StorageError::ConfigError(
						"LOCAL_BASE_PATH environment variable not set".to_string(),
					)
				})?;

				Ok(StorageConfig::Local(LocalConfig { base_path }))
			}
			BackendType::Memory => {
				let mut config = MemoryConfig {
					url_expiry,
					..MemoryConfig::default()
				};
				if let Ok(base_url) = env::var("MEMORY_BASE_URL") {
					config.base_url = base_url;
				}

				Ok(StorageConfig::Memory(config))
			}
			#[allow(unreachable_patterns)]
			_ => Err(StorageError::ConfigError(format!(
				"Backend type not enabled: {:?}",
				backend_type
			))),
		}
	}
}

fn url_expiry_from_env() -> Result<Duration> {
	match env::var("STORAGE_URL_EXPIRY_SECS") {
		Ok(value) => {
			let secs = value.trim().parse::<u64>().map_err(|e| {
				StorageError::ConfigError(format!("Invalid STORAGE_URL_EXPIRY_SECS: {}", e))
			})?;
			validate_url_expiry(Duration::from_secs(secs))
		}
		Err(_) => Ok(Duration::from_secs(DEFAULT_URL_EXPIRY_SECS)),
	}
}

fn env_bool(key: &str, default: bool) -> Result<bool> {
	match env::var(key) {
		Ok(value) => value.trim().parse::<bool>().map_err(|_| {
			StorageError::ConfigError(format!("Invalid boolean for {}: {}", key, value))
		}),
		Err(_) => Ok(default),
	}
}
