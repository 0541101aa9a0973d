//! Error types for storage operations.

use std::fmt;
use thiserror::Error;

/// Placeholder used when an underlying failure carries no message.
pub const UNKNOWN_ERROR: &str = "Unknown error";

/// Storage operation that failed at the backend boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
	/// Reading an object.
	GetItem,
	/// Writing an object.
	SetItem,
	/// Deleting an object.
	RemoveItem,
	/// Issuing a temporary access URL.
	GetTempUrl,
	/// Checking for or creating the target bucket.
	EnsureBucket,
}

impl fmt::Display for Operation {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Operation::GetItem => write!(f, "get item"),
			Operation::SetItem => write!(f, "set item"),
			Operation::RemoveItem => write!(f, "remove item"),
			Operation::GetTempUrl => write!(f, "get temp URL for"),
			Operation::EnsureBucket => write!(f, "ensure bucket"),
		}
	}
}

/// Errors that can occur during storage operations.
#[derive(Debug, Error)]
pub enum StorageError {
	/// No object is stored under the key.
	#[error("Object not found: {0}")]
	NotFound(String),

	/// Transport, authentication, permission or request failure reported by the backend.
	#[error("Failed to {operation} {key}: {message}")]
	Backend {
		/// Operation that failed.
		operation: Operation,
		/// Key the operation targeted.
		key: String,
		/// Message of the underlying cause.
		message: String,
	},

	/// Key cannot be mapped onto the backend safely.
	#[error("Invalid object key: {0}")]
	InvalidKey(String),

	/// Missing or invalid configuration.
	#[error("Configuration error: {0}")]
	ConfigError(String),
}

impl StorageError {
	/// Wrap an underlying failure with the operation and key it belongs to.
	///
	/// An empty cause message is replaced by [`UNKNOWN_ERROR`].
	pub fn backend(operation: Operation, key: &str, cause: impl fmt::Display) -> Self {
		let message = cause.to_string();
		let message = if message.trim().is_empty() {
			UNKNOWN_ERROR.to_string()
		} else {
			message
		};

		StorageError::Backend {
			operation,
			key: key.to_string(),
			message,
		}
	}

	/// Returns `true` for [`StorageError::NotFound`].
	pub fn is_not_found(&self) -> bool {
		matches!(self, StorageError::NotFound(_))
	}
}

/// Result type alias for storage operations.
pub type Result<T> = std::result::Result<T, StorageError>;
