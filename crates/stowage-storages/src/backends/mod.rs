//! Storage backend implementations.

pub mod memory;

#[cfg(feature = "local")]
pub mod local;

#[cfg(feature = "s3")]
pub mod s3;

pub use memory::MemoryStorage;

#[cfg(feature = "local")]
pub use local::LocalStorage;

#[cfg(feature = "s3")]
pub use s3::S3Storage;
