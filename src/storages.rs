//! Object storage module.
//!
//! # Examples
//!
//! ```rust,no_run
//! use stowage::storages::{MemoryStorage, ObjectStorage};
//! ```

pub use stowage_storages::*;
