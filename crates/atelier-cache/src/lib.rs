//! Type-safe local key-value storage for the Atelier storefront.
//!
//! Values are stored as JSON under plain string keys, the same way a browser
//! keeps them in `localStorage`. Two backends are provided:
//!
//! - [`FileStore`]: one file per key inside a data directory (durable)
//! - [`MemoryStore`]: a process-local map (tests, throwaway sessions)
//!
//! # Example
//!
//! ```rust
//! use atelier_cache::{Cache, MemoryStore};
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Serialize, Deserialize, PartialEq, Debug)]
//! struct Badge {
//!     count: u32,
//! }
//!
//! let cache = Cache::new(MemoryStore::new());
//! cache.set("badge", &Badge { count: 3 }).unwrap();
//!
//! let badge: Option<Badge> = cache.get("badge").unwrap();
//! assert_eq!(badge, Some(Badge { count: 3 }));
//! ```

mod error;
mod kv;
mod store;

pub use error::CacheError;
pub use kv::Cache;
pub use store::{FileStore, KvStore, MemoryStore};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{Cache, CacheError, FileStore, KvStore, MemoryStore};
}
