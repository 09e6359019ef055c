// Signed-URL resolution module
// Author: kelexine (https://github.com/kelexine)

pub mod manager;
pub mod models;

pub use manager::{normalize_storage_path, UrlResolver};
pub use models::{CacheEntry, CacheStats};
