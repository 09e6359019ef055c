// Object storage backend module
// Author: kelexine (https://github.com/kelexine)

mod client;

pub use client::StorageClient;
