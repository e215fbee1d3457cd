//! Backing-store abstractions for the catalog.

mod json_file;
mod traits;

pub use json_file::JsonFileBackend;
pub use traits::CatalogBackend;

#[cfg(any(test, feature = "test-support"))]
pub use traits::MemoryBackend;
