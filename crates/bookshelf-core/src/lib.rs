//! # Bookshelf Core
//!
//! Core library for Bookshelf - a menu-driven terminal catalog of book records
//! persisted to a local JSON file.
//!
//! This crate provides the domain model, validation rules, and storage
//! abstractions independent of the interactive CLI.
//!
//! ## Architecture
//!
//! - **record**: Book record model and field validation
//! - **catalog**: CRUD operations over the persisted collection
//! - **storage**: Backing-store trait and the JSON file backend
//! - **session**: Menu navigation state machine and its interaction boundary

pub mod catalog;
pub mod error;
pub mod record;
pub mod session;
pub mod storage;

pub use catalog::CatalogStore;
pub use error::{CatalogError, Result};
pub use record::{NewRecord, Record, Status};
pub use session::{Interaction, MenuState, Screen, Session};
pub use storage::{CatalogBackend, JsonFileBackend};

/// Core version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
