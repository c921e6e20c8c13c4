//! Infrastructure layer - External I/O and configuration

pub mod config;
pub mod document;

pub use config::Config;
pub use document::{DocumentFile, DocumentStore};
