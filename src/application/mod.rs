//! Application layer - Use cases and orchestration

pub mod rewrite_document;

pub use rewrite_document::{RewriteDocumentService, RewriteOptions, RewriteReport};
