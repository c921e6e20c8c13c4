//! Domain layer - Rewrite rules and text transforms

pub mod engine;
pub mod rewrite;
pub mod rule;

pub use engine::Engine;
pub use rewrite::{rewrite_example_blocks, RewriteResult};
pub use rule::RewriteRule;
