//! twoslashify - Example code block tag rewriter
//!
//! Rewrites the language tag of fenced code blocks that follow an
//! "Example" marker in a markdown or MDX document, so documentation
//! examples can opt into twoslash code annotations.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::TwoslashError;
