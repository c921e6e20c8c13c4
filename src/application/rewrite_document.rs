//! Rewrite document use case

use crate::domain::{rewrite_example_blocks, Engine, RewriteRule};
use crate::error::Result;
use crate::infrastructure::DocumentStore;
use std::path::PathBuf;
use tracing::{debug, info, warn};

#[derive(Debug, Clone, Default)]
pub struct RewriteOptions {
    pub rule: RewriteRule,
    pub engine: Engine,
    pub dry_run: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RewriteReport {
    pub path: PathBuf,
    pub replacements: usize,
    pub dry_run: bool,
    pub to_lang: String,
}

/// Service that rewrites example code block tags in one document
pub struct RewriteDocumentService<S: DocumentStore> {
    store: S,
}

impl<S: DocumentStore> RewriteDocumentService<S> {
    pub fn new(store: S) -> Self {
        RewriteDocumentService { store }
    }

    /// Load, rewrite, and persist the document.
    ///
    /// The document is written back even when nothing matched.
    pub fn execute(&self, options: &RewriteOptions) -> Result<RewriteReport> {
        let path = self.store.path().to_path_buf();
        let content = self.store.read()?;
        debug!(path = %path.display(), bytes = content.len(), "loaded document");

        if !options.rule.is_idempotent() {
            warn!(
                from = %options.rule.from_lang,
                to = %options.rule.to_lang,
                "target tag starts with the source tag; running again will rewrite it again"
            );
        }

        let result = rewrite_example_blocks(&content, &options.rule, options.engine)?;
        info!(
            engine = %options.engine,
            replacements = result.replacements,
            "rewrote example code blocks"
        );

        if !options.dry_run {
            self.store.write(&result.content)?;
            debug!(path = %path.display(), "wrote document");
        }

        Ok(RewriteReport {
            path,
            replacements: result.replacements,
            dry_run: options.dry_run,
            to_lang: options.rule.to_lang.clone(),
        })
    }
}
