//! Document file access

use crate::error::{Result, TwoslashError};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Abstract storage for the document being rewritten
pub trait DocumentStore {
    /// Location of the document
    fn path(&self) -> &Path;

    /// Read the whole document
    fn read(&self) -> Result<String>;

    /// Replace the whole document
    fn write(&self, content: &str) -> Result<()>;
}

/// File system implementation of DocumentStore
#[derive(Debug, Clone)]
pub struct DocumentFile {
    path: PathBuf,
}

impl DocumentFile {
    pub fn new(path: PathBuf) -> Self {
        DocumentFile { path }
    }

    /// Write content using a best-effort atomic replace:
    /// write to a temp file next to the real document, then rename into place.
    ///
    /// Symlinks are resolved first so the link keeps pointing at the rewritten
    /// file. The temp file takes over the original's permissions (and owner on
    /// Unix). A read-only document is refused rather than replaced.
    ///
    /// On Windows, `rename` does not overwrite existing files, so we remove the destination first.
    pub fn write_atomic(&self, content: &str) -> Result<()> {
        let target = match fs::canonicalize(&self.path) {
            Ok(resolved) => resolved,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => self.path.clone(),
            Err(e) => return Err(TwoslashError::Io(e)),
        };
        let original = match fs::metadata(&target) {
            Ok(metadata) => Some(metadata),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => None,
            Err(e) => return Err(TwoslashError::Io(e)),
        };

        if let Some(metadata) = &original {
            if metadata.permissions().readonly() {
                return Err(TwoslashError::Io(std::io::Error::new(
                    std::io::ErrorKind::PermissionDenied,
                    format!("{} is read-only", target.display()),
                )));
            }
        }

        let tmp_name = format!(
            "{}.twoslash-tmp-{}",
            target
                .file_name()
                .and_then(|s| s.to_str())
                .unwrap_or("document"),
            std::process::id()
        );
        let tmp_path = target.with_file_name(tmp_name);

        debug!(tmp = %tmp_path.display(), target = %target.display(), "writing temp file");
        let staged = fs::write(&tmp_path, content).map_err(TwoslashError::Io).and_then(|_| {
            match &original {
                Some(metadata) => copy_ownership(&tmp_path, metadata),
                None => Ok(()),
            }
        });
        if let Err(e) = staged {
            let _ = fs::remove_file(&tmp_path);
            return Err(e);
        }

        if cfg!(windows) && original.is_some() {
            if let Err(e) = fs::remove_file(&target) {
                let _ = fs::remove_file(&tmp_path);
                return Err(TwoslashError::Io(e));
            }
        }

        if let Err(e) = fs::rename(&tmp_path, &target) {
            let _ = fs::remove_file(&tmp_path);
            return Err(TwoslashError::Io(e));
        }
        Ok(())
    }
}

/// Give the staged file the original's permissions and, where possible, owner.
fn copy_ownership(tmp_path: &Path, original: &fs::Metadata) -> Result<()> {
    fs::set_permissions(tmp_path, original.permissions())?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::MetadataExt;

        let staged = fs::metadata(tmp_path)?;
        if staged.uid() != original.uid() || staged.gid() != original.gid() {
            if let Err(e) =
                std::os::unix::fs::chown(tmp_path, Some(original.uid()), Some(original.gid()))
            {
                tracing::warn!(error = %e, "could not keep document owner");
            }
        }
    }

    Ok(())
}

impl DocumentStore for DocumentFile {
    fn path(&self) -> &Path {
        &self.path
    }

    fn read(&self) -> Result<String> {
        fs::read_to_string(&self.path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                TwoslashError::NotFound(self.path.clone())
            } else {
                TwoslashError::Io(e)
            }
        })
    }

    fn write(&self, content: &str) -> Result<()> {
        self.write_atomic(content)
    }
}
