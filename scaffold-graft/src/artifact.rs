//! Source artifacts — whole-file reads and single atomic writes.
//!
//! An artifact is read entirely into memory, transformed as a value, and
//! written back in one call via a `.tmp` + rename. There are no partial
//! writes: interruption before the final write leaves the on-disk file
//! unmodified.

use std::path::{Path, PathBuf};

use crate::error::{io_err, GraftError};

// ---------------------------------------------------------------------------
// Write result
// ---------------------------------------------------------------------------

/// Outcome of an individual artifact write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriteResult {
    /// File was written (content changed or did not previously exist).
    Written { path: PathBuf },
    /// File was skipped — content already matches what is on disk.
    Unchanged { path: PathBuf },
    /// `--dry-run` mode: the file *would* have been written.
    WouldWrite { path: PathBuf },
}

impl WriteResult {
    pub fn path(&self) -> &Path {
        match self {
            WriteResult::Written { path }
            | WriteResult::Unchanged { path }
            | WriteResult::WouldWrite { path } => path,
        }
    }
}

// ---------------------------------------------------------------------------
// SourceArtifact
// ---------------------------------------------------------------------------

/// A whole source file held in memory.
///
/// Line endings are normalised to LF on load so the line-addressed scanners
/// and splices see a uniform shape; files written back always carry LF.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceArtifact {
    pub path: PathBuf,
    pub content: String,
}

impl SourceArtifact {
    /// Read `path` wholly into memory.
    ///
    /// Returns [`GraftError::NotFound`] if the file is absent and
    /// [`GraftError::Io`] on any other read failure.
    pub fn load(path: &Path) -> Result<SourceArtifact, GraftError> {
        if !path.exists() {
            return Err(GraftError::NotFound {
                path: path.to_path_buf(),
            });
        }
        let raw = std::fs::read_to_string(path).map_err(|e| io_err(path, e))?;
        Ok(SourceArtifact {
            path: path.to_path_buf(),
            content: raw.replace("\r\n", "\n"),
        })
    }

    /// Write the artifact back in one call.
    ///
    /// Skips the write (returning `Unchanged`) when on-disk content already
    /// matches, so a re-run performs zero writes. Uses write-to-tmp plus
    /// atomic rename; the original file is intact if the rename fails.
    pub fn write(&self, dry_run: bool) -> Result<WriteResult, GraftError> {
        write_artifact(&self.path, &self.content, dry_run)
    }
}

/// Atomically write `content` to `path` (see [`SourceArtifact::write`]).
pub fn write_artifact(path: &Path, content: &str, dry_run: bool) -> Result<WriteResult, GraftError> {
    if let Ok(existing) = std::fs::read_to_string(path) {
        if existing.replace("\r\n", "\n") == content {
            tracing::debug!("unchanged: {}", path.display());
            return Ok(WriteResult::Unchanged {
                path: path.to_path_buf(),
            });
        }
    }

    if dry_run {
        tracing::info!("[dry-run] would write: {}", path.display());
        return Ok(WriteResult::WouldWrite {
            path: path.to_path_buf(),
        });
    }

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|e| io_err(parent, e))?;
        }
    }

    let tmp = PathBuf::from(format!("{}.scaffold.tmp", path.display()));
    std::fs::write(&tmp, content).map_err(|e| io_err(&tmp, e))?;
    if let Err(e) = std::fs::rename(&tmp, path) {
        let _ = std::fs::remove_file(&tmp);
        return Err(io_err(path, e));
    }

    tracing::info!("wrote: {}", path.display());
    Ok(WriteResult::Written {
        path: path.to_path_buf(),
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn load_missing_file_is_not_found() {
        let tmp = TempDir::new().unwrap();
        let err = SourceArtifact::load(&tmp.path().join("absent.go")).unwrap_err();
        assert!(matches!(err, GraftError::NotFound { .. }));
    }

    #[test]
    fn load_normalises_crlf() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("file.go");
        fs::write(&path, "a\r\nb\r\n").unwrap();
        let artifact = SourceArtifact::load(&path).unwrap();
        assert_eq!(artifact.content, "a\nb\n");
    }

    #[test]
    fn first_write_returns_written() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("out.go");
        let result = write_artifact(&path, "package app\n", false).unwrap();
        assert!(matches!(result, WriteResult::Written { .. }));
        assert_eq!(fs::read_to_string(&path).unwrap(), "package app\n");
    }

    #[test]
    fn identical_content_is_unchanged() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("out.go");
        fs::write(&path, "same\n").unwrap();
        let result = write_artifact(&path, "same\n", false).unwrap();
        assert!(matches!(result, WriteResult::Unchanged { .. }));
    }

    #[test]
    fn dry_run_does_not_write() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("nope.go");
        let result = write_artifact(&path, "content\n", true).unwrap();
        assert!(matches!(result, WriteResult::WouldWrite { .. }));
        assert!(!path.exists(), "dry-run must not create files");
    }

    #[test]
    fn tmp_file_removed_after_write() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("clean.go");
        write_artifact(&path, "data\n", false).unwrap();
        let tmp_path = PathBuf::from(format!("{}.scaffold.tmp", path.display()));
        assert!(!tmp_path.exists(), ".scaffold.tmp must be cleaned up");
    }
}
