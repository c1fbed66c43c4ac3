//! Document I/O and active-document resolution.

use crate::error::RunError;
use anyhow::{Context, Result};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Environment variable naming the active document when no path is given.
pub const ACTIVE_DOCUMENT_ENV: &str = "PICUP_ACTIVE_DOCUMENT";

/// A whole-text document the pipeline can read and write back.
pub trait Document {
    /// Display name used in notices and logs.
    fn name(&self) -> String;
    fn read(&self) -> Result<String>;
    fn write(&self, content: &str) -> Result<()>;
}

/// A UTF-8 text file on disk.
#[derive(Debug, Clone)]
pub struct FileDocument {
    path: PathBuf,
}

impl FileDocument {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Document for FileDocument {
    fn name(&self) -> String {
        self.path.display().to_string()
    }

    fn read(&self) -> Result<String> {
        std::fs::read_to_string(&self.path)
            .with_context(|| format!("read {}", self.path.display()))
    }

    /// Writes to a temp file next to the document, then renames over it.
    fn write(&self, content: &str) -> Result<()> {
        let dir = match self.path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => Path::new("."),
        };
        let mut tmp = tempfile::NamedTempFile::new_in(dir)
            .with_context(|| format!("create temp file in {}", dir.display()))?;
        tmp.write_all(content.as_bytes())
            .with_context(|| format!("write temp file for {}", self.path.display()))?;
        tmp.as_file()
            .sync_all()
            .with_context(|| format!("sync temp file for {}", self.path.display()))?;
        if let Ok(meta) = std::fs::metadata(&self.path) {
            // Keep the original file's permissions across the rename.
            let _ = std::fs::set_permissions(tmp.path(), meta.permissions());
        }
        tmp.persist(&self.path)
            .with_context(|| format!("replace {}", self.path.display()))?;
        Ok(())
    }
}

/// Resolve the active document: the explicit path, else `env_value`.
///
/// Fails with [`RunError::NoActiveDocument`] when neither names an existing file.
pub fn resolve_active(
    explicit: Option<&Path>,
    env_value: Option<&str>,
) -> Result<FileDocument, RunError> {
    let candidate = explicit
        .map(Path::to_path_buf)
        .or_else(|| env_value.filter(|v| !v.is_empty()).map(PathBuf::from));
    match candidate {
        Some(path) if path.is_file() => Ok(FileDocument::new(path)),
        Some(path) => {
            tracing::warn!(path = %path.display(), "active document is not a file");
            Err(RunError::NoActiveDocument)
        }
        None => Err(RunError::NoActiveDocument),
    }
}
