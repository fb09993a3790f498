use crate::catalog::Archetype;
use crate::shared::errors::OutputError;
use crate::shared::fs_atomic::{atomic_write_file, ensure_parent_dir};
use std::path::{Path, PathBuf};

pub fn document_path(output_dir: &Path, archetype: &Archetype) -> PathBuf {
    output_dir.join(format!("{}.md", archetype.slug()))
}

/// Persists a rendered document. Implementations overwrite existing files.
pub trait OutputWriter {
    fn write_document(&mut self, path: &Path, text: &str) -> Result<(), OutputError>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct FsOutputWriter;

impl OutputWriter for FsOutputWriter {
    fn write_document(&mut self, path: &Path, text: &str) -> Result<(), OutputError> {
        ensure_parent_dir(path).map_err(|source| OutputError::CreateDir {
            path: path
                .parent()
                .map(|parent| parent.display().to_string())
                .unwrap_or_default(),
            source,
        })?;
        atomic_write_file(path, text.as_bytes()).map_err(|source| OutputError::Write {
            path: path.display().to_string(),
            source,
        })
    }
}
