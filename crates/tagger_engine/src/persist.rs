use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tagger_logging::tagger_info;
use tempfile::NamedTempFile;
use thiserror::Error;

use crate::format::format_tags;
use crate::mapping::FrequencyMapping;

#[derive(Debug, Error)]
pub enum WriteError {
    #[error("output directory missing or not writable: {0}")]
    OutputDir(String),
    #[error("output path has no file name: {0}")]
    NoFileName(String),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}

/// Ensure output directory exists; create if missing.
pub fn ensure_output_dir(dir: &Path) -> Result<(), WriteError> {
    if dir.exists() {
        let meta = fs::metadata(dir).map_err(|e| WriteError::OutputDir(e.to_string()))?;
        if !meta.is_dir() {
            return Err(WriteError::OutputDir(format!(
                "{} is not a directory",
                dir.display()
            )));
        }
    } else {
        fs::create_dir_all(dir).map_err(|e| WriteError::OutputDir(e.to_string()))?;
    }
    Ok(())
}

/// Atomically replace `target` by writing a sibling temp file then renaming it.
pub struct AtomicFileWriter {
    target: PathBuf,
}

impl AtomicFileWriter {
    pub fn new(target: PathBuf) -> Self {
        Self { target }
    }

    pub fn write(&self, content: &str) -> Result<PathBuf, WriteError> {
        if self.target.file_name().is_none() {
            return Err(WriteError::NoFileName(self.target.display().to_string()));
        }
        let dir = match self.target.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        ensure_output_dir(dir)?;

        let mut tmp = NamedTempFile::new_in(dir)?;
        tmp.write_all(content.as_bytes())?;
        tmp.flush()?;
        tmp.as_file_mut().sync_all()?;

        tmp.persist(&self.target)
            .map_err(|e| WriteError::Io(e.error))?;
        Ok(self.target.clone())
    }
}

/// Save tags in display format to `path`, replacing any existing file.
pub fn save_tags(path: &Path, tags: &FrequencyMapping) -> Result<PathBuf, WriteError> {
    let written = AtomicFileWriter::new(path.to_path_buf()).write(&format_tags(tags))?;
    tagger_info!("Saved {} tags to {:?}", tags.len(), written);
    Ok(written)
}
