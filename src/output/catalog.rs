//! Catalog of generated audio files.

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::config::Layout;

/// Errors that can occur while managing generated audio.
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Generated audio not found: {0}")]
    NotFound(String),

    #[error("Invalid file name: {0}")]
    InvalidName(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// A synthesis output on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedAudio {
    pub file_name: String,
    pub path: PathBuf,
    pub modified: DateTime<Utc>,
    pub size_bytes: u64,
}

/// Lists and deletes files in `generated_audios/`.
pub struct OutputCatalog {
    output_dir: PathBuf,
}

impl OutputCatalog {
    pub fn new(layout: &Layout) -> Self {
        Self::with_dir(layout.output_dir.clone())
    }

    pub fn with_dir(output_dir: PathBuf) -> Self {
        Self { output_dir }
    }

    /// Every `.wav` output, most recently modified first.
    ///
    /// Equal timestamps fall back to file name order.
    pub fn list(&self) -> Result<Vec<GeneratedAudio>, OutputError> {
        if !self.output_dir.exists() {
            return Ok(Vec::new());
        }

        let mut outputs = Vec::new();

        for entry in std::fs::read_dir(&self.output_dir)? {
            let entry = entry?;
            let path = entry.path();

            if !path.extension().is_some_and(|ext| ext == "wav") {
                continue;
            }

            let metadata = entry.metadata()?;
            if !metadata.is_file() {
                continue;
            }

            let Some(file_name) = path.file_name().and_then(|n| n.to_str()).map(str::to_string)
            else {
                continue;
            };

            outputs.push(GeneratedAudio {
                file_name,
                path,
                modified: DateTime::<Utc>::from(metadata.modified()?),
                size_bytes: metadata.len(),
            });
        }

        outputs.sort_by(|a, b| {
            b.modified
                .cmp(&a.modified)
                .then_with(|| a.file_name.cmp(&b.file_name))
        });

        Ok(outputs)
    }

    /// Delete one output by file name.
    pub fn delete(&self, file_name: &str) -> Result<(), OutputError> {
        validate_file_name(file_name)?;

        let path = self.output_dir.join(file_name);

        if !path.is_file() {
            return Err(OutputError::NotFound(file_name.to_string()));
        }

        std::fs::remove_file(&path)?;
        log::info!("Deleted {}", path.display());

        Ok(())
    }
}

fn validate_file_name(file_name: &str) -> Result<(), OutputError> {
    if file_name.is_empty() {
        return Err(OutputError::InvalidName(
            "File name cannot be empty".to_string(),
        ));
    }

    // Prevent path traversal
    if file_name.contains('/') || file_name.contains('\\') || file_name.contains("..") {
        return Err(OutputError::InvalidName(
            "File name cannot contain path separators".to_string(),
        ));
    }

    Ok(())
}
