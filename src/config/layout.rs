//! On-disk directory layout.

use std::path::{Path, PathBuf};

/// Directory holding captured samples that have not been promoted yet.
pub const UPLOADS_DIR: &str = "uploads";
/// Directory holding persisted voice profiles.
pub const VOICES_DIR: &str = "voices";
/// Directory holding synthesis outputs.
pub const OUTPUT_DIR: &str = "generated_audios";

/// Resolved directories used by every component.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    pub base_dir: PathBuf,
    pub uploads_dir: PathBuf,
    pub voices_dir: PathBuf,
    pub output_dir: PathBuf,
}

impl Layout {
    /// Resolve the layout below `base_dir` without touching the filesystem.
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        let base_dir = base_dir.into();
        Self {
            uploads_dir: base_dir.join(UPLOADS_DIR),
            voices_dir: base_dir.join(VOICES_DIR),
            output_dir: base_dir.join(OUTPUT_DIR),
            base_dir,
        }
    }

    /// All managed directories.
    pub fn dirs(&self) -> [&Path; 3] {
        [&self.uploads_dir, &self.voices_dir, &self.output_dir]
    }
}

/// Create the layout below `base_dir` if absent and return the resolved paths.
///
/// Safe to call repeatedly; existing directories and their contents are left alone.
pub fn ensure_layout(base_dir: impl Into<PathBuf>) -> std::io::Result<Layout> {
    let layout = Layout::new(base_dir);

    for dir in layout.dirs() {
        std::fs::create_dir_all(dir)?;
    }

    log::debug!("Layout ready under {}", layout.base_dir.display());
    Ok(layout)
}
