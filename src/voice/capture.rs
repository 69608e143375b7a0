//! Sample capture for recorded or uploaded voice clips.

use std::io::Cursor;
use std::path::{Path, PathBuf};

use thiserror::Error;
use uuid::Uuid;

use crate::config::Layout;

/// Recommended shortest reference clip, in seconds.
pub const ADVISED_MIN_SECS: f32 = 8.0;
/// Recommended longest reference clip, in seconds.
pub const ADVISED_MAX_SECS: f32 = 15.0;

/// Errors that can occur while capturing samples.
#[derive(Error, Debug)]
pub enum CaptureError {
    #[error("Sample is empty")]
    EmptySample,

    #[error("Invalid sample id: {0}")]
    InvalidId(String),

    #[error("Sample not found: {0}")]
    NotFound(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// A captured sample waiting to be promoted to a voice profile.
#[derive(Debug, Clone, PartialEq)]
pub struct SampleHandle {
    pub id: String,
    pub path: PathBuf,
    /// Clip length, when the bytes carry a readable WAV header.
    pub duration_secs: Option<f32>,
}

/// Persists raw audio bytes under the uploads directory.
pub struct SampleCapture {
    uploads_dir: PathBuf,
}

impl SampleCapture {
    pub fn new(layout: &Layout) -> Self {
        Self::with_dir(layout.uploads_dir.clone())
    }

    pub fn with_dir(uploads_dir: PathBuf) -> Self {
        Self { uploads_dir }
    }

    /// Write `raw` to `uploads/<uuid-hex>.wav`.
    ///
    /// The 8–15 second length is only advised: clips outside it, or bytes
    /// that do not parse as WAV, are saved anyway with a warning.
    pub fn capture(&self, raw: &[u8]) -> Result<SampleHandle, CaptureError> {
        if raw.is_empty() {
            return Err(CaptureError::EmptySample);
        }

        let id = Uuid::new_v4().simple().to_string();
        let path = self.uploads_dir.join(format!("{id}.wav"));

        std::fs::create_dir_all(&self.uploads_dir)?;
        std::fs::write(&path, raw)?;

        let duration_secs = wav_duration(raw);
        match duration_secs {
            Some(secs) if !(ADVISED_MIN_SECS..=ADVISED_MAX_SECS).contains(&secs) => {
                log::warn!(
                    "Sample {id} is {secs:.1}s long; {ADVISED_MIN_SECS}-{ADVISED_MAX_SECS}s works best"
                );
            }
            Some(secs) => log::debug!("Sample {id} is {secs:.1}s long"),
            None => log::warn!("Sample {id} has no readable WAV header"),
        }

        log::info!("Captured sample {} ({} bytes)", path.display(), raw.len());

        Ok(SampleHandle {
            id,
            path,
            duration_secs,
        })
    }

    /// Capture the contents of an existing file, e.g. an uploaded clip.
    pub fn capture_file(&self, source: &Path) -> Result<SampleHandle, CaptureError> {
        let raw = std::fs::read(source)?;
        self.capture(&raw)
    }

    /// Path of the sample with `id` inside the uploads directory.
    ///
    /// Ids are generated hex, so anything non-alphanumeric is rejected.
    pub fn sample_path(&self, id: &str) -> Result<PathBuf, CaptureError> {
        if id.is_empty() || !id.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(CaptureError::InvalidId(id.to_string()));
        }

        Ok(self.uploads_dir.join(format!("{id}.wav")))
    }

    /// List pending samples, sorted by id.
    pub fn list(&self) -> Result<Vec<SampleHandle>, CaptureError> {
        if !self.uploads_dir.exists() {
            return Ok(Vec::new());
        }

        let mut samples = Vec::new();

        for entry in std::fs::read_dir(&self.uploads_dir)? {
            let path = entry?.path();

            if !path.is_file() || !path.extension().is_some_and(|ext| ext == "wav") {
                continue;
            }

            let Some(id) = path.file_stem().and_then(|s| s.to_str()).map(str::to_string) else {
                continue;
            };

            let duration_secs = std::fs::read(&path).ok().and_then(|raw| wav_duration(&raw));
            samples.push(SampleHandle {
                id,
                path,
                duration_secs,
            });
        }

        samples.sort_by(|a, b| a.id.cmp(&b.id));
        Ok(samples)
    }

    /// Remove an abandoned sample.
    pub fn discard(&self, id: &str) -> Result<(), CaptureError> {
        let path = self.sample_path(id)?;

        if !path.exists() {
            return Err(CaptureError::NotFound(id.to_string()));
        }

        std::fs::remove_file(&path)?;
        log::info!("Discarded sample {id}");

        Ok(())
    }
}

/// Duration in seconds of WAV-encoded bytes, if the header is readable.
pub fn wav_duration(raw: &[u8]) -> Option<f32> {
    let reader = hound::WavReader::new(Cursor::new(raw)).ok()?;
    let sample_rate = reader.spec().sample_rate;

    if sample_rate == 0 {
        return None;
    }

    Some(reader.duration() as f32 / sample_rate as f32)
}
