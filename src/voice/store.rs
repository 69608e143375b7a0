//! File-backed voice profile catalog.

use std::path::{Path, PathBuf};

use thiserror::Error;
use uuid::Uuid;

use crate::config::Layout;

/// Sentinel listed first, meaning "synthesize without a reference voice".
pub const DEFAULT_VOICE: &str = "Default (model voice)";

/// Errors that can occur during voice management.
#[derive(Error, Debug)]
pub enum VoiceError {
    #[error("Voice not found: {0}")]
    NotFound(String),

    #[error("Invalid voice name: {0}")]
    InvalidName(String),

    #[error("Voice already exists: {0}")]
    AlreadyExists(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// What to do when a sanitized name is already taken.
#[derive(clap::ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CollisionPolicy {
    /// Replace the existing profile (last write wins)
    #[default]
    Overwrite,

    /// Refuse to save
    Reject,

    /// Save under the first free `<name>_<n>`
    Suffix,
}

/// A persisted reference clip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VoiceProfile {
    pub name: String,
    pub reference_audio_path: PathBuf,
}

/// Manages `voices/<name>.wav` files.
pub struct VoiceProfileStore {
    voices_dir: PathBuf,
    policy: CollisionPolicy,
}

impl VoiceProfileStore {
    pub fn new(layout: &Layout) -> Self {
        Self::with_dir(layout.voices_dir.clone())
    }

    /// Create a store over a custom directory.
    pub fn with_dir(voices_dir: PathBuf) -> Self {
        Self {
            voices_dir,
            policy: CollisionPolicy::default(),
        }
    }

    /// Set the collision policy used by [`save`](Self::save).
    pub fn with_policy(mut self, policy: CollisionPolicy) -> Self {
        self.policy = policy;
        self
    }

    fn profile_path(&self, name: &str) -> PathBuf {
        self.voices_dir.join(format!("{name}.wav"))
    }

    /// Copy a captured sample into the store under a sanitized name.
    pub fn save(&self, sample_path: &Path, requested_name: &str) -> Result<VoiceProfile, VoiceError> {
        let base = sanitize_profile_name(requested_name).unwrap_or_else(generated_profile_id);
        let name = self.claim_name(base)?;

        std::fs::create_dir_all(&self.voices_dir)?;

        let dst = self.profile_path(&name);
        std::fs::copy(sample_path, &dst)?;
        log::info!("Saved voice profile '{}' to {}", name, dst.display());

        Ok(VoiceProfile {
            name,
            reference_audio_path: dst,
        })
    }

    fn claim_name(&self, base: String) -> Result<String, VoiceError> {
        if !self.profile_path(&base).exists() {
            return Ok(base);
        }

        match self.policy {
            CollisionPolicy::Overwrite => {
                log::warn!("Voice profile '{base}' exists and will be overwritten");
                Ok(base)
            }
            CollisionPolicy::Reject => Err(VoiceError::AlreadyExists(base)),
            CollisionPolicy::Suffix => {
                let mut n = 2;
                loop {
                    let candidate = format!("{base}_{n}");
                    if !self.profile_path(&candidate).exists() {
                        return Ok(candidate);
                    }
                    n += 1;
                }
            }
        }
    }

    /// The sentinel followed by every saved profile, sorted by file name.
    ///
    /// Ordering is by `<name>.wav`, so `a-2` lists before `a`.
    /// Re-reads the directory on every call.
    pub fn list(&self) -> Result<Vec<String>, VoiceError> {
        let mut file_names = Vec::new();

        if self.voices_dir.exists() {
            for entry in std::fs::read_dir(&self.voices_dir)? {
                let path = entry?.path();

                if path.is_file()
                    && path.extension().is_some_and(|ext| ext == "wav")
                    && let Some(file_name) = path.file_name().and_then(|s| s.to_str())
                {
                    file_names.push(file_name.to_string());
                }
            }
        }

        file_names.sort();

        let mut voices = Vec::with_capacity(file_names.len() + 1);
        voices.push(DEFAULT_VOICE.to_string());
        voices.extend(
            file_names
                .into_iter()
                .filter_map(|name| name.strip_suffix(".wav").map(str::to_string)),
        );

        Ok(voices)
    }

    /// Reference clip of a saved profile.
    pub fn reference_path(&self, name: &str) -> Result<PathBuf, VoiceError> {
        if name == DEFAULT_VOICE {
            return Err(VoiceError::NotFound(name.to_string()));
        }

        validate_name(name)?;

        let path = self.profile_path(name);

        if !path.is_file() {
            return Err(VoiceError::NotFound(name.to_string()));
        }

        Ok(path)
    }
}

/// Keep `[A-Za-z0-9_-]` and strip leading/trailing `_`/`-`.
///
/// Returns `None` when nothing usable remains.
pub fn sanitize_profile_name(name: &str) -> Option<String> {
    let kept: String = name
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '_' || *c == '-')
        .collect();

    let trimmed = kept.trim_matches(|c: char| c == '_' || c == '-');

    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Fresh `profile_<8 hex>` id for names that sanitize to nothing.
pub fn generated_profile_id() -> String {
    let hex = Uuid::new_v4().simple().to_string();
    format!("profile_{}", &hex[..8])
}

fn validate_name(name: &str) -> Result<(), VoiceError> {
    if name.is_empty() {
        return Err(VoiceError::InvalidName("Name cannot be empty".to_string()));
    }

    // Prevent path traversal
    if name.contains('/') || name.contains('\\') || name.contains("..") {
        return Err(VoiceError::InvalidName(
            "Name cannot contain path separators".to_string(),
        ));
    }

    Ok(())
}
