//! Synthesis gateway implementation.

use std::path::PathBuf;
use std::sync::Arc;

use thiserror::Error;

use crate::backend::{BackendError, ModelCache, SpeechModel, SynthesizeRequest};
use crate::config::Layout;
use crate::output::OutputError;
use crate::voice::{CaptureError, DEFAULT_VOICE, VoiceError, VoiceProfileStore};

use super::language::{ResolvedLanguage, resolve_language};

/// Errors that can occur during TTS operations.
///
/// An unsupported language is never an error; it is remapped and reported
/// through [`ResolvedLanguage`].
#[derive(Error, Debug)]
pub enum TTSError {
    #[error("{0}")]
    Validation(String),

    #[error("Missing resource: {0}")]
    MissingResource(String),

    #[error("Model failure: {0}")]
    ModelFailure(BackendError),

    #[error("Filesystem error: {0}")]
    Filesystem(#[from] std::io::Error),
}

impl From<BackendError> for TTSError {
    fn from(err: BackendError) -> Self {
        match err {
            BackendError::IoError(e) => TTSError::Filesystem(e),
            other => TTSError::ModelFailure(other),
        }
    }
}

impl From<VoiceError> for TTSError {
    fn from(err: VoiceError) -> Self {
        match err {
            VoiceError::NotFound(name) => TTSError::MissingResource(format!("voice '{name}'")),
            VoiceError::InvalidName(msg) => TTSError::Validation(msg),
            VoiceError::AlreadyExists(name) => {
                TTSError::Validation(format!("Voice profile '{name}' already exists"))
            }
            VoiceError::IoError(e) => TTSError::Filesystem(e),
        }
    }
}

impl From<CaptureError> for TTSError {
    fn from(err: CaptureError) -> Self {
        match err {
            CaptureError::EmptySample => TTSError::Validation("Sample is empty".to_string()),
            CaptureError::InvalidId(id) => {
                TTSError::Validation(format!("Invalid sample id: {id}"))
            }
            CaptureError::NotFound(id) => TTSError::MissingResource(format!("sample '{id}'")),
            CaptureError::IoError(e) => TTSError::Filesystem(e),
        }
    }
}

impl From<OutputError> for TTSError {
    fn from(err: OutputError) -> Self {
        match err {
            OutputError::NotFound(name) => TTSError::MissingResource(format!("output '{name}'")),
            OutputError::InvalidName(msg) => TTSError::Validation(msg),
            OutputError::IoError(e) => TTSError::Filesystem(e),
        }
    }
}

/// What a synthesis call did, including silent degrades.
#[derive(Debug, Clone, PartialEq)]
pub struct SynthesisOutcome {
    pub path: PathBuf,
    pub language: ResolvedLanguage,
    pub reference: Option<PathBuf>,
    /// Profile that was requested but not found on disk.
    pub missing_profile: Option<String>,
}

/// Resolves voices and languages, then hands the request to the model.
pub struct SynthesisGateway<M: SpeechModel> {
    models: Arc<ModelCache<M>>,
    voices: VoiceProfileStore,
    output_dir: PathBuf,
}

impl<M: SpeechModel> SynthesisGateway<M> {
    pub fn new(models: Arc<ModelCache<M>>, layout: &Layout) -> Self {
        Self {
            models,
            voices: VoiceProfileStore::new(layout),
            output_dir: layout.output_dir.clone(),
        }
    }

    /// The shared model, loading it on first use.
    pub fn model(&self) -> Result<Arc<M>, TTSError> {
        Ok(self.models.get()?)
    }

    /// Languages offered for selection.
    pub fn languages(&self) -> Result<Vec<String>, TTSError> {
        Ok(self.model()?.supported_languages())
    }

    /// Synthesize `text` into `generated_audios/<output_name>`.
    ///
    /// `text` must already be non-empty.
    pub fn synthesize(
        &self,
        text: &str,
        voice: &str,
        language: &str,
        output_name: &str,
    ) -> Result<PathBuf, TTSError> {
        Ok(self.synthesize_detailed(text, voice, language, output_name)?.path)
    }

    /// Like [`synthesize`](Self::synthesize), also reporting fallbacks taken.
    pub fn synthesize_detailed(
        &self,
        text: &str,
        voice: &str,
        language: &str,
        output_name: &str,
    ) -> Result<SynthesisOutcome, TTSError> {
        let (reference, missing_profile) = self.resolve_reference(voice);

        let model = self.model()?;
        let language = resolve_language(model.as_ref(), language);

        let path = self.output_dir.join(output_name);

        let mut request = SynthesizeRequest::new(text, language.effective.clone());
        if let Some(speaker_wav) = &reference {
            log::info!("Using speaker_wav: {}", speaker_wav.display());
            request = request.with_speaker_wav(speaker_wav.clone());
        }

        model.synthesize_to_file(&request, &path)?;
        log::info!("Synthesized {} ({})", path.display(), language.effective);

        Ok(SynthesisOutcome {
            path,
            language,
            reference,
            missing_profile,
        })
    }

    fn resolve_reference(&self, voice: &str) -> (Option<PathBuf>, Option<String>) {
        if voice == DEFAULT_VOICE {
            return (None, None);
        }

        match self.voices.reference_path(voice) {
            Ok(path) => (Some(path), None),
            Err(e) => {
                log::warn!("Selected profile '{voice}' unavailable ({e}); using default voice");
                (None, Some(voice.to_string()))
            }
        }
    }
}
