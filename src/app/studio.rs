//! Orchestration boundary driven by the UI shell.

use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use uuid::Uuid;

use crate::backend::{ModelCache, SpeechModel};
use crate::config::Layout;
use crate::engine::{SynthesisGateway, SynthesisOutcome, TTSError};
use crate::output::{GeneratedAudio, OutputCatalog};
use crate::voice::{
    ADVISED_MAX_SECS, ADVISED_MIN_SECS, CaptureError, CollisionPolicy, DEFAULT_VOICE, SampleCapture,
    SampleHandle, VoiceProfile, VoiceProfileStore,
};

/// Sentence used by the smoke test.
pub const DEMO_TEXT: &str = "Hello! This is a quick test of the upgraded XTTS system.";
pub const DEMO_FILE_NAME: &str = "demo.wav";
pub const DEMO_LANGUAGE: &str = "en";

/// A user-visible message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Info(String),
    Success(String),
    Warning(String),
    Error(String),
}

impl Notice {
    pub fn is_error(&self) -> bool {
        matches!(self, Notice::Error(_))
    }

    pub fn message(&self) -> &str {
        match self {
            Notice::Info(msg) | Notice::Success(msg) | Notice::Warning(msg) | Notice::Error(msg) => {
                msg
            }
        }
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notice::Info(msg) => write!(f, "{msg}"),
            Notice::Success(msg) => write!(f, "✓ {msg}"),
            Notice::Warning(msg) => write!(f, "warning: {msg}"),
            Notice::Error(msg) => write!(f, "error: {msg}"),
        }
    }
}

/// Result of one user action: an optional value plus messages to show.
#[derive(Debug)]
pub struct Reply<T> {
    pub value: Option<T>,
    pub notices: Vec<Notice>,
}

impl<T> Reply<T> {
    fn done(value: T, notices: Vec<Notice>) -> Self {
        Self {
            value: Some(value),
            notices,
        }
    }

    fn failed(message: impl Into<String>) -> Self {
        Self {
            value: None,
            notices: vec![Notice::Error(message.into())],
        }
    }

    pub fn is_ok(&self) -> bool {
        self.value.is_some()
    }

    pub fn has_errors(&self) -> bool {
        self.notices.iter().any(Notice::is_error)
    }
}

/// Every action the UI offers, with input checks and error recovery.
///
/// No method returns an error: failures become [`Notice::Error`] entries.
pub struct Studio<M: SpeechModel> {
    capture: SampleCapture,
    voices: VoiceProfileStore,
    gateway: SynthesisGateway<M>,
    outputs: OutputCatalog,
}

impl<M: SpeechModel> Studio<M> {
    pub fn new(layout: &Layout, models: Arc<ModelCache<M>>) -> Self {
        Self {
            capture: SampleCapture::new(layout),
            voices: VoiceProfileStore::new(layout),
            gateway: SynthesisGateway::new(models, layout),
            outputs: OutputCatalog::new(layout),
        }
    }

    /// Set how profile name collisions are handled.
    pub fn with_collision_policy(mut self, policy: CollisionPolicy) -> Self {
        self.voices = self.voices.with_policy(policy);
        self
    }

    /// Save recorded or uploaded bytes as a pending sample.
    pub fn capture(&self, raw: &[u8]) -> Reply<SampleHandle> {
        if raw.is_empty() {
            return Reply::failed("No audio received.");
        }

        captured(self.capture.capture(raw))
    }

    /// Capture the contents of an uploaded file.
    pub fn capture_file(&self, source: &Path) -> Reply<SampleHandle> {
        captured(self.capture.capture_file(source))
    }

    /// Promote a captured sample to a named voice profile.
    pub fn save_profile(&self, sample_path: &Path, profile_name: &str) -> Reply<VoiceProfile> {
        let profile_name = profile_name.trim();
        if profile_name.is_empty() {
            return Reply::failed("Please enter a profile name.");
        }

        match self.voices.save(sample_path, profile_name) {
            Ok(profile) => {
                let notice = Notice::Success(format!("Saved profile: `{}`", profile.name));
                Reply::done(profile, vec![notice])
            }
            Err(e) => Reply::failed(format!("Failed to save profile: {}", TTSError::from(e))),
        }
    }

    /// Voice choices, the default voice first.
    pub fn voices(&self) -> Reply<Vec<String>> {
        match self.voices.list() {
            Ok(voices) => Reply::done(voices, Vec::new()),
            Err(e) => Reply::failed(format!("Failed to list voices: {}", TTSError::from(e))),
        }
    }

    /// Languages the model offers. Loads the model on first use.
    pub fn languages(&self) -> Reply<Vec<String>> {
        match self.gateway.languages() {
            Ok(languages) => Reply::done(languages, Vec::new()),
            Err(e) => Reply::failed(format!("Model unavailable: {e}")),
        }
    }

    /// Synthesize `text` into a freshly named output file.
    pub fn generate(&self, text: &str, voice: &str, language: &str) -> Reply<SynthesisOutcome> {
        if text.trim().is_empty() {
            return Reply::failed("Please enter some text.");
        }

        let output_name = format!("{}.wav", Uuid::new_v4().simple());
        self.generate_to(text, voice, language, &output_name)
    }

    /// Synthesize the fixed smoke-test sentence to `demo.wav`.
    pub fn demo(&self) -> Reply<SynthesisOutcome> {
        self.generate_to(DEMO_TEXT, DEFAULT_VOICE, DEMO_LANGUAGE, DEMO_FILE_NAME)
    }

    fn generate_to(
        &self,
        text: &str,
        voice: &str,
        language: &str,
        output_name: &str,
    ) -> Reply<SynthesisOutcome> {
        match self
            .gateway
            .synthesize_detailed(text, voice, language, output_name)
        {
            Ok(outcome) => {
                let mut notices = Vec::new();

                if let Some(name) = &outcome.missing_profile {
                    notices.push(Notice::Warning(format!(
                        "Selected profile `{name}` not found on disk; using default voice."
                    )));
                }

                if outcome.language.fell_back {
                    notices.push(Notice::Warning(format!(
                        "Language `{}` is not available; using `{}`.",
                        outcome.language.requested, outcome.language.effective
                    )));
                }

                notices.push(Notice::Success(format!(
                    "Done! Saved: `{}`",
                    outcome.path.display()
                )));

                Reply::done(outcome, notices)
            }
            Err(e) => Reply::failed(format!("Generation failed: {e}")),
        }
    }

    /// Generated files, newest first.
    pub fn outputs(&self) -> Reply<Vec<GeneratedAudio>> {
        match self.outputs.list() {
            Ok(outputs) => {
                let notices = if outputs.is_empty() {
                    vec![Notice::Info("No generated audios yet.".to_string())]
                } else {
                    Vec::new()
                };
                Reply::done(outputs, notices)
            }
            Err(e) => Reply::failed(format!("Failed to list outputs: {}", TTSError::from(e))),
        }
    }

    /// Delete one generated file.
    pub fn delete_output(&self, file_name: &str) -> Reply<()> {
        match self.outputs.delete(file_name) {
            Ok(()) => Reply::done((), vec![Notice::Success(format!("Deleted `{file_name}`"))]),
            Err(e) => Reply::failed(format!(
                "Failed to delete `{file_name}`: {}",
                TTSError::from(e)
            )),
        }
    }

    /// Captured samples not yet discarded.
    pub fn samples(&self) -> Reply<Vec<SampleHandle>> {
        match self.capture.list() {
            Ok(samples) => Reply::done(samples, Vec::new()),
            Err(e) => Reply::failed(format!("Failed to list samples: {}", TTSError::from(e))),
        }
    }

    /// Remove an abandoned sample.
    pub fn discard_sample(&self, id: &str) -> Reply<()> {
        match self.capture.discard(id) {
            Ok(()) => Reply::done((), vec![Notice::Success(format!("Discarded sample `{id}`"))]),
            Err(e) => Reply::failed(format!(
                "Failed to discard sample `{id}`: {}",
                TTSError::from(e)
            )),
        }
    }

    /// Path a pending sample is stored at.
    pub fn sample_path(&self, id: &str) -> Reply<PathBuf> {
        match self.capture.sample_path(id) {
            Ok(path) => Reply::done(path, Vec::new()),
            Err(e) => Reply::failed(format!("Failed to find sample `{id}`: {}", TTSError::from(e))),
        }
    }
}

fn captured(result: Result<SampleHandle, CaptureError>) -> Reply<SampleHandle> {
    match result {
        Ok(handle) => {
            let file_name = format!("{}.wav", handle.id);
            let mut notices = vec![Notice::Success(format!("Sample saved: `{file_name}`"))];
            if let Some(warning) = duration_warning(handle.duration_secs) {
                notices.push(warning);
            }
            Reply::done(handle, notices)
        }
        Err(e) => Reply::failed(format!("Failed to save sample: {}", TTSError::from(e))),
    }
}

fn duration_warning(duration_secs: Option<f32>) -> Option<Notice> {
    match duration_secs {
        Some(secs) if !(ADVISED_MIN_SECS..=ADVISED_MAX_SECS).contains(&secs) => {
            Some(Notice::Warning(format!(
                "Sample is {secs:.1}s long; {ADVISED_MIN_SECS}–{ADVISED_MAX_SECS} seconds works best."
            )))
        }
        Some(_) => None,
        None => Some(Notice::Warning(
            "Sample is not a readable WAV file; cloning may fail.".to_string(),
        )),
    }
}
