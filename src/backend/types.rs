//! Model server request/response types.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur when loading or calling the speech model.
#[derive(Error, Debug)]
pub enum BackendError {
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Model load failed: {0}")]
    LoadFailed(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Health/load status reported by the model server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub model: String,
    pub cuda_available: bool,
    pub device: String,
}

/// Ask the server to load a model onto CPU or an accelerator.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoadRequest {
    pub model_name: String,
    pub gpu: bool,
}

/// Languages advertised by the loaded model.
///
/// Servers report `null`, a list, or a mapping keyed by language code.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LanguagesResponse {
    #[serde(default)]
    pub languages: Option<serde_json::Value>,
}

impl LanguagesResponse {
    /// Normalize into an ordered list. Mapping keys keep document order.
    pub fn into_languages(self) -> Vec<String> {
        match self.languages {
            Some(serde_json::Value::Array(items)) => items
                .into_iter()
                .filter_map(|item| match item {
                    serde_json::Value::String(code) => Some(code),
                    _ => None,
                })
                .collect(),
            Some(serde_json::Value::Object(map)) => map.into_iter().map(|(code, _)| code).collect(),
            _ => Vec::new(),
        }
    }
}

/// Request for speech synthesis.
#[derive(Debug, Clone, PartialEq)]
pub struct SynthesizeRequest {
    pub text: String,
    pub language: String,
    /// Reference clip for zero-shot cloning; `None` uses the model's own voice.
    pub speaker_wav: Option<PathBuf>,
}

impl SynthesizeRequest {
    /// Create a new synthesis request using the model's default voice.
    pub fn new(text: impl Into<String>, language: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            language: language.into(),
            speaker_wav: None,
        }
    }

    /// Set the reference clip.
    pub fn with_speaker_wav(mut self, path: PathBuf) -> Self {
        self.speaker_wav = Some(path);
        self
    }
}
