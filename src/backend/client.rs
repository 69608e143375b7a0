//! HTTP adapter for the local model server.

use std::path::Path;

use crate::config::ModelConfig;

use super::SpeechModel;
use super::types::{BackendError, HealthResponse, LanguagesResponse, LoadRequest, SynthesizeRequest};

/// A model loaded on the local model server.
pub struct HttpModel {
    base_url: String,
    client: reqwest::blocking::Client,
    model_name: String,
    languages: Vec<String>,
}

impl HttpModel {
    /// Load `config.model_name` on the server and read its advertised languages.
    pub fn load(config: &ModelConfig, gpu: bool) -> Result<Self, BackendError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| BackendError::ConnectionFailed(e.to_string()))?;

        let mut model = Self {
            base_url: config.base_url(),
            client,
            model_name: config.model_name.clone(),
            languages: Vec::new(),
        };

        let status = model.request_load(gpu)?;
        log::info!(
            "Model {} ready on {} (cuda_available={})",
            status.model,
            status.device,
            status.cuda_available
        );

        model.languages = model.fetch_languages()?;
        if model.languages.is_empty() {
            log::info!("Model does not advertise languages; requests pass through unchecked");
        } else {
            log::debug!("Model languages: {}", model.languages.join(", "));
        }

        Ok(model)
    }

    fn request_load(&self, gpu: bool) -> Result<HealthResponse, BackendError> {
        let url = format!("{}/load", self.base_url);
        let body = LoadRequest {
            model_name: self.model_name.clone(),
            gpu,
        };

        let response = self
            .client
            .post(&url)
            .json(&body)
            .send()
            .map_err(|e| BackendError::ConnectionFailed(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let detail = response.text().unwrap_or_default();
            return Err(BackendError::LoadFailed(format!(
                "{}: {status} {detail}",
                self.model_name
            )));
        }

        response
            .json()
            .map_err(|e| BackendError::InvalidResponse(e.to_string()))
    }

    fn fetch_languages(&self) -> Result<Vec<String>, BackendError> {
        let url = format!("{}/languages", self.base_url);

        let response = self
            .client
            .get(&url)
            .send()
            .map_err(|e| BackendError::ConnectionFailed(e.to_string()))?;

        // Older servers have no such endpoint; treat as "not advertised".
        if response.status().as_u16() == 404 {
            return Ok(Vec::new());
        }

        if !response.status().is_success() {
            return Err(BackendError::RequestFailed(format!(
                "Status: {}",
                response.status()
            )));
        }

        let body: LanguagesResponse = response
            .json()
            .map_err(|e| BackendError::InvalidResponse(e.to_string()))?;

        Ok(body.into_languages())
    }
}

impl SpeechModel for HttpModel {
    fn supported_languages(&self) -> Vec<String> {
        self.languages.clone()
    }

    fn synthesize_to_file(
        &self,
        request: &SynthesizeRequest,
        destination: &Path,
    ) -> Result<(), BackendError> {
        let url = format!("{}/synthesize", self.base_url);

        let mut form = reqwest::blocking::multipart::Form::new()
            .text("text", request.text.clone())
            .text("language", request.language.clone());

        if let Some(speaker_wav) = &request.speaker_wav {
            let audio_data = std::fs::read(speaker_wav)?;

            let file_name = speaker_wav
                .file_name()
                .and_then(|n| n.to_str())
                .unwrap_or("speaker.wav");

            let file_part = reqwest::blocking::multipart::Part::bytes(audio_data)
                .file_name(file_name.to_string())
                .mime_str("audio/wav")
                .map_err(|e| BackendError::RequestFailed(e.to_string()))?;

            form = form.part("speaker_wav", file_part);
        }

        let response = self
            .client
            .post(&url)
            .multipart(form)
            .send()
            .map_err(|e| BackendError::ConnectionFailed(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let detail = response.text().unwrap_or_default();
            return Err(BackendError::RequestFailed(format!("Status: {status} {detail}")));
        }

        let audio = response
            .bytes()
            .map_err(|e| BackendError::InvalidResponse(e.to_string()))?;

        std::fs::write(destination, &audio)?;
        log::debug!("Wrote {} bytes to {}", audio.len(), destination.display());

        Ok(())
    }
}
