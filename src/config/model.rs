//! Model server connection settings.

use std::time::Duration;

/// Fixed pretrained multilingual voice-cloning model.
pub const DEFAULT_MODEL_NAME: &str = "tts_models/multilingual/multi-dataset/your_tts";

/// Default local model server port.
pub const DEFAULT_PORT: u16 = 5002;

/// Settings for reaching the local model server.
#[derive(Debug, Clone, PartialEq)]
pub struct ModelConfig {
    pub host: String,
    pub port: u16,
    pub model_name: String,
    /// Upper bound for a single request, inference included.
    pub timeout: Duration,
}

impl ModelConfig {
    /// Create a config for the default model on `host:port`.
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
            ..Self::default()
        }
    }

    /// Base URL of the model server.
    pub fn base_url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            host: "localhost".to_string(),
            port: DEFAULT_PORT,
            model_name: DEFAULT_MODEL_NAME.to_string(),
            timeout: Duration::from_secs(600),
        }
    }
}
