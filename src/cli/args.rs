//! CLI argument definitions.

use std::path::PathBuf;

use clap::Parser;

use crate::config::{DEFAULT_PORT, ModelConfig};
use crate::voice::{CollisionPolicy, DEFAULT_VOICE};

/// Local voice-cloning text-to-speech with saved voice profiles.
#[derive(Parser, Debug)]
#[command(name = "voice-clone-tts")]
#[command(about = "Local voice-cloning text-to-speech with saved voice profiles")]
#[command(version)]
pub struct Args {
    /// Directory holding uploads/, voices/ and generated_audios/
    #[arg(long, default_value = ".")]
    pub base_dir: PathBuf,

    /// Model server host address
    #[arg(long, default_value = "localhost")]
    pub host: String,

    /// Model server port
    #[arg(long, default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Capture a WAV recording (8-15 seconds works best) as a new sample
    #[arg(short, long)]
    pub capture: Option<PathBuf>,

    /// Pending sample id to promote instead of capturing a new one
    #[arg(long, conflicts_with = "capture")]
    pub sample: Option<String>,

    /// Save the captured sample as a voice profile with this name
    #[arg(short, long)]
    pub name: Option<String>,

    /// What to do when the profile name is already taken
    #[arg(long, value_enum, default_value = "overwrite")]
    pub on_conflict: CollisionPolicy,

    /// List saved voice profiles
    #[arg(long)]
    pub list_voices: bool,

    /// List languages the model supports
    #[arg(long)]
    pub list_languages: bool,

    /// Text to synthesize
    #[arg(short, long)]
    pub generate: Option<String>,

    /// Voice profile to speak with
    #[arg(long, default_value = DEFAULT_VOICE)]
    pub voice: String,

    /// Output language
    #[arg(short, long, default_value = "en")]
    pub language: String,

    /// List previously generated audio, newest first
    #[arg(long)]
    pub list_outputs: bool,

    /// Delete a generated audio file by name
    #[arg(long)]
    pub delete_output: Option<String>,

    /// List captured samples not yet discarded
    #[arg(long)]
    pub list_samples: bool,

    /// Discard a captured sample by id
    #[arg(long)]
    pub discard_sample: Option<String>,

    /// Synthesize a fixed sentence to generated_audios/demo.wav
    #[arg(long)]
    pub demo: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    /// Model server settings from the connection flags.
    pub fn model_config(&self) -> ModelConfig {
        ModelConfig::new(self.host.clone(), self.port)
    }

    /// Default log filter; `RUST_LOG` still takes precedence.
    pub fn log_level(&self) -> &'static str {
        if self.verbose { "debug" } else { "info" }
    }

    /// Whether any action flag was given.
    pub fn has_action(&self) -> bool {
        self.capture.is_some()
            || self.sample.is_some()
            || self.list_voices
            || self.list_languages
            || self.generate.is_some()
            || self.list_outputs
            || self.delete_output.is_some()
            || self.list_samples
            || self.discard_sample.is_some()
            || self.demo
    }
}
