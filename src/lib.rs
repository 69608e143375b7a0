//! voice-clone-tts: local voice-cloning text-to-speech.
//!
//! Captures short voice samples, keeps them as named voice profiles, and
//! drives a pretrained multilingual zero-shot cloning model served locally.

pub mod app;
pub mod backend;
pub mod cli;
pub mod config;
pub mod engine;
pub mod output;
pub mod voice;
