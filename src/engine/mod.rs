//! Synthesis gateway.
//!
//! This module resolves the selected voice profile and the requested
//! language, then drives the shared speech model to write one output file.

mod language;
mod tts;

pub use language::{ResolvedLanguage, resolve_language};
pub use tts::{SynthesisGateway, SynthesisOutcome, TTSError};
