//! Language validation against the model's advertised set.

use crate::backend::SpeechModel;

/// Outcome of checking a requested language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedLanguage {
    pub requested: String,
    /// Language actually passed to the model.
    pub effective: String,
    pub fell_back: bool,
}

/// Check `requested` against the languages `model` advertises.
///
/// A model that advertises nothing gets the request unchanged. An
/// unsupported request becomes the first advertised language.
pub fn resolve_language<M: SpeechModel + ?Sized>(model: &M, requested: &str) -> ResolvedLanguage {
    let available = model.supported_languages();

    let effective = match available.first() {
        None => requested.to_string(),
        Some(_) if available.iter().any(|lang| lang == requested) => requested.to_string(),
        Some(fallback) => {
            log::warn!(
                "Requested language '{requested}' not available. Using fallback: '{fallback}'"
            );
            fallback.clone()
        }
    };

    ResolvedLanguage {
        fell_back: effective != requested,
        requested: requested.to_string(),
        effective,
    }
}
