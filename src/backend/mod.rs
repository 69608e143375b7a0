//! The speech model: capability trait, lazy cache, and server adapter.
//!
//! The model itself (multilingual zero-shot voice cloning) runs in a local
//! model server. This module only loads it, asks which languages it
//! speaks, and forwards synthesis requests.

mod accel;
mod cache;
mod client;
mod types;

pub use accel::{accelerator_available, device_label};
pub use cache::ModelCache;
pub use client::HttpModel;
pub use types::{BackendError, HealthResponse, LanguagesResponse, LoadRequest, SynthesizeRequest};

/// Capability contract of a loaded speech model.
///
/// Allows mock implementations in tests.
#[cfg_attr(test, mockall::automock)]
pub trait SpeechModel: Send + Sync {
    /// Languages the model advertises, in its declared order.
    ///
    /// Empty when the model does not advertise any.
    fn supported_languages(&self) -> Vec<String>;

    /// Synthesize `request` and write the audio to `destination`.
    fn synthesize_to_file(
        &self,
        request: &SynthesizeRequest,
        destination: &std::path::Path,
    ) -> Result<(), BackendError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    fn mock_with_languages(langs: &[&str]) -> MockSpeechModel {
        let langs: Vec<String> = langs.iter().map(|l| l.to_string()).collect();
        let mut mock = MockSpeechModel::new();
        mock.expect_supported_languages()
            .returning(move || langs.clone());
        mock
    }

    // ===========================================
    // ModelCache
    // ===========================================

    #[test]
    fn test_cache_loads_once() {
        let loads = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&loads);

        let cache = ModelCache::new(move || {
            counter.fetch_add(1, Ordering::SeqCst);
            Ok(mock_with_languages(&["en"]))
        });

        assert!(!cache.is_loaded());
        let first = cache.get().unwrap();
        let second = cache.get().unwrap();

        assert!(cache.is_loaded());
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(loads.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_cache_loads_once_across_threads() {
        let loads = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&loads);

        let cache = ModelCache::new(move || {
            counter.fetch_add(1, Ordering::SeqCst);
            std::thread::sleep(Duration::from_millis(50));
            Ok(mock_with_languages(&["en"]))
        });

        std::thread::scope(|scope| {
            for _ in 0..8 {
                scope.spawn(|| {
                    cache.get().unwrap();
                });
            }
        });

        assert_eq!(loads.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_cache_failed_load_is_not_cached() {
        let loads = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&loads);

        let cache = ModelCache::new(move || {
            if counter.fetch_add(1, Ordering::SeqCst) == 0 {
                Err(BackendError::LoadFailed("missing weights".to_string()))
            } else {
                Ok(mock_with_languages(&["en"]))
            }
        });

        assert!(matches!(cache.get(), Err(BackendError::LoadFailed(_))));
        assert!(!cache.is_loaded());
        assert!(cache.get().is_ok());
        assert_eq!(loads.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_cache_preloaded() {
        let cache = ModelCache::preloaded(mock_with_languages(&["en", "hi"]));

        assert!(cache.is_loaded());
        assert_eq!(cache.get().unwrap().supported_languages(), vec!["en", "hi"]);
    }

    // ===========================================
    // SpeechModel mock contract
    // ===========================================

    #[test]
    fn test_mock_model_synthesize() {
        let mut mock = MockSpeechModel::new();

        mock.expect_synthesize_to_file()
            .withf(|req, dest| {
                req.text == "Hello world"
                    && req.language == "en"
                    && req.speaker_wav == Some(PathBuf::from("/voices/alice.wav"))
                    && dest == PathBuf::from("/out/a.wav").as_path()
            })
            .times(1)
            .returning(|_, _| Ok(()));

        let request = SynthesizeRequest::new("Hello world", "en")
            .with_speaker_wav(PathBuf::from("/voices/alice.wav"));

        assert!(
            mock.synthesize_to_file(&request, PathBuf::from("/out/a.wav").as_path())
                .is_ok()
        );
    }

    // ===========================================
    // Wire types
    // ===========================================

    #[test]
    fn test_synthesize_request_builder() {
        let request = SynthesizeRequest::new("Hello", "hi");

        assert_eq!(request.text, "Hello");
        assert_eq!(request.language, "hi");
        assert_eq!(request.speaker_wav, None);

        let request = request.with_speaker_wav(PathBuf::from("voices/a.wav"));
        assert_eq!(request.speaker_wav, Some(PathBuf::from("voices/a.wav")));
    }

    #[test]
    fn test_languages_response_list() {
        let response: LanguagesResponse =
            serde_json::from_str(r#"{"languages": ["en", "fr-fr", "pt-br"]}"#).unwrap();
        assert_eq!(response.into_languages(), vec!["en", "fr-fr", "pt-br"]);
    }

    #[test]
    fn test_languages_response_mapping_keeps_order() {
        let response: LanguagesResponse =
            serde_json::from_str(r#"{"languages": {"hi": 2, "en": 0, "fr": 1}}"#).unwrap();
        assert_eq!(response.into_languages(), vec!["hi", "en", "fr"]);
    }

    #[test]
    fn test_languages_response_absent() {
        let missing: LanguagesResponse = serde_json::from_str("{}").unwrap();
        let null: LanguagesResponse = serde_json::from_str(r#"{"languages": null}"#).unwrap();

        assert!(missing.into_languages().is_empty());
        assert!(null.into_languages().is_empty());
    }

    #[test]
    fn test_health_response_deserialize() {
        let json = r#"{
            "status": "healthy",
            "model": "tts_models/multilingual/multi-dataset/your_tts",
            "cuda_available": false,
            "device": "cpu"
        }"#;

        let response: HealthResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.status, "healthy");
        assert!(!response.cuda_available);
    }

    #[test]
    fn test_load_request_serialize() {
        let request = LoadRequest {
            model_name: "tts_models/multilingual/multi-dataset/your_tts".to_string(),
            gpu: true,
        };

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["gpu"], serde_json::Value::Bool(true));
        assert_eq!(
            json["model_name"],
            "tts_models/multilingual/multi-dataset/your_tts"
        );
    }

    #[test]
    fn test_device_label() {
        assert_eq!(device_label(true), "GPU/MPS");
        assert_eq!(device_label(false), "CPU");
    }
}
