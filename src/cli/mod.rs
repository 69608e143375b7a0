//! CLI argument parsing.

mod args;

pub use args::Args;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_PORT;
    use crate::voice::{CollisionPolicy, DEFAULT_VOICE};
    use clap::Parser;
    use std::path::PathBuf;

    #[test]
    fn test_defaults() {
        let args = Args::try_parse_from(["voice-clone-tts"]).unwrap();

        assert_eq!(args.base_dir, PathBuf::from("."));
        assert_eq!(args.voice, DEFAULT_VOICE);
        assert_eq!(args.language, "en");
        assert_eq!(args.on_conflict, CollisionPolicy::Overwrite);
        assert_eq!(args.port, DEFAULT_PORT);
        assert!(!args.has_action());
        assert_eq!(args.log_level(), "info");
    }

    #[test]
    fn test_capture_and_name() {
        let args =
            Args::try_parse_from(["voice-clone-tts", "-c", "me.wav", "-n", "soham_1"]).unwrap();

        assert_eq!(args.capture, Some(PathBuf::from("me.wav")));
        assert_eq!(args.name.as_deref(), Some("soham_1"));
        assert!(args.has_action());
    }

    #[test]
    fn test_sample_conflicts_with_capture() {
        let result = Args::try_parse_from([
            "voice-clone-tts",
            "--capture",
            "me.wav",
            "--sample",
            "abc123",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_generate_with_voice_and_language() {
        let args = Args::try_parse_from([
            "voice-clone-tts",
            "-g",
            "Namaste",
            "--voice",
            "soham_1",
            "-l",
            "hi",
        ])
        .unwrap();

        assert_eq!(args.generate.as_deref(), Some("Namaste"));
        assert_eq!(args.voice, "soham_1");
        assert_eq!(args.language, "hi");
    }

    #[test]
    fn test_on_conflict_values() {
        let args =
            Args::try_parse_from(["voice-clone-tts", "--on-conflict", "suffix"]).unwrap();
        assert_eq!(args.on_conflict, CollisionPolicy::Suffix);

        let args =
            Args::try_parse_from(["voice-clone-tts", "--on-conflict", "reject"]).unwrap();
        assert_eq!(args.on_conflict, CollisionPolicy::Reject);

        assert!(Args::try_parse_from(["voice-clone-tts", "--on-conflict", "merge"]).is_err());
    }

    #[test]
    fn test_model_config_from_flags() {
        let args =
            Args::try_parse_from(["voice-clone-tts", "--host", "10.0.0.2", "--port", "8080"])
                .unwrap();

        assert_eq!(args.model_config().base_url(), "http://10.0.0.2:8080");
    }

    #[test]
    fn test_verbose_raises_log_level() {
        let args = Args::try_parse_from(["voice-clone-tts", "-v", "--demo"]).unwrap();

        assert_eq!(args.log_level(), "debug");
        assert!(args.demo);
        assert!(args.has_action());
    }
}
