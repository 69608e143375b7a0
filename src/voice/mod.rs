//! Voice sample capture and the voice profile store.
//!
//! Captured clips land in `uploads/` under a generated id. Naming one
//! promotes it by copying its bytes to `voices/<sanitized-name>.wav`.

mod capture;
mod store;

pub use capture::{
    ADVISED_MAX_SECS, ADVISED_MIN_SECS, CaptureError, SampleCapture, SampleHandle, wav_duration,
};
pub use store::{
    CollisionPolicy, DEFAULT_VOICE, VoiceError, VoiceProfile, VoiceProfileStore,
    generated_profile_id, sanitize_profile_name,
};
