//! Startup configuration: directory layout and model server settings.
//!
//! Nothing here is read from the environment. The layout is created once
//! at startup and passed explicitly to each component.

mod layout;
mod model;

pub use layout::{Layout, OUTPUT_DIR, UPLOADS_DIR, VOICES_DIR, ensure_layout};
pub use model::{DEFAULT_MODEL_NAME, DEFAULT_PORT, ModelConfig};
