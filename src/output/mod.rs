//! Generated audio listing and deletion.

mod catalog;

pub use catalog::{GeneratedAudio, OutputCatalog, OutputError};
