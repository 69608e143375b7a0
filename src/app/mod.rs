//! The orchestration boundary.
//!
//! [`Studio`] validates user input before it reaches the components and
//! turns every failure into a [`Notice`], so no action can take the process
//! down.

mod studio;

pub use studio::{DEMO_FILE_NAME, DEMO_LANGUAGE, DEMO_TEXT, Notice, Reply, Studio};
