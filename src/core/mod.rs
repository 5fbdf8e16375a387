//! Core application infrastructure
//!
//! Settings persistence and the error types that go with it. Nothing here
//! knows about chess rules; see [`crate::game`] for those.

pub mod error;
pub mod settings;

pub use error::{CoreError, CoreResult};
pub use settings::{load_settings, read_settings, save_settings, settings_path, DisplaySettings};
