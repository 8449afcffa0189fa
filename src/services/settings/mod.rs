//! Settings persistence.

mod service;

pub use service::{SettingsError, SettingsService};
