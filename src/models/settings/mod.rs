// Settings module
// Application preferences persisted as TOML

use serde::{Deserialize, Serialize};

/// Light or dark colour scheme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    pub fn is_dark(self) -> bool {
        matches!(self, ThemeMode::Dark)
    }
}

/// How the store picks the id of the next reservation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IdPolicy {
    /// Counter that only ever grows; ids are never handed out twice
    #[default]
    Sequential,
    /// Number of held reservations plus one, skipping ids still in use
    CountPlusOne,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub theme: ThemeMode,
    /// chrono format string used for reservation dates in the list
    pub date_format: String,
    pub id_policy: IdPolicy,
    /// Ask before deleting a reservation
    pub confirm_delete: bool,
    pub window_width: f32,
    pub window_height: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            theme: ThemeMode::Light,
            date_format: "%a %b %d %Y".to_string(),
            id_policy: IdPolicy::Sequential,
            confirm_delete: true,
            window_width: 420.0,
            window_height: 720.0,
        }
    }
}

impl Settings {
    /// Check values that would otherwise break rendering
    pub fn validate(&self) -> Result<(), String> {
        if self.date_format.trim().is_empty() {
            return Err("Date format cannot be empty".to_string());
        }
        if !self.window_width.is_finite() || !self.window_height.is_finite() {
            return Err("Window size must be a finite number".to_string());
        }
        if self.window_width < 200.0 || self.window_height < 200.0 {
            return Err("Window size must be at least 200x200".to_string());
        }
        Ok(())
    }
}
