//! Controller configuration.

use serde::{Deserialize, Serialize};

use crate::theme::DaySchedule;

/// Storage key the preference is persisted under by default.
pub const DEFAULT_STORAGE_KEY: &str = "theme";

/// Document attribute the effective theme is written to by default.
pub const DEFAULT_THEME_ATTRIBUTE: &str = "data-theme";

/// Settings for a [`ThemeController`](crate::ThemeController).
///
/// Built fluently, or deserialized with every field optional.
///
/// # Example
///
/// ```rust
/// use dusklight::{ControllerConfig, DaySchedule};
///
/// let config = ControllerConfig::new()
///     .storage_key("site-theme")
///     .schedule(DaySchedule::new(7, 19).unwrap());
///
/// assert_eq!(config.storage_key, "site-theme");
/// assert_eq!(config.attribute, "data-theme");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ControllerConfig {
    pub storage_key: String,
    pub attribute: String,
    pub schedule: DaySchedule,
}

impl ControllerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the storage key, returning the updated config for chaining.
    pub fn storage_key(mut self, key: impl Into<String>) -> Self {
        self.storage_key = key.into();
        self
    }

    /// Sets the document attribute name.
    pub fn attribute(mut self, name: impl Into<String>) -> Self {
        self.attribute = name.into();
        self
    }

    /// Sets the `auto` schedule.
    pub fn schedule(mut self, schedule: DaySchedule) -> Self {
        self.schedule = schedule;
        self
    }
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            attribute: DEFAULT_THEME_ATTRIBUTE.to_string(),
            schedule: DaySchedule::default(),
        }
    }
}
