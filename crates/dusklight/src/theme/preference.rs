//! The user's stored theme preference.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// What the user picked in a theme selector.
///
/// `Auto` defers to the clock; `Light` and `Dark` are fixed. The string
/// forms (`"auto"`, `"light"`, `"dark"`) are what gets persisted and what
/// selector controls carry as their value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreference {
    #[default]
    Auto,
    Light,
    Dark,
}

impl ThemePreference {
    /// Every preference, in selector order.
    pub const ALL: [ThemePreference; 3] = [
        ThemePreference::Auto,
        ThemePreference::Light,
        ThemePreference::Dark,
    ];

    /// Returns the persisted string form.
    pub fn as_str(self) -> &'static str {
        match self {
            ThemePreference::Auto => "auto",
            ThemePreference::Light => "light",
            ThemePreference::Dark => "dark",
        }
    }

    /// Interprets a raw stored value leniently.
    ///
    /// Absent values and anything outside `auto | light | dark` map to
    /// [`ThemePreference::Auto`]. Matching is exact: `"DARK"` is not `dark`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use dusklight::ThemePreference;
    ///
    /// assert_eq!(ThemePreference::from_stored(Some("dark")), ThemePreference::Dark);
    /// assert_eq!(ThemePreference::from_stored(Some("sepia")), ThemePreference::Auto);
    /// assert_eq!(ThemePreference::from_stored(None), ThemePreference::Auto);
    /// ```
    pub fn from_stored(raw: Option<&str>) -> Self {
        raw.and_then(|value| value.parse().ok()).unwrap_or_default()
    }
}

impl fmt::Display for ThemePreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when strict parsing of a preference fails.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown theme preference '{0}' (expected auto, light or dark)")]
pub struct ParsePreferenceError(pub String);

impl FromStr for ThemePreference {
    type Err = ParsePreferenceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ThemePreference::ALL
            .into_iter()
            .find(|pref| pref.as_str() == s)
            .ok_or_else(|| ParsePreferenceError(s.to_string()))
    }
}
