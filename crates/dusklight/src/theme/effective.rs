//! The concrete theme a document is rendered with.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::preference::ThemePreference;

/// A resolved theme: what actually ends up on the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EffectiveTheme {
    Light,
    Dark,
}

impl EffectiveTheme {
    /// Returns the attribute value for this theme.
    pub fn as_str(self) -> &'static str {
        match self {
            EffectiveTheme::Light => "light",
            EffectiveTheme::Dark => "dark",
        }
    }

    /// Returns the fixed theme a preference pins, or `None` for `auto`.
    pub fn pinned_by(preference: ThemePreference) -> Option<Self> {
        match preference {
            ThemePreference::Auto => None,
            ThemePreference::Light => Some(EffectiveTheme::Light),
            ThemePreference::Dark => Some(EffectiveTheme::Dark),
        }
    }
}

impl fmt::Display for EffectiveTheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pinned_by() {
        assert_eq!(EffectiveTheme::pinned_by(ThemePreference::Auto), None);
        assert_eq!(
            EffectiveTheme::pinned_by(ThemePreference::Light),
            Some(EffectiveTheme::Light)
        );
        assert_eq!(
            EffectiveTheme::pinned_by(ThemePreference::Dark),
            Some(EffectiveTheme::Dark)
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(EffectiveTheme::Light.to_string(), "light");
        assert_eq!(EffectiveTheme::Dark.to_string(), "dark");
    }
}
