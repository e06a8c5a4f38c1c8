//! UI collaborators the controller drives.
//!
//! The controller never touches a real document. It talks to a
//! [`DocumentRoot`] for the theme marker and to [`ThemeSelector`]s for the
//! controls that display the preference. Browser implementations live in
//! `dusklight-web`; the in-memory ones here serve native hosts and tests.

use std::collections::HashMap;

/// The root element the theme marker is written to.
pub trait DocumentRoot {
    /// Sets attribute `name` to `value`, replacing any previous value.
    fn set_attribute(&mut self, name: &str, value: &str);

    /// Returns the current value of attribute `name`.
    fn attribute(&self, name: &str) -> Option<String>;
}

/// A control that displays the current preference.
pub trait ThemeSelector {
    /// Stable identifier, e.g. `"theme-select"` or `"theme-select-mobile"`.
    fn id(&self) -> &str;

    /// The value currently shown.
    fn value(&self) -> String;

    /// Changes the shown value without raising a change notification.
    fn set_value(&mut self, value: &str);
}

/// Attribute map standing in for a document element.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryDocument {
    attributes: HashMap<String, String>,
}

impl MemoryDocument {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DocumentRoot for MemoryDocument {
    fn set_attribute(&mut self, name: &str, value: &str) {
        self.attributes.insert(name.to_string(), value.to_string());
    }

    fn attribute(&self, name: &str) -> Option<String> {
        self.attributes.get(name).cloned()
    }
}

/// A selector that only holds its value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemorySelector {
    id: String,
    value: String,
}

impl MemorySelector {
    /// Creates a selector showing an empty value.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            value: String::new(),
        }
    }
}

impl ThemeSelector for MemorySelector {
    fn id(&self) -> &str {
        &self.id
    }

    fn value(&self) -> String {
        self.value.clone()
    }

    fn set_value(&mut self, value: &str) {
        self.value = value.to_string();
    }
}
