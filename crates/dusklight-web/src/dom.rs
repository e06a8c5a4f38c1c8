//! `web-sys` implementations of the dusklight seams.

use dusklight::nav::ClassList;
use dusklight::{Clock, DocumentRoot, PreferenceStore, StorageError, ThemeSelector};
use tracing::warn;
use web_sys::{DomTokenList, Element, HtmlSelectElement, Storage, Window};

use crate::error::describe;

/// `window.localStorage`.
///
/// Browsers may refuse storage access (privacy modes, sandboxed frames).
/// The store then reports [`StorageError::Unavailable`] on every call and
/// the controller runs on its in-memory preference.
#[derive(Debug, Clone)]
pub struct LocalStorage {
    storage: Option<Storage>,
}

impl LocalStorage {
    pub fn from_window(window: &Window) -> Self {
        let storage = match window.local_storage() {
            Ok(storage) => storage,
            Err(e) => {
                warn!(error = %describe(&e), "localStorage access denied");
                None
            }
        };
        Self { storage }
    }

    fn storage(&self) -> Result<&Storage, StorageError> {
        self.storage
            .as_ref()
            .ok_or_else(|| StorageError::Unavailable("localStorage is not available".into()))
    }
}

impl PreferenceStore for LocalStorage {
    fn load(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.storage()?
            .get_item(key)
            .map_err(|e| StorageError::Backend(describe(&e)))
    }

    fn save(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.storage()?
            .set_item(key, value)
            .map_err(|e| StorageError::Backend(describe(&e)))
    }
}

/// The document's root element (`<html>`).
#[derive(Debug, Clone)]
pub struct RootElement(pub Element);

impl DocumentRoot for RootElement {
    fn set_attribute(&mut self, name: &str, value: &str) {
        if let Err(e) = self.0.set_attribute(name, value) {
            warn!(attribute = name, error = %describe(&e), "failed to set theme attribute");
        }
    }

    fn attribute(&self, name: &str) -> Option<String> {
        self.0.get_attribute(name)
    }
}

/// A `<select>` control showing the preference.
#[derive(Debug, Clone)]
pub struct SelectControl {
    id: String,
    element: HtmlSelectElement,
}

impl SelectControl {
    pub fn new(id: impl Into<String>, element: HtmlSelectElement) -> Self {
        Self {
            id: id.into(),
            element,
        }
    }

    pub fn element(&self) -> &HtmlSelectElement {
        &self.element
    }
}

impl ThemeSelector for SelectControl {
    fn id(&self) -> &str {
        &self.id
    }

    fn value(&self) -> String {
        self.element.value()
    }

    fn set_value(&mut self, value: &str) {
        // Programmatic assignment does not fire `change`.
        self.element.set_value(value);
    }
}

/// An element's `classList`.
#[derive(Debug, Clone)]
pub struct ElementClasses(pub DomTokenList);

impl ElementClasses {
    pub fn of(element: &Element) -> Self {
        Self(element.class_list())
    }
}

impl ClassList for ElementClasses {
    fn add(&mut self, class: &str) {
        if let Err(e) = self.0.add_1(class) {
            warn!(class, error = %describe(&e), "failed to add class");
        }
    }

    fn remove(&mut self, class: &str) {
        if let Err(e) = self.0.remove_1(class) {
            warn!(class, error = %describe(&e), "failed to remove class");
        }
    }

    fn contains(&self, class: &str) -> bool {
        self.0.contains(class)
    }

    fn toggle(&mut self, class: &str) -> bool {
        match self.0.toggle(class) {
            Ok(present) => present,
            Err(e) => {
                warn!(class, error = %describe(&e), "failed to toggle class");
                self.0.contains(class)
            }
        }
    }
}

/// The browser's local time, via `Date.prototype.getHours`.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsClock;

impl Clock for JsClock {
    fn local_hour(&self) -> u8 {
        // getHours() is always in 0..24.
        js_sys::Date::new_0().get_hours() as u8
    }
}
