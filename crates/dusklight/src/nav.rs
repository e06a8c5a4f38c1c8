//! Navigation behaviors: a class that follows the scroll position, and a
//! menu that shows and hides on click.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// An element's set of CSS classes.
pub trait ClassList {
    fn add(&mut self, class: &str);

    fn remove(&mut self, class: &str);

    fn contains(&self, class: &str) -> bool;

    /// Flips `class` and returns whether it is now present.
    fn toggle(&mut self, class: &str) -> bool {
        if self.contains(class) {
            self.remove(class);
            false
        } else {
            self.add(class);
            true
        }
    }
}

/// Class set held in memory.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryClassList {
    classes: BTreeSet<String>,
}

impl MemoryClassList {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ClassList for MemoryClassList {
    fn add(&mut self, class: &str) {
        self.classes.insert(class.to_string());
    }

    fn remove(&mut self, class: &str) {
        self.classes.remove(class);
    }

    fn contains(&self, class: &str) -> bool {
        self.classes.contains(class)
    }
}

/// Element lookups and class names for the nav behaviors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavConfig {
    /// CSS selector of the bar that gets the scrolled class.
    pub nav_selector: String,
    /// Scroll offset, in pixels, the page must exceed.
    pub scroll_threshold: f64,
    pub scrolled_class: String,
    /// Id of the button that opens and closes the menu.
    pub menu_toggle_id: String,
    pub menu_id: String,
    pub menu_open_class: String,
}

impl NavConfig {
    pub fn scroll_class(&self) -> ScrollClass {
        ScrollClass::new(self.scroll_threshold, self.scrolled_class.clone())
    }

    pub fn menu_toggle(&self) -> MenuToggle {
        MenuToggle::new(self.menu_open_class.clone())
    }
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            nav_selector: ".nav-container".to_string(),
            scroll_threshold: ScrollClass::DEFAULT_THRESHOLD,
            scrolled_class: "scrolled".to_string(),
            menu_toggle_id: "menu-toggle".to_string(),
            menu_id: "nav-menu".to_string(),
            menu_open_class: "show".to_string(),
        }
    }
}

/// Marks an element once the page scrolls past a threshold.
#[derive(Debug, Clone, PartialEq)]
pub struct ScrollClass {
    threshold: f64,
    class: String,
}

impl ScrollClass {
    pub const DEFAULT_THRESHOLD: f64 = 10.0;

    pub fn new(threshold: f64, class: impl Into<String>) -> Self {
        Self {
            threshold,
            class: class.into(),
        }
    }

    /// Updates `target` for vertical offset `y` and returns whether the
    /// class is now present. Offsets equal to the threshold do not count.
    pub fn on_scroll(&self, y: f64, target: &mut impl ClassList) -> bool {
        let scrolled = y > self.threshold;
        if scrolled {
            target.add(&self.class);
        } else {
            target.remove(&self.class);
        }
        scrolled
    }
}

impl Default for ScrollClass {
    fn default() -> Self {
        Self::new(Self::DEFAULT_THRESHOLD, "scrolled")
    }
}

/// Shows and hides a menu by flipping a class on it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuToggle {
    class: String,
}

impl MenuToggle {
    pub fn new(class: impl Into<String>) -> Self {
        Self {
            class: class.into(),
        }
    }

    /// Flips the menu and returns whether it is now open.
    pub fn on_click(&self, menu: &mut impl ClassList) -> bool {
        menu.toggle(&self.class)
    }
}

impl Default for MenuToggle {
    fn default() -> Self {
        Self::new("show")
    }
}
