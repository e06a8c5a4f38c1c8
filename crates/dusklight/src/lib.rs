//! # Dusklight - light/dark theme preference for web pages
//!
//! Dusklight keeps a persisted `auto | light | dark` preference, a
//! document-level theme marker and any number of selector controls in
//! agreement. Under `auto` the theme follows the time of day: dark from
//! 18:00 until 06:00, light otherwise.
//!
//! ## Core Concepts
//!
//! - [`ThemePreference`]: what the user picked, persisted under `theme`
//! - [`EffectiveTheme`]: what the document is rendered with (`data-theme`)
//! - [`ThemeController`]: reads, applies and syncs the preference
//! - [`PreferenceStore`], [`DocumentRoot`], [`ThemeSelector`], [`Clock`]:
//!   the seams to storage, the page and the time of day
//!
//! ## Quick Start
//!
//! ```rust
//! use dusklight::{
//!     ControllerConfig, EffectiveTheme, FixedClock, MemoryDocument, MemorySelector,
//!     MemoryStore, ThemeController,
//! };
//!
//! let store = MemoryStore::new().with("theme", "dark");
//! let mut controller = ThemeController::new(
//!     ControllerConfig::default(),
//!     store,
//!     MemoryDocument::new(),
//!     FixedClock(9),
//! )
//! .with_selector(MemorySelector::new("theme-select"));
//!
//! assert_eq!(controller.init(), EffectiveTheme::Dark);
//! ```
//!
//! Browser bindings live in the `dusklight-web` crate.
//!
//! ## Navigation
//!
//! The [`nav`] module carries the two small behaviors site navigation
//! needs: a class that follows the scroll position and a menu toggle.

mod clock;
mod config;
mod controller;
pub mod nav;
mod storage;
mod surface;
mod theme;

pub use clock::{reset_hour_detector, set_hour_detector, Clock, FixedClock, LocalClock};
pub use config::{ControllerConfig, DEFAULT_STORAGE_KEY, DEFAULT_THEME_ATTRIBUTE};
pub use controller::ThemeController;
pub use storage::{FileStore, MemoryStore, PreferenceStore, StorageError};
pub use surface::{DocumentRoot, MemoryDocument, MemorySelector, ThemeSelector};
pub use theme::{DaySchedule, EffectiveTheme, ParsePreferenceError, ScheduleError, ThemePreference};
