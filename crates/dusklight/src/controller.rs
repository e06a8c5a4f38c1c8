//! The theme preference controller.

use tracing::{debug, warn};

use crate::clock::{Clock, LocalClock};
use crate::config::ControllerConfig;
use crate::storage::PreferenceStore;
use crate::surface::{DocumentRoot, ThemeSelector};
use crate::theme::{EffectiveTheme, ThemePreference};

/// Keeps the stored preference, the document theme marker and every
/// selector control in agreement.
///
/// The controller owns its collaborators for the lifetime of the UI. Call
/// [`init`](Self::init) once when the UI is ready, then route each
/// selector's change notification to
/// [`on_selector_change`](Self::on_selector_change).
///
/// Storage failures never surface as errors: they are logged and the
/// controller carries on with the preference it holds in memory.
///
/// # Example
///
/// ```rust
/// use dusklight::{
///     ControllerConfig, EffectiveTheme, FixedClock, MemoryDocument, MemorySelector,
///     MemoryStore, ThemeController, ThemePreference, ThemeSelector,
/// };
///
/// let mut controller = ThemeController::new(
///     ControllerConfig::default(),
///     MemoryStore::new(),
///     MemoryDocument::new(),
///     FixedClock(20),
/// )
/// .with_selector(MemorySelector::new("theme-select"))
/// .with_selector(MemorySelector::new("theme-select-mobile"));
///
/// assert_eq!(controller.init(), EffectiveTheme::Dark);
/// assert_eq!(controller.preference(), ThemePreference::Auto);
///
/// controller.on_selector_change("theme-select-mobile", "light");
/// assert_eq!(controller.store().get("theme"), Some("light"));
/// assert_eq!(controller.selector("theme-select").unwrap().value(), "light");
/// ```
pub struct ThemeController<S, D, C = LocalClock> {
    config: ControllerConfig,
    store: S,
    document: D,
    clock: C,
    selectors: Vec<Box<dyn ThemeSelector>>,
    preference: ThemePreference,
    effective: Option<EffectiveTheme>,
}

impl<S, D, C> ThemeController<S, D, C>
where
    S: PreferenceStore,
    D: DocumentRoot,
    C: Clock,
{
    /// Creates a controller with no selectors attached.
    ///
    /// Nothing is read or applied until [`init`](Self::init).
    pub fn new(config: ControllerConfig, store: S, document: D, clock: C) -> Self {
        Self {
            config,
            store,
            document,
            clock,
            selectors: Vec::new(),
            preference: ThemePreference::default(),
            effective: None,
        }
    }

    /// Attaches a selector, returning the controller for chaining.
    pub fn with_selector(mut self, selector: impl ThemeSelector + 'static) -> Self {
        self.add_selector(Box::new(selector));
        self
    }

    /// Attaches a selector.
    ///
    /// A selector attached after [`init`](Self::init) immediately shows the
    /// current preference.
    pub fn add_selector(&mut self, mut selector: Box<dyn ThemeSelector>) {
        if self.effective.is_some() {
            selector.set_value(self.preference.as_str());
        }
        self.selectors.push(selector);
    }

    /// Reads the stored preference, shows it on every selector and applies
    /// it to the document.
    pub fn init(&mut self) -> EffectiveTheme {
        let key = &self.config.storage_key;
        let stored = match self.store.load(key) {
            Ok(value) => value,
            Err(e) => {
                warn!(key = %key, error = %e, "failed to read theme preference, using default");
                None
            }
        };
        let preference = ThemePreference::from_stored(stored.as_deref());
        if let Some(raw) = stored.as_deref() {
            if raw.parse::<ThemePreference>().is_err() {
                debug!(key = %key, value = raw, "ignoring unrecognized stored theme preference");
            }
        }

        self.preference = preference;
        self.sync_selectors(None);
        let effective = self.apply_theme(preference);
        debug!(
            preference = %preference,
            effective = %effective,
            selectors = self.selectors.len(),
            "theme controller initialized"
        );
        effective
    }

    /// Resolves `preference` and writes the result to the document.
    ///
    /// `auto` reads the clock's current hour; `light` and `dark` pass
    /// through. Callers keep the held preference in step; the selectors are
    /// left untouched.
    pub(crate) fn apply_theme(&mut self, preference: ThemePreference) -> EffectiveTheme {
        let hour = self.clock.local_hour();
        let effective = self.config.schedule.resolve(preference, hour);
        self.document
            .set_attribute(&self.config.attribute, effective.as_str());
        self.effective = Some(effective);
        debug!(preference = %preference, hour, effective = %effective, "applied theme");
        effective
    }

    /// Handles a change on the selector identified by `source_id`.
    ///
    /// Persists the new preference, re-applies it, and updates every other
    /// selector. Values outside `auto | light | dark` are treated as `auto`,
    /// in which case the source selector is reset as well.
    pub fn on_selector_change(&mut self, source_id: &str, new_value: &str) -> EffectiveTheme {
        let preference = ThemePreference::from_stored(Some(new_value));
        let key = &self.config.storage_key;
        if let Err(e) = self.store.save(key, preference.as_str()) {
            warn!(key = %key, error = %e, "failed to persist theme preference");
        }

        self.preference = preference;
        let effective = self.apply_theme(preference);
        self.sync_selectors(Some(source_id));
        debug!(source = source_id, preference = %preference, "theme selector changed");
        effective
    }

    /// Re-applies the held preference.
    ///
    /// Under `auto` the effective theme can change as the day goes on; call
    /// this from a timer or a visibility change to pick that up.
    pub fn refresh(&mut self) -> EffectiveTheme {
        self.apply_theme(self.preference)
    }

    /// The preference currently in force.
    pub fn preference(&self) -> ThemePreference {
        self.preference
    }

    /// The theme last written to the document, if any.
    pub fn effective(&self) -> Option<EffectiveTheme> {
        self.effective
    }

    pub fn config(&self) -> &ControllerConfig {
        &self.config
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn document(&self) -> &D {
        &self.document
    }

    pub fn selector_count(&self) -> usize {
        self.selectors.len()
    }

    /// Looks up an attached selector by id.
    pub fn selector(&self, id: &str) -> Option<&dyn ThemeSelector> {
        self.selectors
            .iter()
            .find(|selector| selector.id() == id)
            .map(|selector| &**selector)
    }

    /// Shows the held preference on every selector, skipping `source` when
    /// it already displays it.
    fn sync_selectors(&mut self, source: Option<&str>) {
        let value = self.preference.as_str();
        for selector in &mut self.selectors {
            if Some(selector.id()) == source && selector.value() == value {
                continue;
            }
            selector.set_value(value);
        }
    }
}
