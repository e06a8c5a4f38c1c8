//! Theme preference model.
//!
//! - [`ThemePreference`]: what the user chose (`auto`, `light`, `dark`)
//! - [`EffectiveTheme`]: what the document is rendered with
//! - [`DaySchedule`]: the hours `auto` switches at

mod effective;
mod preference;
mod schedule;

pub use effective::EffectiveTheme;
pub use preference::{ParsePreferenceError, ThemePreference};
pub use schedule::{DaySchedule, ScheduleError};
