//! Time-of-day schedule behind the `auto` preference.

use serde::{Deserialize, Serialize};

use super::effective::EffectiveTheme;
use super::preference::ThemePreference;

/// Error returned when a [`DaySchedule`] is built from invalid hours.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ScheduleError {
    /// An hour outside `0..24`.
    #[error("hour {0} is out of range (expected 0-23)")]
    HourOutOfRange(u8),
    /// Light and dark start at the same hour, so one window is empty.
    #[error("light and dark both start at hour {0}")]
    EmptyWindow(u8),
}

/// The hours at which `auto` switches between light and dark.
///
/// Light runs from `light_from` up to (not including) `dark_from`; dark
/// covers the rest of the day. Either boundary may be the earlier one, so
/// a light window that wraps midnight is allowed.
///
/// # Example
///
/// ```rust
/// use dusklight::{DaySchedule, EffectiveTheme};
///
/// let schedule = DaySchedule::default();
/// assert_eq!(schedule.theme_at(17), EffectiveTheme::Light);
/// assert_eq!(schedule.theme_at(18), EffectiveTheme::Dark);
/// assert_eq!(schedule.theme_at(5), EffectiveTheme::Dark);
/// assert_eq!(schedule.theme_at(6), EffectiveTheme::Light);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ScheduleHours", into = "ScheduleHours")]
pub struct DaySchedule {
    light_from: u8,
    dark_from: u8,
}

impl DaySchedule {
    /// Hour at which the default schedule turns light.
    pub const DEFAULT_LIGHT_FROM: u8 = 6;
    /// Hour at which the default schedule turns dark.
    pub const DEFAULT_DARK_FROM: u8 = 18;

    /// Creates a schedule.
    ///
    /// # Errors
    ///
    /// Returns an error if either hour is 24 or more, or if both are equal.
    pub fn new(light_from: u8, dark_from: u8) -> Result<Self, ScheduleError> {
        for hour in [light_from, dark_from] {
            if hour >= 24 {
                return Err(ScheduleError::HourOutOfRange(hour));
            }
        }
        if light_from == dark_from {
            return Err(ScheduleError::EmptyWindow(light_from));
        }
        Ok(Self {
            light_from,
            dark_from,
        })
    }

    pub fn light_from(&self) -> u8 {
        self.light_from
    }

    pub fn dark_from(&self) -> u8 {
        self.dark_from
    }

    /// Returns the theme for a local wall-clock hour.
    ///
    /// Hours past 23 wrap around the day.
    pub fn theme_at(&self, hour: u8) -> EffectiveTheme {
        let hour = hour % 24;
        let light = if self.light_from < self.dark_from {
            hour >= self.light_from && hour < self.dark_from
        } else {
            hour >= self.light_from || hour < self.dark_from
        };
        if light {
            EffectiveTheme::Light
        } else {
            EffectiveTheme::Dark
        }
    }

    /// Resolves a preference at the given hour.
    ///
    /// Fixed preferences pass through; only `auto` consults the schedule.
    pub fn resolve(&self, preference: ThemePreference, hour: u8) -> EffectiveTheme {
        EffectiveTheme::pinned_by(preference).unwrap_or_else(|| self.theme_at(hour))
    }
}

impl Default for DaySchedule {
    fn default() -> Self {
        Self {
            light_from: Self::DEFAULT_LIGHT_FROM,
            dark_from: Self::DEFAULT_DARK_FROM,
        }
    }
}

/// Unvalidated wire form of a [`DaySchedule`].
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
struct ScheduleHours {
    #[serde(default = "default_light_from")]
    light_from: u8,
    #[serde(default = "default_dark_from")]
    dark_from: u8,
}

fn default_light_from() -> u8 {
    DaySchedule::DEFAULT_LIGHT_FROM
}

fn default_dark_from() -> u8 {
    DaySchedule::DEFAULT_DARK_FROM
}

impl TryFrom<ScheduleHours> for DaySchedule {
    type Error = ScheduleError;

    fn try_from(hours: ScheduleHours) -> Result<Self, Self::Error> {
        DaySchedule::new(hours.light_from, hours.dark_from)
    }
}

impl From<DaySchedule> for ScheduleHours {
    fn from(schedule: DaySchedule) -> Self {
        Self {
            light_from: schedule.light_from,
            dark_from: schedule.dark_from,
        }
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn evening_and_night_are_dark(hour in prop_oneof![18u8..24, 0u8..6]) {
            let schedule = DaySchedule::default();
            prop_assert_eq!(schedule.resolve(ThemePreference::Auto, hour), EffectiveTheme::Dark);
        }

        #[test]
        fn daytime_is_light(hour in 6u8..18) {
            let schedule = DaySchedule::default();
            prop_assert_eq!(schedule.resolve(ThemePreference::Auto, hour), EffectiveTheme::Light);
        }

        #[test]
        fn light_window_has_expected_length(
            light_from in 0u8..24,
            dark_from in 0u8..24,
        ) {
            prop_assume!(light_from != dark_from);
            let schedule = DaySchedule::new(light_from, dark_from).unwrap();
            let light_hours = (0..24)
                .filter(|h| schedule.theme_at(*h) == EffectiveTheme::Light)
                .count();
            let expected = (i32::from(dark_from) - i32::from(light_from)).rem_euclid(24);
            prop_assert_eq!(light_hours as i32, expected);
        }
    }
}
