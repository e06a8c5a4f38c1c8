//! Local wall-clock hour sources.

use chrono::Timelike;
use once_cell::sync::Lazy;
use std::sync::Mutex;

/// Supplies the current local hour (0-23) to the `auto` preference.
pub trait Clock {
    fn local_hour(&self) -> u8;
}

/// A clock that always reports the same hour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub u8);

impl Clock for FixedClock {
    fn local_hour(&self) -> u8 {
        self.0
    }
}

/// The host's local time.
///
/// Reads through a process-wide detector that defaults to the system clock
/// and can be replaced with [`set_hour_detector`].
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalClock;

impl Clock for LocalClock {
    fn local_hour(&self) -> u8 {
        detect_local_hour()
    }
}

type HourDetector = fn() -> u8;

static HOUR_DETECTOR: Lazy<Mutex<HourDetector>> = Lazy::new(|| Mutex::new(system_hour));

/// Overrides the detector [`LocalClock`] reads the hour from.
///
/// This is useful for testing or when you want to pin the time of day.
pub fn set_hour_detector(detector: HourDetector) {
    let mut guard = HOUR_DETECTOR
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    *guard = detector;
}

/// Restores the system clock as the hour detector.
pub fn reset_hour_detector() {
    set_hour_detector(system_hour);
}

fn detect_local_hour() -> u8 {
    let detector = HOUR_DETECTOR
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    (*detector)()
}

fn system_hour() -> u8 {
    // `hour()` is always below 24.
    chrono::Local::now().hour() as u8
}
