// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use std::sync::Arc;
use std::time::SystemTime;

use crate::OmegaDate;

/// Provides an abstraction for reading the current time.
///
/// Working with time is notoriously difficult to test and control. The clock enables time control in tests
/// while providing zero-cost overhead in production. When the `test-util` feature is enabled, the clock
/// provides additional functionality to control the passage of time, which makes tests faster and more
/// reliable. See the [Testing](#testing) section for more information.
///
/// The clock is used for:
///
/// - Retrieving the current absolute time in UTC as [`SystemTime`].
/// - Constructing [`OmegaDate`] values for "now" via [`Clock::date`] or
///   [`OmegaDate::now`].
///
/// # Testing
///
/// Code that constructs dates at "now" is hard to test against the real system clock because every
/// run observes a different instant. When the `test-util` feature is enabled, this crate provides a
/// [`ClockControl`][crate::ClockControl] type that can be used to pin or advance the time manually,
/// so date construction becomes deterministic.
///
/// # Cloning and shared state
///
/// Cloning a clock is inexpensive (just an `Arc` clone) and every clone shares the same underlying
/// state, including the controlled passage of time when the `test-util` feature is enabled.
///
/// # Examples
///
/// ```
/// use std::time::SystemTime;
///
/// use omega_date::Clock;
///
/// # fn retrieve_absolute_time(clock: &Clock) {
/// let time1: SystemTime = clock.system_time();
/// let time2: SystemTime = clock.system_time();
///
/// // Time is always moving forward. Note that system time might be
/// // adjusted by the operating system between calls.
/// assert!(time1 <= time2);
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Clock(Arc<ClockState>);

#[derive(Debug)]
enum ClockState {
    System,
    #[cfg(any(feature = "test-util", test))]
    Control(crate::ClockControl),
}

impl Clock {
    /// Creates a new clock backed by the system clock.
    #[must_use]
    pub fn new() -> Self {
        Self(Arc::new(ClockState::System))
    }

    /// Creates a new frozen clock.
    ///
    /// This is a convenience method equivalent to calling `ClockControl::new().to_clock()`.
    ///
    /// > **Note**: The returned clock will not advance time on its own; it reports the UNIX
    /// > epoch until advanced through a [`ClockControl`][crate::ClockControl].
    ///
    /// # Examples
    ///
    /// ```
    /// use std::thread::sleep;
    /// use std::time::Duration;
    ///
    /// use omega_date::Clock;
    ///
    /// let clock = Clock::new_frozen();
    ///
    /// let system_time = clock.system_time();
    ///
    /// sleep(Duration::from_micros(1));
    ///
    /// // The frozen clock returns the same time on every call.
    /// assert_eq!(system_time, clock.system_time());
    /// ```
    #[cfg(any(feature = "test-util", test))]
    #[cfg_attr(docsrs, doc(cfg(feature = "test-util")))]
    #[must_use]
    pub fn new_frozen() -> Self {
        crate::ClockControl::new().to_clock()
    }

    /// Creates a new frozen clock at the specified time.
    ///
    /// This is a convenience method equivalent to calling `ClockControl::new_at(time).to_clock()`.
    /// See [`ClockTime`][crate::ClockTime] for the accepted time representations.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::time::{Duration, SystemTime};
    ///
    /// use omega_date::Clock;
    ///
    /// let specific_time = SystemTime::UNIX_EPOCH + Duration::from_secs(1_000_000);
    /// let clock = Clock::new_frozen_at(specific_time);
    ///
    /// assert_eq!(clock.system_time(), specific_time);
    /// ```
    #[cfg(any(feature = "test-util", test))]
    #[cfg_attr(docsrs, doc(cfg(feature = "test-util")))]
    #[must_use]
    pub fn new_frozen_at(time: impl Into<crate::ClockTime>) -> Self {
        crate::ClockControl::new_at(time).to_clock()
    }

    #[cfg(any(feature = "test-util", test))]
    pub(crate) fn with_control(control: &crate::ClockControl) -> Self {
        Self(Arc::new(ClockState::Control(control.clone())))
    }

    /// Retrieves the current system time as [`SystemTime`].
    ///
    /// > **Note**: The system time is not monotonic and can be affected by system clock changes.
    /// > When the system clock changes, the current time may be older than a previously retrieved one.
    ///
    /// # Examples
    ///
    /// ```
    /// use omega_date::Clock;
    ///
    /// # fn retrieve_system_time(clock: &Clock) {
    /// let time1 = clock.system_time();
    /// let time2 = clock.system_time();
    ///
    /// assert!(time2 >= time1);
    /// # }
    /// ```
    #[must_use]
    pub fn system_time(&self) -> SystemTime {
        match self.0.as_ref() {
            #[cfg(any(feature = "test-util", test))]
            ClockState::Control(control) => control.system_time(),
            ClockState::System => SystemTime::now(),
        }
    }

    /// Captures the current time as an [`OmegaDate`].
    ///
    /// This is a convenience method that calls [`OmegaDate::now`].
    ///
    /// # Examples
    ///
    /// ```
    /// use omega_date::{Clock, OmegaDate};
    ///
    /// # fn capture(clock: &Clock) {
    /// let date: OmegaDate = clock.date();
    /// println!("today is {}", date.format_date());
    /// # }
    /// ```
    #[must_use]
    pub fn date(&self) -> OmegaDate {
        OmegaDate::now(self)
    }
}

impl Default for Clock {
    fn default() -> Self {
        Self::new()
    }
}

impl AsRef<Self> for Clock {
    fn as_ref(&self) -> &Self {
        self
    }
}

#[cfg_attr(coverage_nightly, coverage(off))]
#[cfg(test)]
mod tests {
    use std::fmt::Debug;
    use std::thread::sleep;
    use std::time::Duration;

    use super::*;
    use crate::ClockControl;

    static_assertions::assert_impl_all!(Clock: Debug, Send, Sync, Clone, AsRef<Clock>);

    #[cfg(not(miri))] // Miri is not compatible with FFI calls this needs to make.
    #[test]
    fn system_clock_moves_forward() {
        let before = SystemTime::now();

        let clock = Clock::new();
        assert!(clock.system_time() >= before);
    }

    #[test]
    fn system_time_with_control() {
        let control = ClockControl::new();
        let clock = control.to_clock();

        let now = clock.system_time();
        assert_eq!(now, SystemTime::UNIX_EPOCH);

        control.advance(Duration::from_secs(10));

        assert_eq!(clock.system_time(), now.checked_add(Duration::from_secs(10)).unwrap());
    }

    #[test]
    fn clones_share_control() {
        let control = ClockControl::new();
        let clock = control.to_clock();
        let clone = clock.clone();

        control.advance(Duration::from_secs(5));

        assert_eq!(clock.system_time(), clone.system_time());
    }

    #[test]
    fn new_frozen_ok() {
        let clock = Clock::new_frozen();

        let now = clock.system_time();

        sleep(Duration::from_micros(1));

        assert_eq!(now, clock.system_time());
    }

    #[test]
    fn new_frozen_at_ok() {
        let specific_time = SystemTime::UNIX_EPOCH + Duration::from_secs(1_000_000);
        let clock = Clock::new_frozen_at(specific_time);

        sleep(Duration::from_micros(1));

        assert_eq!(clock.system_time(), specific_time);
    }

    #[test]
    fn date_reads_the_clock() {
        let clock = Clock::new_frozen_at(Duration::from_secs(86_400));

        let date = clock.date();
        assert_eq!(date.to_string(), "1970-01-02T00:00:00Z");
    }

    #[test]
    fn default_is_system_backed() {
        let clock = Clock::default();
        assert!(matches!(clock.0.as_ref(), ClockState::System));
    }

    #[test]
    fn as_ref_ok() {
        let clock = Clock::new_frozen();
        let _: &Clock = clock.as_ref();
    }
}
