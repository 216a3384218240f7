// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use std::sync::{Arc, Mutex};
use std::time::{Duration, SystemTime};

use crate::{Clock, ClockTime};

/// Controls the flow of time in tests.
///
/// This is useful for testing time-sensitive code without having to depend on the wall clock.
/// `ClockControl` is available when the `test-util` feature is enabled.
///
/// To create a [`Clock`] from `ClockControl`, use the [`ClockControl::to_clock`] method.
///
/// # Examples
///
/// ## Advancing time manually
/// ```
/// # use std::time::Duration;
/// # use omega_date::{Clock, ClockControl, OmegaDate};
/// let control = ClockControl::new();
/// let clock = control.to_clock();
///
/// let now = OmegaDate::now(&clock);
///
/// // Advance the time by one day.
/// control.advance(Duration::from_secs(86_400));
///
/// let later = OmegaDate::now(&clock);
/// assert_eq!(later.days_since(&now), 1);
/// ```
///
/// ## Advancing time automatically
/// ```
/// # use std::time::Duration;
/// # use omega_date::{Clock, ClockControl};
/// let clock = ClockControl::new()
///     .auto_advance(Duration::from_secs(1))
///     .to_clock();
///
/// let now = clock.system_time();
/// let later = clock.system_time(); // Automatically advances by 1 second
///
/// assert_eq!(later.duration_since(now)?, Duration::from_secs(1));
///
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
///
/// # Production code and `ClockControl`
///
/// You should never enable the `test-util` feature or use `ClockControl` in production code.
/// Always ensure that the `test-util` feature is only enabled for `dev-dependencies`:
///
/// ```toml
/// omega_date = { version = "*", features = ["test-util"] }
/// ```
#[derive(Debug, Clone, Default)]
pub struct ClockControl {
    /// Clock control requires controlling the flow of time across threads.
    /// For this reason, we need to use a mutex to ensure that state is consistent
    /// across all threads.
    state: Arc<Mutex<State>>,
}

impl ClockControl {
    /// Creates a new `ClockControl` instance.
    ///
    /// By default, the clock control has no auto-advance set and the initial time is set to the UNIX epoch.
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: Arc::new(Mutex::new(State::new())),
        }
    }

    /// Creates a new `ClockControl` instance at the specified time.
    ///
    /// This method accepts various time representations through the [`ClockTime`] enum:
    ///
    /// - `SystemTime`: Sets the clock to an absolute system time
    /// - `OmegaDate`: Sets the clock to the instant of a specific date
    /// - `Duration`: Advances the clock by the specified duration from the UNIX epoch
    ///
    /// # Examples
    ///
    /// ```
    /// use std::time::{Duration, SystemTime};
    ///
    /// use omega_date::ClockControl;
    ///
    /// // Create a clock at a specific system time.
    /// let system_time = SystemTime::UNIX_EPOCH + Duration::from_secs(100);
    /// let control = ClockControl::new_at(system_time);
    /// let clock = control.to_clock();
    /// assert_eq!(clock.system_time(), system_time);
    ///
    /// // Create a clock advanced by a duration.
    /// let control = ClockControl::new_at(Duration::from_secs(100));
    /// let clock = control.to_clock();
    /// assert_eq!(
    ///     clock.system_time(),
    ///     SystemTime::UNIX_EPOCH + Duration::from_secs(100)
    /// );
    /// ```
    #[must_use]
    pub fn new_at(time: impl Into<ClockTime>) -> Self {
        let this = Self::new();
        match time.into() {
            ClockTime::System(time) => this.advance_to(time),
            ClockTime::Date(date) => this.advance_to(date.to_system_time()),
            ClockTime::Offset(duration) => this.advance(duration),
        }
        this
    }

    /// Creates a new `ClockControl` instance with the current system time.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::time::SystemTime;
    ///
    /// use omega_date::ClockControl;
    ///
    /// let control = ClockControl::now();
    /// let clock = control.to_clock();
    ///
    /// assert!(SystemTime::now() >= clock.system_time());
    /// ```
    #[must_use]
    pub fn now() -> Self {
        Self::new_at(SystemTime::now())
    }

    /// Converts the `ClockControl` to a `Clock` instance.
    #[must_use]
    pub fn to_clock(&self) -> Clock {
        Clock::with_control(self)
    }

    /// Sets the duration by which the clock will auto-advance when accessing the current time.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::time::Duration;
    ///
    /// use omega_date::ClockControl;
    ///
    /// let clock = ClockControl::new()
    ///     .auto_advance(Duration::from_secs(1))
    ///     .to_clock();
    ///
    /// let now = clock.system_time();
    /// let later = clock.system_time(); // Automatically advances by 1 second
    ///
    /// assert_eq!(later.duration_since(now)?, Duration::from_secs(1));
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    #[must_use]
    pub fn auto_advance(self, step: Duration) -> Self {
        self.with_state(|v| v.auto_advance = step);
        self
    }

    /// Manually advances the clock by the specified number of milliseconds.
    pub fn advance_millis(&self, millis: u64) {
        self.advance(Duration::from_millis(millis));
    }

    /// Manually advances the clock by the specified duration.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::time::Duration;
    ///
    /// use omega_date::ClockControl;
    ///
    /// let control = ClockControl::new();
    /// let clock = control.to_clock();
    ///
    /// let now = clock.system_time();
    /// control.advance(Duration::from_secs(1));
    /// assert_eq!(clock.system_time().duration_since(now)?, Duration::from_secs(1));
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn advance(&self, duration: Duration) {
        self.with_state(|v| v.advance(duration, TimeFlow::Forward));
    }

    /// Advances the clock to the specified system time.
    ///
    /// The clock can be advanced to the future or to the past.
    #[expect(
        clippy::missing_panics_doc,
        reason = "we are handling cases where the time is either in future or past and the resulting duration is always positive"
    )]
    pub fn advance_to(&self, time: impl Into<SystemTime>) {
        let now = self.system_time();
        let time = time.into();

        match time.duration_since(now) {
            Ok(duration) => {
                self.with_state(|v| v.advance(duration, TimeFlow::Forward));
            }
            Err(_e) => {
                let duration = now.duration_since(time).expect("the resulting duration must be positive here");

                self.with_state(|v| v.advance(duration, TimeFlow::Backward));
            }
        }
    }

    pub(crate) fn system_time(&self) -> SystemTime {
        self.with_state(State::now)
    }

    fn with_state<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut State) -> R,
    {
        f(&mut self.state.lock().expect("acquiring lock must always succeed"))
    }
}

impl From<ClockControl> for Clock {
    fn from(control: ClockControl) -> Self {
        control.to_clock()
    }
}

impl From<&ClockControl> for Clock {
    fn from(control: &ClockControl) -> Self {
        control.to_clock()
    }
}

#[derive(Debug)]
struct State {
    system_time: SystemTime,
    auto_advance: Duration,
}

impl Default for State {
    fn default() -> Self {
        Self::new()
    }
}

impl State {
    const fn new() -> Self {
        Self {
            system_time: SystemTime::UNIX_EPOCH,
            auto_advance: Duration::ZERO,
        }
    }

    fn now(&mut self) -> SystemTime {
        let now = self.system_time;
        self.advance(self.auto_advance, TimeFlow::Forward);
        now
    }

    fn advance(&mut self, duration: Duration, flow: TimeFlow) {
        if duration == Duration::ZERO {
            return;
        }

        self.system_time = match flow {
            TimeFlow::Forward => self.system_time.checked_add(duration),
            TimeFlow::Backward => self.system_time.checked_sub(duration),
        }
        .expect("the clock was moved outside of the range supported by SystemTime");
    }
}

#[derive(Debug, Clone, Copy)]
enum TimeFlow {
    Forward,
    Backward,
}

#[cfg_attr(coverage_nightly, coverage(off))]
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn assert_types() {
        static_assertions::assert_impl_all!(ClockControl: Send, Sync, Clone, Default);
    }

    #[test]
    fn starts_at_unix_epoch() {
        let control = ClockControl::new();
        assert_eq!(control.system_time(), SystemTime::UNIX_EPOCH);
    }

    #[test]
    fn new_at_system_time() {
        let time = SystemTime::UNIX_EPOCH + Duration::from_secs(42);
        let control = ClockControl::new_at(time);
        assert_eq!(control.system_time(), time);
    }

    #[test]
    fn new_at_offset() {
        let control = ClockControl::new_at(Duration::from_secs(42));
        assert_eq!(control.system_time(), SystemTime::UNIX_EPOCH + Duration::from_secs(42));
    }

    #[test]
    fn new_at_date() {
        let date: crate::OmegaDate = "1970-01-02T00:00:00Z".parse().unwrap();
        let control = ClockControl::new_at(date);
        assert_eq!(control.system_time(), SystemTime::UNIX_EPOCH + Duration::from_secs(86_400));
    }

    #[cfg(not(miri))] // Miri is not compatible with FFI calls this needs to make.
    #[test]
    fn now_is_not_in_the_future() {
        let control = ClockControl::now();
        assert!(control.system_time() <= SystemTime::now());
    }

    #[test]
    fn advance_forward() {
        let control = ClockControl::new();
        control.advance(Duration::from_secs(5));
        assert_eq!(control.system_time(), SystemTime::UNIX_EPOCH + Duration::from_secs(5));
    }

    #[test]
    fn advance_millis_ok() {
        let control = ClockControl::new();
        control.advance_millis(1500);
        assert_eq!(control.system_time(), SystemTime::UNIX_EPOCH + Duration::from_millis(1500));
    }

    #[test]
    fn advance_to_past() {
        let control = ClockControl::new_at(Duration::from_secs(100));
        control.advance_to(SystemTime::UNIX_EPOCH + Duration::from_secs(10));
        assert_eq!(control.system_time(), SystemTime::UNIX_EPOCH + Duration::from_secs(10));
    }

    #[test]
    fn auto_advance_applies_after_read() {
        let control = ClockControl::new().auto_advance(Duration::from_secs(1));

        let first = control.system_time();
        let second = control.system_time();

        assert_eq!(first, SystemTime::UNIX_EPOCH);
        assert_eq!(second.duration_since(first).unwrap(), Duration::from_secs(1));
    }

    #[test]
    fn from_impls() {
        let control = ClockControl::new();
        let _: Clock = (&control).into();
        let _: Clock = control.into();
    }
}
