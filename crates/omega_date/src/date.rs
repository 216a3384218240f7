// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use std::cmp::Ordering;
use std::hash::{Hash, Hasher};
use std::time::SystemTime;

use jiff::civil::{Date, Time};
use jiff::tz::TimeZone;
use jiff::{Span, Timestamp, Zoned};

use crate::{Clock, Error, Result, Weekday};

/// Represents a wall-clock date and time.
///
/// An `OmegaDate` pairs an absolute instant with its calendar interpretation.
/// All calendar components (day of month, month, year, and so on) are
/// interpreted in UTC, consistently across accessors and formatting. The
/// representable range is the one supported by the calendar engine, roughly
/// years -9999 to 9999.
///
/// # Creation
///
/// To capture the current time, use [`OmegaDate::now`] with a [`Clock`]. The
/// clock is an explicit dependency so that tests can supply fixed instants
/// instead of depending on wall-clock execution time.
///
/// ```
/// use omega_date::{Clock, OmegaDate};
///
/// # fn capture(clock: &Clock) -> OmegaDate {
/// let now = OmegaDate::now(clock);
/// now
/// # }
/// ```
///
/// Dates can also be created from explicit calendar components or absolute
/// instants:
///
/// - [`OmegaDate::from_ymd`]: a calendar day at midnight UTC.
/// - [`OmegaDate::from_system_time`]: interoperability with
///   [`std::time::SystemTime`].
/// - [`OmegaDate::from_unix_millis`]: a count of milliseconds since the Unix
///   epoch.
/// - [`str::parse`]: ISO 8601 / RFC 3339 strings, e.g. `"2024-08-21T07:04:37Z"`.
///
/// # Arithmetic and chaining
///
/// Additive operations consume the receiver and return a new value, so
/// adjustments chain by rebinding:
///
/// ```
/// use omega_date::OmegaDate;
///
/// let date = OmegaDate::from_ymd(2024, 12, 31)?;
/// let date = date.checked_add_days(1)?.checked_add_seconds(1)?;
///
/// assert_eq!(date.year(), 2025);
/// assert_eq!(date.to_string(), "2025-01-01T00:00:01Z");
///
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
///
/// The `checked_add_*` methods return an error when the result would leave the
/// representable range. The unqualified `add_*` methods saturate at the range
/// bounds instead and never fail; a saturated value is still a valid calendar
/// state.
///
/// # Differences
///
/// The `*_since` family computes the signed difference `self - other` in a
/// requested granularity, truncated toward zero. See [`OmegaDate::millis_since`]
/// for the exact convention.
///
/// # Comparison
///
/// Dates compare by their instant:
///
/// ```
/// use omega_date::OmegaDate;
///
/// let earlier = OmegaDate::from_ymd(2024, 8, 20)?;
/// let later = OmegaDate::from_ymd(2024, 8, 21)?;
///
/// assert!(earlier < later);
/// assert_ne!(earlier, later);
///
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone)]
pub struct OmegaDate {
    pub(crate) zoned: Zoned,
}

impl OmegaDate {
    /// Captures the current time from the given clock.
    ///
    /// This constructor always succeeds: the conversion from the clock's
    /// [`SystemTime`] saturates at the representable range. Real clocks are
    /// always in range; saturation only matters for test clocks moved to
    /// extreme values.
    ///
    /// # Examples
    ///
    /// ```
    /// use omega_date::{Clock, OmegaDate};
    ///
    /// # fn capture(clock: &Clock) {
    /// let now = OmegaDate::now(clock);
    /// println!("today is {}", now.format_date());
    /// # }
    /// ```
    #[must_use]
    pub fn now(clock: &Clock) -> Self {
        let time = clock.system_time();
        let timestamp = Timestamp::try_from(time).unwrap_or_else(|_| {
            if time < SystemTime::UNIX_EPOCH { Timestamp::MIN } else { Timestamp::MAX }
        });

        Self::from_timestamp(timestamp)
    }

    /// Creates a date at midnight UTC on the given calendar day.
    ///
    /// The month numbering is 1-based: January is `1` and December is `12`.
    /// Returns an error if the components do not name a valid calendar day.
    ///
    /// # Examples
    ///
    /// ```
    /// use omega_date::OmegaDate;
    ///
    /// let date = OmegaDate::from_ymd(2024, 2, 29)?;
    /// assert_eq!(date.to_string(), "2024-02-29T00:00:00Z");
    ///
    /// // 2023 is not a leap year.
    /// assert!(OmegaDate::from_ymd(2023, 2, 29).is_err());
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn from_ymd(year: i16, month: i8, day: i8) -> Result<Self> {
        let date = Date::new(year, month, day).map_err(Error::jiff)?;
        Self::at(date, Time::midnight())
    }

    /// Creates a date from the given [`SystemTime`].
    ///
    /// Returns an error if the system time is outside the representable range.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::time::SystemTime;
    ///
    /// use omega_date::OmegaDate;
    ///
    /// let date = OmegaDate::from_system_time(SystemTime::UNIX_EPOCH)?;
    /// assert_eq!(date.year(), 1970);
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn from_system_time(time: SystemTime) -> Result<Self> {
        let timestamp = Timestamp::try_from(time).map_err(Error::jiff)?;
        Ok(Self::from_timestamp(timestamp))
    }

    /// Creates a date from a count of milliseconds since the Unix epoch.
    ///
    /// Negative counts name instants before the epoch. Returns an error if the
    /// count is outside the representable range.
    pub fn from_unix_millis(millis: i64) -> Result<Self> {
        let timestamp = Timestamp::from_millisecond(millis).map_err(Error::jiff)?;
        Ok(Self::from_timestamp(timestamp))
    }

    pub(crate) fn from_timestamp(timestamp: Timestamp) -> Self {
        Self {
            zoned: timestamp.to_zoned(TimeZone::UTC),
        }
    }

    fn at(date: Date, time: Time) -> Result<Self> {
        let zoned = date.to_datetime(time).to_zoned(TimeZone::UTC).map_err(Error::jiff)?;
        Ok(Self { zoned })
    }

    /// Converts the date to [`SystemTime`]. This operation never fails.
    #[must_use]
    pub fn to_system_time(&self) -> SystemTime {
        self.zoned.timestamp().into()
    }

    /// Returns the instant as a count of milliseconds since the Unix epoch.
    ///
    /// Sub-millisecond components are dropped.
    #[must_use]
    pub fn as_unix_millis(&self) -> i64 {
        self.zoned.timestamp().as_millisecond()
    }

    /// The year, in the range -9999..=9999.
    #[must_use]
    pub fn year(&self) -> i16 {
        self.zoned.year()
    }

    /// The month of the year, 1-based: January is `1` and December is `12`.
    #[must_use]
    pub fn month(&self) -> i8 {
        self.zoned.month()
    }

    /// The day of the month, in the range 1..=31.
    #[must_use]
    pub fn day_of_month(&self) -> i8 {
        self.zoned.day()
    }

    /// The day of the year, in the range 1..=366.
    #[must_use]
    pub fn day_of_year(&self) -> i16 {
        self.zoned.day_of_year()
    }

    /// The day of the week.
    #[must_use]
    pub fn day_of_week(&self) -> Weekday {
        Weekday::from_jiff(self.zoned.weekday())
    }

    /// The hour of the day, in the range 0..=23.
    #[must_use]
    pub fn hour(&self) -> i8 {
        self.zoned.hour()
    }

    /// The minute of the hour, in the range 0..=59.
    #[must_use]
    pub fn minute(&self) -> i8 {
        self.zoned.minute()
    }

    /// The second of the minute, in the range 0..=59.
    #[must_use]
    pub fn second(&self) -> i8 {
        self.zoned.second()
    }

    /// The millisecond of the second, in the range 0..=999.
    #[must_use]
    pub fn millisecond(&self) -> i16 {
        self.zoned.millisecond()
    }

    /// The number of days in the current month, accounting for leap years.
    #[must_use]
    pub fn days_in_month(&self) -> i8 {
        self.zoned.days_in_month()
    }

    /// Advances the date by the given number of calendar days, rolling over
    /// month and year boundaries as needed.
    ///
    /// `days` may be negative to move the date into the past. Because all
    /// calendar interpretation happens in UTC, where no daylight-saving
    /// transitions exist, one calendar day is always exactly 24 hours of
    /// absolute time.
    ///
    /// Returns an error when the result would leave the representable range.
    /// Use [`OmegaDate::add_days`] for a saturating alternative.
    ///
    /// # Examples
    ///
    /// ```
    /// use omega_date::OmegaDate;
    ///
    /// let date = OmegaDate::from_ymd(2024, 12, 31)?;
    /// let next = date.checked_add_days(1)?;
    ///
    /// assert_eq!(next.day_of_month(), 1);
    /// assert_eq!(next.month(), 1);
    /// assert_eq!(next.year(), 2025);
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn checked_add_days(self, days: i64) -> Result<Self> {
        let span = Span::new().try_days(days).map_err(Error::jiff)?;
        self.checked_add_span(span)
    }

    /// Advances the date by the given number of seconds.
    ///
    /// `seconds` may be negative. Returns an error when the result would leave
    /// the representable range. Use [`OmegaDate::add_seconds`] for a saturating
    /// alternative.
    pub fn checked_add_seconds(self, seconds: i64) -> Result<Self> {
        let span = Span::new().try_seconds(seconds).map_err(Error::jiff)?;
        self.checked_add_span(span)
    }

    /// Advances the date by the given number of milliseconds.
    pub fn checked_add_millis(self, millis: i64) -> Result<Self> {
        let span = Span::new().try_milliseconds(millis).map_err(Error::jiff)?;
        self.checked_add_span(span)
    }

    /// Advances the date by the given number of minutes.
    pub fn checked_add_minutes(self, minutes: i64) -> Result<Self> {
        let span = Span::new().try_minutes(minutes).map_err(Error::jiff)?;
        self.checked_add_span(span)
    }

    /// Advances the date by the given number of hours.
    pub fn checked_add_hours(self, hours: i64) -> Result<Self> {
        let span = Span::new().try_hours(hours).map_err(Error::jiff)?;
        self.checked_add_span(span)
    }

    /// Advances the date by the given number of weeks.
    pub fn checked_add_weeks(self, weeks: i64) -> Result<Self> {
        let span = Span::new().try_weeks(weeks).map_err(Error::jiff)?;
        self.checked_add_span(span)
    }

    /// Advances the date by the given number of calendar months.
    ///
    /// The day of the month is clamped when the target month is shorter:
    ///
    /// ```
    /// use omega_date::OmegaDate;
    ///
    /// let date = OmegaDate::from_ymd(2024, 1, 31)?;
    /// let next = date.checked_add_months(1)?;
    ///
    /// assert_eq!(next.format_date(), "2024-02-29");
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn checked_add_months(self, months: i64) -> Result<Self> {
        let span = Span::new().try_months(months).map_err(Error::jiff)?;
        self.checked_add_span(span)
    }

    /// Advances the date by the given number of calendar years.
    ///
    /// As with month arithmetic, Feb 29 is clamped to Feb 28 in non-leap
    /// target years.
    pub fn checked_add_years(self, years: i64) -> Result<Self> {
        let span = Span::new().try_years(years).map_err(Error::jiff)?;
        self.checked_add_span(span)
    }

    fn checked_add_span(self, span: Span) -> Result<Self> {
        let zoned = self.zoned.checked_add(span).map_err(Error::jiff)?;
        Ok(Self { zoned })
    }

    /// Saturating version of [`OmegaDate::checked_add_days`]: clamps at the
    /// boundary of the representable range instead of failing.
    #[must_use]
    pub fn add_days(self, days: i64) -> Self {
        self.checked_add_days(days).unwrap_or_else(|_| Self::saturated(days))
    }

    /// Saturating version of [`OmegaDate::checked_add_seconds`].
    #[must_use]
    pub fn add_seconds(self, seconds: i64) -> Self {
        self.checked_add_seconds(seconds).unwrap_or_else(|_| Self::saturated(seconds))
    }

    /// Saturating version of [`OmegaDate::checked_add_millis`].
    #[must_use]
    pub fn add_millis(self, millis: i64) -> Self {
        self.checked_add_millis(millis).unwrap_or_else(|_| Self::saturated(millis))
    }

    /// Saturating version of [`OmegaDate::checked_add_minutes`].
    #[must_use]
    pub fn add_minutes(self, minutes: i64) -> Self {
        self.checked_add_minutes(minutes).unwrap_or_else(|_| Self::saturated(minutes))
    }

    /// Saturating version of [`OmegaDate::checked_add_hours`].
    #[must_use]
    pub fn add_hours(self, hours: i64) -> Self {
        self.checked_add_hours(hours).unwrap_or_else(|_| Self::saturated(hours))
    }

    /// Saturating version of [`OmegaDate::checked_add_weeks`].
    #[must_use]
    pub fn add_weeks(self, weeks: i64) -> Self {
        self.checked_add_weeks(weeks).unwrap_or_else(|_| Self::saturated(weeks))
    }

    /// Saturating version of [`OmegaDate::checked_add_months`].
    #[must_use]
    pub fn add_months(self, months: i64) -> Self {
        self.checked_add_months(months).unwrap_or_else(|_| Self::saturated(months))
    }

    /// Saturating version of [`OmegaDate::checked_add_years`].
    #[must_use]
    pub fn add_years(self, years: i64) -> Self {
        self.checked_add_years(years).unwrap_or_else(|_| Self::saturated(years))
    }

    /// The range boundary in the direction of the failed adjustment.
    fn saturated(amount: i64) -> Self {
        let timestamp = if amount < 0 { Timestamp::MIN } else { Timestamp::MAX };
        Self::from_timestamp(timestamp)
    }

    /// Returns the signed difference `self - other` in whole milliseconds.
    ///
    /// The result is negative when `self` is earlier than `other`. All of the
    /// coarser `*_since` granularities derive from this value and truncate
    /// toward zero, so a difference of 1.9 days reports as 1 day and a
    /// difference of -1.9 days reports as -1 day. Sub-millisecond components
    /// are ignored.
    ///
    /// # Examples
    ///
    /// ```
    /// use omega_date::OmegaDate;
    ///
    /// let earlier = OmegaDate::from_ymd(2024, 8, 20)?;
    /// let later = earlier.clone().checked_add_seconds(90)?;
    ///
    /// assert_eq!(later.millis_since(&earlier), 90_000);
    /// assert_eq!(earlier.millis_since(&later), -90_000);
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    #[must_use]
    pub fn millis_since(&self, other: &Self) -> i64 {
        let duration = self.zoned.timestamp().duration_since(other.zoned.timestamp());

        // The difference between two in-range instants always fits in i64 milliseconds.
        duration
            .as_secs()
            .saturating_mul(1_000)
            .saturating_add(i64::from(duration.subsec_millis()))
    }

    /// Returns the signed difference `self - other` in whole seconds,
    /// truncated toward zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use omega_date::OmegaDate;
    ///
    /// let earlier = OmegaDate::from_ymd(2024, 8, 20)?;
    /// let later = earlier.clone().checked_add_millis(1_900)?;
    ///
    /// assert_eq!(later.seconds_since(&earlier), 1);
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    #[must_use]
    pub fn seconds_since(&self, other: &Self) -> i64 {
        self.millis_since(other) / 1_000
    }

    /// Returns the signed difference `self - other` in whole minutes,
    /// truncated toward zero.
    #[must_use]
    pub fn minutes_since(&self, other: &Self) -> i64 {
        self.millis_since(other) / 60_000
    }

    /// Returns the signed difference `self - other` in whole hours,
    /// truncated toward zero.
    #[must_use]
    pub fn hours_since(&self, other: &Self) -> i64 {
        self.millis_since(other) / 3_600_000
    }

    /// Returns the signed difference `self - other` in whole 24-hour days,
    /// truncated toward zero.
    #[must_use]
    pub fn days_since(&self, other: &Self) -> i64 {
        self.millis_since(other) / 86_400_000
    }

    /// Returns the date with the year replaced.
    ///
    /// Returns an error if the resulting components do not name a valid
    /// calendar day, e.g. moving Feb 29 to a non-leap year.
    pub fn with_year(self, year: i16) -> Result<Self> {
        let zoned = self.zoned.with().year(year).build().map_err(Error::jiff)?;
        Ok(Self { zoned })
    }

    /// Returns the date with the month replaced. The month numbering is 1-based.
    pub fn with_month(self, month: i8) -> Result<Self> {
        let zoned = self.zoned.with().month(month).build().map_err(Error::jiff)?;
        Ok(Self { zoned })
    }

    /// Returns the date with the day of the month replaced.
    pub fn with_day_of_month(self, day: i8) -> Result<Self> {
        let zoned = self.zoned.with().day(day).build().map_err(Error::jiff)?;
        Ok(Self { zoned })
    }

    /// Returns the date with the hour of the day replaced.
    pub fn with_hour(self, hour: i8) -> Result<Self> {
        let zoned = self.zoned.with().hour(hour).build().map_err(Error::jiff)?;
        Ok(Self { zoned })
    }

    /// Returns the date with the minute of the hour replaced.
    pub fn with_minute(self, minute: i8) -> Result<Self> {
        let zoned = self.zoned.with().minute(minute).build().map_err(Error::jiff)?;
        Ok(Self { zoned })
    }

    /// Returns the date with the second of the minute replaced.
    pub fn with_second(self, second: i8) -> Result<Self> {
        let zoned = self.zoned.with().second(second).build().map_err(Error::jiff)?;
        Ok(Self { zoned })
    }

    /// Returns the date with the millisecond of the second replaced.
    pub fn with_millisecond(self, millisecond: i16) -> Result<Self> {
        let zoned = self.zoned.with().millisecond(millisecond).build().map_err(Error::jiff)?;
        Ok(Self { zoned })
    }

    /// Returns the date with the time of day cleared to midnight.
    ///
    /// # Examples
    ///
    /// ```
    /// use omega_date::OmegaDate;
    ///
    /// let date: OmegaDate = "2024-08-21T07:04:37.5Z".parse()?;
    /// assert_eq!(date.start_of_day()?.to_string(), "2024-08-21T00:00:00Z");
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn start_of_day(&self) -> Result<Self> {
        Self::at(self.date(), Time::midnight())
    }

    /// Returns the last representable instant of the current day.
    pub fn end_of_day(&self) -> Result<Self> {
        Self::at(self.date(), Time::MAX)
    }

    /// Returns midnight on the Monday of the current ISO week.
    pub fn start_of_week(&self) -> Result<Self> {
        let back = i64::from(self.zoned.weekday().to_monday_zero_offset());
        self.clone().checked_add_days(-back)?.start_of_day()
    }

    /// Returns the last representable instant of the Sunday of the current ISO week.
    pub fn end_of_week(&self) -> Result<Self> {
        let forward = 6_i64.saturating_sub(i64::from(self.zoned.weekday().to_monday_zero_offset()));
        self.clone().checked_add_days(forward)?.end_of_day()
    }

    /// Returns midnight on the first day of the current month.
    pub fn start_of_month(&self) -> Result<Self> {
        Self::at(self.date().first_of_month(), Time::midnight())
    }

    /// Returns the last representable instant of the current month.
    pub fn end_of_month(&self) -> Result<Self> {
        Self::at(self.date().last_of_month(), Time::MAX)
    }

    /// Returns midnight on January 1 of the current year.
    pub fn start_of_year(&self) -> Result<Self> {
        Self::at(self.date().first_of_year(), Time::midnight())
    }

    /// Returns the last representable instant of the current year.
    pub fn end_of_year(&self) -> Result<Self> {
        Self::at(self.date().last_of_year(), Time::MAX)
    }

    /// Whether this date falls on the first day of its month.
    #[must_use]
    pub fn is_start_of_month(&self) -> bool {
        self.day_of_month() == 1
    }

    /// Whether this date falls on the last day of its month.
    #[must_use]
    pub fn is_end_of_month(&self) -> bool {
        self.day_of_month() == self.days_in_month()
    }

    /// Whether this date falls on a Monday, the first day of the ISO week.
    #[must_use]
    pub fn is_start_of_week(&self) -> bool {
        self.day_of_week() == Weekday::Monday
    }

    /// Whether this date falls on a Sunday, the last day of the ISO week.
    #[must_use]
    pub fn is_end_of_week(&self) -> bool {
        self.day_of_week() == Weekday::Sunday
    }

    /// Whether both dates fall on the same calendar day, regardless of the
    /// time of day.
    #[must_use]
    pub fn is_same_day(&self, other: &Self) -> bool {
        self.year() == other.year() && self.day_of_year() == other.day_of_year()
    }

    /// Whether this date falls on the calendar day before `today`.
    ///
    /// # Examples
    ///
    /// ```
    /// use omega_date::OmegaDate;
    ///
    /// let today = OmegaDate::from_ymd(2024, 3, 1)?;
    /// let yesterday = OmegaDate::from_ymd(2024, 2, 29)?;
    ///
    /// assert!(yesterday.is_yesterday(&today));
    /// assert!(!today.is_yesterday(&today));
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    #[must_use]
    pub fn is_yesterday(&self, today: &Self) -> bool {
        today.clone().checked_add_days(-1).is_ok_and(|y| y.is_same_day(self))
    }

    /// Treats this date as a birth date and returns the age in completed
    /// years as of `today`.
    ///
    /// # Examples
    ///
    /// ```
    /// use omega_date::OmegaDate;
    ///
    /// let born = OmegaDate::from_ymd(1990, 6, 15)?;
    ///
    /// assert_eq!(born.age_in_years(&OmegaDate::from_ymd(2024, 6, 14)?), 33);
    /// assert_eq!(born.age_in_years(&OmegaDate::from_ymd(2024, 6, 15)?), 34);
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    #[must_use]
    pub fn age_in_years(&self, today: &Self) -> i16 {
        let mut age = today.year().saturating_sub(self.year());
        if today.day_of_year() < self.day_of_year() {
            age = age.saturating_sub(1);
        }
        age
    }

    fn date(&self) -> Date {
        self.zoned.datetime().date()
    }
}

/// Compares dates by their instant.
impl PartialEq for OmegaDate {
    fn eq(&self, other: &Self) -> bool {
        self.zoned.timestamp() == other.zoned.timestamp()
    }
}

impl Eq for OmegaDate {}

/// Orders dates by their instant.
impl PartialOrd for OmegaDate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for OmegaDate {
    fn cmp(&self, other: &Self) -> Ordering {
        self.zoned.timestamp().cmp(&other.zoned.timestamp())
    }
}

impl Hash for OmegaDate {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.zoned.timestamp().hash(state);
    }
}

/// Converts `SystemTime` into `OmegaDate`.
impl TryFrom<SystemTime> for OmegaDate {
    type Error = Error;

    fn try_from(value: SystemTime) -> Result<Self> {
        Self::from_system_time(value)
    }
}

/// Converts `OmegaDate` into `SystemTime`.
impl From<OmegaDate> for SystemTime {
    fn from(value: OmegaDate) -> Self {
        value.to_system_time()
    }
}
