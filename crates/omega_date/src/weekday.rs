// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use std::fmt::{self, Display, Formatter};

use crate::{Error, Result};

/// A day of the week.
///
/// Weeks follow the ISO 8601 convention: they start on Monday and end on
/// Sunday, and [`Weekday::number_from_monday`] numbers the days `1..=7`
/// accordingly.
///
/// # Examples
///
/// ```
/// use omega_date::{OmegaDate, Weekday};
///
/// // 2024-08-21 was a Wednesday.
/// let date = OmegaDate::from_ymd(2024, 8, 21)?;
/// assert_eq!(date.day_of_week(), Weekday::Wednesday);
/// assert_eq!(date.day_of_week().number_from_monday(), 3);
///
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Weekday {
    /// Monday, the first day of the ISO week.
    Monday,
    /// Tuesday.
    Tuesday,
    /// Wednesday.
    Wednesday,
    /// Thursday.
    Thursday,
    /// Friday.
    Friday,
    /// Saturday.
    Saturday,
    /// Sunday, the last day of the ISO week.
    Sunday,
}

impl Weekday {
    /// Returns the ISO 8601 number of this weekday, where Monday is `1` and Sunday is `7`.
    #[must_use]
    pub const fn number_from_monday(self) -> u8 {
        match self {
            Self::Monday => 1,
            Self::Tuesday => 2,
            Self::Wednesday => 3,
            Self::Thursday => 4,
            Self::Friday => 5,
            Self::Saturday => 6,
            Self::Sunday => 7,
        }
    }

    /// Returns the weekday for the given ISO 8601 number, where Monday is `1` and Sunday is `7`.
    ///
    /// Returns an error if `number` is outside of `1..=7`.
    ///
    /// # Examples
    ///
    /// ```
    /// use omega_date::Weekday;
    ///
    /// assert_eq!(Weekday::from_number_from_monday(7)?, Weekday::Sunday);
    /// assert!(Weekday::from_number_from_monday(0).is_err());
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn from_number_from_monday(number: u8) -> Result<Self> {
        match number {
            1 => Ok(Self::Monday),
            2 => Ok(Self::Tuesday),
            3 => Ok(Self::Wednesday),
            4 => Ok(Self::Thursday),
            5 => Ok(Self::Friday),
            6 => Ok(Self::Saturday),
            7 => Ok(Self::Sunday),
            _ => Err(Error::out_of_range("weekday number must be in the range 1..=7")),
        }
    }

    /// The English name of this weekday.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Monday => "Monday",
            Self::Tuesday => "Tuesday",
            Self::Wednesday => "Wednesday",
            Self::Thursday => "Thursday",
            Self::Friday => "Friday",
            Self::Saturday => "Saturday",
            Self::Sunday => "Sunday",
        }
    }

    pub(crate) const fn from_jiff(weekday: jiff::civil::Weekday) -> Self {
        match weekday {
            jiff::civil::Weekday::Monday => Self::Monday,
            jiff::civil::Weekday::Tuesday => Self::Tuesday,
            jiff::civil::Weekday::Wednesday => Self::Wednesday,
            jiff::civil::Weekday::Thursday => Self::Thursday,
            jiff::civil::Weekday::Friday => Self::Friday,
            jiff::civil::Weekday::Saturday => Self::Saturday,
            jiff::civil::Weekday::Sunday => Self::Sunday,
        }
    }
}

/// Formats the weekday as its English name, e.g. `Monday`.
impl Display for Weekday {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    static_assertions::assert_impl_all!(Weekday: Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Send, Sync);

    const ALL: [Weekday; 7] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
        Weekday::Sunday,
    ];

    #[test]
    fn numbers_round_trip() {
        for day in ALL {
            let number = day.number_from_monday();
            assert_eq!(Weekday::from_number_from_monday(number).unwrap(), day);
        }
    }

    #[test]
    fn from_number_out_of_range() {
        Weekday::from_number_from_monday(0).unwrap_err();
        Weekday::from_number_from_monday(8).unwrap_err();
    }

    #[test]
    fn ordering_follows_iso_week() {
        assert!(Weekday::Monday < Weekday::Sunday);
        assert!(Weekday::Saturday < Weekday::Sunday);
    }

    #[test]
    fn display() {
        assert_eq!(Weekday::Wednesday.to_string(), "Wednesday");
    }
}
