// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use std::time::{Duration, SystemTime};

use crate::OmegaDate;

/// Represents a point in time accepted by [`ClockControl`][crate::ClockControl].
#[derive(Debug)]
#[non_exhaustive]
pub enum ClockTime {
    /// Represents system time.
    System(SystemTime),
    /// Represents a specific date.
    Date(OmegaDate),
    /// Represents an offset duration from the UNIX epoch.
    Offset(Duration),
}

impl From<SystemTime> for ClockTime {
    fn from(time: SystemTime) -> Self {
        Self::System(time)
    }
}

impl From<Duration> for ClockTime {
    fn from(duration: Duration) -> Self {
        Self::Offset(duration)
    }
}

impl From<OmegaDate> for ClockTime {
    fn from(date: OmegaDate) -> Self {
        Self::Date(date)
    }
}
