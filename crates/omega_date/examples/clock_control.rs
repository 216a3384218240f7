// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! This example demonstrates how to use `ClockControl` to control the passage of time.

use std::time::Duration;

use omega_date::{ClockControl, OmegaDate};

fn main() {
    let control = ClockControl::new_at(Duration::from_secs(1_000_000));
    let clock = control.to_clock();

    // Capture the current time.
    let first = OmegaDate::now(&clock);

    // Capture it again later.
    let second = OmegaDate::now(&clock);

    // Notice that the time is the same: the clock only moves when told to.
    assert_eq!(first, second);

    // Advance the clock by one day and 90 seconds.
    control.advance(Duration::from_secs(86_400 + 90));

    let later = OmegaDate::now(&clock);
    assert_eq!(later.days_since(&first), 1);
    assert_eq!(later.minutes_since(&first), 24 * 60 + 1);

    println!("first: {first}");
    println!("later: {later} ({} seconds ahead)", later.seconds_since(&first));
}
