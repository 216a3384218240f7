// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! This example renders a date snapshot, adjusts it by a day and a second,
//! and prints the differences against a second snapshot in four granularities.

use omega_date::{Clock, OmegaDate};

fn main() -> omega_date::Result<()> {
    let clock = Clock::new();

    let date = OmegaDate::now(&clock);
    println!("Current date {date}");
    println!("{}", date.format_date());
    println!("Day of month {}", date.day_of_month());
    println!("Month {}", date.month());
    println!("Year {}", date.year());
    println!();

    let date = date.checked_add_days(1)?.checked_add_seconds(1)?;
    println!("Updated date {date}");
    println!("{}", date.format_date());
    println!("Day of month {}", date.day_of_month());
    println!("Month {}", date.month());
    println!("Year {}", date.year());
    println!();

    let current_date = OmegaDate::now(&clock);
    println!("Difference between new date in millis = {}", date.millis_since(&current_date));
    println!("Difference between new date in sec = {}", date.seconds_since(&current_date));
    println!("Difference between new date in min = {}", date.minutes_since(&current_date));
    println!("Difference between new date in days = {}", date.days_since(&current_date));

    Ok(())
}
