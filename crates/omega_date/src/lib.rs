// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

#![cfg_attr(
    test,
    allow(
        clippy::arithmetic_side_effects,
        reason = "allow these lints in tests to improve the readability of the tests"
    )
)]
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
#![cfg_attr(docsrs, feature(doc_cfg))]

//! A wall-clock date/time value type with calendar arithmetic, difference
//! computation, and a mockable clock.
//!
//! # Quick Start
//!
//! ```no_run
//! use omega_date::{Clock, OmegaDate};
//!
//! let clock = Clock::new();
//!
//! let date = OmegaDate::now(&clock);
//! println!("Current date {date}");
//! println!("{}", date.format_date());
//! println!("Day of month {}", date.day_of_month());
//! println!("Month {}", date.month());
//! println!("Year {}", date.year());
//!
//! let date = date.add_days(1).add_seconds(1);
//! println!("Updated date {date}");
//!
//! let current = OmegaDate::now(&clock);
//! println!("Difference in seconds = {}", date.seconds_since(&current));
//! ```
//!
//! # Why?
//!
//! This crate provides a single value type for wall-clock dates that:
//!
//! - **Keeps calendar math correct** - Additive adjustments roll over month
//!   and year boundaries, clamp short months, and never construct an invalid
//!   calendar state.
//! - **Enables deterministic testing** - "Now" is read from an explicitly
//!   injected [`Clock`]. With the `test-util` feature, [`ClockControl`] pins
//!   or advances the time manually, so tests never depend on wall-clock
//!   execution time.
//! - **Makes difference conventions explicit** - The `*_since` family is
//!   signed and truncates toward zero, documented per method rather than left
//!   to guesswork.
//!
//! # Overview
//!
//! - [`OmegaDate`] - A wall-clock date and time. Supports calendar-component
//!   extraction, additive adjustment in eight units, period boundaries, field
//!   replacement, and signed difference computation.
//! - [`Clock`] - Provides an abstraction for reading the current time. Used
//!   when constructing dates for "now".
//! - [`ClockControl`] - Controls the passage of time. Available when the
//!   `test-util` feature is enabled.
//! - [`Weekday`] - A day of the week, numbered per ISO 8601.
//! - [`Error`] - Represents an error that can occur when constructing or
//!   manipulating dates. Provides limited introspection capabilities.
//!
//! # UTC and time zones
//!
//! All calendar interpretation (component accessors, formatting, parsing,
//! and day arithmetic) happens in UTC. This keeps every operation
//! deterministic and means one calendar day is always exactly 24 hours of
//! absolute time; localization is explicitly out of scope. Code that needs
//! local-time rendering can convert through
//! [`OmegaDate::to_system_time`] and a calendar crate of its choice.
//!
//! # Testing
//!
//! This crate provides a way to control the passage of time in tests via the
//! [`ClockControl`] type, which is exposed when the `test-util` feature is
//! enabled.
//!
//! > **Important:** Never enable the `test-util` feature for production code.
//! > Only use it in your `dev-dependencies`.
//!
//! # Features
//!
//! This crate provides several optional features that can be enabled in your
//! `Cargo.toml`:
//!
//! - **`test-util`** - Enables the [`ClockControl`] type for controlling the
//!   passage of time in tests. **Only enable this in `dev-dependencies`.**
//! - **`serde`** - Adds serialization and deserialization support via
//!   [serde](https://serde.rs/). Dates serialize as ISO 8601 strings.

mod clock;
#[cfg(any(feature = "test-util", test))]
mod clock_control;
#[cfg(any(feature = "test-util", test))]
mod clock_time;
mod date;
mod error;
mod fmt;
mod weekday;

pub use clock::Clock;
#[cfg(any(feature = "test-util", test))]
#[cfg_attr(docsrs, doc(cfg(feature = "test-util")))]
pub use clock_control::ClockControl;
#[cfg(any(feature = "test-util", test))]
#[cfg_attr(docsrs, doc(cfg(feature = "test-util")))]
pub use clock_time::ClockTime;
pub use date::OmegaDate;
pub use error::{Error, Result};
pub use weekday::Weekday;
