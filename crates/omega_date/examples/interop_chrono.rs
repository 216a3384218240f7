// Copyright (c) Microsoft Corporation.

//! This sample demonstrates interoperability between `omega_date` and `chrono` time.
//! In particular:
//!
//! - Conversion of `OmegaDate` to `chrono::DateTime<Utc>`
//! - Conversion of `chrono::DateTime<Utc>` back to `OmegaDate`

use chrono::{DateTime, Utc};
use omega_date::{Clock, OmegaDate};

const CHRONO_DISPLAY_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Create a frozen clock so the output is reproducible.
    let clock = Clock::new_frozen_at(std::time::Duration::from_secs(1_724_223_877));

    // Retrieve the current date.
    let date = clock.date();

    // OmegaDate can interoperate with other crates through SystemTime.
    // First, we convert the date to SystemTime. Once we have SystemTime,
    // we can convert it to chrono::DateTime<Utc>.
    let chrono_time: DateTime<Utc> = date.to_system_time().into();

    println!("omega_date:   {date}");
    println!("chrono (UTC): {}", chrono_time.format(CHRONO_DISPLAY_FORMAT));

    // And back again, through the same bridge.
    let round_tripped = OmegaDate::from_system_time(chrono_time.into())?;
    assert_eq!(round_tripped, date);

    Ok(())
}
