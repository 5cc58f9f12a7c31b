//! Estimation of when a vehicle arriving at a charging station is fully charged.
//!
//! Charging slows down as the battery fills up: the estimate distinguishes a battery below 50%,
//! between 50% and 80%, and above 80%. The inputs are passed explicitly; nothing is read from the
//! environment.
use std::fmt::Display;
use std::str::FromStr;
use std::time::Duration;

use thiserror::Error;

const SECONDS_PER_MINUTE: u64 = 60;
const SECONDS_PER_DAY: u64 = 24 * 60 * SECONDS_PER_MINUTE;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ChargeTimeError {
    #[error("the battery level must be a percentage between 0 and 100, got {0}")]
    InvalidBatteryLevel(u8),
    #[error("'{0}' is not a time of the form H::M::S")]
    InvalidTimeFormat(String),
}

/// The time it takes to charge a battery at `battery_percent` to full.
///
/// Below 50% this is 0.4 minutes per missing percent up to 50%, plus 115 minutes for the rest;
/// below 80% it is 4/3 minutes per missing percent up to 80%, plus 75 minutes; from 80% onwards
/// it is 3.75 minutes per missing percent.
pub fn charging_time(battery_percent: u8) -> Result<Duration, ChargeTimeError> {
    if battery_percent > 100 {
        return Err(ChargeTimeError::InvalidBatteryLevel(battery_percent));
    }

    let percent = u64::from(battery_percent);
    // All rates are whole numbers of seconds per percent.
    let seconds = if percent < 50 {
        (50 - percent) * 24 + (40 + 75) * SECONDS_PER_MINUTE
    } else if percent < 80 {
        (80 - percent) * 80 + 75 * SECONDS_PER_MINUTE
    } else {
        (100 - percent) * 225
    };

    Ok(Duration::from_secs(seconds))
}

/// A time of day with a resolution of one second.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ClockTime {
    seconds_since_midnight: u64,
}

impl ClockTime {
    /// Returns [`None`] if any of the components is out of range.
    pub fn new(hour: u64, minute: u64, second: u64) -> Option<ClockTime> {
        (hour < 24 && minute < 60 && second < 60).then_some(ClockTime {
            seconds_since_midnight: (hour * 60 + minute) * SECONDS_PER_MINUTE + second,
        })
    }

    pub fn hour(&self) -> u64 {
        self.seconds_since_midnight / 3600
    }

    pub fn minute(&self) -> u64 {
        (self.seconds_since_midnight / SECONDS_PER_MINUTE) % 60
    }

    pub fn second(&self) -> u64 {
        self.seconds_since_midnight % SECONDS_PER_MINUTE
    }

    /// The time `duration` later, wrapping around at midnight; sub-second parts are dropped.
    pub fn after(&self, duration: Duration) -> ClockTime {
        ClockTime {
            seconds_since_midnight: (self.seconds_since_midnight + duration.as_secs() % SECONDS_PER_DAY)
                % SECONDS_PER_DAY,
        }
    }
}

impl FromStr for ClockTime {
    type Err = ChargeTimeError;

    /// Parses a time of the form `H::M::S`, e.g. `13::55::26`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ChargeTimeError::InvalidTimeFormat(s.to_owned());

        let components = s
            .trim()
            .split("::")
            .map(|component| component.parse::<u64>().map_err(|_| invalid()))
            .collect::<Result<Vec<_>, _>>()?;

        match components.as_slice() {
            &[hour, minute, second] => ClockTime::new(hour, minute, second).ok_or_else(invalid),
            _ => Err(invalid()),
        }
    }
}

impl Display for ClockTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:02}:{:02}:{:02}",
            self.hour(),
            self.minute(),
            self.second()
        )
    }
}

/// The time at which a vehicle which arrived at `arrived` with `battery_percent` charge is full.
pub fn ready_time(arrived: ClockTime, battery_percent: u8) -> Result<ClockTime, ChargeTimeError> {
    Ok(arrived.after(charging_time(battery_percent)?))
}
