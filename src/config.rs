//! Scheduler configuration.
//!
//! Session capacities and the daily timetable. Every field has a default
//! matching the classic conference format, so an empty TOML document (or no
//! config file at all) yields a usable configuration.
//!
//! ```toml
//! [limits]
//! morning_minutes = 180
//! afternoon_min_minutes = 180
//! afternoon_max_minutes = 240
//!
//! [timetable]
//! morning_start = "09:00:00"
//! lunch = "12:00:00"
//! afternoon_start = "13:00:00"
//! networking_earliest = "16:00:00"
//! networking_latest = "17:00:00"
//! ```

use std::fs;
use std::path::Path;

use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};

/// Morning session capacity (minutes). The session must be filled exactly.
pub const MORNING_SESSION_MINUTES: u32 = 180;
/// Minimum afternoon length (minutes) for the session to count as full.
pub const MIN_AFTERNOON_SESSION_MINUTES: u32 = 180;
/// Hard cap on afternoon length (minutes).
pub const MAX_AFTERNOON_SESSION_MINUTES: u32 = 240;

/// Session capacity rules applied to every track.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionLimits {
    pub morning_minutes: u32,
    pub afternoon_min_minutes: u32,
    pub afternoon_max_minutes: u32,
}

impl Default for SessionLimits {
    fn default() -> Self {
        Self {
            morning_minutes: MORNING_SESSION_MINUTES,
            afternoon_min_minutes: MIN_AFTERNOON_SESSION_MINUTES,
            afternoon_max_minutes: MAX_AFTERNOON_SESSION_MINUTES,
        }
    }
}

impl SessionLimits {
    /// Longest talk that an empty track could ever hold.
    #[inline]
    pub fn longest_session(&self) -> u32 {
        self.morning_minutes.max(self.afternoon_max_minutes)
    }
}

/// Wall-clock anchors used when rendering a track.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Timetable {
    pub morning_start: NaiveTime,
    pub lunch: NaiveTime,
    pub afternoon_start: NaiveTime,
    /// The networking event never starts before this.
    pub networking_earliest: NaiveTime,
    /// The networking event is pulled back to this when it would start later.
    pub networking_latest: NaiveTime,
}

impl Default for Timetable {
    fn default() -> Self {
        Self {
            morning_start: clock(9, 0),
            lunch: clock(12, 0),
            afternoon_start: clock(13, 0),
            networking_earliest: clock(16, 0),
            networking_latest: clock(17, 0),
        }
    }
}

/// Complete scheduler configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SchedulerConfig {
    pub limits: SessionLimits,
    pub timetable: Timetable,
}

impl SchedulerConfig {
    /// Parses and validates a TOML document.
    pub fn from_toml_str(source: &str) -> std::result::Result<Self, ConfigError> {
        let config: Self = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a TOML config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let source = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::from_toml_str(&source)?)
    }

    /// Checks that limits and timetable are internally consistent.
    pub fn validate(&self) -> std::result::Result<(), ConfigError> {
        let limits = &self.limits;
        if limits.morning_minutes == 0 {
            return Err(ConfigError::Invalid(
                "morning_minutes must be greater than zero".into(),
            ));
        }
        if limits.afternoon_max_minutes == 0 {
            return Err(ConfigError::Invalid(
                "afternoon_max_minutes must be greater than zero".into(),
            ));
        }
        if limits.afternoon_min_minutes > limits.afternoon_max_minutes {
            return Err(ConfigError::Invalid(format!(
                "afternoon_min_minutes ({}) exceeds afternoon_max_minutes ({})",
                limits.afternoon_min_minutes, limits.afternoon_max_minutes
            )));
        }

        let t = &self.timetable;
        let ordered = [
            ("morning_start", t.morning_start),
            ("lunch", t.lunch),
            ("afternoon_start", t.afternoon_start),
            ("networking_earliest", t.networking_earliest),
            ("networking_latest", t.networking_latest),
        ];
        for pair in ordered.windows(2) {
            let (prev_name, prev) = pair[0];
            let (next_name, next) = pair[1];
            if next < prev {
                return Err(ConfigError::Invalid(format!(
                    "timetable {next_name} ({next}) is earlier than {prev_name} ({prev})"
                )));
            }
        }

        let morning_end = minute_of_day(t.morning_start) + limits.morning_minutes;
        if morning_end > minute_of_day(t.lunch) {
            return Err(ConfigError::Invalid(format!(
                "morning session of {}min starting at {} runs past lunch ({})",
                limits.morning_minutes, t.morning_start, t.lunch
            )));
        }
        let afternoon_end = minute_of_day(t.afternoon_start) + limits.afternoon_max_minutes;
        if afternoon_end > MINUTES_PER_DAY {
            return Err(ConfigError::Invalid(format!(
                "afternoon session of up to {}min starting at {} runs past midnight",
                limits.afternoon_max_minutes, t.afternoon_start
            )));
        }
        Ok(())
    }
}

const MINUTES_PER_DAY: u32 = 24 * 60;

fn minute_of_day(time: NaiveTime) -> u32 {
    time.num_seconds_from_midnight() / 60
}

fn clock(hour: u32, minute: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, minute, 0).unwrap_or(NaiveTime::MIN)
}
