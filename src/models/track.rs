//! Track model.
//!
//! A track is one room's day: a morning session, lunch, an afternoon
//! session, and a networking event. Only the two sessions hold talks.
//!
//! # Capacity Rules
//! - Morning: exactly `morning_minutes` of talks. A talk is accepted only if
//!   it fits the remaining time; the session is full once it is reached.
//! - Afternoon: a window `[afternoon_min_minutes, afternoon_max_minutes]`.
//!   Talks are accepted up to the maximum; the session is full anywhere
//!   inside the window (both ends inclusive).
//!
//! A track is full when both sessions are full.

use serde::Serialize;

use super::Talk;
use crate::config::SessionLimits;

/// One conference track.
///
/// Session durations always equal the sum of the talks in that session;
/// rejected additions leave the track untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Track {
    morning_talks: Vec<Talk>,
    afternoon_talks: Vec<Talk>,
    morning_duration: u32,
    afternoon_duration: u32,
    #[serde(skip)]
    limits: SessionLimits,
}

impl Track {
    /// Creates an empty track with the default session limits.
    pub fn new() -> Self {
        Self::with_limits(SessionLimits::default())
    }

    /// Creates an empty track with custom session limits.
    pub fn with_limits(limits: SessionLimits) -> Self {
        Self {
            morning_talks: Vec::new(),
            afternoon_talks: Vec::new(),
            morning_duration: 0,
            afternoon_duration: 0,
            limits,
        }
    }

    pub fn morning_talks(&self) -> &[Talk] {
        &self.morning_talks
    }

    pub fn afternoon_talks(&self) -> &[Talk] {
        &self.afternoon_talks
    }

    /// Scheduled morning minutes.
    #[inline]
    pub fn morning_duration(&self) -> u32 {
        self.morning_duration
    }

    /// Scheduled afternoon minutes.
    #[inline]
    pub fn afternoon_duration(&self) -> u32 {
        self.afternoon_duration
    }

    pub fn limits(&self) -> &SessionLimits {
        &self.limits
    }

    /// Minutes left before the morning session is full.
    #[inline]
    pub fn time_remaining_morning(&self) -> u32 {
        self.limits
            .morning_minutes
            .saturating_sub(self.morning_duration)
    }

    /// Minutes left to the afternoon minimum and maximum, respectively.
    ///
    /// Not clamped: the first value turns negative once the minimum has been
    /// passed.
    pub fn time_remaining_afternoon(&self) -> (i64, i64) {
        let current = i64::from(self.afternoon_duration);
        (
            i64::from(self.limits.afternoon_min_minutes) - current,
            i64::from(self.limits.afternoon_max_minutes) - current,
        )
    }

    #[inline]
    pub fn is_morning_full(&self) -> bool {
        self.morning_duration >= self.limits.morning_minutes
    }

    #[inline]
    pub fn is_afternoon_full(&self) -> bool {
        (self.limits.afternoon_min_minutes..=self.limits.afternoon_max_minutes)
            .contains(&self.afternoon_duration)
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.is_morning_full() && self.is_afternoon_full()
    }

    /// Whether either session holds a talk. Empty tracks are never sealed.
    #[inline]
    pub fn has_any_talks(&self) -> bool {
        !self.morning_talks.is_empty() || !self.afternoon_talks.is_empty()
    }

    /// Total number of talks across both sessions.
    pub fn talk_count(&self) -> usize {
        self.morning_talks.len() + self.afternoon_talks.len()
    }

    /// Iterates morning talks, then afternoon talks.
    pub fn talks(&self) -> impl Iterator<Item = &Talk> {
        self.morning_talks.iter().chain(self.afternoon_talks.iter())
    }

    /// Adds a talk to the morning session if it fits the remaining time.
    ///
    /// Returns `false` (and changes nothing) when it does not.
    pub fn add_morning_talk(&mut self, talk: &Talk) -> bool {
        if self.is_morning_full() || talk.duration() > self.time_remaining_morning() {
            return false;
        }
        self.morning_talks.push(talk.clone());
        self.morning_duration += talk.duration();
        true
    }

    /// Adds a talk to the afternoon session if it stays within the maximum.
    ///
    /// Returns `false` (and changes nothing) when it does not.
    pub fn add_afternoon_talk(&mut self, talk: &Talk) -> bool {
        if self.afternoon_duration >= self.limits.afternoon_max_minutes {
            return false;
        }
        let (_, max_remaining) = self.time_remaining_afternoon();
        if i64::from(talk.duration()) > max_remaining {
            return false;
        }
        self.afternoon_talks.push(talk.clone());
        self.afternoon_duration += talk.duration();
        true
    }
}

impl Default for Track {
    fn default() -> Self {
        Self::new()
    }
}
