//! Greedy first-fit track scheduler.
//!
//! # Algorithm
//!
//! Repeated rounds over the pool of unscheduled talks until it is empty:
//! 1. Seal the working track if it is full and start a fresh one.
//! 2. Morning pass: if the morning is not full, scan the pool from the end
//!    towards the start, adding every talk that fits.
//! 3. Afternoon pass: if the morning is now full, scan the pool backwards
//!    again, adding every talk that stays under the afternoon maximum.
//! 4. If the round placed nothing, seal the working track when it holds
//!    talks; an empty working track means nothing left can ever be placed.
//!
//! Each pass marks accepted talks and compacts the pool once afterwards,
//! so the relative order of the remaining talks is preserved.
//!
//! Talks later in the pool are preferred within a pass. The result is
//! deterministic but not an optimal packing.
//!
//! # Unfittable Talks
//! Talks longer than every session are rejected before the first round.
//! A round that stalls on an empty track rejects the rest of the pool.
//! Rejections are returned in [`ScheduleOutcome::rejected`], so the loop
//! always terminates.
//!
//! # Complexity
//! O(r * n) where r = rounds and n = talks.

use tracing::{debug, warn};

use crate::config::SessionLimits;
use crate::error::ScheduleError;
use crate::models::{Conference, Talk, Track};

/// Result of a scheduling run.
#[derive(Debug, Clone, Default)]
pub struct ScheduleOutcome {
    /// Sealed tracks, in the order they were filled.
    pub conference: Conference,
    /// Talks that could not be placed in any track.
    pub rejected: Vec<ScheduleError>,
}

impl ScheduleOutcome {
    /// Whether every input talk was scheduled.
    pub fn is_complete(&self) -> bool {
        self.rejected.is_empty()
    }
}

/// Greedy first-fit scheduler.
///
/// # Example
///
/// ```
/// use conference_scheduler::models::Talk;
/// use conference_scheduler::scheduler::GreedyScheduler;
///
/// let talks = vec![
///     Talk::new("Rails Magic", 60).unwrap(),
///     Talk::new("Common Ruby Errors", 45).unwrap(),
///     Talk::lightning("Rails for Python Developers").unwrap(),
/// ];
/// let outcome = GreedyScheduler::new().schedule(talks);
/// assert_eq!(outcome.conference.track_count(), 1);
/// assert_eq!(outcome.conference.talk_count(), 3);
/// assert!(outcome.is_complete());
/// ```
#[derive(Debug, Clone, Default)]
pub struct GreedyScheduler {
    limits: SessionLimits,
}

impl GreedyScheduler {
    /// Creates a scheduler with the default session limits.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the session limits applied to every track.
    pub fn with_limits(mut self, limits: SessionLimits) -> Self {
        self.limits = limits;
        self
    }

    /// Distributes talks across tracks.
    ///
    /// Every input talk ends up exactly once in either a track of the
    /// returned conference or in the rejected list.
    pub fn schedule(&self, talks: Vec<Talk>) -> ScheduleOutcome {
        let longest = self.limits.longest_session();
        let (mut pool, oversized): (Vec<Talk>, Vec<Talk>) = talks
            .into_iter()
            .partition(|talk| talk.fits_longest_session(longest));

        let mut rejected: Vec<ScheduleError> = oversized
            .into_iter()
            .map(|talk| reject(talk, longest))
            .collect();

        let mut conference = Conference::new();
        let mut track = Track::with_limits(self.limits);
        let mut round = 0usize;

        while !pool.is_empty() {
            round += 1;

            if track.is_full() {
                self.seal(&mut conference, &mut track);
            }

            let mut placed = 0;
            if !track.is_morning_full() {
                placed += fill_pass(&mut pool, |talk| track.add_morning_talk(talk));
            }
            if track.is_morning_full() {
                placed += fill_pass(&mut pool, |talk| track.add_afternoon_talk(talk));
            }

            debug!(
                round,
                placed,
                remaining = pool.len(),
                morning = track.morning_duration(),
                afternoon = track.afternoon_duration(),
                "scheduling round finished"
            );

            if placed == 0 && !pool.is_empty() {
                if track.has_any_talks() {
                    self.seal(&mut conference, &mut track);
                } else {
                    let capacity = self.limits.morning_minutes;
                    rejected.extend(pool.drain(..).map(|talk| reject(talk, capacity)));
                }
            }
        }

        self.seal(&mut conference, &mut track);

        debug!(
            tracks = conference.track_count(),
            talks = conference.talk_count(),
            rejected = rejected.len(),
            "scheduling finished"
        );

        ScheduleOutcome {
            conference,
            rejected,
        }
    }

    /// Appends the working track (if it holds talks) and replaces it with a fresh one.
    fn seal(&self, conference: &mut Conference, track: &mut Track) {
        let sealed = std::mem::replace(track, Track::with_limits(self.limits));
        if sealed.has_any_talks() {
            debug!(
                track = conference.track_count() + 1,
                morning = sealed.morning_duration(),
                afternoon = sealed.afternoon_duration(),
                "sealing track"
            );
            conference.add_track(sealed);
        }
    }
}

/// One backward pass over the pool. Removes every talk `place` accepts and
/// returns how many were removed.
fn fill_pass(pool: &mut Vec<Talk>, mut place: impl FnMut(&Talk) -> bool) -> usize {
    let mut taken = vec![false; pool.len()];
    for (index, talk) in pool.iter().enumerate().rev() {
        if place(talk) {
            taken[index] = true;
        }
    }

    let count = taken.iter().filter(|&&t| t).count();
    if count > 0 {
        let mut flags = taken.into_iter();
        pool.retain(|_| !flags.next().unwrap_or(false));
    }
    count
}

fn reject(talk: Talk, capacity: u32) -> ScheduleError {
    warn!(
        title = %talk.title(),
        duration = talk.duration(),
        capacity,
        "talk does not fit any session"
    );
    ScheduleError::UnfittableTalk {
        title: talk.title().to_string(),
        duration: talk.duration(),
        capacity,
    }
}
