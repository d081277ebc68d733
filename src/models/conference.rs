//! Conference model.
//!
//! The conference is the scheduler's output: an ordered, append-only list
//! of sealed tracks.

use serde::Serialize;

use super::{Talk, Track};

/// A conference schedule.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Conference {
    tracks: Vec<Track>,
}

impl Conference {
    /// Creates a conference with no tracks.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seals a track by appending it. Sealed tracks are never modified.
    pub fn add_track(&mut self, track: Track) {
        self.tracks.push(track);
    }

    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    /// Number of sealed tracks.
    pub fn track_count(&self) -> usize {
        self.tracks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    /// Iterates every scheduled talk, track by track, morning before afternoon.
    pub fn talks(&self) -> impl Iterator<Item = &Talk> {
        self.tracks.iter().flat_map(Track::talks)
    }

    /// Total number of scheduled talks.
    pub fn talk_count(&self) -> usize {
        self.tracks.iter().map(Track::talk_count).sum()
    }
}
