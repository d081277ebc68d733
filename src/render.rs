//! Plain-text schedule rendering.
//!
//! Each track renders as:
//!
//! ```text
//! Track 1:
//! 09:00AM Writing Fast Tests Against Enterprise Rails
//! 10:00AM Overdoing it in Python
//! ...
//! 12:00PM Lunch
//! 01:00PM Ruby on Rails: Why We Should Move On
//! ...
//! 04:00PM Networking Event
//!
//! ```
//!
//! The clock starts at the session start and advances by each talk's
//! duration. Lunch is always printed at the timetable's lunch time. The
//! networking event follows the last afternoon talk, but never before
//! `networking_earliest`. See [`ScheduleRenderer::networking_time`] for the
//! upper clamp.

use std::io::{self, Write};

use chrono::{Duration, NaiveTime, Timelike};

use crate::config::Timetable;
use crate::models::{Conference, Talk, Track};

/// Printed instead of a schedule when there are no tracks.
pub const NO_TRACKS_MESSAGE: &str = "No tracks scheduled.";

/// Formats a clock time as `HH:MMAM` / `HH:MMPM` (12-hour clock).
pub fn format_clock(time: NaiveTime) -> String {
    time.format("%I:%M%p").to_string()
}

/// Renders a conference as plain text lines.
#[derive(Debug, Clone, Default)]
pub struct ScheduleRenderer {
    timetable: Timetable,
}

impl ScheduleRenderer {
    /// Creates a renderer with the default timetable.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the timetable.
    pub fn with_timetable(mut self, timetable: Timetable) -> Self {
        self.timetable = timetable;
        self
    }

    /// All output lines, without trailing newlines.
    pub fn lines(&self, conference: &Conference) -> Vec<String> {
        if conference.is_empty() {
            return vec![NO_TRACKS_MESSAGE.to_string()];
        }

        let mut lines = Vec::new();
        for (index, track) in conference.tracks().iter().enumerate() {
            self.push_track(index + 1, track, &mut lines);
        }
        lines
    }

    /// The whole schedule as one string, one line per `\n`.
    pub fn render(&self, conference: &Conference) -> String {
        let mut out = String::new();
        for line in self.lines(conference) {
            out.push_str(&line);
            out.push('\n');
        }
        out
    }

    /// Writes the schedule to `writer`.
    pub fn write_to<W: Write>(&self, conference: &Conference, mut writer: W) -> io::Result<()> {
        for line in self.lines(conference) {
            writeln!(writer, "{line}")?;
        }
        writer.flush()
    }

    /// Start of the networking event for an afternoon ending at `afternoon_end`.
    ///
    /// Ends before `networking_earliest` are pushed forward to it. An end
    /// in or after the hour of `networking_latest`, past the top of the hour,
    /// is pulled back to `networking_latest`. On-the-hour ends at or after
    /// that hour are kept as they are.
    pub fn networking_time(&self, afternoon_end: NaiveTime) -> NaiveTime {
        let t = &self.timetable;
        if afternoon_end < t.networking_earliest {
            t.networking_earliest
        } else if afternoon_end.hour() >= t.networking_latest.hour() && afternoon_end.minute() > 0
        {
            t.networking_latest
        } else {
            afternoon_end
        }
    }

    fn push_track(&self, number: usize, track: &Track, lines: &mut Vec<String>) {
        lines.push(format!("Track {number}:"));

        push_session(self.timetable.morning_start, track.morning_talks(), lines);
        lines.push(format!("{} Lunch", format_clock(self.timetable.lunch)));

        let afternoon_end =
            push_session(self.timetable.afternoon_start, track.afternoon_talks(), lines);
        lines.push(format!(
            "{} Networking Event",
            format_clock(self.networking_time(afternoon_end))
        ));

        lines.push(String::new());
    }
}

/// Pushes one line per talk and returns the clock after the last one.
fn push_session(start: NaiveTime, talks: &[Talk], lines: &mut Vec<String>) -> NaiveTime {
    let mut clock = start;
    for talk in talks {
        lines.push(format!("{} {}", format_clock(clock), talk.title()));
        let (next, _) = clock.overflowing_add_signed(Duration::minutes(i64::from(talk.duration())));
        clock = next;
    }
    clock
}
