//! Talk model and line parser.
//!
//! A talk line takes one of two forms:
//! - `<title> <N>min`, e.g. `Writing Fast Tests Against Enterprise Rails 60min`
//! - any line containing `lightning`, which is a fixed 5-minute talk
//!
//! The lightning marker wins: `Rails lightning 60min` is a 5-minute talk
//! titled `Rails  60min`. Only the first `lightning` is removed.

use std::str::FromStr;
use std::sync::OnceLock;

use regex::Regex;
use serde::Serialize;

use crate::error::ParseError;

/// Marker that turns a line into a lightning talk.
pub const LIGHTNING_MARKER: &str = "lightning";
/// Duration of every lightning talk (minutes).
pub const LIGHTNING_MINUTES: u32 = 5;

static DURATION_SUFFIX: OnceLock<Regex> = OnceLock::new();

fn duration_suffix() -> &'static Regex {
    DURATION_SUFFIX.get_or_init(|| Regex::new(r"(\d+)min$").expect("Invalid duration pattern"))
}

/// A single conference talk.
///
/// Immutable once created: the title is non-empty and the duration is a
/// positive number of minutes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Talk {
    title: String,
    duration: u32,
}

impl Talk {
    /// Creates a talk from already-structured parts.
    ///
    /// # Errors
    /// - [`ParseError::EmptyTitle`] for a blank title
    /// - [`ParseError::InvalidDuration`] for a zero duration
    pub fn new(title: impl Into<String>, duration: u32) -> Result<Self, ParseError> {
        let title = title.into();
        if title.trim().is_empty() {
            return Err(ParseError::EmptyTitle(title));
        }
        if duration == 0 {
            return Err(ParseError::InvalidDuration(format!("{duration}min")));
        }
        Ok(Self { title, duration })
    }

    /// Creates a lightning talk.
    pub fn lightning(title: impl Into<String>) -> Result<Self, ParseError> {
        Self::new(title, LIGHTNING_MINUTES)
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Length in minutes.
    #[inline]
    pub fn duration(&self) -> u32 {
        self.duration
    }

    /// Parses a raw input line.
    ///
    /// # Errors
    /// - [`ParseError::EmptyInput`] for a blank line
    /// - [`ParseError::MissingDuration`] when no `<N>min` suffix is present
    /// - [`ParseError::EmptyTitle`] when only the duration marker is present
    /// - [`ParseError::InvalidDuration`] for `0min` or an out-of-range number
    pub fn parse(line: &str) -> Result<Self, ParseError> {
        let line = line.trim();
        if line.is_empty() {
            return Err(ParseError::EmptyInput);
        }

        let (title, duration) = if line.contains(LIGHTNING_MARKER) {
            let title = line.replacen(LIGHTNING_MARKER, "", 1);
            (title.trim().to_string(), LIGHTNING_MINUTES)
        } else {
            let captures = duration_suffix()
                .captures(line)
                .ok_or_else(|| ParseError::MissingDuration(line.to_string()))?;
            let (Some(suffix), Some(digits)) = (captures.get(0), captures.get(1)) else {
                return Err(ParseError::MissingDuration(line.to_string()));
            };
            let duration: u32 = digits
                .as_str()
                .parse()
                .map_err(|_| ParseError::InvalidDuration(digits.as_str().to_string()))?;
            (line[..suffix.start()].trim().to_string(), duration)
        };

        if title.is_empty() {
            return Err(ParseError::EmptyTitle(line.to_string()));
        }
        Self::new(title, duration)
    }

    /// Whether this talk could be placed in some session of an empty track.
    #[inline]
    pub fn fits_longest_session(&self, longest_session: u32) -> bool {
        self.duration <= longest_session
    }
}

impl FromStr for Talk {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_regular_talk() {
        let talk = Talk::parse("Writing Fast Tests Against Enterprise Rails 60min").unwrap();
        assert_eq!(talk.title, "Writing Fast Tests Against Enterprise Rails");
        assert_eq!(talk.duration, 60);
    }

    #[test]
    fn test_lightning_talk() {
        let talk = Talk::parse("Rails for Python Developers lightning").unwrap();
        assert_eq!(talk, Talk::lightning("Rails for Python Developers").unwrap());
    }

    #[test]
    fn test_lightning_marker_anywhere() {
        let talk = Talk::parse("A lightning tour of Rust").unwrap();
        assert_eq!(talk.title, "A  tour of Rust");
        assert_eq!(talk.duration, 5);
    }

    #[test]
    fn test_lightning_only_first_occurrence_removed() {
        let talk = Talk::parse("lightning about lightning").unwrap();
        assert_eq!(talk.title, "about lightning");
        assert_eq!(talk.duration, 5);
    }

    #[test]
    fn test_lightning_wins_over_minutes() {
        let talk = Talk::parse("Quick Rails lightning 60min").unwrap();
        assert_eq!(talk.duration, 5);
        assert_eq!(talk.title, "Quick Rails  60min");
    }

    #[test]
    fn test_numbers_in_title() {
        let talk = Talk::parse("Ruby on Rails 3: The Way of the Warrior 30min").unwrap();
        assert_eq!(talk.title, "Ruby on Rails 3: The Way of the Warrior");
        assert_eq!(talk.duration, 30);
    }

    #[test]
    fn test_surrounding_whitespace() {
        let talk = Talk::parse("  Overdoing it in Python lightning  ").unwrap();
        assert_eq!(talk.title, "Overdoing it in Python");

        let talk = Talk::parse("\tSit Down and Write 30min \n").unwrap();
        assert_eq!(talk.title, "Sit Down and Write");
        assert_eq!(talk.duration, 30);
    }

    #[test]
    fn test_no_space_before_duration() {
        let talk = Talk::parse("Clojure45min").unwrap();
        assert_eq!(talk.title, "Clojure");
        assert_eq!(talk.duration, 45);
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(Talk::parse(""), Err(ParseError::EmptyInput));
        assert_eq!(Talk::parse("   \t"), Err(ParseError::EmptyInput));
    }

    #[test]
    fn test_missing_duration() {
        assert!(matches!(
            Talk::parse("A talk without duration"),
            Err(ParseError::MissingDuration(_))
        ));
        assert!(matches!(
            Talk::parse("A talk with invalid duration 60minutes"),
            Err(ParseError::MissingDuration(_))
        ));
        assert!(matches!(
            Talk::parse("Common Ruby Errors 45"),
            Err(ParseError::MissingDuration(_))
        ));
        assert!(matches!(
            Talk::parse("Accessibility 30 min"),
            Err(ParseError::MissingDuration(_))
        ));
    }

    #[test]
    fn test_empty_title() {
        assert!(matches!(Talk::parse("60min"), Err(ParseError::EmptyTitle(_))));
        assert!(matches!(
            Talk::parse("lightning"),
            Err(ParseError::EmptyTitle(_))
        ));
        assert!(matches!(
            Talk::parse("  lightning  "),
            Err(ParseError::EmptyTitle(_))
        ));
    }

    #[test]
    fn test_invalid_duration() {
        assert!(matches!(
            Talk::parse("Nothing to see 0min"),
            Err(ParseError::InvalidDuration(_))
        ));
        assert!(matches!(
            Talk::parse("Forever 99999999999999999999min"),
            Err(ParseError::InvalidDuration(_))
        ));
    }

    #[test]
    fn test_from_str() {
        let talk: Talk = "Sit Down and Write 30min".parse().unwrap();
        assert_eq!(talk, Talk::new("Sit Down and Write", 30).unwrap());
    }

    #[test]
    fn test_fits_longest_session() {
        assert!(Talk::new("Long", 240).unwrap().fits_longest_session(240));
        assert!(!Talk::new("Too long", 241).unwrap().fits_longest_session(240));
    }

    #[test]
    fn test_new_enforces_invariants() {
        assert!(matches!(Talk::new("", 30), Err(ParseError::EmptyTitle(_))));
        assert!(matches!(Talk::new("   ", 30), Err(ParseError::EmptyTitle(_))));
        assert!(matches!(
            Talk::new("Nothing", 0),
            Err(ParseError::InvalidDuration(_))
        ));

        let talk = Talk::new("Rails Magic", 60).unwrap();
        assert_eq!(talk.title(), "Rails Magic");
        assert_eq!(talk.duration(), 60);
    }
}
