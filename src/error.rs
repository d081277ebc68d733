//! Error types.
//!
//! Parse errors are recoverable (the offending line is skipped), scheduling
//! errors describe talks that were left out of the conference, and
//! configuration/I-O errors are fatal for a run.

use std::path::PathBuf;

use thiserror::Error;

/// Result type for fallible crate operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Failure to turn a raw line into a [`Talk`](crate::models::Talk).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The line is empty after trimming.
    #[error("input line is empty")]
    EmptyInput,

    /// Neither a lightning marker nor a trailing `<N>min` was found.
    #[error("could not parse duration from talk: {0}")]
    MissingDuration(String),

    /// Nothing is left of the line once the duration marker is removed.
    #[error("parsed title is empty for line: {0}")]
    EmptyTitle(String),

    /// The duration digits do not form a usable number of minutes.
    #[error("invalid talk duration: {0}")]
    InvalidDuration(String),
}

/// A talk the scheduler could not place.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScheduleError {
    /// The talk cannot fit any session of an empty track.
    #[error("talk '{title}' ({duration}min) does not fit any session (capacity {capacity}min)")]
    UnfittableTalk {
        title: String,
        duration: u32,
        capacity: u32,
    },
}

/// Configuration loading or validation failure.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The config file could not be read.
    #[error("failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The config file is not valid TOML for [`SchedulerConfig`](crate::config::SchedulerConfig).
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    /// The values parse but are inconsistent.
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Top-level crate error.
#[derive(Error, Debug)]
pub enum Error {
    /// Input file could not be opened or read.
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Config(#[from] ConfigError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_messages() {
        assert_eq!(ParseError::EmptyInput.to_string(), "input line is empty");
        assert_eq!(
            ParseError::MissingDuration("Talk".into()).to_string(),
            "could not parse duration from talk: Talk"
        );
    }

    #[test]
    fn test_unfittable_message() {
        let err = ScheduleError::UnfittableTalk {
            title: "Marathon".into(),
            duration: 300,
            capacity: 240,
        };
        assert_eq!(
            err.to_string(),
            "talk 'Marathon' (300min) does not fit any session (capacity 240min)"
        );
    }

    #[test]
    fn test_config_error_wraps() {
        let err: Error = ConfigError::Invalid("bad".into()).into();
        assert_eq!(err.to_string(), "invalid config: bad");
    }
}
