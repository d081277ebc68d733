//! Conference track scheduling.
//!
//! Turns a free-form list of talks into a multi-track conference schedule:
//! each track has a fixed-length morning session, lunch, a flexible
//! afternoon session, and a networking event.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Talk` (with its line parser), `Track`, `Conference`
//! - **`scheduler`**: `GreedyScheduler` and `ScheduleSummary` metrics
//! - **`render`**: Plain-text schedule output
//! - **`validation`**: Talk pool checks (oversized talks, duplicate titles)
//! - **`input`**: Line-oriented talk loading with per-line error reporting
//! - **`config`**: Session limits and timetable, loadable from TOML
//! - **`error`**: Error types
//! - **`telemetry`**: `tracing` subscriber setup for the binary
//!
//! # Example
//!
//! ```
//! use conference_scheduler::models::Talk;
//! use conference_scheduler::render::ScheduleRenderer;
//! use conference_scheduler::scheduler::GreedyScheduler;
//!
//! let talks = vec![
//!     Talk::parse("Writing Fast Tests Against Enterprise Rails 60min").unwrap(),
//!     Talk::parse("Rails for Python Developers lightning").unwrap(),
//! ];
//! let outcome = GreedyScheduler::new().schedule(talks);
//! let lines = ScheduleRenderer::new().lines(&outcome.conference);
//! assert_eq!(lines[1], "09:00AM Rails for Python Developers");
//! assert_eq!(lines[2], "09:05AM Writing Fast Tests Against Enterprise Rails");
//! ```

pub mod config;
pub mod error;
pub mod input;
pub mod models;
pub mod render;
pub mod scheduler;
pub mod telemetry;
pub mod validation;
