//! Track scheduler and schedule metrics.
//!
//! # Algorithm
//!
//! `GreedyScheduler` fills one track at a time with a backward first-fit
//! scan, morning before afternoon. It is a heuristic, not an optimal bin
//! packer, but it always terminates and never drops a talk silently:
//! anything it cannot place is returned as a rejection.
//!
//! # Metrics
//!
//! `ScheduleSummary` reports session utilization of a finished conference.

mod greedy;
mod summary;

pub use greedy::{GreedyScheduler, ScheduleOutcome};
pub use summary::ScheduleSummary;
