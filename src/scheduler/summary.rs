//! Schedule quality metrics.
//!
//! Computes how well a finished conference uses its sessions.
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Scheduled minutes | Sum of all talk durations |
//! | Full tracks | Tracks whose morning and afternoon are both full |
//! | Morning utilization | Mean of morning minutes / morning capacity |
//! | Afternoon utilization | Mean of afternoon minutes / afternoon maximum |

use serde::Serialize;

use crate::config::SessionLimits;
use crate::models::Conference;

/// Conference-level scheduling metrics.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScheduleSummary {
    pub track_count: usize,
    pub talk_count: usize,
    pub scheduled_minutes: u64,
    pub full_tracks: usize,
    /// Average morning fill ratio (0.0..=1.0).
    pub avg_morning_utilization: f64,
    /// Average afternoon fill ratio against the maximum (0.0..=1.0).
    pub avg_afternoon_utilization: f64,
}

impl ScheduleSummary {
    /// Computes metrics for a conference scheduled under `limits`.
    pub fn calculate(conference: &Conference, limits: &SessionLimits) -> Self {
        let tracks = conference.tracks();
        let scheduled_minutes = tracks
            .iter()
            .map(|t| u64::from(t.morning_duration()) + u64::from(t.afternoon_duration()))
            .sum();
        let full_tracks = tracks.iter().filter(|t| t.is_full()).count();

        let (avg_morning_utilization, avg_afternoon_utilization) = if tracks.is_empty() {
            (0.0, 0.0)
        } else {
            let n = tracks.len() as f64;
            let morning: f64 = tracks
                .iter()
                .map(|t| ratio(t.morning_duration(), limits.morning_minutes))
                .sum();
            let afternoon: f64 = tracks
                .iter()
                .map(|t| ratio(t.afternoon_duration(), limits.afternoon_max_minutes))
                .sum();
            (morning / n, afternoon / n)
        };

        Self {
            track_count: tracks.len(),
            talk_count: conference.talk_count(),
            scheduled_minutes,
            full_tracks,
            avg_morning_utilization,
            avg_afternoon_utilization,
        }
    }
}

fn ratio(used: u32, capacity: u32) -> f64 {
    if capacity == 0 {
        0.0
    } else {
        f64::from(used) / f64::from(capacity)
    }
}
