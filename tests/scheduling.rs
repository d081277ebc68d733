use std::collections::HashSet;
use std::io::Cursor;

use conference_scheduler::config::{SchedulerConfig, SessionLimits};
use conference_scheduler::input::{load_talks, read_talks};
use conference_scheduler::models::Talk;
use conference_scheduler::render::ScheduleRenderer;
use conference_scheduler::scheduler::{GreedyScheduler, ScheduleSummary};
use conference_scheduler::validation::validate_talks;

const TALKS: &str = include_str!("fixtures/talks.txt");
const EXPECTED_SCHEDULE: &str = include_str!("fixtures/expected_schedule.txt");

fn classic_talks() -> Vec<Talk> {
    let parsed = read_talks(Cursor::new(TALKS)).unwrap();
    assert!(parsed.skipped.is_empty());
    parsed.talks
}

#[test]
fn test_classic_conference_schedule() {
    let outcome = GreedyScheduler::new().schedule(classic_talks());
    assert!(outcome.is_complete());
    assert_eq!(outcome.conference.track_count(), 4);

    let rendered = ScheduleRenderer::new().render(&outcome.conference);
    assert_eq!(rendered, EXPECTED_SCHEDULE);
}

#[test]
fn test_classic_conference_partitions_talks() {
    let talks = classic_talks();
    assert_eq!(talks.len(), 19);
    assert!(validate_talks(&talks, &SessionLimits::default()).is_ok());

    let outcome = GreedyScheduler::new().schedule(talks.clone());
    let scheduled: Vec<&Talk> = outcome.conference.talks().collect();
    assert_eq!(scheduled.len(), talks.len());

    let expected: HashSet<&Talk> = talks.iter().collect();
    let actual: HashSet<&Talk> = scheduled.into_iter().collect();
    assert_eq!(actual, expected);
}

#[test]
fn test_classic_conference_summary() {
    let outcome = GreedyScheduler::new().schedule(classic_talks());
    let summary = ScheduleSummary::calculate(&outcome.conference, &SessionLimits::default());
    assert_eq!(summary.track_count, 4);
    assert_eq!(summary.talk_count, 19);
    assert_eq!(summary.scheduled_minutes, 785);
    assert_eq!(summary.full_tracks, 1);
}

#[test]
fn test_schedule_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("talks.txt");
    std::fs::write(&path, format!("{TALKS}\nnot a talk\n")).unwrap();

    let parsed = load_talks(&path).unwrap();
    assert_eq!(parsed.talks.len(), 19);
    assert_eq!(parsed.skipped.len(), 1);
    assert_eq!(parsed.skipped[0].line_number, 21);
}

#[test]
fn test_unfittable_talk_does_not_block_schedule() {
    let mut talks = classic_talks();
    talks.insert(3, Talk::new("All-Day Workshop", 480).unwrap());

    let outcome = GreedyScheduler::new().schedule(talks);
    assert_eq!(outcome.rejected.len(), 1);
    assert_eq!(outcome.conference.talk_count(), 19);

    let rendered = ScheduleRenderer::new().render(&outcome.conference);
    assert_eq!(rendered, EXPECTED_SCHEDULE);
}

#[test]
fn test_configured_limits_and_timetable() {
    let config = SchedulerConfig::from_toml_str(
        r#"
        [limits]
        morning_minutes = 120
        afternoon_min_minutes = 120
        afternoon_max_minutes = 180

        [timetable]
        morning_start = "10:00:00"
        lunch = "12:00:00"
        afternoon_start = "13:00:00"
        networking_earliest = "15:00:00"
        networking_latest = "16:00:00"
        "#,
    )
    .unwrap();

    let outcome = GreedyScheduler::new()
        .with_limits(config.limits)
        .schedule(classic_talks());
    assert!(outcome.is_complete());
    for track in outcome.conference.tracks() {
        assert!(track.morning_duration() <= 120);
        assert!(track.afternoon_duration() <= 180);
    }

    let lines = ScheduleRenderer::new()
        .with_timetable(config.timetable)
        .lines(&outcome.conference);
    assert!(lines[1].starts_with("10:00AM "));
    assert!(lines
        .iter()
        .filter(|l| l.ends_with("Networking Event"))
        .all(|l| l.as_str() >= "03:00PM" && l.as_str() < "04:01PM"));
}
