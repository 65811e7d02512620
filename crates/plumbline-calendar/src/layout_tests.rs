//! Tests for job placement.

use super::*;
use crate::view::{ViewMode, visible_days};
use chrono::Weekday;
use plumbline_core::model::{JobCategory, JobStatus};

fn date(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, d).expect("valid date")
}

fn now() -> NaiveDateTime {
    date(19).and_hms_opt(10, 0, 0).expect("valid time")
}

fn job(id: &str, day: u32, start: Option<&str>, end: Option<&str>) -> Job {
    Job {
        scheduled_date: Some(date(day)),
        start_time: start.map(str::to_string),
        end_time: end.map(str::to_string),
        status: JobStatus::Assigned,
        ..Job::new(id)
    }
}

fn week() -> Vec<NaiveDate> {
    visible_days(date(19), ViewMode::Week, Weekday::Sun)
}

#[test]
fn test_explicit_times_win_over_category() {
    for category in JobCategory::ALL {
        let mut j = job("J-1", 19, Some("09:00"), Some("11:00"));
        j.category = Some(category);
        assert_eq!(job_duration_minutes(&j), 120, "category {category}");
    }
}

#[test]
fn test_category_default_without_times() {
    let mut j = job("J-1", 19, None, None);
    j.category = Some(JobCategory::GeyserReplacement);
    assert_eq!(job_duration_minutes(&j), 180);

    j.category = Some(JobCategory::CameraInspection);
    assert_eq!(job_duration_minutes(&j), 90);
}

#[test]
fn test_default_without_times_or_category() {
    let j = job("J-1", 19, None, None);
    assert_eq!(job_duration_minutes(&j), 120);

    let mut other = job("J-2", 19, None, None);
    other.category = Some(JobCategory::Other);
    assert_eq!(job_duration_minutes(&other), 120);
}

#[test]
fn test_end_before_start_falls_back() {
    let mut j = job("J-1", 19, Some("14:00"), Some("13:00"));
    assert_eq!(job_duration_minutes(&j), 120);

    j.category = Some(JobCategory::LeakDetection);
    assert_eq!(job_duration_minutes(&j), 60);

    let same = job("J-2", 19, Some("14:00"), Some("14:00"));
    assert_eq!(job_duration_minutes(&same), 120);
}

#[test]
fn test_only_end_time_uses_category() {
    let mut j = job("J-1", 19, None, Some("13:00"));
    j.category = Some(JobCategory::DrainBlockage);
    assert_eq!(job_duration_minutes(&j), 120);
}

#[test_log::test]
fn test_geometry_for_timed_job() {
    let jobs = vec![job("J-1", 20, Some("09:00"), Some("11:00"))];
    let layout = compute_layout(&jobs, &week(), GridMetrics::default(), now());

    assert_eq!(layout.positions.len(), 1);
    let p = &layout.positions[0];
    assert_eq!(p.job_id, "J-1");
    assert_eq!(p.day_index, 2);
    assert_eq!(p.duration_minutes, 120);
    assert_eq!(p.start, date(20).and_hms_opt(9, 0, 0).expect("valid"));
    assert_eq!(p.end, date(20).and_hms_opt(11, 0, 0).expect("valid"));
    assert!((p.top - 240.0).abs() < f64::EPSILON);
    assert!((p.height - 120.0).abs() < f64::EPSILON);
    assert!((p.left - 400.0).abs() < f64::EPSILON);
    assert!((p.width - 192.0).abs() < f64::EPSILON);
}

#[test]
fn test_missing_start_defaults_to_grid_origin() {
    let jobs = vec![job("J-1", 18, None, None)];
    let layout = compute_layout(&jobs, &week(), GridMetrics::default(), now());

    let p = &layout.positions[0];
    assert_eq!(p.start, date(18).and_hms_opt(5, 0, 0).expect("valid"));
    assert!(p.top.abs() < f64::EPSILON);
    assert!(p.left.abs() < f64::EPSILON);
}

#[test]
fn test_unparsable_start_defaults_to_grid_origin() {
    let jobs = vec![job("J-1", 18, Some("half past nine"), Some("11:00"))];
    let layout = compute_layout(&jobs, &week(), GridMetrics::default(), now());

    let p = &layout.positions[0];
    assert_eq!(p.start.time(), NaiveTime::from_hms_opt(5, 0, 0).expect("valid"));
    assert_eq!(p.duration_minutes, 120);
}

#[test]
fn test_height_never_below_floor() {
    for slot in [1.0, 20.0, 33.3, 60.0, 500.0] {
        let grid = GridMetrics::new(slot, 200.0);
        let jobs = vec![job("J-1", 19, Some("10:00"), Some("10:05"))];
        let layout = compute_layout(&jobs, &week(), grid, now());
        assert_eq!(layout.positions[0].duration_minutes, 5);
        assert!(layout.positions[0].height >= 40.0, "slot {slot}");
    }
}

#[test]
fn test_nan_slot_height_never_leaks_into_geometry() {
    let grid = GridMetrics::new(f64::NAN, f64::NAN);
    let jobs = vec![job("J-1", 19, Some("09:15"), Some("10:45"))];
    let layout = compute_layout(&jobs, &week(), grid, now());

    let p = &layout.positions[0];
    for value in [p.top, p.height, p.left, p.width] {
        assert!(value.is_finite());
    }
    assert!((p.top - 255.0).abs() < f64::EPSILON);
    assert!((p.height - 90.0).abs() < f64::EPSILON);
    assert!(layout.timeline.top.is_finite());
}

#[test]
fn test_jobs_outside_visible_days_are_skipped() {
    let mut undated = job("J-3", 19, None, None);
    undated.scheduled_date = None;
    let jobs = vec![
        job("J-1", 19, Some("08:00"), None),
        job("J-2", 26, Some("08:00"), None),
        undated,
    ];
    let layout = compute_layout(&jobs, &week(), GridMetrics::default(), now());

    let ids: Vec<&str> = layout.positions.iter().map(|p| p.job_id.as_str()).collect();
    assert_eq!(ids, vec!["J-1"]);
}

#[test]
fn test_positions_ordered_by_day_then_input() {
    let jobs = vec![
        job("late-week", 23, Some("08:00"), None),
        job("monday-b", 19, Some("12:00"), None),
        job("sunday", 18, Some("15:00"), None),
        job("monday-a", 19, Some("07:00"), None),
    ];
    let layout = compute_layout(&jobs, &week(), GridMetrics::default(), now());

    let ids: Vec<&str> = layout.positions.iter().map(|p| p.job_id.as_str()).collect();
    assert_eq!(ids, vec!["sunday", "monday-b", "monday-a", "late-week"]);
}

#[test]
fn test_month_view_positions_use_grid_index() {
    let days = visible_days(date(19), ViewMode::Month, Weekday::Sun);
    let jobs = vec![job("J-1", 31, Some("06:00"), Some("07:00"))];
    let layout = compute_layout(&jobs, &days, GridMetrics::default(), now());

    assert_eq!(layout.days.len(), 35);
    assert_eq!(layout.positions[0].day_index, 34);
}

#[test]
fn test_layout_carries_timeline() {
    let layout = compute_layout(&[], &week(), GridMetrics::default(), now());
    assert!(layout.positions.is_empty());
    assert!(layout.timeline.visible);
    assert_eq!(layout.timeline.day_index, Some(1));
}

#[test]
fn test_geometry_validation_rejects_non_finite() {
    let ok = Geometry {
        top: 0.0,
        height: 40.0,
        left: 0.0,
        width: 192.0,
    };
    assert!(ok.is_finite());

    for broken in [
        Geometry { top: f64::NAN, ..ok },
        Geometry { height: f64::INFINITY, ..ok },
        Geometry { left: f64::NEG_INFINITY, ..ok },
        Geometry { width: f64::NAN, ..ok },
    ] {
        assert!(!broken.is_finite());
    }
}

#[test]
fn test_jobs_on_sorts_by_start() {
    let jobs = vec![
        job("noon", 19, Some("12:00"), None),
        job("no-time", 19, None, None),
        job("early", 19, Some("06:30"), None),
        job("other-day", 20, Some("04:00"), None),
    ];
    let ids: Vec<&str> = jobs_on(&jobs, date(19))
        .into_iter()
        .map(|j| j.id.as_str())
        .collect();
    assert_eq!(ids, vec!["no-time", "early", "noon"]);
}

#[test]
fn test_position_serializes_camel_case() {
    let jobs = vec![job("J-1", 19, Some("09:00"), Some("10:00"))];
    let layout = compute_layout(&jobs, &week(), GridMetrics::default(), now());
    let json = serde_json::to_value(&layout).expect("serializable");

    assert_eq!(json["positions"][0]["jobId"], "J-1");
    assert_eq!(json["positions"][0]["durationMinutes"], 60);
    assert_eq!(json["timeline"]["dayIndex"], 1);
}
