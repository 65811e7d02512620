//! Placement of scheduled jobs on the time grid.

use std::collections::HashMap;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime, TimeDelta, Timelike};
use serde::Serialize;

use plumbline_core::constants::{
    COLUMN_PADDING, DEFAULT_JOB_DURATION_MINUTES, GRID_START_HOUR, MIN_JOB_HEIGHT,
};
use plumbline_core::model::Job;

use crate::grid::GridMetrics;
use crate::timeline::{TimelineData, compute_timeline};

/// Screen rectangle and time span of one job on one visible day.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JobPosition {
    pub job_id: String,
    pub day: NaiveDate,
    pub day_index: usize,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    pub duration_minutes: u32,
    pub top: f64,
    pub height: f64,
    pub left: f64,
    pub width: f64,
}

/// Result of one layout pass.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarLayout {
    pub days: Vec<NaiveDate>,
    pub positions: Vec<JobPosition>,
    pub timeline: TimelineData,
}

#[derive(Debug, Clone, Copy)]
struct Geometry {
    top: f64,
    height: f64,
    left: f64,
    width: f64,
}

impl Geometry {
    fn is_finite(&self) -> bool {
        [self.top, self.height, self.left, self.width]
            .iter()
            .all(|v| v.is_finite())
    }
}

/// Grid row zero.
fn grid_origin() -> NaiveTime {
    NaiveTime::from_hms_opt(GRID_START_HOUR, 0, 0).unwrap_or(NaiveTime::MIN)
}

/// Offset of a time of day from the grid origin, in fractional hours.
pub(crate) fn hours_from_origin<T: Timelike>(time: &T) -> f64 {
    f64::from(time.hour()) + f64::from(time.minute()) / 60.0 - f64::from(GRID_START_HOUR)
}

#[expect(clippy::cast_precision_loss, reason = "day indices are at most 42")]
pub(crate) fn column_left(day_index: usize, grid: GridMetrics) -> f64 {
    day_index as f64 * grid.day_column_width()
}

/// ## Summary
/// Length of a job's calendar block in minutes.
///
/// Uses the start/end pair when both parse and end is after start,
/// otherwise the category default, otherwise 120.
#[must_use]
pub fn job_duration_minutes(job: &Job) -> u32 {
    let from_times = job
        .start_time_of_day()
        .zip(job.end_time_of_day())
        .and_then(|(start, end)| u32::try_from((end - start).num_minutes()).ok())
        .filter(|minutes| *minutes > 0);

    let minutes = from_times.unwrap_or_else(|| {
        job.category
            .map_or(DEFAULT_JOB_DURATION_MINUTES, |category| {
                category.default_duration_minutes()
            })
    });

    if minutes == 0 {
        DEFAULT_JOB_DURATION_MINUTES
    } else {
        minutes
    }
}

fn position_job(job: &Job, day: NaiveDate, day_index: usize, grid: GridMetrics) -> Option<JobPosition> {
    let start = day.and_time(job.start_time_of_day().unwrap_or_else(grid_origin));
    let duration_minutes = job_duration_minutes(job);
    let end = start.checked_add_signed(TimeDelta::minutes(i64::from(duration_minutes)))?;

    let slot = grid.time_slot_height();
    let geometry = Geometry {
        top: hours_from_origin(&start) * slot,
        height: (f64::from(duration_minutes) / 60.0 * slot).max(MIN_JOB_HEIGHT),
        left: column_left(day_index, grid),
        width: grid.day_column_width() - COLUMN_PADDING,
    };

    if !geometry.is_finite() {
        tracing::debug!(job_id = %job.id, ?geometry, "Omitting job with invalid geometry");
        return None;
    }

    tracing::trace!(
        job_id = %job.id,
        %day,
        duration_minutes,
        top = geometry.top,
        height = geometry.height,
        "Positioned job"
    );

    Some(JobPosition {
        job_id: job.id.clone(),
        day,
        day_index,
        start,
        end,
        duration_minutes,
        top: geometry.top,
        height: geometry.height,
        left: geometry.left,
        width: geometry.width,
    })
}

/// ## Summary
/// Lays out `jobs` over `days` and locates the current-time line.
///
/// Jobs without a scheduled date, or scheduled outside `days`, are skipped.
/// Positions are ordered by day column, then by input order. A job whose
/// geometry cannot be computed is omitted; the pass never fails.
#[must_use]
pub fn compute_layout(
    jobs: &[Job],
    days: &[NaiveDate],
    grid: GridMetrics,
    now: NaiveDateTime,
) -> CalendarLayout {
    let day_indices: HashMap<NaiveDate, usize> = days
        .iter()
        .enumerate()
        .map(|(index, day)| (*day, index))
        .collect();

    let mut positions: Vec<JobPosition> = jobs
        .iter()
        .filter_map(|job| {
            let day = job.scheduled_date?;
            let day_index = *day_indices.get(&day)?;
            position_job(job, day, day_index, grid)
        })
        .collect();
    positions.sort_by_key(|position| position.day_index);

    tracing::debug!(
        job_count = jobs.len(),
        day_count = days.len(),
        positioned = positions.len(),
        "Computed calendar layout"
    );

    CalendarLayout {
        days: days.to_vec(),
        positions,
        timeline: compute_timeline(now, days, grid),
    }
}

/// ## Summary
/// Jobs scheduled on `date`, ordered by start time.
///
/// Jobs without a parsable start time sort as if they began at 05:00.
#[must_use]
pub fn jobs_on(jobs: &[Job], date: NaiveDate) -> Vec<&Job> {
    let mut on_day: Vec<&Job> = jobs
        .iter()
        .filter(|job| job.scheduled_date == Some(date))
        .collect();
    on_day.sort_by_key(|job| job.start_time_of_day().unwrap_or_else(grid_origin));
    on_day
}

#[cfg(test)]
#[path = "layout_tests.rs"]
mod tests;
