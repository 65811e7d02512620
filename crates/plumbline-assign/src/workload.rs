use chrono::{NaiveDateTime, TimeDelta};
use serde::Serialize;

use plumbline_core::model::{Job, JobCategory};

/// Snapshot of a staff member's outstanding work.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Workload {
    pub active_jobs: usize,
    pub estimated_hours: f64,
    pub next_available: NaiveDateTime,
}

impl Workload {
    #[must_use]
    pub const fn is_free(&self) -> bool {
        self.active_jobs == 0
    }
}

#[expect(
    clippy::cast_possible_truncation,
    reason = "hour estimates are small multiples of half an hour"
)]
fn hours_to_delta(hours: f64) -> TimeDelta {
    TimeDelta::minutes((hours * 60.0).round() as i64)
}

/// ## Summary
/// Workload of `staff_id`: its assigned jobs that are not completed, their
/// summed hour estimates, and when it is expected to be free after `now`.
#[must_use]
pub fn workload_for(staff_id: &str, jobs: &[Job], now: NaiveDateTime) -> Workload {
    let (active_jobs, estimated_hours) = jobs
        .iter()
        .filter(|job| job.is_assigned_to(staff_id) && job.is_active())
        .fold((0_usize, 0.0_f64), |(count, hours), job| {
            let category = job.category.unwrap_or(JobCategory::Other);
            (count + 1, hours + category.estimated_hours())
        });

    let next_available = now
        .checked_add_signed(hours_to_delta(estimated_hours))
        .unwrap_or(now);

    Workload {
        active_jobs,
        estimated_hours,
        next_available,
    }
}
