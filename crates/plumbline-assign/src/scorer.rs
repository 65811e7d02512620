//! Ranking of field workers for a job location.

use chrono::{NaiveDateTime, Timelike};
use serde::Serialize;

use plumbline_core::model::{GeoPoint, Job, Staff};

use crate::geo::{haversine_km, travel_time_minutes};
use crate::weights::ScoringWeights;
use crate::workload::{Workload, workload_for};
use crate::zone::{Zone, ZoneMap};

/// One ranked candidate for a job.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JobSuggestion {
    pub staff_id: String,
    pub staff_name: String,
    pub distance_km: f64,
    pub travel_time_minutes: f64,
    pub workload: Workload,
    pub zone: Option<String>,
    pub same_zone: bool,
    pub outside_shift: bool,
    /// Lower is better.
    pub priority: f64,
    pub reason: String,
}

/// Scores staff against a job location with a fixed set of weights and zones.
#[derive(Debug, Clone, Default)]
pub struct AssignmentScorer {
    weights: ScoringWeights,
    zones: ZoneMap,
}

impl AssignmentScorer {
    #[must_use]
    pub const fn new(weights: ScoringWeights, zones: ZoneMap) -> Self {
        Self { weights, zones }
    }

    #[must_use]
    pub const fn weights(&self) -> &ScoringWeights {
        &self.weights
    }

    #[must_use]
    pub const fn zones(&self) -> &ZoneMap {
        &self.zones
    }

    /// ## Summary
    /// Ranks every eligible staff member for a job at `job_location`.
    ///
    /// Eligible means the field-worker role with a known, finite location;
    /// everyone else is skipped. The result is sorted by ascending priority
    /// and ties keep roster order. An unusable job location yields no
    /// suggestions.
    #[must_use]
    pub fn suggestions(
        &self,
        job_location: GeoPoint,
        staff: &[Staff],
        jobs: &[Job],
        now: NaiveDateTime,
    ) -> Vec<JobSuggestion> {
        if !job_location.is_finite() {
            tracing::debug!(%job_location, "Job location is not usable, no suggestions");
            return Vec::new();
        }

        let job_zone = self.zones.locate(job_location);
        tracing::trace!(
            %job_location,
            zone = job_zone.map(|z| z.id.as_str()),
            "Scoring staff for job"
        );

        let mut suggestions: Vec<JobSuggestion> = staff
            .iter()
            .filter_map(|member| self.score(member, job_location, job_zone, jobs, now))
            .collect();

        // `sort_by` is stable, so equal priorities keep roster order.
        suggestions.sort_by(|a, b| a.priority.total_cmp(&b.priority));

        tracing::debug!(
            roster = staff.len(),
            eligible = suggestions.len(),
            best = suggestions.first().map(|s| s.staff_id.as_str()),
            "Ranked staff suggestions"
        );
        suggestions
    }

    /// Best-ranked suggestion, or `None` when nobody is eligible.
    #[must_use]
    pub fn best(
        &self,
        job_location: GeoPoint,
        staff: &[Staff],
        jobs: &[Job],
        now: NaiveDateTime,
    ) -> Option<JobSuggestion> {
        self.suggestions(job_location, staff, jobs, now)
            .into_iter()
            .next()
    }

    fn score(
        &self,
        member: &Staff,
        job_location: GeoPoint,
        job_zone: Option<&Zone>,
        jobs: &[Job],
        now: NaiveDateTime,
    ) -> Option<JobSuggestion> {
        if !member.role.is_field_worker() {
            tracing::trace!(staff_id = %member.id, role = member.role.as_str(), "Skipping non field worker");
            return None;
        }
        let Some(location) = member.location.filter(GeoPoint::is_finite) else {
            tracing::trace!(staff_id = %member.id, "Skipping staff without location");
            return None;
        };

        let w = &self.weights;
        let distance_km = haversine_km(job_location, location);
        let travel_minutes = travel_time_minutes(distance_km, w.average_speed_kmh);
        let workload = workload_for(&member.id, jobs, now);

        let staff_zone = self.zones.locate(location);
        let same_zone = matches!((job_zone, staff_zone), (Some(a), Some(b)) if a.id == b.id);
        let outside_shift = !member.shift_window().contains_hour(now.hour());

        let active = f64::from(u32::try_from(workload.active_jobs).unwrap_or(u32::MAX));
        let mut priority =
            w.distance * distance_km + w.active_job * active + w.travel_time * travel_minutes;
        if same_zone {
            priority -= w.same_zone_bonus;
        }
        if outside_shift {
            priority += w.outside_shift_penalty;
        }

        Some(JobSuggestion {
            staff_id: member.id.clone(),
            staff_name: member.name.clone(),
            distance_km,
            travel_time_minutes: travel_minutes,
            reason: reason(distance_km, travel_minutes, outside_shift, &workload, now),
            workload,
            zone: staff_zone.map(|z| z.id.clone()),
            same_zone,
            outside_shift,
            priority,
        })
    }
}

/// ## Summary
/// Human-readable summary, e.g.
/// `3.2 km away, ~5 min travel, Available now` or
/// `12.0 km away, ~18 min travel, outside shift hours, 2 active jobs, free from 14:30`.
fn reason(
    distance_km: f64,
    travel_minutes: f64,
    outside_shift: bool,
    workload: &Workload,
    now: NaiveDateTime,
) -> String {
    let mut text = format!("{distance_km:.1} km away, ~{travel_minutes:.0} min travel");
    if outside_shift {
        text.push_str(", outside shift hours");
    }
    if workload.is_free() {
        text.push_str(", Available now");
    } else {
        let noun = if workload.active_jobs == 1 { "job" } else { "jobs" };
        let free_from = if workload.next_available.date() == now.date() {
            workload.next_available.format("%H:%M")
        } else {
            workload.next_available.format("%a %H:%M")
        };
        text.push_str(&format!(
            ", {} active {noun}, free from {free_from}",
            workload.active_jobs
        ));
    }
    text
}

/// Ranks staff with the default weights and service-area zones.
#[must_use]
pub fn staff_suggestions(
    job_location: GeoPoint,
    staff: &[Staff],
    jobs: &[Job],
    now: NaiveDateTime,
) -> Vec<JobSuggestion> {
    AssignmentScorer::default().suggestions(job_location, staff, jobs, now)
}

/// Best candidate with the default weights and zones, if anyone is eligible.
#[must_use]
pub fn best_staff_suggestion(
    job_location: GeoPoint,
    staff: &[Staff],
    jobs: &[Job],
    now: NaiveDateTime,
) -> Option<JobSuggestion> {
    AssignmentScorer::default().best(job_location, staff, jobs, now)
}

#[cfg(test)]
#[path = "scorer_tests.rs"]
mod tests;
