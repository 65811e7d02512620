use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use super::geo::GeoPoint;
use super::time::{deserialize_lenient_date, parse_time_of_day};
use crate::constants::DEFAULT_JOB_DURATION_MINUTES;

/// Kind of work a job represents.
///
/// Unknown labels deserialize to [`JobCategory::Other`], which carries the
/// fallback duration and hour estimate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum JobCategory {
    #[serde(rename = "Geyser Replacement")]
    GeyserReplacement,
    #[serde(rename = "Geyser Assessment")]
    GeyserAssessment,
    #[serde(rename = "Leak Detection")]
    LeakDetection,
    #[serde(rename = "Drain Blockage")]
    DrainBlockage,
    #[serde(rename = "Camera Inspection")]
    CameraInspection,
    #[serde(rename = "Toilet/Shower")]
    ToiletShower,
    #[serde(other)]
    Other,
}

impl JobCategory {
    pub const ALL: [Self; 7] = [
        Self::GeyserReplacement,
        Self::GeyserAssessment,
        Self::LeakDetection,
        Self::DrainBlockage,
        Self::CameraInspection,
        Self::ToiletShower,
        Self::Other,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::GeyserReplacement => "Geyser Replacement",
            Self::GeyserAssessment => "Geyser Assessment",
            Self::LeakDetection => "Leak Detection",
            Self::DrainBlockage => "Drain Blockage",
            Self::CameraInspection => "Camera Inspection",
            Self::ToiletShower => "Toilet/Shower",
            Self::Other => "Other",
        }
    }

    /// Calendar block length used when a job has no usable start/end pair.
    #[must_use]
    pub const fn default_duration_minutes(self) -> u32 {
        match self {
            Self::GeyserReplacement => 180,
            Self::CameraInspection => 90,
            Self::GeyserAssessment | Self::LeakDetection => 60,
            Self::DrainBlockage | Self::ToiletShower | Self::Other => DEFAULT_JOB_DURATION_MINUTES,
        }
    }

    /// Hours of remaining work a pending job of this kind adds to a workload.
    #[must_use]
    pub const fn estimated_hours(self) -> f64 {
        match self {
            Self::GeyserReplacement => 4.0,
            Self::LeakDetection => 3.0,
            Self::GeyserAssessment | Self::DrainBlockage | Self::ToiletShower => 2.0,
            Self::CameraInspection => 1.5,
            Self::Other => 2.5,
        }
    }
}

impl std::fmt::Display for JobCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Lifecycle state of a job. Only `Completed` drops out of a workload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JobStatus {
    #[default]
    Pending,
    Assigned,
    #[serde(alias = "in-progress")]
    InProgress,
    Completed,
    Cancelled,
    #[serde(other)]
    Unknown,
}

impl JobStatus {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Assigned => "assigned",
            Self::InProgress => "in_progress",
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
            Self::Unknown => "unknown",
        }
    }
}

impl std::fmt::Display for JobStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A field-service job, reduced to the fields scheduling cares about.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    pub id: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "deserialize_lenient_date")]
    pub scheduled_date: Option<NaiveDate>,
    #[serde(default)]
    pub start_time: Option<String>,
    #[serde(default)]
    pub end_time: Option<String>,
    #[serde(default)]
    pub category: Option<JobCategory>,
    #[serde(default)]
    pub assigned_to: Option<String>,
    #[serde(default)]
    pub status: JobStatus,
    #[serde(default)]
    pub location: Option<GeoPoint>,
}

impl Job {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }

    /// Parsed start time; `None` when absent or unparsable.
    #[must_use]
    pub fn start_time_of_day(&self) -> Option<NaiveTime> {
        self.start_time.as_deref().and_then(parse_time_of_day)
    }

    /// Parsed end time; `None` when absent or unparsable.
    #[must_use]
    pub fn end_time_of_day(&self) -> Option<NaiveTime> {
        self.end_time.as_deref().and_then(parse_time_of_day)
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.status != JobStatus::Completed
    }

    #[must_use]
    pub fn is_assigned_to(&self, staff_id: &str) -> bool {
        self.assigned_to.as_deref() == Some(staff_id)
    }
}
