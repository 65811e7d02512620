//! Ranks field workers for a job by distance, workload, shift hours and
//! team area.

pub mod geo;
pub mod scorer;
pub mod weights;
pub mod workload;
pub mod zone;

pub use geo::{haversine_km, travel_time_minutes};
pub use scorer::{AssignmentScorer, JobSuggestion, best_staff_suggestion, staff_suggestions};
pub use weights::ScoringWeights;
pub use workload::{Workload, workload_for};
pub use zone::{Zone, ZoneMap};
