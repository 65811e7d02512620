use serde::Serialize;

use plumbline_core::config::ScoringConfig;

/// Coefficients of the priority formula; lower priority ranks higher.
///
/// `priority = distance × distance_km + active_job × active_jobs
///   + travel_time × travel_minutes − same_zone_bonus + outside_shift_penalty`
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoringWeights {
    pub distance: f64,
    pub active_job: f64,
    pub travel_time: f64,
    pub same_zone_bonus: f64,
    pub outside_shift_penalty: f64,
    pub average_speed_kmh: f64,
}

impl From<&ScoringConfig> for ScoringWeights {
    fn from(config: &ScoringConfig) -> Self {
        Self {
            distance: config.distance_weight,
            active_job: config.active_job_weight,
            travel_time: config.travel_time_weight,
            same_zone_bonus: config.same_zone_bonus,
            outside_shift_penalty: config.outside_shift_penalty,
            average_speed_kmh: config.average_speed_kmh,
        }
    }
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self::from(&ScoringConfig::default())
    }
}
