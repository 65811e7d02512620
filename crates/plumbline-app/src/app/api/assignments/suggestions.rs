use chrono::NaiveDateTime;
use salvo::{Depot, Request, Response, handler, writing::Json};
use serde::{Deserialize, Serialize};

use plumbline_assign::{AssignmentScorer, JobSuggestion, ScoringWeights, ZoneMap};
use plumbline_core::model::{GeoPoint, Job, Staff};

use crate::clock::get_now_from_depot;
use crate::config::get_config_from_depot;
use crate::error::{AppError, AppResult, render_error};

/// ## Summary
/// Suggestion request payload
///
/// The job location is taken from `location`, or else from the job in `jobs`
/// whose id is `jobId`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuggestionsRequest {
    pub location: Option<GeoPoint>,
    pub job_id: Option<String>,
    #[serde(default)]
    pub staff: Vec<Staff>,
    #[serde(default)]
    pub jobs: Vec<Job>,
    pub now: Option<NaiveDateTime>,
}

impl SuggestionsRequest {
    fn job_location(&self) -> AppResult<GeoPoint> {
        if let Some(location) = self.location {
            return Ok(location);
        }
        let job_id = self.job_id.as_deref().ok_or_else(|| {
            AppError::BadRequest("either location or jobId is required".to_string())
        })?;
        self.jobs
            .iter()
            .find(|job| job.id == job_id)
            .and_then(|job| job.location)
            .ok_or_else(|| AppError::BadRequest(format!("job {job_id} has no known location")))
    }
}

/// ## Summary
/// Suggestion response payload
#[derive(Debug, Serialize)]
pub struct SuggestionsResponse {
    pub suggestions: Vec<JobSuggestion>,
    pub best: Option<JobSuggestion>,
}

async fn rank(req: &mut Request, depot: &Depot) -> AppResult<SuggestionsResponse> {
    let request: SuggestionsRequest = req
        .parse_json()
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))?;
    let location = request.job_location()?;

    let settings = get_config_from_depot(depot)?;
    let now = match request.now {
        Some(now) => now,
        None => get_now_from_depot(depot)?,
    };

    let scorer = AssignmentScorer::new(
        ScoringWeights::from(&settings.scoring),
        ZoneMap::service_area(),
    );
    let ranked = scorer.suggestions(location, &request.staff, &request.jobs, now);
    let best = ranked.first().cloned();

    tracing::info!(
        %location,
        roster = request.staff.len(),
        eligible = ranked.len(),
        best = best.as_ref().map(|s| s.staff_id.as_str()),
        "Assignment suggestions ranked"
    );

    Ok(SuggestionsResponse {
        suggestions: ranked,
        best,
    })
}

/// ## Summary
/// POST /api/assignments/suggestions - Ranks field staff for a job location.
///
/// ## Errors
/// Returns HTTP 400 if the body is malformed or no job location can be determined
/// Returns HTTP 500 if configuration or clock are missing from the depot
#[handler]
pub async fn suggestions(req: &mut Request, depot: &mut Depot, res: &mut Response) {
    match rank(req, depot).await {
        Ok(body) => res.render(Json(body)),
        Err(e) => render_error(res, &e),
    }
}
