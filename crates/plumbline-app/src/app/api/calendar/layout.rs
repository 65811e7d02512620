use chrono::{NaiveDate, NaiveDateTime};
use salvo::{Depot, Request, Response, handler, writing::Json};
use serde::{Deserialize, Serialize};

use plumbline_calendar::{CalendarLayout, CalendarView, GridMetrics, ViewMode, compute_layout, jobs_on};
use plumbline_core::model::Job;

use crate::clock::get_now_from_depot;
use crate::config::get_config_from_depot;
use crate::error::{AppError, AppResult, render_error};

/// ## Summary
/// Layout request payload
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutRequest {
    #[serde(default)]
    pub view: ViewMode,
    /// Date the view is centred on; defaults to today.
    pub anchor: Option<NaiveDate>,
    pub time_slot_height: Option<f64>,
    pub day_column_width: Option<f64>,
    /// Overrides the server clock, mainly for reproducible rendering.
    pub now: Option<NaiveDateTime>,
    #[serde(default)]
    pub jobs: Vec<Job>,
}

/// ## Summary
/// Layout response payload
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutResponse {
    pub view: ViewMode,
    pub title: String,
    pub grid: GridMetrics,
    #[serde(flatten)]
    pub layout: CalendarLayout,
}

/// ## Summary
/// Jobs-on-day request payload
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobsOnRequest {
    pub date: NaiveDate,
    #[serde(default)]
    pub jobs: Vec<Job>,
}

/// ## Summary
/// Jobs-on-day response payload
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JobsOnResponse {
    pub date: NaiveDate,
    pub jobs: Vec<Job>,
}

async fn build_layout(req: &mut Request, depot: &Depot) -> AppResult<LayoutResponse> {
    let request: LayoutRequest = req
        .parse_json()
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))?;

    let settings = get_config_from_depot(depot)?;
    let now = match request.now {
        Some(now) => now,
        None => get_now_from_depot(depot)?,
    };
    let week_start = settings.calendar.week_start()?;

    let mut view = CalendarView::new(now, request.view, week_start);
    if let Some(anchor) = request.anchor {
        view.select(anchor);
    }

    let grid = GridMetrics::new(
        request
            .time_slot_height
            .unwrap_or(settings.calendar.time_slot_height),
        request
            .day_column_width
            .unwrap_or(settings.calendar.day_column_width),
    );

    let computed = compute_layout(&request.jobs, &view.visible_days(), grid, view.now());

    tracing::info!(
        view = %view.mode(),
        anchor = %view.anchor(),
        jobs = request.jobs.len(),
        positioned = computed.positions.len(),
        "Calendar layout computed"
    );

    Ok(LayoutResponse {
        view: view.mode(),
        title: view.title(),
        grid,
        layout: computed,
    })
}

/// ## Summary
/// POST /api/calendar/layout - Lays out jobs for a day, week or month view.
///
/// ## Errors
/// Returns HTTP 400 if the body is not a valid layout request
/// Returns HTTP 500 if configuration or clock are missing from the depot
#[handler]
pub async fn layout(req: &mut Request, depot: &mut Depot, res: &mut Response) {
    match build_layout(req, depot).await {
        Ok(body) => res.render(Json(body)),
        Err(e) => render_error(res, &e),
    }
}

/// ## Summary
/// POST /api/calendar/jobs-on - Lists the jobs on one date ordered by start time.
///
/// ## Errors
/// Returns HTTP 400 if the body is not a valid request
#[handler]
pub async fn jobs_on_day(req: &mut Request, res: &mut Response) {
    let request: JobsOnRequest = match req.parse_json().await {
        Ok(r) => r,
        Err(e) => {
            tracing::debug!(error = ?e, "Failed to parse jobs-on request");
            render_error(res, &AppError::BadRequest(e.to_string()));
            return;
        }
    };

    let jobs: Vec<Job> = jobs_on(&request.jobs, request.date)
        .into_iter()
        .cloned()
        .collect();

    res.render(Json(JobsOnResponse {
        date: request.date,
        jobs,
    }));
}
