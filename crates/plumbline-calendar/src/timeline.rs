use chrono::{NaiveDate, NaiveDateTime, Timelike};
use serde::Serialize;

use plumbline_core::constants::{GRID_END_HOUR, GRID_START_HOUR};

use crate::grid::GridMetrics;
use crate::layout::{column_left, hours_from_origin};

/// Position of the current-time line.
///
/// `day_index` and `left` are `None` when today is not among the visible days.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineData {
    pub top: f64,
    pub visible: bool,
    pub day_index: Option<usize>,
    pub left: Option<f64>,
}

/// ## Summary
/// Locates the current-time line for `now` within `days`.
///
/// The line is visible only when today is shown and the hour is between
/// 05:00 and 23:59.
#[must_use]
pub fn compute_timeline(now: NaiveDateTime, days: &[NaiveDate], grid: GridMetrics) -> TimelineData {
    let top = hours_from_origin(&now) * grid.time_slot_height();
    let day_index = days.iter().position(|day| *day == now.date());
    let in_hours = (GRID_START_HOUR..=GRID_END_HOUR).contains(&now.hour());

    TimelineData {
        top,
        visible: day_index.is_some() && in_hours,
        day_index,
        left: day_index.map(|index| column_left(index, grid)),
    }
}
