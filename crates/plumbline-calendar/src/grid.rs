use serde::Serialize;

use plumbline_core::constants::{
    DEFAULT_DAY_COLUMN_WIDTH, DEFAULT_TIME_SLOT_HEIGHT, MIN_DAY_COLUMN_WIDTH, MIN_TIME_SLOT_HEIGHT,
};

/// Pixel dimensions of the time grid.
///
/// Always finite and at least the minimums, whatever the caller supplied.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GridMetrics {
    time_slot_height: f64,
    day_column_width: f64,
}

impl GridMetrics {
    /// ## Summary
    /// Builds grid metrics, replacing values that are not finite positive
    /// numbers with their defaults and clamping to the minimums.
    #[must_use]
    pub fn new(time_slot_height: f64, day_column_width: f64) -> Self {
        Self {
            time_slot_height: sanitize(
                time_slot_height,
                DEFAULT_TIME_SLOT_HEIGHT,
                MIN_TIME_SLOT_HEIGHT,
            ),
            day_column_width: sanitize(
                day_column_width,
                DEFAULT_DAY_COLUMN_WIDTH,
                MIN_DAY_COLUMN_WIDTH,
            ),
        }
    }

    /// Same as [`GridMetrics::new`] but each dimension may be omitted.
    #[must_use]
    pub fn from_optional(time_slot_height: Option<f64>, day_column_width: Option<f64>) -> Self {
        Self::new(
            time_slot_height.unwrap_or(DEFAULT_TIME_SLOT_HEIGHT),
            day_column_width.unwrap_or(DEFAULT_DAY_COLUMN_WIDTH),
        )
    }

    /// Pixels per hour row.
    #[must_use]
    pub const fn time_slot_height(&self) -> f64 {
        self.time_slot_height
    }

    /// Pixels per day column.
    #[must_use]
    pub const fn day_column_width(&self) -> f64 {
        self.day_column_width
    }
}

impl Default for GridMetrics {
    fn default() -> Self {
        Self::new(DEFAULT_TIME_SLOT_HEIGHT, DEFAULT_DAY_COLUMN_WIDTH)
    }
}

fn sanitize(value: f64, default: f64, min: f64) -> f64 {
    let usable = if value.is_finite() && value > 0.0 {
        value
    } else {
        tracing::trace!(value, default, "Replacing unusable grid dimension");
        default
    };
    usable.max(min)
}
