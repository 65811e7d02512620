/// Route component constants shared across crates
pub const API_ROUTE_COMPONENT: &str = "api";
pub const API_ROUTE_PREFIX: &str = const_str::concat!("/", API_ROUTE_COMPONENT);

pub const CALENDAR_ROUTE_COMPONENT: &str = "calendar";
pub const CALENDAR_ROUTE_PREFIX: &str =
    const_str::concat!(API_ROUTE_PREFIX, "/", CALENDAR_ROUTE_COMPONENT);

pub const ASSIGNMENT_ROUTE_COMPONENT: &str = "assignments";
pub const ASSIGNMENT_ROUTE_PREFIX: &str =
    const_str::concat!(API_ROUTE_PREFIX, "/", ASSIGNMENT_ROUTE_COMPONENT);

/// Hour at which the day grid starts; row zero is 05:00.
pub const GRID_START_HOUR: u32 = 5;

/// Last hour for which the current-time line is drawn.
pub const GRID_END_HOUR: u32 = 23;

pub const DEFAULT_TIME_SLOT_HEIGHT: f64 = 60.0;
pub const MIN_TIME_SLOT_HEIGHT: f64 = 20.0;

pub const DEFAULT_DAY_COLUMN_WIDTH: f64 = 200.0;
pub const MIN_DAY_COLUMN_WIDTH: f64 = 100.0;

/// Minimum rendered height of a job block, in pixels.
pub const MIN_JOB_HEIGHT: f64 = 40.0;

/// Horizontal gap between neighbouring day columns, in pixels.
pub const COLUMN_PADDING: f64 = 8.0;

/// Fallback duration for jobs without usable times or category.
pub const DEFAULT_JOB_DURATION_MINUTES: u32 = 120;

pub const DOUBLE_CLICK_THRESHOLD_MS: u64 = 300;

pub const NOW_REFRESH_INTERVAL_MS: u64 = 60_000;

pub const EARTH_RADIUS_KM: f64 = 6371.0;

pub const DEFAULT_TIMEZONE: &str = "Africa/Johannesburg";
