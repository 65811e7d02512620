//! Calendar layout engine: turns scheduled jobs into day/week/month grid
//! geometry and locates the current-time line.

pub mod click;
pub mod grid;
pub mod layout;
pub mod ticker;
pub mod timeline;
pub mod view;

pub use click::{ClickDisambiguator, ClickDispatcher, ClickKind, ClickOutcome};
pub use grid::GridMetrics;
pub use layout::{CalendarLayout, JobPosition, compute_layout, job_duration_minutes, jobs_on};
pub use ticker::{NowTicker, WallClock, ZonedClock};
pub use timeline::{TimelineData, compute_timeline};
pub use view::{CalendarView, ViewMode, visible_days};
