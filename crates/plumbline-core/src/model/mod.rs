//! Job and staff records as they arrive from the data-access layer.

pub mod geo;
pub mod job;
pub mod staff;
pub mod time;

pub use geo::GeoPoint;
pub use job::{Job, JobCategory, JobStatus};
pub use staff::{Role, ShiftWindow, Staff};
