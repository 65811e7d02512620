mod app_specific;
mod assignments;
mod calendar;

use salvo::Router;

// Re-export route constants from core
pub use plumbline_core::constants::{
    API_ROUTE_COMPONENT, API_ROUTE_PREFIX, ASSIGNMENT_ROUTE_COMPONENT, ASSIGNMENT_ROUTE_PREFIX,
    CALENDAR_ROUTE_COMPONENT, CALENDAR_ROUTE_PREFIX,
};

/// ## Summary
/// Constructs the main API router.
#[must_use]
pub fn routes() -> Router {
    Router::with_path(API_ROUTE_COMPONENT)
        .push(app_specific::routes())
        .push(calendar::routes())
        .push(assignments::routes())
}
