use salvo::Router;

use plumbline_core::constants::CALENDAR_ROUTE_COMPONENT;

mod layout;

#[must_use]
pub fn routes() -> Router {
    Router::with_path(CALENDAR_ROUTE_COMPONENT)
        .push(Router::with_path("layout").post(layout::layout))
        .push(Router::with_path("jobs-on").post(layout::jobs_on_day))
}
