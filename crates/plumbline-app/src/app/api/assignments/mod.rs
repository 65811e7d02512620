use salvo::Router;

use plumbline_core::constants::ASSIGNMENT_ROUTE_COMPONENT;

mod suggestions;

#[must_use]
pub fn routes() -> Router {
    Router::with_path(ASSIGNMENT_ROUTE_COMPONENT)
        .push(Router::with_path("suggestions").post(suggestions::suggestions))
}
