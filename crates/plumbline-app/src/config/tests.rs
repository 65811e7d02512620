use std::sync::Arc;

use salvo::http::StatusCode;
use salvo::prelude::*;
use salvo::test::{ResponseExt, TestClient};

use super::{ConfigHandler, Settings, get_config_from_depot};
use crate::error::AppError;

#[handler]
async fn show_port(depot: &mut Depot, res: &mut Response) {
    match get_config_from_depot(depot) {
        Ok(settings) => res.render(settings.server.port.to_string()),
        Err(e) => crate::error::render_error(res, &e),
    }
}

fn settings_on_port(port: u16) -> Settings {
    let mut settings = Settings::default();
    settings.server.port = port;
    settings
}

#[test]
fn test_missing_config_is_invariant_violation() {
    let depot = Depot::new();
    let err = get_config_from_depot(&depot).expect_err("nothing injected");
    assert!(matches!(
        err,
        AppError::CoreError(plumbline_core::error::CoreError::InvariantViolation(_))
    ));
    assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[test]
fn test_injected_config_is_returned() {
    let mut depot = Depot::new();
    depot.inject(Arc::new(settings_on_port(9100)));
    let settings = get_config_from_depot(&depot).expect("settings injected");
    assert_eq!(settings.server.port, 9100);
}

#[test]
fn test_handler_keeps_the_settings_it_was_given() {
    let handler = ConfigHandler::new(settings_on_port(9200));
    assert_eq!(handler.settings().server.port, 9200);
    assert_eq!(handler.settings().calendar.timezone, "Africa/Johannesburg");
}

#[tokio::test]
async fn test_hoop_exposes_settings_to_handlers() {
    let service = Service::new(
        Router::new()
            .hoop(ConfigHandler::new(settings_on_port(9300)))
            .push(Router::with_path("port").get(show_port)),
    );

    let mut resp = TestClient::get("http://127.0.0.1:5800/port")
        .send(&service)
        .await;

    assert_eq!(resp.status_code, Some(StatusCode::OK));
    assert_eq!(resp.take_string().await.expect("body"), "9300");
}

#[tokio::test]
async fn test_handler_without_hoop_returns_internal_error() {
    let service = Service::new(Router::new().push(Router::with_path("port").get(show_port)));

    let resp = TestClient::get("http://127.0.0.1:5800/port")
        .send(&service)
        .await;

    assert_eq!(resp.status_code, Some(StatusCode::INTERNAL_SERVER_ERROR));
}
