//! Tests for configuration module.

use super::*;

fn settings() -> Settings {
    Settings {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 8710,
        },
        logging: LoggingConfig {
            level: "debug".to_string(),
        },
        calendar: CalendarConfig::default(),
        scoring: ScoringConfig::default(),
    }
}

#[test_log::test]
fn test_default_settings_validate() {
    tracing::debug!("Validating default settings");
    assert!(settings().validate().is_ok());
}

#[test]
fn test_bind_addr() {
    assert_eq!(settings().server.bind_addr(), "127.0.0.1:8710");
}

#[test]
fn test_week_start_parses_names() {
    let mut calendar = CalendarConfig::default();
    assert_eq!(calendar.week_start().expect("default"), Weekday::Sun);

    calendar.week_start = "Monday".to_string();
    assert_eq!(calendar.week_start().expect("full name"), Weekday::Mon);

    calendar.week_start = "fortnight".to_string();
    assert!(matches!(
        calendar.week_start(),
        Err(CoreError::ConfigError(_))
    ));
}

#[test]
fn test_timezone_resolves_iana_name() {
    let mut calendar = CalendarConfig::default();
    assert_eq!(
        calendar.timezone().expect("default zone"),
        chrono_tz::Africa::Johannesburg
    );

    calendar.timezone = "Mars/Olympus_Mons".to_string();
    assert!(matches!(
        calendar.timezone(),
        Err(CoreError::UnknownTimezone(_))
    ));
}

#[test]
fn test_validate_rejects_zero_refresh() {
    let mut s = settings();
    s.calendar.now_refresh_ms = 0;
    assert!(s.validate().is_err());
}

#[test]
fn test_validate_rejects_non_positive_speed() {
    let mut s = settings();
    s.scoring.average_speed_kmh = 0.0;
    assert!(s.validate().is_err());

    s.scoring.average_speed_kmh = f64::NAN;
    assert!(s.validate().is_err());
}

#[test]
fn test_scoring_defaults() {
    let scoring = ScoringConfig::default();
    assert!((scoring.distance_weight - 2.0).abs() < f64::EPSILON);
    assert!((scoring.active_job_weight - 5.0).abs() < f64::EPSILON);
    assert!((scoring.travel_time_weight - 0.5).abs() < f64::EPSILON);
    assert!((scoring.same_zone_bonus - 10.0).abs() < f64::EPSILON);
    assert!((scoring.outside_shift_penalty - 20.0).abs() < f64::EPSILON);
    assert!((scoring.average_speed_kmh - 40.0).abs() < f64::EPSILON);
}

#[test]
fn test_settings_debug() {
    let debug_str = format!("{:?}", settings());
    assert!(debug_str.contains("Settings"));
    assert!(debug_str.contains("calendar"));
    assert!(debug_str.contains("scoring"));
}

#[test]
fn test_settings_default_matches_documented_values() {
    let defaults = Settings::default();
    assert_eq!(defaults.server.bind_addr(), "0.0.0.0:8710");
    assert_eq!(defaults.logging.level, "info");
    assert!((defaults.calendar.time_slot_height - 60.0).abs() < f64::EPSILON);
    assert!((defaults.calendar.day_column_width - 200.0).abs() < f64::EPSILON);
    assert_eq!(defaults.calendar.now_refresh_ms, 60_000);
    assert!(defaults.validate().is_ok());
}
