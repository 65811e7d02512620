use std::str::FromStr;

use anyhow::Result;
use chrono::Weekday;
use chrono_tz::Tz;
use config::Config;
use serde::Deserialize;

use crate::constants::{
    DEFAULT_DAY_COLUMN_WIDTH, DEFAULT_TIME_SLOT_HEIGHT, DEFAULT_TIMEZONE, NOW_REFRESH_INTERVAL_MS,
};
use crate::error::{CoreError, CoreResult};

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub calendar: CalendarConfig,
    pub scoring: ScoringConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    /// ## Summary
    /// Returns the bind address in the format "host:port".
    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8710,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct CalendarConfig {
    /// Pixels per hour row.
    pub time_slot_height: f64,
    /// Pixels per day column.
    pub day_column_width: f64,
    /// First day of the week, e.g. `sunday` or `mon`.
    pub week_start: String,
    /// IANA zone used for the wall clock.
    pub timezone: String,
    pub now_refresh_ms: u64,
}

impl CalendarConfig {
    /// ## Summary
    /// Parses the configured week start.
    ///
    /// ## Errors
    /// Returns `CoreError::ConfigError` if the value is not a weekday name.
    pub fn week_start(&self) -> CoreResult<Weekday> {
        Weekday::from_str(self.week_start.trim()).map_err(|_err| {
            CoreError::ConfigError(format!("invalid week_start: {}", self.week_start))
        })
    }

    /// ## Summary
    /// Resolves the configured timezone name.
    ///
    /// ## Errors
    /// Returns `CoreError::UnknownTimezone` if the name is not a known IANA zone.
    pub fn timezone(&self) -> CoreResult<Tz> {
        Tz::from_str(self.timezone.trim())
            .map_err(|_err| CoreError::UnknownTimezone(self.timezone.clone()))
    }
}

impl Default for CalendarConfig {
    fn default() -> Self {
        Self {
            time_slot_height: DEFAULT_TIME_SLOT_HEIGHT,
            day_column_width: DEFAULT_DAY_COLUMN_WIDTH,
            week_start: "sunday".to_string(),
            timezone: DEFAULT_TIMEZONE.to_string(),
            now_refresh_ms: NOW_REFRESH_INTERVAL_MS,
        }
    }
}

/// Tunable weights of the assignment priority formula.
#[derive(Debug, Clone, Deserialize)]
pub struct ScoringConfig {
    pub distance_weight: f64,
    pub active_job_weight: f64,
    pub travel_time_weight: f64,
    pub same_zone_bonus: f64,
    pub outside_shift_penalty: f64,
    pub average_speed_kmh: f64,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            distance_weight: 2.0,
            active_job_weight: 5.0,
            travel_time_weight: 0.5,
            same_zone_bonus: 10.0,
            outside_shift_penalty: 20.0,
            average_speed_kmh: 40.0,
        }
    }
}

impl Settings {
    /// ## Summary
    /// Loads configuration from `.env` file, environment variables and an
    /// optional `config.toml` into `Settings`.
    ///
    /// ## Errors
    /// Returns an error if building the configuration or deserializing it fails.
    pub fn load() -> Result<Self> {
        let Self {
            server,
            logging,
            calendar,
            scoring,
        } = Self::default();

        Ok(Config::builder()
            .set_default("server.host", server.host)?
            .set_default("server.port", i64::from(server.port))?
            .set_default("logging.level", logging.level)?
            .set_default("calendar.time_slot_height", calendar.time_slot_height)?
            .set_default("calendar.day_column_width", calendar.day_column_width)?
            .set_default("calendar.week_start", calendar.week_start)?
            .set_default("calendar.timezone", calendar.timezone)?
            .set_default("calendar.now_refresh_ms", calendar.now_refresh_ms)?
            .set_default("scoring.distance_weight", scoring.distance_weight)?
            .set_default("scoring.active_job_weight", scoring.active_job_weight)?
            .set_default("scoring.travel_time_weight", scoring.travel_time_weight)?
            .set_default("scoring.same_zone_bonus", scoring.same_zone_bonus)?
            .set_default("scoring.outside_shift_penalty", scoring.outside_shift_penalty)?
            .set_default("scoring.average_speed_kmh", scoring.average_speed_kmh)?
            // TOML file
            .add_source(config::File::with_name("config.toml").required(false))
            // Env vars, e.g. PLUMBLINE_CALENDAR__TIMEZONE
            .add_source(
                config::Environment::with_prefix("PLUMBLINE")
                    .prefix_separator("_")
                    .separator("__")
                    .ignore_empty(true)
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize::<Settings>()?)
    }

    /// ## Summary
    /// Checks values that deserialize fine but are unusable.
    ///
    /// ## Errors
    /// Returns the first invalid setting found.
    pub fn validate(&self) -> CoreResult<()> {
        self.calendar.week_start()?;
        self.calendar.timezone()?;
        if self.calendar.now_refresh_ms == 0 {
            return Err(CoreError::ConfigError(
                "calendar.now_refresh_ms must be greater than zero".to_string(),
            ));
        }
        if !(self.scoring.average_speed_kmh.is_finite() && self.scoring.average_speed_kmh > 0.0) {
            return Err(CoreError::ConfigError(
                "scoring.average_speed_kmh must be a positive number".to_string(),
            ));
        }
        Ok(())
    }
}

/// ## Summary
/// Loads configuration from environment variables and `.env` file.
///
/// ## Errors
/// Returns an error if loading, deserializing or validating the configuration fails.
pub fn load_config() -> Result<Settings> {
    dotenvy::dotenv().ok();

    let settings = Settings::load()?;
    settings.validate()?;
    Ok(settings)
}

#[cfg(test)]
mod tests;
