use serde::{Deserialize, Serialize};

use super::geo::GeoPoint;

pub const DEFAULT_SHIFT_START_HOUR: u32 = 5;
pub const DEFAULT_SHIFT_END_HOUR: u32 = 17;
pub const LATE_SHIFT_END_HOUR: u32 = 19;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    #[default]
    Staff,
    Supervisor,
}

impl Role {
    /// Only field workers are considered for job assignment.
    #[must_use]
    pub const fn is_field_worker(self) -> bool {
        matches!(self, Self::Staff)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Staff => "staff",
            Self::Supervisor => "supervisor",
        }
    }
}

/// Working hours as a half-open `[start_hour, end_hour)` range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShiftWindow {
    pub start_hour: u32,
    pub end_hour: u32,
}

impl ShiftWindow {
    #[must_use]
    pub const fn new(start_hour: u32, end_hour: u32) -> Self {
        Self {
            start_hour,
            end_hour,
        }
    }

    #[must_use]
    pub const fn contains_hour(&self, hour: u32) -> bool {
        hour >= self.start_hour && hour < self.end_hour
    }
}

/// A member of staff as loaded from the roster.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Staff {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub role: Role,
    #[serde(default)]
    pub location: Option<GeoPoint>,
    #[serde(default)]
    pub shift_start_hour: Option<u32>,
    #[serde(default)]
    pub shift_end_hour: Option<u32>,
    #[serde(default)]
    pub late_shift: bool,
}

impl Staff {
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>, role: Role) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            role,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_location(mut self, location: GeoPoint) -> Self {
        self.location = Some(location);
        self
    }

    /// ## Summary
    /// Resolves the configured shift, filling gaps with the normal (05–17)
    /// or late (05–19) defaults.
    #[must_use]
    pub fn shift_window(&self) -> ShiftWindow {
        let default_end = if self.late_shift {
            LATE_SHIFT_END_HOUR
        } else {
            DEFAULT_SHIFT_END_HOUR
        };
        ShiftWindow::new(
            self.shift_start_hour.unwrap_or(DEFAULT_SHIFT_START_HOUR),
            self.shift_end_hour.unwrap_or(default_end),
        )
    }
}
